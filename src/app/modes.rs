//! Presentation mode for the document library.
//!
//! The view mode only decides how the grouped view is laid out. It never
//! changes which documents are visible or in what order.
//!
//! # Example
//!
//! ```rust
//! use docshelf::app::modes::ViewMode;
//!
//! let mode: ViewMode = "grid".parse().unwrap();
//! assert_eq!(mode, ViewMode::Grid);
//! assert_eq!(ViewMode::default(), ViewMode::List);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout used to render the grouped view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One row per document with size, upload time and status columns.
    #[default]
    List,

    /// Compact tiles, several per row.
    Grid,

    /// One block per document including tag and usage statistics.
    Card,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::List, Self::Grid, Self::Card];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
            Self::Card => "card",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "grid" => Ok(Self::Grid),
            "card" => Ok(Self::Card),
            other => Err(format!("unknown view mode `{other}` (expected list, grid or card)")),
        }
    }
}
