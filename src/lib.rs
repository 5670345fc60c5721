//! Docshelf: an in-memory document library with grouped ordering.
//!
//! Docshelf keeps a canonical ordered list of documents and derives what the
//! user sees from it:
//! - Keyword search over document names and tags (case-insensitive substring)
//! - Structured filters by type, size range and upload date range
//! - A grouped projection that preserves canonical order inside each group
//! - Drag-and-drop reordering that never moves a document across groups
//! - Multi-selection with batch move and batch delete
//! - Preview viewer resolution and per-document usage statistics
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line-oriented front-end (main.rs)                  │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Command parsing                                  │
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Library Core  │   │ Panels        │
//! │ (ui/)         │   │ (library/)    │   │               │
//! │ - Rendering   │   │ - Store       │   │ - preview     │
//! │ - Theming     │   │ - Filter      │   │ - statistics  │
//! │ - Components  │   │ - Grouping    │   │               │
//! │               │   │ - Reorder     │   │               │
//! │               │   │ - Selection   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Document model and filter criteria (domain/)     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON trace file with size-based rotation         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Derived View
//!
//! The filtered list and the grouped view are never stored. Every read
//! recomputes them from the store, the keyword and the filter options, so
//! a reorder or batch operation can never leave a stale projection behind.
//!
//! # Configuration
//!
//! The binary takes `key=value` arguments (or a TOML file via `config=<path>`):
//!
//! ```toml
//! seed_file = "~/library.json"
//! theme_name = "docshelf-light"
//! trace_level = "debug"
//! view_mode = "card"
//! width = 120
//! ```
//!
//! # Examples
//!
//! ```rust
//! use docshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (needs_render, _actions) = handle_event(&mut state, &Event::Search("报告".to_string()))?;
//! assert!(needs_render);
//! assert!(state.visible_documents().iter().all(|d| d.doc_name.contains("报告")));
//! # Ok::<(), docshelf::DocShelfError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod library;
pub mod observability;
pub mod preview;
pub mod statistics;
pub mod ui;

pub use app::{handle_event, parse_command, Action, AppState, Event, ViewMode};
pub use domain::{
    DateRange, DocShelfError, DocStatus, DocType, Document, FilterOptions, Result, SizePreset, SizeRange,
    UNGROUPED,
};
pub use library::{DocumentStore, DragEnd, GroupedView, ReorderOutcome, Selection};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const DEFAULT_WIDTH: usize = 100;

/// Start-up configuration.
///
/// Every field is optional in the sources it is read from; missing values
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file with the initial documents. The built-in seed is used when unset.
    pub seed_file: Option<String>,

    pub theme_name: Option<String>,

    /// Path to a custom theme TOML. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub trace_level: Option<String>,

    pub view_mode: ViewMode,

    /// Terminal width used for rendering.
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            view_mode: ViewMode::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Builds a config from `key=value` pairs.
    ///
    /// Recognized keys: `seed`, `theme`, `theme_file`, `trace_level`, `view`
    /// and `width`. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DocShelfError::Config`] when `view` or `width` cannot be parsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use docshelf::{Config, ViewMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("view".to_string(), "grid".to_string());
    /// map.insert("width".to_string(), "80".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.view_mode, ViewMode::Grid);
    /// assert_eq!(config.width, 80);
    /// # Ok::<(), docshelf::DocShelfError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let non_empty = |key: &str| map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from);

        let view_mode = match map.get("view") {
            Some(value) => value.parse::<ViewMode>().map_err(DocShelfError::Config)?,
            None => ViewMode::default(),
        };

        let width = match map.get("width") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|w| *w > 0)
                .ok_or_else(|| DocShelfError::Config(format!("width must be a positive integer, got `{value}`")))?,
            None => DEFAULT_WIDTH,
        };

        Ok(Self {
            seed_file: non_empty("seed"),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            view_mode,
            width,
        })
    }

    /// Builds a config from command-line `key=value` arguments.
    ///
    /// `config=<path>` loads a TOML file instead and cannot be combined with
    /// other keys.
    ///
    /// # Errors
    ///
    /// Returns [`DocShelfError::Config`] for an argument without `=`, for
    /// `config` mixed with other keys, or for values [`Config::from_map`]
    /// rejects. File errors are those of [`Config::from_file`].
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut map = BTreeMap::new();
        for arg in args {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| DocShelfError::Config(format!("expected key=value, got `{arg}`")))?;
            map.insert(key.trim().to_string(), value.to_string());
        }

        match map.remove("config") {
            Some(_) if !map.is_empty() => {
                let others = map.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
                Err(DocShelfError::Config(format!("`config` cannot be combined with other arguments ({others})")))
            }
            Some(path) => Self::from_file(infrastructure::expand_tilde(&path)),
            None => Self::from_map(&map),
        }
    }

    /// Reads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DocShelfError::Io`] if the file cannot be read, or
    /// [`DocShelfError::Config`] if it is not valid TOML for this struct.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| DocShelfError::Config(format!("failed to parse config TOML: {e}")))?;
        if config.width == 0 {
            return Err(DocShelfError::Config("width must be a positive integer".to_string()));
        }
        Ok(config)
    }
}

/// Builds the initial application state.
///
/// Unreadable seed or theme files are logged and replaced by the built-in
/// defaults, so start-up always succeeds.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let documents = config.seed_file.as_ref().map_or_else(load_builtin_seed, |seed_file| {
        let path = infrastructure::expand_tilde(seed_file);
        library::seed::load_documents(&path).unwrap_or_else(|e| {
            tracing::warn!(seed_file = %seed_file, error = %e, "failed to load seed file, using built-in documents");
            load_builtin_seed()
        })
    });

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    tracing::debug!(documents = documents.len(), theme = %theme.name, view_mode = %config.view_mode, "state initialized");

    let mut state = AppState::new(documents, theme);
    state.view_mode = config.view_mode;
    state
}

fn load_builtin_seed() -> Vec<Document> {
    library::seed::builtin_documents().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "built-in seed is invalid, starting empty");
        Vec::new()
    })
}
