//! Theme management and ANSI escape sequence generation.
//!
//! Supports built-in themes embedded in the binary and custom themes loaded
//! from TOML files. Colors are hex strings converted to 24-bit ANSI escapes.
//!
//! # Built-in Themes
//!
//! - `docshelf-dark`: Dark background (default)
//! - `docshelf-light`: Light background
//! - `high-contrast`: Saturated colors on black
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6edf3"
//! header_bg = "#155aef"          # optional
//! selection_fg = "#0d1117"
//! selection_bg = "#79c0ff"
//! text_normal = "#e6edf3"
//! text_dim = "#7d8590"
//! border = "#30363d"
//! search_bar_border = "#155aef"
//! match_highlight_fg = "#0d1117"
//! match_highlight_bg = "#f2cc60"
//! empty_state_fg = "#79c0ff"
//! group_header_fg = "#d2a8ff"
//! status_processing = "#f2cc60"
//! status_indexed = "#56d364"
//! status_failed = "#f85149"
//! ```
//!
//! # Example
//!
//! ```rust
//! use docshelf::ui::theme::Theme;
//!
//! let theme = Theme::from_name("docshelf-light").unwrap();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.ends_with("\u{1b}[0m"));
//! assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
//! # assert_eq!(theme.name, "docshelf-light");
//! ```

use crate::domain::error::{DocShelfError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "docshelf-dark";

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 3] = ["docshelf-dark", "docshelf-light", "high-contrast"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected document foreground.
    pub selection_fg: String,
    /// Selected document background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (sizes, timestamps, footer).
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Keyword match foreground.
    pub match_highlight_fg: String,
    /// Keyword match background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Group section titles.
    pub group_header_fg: String,

    pub status_processing: String,
    pub status_indexed: String,
    pub status_failed: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of [`BUILTIN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "docshelf-dark" => include_str!("../../themes/docshelf-dark.toml"),
            "docshelf-light" => include_str!("../../themes/docshelf-light.toml"),
            "high-contrast" => include_str!("../../themes/high-contrast.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DocShelfError::Io`] if the file cannot be read and
    /// [`DocShelfError::Theme`] if the TOML is invalid or misses a color.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| DocShelfError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB. Malformed colors become white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the embedded default theme ever fails to parse.
    fn fallback() -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: color("#ffffff"),
                header_bg: None,
                selection_fg: color("#000000"),
                selection_bg: color("#ffffff"),
                text_normal: color("#ffffff"),
                text_dim: color("#808080"),
                border: color("#808080"),
                search_bar_border: color("#ffffff"),
                match_highlight_fg: color("#000000"),
                match_highlight_bg: color("#ffff00"),
                empty_state_fg: color("#ffffff"),
                group_header_fg: color("#ffffff"),
                status_processing: color("#ffff00"),
                status_indexed: color("#00ff00"),
                status_failed: color("#ff0000"),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the `docshelf-dark` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| {
            tracing::warn!("built-in default theme failed to parse, using fallback palette");
            Self::fallback()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("theme {name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("nope").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#155aef"), "\u{1b}[38;2;21;90;239m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_from_file() {
        let builtin = include_str!("../../themes/docshelf-light.toml").replace("docshelf-light", "mine");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(builtin.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(DocShelfError::Theme(_))));
    }
}
