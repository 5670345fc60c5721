//! Document domain model.
//!
//! This module defines the [`Document`] record shown in the library together with
//! its enumerated attributes ([`DocType`], [`DocStatus`]) and usage statistics.
//! Documents are plain values: the library core clones, filters and moves them
//! but never changes their status or statistics.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Group name used for documents without a (non-empty) group.
pub const UNGROUPED: &str = "Ungrouped";

/// Binary size units used by [`format_file_size`].
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Timestamp layouts accepted for `uploadTime`, tried in order.
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Kind of file a document holds.
///
/// Parsed case-insensitively. Common image extensions (`png`, `jpg`, ...) map to
/// [`DocType::Image`]; anything unrecognised becomes [`DocType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocType {
    Pdf,
    Docx,
    Xlsx,
    Image,
    Other,
}

impl DocType {
    /// All types in the order the filter panel lists them.
    pub const ALL: [Self; 5] = [Self::Pdf, Self::Docx, Self::Xlsx, Self::Image, Self::Other];

    /// Lowercase tag used in data files and commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Image => "image",
            Self::Other => "other",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            "image" | "png" | "jpg" | "jpeg" | "gif" | "webp" => Some(Self::Image),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = String;

    /// Strict parse used by the command parser: unknown tags are an error rather
    /// than silently becoming [`DocType::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unknown document type `{s}`"))
    }
}

impl From<String> for DocType {
    fn from(value: String) -> Self {
        Self::from_tag(&value).unwrap_or(Self::Other)
    }
}

impl From<DocType> for String {
    fn from(value: DocType) -> Self {
        value.as_str().to_string()
    }
}

/// Indexing status of a document.
///
/// `Processing` moves to `Indexed` or `IndexFailed`, both terminal. The
/// transitions are driven by an external indexer; this crate only displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocStatus {
    #[serde(alias = "处理中")]
    Processing,
    #[serde(alias = "已索引")]
    Indexed,
    #[serde(alias = "索引失败")]
    IndexFailed,
}

impl DocStatus {
    /// Short label shown in the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Indexed => "Indexed",
            Self::IndexFailed => "Index failed",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Indexed | Self::IndexFailed)
    }
}

/// Usage statistics collected by the search backend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocStatistics {
    /// How many searches touched this document.
    pub search_count: u64,
    /// Fraction of those searches that hit, in `[0, 1]`.
    pub hit_rate: f64,
}

/// A single document record in the library.
///
/// Serialized with the camelCase field names used by seed files
/// (`docId`, `docName`, `uploadTime`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique, session-stable identifier.
    pub doc_id: String,
    pub doc_name: String,
    pub doc_type: DocType,
    /// Size in bytes.
    pub doc_size: u64,
    /// Upload timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub upload_time: String,
    pub status: DocStatus,
    pub status_update_time: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// User-assigned bucket. `None` or empty means [`UNGROUPED`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub statistics: DocStatistics,
}

impl Document {
    /// Creates a document with the given identity and neutral metadata.
    ///
    /// Size is zero, status is `Processing`, timestamps are empty and no tag,
    /// group or preview is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use docshelf::{DocType, Document};
    ///
    /// let doc = Document::new("1", "plan.pdf", DocType::Pdf).with_group("Plans");
    /// assert_eq!(doc.group_key(), "Plans");
    /// assert_eq!(Document::new("2", "misc", DocType::Other).group_key(), "Ungrouped");
    /// ```
    #[must_use]
    pub fn new(doc_id: impl Into<String>, doc_name: impl Into<String>, doc_type: DocType) -> Self {
        Self {
            doc_id: doc_id.into(),
            doc_name: doc_name.into(),
            doc_type,
            doc_size: 0,
            upload_time: String::new(),
            status: DocStatus::Processing,
            status_update_time: String::new(),
            preview_url: None,
            tag: None,
            group: None,
            statistics: DocStatistics::default(),
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, doc_size: u64) -> Self {
        self.doc_size = doc_size;
        self
    }

    #[must_use]
    pub fn with_upload_time(mut self, upload_time: impl Into<String>) -> Self {
        self.upload_time = upload_time.into();
        self
    }

    /// Returns the name of the group this document is displayed under.
    #[must_use]
    pub fn group_key(&self) -> &str {
        match self.group.as_deref() {
            Some(group) if !group.is_empty() => group,
            _ => UNGROUPED,
        }
    }

    /// Calendar date of the upload, or `None` if `upload_time` is unparsable.
    #[must_use]
    pub fn upload_date(&self) -> Option<NaiveDate> {
        parse_date(&self.upload_time)
    }

    /// Human-readable size, e.g. `2 MB`.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_file_size(self.doc_size)
    }

    /// Hit rate as a percentage with one decimal, e.g. `85.0%`.
    #[must_use]
    pub fn hit_rate_percent(&self) -> String {
        format!("{:.1}%", self.statistics.hit_rate * 100.0)
    }
}

/// Extracts the calendar date from a timestamp or date-only string.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, the `T`-separated form, RFC 3339 and bare
/// `YYYY-MM-DD`. Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use docshelf::domain::parse_date;
///
/// assert!(parse_date("2024-01-20 10:00:00").is_some());
/// assert!(parse_date("2024-01-20").is_some());
/// assert!(parse_date("yesterday").is_none());
/// ```
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|t| t.date_naive()))
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

/// Formats a byte count with binary units and at most two decimals.
///
/// # Examples
///
/// ```
/// use docshelf::domain::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(2_097_152), "2 MB");
/// assert_eq!(format_file_size(1_572_864), "1.5 MB");
/// ```
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}
