//! Structured filter options for the document library.
//!
//! [`FilterOptions`] carries the optional type, size and date constraints set
//! in the advanced filter panel. Every field is optional and every bound is
//! open when absent, so `FilterOptions::default()` matches everything.

use super::document::{parse_date, DocType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

const MIB: u64 = 1024 * 1024;

/// Inclusive byte-size bounds. A missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

impl SizeRange {
    #[must_use]
    pub const fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, size: u64) -> bool {
        self.min.map_or(true, |min| size >= min) && self.max.map_or(true, |max| size <= max)
    }
}

/// Inclusive upload-date bounds as `YYYY-MM-DD` strings.
///
/// Empty strings are treated like absent bounds, which is what a cleared date
/// input produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// A parsed date bound.
enum Bound {
    Open,
    At(NaiveDate),
    Malformed,
}

impl Bound {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Open,
            Some(value) => parse_date(value).map_or(Self::Malformed, Self::At),
        }
    }
}

impl DateRange {
    #[must_use]
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(String::from),
            end: end.map(String::from),
        }
    }

    /// Returns `true` when neither bound constrains anything.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(Bound::parse(self.start.as_deref()), Bound::Open)
            && matches!(Bound::parse(self.end.as_deref()), Bound::Open)
    }

    /// Checks an upload date against the bounds.
    ///
    /// An unknown date (`None`) or a malformed bound never matches a
    /// constrained range; an open range matches everything.
    #[must_use]
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        let start = Bound::parse(self.start.as_deref());
        let end = Bound::parse(self.end.as_deref());

        if matches!((&start, &end), (Bound::Open, Bound::Open)) {
            return true;
        }
        let Some(date) = date else {
            return false;
        };

        let after_start = match start {
            Bound::Open => true,
            Bound::At(start) => date >= start,
            Bound::Malformed => false,
        };
        let before_end = match end {
            Bound::Open => true,
            Bound::At(end) => date <= end,
            Bound::Malformed => false,
        };
        after_start && before_end
    }
}

/// Size buckets offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    /// Up to 1 MiB.
    Small,
    /// 1 MiB to 5 MiB.
    Medium,
    /// 5 MiB and above.
    Large,
}

impl SizePreset {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub const fn range(self) -> SizeRange {
        match self {
            Self::Small => SizeRange::new(Some(0), Some(MIB)),
            Self::Medium => SizeRange::new(Some(MIB), Some(5 * MIB)),
            Self::Large => SizeRange::new(Some(5 * MIB), None),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "< 1MB",
            Self::Medium => "1MB - 5MB",
            Self::Large => "> 5MB",
        }
    }
}

impl FromStr for SizePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "<1mb" => Ok(Self::Small),
            "medium" | "1-5mb" => Ok(Self::Medium),
            "large" | ">5mb" => Ok(Self::Large),
            other => Err(format!("unknown size preset `{other}` (expected small, medium or large)")),
        }
    }
}

/// Structured filter criteria.
///
/// # Examples
///
/// ```
/// use docshelf::{DocType, FilterOptions, SizePreset};
///
/// let mut options = FilterOptions::default();
/// assert!(options.is_identity());
///
/// options.toggle_doc_type(DocType::Pdf);
/// options.merge(FilterOptions::default().with_size_range(SizePreset::Small.range()));
/// assert!(options.doc_type.as_ref().is_some_and(|types| types.contains(&DocType::Pdf)));
/// assert!(options.size_range.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Allowed types; `None` or empty means any type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<BTreeSet<DocType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_range: Option<SizeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl FilterOptions {
    #[must_use]
    pub fn with_doc_types(mut self, types: impl IntoIterator<Item = DocType>) -> Self {
        self.doc_type = Some(types.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_size_range(mut self, range: SizeRange) -> Self {
        self.size_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Returns `true` if these options match every document.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.doc_type.as_ref().map_or(true, BTreeSet::is_empty)
            && self.size_range.map_or(true, |range| range.min.is_none() && range.max.is_none())
            && self.date_range.as_ref().map_or(true, DateRange::is_open)
    }

    /// Adds `doc_type` to the allowed set, or removes it if already present.
    pub fn toggle_doc_type(&mut self, doc_type: DocType) {
        let types = self.doc_type.get_or_insert_with(BTreeSet::new);
        if !types.remove(&doc_type) {
            types.insert(doc_type);
        }
    }

    /// Sets the lower date bound, keeping the upper one.
    pub fn set_date_start(&mut self, start: impl Into<String>) {
        self.date_range.get_or_insert_with(DateRange::default).start = Some(start.into());
    }

    /// Sets the upper date bound, keeping the lower one.
    pub fn set_date_end(&mut self, end: impl Into<String>) {
        self.date_range.get_or_insert_with(DateRange::default).end = Some(end.into());
    }

    /// Overwrites every field that `update` sets, leaving the others untouched.
    pub fn merge(&mut self, update: Self) {
        if update.doc_type.is_some() {
            self.doc_type = update.doc_type;
        }
        if update.size_range.is_some() {
            self.size_range = update.size_range;
        }
        if update.date_range.is_some() {
            self.date_range = update.date_range;
        }
    }
}
