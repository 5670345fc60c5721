//! Domain layer for docshelf.
//!
//! This module contains the core value types of the document library,
//! independent of rendering or terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`document`]: Document record, type/status enums and display helpers
//! - [`filter_options`]: Structured filter criteria and size presets
//!
//! # Examples
//!
//! ```
//! use docshelf::domain::{DocType, Document, Result};
//!
//! fn create_document() -> Result<Document> {
//!     Ok(Document::new("42", "roadmap.pdf", DocType::Pdf).with_group("Plans"))
//! }
//! # assert!(create_document().is_ok());
//! ```

pub mod document;
pub mod error;
pub mod filter_options;

pub use document::{
    format_file_size, parse_date, DocStatistics, DocStatus, DocType, Document, UNGROUPED,
};
pub use error::{DocShelfError, Result};
pub use filter_options::{DateRange, FilterOptions, SizePreset, SizeRange};
