//! Preview viewer selection.
//!
//! The library never fetches document content. A preview request resolves to
//! a [`Viewer`] describing which external viewer should display the
//! document's `preview_url`; embedding it is up to the front-end.
//!
//! # Example
//!
//! ```rust
//! use docshelf::preview::{PreviewTarget, Viewer};
//! use docshelf::DocType;
//!
//! let target = PreviewTarget {
//!     doc_name: "plan.pdf".to_string(),
//!     doc_type: DocType::Pdf,
//!     preview_url: Some("https://example.com/plan.pdf".to_string()),
//! };
//!
//! let viewer = Viewer::for_target(&target);
//! assert_eq!(
//!     viewer.url(),
//!     Some("https://docs.google.com/viewer?url=https%3A%2F%2Fexample.com%2Fplan.pdf&embedded=true")
//! );
//! ```

use crate::domain::{DocType, Document};
use std::fmt::Write as _;

const PDF_VIEWER: &str = "https://docs.google.com/viewer";
const OFFICE_VIEWER: &str = "https://view.officeapps.live.com/op/embed.aspx";

/// What the preview collaborator needs to know about a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTarget {
    pub doc_name: String,
    pub doc_type: DocType,
    pub preview_url: Option<String>,
}

impl From<&Document> for PreviewTarget {
    fn from(doc: &Document) -> Self {
        Self {
            doc_name: doc.doc_name.clone(),
            doc_type: doc.doc_type,
            preview_url: doc.preview_url.clone(),
        }
    }
}

/// External viewer chosen for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// Embedded PDF viewer wrapping the document URL.
    Pdf { url: String },
    /// Office web viewer for word processing and spreadsheet documents.
    Office { url: String },
    /// Images are shown directly.
    Image { url: String },
    /// No viewer is available for this document.
    Unsupported { message: String },
}

impl Viewer {
    /// Chooses a viewer by document type.
    ///
    /// Documents without a `preview_url` cannot be previewed regardless of type.
    #[must_use]
    pub fn for_target(target: &PreviewTarget) -> Self {
        let Some(source) = target.preview_url.as_deref().filter(|url| !url.trim().is_empty()) else {
            tracing::debug!(doc_name = %target.doc_name, "no preview url");
            return Self::Unsupported {
                message: format!("No preview available for {}", target.doc_name),
            };
        };

        match target.doc_type {
            DocType::Pdf => Self::Pdf {
                url: format!("{PDF_VIEWER}?url={}&embedded=true", encode_component(source)),
            },
            DocType::Docx | DocType::Xlsx => Self::Office {
                url: format!("{OFFICE_VIEWER}?src={}", encode_component(source)),
            },
            DocType::Image => Self::Image { url: source.to_string() },
            DocType::Other => Self::Unsupported {
                message: "Preview is not supported for this file format".to_string(),
            },
        }
    }

    /// URL to embed, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Pdf { url } | Self::Office { url } | Self::Image { url } => Some(url),
            Self::Unsupported { .. } => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Pdf { .. } => "pdf viewer",
            Self::Office { .. } => "office viewer",
            Self::Image { .. } => "image",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

/// Percent-encodes everything except unreserved URI characters.
fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(char::from(byte)),
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
