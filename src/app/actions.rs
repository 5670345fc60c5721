//! Actions representing side effects to be executed by the front-end.
//!
//! The event handler never performs I/O itself. Anything that leaves the
//! state core (opening a preview, showing charts, quitting) is returned as an
//! [`Action`] for the front-end to carry out.
//!
//! # Example
//!
//! ```rust
//! use docshelf::app::Action;
//! use docshelf::preview::Viewer;
//!
//! let actions = vec![
//!     Action::ShowPreview {
//!         doc_name: "photo.png".to_string(),
//!         viewer: Viewer::Image { url: "https://example.com/photo.png".to_string() },
//!     },
//!     Action::Quit,
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::preview::Viewer;
use crate::statistics::StatisticsReport;

/// Side effects requested by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Opens the preview dialog for a document.
    ShowPreview {
        /// Dialog title.
        doc_name: String,
        /// Viewer chosen for the document type.
        viewer: Viewer,
    },

    /// Shows the usage charts built from the canonical sequence.
    ShowStatistics(StatisticsReport),

    /// Ends the session. Nothing is persisted.
    Quit,
}
