//! Library core: the canonical store and the pure projections derived from it.
//!
//! # Modules
//!
//! - [`store`]: Canonical ordered document collection and its mutations
//! - [`filter`]: Keyword and structured filtering
//! - [`grouping`]: Partitioning of a document sequence into named groups
//! - [`reorder`]: Drag gesture handling on top of the store
//! - [`selection`]: Set of selected document ids
//! - [`seed`]: Built-in and file-backed seed data
//!
//! The store is the only stateful piece. Filtered and grouped views are
//! recomputed from it on every read and never stored.
//!
//! # Example
//!
//! ```
//! use docshelf::library::{filter, grouping, DocumentStore};
//! use docshelf::FilterOptions;
//!
//! let store = DocumentStore::new(docshelf::library::seed::builtin_documents()?);
//! let visible = filter::apply(store.documents(), "", &FilterOptions::default());
//! let view = grouping::group(&visible);
//! assert_eq!(view.document_count(), store.len());
//! # Ok::<(), docshelf::DocShelfError>(())
//! ```

pub mod filter;
pub mod grouping;
pub mod reorder;
pub mod seed;
pub mod selection;
pub mod store;

pub use filter::{apply, KeywordMatcher};
pub use grouping::{group, GroupedView};
pub use reorder::{apply_drag, DragEnd, ReorderOutcome};
pub use selection::Selection;
pub use store::DocumentStore;
