//! Reorder coordinator.
//!
//! Turns a drag-end gesture into a store move. Drops outside any target, on
//! unknown documents or across group boundaries are rejected without touching
//! the store. Filtered and grouped views are derived from the store on read,
//! so applying the move to the store is all that is needed to keep every view
//! consistent.

use super::store::DocumentStore;

/// A completed drag gesture.
///
/// `over_id` is `None` when the document was dropped outside any valid target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active_id: String,
    pub over_id: Option<String>,
}

impl DragEnd {
    #[must_use]
    pub fn new(active_id: impl Into<String>, over_id: Option<impl Into<String>>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id: over_id.map(Into::into),
        }
    }
}

/// What happened to a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The active document moved to the target's position.
    Moved,
    /// Dropped outside any target.
    NoTarget,
    /// One of the ids is not in the store.
    UnknownDocument,
    /// The documents belong to different groups.
    CrossGroup,
    /// Dropped onto itself.
    Unchanged,
}

impl ReorderOutcome {
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Applies a drag gesture to the store.
///
/// # Examples
///
/// ```
/// use docshelf::library::reorder::{apply_drag, DragEnd, ReorderOutcome};
/// use docshelf::{DocType, Document, DocumentStore};
///
/// let mut store = DocumentStore::new(vec![
///     Document::new("1", "a", DocType::Pdf).with_group("X"),
///     Document::new("2", "b", DocType::Pdf).with_group("Y"),
/// ]);
///
/// let drag = DragEnd::new("2", Some("1"));
/// assert_eq!(apply_drag(&mut store, &drag), ReorderOutcome::CrossGroup);
/// assert_eq!(apply_drag(&mut store, &DragEnd::new("2", None::<String>)), ReorderOutcome::NoTarget);
/// ```
pub fn apply_drag(store: &mut DocumentStore, drag: &DragEnd) -> ReorderOutcome {
    let _span = tracing::debug_span!("apply_drag", active_id = %drag.active_id, over_id = ?drag.over_id).entered();

    let Some(over_id) = drag.over_id.as_deref() else {
        tracing::debug!("dropped outside any target");
        return ReorderOutcome::NoTarget;
    };

    let (Some(active), Some(over)) = (store.get(&drag.active_id), store.get(over_id)) else {
        tracing::debug!("drag references an unknown document");
        return ReorderOutcome::UnknownDocument;
    };

    if active.group_key() != over.group_key() {
        tracing::debug!(
            active_group = active.group_key(),
            over_group = over.group_key(),
            "cross-group drag rejected"
        );
        return ReorderOutcome::CrossGroup;
    }

    if store.reorder(&drag.active_id, over_id) {
        ReorderOutcome::Moved
    } else {
        ReorderOutcome::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocType, Document};

    fn store() -> DocumentStore {
        DocumentStore::new(vec![
            Document::new("1", "a", DocType::Pdf).with_group("X"),
            Document::new("2", "b", DocType::Pdf).with_group("X"),
            Document::new("3", "c", DocType::Pdf).with_group("Y"),
        ])
    }

    fn ids(store: &DocumentStore) -> Vec<&str> {
        store.documents().iter().map(|d| d.doc_id.as_str()).collect()
    }

    #[test]
    fn same_group_drag_moves() {
        let mut s = store();
        assert_eq!(apply_drag(&mut s, &DragEnd::new("2", Some("1"))), ReorderOutcome::Moved);
        assert_eq!(ids(&s), ["2", "1", "3"]);
    }

    #[test]
    fn rejected_drags_leave_store_untouched() {
        let mut s = store();
        let before = s.clone();

        assert_eq!(apply_drag(&mut s, &DragEnd::new("3", Some("1"))), ReorderOutcome::CrossGroup);
        assert_eq!(apply_drag(&mut s, &DragEnd::new("1", None::<String>)), ReorderOutcome::NoTarget);
        assert_eq!(apply_drag(&mut s, &DragEnd::new("9", Some("1"))), ReorderOutcome::UnknownDocument);
        assert_eq!(apply_drag(&mut s, &DragEnd::new("1", Some("1"))), ReorderOutcome::Unchanged);
        assert_eq!(s, before);
    }
}
