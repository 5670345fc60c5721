//! Canonical document store.
//!
//! [`DocumentStore`] owns the authoritative ordered sequence of documents for
//! the session. Every other view (filtered, grouped) is derived from it on
//! read. Mutations never touch `status`, `statistics` or any field other than
//! position and `group`.

use crate::domain::{Document, UNGROUPED};
use std::collections::HashSet;

/// Authoritative, ordered collection of documents.
///
/// # Examples
///
/// ```
/// use docshelf::{DocType, Document, DocumentStore};
///
/// let mut store = DocumentStore::new(vec![
///     Document::new("1", "a.pdf", DocType::Pdf).with_group("X"),
///     Document::new("2", "b.pdf", DocType::Pdf).with_group("X"),
///     Document::new("3", "c.pdf", DocType::Pdf).with_group("Y"),
/// ]);
///
/// assert!(!store.reorder("3", "1"));
/// assert!(store.reorder("2", "1"));
/// let ids: Vec<&str> = store.documents().iter().map(|d| d.doc_id.as_str()).collect();
/// assert_eq!(ids, ["2", "1", "3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Creates a store from an ordered sequence.
    ///
    /// Callers are responsible for `doc_id` uniqueness; the seed loader
    /// enforces it for data read from files.
    #[must_use]
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[must_use]
    pub fn get(&self, doc_id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.doc_id == doc_id)
    }

    #[must_use]
    pub fn contains(&self, doc_id: &str) -> bool {
        self.position(doc_id).is_some()
    }

    fn position(&self, doc_id: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc.doc_id == doc_id)
    }

    /// Group names in first-seen order, as offered for batch moves.
    #[must_use]
    pub fn group_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.documents
            .iter()
            .map(Document::group_key)
            .filter(|name| seen.insert(*name))
            .map(String::from)
            .collect()
    }

    /// Moves `source_id` to the index currently held by `target_id`.
    ///
    /// This is a single-element move (remove, then insert), not a swap. The
    /// move only happens when both ids resolve and both documents are displayed
    /// under the same group; otherwise the store is left untouched.
    ///
    /// Returns `true` if the order changed.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        let (Some(from), Some(to)) = (self.position(source_id), self.position(target_id)) else {
            tracing::debug!(source_id, target_id, "reorder skipped: unknown document");
            return false;
        };

        if self.documents[from].group_key() != self.documents[to].group_key() {
            tracing::debug!(source_id, target_id, "reorder skipped: documents in different groups");
            return false;
        }

        if from == to {
            return false;
        }

        let moved = self.documents.remove(from);
        self.documents.insert(to, moved);

        tracing::debug!(source_id, target_id, from, to, "document reordered");
        true
    }

    /// Assigns `target_group` to every document whose id is in `ids`.
    ///
    /// Order is unchanged. An empty target or the [`UNGROUPED`] sentinel clears
    /// the group. Returns the number of documents updated.
    pub fn batch_move(&mut self, ids: &HashSet<String>, target_group: &str) -> usize {
        if ids.is_empty() {
            return 0;
        }

        let target_group = target_group.trim();
        let group = if target_group.is_empty() || target_group == UNGROUPED {
            None
        } else {
            Some(target_group.to_string())
        };

        let mut moved = 0;
        for doc in self.documents.iter_mut().filter(|doc| ids.contains(&doc.doc_id)) {
            doc.group.clone_from(&group);
            moved += 1;
        }

        tracing::debug!(requested = ids.len(), moved, target_group, "batch move applied");
        moved
    }

    /// Removes every document whose id is in `ids`, keeping the rest in order.
    ///
    /// Returns the number of documents removed.
    pub fn batch_delete(&mut self, ids: &HashSet<String>) -> usize {
        if ids.is_empty() {
            return 0;
        }

        let before = self.documents.len();
        self.documents.retain(|doc| !ids.contains(&doc.doc_id));
        let deleted = before - self.documents.len();

        tracing::debug!(requested = ids.len(), deleted, "batch delete applied");
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocType;

    fn store(specs: &[(&str, Option<&str>)]) -> DocumentStore {
        DocumentStore::new(
            specs
                .iter()
                .map(|(id, group)| {
                    let doc = Document::new(*id, format!("doc-{id}"), DocType::Pdf);
                    match group {
                        Some(group) => doc.with_group(*group),
                        None => doc,
                    }
                })
                .collect(),
        )
    }

    fn ids(store: &DocumentStore) -> Vec<&str> {
        store.documents().iter().map(|d| d.doc_id.as_str()).collect()
    }

    fn id_set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn reorder_moves_single_element_forward_and_backward() {
        let mut s = store(&[("1", Some("X")), ("2", Some("X")), ("3", Some("X")), ("4", Some("X"))]);
        assert!(s.reorder("1", "3"));
        assert_eq!(ids(&s), ["2", "3", "1", "4"]);
        assert!(s.reorder("4", "2"));
        assert_eq!(ids(&s), ["4", "2", "3", "1"]);
    }

    #[test]
    fn reorder_rejects_cross_group_and_unknown_ids() {
        let mut s = store(&[("1", Some("X")), ("2", Some("X")), ("3", Some("Y"))]);
        let before = s.clone();
        assert!(!s.reorder("3", "1"));
        assert!(!s.reorder("1", "missing"));
        assert!(!s.reorder("missing", "1"));
        assert_eq!(s, before);
    }

    #[test]
    fn reorder_treats_missing_and_empty_group_as_same_bucket() {
        let mut s = store(&[("1", None), ("2", Some(""))]);
        assert!(s.reorder("2", "1"));
        assert_eq!(ids(&s), ["2", "1"]);
    }

    #[test]
    fn reorder_onto_itself_is_a_no_op() {
        let mut s = store(&[("1", Some("X")), ("2", Some("X"))]);
        assert!(!s.reorder("2", "2"));
        assert_eq!(ids(&s), ["1", "2"]);
    }

    #[test]
    fn batch_move_updates_group_only() {
        let mut s = store(&[("1", Some("X")), ("2", Some("Y")), ("3", Some("Y"))]);
        let moved = s.batch_move(&id_set(&["1", "3", "nope"]), "Z");
        assert_eq!(moved, 2);
        assert_eq!(ids(&s), ["1", "2", "3"]);
        assert_eq!(s.get("1").and_then(|d| d.group.as_deref()), Some("Z"));
        assert_eq!(s.get("2").and_then(|d| d.group.as_deref()), Some("Y"));
        assert_eq!(s.get("3").and_then(|d| d.group.as_deref()), Some("Z"));
    }

    #[test]
    fn batch_move_to_ungrouped_clears_group() {
        let mut s = store(&[("1", Some("X"))]);
        s.batch_move(&id_set(&["1"]), UNGROUPED);
        assert_eq!(s.get("1").map(|d| d.group.clone()), Some(None));
    }

    #[test]
    fn batch_operations_with_empty_ids_are_no_ops() {
        let mut s = store(&[("1", Some("X"))]);
        let before = s.clone();
        assert_eq!(s.batch_move(&HashSet::new(), "Z"), 0);
        assert_eq!(s.batch_delete(&HashSet::new()), 0);
        assert_eq!(s, before);
    }

    #[test]
    fn batch_delete_removes_listed_ids_and_keeps_order() {
        let mut s = store(&[("1", None), ("2", None), ("3", None), ("4", None)]);
        assert_eq!(s.batch_delete(&id_set(&["2", "4", "9"])), 2);
        assert_eq!(ids(&s), ["1", "3"]);
        assert!(!s.contains("2"));
    }

    #[test]
    fn group_names_follow_first_occurrence() {
        let s = store(&[("1", Some("B")), ("2", None), ("3", Some("A")), ("4", Some("B"))]);
        assert_eq!(s.group_names(), ["B", UNGROUPED, "A"]);
    }
}
