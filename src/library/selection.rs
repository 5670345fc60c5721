//! Selection manager.

use std::collections::HashSet;

/// Set of selected document ids.
///
/// Membership changes one id at a time via [`Selection::toggle`]; batch
/// operations consume the whole set and then [`Selection::clear`] it.
///
/// # Examples
///
/// ```
/// use docshelf::Selection;
///
/// let mut selection = Selection::default();
/// selection.toggle("1");
/// assert!(selection.is_selected("1"));
/// selection.toggle("1");
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    /// Adds `doc_id` if absent, removes it if present.
    ///
    /// Returns `true` if the id is selected after the call.
    pub fn toggle(&mut self, doc_id: &str) -> bool {
        if self.ids.remove(doc_id) {
            false
        } else {
            self.ids.insert(doc_id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn is_selected(&self, doc_id: &str) -> bool {
        self.ids.contains(doc_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub const fn ids(&self) -> &HashSet<String> {
        &self.ids
    }
}
