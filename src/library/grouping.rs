//! Grouping projector.
//!
//! Partitions a document sequence into named buckets. Groups appear in the
//! order they are first seen and documents keep their relative order inside
//! each group, so grouping a filtered view never changes what the user sees
//! beyond adding section headers.

use crate::domain::Document;

/// Ordered mapping from group name to the documents displayed under it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedView {
    groups: Vec<(String, Vec<Document>)>,
}

impl GroupedView {
    /// Iterates groups in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Document])> {
        self.groups.iter().map(|(name, docs)| (name.as_str(), docs.as_slice()))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Document]> {
        self.groups
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, docs)| docs.as_slice())
    }

    #[must_use]
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of documents across all groups.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.groups.iter().map(|(_, docs)| docs.len()).sum()
    }
}

/// Groups `documents` by [`Document::group_key`].
///
/// # Examples
///
/// ```
/// use docshelf::library::grouping::group;
/// use docshelf::{DocType, Document};
///
/// let docs = vec![
///     Document::new("1", "a", DocType::Pdf).with_group("Y"),
///     Document::new("2", "b", DocType::Pdf),
///     Document::new("3", "c", DocType::Pdf).with_group("Y"),
/// ];
///
/// let view = group(&docs);
/// assert_eq!(view.group_names(), ["Y", "Ungrouped"]);
/// assert_eq!(view.get("Y").map(<[_]>::len), Some(2));
/// ```
#[must_use]
pub fn group(documents: &[Document]) -> GroupedView {
    let mut groups: Vec<(String, Vec<Document>)> = Vec::new();

    for doc in documents {
        let key = doc.group_key();
        match groups.iter_mut().find(|(name, _)| name == key) {
            Some((_, bucket)) => bucket.push(doc.clone()),
            None => groups.push((key.to_string(), vec![doc.clone()])),
        }
    }

    tracing::trace!(groups = groups.len(), documents = documents.len(), "documents grouped");
    GroupedView { groups }
}
