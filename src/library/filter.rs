//! Keyword and structured filtering.
//!
//! [`apply`] is a pure, order-preserving function over a document slice. The
//! keyword and the structured [`FilterOptions`] are independent criteria and
//! are always ANDed together.

use crate::domain::{Document, FilterOptions};

/// Case-insensitive keyword matcher over document name and tag.
///
/// The lowercased needle is computed once per filter pass.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    needle: Option<String>,
}

impl KeywordMatcher {
    /// Builds a matcher. Empty or whitespace-only keywords match everything.
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        let keyword = keyword.trim();
        Self {
            needle: (!keyword.is_empty()).then(|| keyword.to_lowercase()),
        }
    }

    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        doc.doc_name.to_lowercase().contains(needle.as_str())
            || doc
                .tag
                .as_deref()
                .is_some_and(|tag| tag.to_lowercase().contains(needle.as_str()))
    }

    /// Char-index ranges of every occurrence of the keyword in `text`.
    ///
    /// Used by the view model to highlight matches. Ranges are `(start, end)`
    /// with an exclusive end, counted in chars.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        let Some(needle) = &self.needle else {
            return vec![];
        };

        let haystack: Vec<char> = text.to_lowercase().chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        // Lowercasing can change char counts for a few scripts; skip highlighting then.
        if haystack.len() != text.chars().count() || needle.len() > haystack.len() {
            return vec![];
        }

        let mut ranges = Vec::new();
        let mut start = 0;
        while start + needle.len() <= haystack.len() {
            if haystack[start..start + needle.len()] == needle[..] {
                ranges.push((start, start + needle.len()));
                start += needle.len();
            } else {
                start += 1;
            }
        }
        ranges
    }
}

/// Returns `true` if `doc` satisfies every active structured criterion.
#[must_use]
pub fn matches_options(doc: &Document, options: &FilterOptions) -> bool {
    let type_ok = options
        .doc_type
        .as_ref()
        .map_or(true, |types| types.is_empty() || types.contains(&doc.doc_type));
    let size_ok = options.size_range.map_or(true, |range| range.contains(doc.doc_size));
    let date_ok = options
        .date_range
        .as_ref()
        .map_or(true, |range| range.contains(doc.upload_date()));

    type_ok && size_ok && date_ok
}

/// Filters `documents` by keyword and structured options.
///
/// The result keeps the input's relative order. `apply(docs, "", &default)`
/// returns `docs` unchanged.
///
/// # Examples
///
/// ```
/// use docshelf::library::filter::apply;
/// use docshelf::{DocType, Document, FilterOptions};
///
/// let docs = vec![
///     Document::new("1", "Quarterly report.pdf", DocType::Pdf),
///     Document::new("2", "Design.png", DocType::Image).with_tag("report"),
///     Document::new("3", "Notes.docx", DocType::Docx),
/// ];
///
/// let hits = apply(&docs, "REPORT", &FilterOptions::default());
/// assert_eq!(hits.len(), 2);
///
/// let pdfs = apply(&docs, "report", &FilterOptions::default().with_doc_types([DocType::Pdf]));
/// assert_eq!(pdfs.len(), 1);
/// ```
#[must_use]
pub fn apply(documents: &[Document], keyword: &str, options: &FilterOptions) -> Vec<Document> {
    let _span = tracing::debug_span!(
        "filter_documents",
        total = documents.len(),
        keyword_len = keyword.len(),
        structured = !options.is_identity()
    )
    .entered();

    let matcher = KeywordMatcher::new(keyword);
    let filtered: Vec<Document> = documents
        .iter()
        .filter(|doc| matcher.matches(doc) && matches_options(doc, options))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filter applied");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateRange, DocType, SizeRange};

    fn docs() -> Vec<Document> {
        vec![
            Document::new("1", "Marketing plan.pdf", DocType::Pdf)
                .with_tag("marketing")
                .with_size(1_000)
                .with_upload_time("2024-01-20 10:00:00"),
            Document::new("2", "Handbook.docx", DocType::Docx)
                .with_tag("Product")
                .with_size(2_000)
                .with_upload_time("2024-01-19 15:30:00"),
            Document::new("3", "Analysis.pdf", DocType::Pdf)
                .with_size(3_000)
                .with_upload_time("not a date"),
        ]
    }

    fn ids(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.doc_id.as_str()).collect()
    }

    #[test]
    fn identity_filter_returns_input() {
        let input = docs();
        assert_eq!(apply(&input, "", &FilterOptions::default()), input);
        assert_eq!(apply(&input, "   ", &FilterOptions::default()), input);
    }

    #[test]
    fn keyword_matches_name_or_tag_case_insensitively() {
        let input = docs();
        assert_eq!(ids(&apply(&input, "PLAN", &FilterOptions::default())), ["1"]);
        assert_eq!(ids(&apply(&input, "product", &FilterOptions::default())), ["2"]);
        assert!(apply(&input, "zzz", &FilterOptions::default()).is_empty());
    }

    #[test]
    fn criteria_are_anded() {
        let input = docs();
        let options = FilterOptions::default()
            .with_doc_types([DocType::Pdf])
            .with_size_range(SizeRange::new(Some(2_000), None));
        assert_eq!(ids(&apply(&input, "", &options)), ["3"]);
        assert!(apply(&input, "marketing", &options).is_empty());
    }

    #[test]
    fn empty_type_set_is_unconstrained() {
        let input = docs();
        let options = FilterOptions::default().with_doc_types(Vec::<DocType>::new());
        assert_eq!(apply(&input, "", &options).len(), 3);
    }

    #[test]
    fn date_filter_excludes_unparsable_upload_times() {
        let input = docs();
        let options = FilterOptions::default().with_date_range(DateRange::new(Some("2024-01-01"), None));
        assert_eq!(ids(&apply(&input, "", &options)), ["1", "2"]);

        let open = FilterOptions::default().with_date_range(DateRange::default());
        assert_eq!(apply(&input, "", &open).len(), 3);
    }

    #[test]
    fn highlight_ranges_are_char_based() {
        let matcher = KeywordMatcher::new("报告");
        assert_eq!(matcher.highlight_ranges("用户调研报告.docx"), vec![(4, 6)]);

        let matcher = KeywordMatcher::new("an");
        assert_eq!(matcher.highlight_ranges("Banana"), vec![(1, 3), (3, 5)]);
        assert!(KeywordMatcher::new("").highlight_ranges("Banana").is_empty());
    }
}
