//! Seed data for the document store.
//!
//! The store is initialised once per session, either from the built-in sample
//! library embedded in the binary or from a JSON file supplied through
//! configuration. Files are only read; nothing is ever written back.
//!
//! # File Format
//!
//! A JSON array of documents using camelCase field names:
//!
//! ```json
//! [
//!   {
//!     "docId": "1",
//!     "docName": "plan.pdf",
//!     "docType": "pdf",
//!     "docSize": 1024576,
//!     "uploadTime": "2024-01-20 10:00:00",
//!     "status": "Indexed",
//!     "statusUpdateTime": "2024-01-20 10:05:00",
//!     "previewUrl": null,
//!     "tag": "marketing",
//!     "group": "Plans",
//!     "statistics": { "searchCount": 150, "hitRate": 0.85 }
//!   }
//! ]
//! ```

use crate::domain::error::{DocShelfError, Result};
use crate::domain::Document;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

/// Parses a JSON array of documents and checks id uniqueness and hit rates.
///
/// # Errors
///
/// Returns [`DocShelfError::Seed`] if the JSON is malformed, two documents
/// share a `docId`, or a `hitRate` is not a finite value in `[0, 1]`.
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    let documents: Vec<Document> =
        serde_json::from_str(json).map_err(|e| DocShelfError::Seed(format!("invalid seed JSON: {e}")))?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = documents.iter().find(|doc| !seen.insert(doc.doc_id.as_str())) {
        return Err(DocShelfError::Seed(format!("duplicate docId `{}`", duplicate.doc_id)));
    }

    if let Some(doc) = documents
        .iter()
        .find(|doc| !(0.0..=1.0).contains(&doc.statistics.hit_rate))
    {
        return Err(DocShelfError::Seed(format!(
            "docId `{}`: hitRate {} outside [0, 1]",
            doc.doc_id, doc.statistics.hit_rate
        )));
    }

    Ok(documents)
}

/// Returns the built-in sample library.
///
/// # Errors
///
/// Only fails if the embedded data is corrupt, which the test suite guards.
pub fn builtin_documents() -> Result<Vec<Document>> {
    parse_documents(BUILTIN_SEED)
}

/// Reads seed documents from a JSON file.
///
/// # Errors
///
/// Returns [`DocShelfError::Io`] if the file cannot be read, or
/// [`DocShelfError::Seed`] if its contents are invalid.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let documents = parse_documents(&contents)?;
    tracing::debug!(path = %path.display(), count = documents.len(), "seed file loaded");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocType;
    use std::io::Write;

    #[test]
    fn builtin_seed_parses() {
        let docs = builtin_documents().unwrap();
        assert_eq!(docs.len(), 9);
        assert_eq!(docs.iter().filter(|d| d.doc_type == DocType::Pdf).count(), 3);
        assert_eq!(docs.iter().filter(|d| d.doc_type == DocType::Docx).count(), 3);
        assert_eq!(docs.iter().filter(|d| d.doc_type == DocType::Image).count(), 2);
        assert_eq!(docs.iter().filter(|d| d.doc_type == DocType::Xlsx).count(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"docId": "1", "docName": "a", "docType": "pdf", "docSize": 1, "uploadTime": "",
             "status": "Indexed", "statusUpdateTime": ""},
            {"docId": "1", "docName": "b", "docType": "pdf", "docSize": 1, "uploadTime": "",
             "status": "Indexed", "statusUpdateTime": ""}
        ]"#;
        let err = parse_documents(json).unwrap_err();
        assert!(matches!(err, DocShelfError::Seed(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn hit_rate_out_of_range_is_rejected() {
        let with_rate = |rate: &str| {
            format!(
                r#"[{{"docId": "7", "docName": "a", "docType": "pdf", "docSize": 1, "uploadTime": "",
                    "status": "Indexed", "statusUpdateTime": "",
                    "statistics": {{"searchCount": 1, "hitRate": {rate}}}}}]"#
            )
        };

        for rate in ["1.7", "-0.2"] {
            let err = parse_documents(&with_rate(rate)).unwrap_err();
            assert!(
                matches!(&err, DocShelfError::Seed(msg) if msg.contains("docId `7`") && msg.contains("outside [0, 1]")),
                "{rate}: {err}"
            );
        }
        for rate in ["0", "1", "0.5"] {
            assert!(parse_documents(&with_rate(rate)).is_ok(), "{rate} should be accepted");
        }
    }

    #[test]
    fn malformed_json_is_a_seed_error() {
        assert!(matches!(parse_documents("{not json"), Err(DocShelfError::Seed(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"docId": "x", "docName": "x.pdf", "docType": "pdf", "docSize": 10,
                "uploadTime": "2024-02-01 08:00:00", "status": "Processing", "statusUpdateTime": ""}}]"#
        )
        .unwrap();

        let docs = load_documents(file.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].doc_id, "x");
        assert!(docs[0].group.is_none());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_documents(dir.path().join("absent.json"));
        assert!(matches!(result, Err(DocShelfError::Io(_))));
    }
}
