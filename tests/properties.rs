use std::collections::HashSet;

use docshelf::library::{apply, group};
use docshelf::{AppState, DocType, Document, DocumentStore, FilterOptions, SizeRange, Theme};
use proptest::prelude::*;

fn doc_type() -> impl Strategy<Value = DocType> {
    prop::sample::select(DocType::ALL.to_vec())
}

fn group_name() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec!["Alpha", "Beta", "Gamma", ""])).prop_map(|g| g.map(String::from))
}

/// Documents with unique ids `d0..dN`.
fn documents(max: usize) -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(("[a-c]{1,4}", doc_type(), 0u64..8_000_000, group_name()), 0..max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, doc_type, size, group))| {
                let mut doc = Document::new(format!("d{i}"), name, doc_type).with_size(size);
                doc.group = group;
                doc
            })
            .collect()
    })
}

fn filter_options() -> impl Strategy<Value = FilterOptions> {
    (
        prop::option::of(prop::collection::btree_set(doc_type(), 0..3)),
        prop::option::of((prop::option::of(0u64..4_000_000), prop::option::of(2_000_000u64..8_000_000))),
    )
        .prop_map(|(types, size)| FilterOptions {
            doc_type: types,
            size_range: size.map(|(min, max)| SizeRange::new(min, max)),
            date_range: None,
        })
}

fn is_subsequence(sub: &[Document], full: &[Document]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|doc| rest.any(|candidate| candidate.doc_id == doc.doc_id))
}

proptest! {
    #[test]
    fn blank_criteria_keep_everything(docs in documents(20), keyword in "[ ]{0,3}") {
        prop_assert_eq!(apply(&docs, &keyword, &FilterOptions::default()), docs);
    }

    #[test]
    fn filtering_preserves_relative_order(docs in documents(20), keyword in "[a-c]{0,2}", options in filter_options()) {
        let filtered = apply(&docs, &keyword, &options);
        prop_assert!(filtered.len() <= docs.len());
        prop_assert!(is_subsequence(&filtered, &docs));
    }

    #[test]
    fn grouping_covers_every_document_once(docs in documents(20)) {
        let view = group(&docs);
        prop_assert_eq!(view.document_count(), docs.len());

        for (name, members) in view.iter() {
            prop_assert!(!members.is_empty());
            prop_assert!(members.iter().all(|d| d.group_key() == name));
            prop_assert!(is_subsequence(members, &docs));
        }

        let names: HashSet<&str> = view.iter().map(|(name, _)| name).collect();
        prop_assert_eq!(names.len(), view.len());
    }

    #[test]
    fn reorder_keeps_length_and_group_contents(docs in documents(12), a in 0usize..12, b in 0usize..12) {
        prop_assume!(!docs.is_empty());
        let (a, b) = (a % docs.len(), b % docs.len());
        let mut store = DocumentStore::new(docs.clone());
        let moved = store.reorder(&docs[a].doc_id, &docs[b].doc_id);

        prop_assert_eq!(store.len(), docs.len());
        if docs[a].group_key() != docs[b].group_key() || a == b {
            prop_assert!(!moved);
            prop_assert_eq!(store.documents(), docs.as_slice());
        }

        // Every group keeps the same members after any reorder.
        let before = group(&docs);
        let after = group(store.documents());
        for (name, members) in before.iter() {
            let mut expected: Vec<&str> = members.iter().map(|d| d.doc_id.as_str()).collect();
            let mut actual: Vec<&str> = after.get(name).unwrap_or_default().iter().map(|d| d.doc_id.as_str()).collect();
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(expected, actual);
        }
    }

    #[test]
    fn batch_operations_clear_selection(docs in documents(12), picks in prop::collection::vec(0usize..12, 0..6), delete in any::<bool>()) {
        let mut state = AppState::new(docs.clone(), Theme::default());
        for pick in &picks {
            if let Some(doc) = docs.get(*pick) {
                state.on_select(&doc.doc_id);
            }
        }
        let selected: HashSet<String> = state.selection.ids().clone();

        if delete {
            prop_assert_eq!(state.batch_delete(), selected.len());
            prop_assert_eq!(state.store.len(), docs.len() - selected.len());
            prop_assert!(state.store.documents().iter().all(|d| !selected.contains(&d.doc_id)));
        } else {
            prop_assert_eq!(state.batch_move("Moved"), selected.len());
            prop_assert_eq!(state.store.len(), docs.len());
            for doc in state.store.documents() {
                if selected.contains(&doc.doc_id) {
                    prop_assert_eq!(doc.group_key(), "Moved");
                }
            }
        }
        prop_assert!(state.selection.is_empty());
    }
}
