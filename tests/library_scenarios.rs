use docshelf::library::seed::builtin_documents;
use docshelf::library::{apply, group};
use docshelf::{
    AppState, DateRange, DocType, Document, DocumentStore, DragEnd, FilterOptions, ReorderOutcome, Selection,
    SizePreset, Theme, UNGROUPED,
};

fn seeded() -> AppState {
    AppState::new(builtin_documents().unwrap(), Theme::default())
}

fn ids(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.doc_id.as_str()).collect()
}

fn three_docs() -> DocumentStore {
    DocumentStore::new(vec![
        Document::new("1", "a.pdf", DocType::Pdf).with_group("X"),
        Document::new("2", "b.pdf", DocType::Pdf).with_group("X"),
        Document::new("3", "c.pdf", DocType::Pdf).with_group("Y"),
    ])
}

#[test]
fn test_cross_group_reorder_is_a_no_op() {
    let mut store = three_docs();
    assert!(!store.reorder("3", "1"));
    assert_eq!(ids(store.documents()), ["1", "2", "3"]);
}

#[test]
fn test_same_group_reorder_moves_source_to_target_index() {
    let mut store = three_docs();
    assert!(store.reorder("2", "1"));
    assert_eq!(ids(store.documents()), ["2", "1", "3"]);
}

#[test]
fn test_type_filter_over_seed() {
    let docs = builtin_documents().unwrap();
    let pdfs = apply(&docs, "", &FilterOptions::default().with_doc_types([DocType::Pdf]));

    assert_eq!(pdfs.len(), 3);
    assert!(pdfs.iter().all(|d| d.doc_type == DocType::Pdf));
    assert_eq!(ids(&pdfs), ["1", "3", "7"]);
}

#[test]
fn test_keyword_search_over_seed() {
    let mut state = seeded();
    state.search("报告");
    assert_eq!(ids(&state.visible_documents()), ["3", "4"]);
}

#[test]
fn test_double_toggle_empties_selection() {
    let mut selection = Selection::default();
    assert!(selection.toggle("1"));
    assert!(!selection.toggle("1"));
    assert!(selection.is_empty());
}

#[test]
fn test_keyword_and_options_apply_together() {
    let mut state = seeded();
    state.toggle_doc_type(DocType::Docx);
    state.search("报告");
    assert_eq!(ids(&state.visible_documents()), ["4"]);

    // A later filter change keeps the keyword.
    state.filter(FilterOptions::default().with_doc_types([DocType::Pdf]));
    assert_eq!(ids(&state.visible_documents()), ["3"]);

    state.search("");
    assert_eq!(ids(&state.visible_documents()), ["1", "3", "7"]);
}

#[test]
fn test_size_presets_over_seed() {
    let docs = builtin_documents().unwrap();
    let by_preset = |preset: SizePreset| {
        let options = FilterOptions::default().with_size_range(preset.range());
        apply(&docs, "", &options).into_iter().map(|d| d.doc_id).collect::<Vec<_>>()
    };

    assert_eq!(by_preset(SizePreset::Small), ["1", "6", "9"]);
    assert_eq!(by_preset(SizePreset::Medium), ["2", "3", "4", "5", "7", "8"]);
    assert_eq!(by_preset(SizePreset::Large), ["5"]);
}

#[test]
fn test_date_range_is_inclusive_and_half_open() {
    let docs = builtin_documents().unwrap();
    let within = |start: Option<&str>, end: Option<&str>| {
        let options = FilterOptions::default().with_date_range(DateRange::new(start, end));
        apply(&docs, "", &options).into_iter().map(|d| d.doc_id).collect::<Vec<_>>()
    };

    assert_eq!(within(Some("2024-01-17"), Some("2024-01-19")), ["2", "3", "4"]);
    assert_eq!(within(Some("2024-01-19"), None), ["1", "2"]);
    assert_eq!(within(Some(""), Some("2024-01-12")), ["9"]);
    assert!(within(Some("last tuesday"), None).is_empty());
}

#[test]
fn test_grouping_follows_first_appearance() {
    let docs = builtin_documents().unwrap();
    let view = group(&docs);

    assert_eq!(view.group_names(), ["方案文档", "产品文档", "分析报告", "财务文档", "技术文档", "其他文档"]);
    assert_eq!(view.get("方案文档").map(ids), Some(vec!["1", "7"]));
    assert_eq!(view.document_count(), docs.len());
}

#[test]
fn test_reorder_inside_filtered_view_updates_store() {
    let mut state = seeded();
    state.search("pdf");

    assert_eq!(state.on_drag_end(&DragEnd::new("7", Some("1"))), ReorderOutcome::Moved);
    assert_eq!(state.grouped_view().get("方案文档").map(ids), Some(vec!["7", "1"]));

    state.search("");
    assert_eq!(&ids(state.store.documents())[..3], ["7", "1", "2"]);
}

#[test]
fn test_cross_group_drag_leaves_state_untouched() {
    let mut state = seeded();
    let before = state.store.documents().to_vec();

    assert_eq!(state.on_drag_end(&DragEnd::new("2", Some("1"))), ReorderOutcome::CrossGroup);
    assert_eq!(state.on_drag_end(&DragEnd::new("2", None::<String>)), ReorderOutcome::NoTarget);
    assert_eq!(state.on_drag_end(&DragEnd::new("2", Some("99"))), ReorderOutcome::UnknownDocument);
    assert_eq!(state.store.documents(), before.as_slice());
}

#[test]
fn test_batch_move_then_delete() {
    let mut state = seeded();
    state.on_select("6");
    state.on_select("9");

    assert_eq!(state.batch_move("归档"), 2);
    assert!(state.selection.is_empty());
    assert_eq!(state.grouped_view().get("归档").map(ids), Some(vec!["6", "9"]));

    state.on_select("6");
    assert_eq!(state.batch_move(UNGROUPED), 1);
    assert_eq!(state.store.get("6").and_then(|d| d.group.clone()), None);

    state.on_select("6");
    state.on_select("9");
    assert_eq!(state.batch_delete(), 2);
    assert!(state.selection.is_empty());
    assert_eq!(state.store.len(), 7);
    assert!(!state.store.contains("6"));
    assert!(!state.batch_targets().contains(&"归档".to_string()));
}

#[test]
fn test_selection_survives_filtering() {
    let mut state = seeded();
    state.on_select("1");
    state.search("手册");

    assert!(state.selection.is_selected("1"));
    assert!(!state.visible_documents().iter().any(|d| d.doc_id == "1"));

    assert_eq!(state.batch_delete(), 1);
    assert!(!state.store.contains("1"));
}

#[test]
fn test_statistics_cover_whole_store() {
    let mut state = seeded();
    state.search("报告");
    let report = state.statistics();

    assert_eq!(report.search_counts.len(), 9);
    assert_eq!(report.search_counts[0].name, "营销方案.pdf");
    assert_eq!(report.search_counts[0].value, 150);
    assert!((report.hit_rates[0].value - 85.0).abs() < f64::EPSILON);
}
