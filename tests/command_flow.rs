use docshelf::preview::Viewer;
use docshelf::ui::render_action;
use docshelf::{handle_event, initialize, parse_command, Action, AppState, Config, ViewMode};

fn run(state: &mut AppState, line: &str) -> (bool, Vec<Action>) {
    let event = parse_command(line).unwrap();
    handle_event(state, &event).unwrap()
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state.visible_documents().into_iter().map(|d| d.doc_id).collect()
}

#[test]
fn test_search_filter_and_clear() {
    let mut state = initialize(&Config::default());

    assert_eq!(run(&mut state, "search 报告"), (true, vec![]));
    assert_eq!(visible_ids(&state), ["3", "4"]);

    run(&mut state, "type pdf");
    assert_eq!(visible_ids(&state), ["3"]);

    run(&mut state, "clear");
    assert_eq!(visible_ids(&state), ["3", "4"]);

    run(&mut state, "/");
    assert_eq!(visible_ids(&state).len(), 9);
}

#[test]
fn test_date_bounds_via_commands() {
    let mut state = initialize(&Config::default());
    run(&mut state, "from 2024-01-18");
    run(&mut state, "to 2024-01-19");
    assert_eq!(visible_ids(&state), ["2", "3"]);

    run(&mut state, "from");
    assert_eq!(visible_ids(&state), ["2", "3", "4", "5", "6", "7", "8", "9"]);
}

#[test]
fn test_drag_select_and_batch() {
    let mut state = initialize(&Config::default());

    assert!(!run(&mut state, "drag 2 1").0);
    assert!(run(&mut state, "drag 7 1").0);
    assert_eq!(state.store.documents()[0].doc_id, "7");

    run(&mut state, "select 2");
    run(&mut state, "select 5");
    run(&mut state, "select 404");
    assert_eq!(state.selection.len(), 2);

    assert!(run(&mut state, "move 归档").0);
    assert!(state.selection.is_empty());
    assert_eq!(state.grouped_view().get("归档").map(<[_]>::len), Some(2));
    assert!(state.grouped_view().get("产品文档").is_none());

    run(&mut state, "select 2");
    assert!(run(&mut state, "delete").0);
    assert_eq!(state.store.len(), 8);
    assert!(!run(&mut state, "delete").0);
}

#[test]
fn test_panels_and_view_mode() {
    let config = Config {
        view_mode: ViewMode::Card,
        ..Default::default()
    };
    let mut state = initialize(&config);
    assert_eq!(state.view_mode, ViewMode::Card);

    let (render, actions) = run(&mut state, "preview 1");
    assert!(!render);
    match actions.as_slice() {
        [Action::ShowPreview { doc_name, viewer: Viewer::Pdf { url } }] => {
            assert_eq!(doc_name, "营销方案.pdf");
            assert!(url.starts_with("https://docs.google.com/viewer?url=https%3A%2F%2Fexample.com"));
        }
        other => panic!("unexpected actions: {other:?}"),
    }

    let (_, actions) = run(&mut state, "stats");
    let panel = render_action(&actions[0], &state.theme, 100).unwrap();
    assert!(panel.contains("会议纪要.docx"));

    assert!(run(&mut state, "view grid").0);
    assert!(!run(&mut state, "view grid").0);
    assert_eq!(run(&mut state, "quit"), (false, vec![Action::Quit]));
}

#[test]
fn test_rejected_commands_leave_state_alone() {
    let mut state = initialize(&Config::default());
    for line in ["", "size gigantic", "select", "teleport 3"] {
        if let Ok(event) = parse_command(line) {
            handle_event(&mut state, &event).unwrap();
            panic!("{line:?} should be rejected");
        }
    }
    assert_eq!(visible_ids(&state).len(), 9);
    assert!(state.selection.is_empty());
}
