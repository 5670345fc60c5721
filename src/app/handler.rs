//! Event handling and state transition logic.
//!
//! Every user gesture of the library UI arrives as one discrete [`Event`].
//! [`handle_event`] runs it to completion against [`AppState`] before the
//! next one is processed, so no two mutations ever interleave.
//!
//! # Event Types
//!
//! - **Criteria**: `Search`, `Filter`, `ToggleDocType`, `SizePreset`,
//!   `DateStart`, `DateEnd`, `ClearFilters`, `ToggleFilterPanel`
//! - **Ordering**: `DragEnd`
//! - **Selection and batch**: `Select`, `BatchMove`, `BatchDelete`
//! - **Presentation**: `SetViewMode`
//! - **Collaborators**: `Preview`, `ShowStatistics`, `Quit`
//!
//! # Example
//!
//! ```rust
//! use docshelf::app::{handle_event, AppState, Event};
//! use docshelf::ui::theme::Theme;
//! use docshelf::{DocType, Document};
//!
//! let mut state = AppState::new(vec![Document::new("1", "a.pdf", DocType::Pdf)], Theme::default());
//! let (needs_render, actions) = handle_event(&mut state, &Event::Select("1".to_string()))?;
//! assert!(needs_render);
//! assert!(actions.is_empty());
//! # Ok::<(), docshelf::DocShelfError>(())
//! ```

use crate::app::modes::ViewMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{DocType, FilterOptions, SizePreset};
use crate::library::reorder::DragEnd;

/// Discrete user actions on the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Submits a search keyword.
    Search(String),
    /// Replaces the structured filter options.
    Filter(FilterOptions),
    /// Adds or removes a type from the type filter.
    ToggleDocType(DocType),
    /// Selects a size bucket.
    SizePreset(SizePreset),
    /// Sets the lower upload-date bound (`YYYY-MM-DD`, empty clears it).
    DateStart(String),
    /// Sets the upper upload-date bound (`YYYY-MM-DD`, empty clears it).
    DateEnd(String),
    /// Resets the structured filter options.
    ClearFilters,
    /// Expands or collapses the advanced filter panel.
    ToggleFilterPanel,
    /// A drag gesture ended.
    DragEnd(DragEnd),
    /// Toggles selection of a document.
    Select(String),
    /// Moves the selection to a group.
    BatchMove(String),
    /// Deletes the selection.
    BatchDelete,
    /// Switches layout.
    SetViewMode(ViewMode),
    /// Requests a preview of a document.
    Preview(String),
    /// Requests the usage charts.
    ShowStatistics,
    /// Ends the session.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(needs_render, actions)`. `needs_render` is `false` when the event left
/// the visible state untouched (rejected drags, batch actions without a
/// selection, unknown ids).
///
/// # Errors
///
/// None of the current transitions fail. The `Result` is kept so that
/// front-ends handle every event uniformly with `?`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Search(keyword) => {
            state.search(keyword);
            Ok((true, vec![]))
        }
        Event::Filter(options) => {
            state.filter(options.clone());
            Ok((true, vec![]))
        }
        Event::ToggleDocType(doc_type) => {
            state.toggle_doc_type(*doc_type);
            Ok((true, vec![]))
        }
        Event::SizePreset(preset) => {
            state.apply_size_preset(*preset);
            Ok((true, vec![]))
        }
        Event::DateStart(start) => {
            state.set_date_start(start);
            Ok((true, vec![]))
        }
        Event::DateEnd(end) => {
            state.set_date_end(end);
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            state.clear_filters();
            Ok((true, vec![]))
        }
        Event::ToggleFilterPanel => {
            state.toggle_filter_panel();
            Ok((true, vec![]))
        }
        Event::DragEnd(drag) => {
            let outcome = state.on_drag_end(drag);
            tracing::debug!(outcome = ?outcome, "drag handled");
            Ok((outcome.is_moved(), vec![]))
        }
        Event::Select(doc_id) => Ok((state.on_select(doc_id), vec![])),
        Event::BatchMove(target_group) => {
            if state.selection.is_empty() {
                return Ok((false, vec![]));
            }
            let moved = state.batch_move(target_group);
            tracing::debug!(moved, target_group = %target_group, "batch move finished");
            Ok((true, vec![]))
        }
        Event::BatchDelete => {
            if state.selection.is_empty() {
                return Ok((false, vec![]));
            }
            let deleted = state.batch_delete();
            tracing::debug!(deleted, "batch delete finished");
            Ok((true, vec![]))
        }
        Event::SetViewMode(mode) => {
            let changed = state.view_mode != *mode;
            state.view_mode = *mode;
            Ok((changed, vec![]))
        }
        Event::Preview(doc_id) => state.preview(doc_id).map_or_else(
            || {
                tracing::debug!(doc_id = %doc_id, "preview ignored: unknown document");
                Ok((false, vec![]))
            },
            |(doc_name, viewer)| {
                tracing::debug!(doc_id = %doc_id, viewer = viewer.kind(), "preview requested");
                Ok((false, vec![Action::ShowPreview { doc_name, viewer }]))
            },
        ),
        Event::ShowStatistics => Ok((false, vec![Action::ShowStatistics(state.statistics())])),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}
