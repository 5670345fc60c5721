//! Application state and its transitions.
//!
//! [`AppState`] is the single state object of a library session. It owns the
//! canonical [`DocumentStore`] together with the criteria the user has chosen
//! (keyword, filter options), the selection and presentation settings.
//!
//! # Derived State
//!
//! Nothing derived is stored. [`AppState::visible_documents`] and
//! [`AppState::grouped_view`] recompute the filtered and grouped projections
//! from the canonical store on every call, so a reorder or batch operation
//! can never leave a stale filtered copy behind.
//!
//! # Filter Composition
//!
//! The keyword and the structured options are independent, persistent
//! criteria. Changing one keeps the other, and both are always applied
//! together against the full store.
//!
//! # Example
//!
//! ```rust
//! use docshelf::app::AppState;
//! use docshelf::ui::theme::Theme;
//! use docshelf::{DocType, Document, FilterOptions};
//!
//! let mut state = AppState::new(
//!     vec![
//!         Document::new("1", "report.pdf", DocType::Pdf),
//!         Document::new("2", "report.docx", DocType::Docx),
//!     ],
//!     Theme::default(),
//! );
//!
//! state.search("report");
//! state.filter(FilterOptions::default().with_doc_types([DocType::Pdf]));
//! assert_eq!(state.visible_documents().len(), 1);
//! ```

use super::modes::ViewMode;
use crate::domain::{DocType, Document, FilterOptions, SizePreset};
use crate::library::filter::{self, KeywordMatcher};
use crate::library::grouping::{self, GroupedView};
use crate::library::reorder::{self, DragEnd, ReorderOutcome};
use crate::library::{DocumentStore, Selection};
use crate::preview::{PreviewTarget, Viewer};
use crate::statistics::StatisticsReport;
use crate::ui::theme::Theme;

/// Central application state container.
///
/// Mutated only through the transition methods below, which the event
/// handler calls in response to user input.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical, ordered document collection.
    pub store: DocumentStore,

    /// Current search keyword, trimmed. Empty matches everything.
    pub keyword: String,

    /// Current structured filter criteria.
    pub filter_options: FilterOptions,

    /// Documents selected for batch operations.
    pub selection: Selection,

    /// Layout used by the renderer.
    pub view_mode: ViewMode,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Whether the advanced filter panel is expanded.
    pub show_filter_panel: bool,
}

impl AppState {
    /// Creates a session over `documents` with no criteria and an empty selection.
    #[must_use]
    pub fn new(documents: Vec<Document>, theme: Theme) -> Self {
        Self {
            store: DocumentStore::new(documents),
            keyword: String::new(),
            filter_options: FilterOptions::default(),
            selection: Selection::default(),
            view_mode: ViewMode::default(),
            theme,
            show_filter_panel: false,
        }
    }

    /// Sets the search keyword. The structured options are kept.
    pub fn search(&mut self, keyword: &str) {
        self.keyword = keyword.trim().to_string();
        tracing::debug!(keyword = %self.keyword, "keyword updated");
    }

    /// Replaces the structured filter options. The keyword is kept.
    pub fn filter(&mut self, options: FilterOptions) {
        tracing::debug!(options = ?options, "filter options replaced");
        self.filter_options = options;
    }

    /// Adds or removes one type from the type constraint.
    pub fn toggle_doc_type(&mut self, doc_type: DocType) {
        self.filter_options.toggle_doc_type(doc_type);
        tracing::debug!(doc_type = %doc_type, types = ?self.filter_options.doc_type, "type filter toggled");
    }

    /// Constrains sizes to a preset bucket.
    pub fn apply_size_preset(&mut self, preset: SizePreset) {
        self.filter_options.size_range = Some(preset.range());
        tracing::debug!(preset = preset.label(), "size preset applied");
    }

    pub fn set_date_start(&mut self, start: &str) {
        self.filter_options.set_date_start(start.trim());
    }

    pub fn set_date_end(&mut self, end: &str) {
        self.filter_options.set_date_end(end.trim());
    }

    /// Drops every structured criterion. The keyword is kept.
    pub fn clear_filters(&mut self) {
        self.filter_options = FilterOptions::default();
        tracing::debug!("filter options cleared");
    }

    pub fn toggle_filter_panel(&mut self) {
        self.show_filter_panel = !self.show_filter_panel;
    }

    /// Applies a finished drag gesture to the canonical store.
    pub fn on_drag_end(&mut self, drag: &DragEnd) -> ReorderOutcome {
        reorder::apply_drag(&mut self.store, drag)
    }

    /// Toggles selection of `doc_id`.
    ///
    /// Ids that are not in the store are ignored. Returns `true` if the
    /// selection changed.
    pub fn on_select(&mut self, doc_id: &str) -> bool {
        if !self.store.contains(doc_id) {
            tracing::debug!(doc_id, "select ignored: unknown document");
            return false;
        }
        let selected = self.selection.toggle(doc_id);
        tracing::debug!(doc_id, selected, total = self.selection.len(), "selection toggled");
        true
    }

    /// Moves every selected document to `target_group`, then clears the selection.
    ///
    /// With an empty selection nothing happens. Returns the number of
    /// documents moved.
    pub fn batch_move(&mut self, target_group: &str) -> usize {
        if self.selection.is_empty() {
            tracing::debug!("batch move skipped: empty selection");
            return 0;
        }
        let moved = self.store.batch_move(self.selection.ids(), target_group);
        self.selection.clear();
        moved
    }

    /// Deletes every selected document, then clears the selection.
    ///
    /// With an empty selection nothing happens. Returns the number of
    /// documents deleted.
    pub fn batch_delete(&mut self) -> usize {
        if self.selection.is_empty() {
            tracing::debug!("batch delete skipped: empty selection");
            return 0;
        }
        let deleted = self.store.batch_delete(self.selection.ids());
        self.selection.clear();
        deleted
    }

    /// Documents matching the current keyword and filter options, in store order.
    #[must_use]
    pub fn visible_documents(&self) -> Vec<Document> {
        filter::apply(self.store.documents(), &self.keyword, &self.filter_options)
    }

    /// Visible documents partitioned by group.
    #[must_use]
    pub fn grouped_view(&self) -> GroupedView {
        grouping::group(&self.visible_documents())
    }

    /// Group names offered as batch move destinations, in store order.
    #[must_use]
    pub fn batch_targets(&self) -> Vec<String> {
        self.store.group_names()
    }

    /// Matcher for the current keyword, used for highlighting.
    #[must_use]
    pub fn keyword_matcher(&self) -> KeywordMatcher {
        KeywordMatcher::new(&self.keyword)
    }

    /// Returns `true` if the keyword or any structured criterion is active.
    #[must_use]
    pub fn has_active_criteria(&self) -> bool {
        !self.keyword.is_empty() || !self.filter_options.is_identity()
    }

    /// Resolves the preview viewer for a document, if it exists.
    #[must_use]
    pub fn preview(&self, doc_id: &str) -> Option<(String, Viewer)> {
        let doc = self.store.get(doc_id)?;
        let viewer = Viewer::for_target(&PreviewTarget::from(doc));
        Some((doc.doc_name.clone(), viewer))
    }

    /// Usage charts over the whole store, independent of filters.
    #[must_use]
    pub fn statistics(&self) -> StatisticsReport {
        StatisticsReport::from_documents(self.store.documents())
    }
}
