//! View model types representing renderable UI state.
//!
//! A [`LibraryViewModel`] is computed from an [`AppState`] snapshot by
//! [`compute_viewmodel`] and consumed by the renderer. It holds display-ready
//! data only: group sections in presentation order, per-document display
//! fields, selection flags and keyword highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use docshelf::app::AppState;
//! use docshelf::ui::theme::Theme;
//! use docshelf::ui::viewmodel::compute_viewmodel;
//! use docshelf::{DocType, Document};
//!
//! let mut state = AppState::new(
//!     vec![Document::new("1", "Plan.pdf", DocType::Pdf).with_group("Plans")],
//!     Theme::default(),
//! );
//! state.search("plan");
//!
//! let vm = compute_viewmodel(&state);
//! assert_eq!(vm.sections[0].name, "Plans");
//! assert_eq!(vm.sections[0].items[0].highlight_ranges, vec![(0, 4)]);
//! ```

use crate::app::modes::ViewMode;
use crate::app::AppState;
use crate::domain::{DocStatus, DocType, Document, FilterOptions, SizePreset};
use crate::library::filter::KeywordMatcher;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Present while the advanced filter panel is expanded.
    pub filter_panel: Option<FilterPanelInfo>,
    /// Visible documents grouped in presentation order.
    pub sections: Vec<GroupSection>,
    /// Present while at least one document is selected.
    pub batch_bar: Option<BatchBar>,
    pub footer: FooterInfo,
    /// Present when no document is visible.
    pub empty_state: Option<EmptyState>,
    pub view_mode: ViewMode,
}

/// One group heading and the documents displayed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSection {
    pub name: String,
    pub items: Vec<DisplayItem>,
}

/// Display fields of a single document.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub doc_id: String,
    pub doc_type: DocType,
    pub name: String,
    pub tag: Option<String>,
    /// Human-readable size, e.g. `2 MB`.
    pub size: String,
    pub upload_time: String,
    pub status: DocStatus,
    pub search_count: u64,
    /// Hit rate as text, e.g. `85.0%`.
    pub hit_rate: String,
    pub is_selected: bool,
    /// Char ranges of keyword matches within `name`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Current keyword and a one-line summary of each active structured criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub active_filters: Vec<String>,
}

/// State of the advanced filter panel controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelInfo {
    /// Offered types and whether each is active.
    pub doc_types: Vec<(DocType, bool)>,
    /// Size buckets and whether each is the active range.
    pub size_presets: Vec<(SizePreset, bool)>,
    pub date_start: String,
    pub date_end: String,
}

/// Batch action bar shown while documents are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchBar {
    pub selected: usize,
    /// Groups offered as move destinations.
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Types offered by the filter panel. `Other` is never offered.
const FILTERABLE_TYPES: [DocType; 4] = [DocType::Pdf, DocType::Docx, DocType::Xlsx, DocType::Image];

/// Computes the view model for the current state.
#[must_use]
pub fn compute_viewmodel(state: &AppState) -> LibraryViewModel {
    let _span = tracing::debug_span!("compute_viewmodel", view_mode = %state.view_mode).entered();

    let matcher = state.keyword_matcher();
    let grouped = state.grouped_view();

    let sections: Vec<GroupSection> = grouped
        .iter()
        .map(|(name, docs)| GroupSection {
            name: name.to_string(),
            items: docs.iter().map(|doc| display_item(doc, state, &matcher)).collect(),
        })
        .collect();

    let visible = grouped.document_count();
    let empty_state = (visible == 0).then(|| empty_state(state));

    LibraryViewModel {
        header: HeaderInfo {
            title: format!(" Document Library ({visible}/{}) ", state.store.len()),
        },
        search_bar: SearchBarInfo {
            query: state.keyword.clone(),
            active_filters: describe_filters(&state.filter_options),
        },
        filter_panel: state.show_filter_panel.then(|| filter_panel(&state.filter_options)),
        sections,
        batch_bar: (!state.selection.is_empty()).then(|| BatchBar {
            selected: state.selection.len(),
            targets: state.batch_targets(),
        }),
        footer: FooterInfo {
            keybindings: footer_text(state),
        },
        empty_state,
        view_mode: state.view_mode,
    }
}

fn display_item(doc: &Document, state: &AppState, matcher: &KeywordMatcher) -> DisplayItem {
    DisplayItem {
        doc_id: doc.doc_id.clone(),
        doc_type: doc.doc_type,
        name: doc.doc_name.clone(),
        tag: doc.tag.clone(),
        size: doc.display_size(),
        upload_time: doc.upload_time.clone(),
        status: doc.status,
        search_count: doc.statistics.search_count,
        hit_rate: doc.hit_rate_percent(),
        is_selected: state.selection.is_selected(&doc.doc_id),
        highlight_ranges: matcher.highlight_ranges(&doc.doc_name),
    }
}

fn empty_state(state: &AppState) -> EmptyState {
    if state.store.is_empty() {
        EmptyState {
            message: "The library is empty".to_string(),
            subtitle: "Start with a seed file to see documents here".to_string(),
        }
    } else {
        EmptyState {
            message: "No documents match".to_string(),
            subtitle: "Try another keyword or `clear` the filters".to_string(),
        }
    }
}

fn describe_filters(options: &FilterOptions) -> Vec<String> {
    let mut active = Vec::new();

    if let Some(types) = options.doc_type.as_ref().filter(|types| !types.is_empty()) {
        let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        active.push(format!("type: {}", names.join(", ")));
    }

    if let Some(range) = options.size_range.filter(|r| r.min.is_some() || r.max.is_some()) {
        let label = SizePreset::ALL
            .iter()
            .find(|preset| preset.range() == range)
            .map_or_else(
                || {
                    let bound = |b: Option<u64>| b.map_or_else(|| "*".to_string(), crate::domain::format_file_size);
                    format!("{} - {}", bound(range.min), bound(range.max))
                },
                |preset| preset.label().to_string(),
            );
        active.push(format!("size: {label}"));
    }

    if let Some(range) = options.date_range.as_ref().filter(|r| !r.is_open()) {
        let bound = |b: Option<&str>| match b.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => "*".to_string(),
        };
        active.push(format!(
            "date: {} .. {}",
            bound(range.start.as_deref()),
            bound(range.end.as_deref())
        ));
    }

    active
}

fn filter_panel(options: &FilterOptions) -> FilterPanelInfo {
    let dates = options.date_range.clone().unwrap_or_default();

    FilterPanelInfo {
        doc_types: FILTERABLE_TYPES
            .iter()
            .map(|t| (*t, options.doc_type.as_ref().is_some_and(|types| types.contains(t))))
            .collect(),
        size_presets: SizePreset::ALL
            .iter()
            .map(|p| (*p, options.size_range == Some(p.range())))
            .collect(),
        date_start: dates.start.unwrap_or_default(),
        date_end: dates.end.unwrap_or_default(),
    }
}

fn footer_text(state: &AppState) -> String {
    if state.selection.is_empty() {
        "search <kw>  filters  type/size/from/to  drag <id> <over>  select <id>  view <mode>  preview <id>  stats  quit"
            .to_string()
    } else {
        "move <group>  delete  select <id> to toggle  quit".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateRange, UNGROUPED};
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(
            vec![
                Document::new("1", "Plan.pdf", DocType::Pdf).with_group("Plans"),
                Document::new("2", "Notes.docx", DocType::Docx),
                Document::new("3", "Planet.png", DocType::Image).with_group("Plans"),
            ],
            Theme::default(),
        )
    }

    #[test]
    fn sections_follow_grouped_view() {
        let vm = compute_viewmodel(&state());
        let names: Vec<&str> = vm.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Plans", UNGROUPED]);
        assert_eq!(vm.sections[0].items.len(), 2);
        assert_eq!(vm.header.title, " Document Library (3/3) ");
        assert!(vm.empty_state.is_none());
        assert!(vm.batch_bar.is_none());
        assert!(vm.filter_panel.is_none());
    }

    #[test]
    fn selection_shows_batch_bar() {
        let mut s = state();
        s.on_select("2");
        let vm = compute_viewmodel(&s);
        let bar = vm.batch_bar.unwrap();
        assert_eq!(bar.selected, 1);
        assert_eq!(bar.targets, ["Plans", UNGROUPED]);
        assert!(vm.sections[1].items[0].is_selected);
    }

    #[test]
    fn empty_results_explain_themselves() {
        let mut s = state();
        s.search("zzz");
        let vm = compute_viewmodel(&s);
        assert!(vm.sections.is_empty());
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No documents match".to_string()));

        let empty = AppState::new(vec![], Theme::default());
        assert_eq!(
            compute_viewmodel(&empty).empty_state.map(|e| e.message),
            Some("The library is empty".to_string())
        );
    }

    #[test]
    fn filter_summary_and_panel() {
        let mut s = state();
        s.toggle_doc_type(DocType::Pdf);
        s.apply_size_preset(SizePreset::Small);
        s.filter_options.date_range = Some(DateRange::new(Some("2024-01-01"), None));
        s.toggle_filter_panel();

        let vm = compute_viewmodel(&s);
        assert_eq!(
            vm.search_bar.active_filters,
            ["type: pdf", "size: < 1MB", "date: 2024-01-01 .. *"]
        );

        let panel = vm.filter_panel.unwrap();
        assert_eq!(panel.doc_types[0], (DocType::Pdf, true));
        assert_eq!(panel.doc_types[1], (DocType::Docx, false));
        assert_eq!(panel.size_presets[0], (SizePreset::Small, true));
        assert_eq!(panel.date_start, "2024-01-01");
        assert_eq!(panel.date_end, "");
    }
}
