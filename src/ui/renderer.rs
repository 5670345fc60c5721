//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → [`LibraryViewModel`]
//! 2. **Component Rendering**: the view model is laid out by the components
//!    into an ANSI-styled string
//!
//! Output is returned rather than printed so that front-ends decide where it
//! goes (and tests can inspect it).
//!
//! # Example
//!
//! ```rust
//! use docshelf::app::AppState;
//! use docshelf::ui::{render, Theme};
//! use docshelf::{DocType, Document};
//!
//! let state = AppState::new(vec![Document::new("1", "plan.pdf", DocType::Pdf)], Theme::default());
//! let frame = render(&state, 100);
//! assert!(frame.contains("plan.pdf"));
//! ```

use crate::app::{Action, AppState};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{compute_viewmodel, LibraryViewModel};

/// Renders the library view for `state` at `cols` terminal columns.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = compute_viewmodel(state);
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &LibraryViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_library(&mut out, vm, theme, cols);
    out
}

/// Renders the panel for an action, if it has one.
///
/// `Quit` has nothing to show.
#[must_use]
pub fn render_action(action: &Action, theme: &Theme, cols: usize) -> Option<String> {
    let mut out = String::new();
    match action {
        Action::ShowPreview { doc_name, viewer } => {
            components::render_preview(&mut out, doc_name, viewer, theme, cols);
        }
        Action::ShowStatistics(report) => components::render_statistics(&mut out, report, theme, cols),
        Action::Quit => return None,
    }
    Some(out)
}
