//! Empty state component renderer.
//!
//! Shown in place of the group sections when no document is visible.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&helpers::center(&empty.message, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&helpers::center(&empty.subtitle, cols));
    out.push_str(Theme::reset());
    out.push_str("\n\n");
}
