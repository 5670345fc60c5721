//! Header component renderer.
//!
//! Renders the title bar with centered text, theme-aware colors and optional
//! background styling.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&helpers::center(&header.title, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
