//! Footer component renderer.
//!
//! Renders the help line with the commands available in the current state.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let text = helpers::truncate_to_width(&footer.keybindings, cols);

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&helpers::center(&text, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
