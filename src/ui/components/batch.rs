//! Batch action bar renderer.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BatchBar;

pub fn render_batch_bar(out: &mut String, bar: &BatchBar, theme: &Theme, cols: usize) {
    let line = format!(
        " {} selected  ·  move to: {}  ·  delete ",
        bar.selected,
        if bar.targets.is_empty() { "-".to_string() } else { bar.targets.join(", ") }
    );

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.selection_fg));
    out.push_str(&Theme::bg(&theme.colors.selection_bg));
    out.push_str(&helpers::pad_to_width(&helpers::truncate_to_width(&line, cols), cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
