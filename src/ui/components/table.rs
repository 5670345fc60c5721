//! List layout renderer.
//!
//! One row per document with ID, TYPE, NAME, SIZE, UPLOADED and STATUS
//! columns. The name column takes whatever width the fixed columns leave.

use crate::ui::helpers::{self, pad_left_to_width, pad_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const ID_WIDTH: usize = 4;
const SIZE_WIDTH: usize = 10;
const UPLOAD_WIDTH: usize = 19;
const STATUS_WIDTH: usize = 12;
const MIN_NAME_WIDTH: usize = 12;
/// Marker, id, icon, size, upload and status columns plus separators.
const FIXED_WIDTH: usize = 3 + ID_WIDTH + 3 + SIZE_WIDTH + UPLOAD_WIDTH + STATUS_WIDTH + 6;

fn name_width(cols: usize) -> usize {
    cols.saturating_sub(FIXED_WIDTH).max(MIN_NAME_WIDTH)
}

pub fn render_table_headers(out: &mut String, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!(
        "    {}     {} {} {} {}",
        pad_left_to_width("ID", ID_WIDTH),
        pad_to_width("NAME", name_width(cols)),
        pad_left_to_width("SIZE", SIZE_WIDTH),
        pad_to_width("UPLOADED", UPLOAD_WIDTH),
        pad_to_width("STATUS", STATUS_WIDTH),
    ));
    out.push_str(Theme::reset());
    out.push('\n');
}

pub fn render_table_rows(out: &mut String, items: &[DisplayItem], theme: &Theme, cols: usize) {
    for item in items {
        render_table_row(out, item, theme, cols);
    }
}

fn render_table_row(out: &mut String, item: &DisplayItem, theme: &Theme, cols: usize) {
    let base_style = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    let width = name_width(cols);
    let name = helpers::truncate_to_width(&item.name, width);

    out.push_str(&base_style);
    out.push_str(if item.is_selected { "[x]" } else { "[ ]" });
    out.push(' ');
    out.push_str(&pad_left_to_width(&item.doc_id, ID_WIDTH));
    out.push(' ');
    out.push_str(helpers::doc_icon(item.doc_type));
    out.push(' ');
    let ranges = helpers::clip_ranges(&item.name, &name, &item.highlight_ranges);
    helpers::push_highlighted(out, &name, &ranges, theme, &base_style, item.is_selected);
    out.push_str(&" ".repeat(width.saturating_sub(helpers::display_width(&name))));
    out.push(' ');
    out.push_str(&pad_left_to_width(&item.size, SIZE_WIDTH));
    out.push(' ');
    out.push_str(&pad_to_width(&helpers::truncate_to_width(&item.upload_time, UPLOAD_WIDTH), UPLOAD_WIDTH));
    out.push(' ');
    if !item.is_selected {
        out.push_str(&Theme::fg(helpers::status_color(item.status, theme)));
    }
    out.push_str(&pad_to_width(item.status.label(), STATUS_WIDTH));
    out.push_str(Theme::reset());
    out.push('\n');
}
