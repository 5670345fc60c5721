//! Search bar and advanced filter panel.
//!
//! The search bar is always shown: current keyword on the first line, active
//! structured criteria on the second. The filter panel lists every control
//! with its state when expanded.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterPanelInfo, SearchBarInfo};

const SEARCH_BOX_MARGIN: usize = 2;

pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let query = if search.query.is_empty() {
        " Search: (all documents)".to_string()
    } else {
        format!(" Search: {}", search.query)
    };
    let filters = if search.active_filters.is_empty() {
        " Filters: none".to_string()
    } else {
        format!(" Filters: {}", search.active_filters.join(" | "))
    };

    out.push_str(&format!("{margin}{border}┌{}┐{}\n", "─".repeat(inner_width), Theme::reset()));
    for (line, style) in [(query, Theme::fg(&theme.colors.text_normal)), (filters, Theme::fg(&theme.colors.text_dim))] {
        let line = helpers::truncate_to_width(&line, inner_width);
        out.push_str(&format!(
            "{margin}{border}│{style}{}{border}│{}\n",
            helpers::pad_to_width(&line, inner_width),
            Theme::reset()
        ));
    }
    out.push_str(&format!("{margin}{border}└{}┘{}\n", "─".repeat(inner_width), Theme::reset()));
}

pub fn render_filter_panel(out: &mut String, panel: &FilterPanelInfo, theme: &Theme, cols: usize) {
    let toggle = |label: &str, active: bool| {
        if active {
            format!("{}{}[{label}]{}", Theme::bold(), Theme::fg(&theme.colors.selection_bg), Theme::reset())
        } else {
            format!("{} {label} {}", Theme::fg(&theme.colors.text_dim), Theme::reset())
        }
    };

    let types: Vec<String> = panel
        .doc_types
        .iter()
        .map(|(doc_type, active)| toggle(&doc_type.as_str().to_uppercase(), *active))
        .collect();
    let sizes: Vec<String> = panel
        .size_presets
        .iter()
        .map(|(preset, active)| toggle(preset.label(), *active))
        .collect();
    let date = |value: &str| if value.is_empty() { "----------".to_string() } else { value.to_string() };

    out.push_str(&format!(
        "  {}Advanced filters{}  {}(clear to reset){}\n",
        Theme::bold(),
        Theme::reset(),
        Theme::fg(&theme.colors.text_dim),
        Theme::reset()
    ));
    out.push_str(&format!("    Type:   {}\n", types.join(" ")));
    out.push_str(&format!("    Size:   {}\n", sizes.join(" ")));
    out.push_str(&format!(
        "    Upload: {} .. {}\n",
        date(&panel.date_start),
        date(&panel.date_end)
    ));
    out.push_str(&Theme::fg(&theme.colors.border));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
