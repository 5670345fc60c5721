//! Grid and card layout renderers.
//!
//! Grid packs compact fixed-width tiles side by side. Card gives each
//! document a bordered block with its tag and usage statistics.

use crate::ui::helpers::{self, pad_to_width, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const TILE_WIDTH: usize = 26;
const TILE_GAP: usize = 2;

pub fn render_grid(out: &mut String, items: &[DisplayItem], theme: &Theme, cols: usize) {
    let per_row = (cols.saturating_sub(2) / (TILE_WIDTH + TILE_GAP)).max(1);

    for row in items.chunks(per_row) {
        let lines: [Vec<String>; 3] = [
            row.iter().map(|item| tile_title(item, theme)).collect(),
            row.iter().map(|item| tile_line(&item.size, item, theme)).collect(),
            row.iter().map(|item| tile_status(item, theme)).collect(),
        ];
        for line in lines {
            out.push_str("  ");
            out.push_str(&line.join(&" ".repeat(TILE_GAP)));
            out.push('\n');
        }
        out.push('\n');
    }
}

fn tile_style(item: &DisplayItem, theme: &Theme) -> String {
    if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}

fn tile_title(item: &DisplayItem, theme: &Theme) -> String {
    let style = tile_style(item, theme);
    let marker = if item.is_selected { "[x]" } else { "[ ]" };
    let prefix = format!("{marker} {} ", helpers::doc_icon(item.doc_type));
    let name = truncate_to_width(&item.name, TILE_WIDTH - helpers::display_width(&prefix));

    let mut tile = String::new();
    tile.push_str(&style);
    tile.push_str(&prefix);
    let ranges = helpers::clip_ranges(&item.name, &name, &item.highlight_ranges);
    helpers::push_highlighted(&mut tile, &name, &ranges, theme, &style, item.is_selected);
    tile.push_str(&" ".repeat(TILE_WIDTH.saturating_sub(helpers::display_width(&prefix) + helpers::display_width(&name))));
    tile.push_str(Theme::reset());
    tile
}

fn tile_line(text: &str, item: &DisplayItem, theme: &Theme) -> String {
    let text = format!("    #{} · {text}", item.doc_id);
    format!(
        "{}{}{}",
        tile_style(item, theme),
        pad_to_width(&truncate_to_width(&text, TILE_WIDTH), TILE_WIDTH),
        Theme::reset()
    )
}

fn tile_status(item: &DisplayItem, theme: &Theme) -> String {
    let color = if item.is_selected {
        tile_style(item, theme)
    } else {
        Theme::fg(helpers::status_color(item.status, theme))
    };
    format!(
        "{color}{}{}",
        pad_to_width(&format!("    {}", item.status.label()), TILE_WIDTH),
        Theme::reset()
    )
}

pub fn render_cards(out: &mut String, items: &[DisplayItem], theme: &Theme, cols: usize) {
    let inner = cols.saturating_sub(6).max(20);
    let border = Theme::fg(&theme.colors.border);

    for item in items {
        let style = tile_style(item, theme);
        let marker = if item.is_selected { "[x]" } else { "[ ]" };
        let title_prefix = format!(" {marker} {} ", helpers::doc_icon(item.doc_type));
        let name = truncate_to_width(&item.name, inner.saturating_sub(helpers::display_width(&title_prefix)));

        out.push_str(&format!("  {border}╭{}╮{}\n", "─".repeat(inner), Theme::reset()));

        out.push_str(&format!("  {border}│{style}{title_prefix}"));
        let ranges = helpers::clip_ranges(&item.name, &name, &item.highlight_ranges);
        helpers::push_highlighted(out, &name, &ranges, theme, &style, item.is_selected);
        out.push_str(&" ".repeat(inner.saturating_sub(helpers::display_width(&title_prefix) + helpers::display_width(&name))));
        out.push_str(&format!("{}{border}│{}\n", Theme::reset(), Theme::reset()));

        let details = [
            format!(" #{}  {}  {}", item.doc_id, item.size, item.upload_time),
            format!(" Tag: {}", item.tag.as_deref().unwrap_or("-")),
            format!(" Searches: {}  Hit rate: {}", item.search_count, item.hit_rate),
        ];
        for line in details {
            card_line(out, &line, &Theme::fg(&theme.colors.text_dim), &border, inner);
        }
        card_line(
            out,
            &format!(" {}", item.status.label()),
            &Theme::fg(helpers::status_color(item.status, theme)),
            &border,
            inner,
        );

        out.push_str(&format!("  {border}╰{}╯{}\n", "─".repeat(inner), Theme::reset()));
    }
}

fn card_line(out: &mut String, text: &str, style: &str, border: &str, inner: usize) {
    out.push_str(&format!(
        "  {border}│{style}{}{}{border}│{}\n",
        pad_to_width(&truncate_to_width(text, inner), inner),
        Theme::reset(),
        Theme::reset()
    ));
}
