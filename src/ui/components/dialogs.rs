//! Preview and statistics panels.
//!
//! These render the payload of [`Action::ShowPreview`] and
//! [`Action::ShowStatistics`] for a terminal, where no viewer can be embedded
//! and charts are drawn with block characters.
//!
//! [`Action::ShowPreview`]: crate::app::Action::ShowPreview
//! [`Action::ShowStatistics`]: crate::app::Action::ShowStatistics

use crate::preview::Viewer;
use crate::statistics::StatisticsReport;
use crate::ui::helpers::{self, pad_left_to_width, pad_to_width, truncate_to_width};
use crate::ui::theme::Theme;

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 8;

pub fn render_preview(out: &mut String, doc_name: &str, viewer: &Viewer, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&helpers::center(&format!(" Preview: {doc_name} "), cols));
    out.push_str(Theme::reset());
    out.push('\n');

    match viewer {
        Viewer::Unsupported { message } => {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&format!("  {message}"));
        }
        other => {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&format!("  Open in {}: {}", other.kind(), other.url().unwrap_or_default()));
        }
    }
    out.push_str(Theme::reset());
    out.push('\n');
}

pub fn render_statistics(out: &mut String, report: &StatisticsReport, theme: &Theme, cols: usize) {
    let bar_room = cols.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 6).max(10);

    let max_count = report.search_counts.iter().map(|bar| bar.value).max().unwrap_or(0);
    chart_title(out, "Search count per document", theme, cols);
    for bar in &report.search_counts {
        let len = scaled(bar.value as f64, max_count as f64, bar_room);
        chart_row(out, &bar.name, &bar.value.to_string(), len, theme);
    }

    out.push('\n');
    chart_title(out, "Hit rate per document", theme, cols);
    for slice in &report.hit_rates {
        let len = scaled(slice.value, 100.0, bar_room);
        chart_row(out, &slice.name, &format!("{:.1}%", slice.value), len, theme);
    }
}

fn chart_title(out: &mut String, title: &str, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.group_header_fg));
    out.push_str(&helpers::center(title, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

fn chart_row(out: &mut String, label: &str, value: &str, len: usize, theme: &Theme) {
    out.push_str("  ");
    out.push_str(&pad_to_width(&truncate_to_width(label, LABEL_WIDTH), LABEL_WIDTH));
    out.push(' ');
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push_str(&"█".repeat(len));
    out.push_str(Theme::reset());
    out.push(' ');
    out.push_str(&pad_left_to_width(value, VALUE_WIDTH));
    out.push('\n');
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scaled(value: f64, max: f64, room: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max).min(1.0) * room as f64).round() as usize
}
