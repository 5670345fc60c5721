//! Shared rendering utilities and helpers.
//!
//! Text is measured in terminal columns with `unicode-width`, so document
//! names in CJK scripts (two columns per character) align with ASCII ones.
//! Highlight ranges are char indices, matching what the keyword matcher
//! produces.

use crate::domain::{DocStatus, DocType};
use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `max_width` columns, ending with `…` when cut.
///
/// # Example
///
/// ```rust
/// use docshelf::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("roadmap.pdf", 20), "roadmap.pdf");
/// assert_eq!(truncate_to_width("roadmap.pdf", 5), "road…");
/// assert_eq!(truncate_to_width("数据分析报告.pdf", 7), "数据分…");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Right-pads `text` with spaces to `width` columns.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(padding))
}

/// Left-pads `text` with spaces to `width` columns.
#[must_use]
pub fn pad_left_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(padding))
}

/// Centers `text` in `width` columns.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text_width = display_width(text);
    let left = width.saturating_sub(text_width) / 2;
    let right = width.saturating_sub(left + text_width);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Short type badge shown in front of document names.
#[must_use]
pub const fn doc_icon(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::Pdf => "PDF",
        DocType::Docx => "DOC",
        DocType::Xlsx => "XLS",
        DocType::Image => "IMG",
        DocType::Other => "???",
    }
}

/// Theme color for a document status.
#[must_use]
pub fn status_color(status: DocStatus, theme: &Theme) -> &str {
    match status {
        DocStatus::Processing => &theme.colors.status_processing,
        DocStatus::Indexed => &theme.colors.status_indexed,
        DocStatus::IndexFailed => &theme.colors.status_failed,
    }
}

/// Restricts highlight ranges computed on `full` to the part `shown` still displays.
///
/// `shown` is `full` or its [`truncate_to_width`] result; the trailing
/// ellipsis is never highlighted.
#[must_use]
pub fn clip_ranges(full: &str, shown: &str, ranges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    if shown == full {
        return ranges.to_vec();
    }
    let kept = shown.strip_suffix(ELLIPSIS).unwrap_or(shown).chars().count();
    ranges
        .iter()
        .map(|&(start, end)| (start, end.min(kept)))
        .filter(|(start, end)| start < end)
        .collect()
}

/// Writes `text` with highlighted char ranges, restoring `base_style` after each.
///
/// Ranges beyond the end of `text` are clipped. Selected items are written
/// without highlights so that match colors do not fight the selection colors.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_style: &str,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }

        out.extend(&chars[pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(base_style);
        pos = end;
    }

    out.extend(&chars[pos..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_count_cjk_as_two_columns() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("报告"), 4);
        assert_eq!(pad_to_width("报告", 6), "报告  ");
        assert_eq!(pad_left_to_width("1 KB", 6), "  1 KB");
    }

    #[test]
    fn truncation_respects_wide_chars() {
        let cut = truncate_to_width("用户调研报告.docx", 8);
        assert!(display_width(&cut) <= 8);
        assert!(cut.ends_with(ELLIPSIS));
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn highlighting_wraps_ranges_and_clips() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Banana", &[(1, 3), (5, 40)], &theme, "", false);
        assert!(out.starts_with('B'));
        assert_eq!(out.matches(Theme::reset()).count(), 2);

        let mut plain = String::new();
        push_highlighted(&mut plain, "Banana", &[(1, 3)], &theme, "", true);
        assert_eq!(plain, "Banana");
    }

    #[test]
    fn clipped_ranges_stop_before_the_ellipsis() {
        let full = "Quarterly report";
        let shown = truncate_to_width(full, 8);
        assert_eq!(shown, "Quarter…");

        let ranges = clip_ranges(full, &shown, &[(4, 9), (10, 16)]);
        assert_eq!(ranges, [(4, 7)]);
        assert_eq!(clip_ranges(full, full, &[(10, 16)]), [(10, 16)]);

        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, &shown, &ranges, &theme, "", false);
        assert!(out.ends_with(&format!("{}…", Theme::reset())));
    }
}
