//! Composable UI component renderers.
//!
//! Each component appends one part of the frame to an output buffer.
//!
//! # Components
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`search`]: Search bar and advanced filter panel
//! - [`batch`]: Batch action bar for the current selection
//! - [`table`]: List layout
//! - [`tiles`]: Grid and card layouts
//! - [`empty`]: Empty state message
//! - [`footer`]: Command hints
//! - [`dialogs`]: Preview and statistics panels
//!
//! # Layout
//!
//! [`render_library`] stacks: header, search bar, filter panel (if expanded),
//! batch bar (if anything is selected), one section per group in the chosen
//! view mode (or the empty state), footer.

mod batch;
mod dialogs;
mod empty;
mod footer;
mod header;
mod search;
mod table;
mod tiles;

pub use dialogs::{render_preview, render_statistics};

use crate::app::modes::ViewMode;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GroupSection, LibraryViewModel};

fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

fn render_section_title(out: &mut String, section: &GroupSection, theme: &Theme) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.group_header_fg));
    out.push_str(&format!("▸ {} ({})", section.name, section.items.len()));
    out.push_str(Theme::reset());
    out.push('\n');
}

pub fn render_library(out: &mut String, vm: &LibraryViewModel, theme: &Theme, cols: usize) {
    header::render_header(out, &vm.header, theme, cols);
    search::render_search_bar(out, &vm.search_bar, theme, cols);

    if let Some(panel) = &vm.filter_panel {
        search::render_filter_panel(out, panel, theme, cols);
    }
    if let Some(bar) = &vm.batch_bar {
        batch::render_batch_bar(out, bar, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(out, empty, theme, cols);
    } else {
        if vm.view_mode == ViewMode::List {
            table::render_table_headers(out, theme, cols);
        }
        for section in &vm.sections {
            render_section_title(out, section, theme);
            match vm.view_mode {
                ViewMode::List => table::render_table_rows(out, &section.items, theme, cols),
                ViewMode::Grid => tiles::render_grid(out, &section.items, theme, cols),
                ViewMode::Card => tiles::render_cards(out, &section.items, theme, cols),
            }
        }
    }

    render_border(out, &theme.colors.border, cols);
    footer::render_footer(out, &vm.footer, theme, cols);
}
