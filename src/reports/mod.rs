use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::{self, IsTerminal};
use std::path::Path;

use wordfit::cache::WidthCache;
use wordfit::config::SelectionParams;
use wordfit::selector::Selection;

/// Where the selection ends up. A terminal gets the table panel; anything
/// else gets the plain newline-joined list so piped output stays
/// machine-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSurface {
    Panel,
    Plain,
}

/// Resolved once at startup, not per write.
pub fn resolve_surface() -> OutputSurface {
    if io::stdout().is_terminal() {
        OutputSurface::Panel
    } else {
        OutputSurface::Plain
    }
}

pub fn print_selection(surface: OutputSurface, cache: &WidthCache, selection: &Selection) {
    match surface {
        OutputSurface::Panel => print_panel(cache, selection),
        OutputSurface::Plain => {
            for word in &selection.words {
                println!("{}", word);
            }
        }
    }
}

fn print_panel(cache: &WidthCache, selection: &Selection) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Word", "Width"]);

    for word in &selection.words {
        let width = cache.get(word).unwrap_or(0);
        table.add_row(vec![
            Cell::new(word),
            Cell::new(width).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

/// Notices about reduced precision or shortfall, kept off stdout so the
/// plain selection list stays clean when piped.
pub fn print_diagnostics(selection: &Selection, params: &SelectionParams) {
    if selection.widened() {
        eprintln!(
            "⚠️  Cycled {} times. Eventual miss tolerance: {}",
            selection.cycles_run, selection.final_tolerance
        );
    }
    if selection.words.len() < params.count {
        eprintln!(
            "⚠️  Found {} of {} requested words.",
            selection.words.len(),
            params.count
        );
    }
}

pub fn print_cache_summary(cache: &WidthCache, path: &Path) {
    let min = cache.iter().map(|(_, w)| w).min();
    let max = cache.iter().map(|(_, w)| w).max();

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Entries", "Min width", "Max width"]);
    table.add_row(vec![
        Cell::new(cache.len()).set_alignment(CellAlignment::Right),
        Cell::new(fmt_width(min)).set_alignment(CellAlignment::Right),
        Cell::new(fmt_width(max)).set_alignment(CellAlignment::Right),
    ]);

    println!("{table}");
    println!("💾 Cache written to '{}'", path.display());
}

fn fmt_width(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
