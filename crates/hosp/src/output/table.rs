//! Table rendering for entity list commands.

use owo_colors::OwoColorize;
use serde::Serialize;

use hospital_console_rs::view::TableView;

use crate::commands::CommandContext;

use super::helpers::{display_width, pad, truncate_str, MAX_CELL_WIDTH};

/// JSON output structure for a list command.
#[derive(Serialize)]
struct TableOutput<'a> {
    rows: Vec<RowOutput<'a>>,
    total: usize,
    visible: usize,
}

/// JSON output structure for a single row.
#[derive(Serialize)]
struct RowOutput<'a> {
    id: i64,
    cells: &'a [String],
}

/// Renders the visible rows of a view as a table or JSON.
pub fn render_table(ctx: &CommandContext, view: &TableView) {
    if ctx.json_output {
        let output = TableOutput {
            rows: view
                .visible_rows()
                .map(|row| RowOutput {
                    id: row.id,
                    cells: &row.cells,
                })
                .collect(),
            total: view.rows().len(),
            visible: view.visible_rows().count(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }

    let headers = view.headers();
    let visible: Vec<_> = view.visible_rows().collect();

    if visible.is_empty() {
        if !ctx.quiet {
            println!("No matching records.");
        }
        return;
    }

    // Column widths from the header and every visible cell, capped.
    // Char counts, not byte lengths, so multibyte cells stay aligned.
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    let mut id_width = 2;
    for row in &visible {
        id_width = id_width.max(row.id.to_string().len());
        for (i, cell) in row.cells.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(display_width(cell));
            }
        }
    }

    let header_line = std::iter::once(pad("ID", id_width))
        .chain(
            headers
                .iter()
                .zip(&widths)
                .map(|(h, w)| pad(h, *w)),
        )
        .collect::<Vec<_>>()
        .join("  ");
    if ctx.use_colors {
        println!("{}", header_line.bold());
    } else {
        println!("{header_line}");
    }

    for row in &visible {
        let id_cell = pad(&row.id.to_string(), id_width);
        let cells = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(&truncate_str(cell, MAX_CELL_WIDTH), *w))
            .collect::<Vec<_>>()
            .join("  ");
        if ctx.use_colors {
            println!("{}  {}", id_cell.dimmed(), cells);
        } else {
            println!("{id_cell}  {cells}");
        }
    }

    let total = view.rows().len();
    if visible.len() < total && !ctx.quiet {
        println!("({} of {} shown)", visible.len(), total);
    }
}
