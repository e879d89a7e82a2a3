use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::PreviewArgs,
    config::HEADER_ROW_OFFSET,
    data::{Cell, canonicalize},
    io_utils,
    normalize::{self, SET_1, SET_2},
    report,
    table::{self, LoadOptions, Table},
};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let options = LoadOptions {
        delimiter: args.delimiter,
        encoding,
    };
    let table = table::load_table(&args.input, &options)
        .with_context(|| format!("Loading table from {:?}", args.input))?;
    let normalized = normalize::normalize_columns(&table, args.missing_numeric)?;

    let (headers, rows) = preview_rows(&normalized, args.rows)?;
    print!("{}", report::render_table(&headers, &rows));
    info!("Displayed {} row(s) from {:?}", rows.len(), args.input);
    Ok(())
}

/// Spreadsheet row number, then each role's raw cell and comparison token.
pub fn preview_rows(normalized: &Table, limit: usize) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let headers = vec![
        "Row".to_string(),
        SET_1.to_string(),
        format!("{SET_1} token"),
        SET_2.to_string(),
        format!("{SET_2} token"),
    ];
    let columns = normalized.columns();
    let mut rows = Vec::new();
    for idx in 0..normalized.row_count().min(limit) {
        let mut row = vec![(idx + HEADER_ROW_OFFSET).to_string()];
        for column in columns.iter().take(2) {
            let cell = &column.cells[idx];
            row.push(raw_display(cell));
            row.push(token_display(cell)?);
        }
        rows.push(row);
    }
    Ok((headers, rows))
}

fn raw_display(cell: &Cell) -> String {
    match cell {
        Cell::Missing => String::new(),
        other => other.to_string(),
    }
}

fn token_display(cell: &Cell) -> Result<String> {
    if cell.is_missing() {
        return Ok("<missing>".to_string());
    }
    Ok(format!("{:?}", canonicalize(cell)?))
}
