//! In-memory table model and the delimited-text loader.
//!
//! A [`Table`] is an ordered list of named [`Column`]s of equal length. Row
//! positions are 0-based here; the header row and spreadsheet numbering are
//! only applied when positions are reported.

use std::{fmt, path::Path};

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use crate::{
    config::HEADER_ROW_OFFSET,
    data::{Cell, parse_cell},
    error::MatchError,
    io_utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnType::Integer => "Integer",
            ColumnType::Float => "Float",
            ColumnType::Text => "Text",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Declared type of the whole column.
    ///
    /// Missing cells do not count against a numeric type, so a column that is
    /// entirely empty is numeric, as a float dataframe column would be.
    pub fn column_type(&self) -> ColumnType {
        let mut saw_float = false;
        for cell in &self.cells {
            match cell {
                Cell::Integer(_) | Cell::Missing => {}
                Cell::Float(_) => saw_float = true,
                Cell::Text(_) => return ColumnType::Text,
            }
        }
        if saw_float {
            ColumnType::Float
        } else {
            ColumnType::Integer
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self, MatchError> {
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            if let Some(bad) = columns.iter().find(|c| c.cells.len() != expected) {
                return Err(MatchError::RaggedTable {
                    column: bad.name.clone(),
                    expected,
                    found: bad.cells.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: Option<u8>,
    pub encoding: &'static Encoding,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            encoding: UTF_8,
        }
    }
}

/// Reads a delimited file with a header row into a [`Table`].
///
/// Rows shorter than the header are padded with missing cells.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table, MatchError> {
    let delimiter = io_utils::resolve_input_delimiter(path, options.delimiter)?;
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let headers = {
        let raw = reader.byte_headers()?.clone();
        io_utils::decode_record(&raw, options.encoding)?
    };
    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];

    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(MatchError::RowTooWide {
                row: row_idx + HEADER_ROW_OFFSET,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let decoded = io_utils::decode_record(&record, options.encoding)?;
        for (idx, column) in cells.iter_mut().enumerate() {
            let raw = decoded.get(idx).map(String::as_str).unwrap_or("");
            column.push(parse_cell(raw));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    let table = Table::new(columns)?;
    debug!(
        "Loaded {} row(s) across {} column(s) from {:?}",
        table.row_count(),
        table.column_count(),
        path
    );
    Ok(table)
}
