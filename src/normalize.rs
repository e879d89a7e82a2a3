//! Column role assignment and numeric coercion.

use log::debug;

use crate::{
    config::MissingNumericPolicy,
    data::Cell,
    error::MatchError,
    table::{Column, Table},
};

pub const SET_1: &str = "Set 1";
pub const SET_2: &str = "Set 2";

/// Returns a copy of `table` with its first two columns named [`SET_1`] and
/// [`SET_2`] and every numeric column coerced to integer cells.
///
/// Roles are bound by position, never by header name. Floats in numeric
/// columns are truncated toward zero; text-typed columns are left alone.
pub fn normalize_columns(
    table: &Table,
    missing: MissingNumericPolicy,
) -> Result<Table, MatchError> {
    let found = table.column_count();
    if found < 2 {
        return Err(MatchError::InsufficientColumns { found });
    }

    let columns = table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let name = match idx {
                0 => SET_1.to_string(),
                1 => SET_2.to_string(),
                _ => column.name.clone(),
            };
            let column_type = column.column_type();
            let cells = if column_type.is_numeric() {
                debug!("Coercing {column_type} column '{}' to integers", column.name);
                column
                    .cells
                    .iter()
                    .map(|cell| coerce_to_integer(cell, missing))
                    .collect()
            } else {
                column.cells.clone()
            };
            Column::new(name, cells)
        })
        .collect();
    Table::new(columns)
}

fn coerce_to_integer(cell: &Cell, missing: MissingNumericPolicy) -> Cell {
    match cell {
        Cell::Float(f) => {
            let truncated = f.trunc();
            // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
            if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
                Cell::Integer(truncated as i64)
            } else {
                Cell::Float(truncated)
            }
        }
        Cell::Missing if missing == MissingNumericPolicy::ZeroFill => Cell::Integer(0),
        other => other.clone(),
    }
}
