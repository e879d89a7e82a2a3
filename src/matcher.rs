//! Deduplication, intersection, and row-position lookup over canonical tokens.

use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    config::HEADER_ROW_OFFSET,
    data::{Cell, canonicalize},
    error::MatchError,
};

/// Unique canonical tokens of `cells` in first-seen order.
///
/// Missing cells are dropped before canonicalization and any token listed in
/// `placeholders` is discarded.
pub fn unique_tokens(cells: &[Cell], placeholders: &[String]) -> Result<Vec<String>, MatchError> {
    let tokens = cells
        .iter()
        .filter(|cell| !cell.is_missing())
        .map(canonicalize)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tokens
        .into_iter()
        .unique()
        .filter(|token| !placeholders.contains(token))
        .collect())
}

/// Tokens present in both lists, in the order they appear in `set_1`.
pub fn intersect(set_1: &[String], set_2: &[String]) -> Vec<String> {
    let lookup: HashSet<&str> = set_2.iter().map(String::as_str).collect();
    set_1
        .iter()
        .filter(|token| lookup.contains(token.as_str()))
        .cloned()
        .collect()
}

/// Every spreadsheet row of `cells` whose canonical token equals `token`.
///
/// Scans the full, non-deduplicated column so repeated occurrences are all
/// reported. Rows are numbered as `index + HEADER_ROW_OFFSET`.
pub fn find_positions(cells: &[Cell], token: &str) -> Result<Vec<usize>, MatchError> {
    let mut positions = Vec::new();
    for (index, cell) in cells.iter().enumerate() {
        if cell.is_missing() {
            continue;
        }
        if canonicalize(cell)? == token {
            positions.push(index + HEADER_ROW_OFFSET);
        }
    }
    Ok(positions)
}
