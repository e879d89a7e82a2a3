//! Entry point of the matching core: table in, report out.

use log::debug;

use crate::{
    config::MatchConfig,
    error::MatchError,
    matcher,
    normalize::{self, SET_1, SET_2},
    report::{self, MatchReport},
    table::Table,
};

/// Finds the values shared by the first two columns of `table` and reports
/// every row each one occupies.
///
/// `table` is not modified. Any failure aborts the run; a partial report is
/// never returned.
pub fn run(table: &Table, config: &MatchConfig) -> Result<MatchReport, MatchError> {
    let normalized = normalize::normalize_columns(table, config.missing_numeric)?;
    let [set_1, set_2, ..] = normalized.columns() else {
        return Err(MatchError::InsufficientColumns {
            found: normalized.column_count(),
        });
    };

    let tokens_1 = matcher::unique_tokens(&set_1.cells, &config.placeholder_tokens)?;
    let tokens_2 = matcher::unique_tokens(&set_2.cells, &config.placeholder_tokens)?;
    debug!(
        "Unique tokens: {} in {SET_1}, {} in {SET_2}",
        tokens_1.len(),
        tokens_2.len()
    );

    let matches = matcher::intersect(&tokens_1, &tokens_2);
    debug!("Matching tokens: {:?}", matches);

    report::assemble(&matches, &set_1.cells, &set_2.cells)
}
