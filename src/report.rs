//! Result assembly and rendering.
//!
//! A [`MatchReport`] always carries the `Gene`, `Column 1`, `Column 2`
//! header, so "no matches" is an empty report rather than an absent one.

use std::{borrow::Cow, fmt::Write as _, path::Path};

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;

use crate::{data::Cell, error::MatchError, io_utils, matcher};

pub const REPORT_HEADERS: [&str; 3] = ["Gene", "Column 1", "Column 2"];
pub const RESULTS_FILE_STEM: &str = "results";
const DEFAULT_RESULTS_EXTENSION: &str = ".csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    #[serde(rename = "Gene")]
    pub gene: String,
    #[serde(rename = "Column 1")]
    pub column_1: Vec<usize>,
    #[serde(rename = "Column 2")]
    pub column_2: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchReport {
    records: Vec<MatchRecord>,
}

impl MatchReport {
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn genes(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.gene.as_str()).collect()
    }

    pub fn headers(&self) -> Vec<String> {
        REPORT_HEADERS.iter().map(|h| h.to_string()).collect()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|record| {
                vec![
                    record.gene.clone(),
                    format_positions(&record.column_1),
                    format_positions(&record.column_2),
                ]
            })
            .collect()
    }

    pub fn to_delimited(&self, delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());
        writer
            .write_record(REPORT_HEADERS)
            .context("Writing report headers")?;
        for row in self.rows() {
            writer.write_record(&row).context("Writing report row")?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!("Flushing report: {}", err.error()))?;
        String::from_utf8(bytes).context("Report is not valid UTF-8")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Serializing report to JSON")
    }
}

/// Builds the report for `matches`, looking up each gene's rows in the
/// original `set_1` and `set_2` cells.
pub fn assemble(
    matches: &[String],
    set_1: &[Cell],
    set_2: &[Cell],
) -> Result<MatchReport, MatchError> {
    let records = matches
        .iter()
        .map(|gene| {
            Ok(MatchRecord {
                gene: gene.clone(),
                column_1: matcher::find_positions(set_1, gene)?,
                column_2: matcher::find_positions(set_2, gene)?,
            })
        })
        .collect::<Result<Vec<_>, MatchError>>()?;
    Ok(MatchReport { records })
}

/// Renders positions the way the legacy spreadsheets show them: `[2, 3]`.
pub fn format_positions(positions: &[usize]) -> String {
    format!("[{}]", positions.iter().join(", "))
}

/// `results<ext>`, where `<ext>` is the input's lower-cased extension.
pub fn results_file_name(input: &Path) -> String {
    let extension = if io_utils::is_dash(input) {
        String::new()
    } else {
        io_utils::file_extension(input)
    };
    let extension = if extension.is_empty() {
        DEFAULT_RESULTS_EXTENSION
    } else {
        extension.as_str()
    };
    format!("{RESULTS_FILE_STEM}{extension}")
}

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| display_width(h)).collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_row(headers, &widths));
    let rule = widths.iter().map(|w| "-".repeat((*w).max(3))).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", format_row(&rule, &widths));
    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths));
    }
    output
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    let line = values
        .iter()
        .zip(widths)
        .map(|(value, width)| {
            let cell = sanitize_cell(value);
            let padding = width.saturating_sub(display_width(&cell));
            format!("{cell}{}", " ".repeat(padding))
        })
        .join("  ");
    line.trim_end_matches(' ').to_string()
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn sanitize_cell(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        Cow::Owned(value.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
