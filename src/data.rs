use std::fmt;

use crate::error::MatchError;

/// A single spreadsheet cell as read from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Integer(_) | Cell::Float(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Missing => write!(f, "<missing>"),
        }
    }
}

/// Types a raw field the way a spreadsheet would have stored it.
pub fn parse_cell(raw: &str) -> Cell {
    if raw.is_empty() {
        return Cell::Missing;
    }
    if let Ok(parsed) = raw.parse::<i64>() {
        return Cell::Integer(parsed);
    }
    if is_whole_number(raw) {
        // Too wide for i64; rounding through f64 would merge distinct IDs.
        return Cell::Text(raw.to_string());
    }
    match raw.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Cell::Float(parsed),
        _ => Cell::Text(raw.to_string()),
    }
}

fn is_whole_number(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Maps a cell to the token used for equality comparisons.
///
/// Integer-valued floats render without a decimal point so that `10` and
/// `10.0` produce the same token. Text is returned verbatim.
pub fn canonicalize(cell: &Cell) -> Result<String, MatchError> {
    match cell {
        Cell::Integer(i) => Ok(i.to_string()),
        Cell::Float(f) => Ok(format_float(*f)),
        Cell::Text(s) => Ok(s.clone()),
        Cell::Missing => Err(MatchError::Canonicalization {
            detail: "missing cells must be excluded before canonicalization".to_string(),
        }),
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 {
        if value == 0.0 {
            // -0.0
            return "0".to_string();
        }
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
