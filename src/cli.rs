use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::MissingNumericPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about = "Find genes shared by two spreadsheet columns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Match the first two columns of a file and write every shared value with its rows
    Match(MatchArgs),
    /// Preview the first rows of Set 1 and Set 2 with the tokens they compare as
    Preview(PreviewArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Same delimited layout as the input
    #[default]
    Delimited,
    Json,
}

#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Input file whose first two columns are compared (`-` for stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Output file (`-` for stdout); defaults to `results<ext>` next to the input
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// YAML file with `placeholder_tokens` and `missing_numeric` settings
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Extra token to exclude from matching (repeatable)
    #[arg(long = "placeholder", action = clap::ArgAction::Append)]
    pub placeholders: Vec<String>,
    /// Start from an empty placeholder list instead of the defaults or the config file
    #[arg(long = "no-default-placeholders")]
    pub no_default_placeholders: bool,
    /// How empty cells in numeric columns are treated
    #[arg(long = "missing-numeric", value_enum)]
    pub missing_numeric: Option<MissingNumericPolicy>,
    /// CSV delimiter character for reading input
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Delimiter to use for output (defaults to input delimiter)
    #[arg(long = "output-delimiter", value_parser = parse_delimiter)]
    pub output_delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Character encoding for the output file/stdout (defaults to utf-8)
    #[arg(long = "output-encoding")]
    pub output_encoding: Option<String>,
    /// Output layout
    #[arg(long = "format", value_enum, default_value = "delimited")]
    pub format: OutputFormat,
    /// Also render the matches as an aligned table (on stderr when results go to stdout)
    #[arg(long = "table")]
    pub table: bool,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input file to preview
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Number of rows to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
    /// CSV delimiter character
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding for input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// How empty cells in numeric columns are treated
    #[arg(long = "missing-numeric", value_enum, default_value = "skip")]
    pub missing_numeric: MissingNumericPolicy,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
