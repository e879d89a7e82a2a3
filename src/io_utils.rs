//! I/O helpers shared by the loader and the result writer.
//!
//! - **Format resolution**: the input extension decides whether the file can
//!   be read at all and which delimiter it uses (`.csv`/`.txt` → comma,
//!   `.tsv` → tab). Spreadsheet binaries are rejected up front.
//! - **Encoding**: input decoding and output encoding via `encoding_rs`,
//!   defaulting to UTF-8.
//! - **stdin/stdout**: the `-` path convention routes through standard streams.

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use encoding_rs::{Encoding, UTF_8};

use crate::error::MatchError;

pub const DEFAULT_CSV_DELIMITER: u8 = b',';
pub const DEFAULT_TSV_DELIMITER: u8 = b'\t';

pub fn is_dash(path: &Path) -> bool {
    path == Path::new("-")
}

/// Lower-cased extension including the leading dot, or an empty string.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    if let Some(value) = label {
        Encoding::for_label(value.trim().as_bytes())
            .ok_or_else(|| anyhow!("Unknown encoding '{value}'"))
    } else {
        Ok(UTF_8)
    }
}

/// Picks the delimiter for `path`, refusing formats the loader cannot read.
pub fn resolve_input_delimiter(path: &Path, provided: Option<u8>) -> Result<u8, MatchError> {
    if is_dash(path) {
        return Ok(provided.unwrap_or(DEFAULT_CSV_DELIMITER));
    }
    let extension = file_extension(path);
    let detected = match extension.as_str() {
        ".csv" | ".txt" => DEFAULT_CSV_DELIMITER,
        ".tsv" => DEFAULT_TSV_DELIMITER,
        _ => {
            return Err(MatchError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        }
    };
    Ok(provided.unwrap_or(detected))
}

pub fn resolve_output_delimiter(path: Option<&Path>, provided: Option<u8>, fallback: u8) -> u8 {
    if let Some(delim) = provided {
        return delim;
    }
    match path.map(file_extension).as_deref() {
        Some(".tsv") => DEFAULT_TSV_DELIMITER,
        Some(".csv") => DEFAULT_CSV_DELIMITER,
        _ => fallback,
    }
}

pub fn open_csv_reader<R>(reader: R, delimiter: u8) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(delimiter)
        .double_quote(true)
        .flexible(true);
    builder.from_reader(reader)
}

pub fn open_csv_reader_from_path(
    path: &Path,
    delimiter: u8,
) -> Result<csv::Reader<Box<dyn Read>>, MatchError> {
    let reader: Box<dyn Read> = if is_dash(path) {
        Box::new(std::io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Box::new(BufReader::new(file))
    };
    Ok(open_csv_reader(reader, delimiter))
}

pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Result<String, MatchError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        Err(MatchError::Decode {
            encoding: encoding.name(),
        })
    } else {
        Ok(text.into_owned())
    }
}

pub fn decode_record(
    record: &csv::ByteRecord,
    encoding: &'static Encoding,
) -> Result<Vec<String>, MatchError> {
    record
        .iter()
        .map(|field| decode_bytes(field, encoding))
        .collect()
}

/// Writes UTF-8 `text` to `path` (stdout when `None` or `-`) in `encoding`.
pub fn write_encoded(path: Option<&Path>, text: &str, encoding: &'static Encoding) -> Result<()> {
    let (encoded, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(anyhow!("Failed to encode output using {}", encoding.name()));
    }
    match path {
        Some(p) if !is_dash(p) => {
            let mut file = File::create(p).with_context(|| format!("Creating output file {p:?}"))?;
            file.write_all(&encoded)
                .with_context(|| format!("Writing output file {p:?}"))?;
            file.flush().context("Flushing output file")?;
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&encoded).context("Writing to stdout")?;
            stdout.flush().context("Flushing stdout")?;
        }
    }
    Ok(())
}
