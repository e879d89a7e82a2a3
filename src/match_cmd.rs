use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    cli::{MatchArgs, OutputFormat},
    config::MatchConfig,
    io_utils, pipeline, printable_delimiter,
    report::{self, MatchReport},
    table::{self, LoadOptions},
};

pub fn execute(args: &MatchArgs) -> Result<()> {
    let input_encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let output_encoding = io_utils::resolve_encoding(args.output_encoding.as_deref())?;
    let input_delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter)?;
    let config = resolve_config(args)?;
    debug!("Match configuration: {:?}", config);

    info!(
        "Matching '{}' with delimiter '{}'",
        args.input.display(),
        printable_delimiter(input_delimiter)
    );
    let options = LoadOptions {
        delimiter: Some(input_delimiter),
        encoding: input_encoding,
    };
    let table = table::load_table(&args.input, &options)
        .with_context(|| format!("Loading table from {:?}", args.input))?;
    let report = pipeline::run(&table, &config)
        .with_context(|| format!("Matching columns of {:?}", args.input))?;

    let output = output_path(args);
    let rendered = render_output(&report, args, output.as_deref(), input_delimiter)?;
    io_utils::write_encoded(output.as_deref(), &rendered, output_encoding)?;

    if args.table {
        let rendered_table = report::render_table(&report.headers(), &report.rows());
        // Results on stdout must stay parseable.
        if writes_to_stdout(output.as_deref()) {
            eprint!("{rendered_table}");
        } else {
            print!("{rendered_table}");
        }
    }

    match &output {
        Some(path) if !io_utils::is_dash(path) => info!(
            "Found {} matching gene(s) across {} row(s); results written to {:?}",
            report.len(),
            table.row_count(),
            path
        ),
        _ => info!(
            "Found {} matching gene(s) across {} row(s)",
            report.len(),
            table.row_count()
        ),
    }
    Ok(())
}

/// Layers CLI overrides on top of the config file (or the defaults).
fn resolve_config(args: &MatchArgs) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if args.no_default_placeholders {
        config.placeholder_tokens.clear();
    }
    for token in &args.placeholders {
        if !config.is_placeholder(token) {
            config.placeholder_tokens.push(token.clone());
        }
    }
    if let Some(policy) = args.missing_numeric {
        config.missing_numeric = policy;
    }
    Ok(config)
}

fn writes_to_stdout(output: Option<&Path>) -> bool {
    output.is_none_or(io_utils::is_dash)
}

/// `None` means stdout.
fn output_path(args: &MatchArgs) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }
    if io_utils::is_dash(&args.input) {
        return None;
    }
    let file_name = match args.format {
        OutputFormat::Delimited => report::results_file_name(&args.input),
        OutputFormat::Json => format!("{}.json", report::RESULTS_FILE_STEM),
    };
    let dir = args.input.parent().unwrap_or_else(|| Path::new(""));
    Some(dir.join(file_name))
}

fn render_output(
    report: &MatchReport,
    args: &MatchArgs,
    output: Option<&Path>,
    input_delimiter: u8,
) -> Result<String> {
    match args.format {
        OutputFormat::Delimited => {
            let delimiter =
                io_utils::resolve_output_delimiter(output, args.output_delimiter, input_delimiter);
            report.to_delimited(delimiter)
        }
        OutputFormat::Json => report.to_json().map(|json| json + "\n"),
    }
}
