//! Header metadata CLI.
//!
//! Reads a raw HTTP header block, or an existing metadata JSON object, and
//! prints the normalized metadata as JSON.
//!
//! ```text
//! header-metadata [--config FILE] [--pretty] headers  [FILE]
//! header-metadata [--config FILE] [--pretty] metadata [FILE]
//! ```

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use header_metadata::config::{load_config, MetadataConfig};
use header_metadata::metadata::{parse_header_block, HeaderFilter};
use header_metadata::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "header-metadata")]
#[command(about = "Normalize HTTP headers into document metadata", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a raw header block (stdin when no file is given)
    Headers { file: Option<PathBuf> },
    /// Re-filter a metadata JSON object (stdin when no file is given)
    Metadata { file: Option<PathBuf> },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MetadataConfig::default(),
    };

    logging::init(&config.observability)?;
    metrics::describe_metrics();

    tracing::debug!(
        max_multi_values = config.filter.max_multi_values,
        extra_ignored = config.filter.extra_ignored_headers.len(),
        case_insensitive = config.filter.case_insensitive,
        "Configuration loaded"
    );

    let filter = HeaderFilter::from_config(&config.filter);

    let output = match &cli.command {
        Commands::Headers { file } => {
            let input = read_input(file.as_ref())?;
            let records = parse_header_block(&input)?;
            Value::Object(filter.filter_headers(&records)?)
        }
        Commands::Metadata { file } => {
            let input = read_input(file.as_ref())?;
            match serde_json::from_str::<Value>(&input)? {
                Value::Null => Value::Null,
                Value::Object(map) => filter
                    .filter_metadata(Some(&map))
                    .map_or(Value::Null, Value::Object),
                other => {
                    return Err(format!("expected a JSON object or null, got {other}").into());
                }
            }
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
