//! voynich: command-line letter-frequency analyzer.
//!
//! This binary provides a headless CLI for letter-frequency analysis.
#![allow(clippy::uninlined_format_args)]

use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use thiserror::Error;

use voynich_core::{compare, FrequencyTable, ReferenceDistribution, ReportConfig};
use voynich_io::{ExportFormat, ReportWriter, Sections, TextSource};

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    VoynichIo(#[from] voynich_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] voynich_core::Error),
}

/// Report encoding.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Human-readable reports
    #[default]
    Text,
    /// JSON document
    Json,
    /// CSV, one row per letter
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ExportFormat::Text,
            Format::Json => ExportFormat::Json,
            Format::Csv => ExportFormat::Csv,
        }
    }
}

/// Letter-frequency analysis of Voynich Manuscript transcriptions.
#[derive(Parser, Debug)]
#[command(name = "voynich")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the text comes from. Reads stdin when neither is given.
#[derive(Args, Debug)]
#[group(multiple = false)]
struct InputArgs {
    /// Text to analyze
    #[arg(short, long)]
    text: Option<String>,

    /// UTF-8 file containing the text to analyze
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn source(&self) -> TextSource {
        match (&self.text, &self.file) {
            (Some(text), _) => TextSource::Inline(text.clone()),
            (None, Some(path)) => TextSource::File(path.clone()),
            (None, None) => TextSource::Stdin,
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Decimal places for percentages
    #[arg(short, long, default_value = "2")]
    precision: usize,

    /// Output encoding
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count each letter and its share of all letters
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare observed percentages against a reference distribution
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// JSON reference distribution (defaults to Latin)
        #[arg(short, long)]
        reference: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print both the frequency table and the comparison
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// JSON reference distribution (defaults to Latin)
        #[arg(short, long)]
        reference: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the reference distribution
    Reference {
        /// JSON reference distribution (defaults to Latin)
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Decimal places for percentages
        #[arg(short, long, default_value = "2")]
        precision: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_reference(path: Option<&Path>) -> Result<ReferenceDistribution> {
    match path {
        Some(path) => {
            let reference = voynich_io::load_reference(path)?;
            info!(
                "Using reference distribution '{}' from {}",
                reference.name(),
                path.display()
            );
            Ok(reference)
        }
        None => Ok(ReferenceDistribution::LATIN),
    }
}

/// Runs one analysis subcommand. `stdin` is read only for [`TextSource::Stdin`]
/// and `stdout` is written only when no `--output` file is given.
fn run_analysis<R: Read, W: Write>(
    input: &InputArgs,
    reference: Option<&Path>,
    output: &OutputArgs,
    sections: Sections,
    stdin: R,
    stdout: W,
) -> Result<()> {
    let config = ReportConfig::new(output.precision)?;
    let reference = load_reference(reference)?;

    let source = input.source();
    info!("Reading text from {}", source.describe());
    let text = source.read_text_with(stdin)?;

    let table = FrequencyTable::from_text(&text);
    debug!(
        "Counted {} letters ({} outside a-z skipped)",
        table.total(),
        table.unmapped_letters()
    );
    if table.is_empty() {
        warn!("No letters a-z in input; all percentages are 0");
    }
    let comparison = compare(&table, &reference);

    let format = output.format.into();
    match &output.output {
        Some(path) => {
            info!("Writing output to: {}", path.display());
            ReportWriter::create(path)?
                .write_analysis(format, sections, &table, &comparison, config)?;
        }
        None => {
            ReportWriter::new(stdout)
                .write_analysis(format, sections, &table, &comparison, config)?;
        }
    }
    Ok(())
}

fn print_reference<W: Write>(
    reference: Option<&Path>,
    precision: usize,
    mut out: W,
) -> Result<()> {
    let config = ReportConfig::new(precision)?;
    let reference = load_reference(reference)?;
    let p = config.precision;

    writeln!(out, "{} letter frequencies:", reference.name())?;
    for (letter, value) in ('a'..='z').zip(reference.percentages()) {
        writeln!(out, "{}: {:.p$}%", letter, value)?;
    }
    out.flush()?;
    Ok(())
}

/// Dispatches `command` with the given standard input and output.
fn run<R: Read, W: Write>(command: &Commands, stdin: R, stdout: W) -> Result<()> {
    let (input, reference, output, sections) = match command {
        Commands::Analyze { input, output } => (input, None, output, Sections::FREQUENCY),
        Commands::Compare {
            input,
            reference,
            output,
        } => (input, reference.as_deref(), output, Sections::COMPARISON),
        Commands::Report {
            input,
            reference,
            output,
        } => (input, reference.as_deref(), output, Sections::ALL),
        Commands::Reference {
            reference,
            precision,
        } => return print_reference(reference.as_deref(), *precision, stdout),
    };
    run_analysis(input, reference, output, sections, stdin, stdout)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(
        &cli.command,
        io::stdin().lock(),
        BufWriter::new(io::stdout().lock()),
    )
}
