//! Voynich folio viewer entry point.
//!
//! Prints the frequency and comparison reports for the given text to stdout,
//! then opens a window showing the folio image.

mod app;
mod display;
mod error;
mod state;
mod ui;
mod util;
mod viewer;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use voynich_core::{
    compare, ComparisonReport, DisplayRequest, FrequencyReport, FrequencyTable, ImageDisplay,
    ReferenceDistribution, ReportConfig, DEFAULT_TITLE,
};
use voynich_io::TextSource;

use display::EguiDisplay;

/// Show a Voynich Manuscript folio next to a letter-frequency analysis.
#[derive(Parser, Debug)]
#[command(name = "voynich-viewer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folio image to display
    #[arg(default_value = "resources/folio93v.jpg")]
    image: PathBuf,

    /// Text to analyze
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// UTF-8 file containing the text to analyze
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
}

impl Args {
    fn source(&self) -> Option<TextSource> {
        match (&self.text, &self.file) {
            (Some(text), _) => Some(TextSource::Inline(text.clone())),
            (None, Some(path)) => Some(TextSource::File(path.clone())),
            (None, None) => None,
        }
    }
}

/// Writes the frequency report, a blank line and the Latin comparison.
fn write_reports<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let table = FrequencyTable::from_text(text);
    let comparison = compare(&table, &ReferenceDistribution::LATIN);
    let config = ReportConfig::default();
    write!(out, "{}", FrequencyReport::new(&table, config))?;
    writeln!(out)?;
    write!(out, "{}", ComparisonReport::new(&comparison, config))?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = match args.source() {
        Some(source) => source
            .read_text()
            .with_context(|| format!("failed to read {}", source.describe()))?,
        None => {
            log::info!("No text given; starting with an empty transcription");
            String::new()
        }
    };

    write_reports(&mut io::stdout().lock(), &text).context("failed to print reports")?;

    let request = DisplayRequest::new(&args.image).with_title(&args.title);
    let mut display = EguiDisplay::new(text, ReferenceDistribution::LATIN);
    display
        .show(&request)
        .with_context(|| format!("failed to display {}", request.image_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports(text: &str) -> String {
        let mut out = Vec::new();
        write_reports(&mut out, text).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_reports_for_aabb() {
        let out = reports("aabb");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + 26 + 1 + 1 + 26);
        assert_eq!(lines[0], "Frequency Analysis of Latin Letters in the text:");
        assert_eq!(lines[1], "a: 2 occurrences (50.00%)");
        assert_eq!(lines[3], "c: 0 occurrences (0.00%)");
        assert_eq!(lines[27], "");
        assert_eq!(lines[28], "Comparison with standard Latin letter frequencies:");
        assert_eq!(lines[29], "a: Expected 8.17%, Found 50.00%");
        assert_eq!(lines[54], "z: Expected 0.07%, Found 0.00%");
    }

    #[test]
    fn test_reports_for_empty_text() {
        let out = reports("");
        assert!(out.contains("e: 0 occurrences (0.00%)"));
        assert!(out.contains("e: Expected 12.70%, Found 0.00%"));
    }

    #[test]
    fn test_args_default_image_and_title() {
        let args = Args::parse_from(["voynich-viewer"]);
        assert_eq!(args.image, PathBuf::from("resources/folio93v.jpg"));
        assert_eq!(args.title, DEFAULT_TITLE);
        assert!(args.source().is_none());

        let args = Args::parse_from(["voynich-viewer", "folio.png", "--text", "daiin"]);
        assert!(matches!(args.source(), Some(TextSource::Inline(ref t)) if t == "daiin"));
    }
}
