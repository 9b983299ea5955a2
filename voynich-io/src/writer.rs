//! Report writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use voynich_core::{
    Comparison, ComparisonReport, FrequencyReport, FrequencyTable, LetterComparison,
    LetterFrequency, ReportConfig,
};

use crate::Result;

/// Output encoding for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The two human-readable reports.
    #[default]
    Text,
    /// A single JSON document.
    Json,
    /// One CSV row per letter.
    Csv,
}

/// Which parts of the analysis to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub frequency: bool,
    pub comparison: bool,
}

impl Sections {
    pub const FREQUENCY: Self = Self {
        frequency: true,
        comparison: false,
    };
    pub const COMPARISON: Self = Self {
        frequency: false,
        comparison: true,
    };
    pub const ALL: Self = Self {
        frequency: true,
        comparison: true,
    };
}

/// Serializable view of one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisExport {
    /// Name of the reference distribution.
    pub reference: String,
    /// Number of `a`..=`z` letters counted.
    pub total: u64,
    /// Alphabetic characters outside `a`..=`z`.
    pub unmapped_letters: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letters: Option<Vec<LetterFrequency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Vec<LetterComparison>>,
}

impl AnalysisExport {
    /// Collects the requested sections.
    #[must_use]
    pub fn new(table: &FrequencyTable, comparison: &Comparison, sections: Sections) -> Self {
        Self {
            reference: comparison.reference_name().to_string(),
            total: table.total(),
            unmapped_letters: table.unmapped_letters(),
            letters: sections.frequency.then(|| table.letters().collect()),
            comparison: sections.comparison.then(|| comparison.rows().to_vec()),
        }
    }
}

/// Writes analysis reports to a file or any other sink.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl ReportWriter<BufWriter<File>> {
    /// Creates a writer to a new file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wraps an existing sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the requested sections in `format` and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or JSON encoding fails.
    pub fn write_analysis(
        &mut self,
        format: ExportFormat,
        sections: Sections,
        table: &FrequencyTable,
        comparison: &Comparison,
        config: ReportConfig,
    ) -> Result<()> {
        match format {
            ExportFormat::Text => self.write_text(sections, table, comparison, config)?,
            ExportFormat::Json => {
                let export = AnalysisExport::new(table, comparison, sections);
                serde_json::to_writer_pretty(&mut self.writer, &export)?;
                writeln!(self.writer)?;
            }
            ExportFormat::Csv => self.write_csv(sections, table, comparison, config)?,
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_text(
        &mut self,
        sections: Sections,
        table: &FrequencyTable,
        comparison: &Comparison,
        config: ReportConfig,
    ) -> Result<()> {
        if sections.frequency {
            write!(self.writer, "{}", FrequencyReport::new(table, config))?;
        }
        if sections.comparison {
            if sections.frequency {
                writeln!(self.writer)?;
            }
            write!(self.writer, "{}", ComparisonReport::new(comparison, config))?;
        }
        Ok(())
    }

    fn write_csv(
        &mut self,
        sections: Sections,
        table: &FrequencyTable,
        comparison: &Comparison,
        config: ReportConfig,
    ) -> Result<()> {
        let p = config.precision;
        let mut header = vec!["letter"];
        if sections.frequency {
            header.extend(["count", "percentage"]);
        }
        if sections.comparison {
            header.push("expected");
            if !sections.frequency {
                header.push("observed");
            }
        }
        writeln!(self.writer, "{}", header.join(","))?;

        for (freq, cmp) in table.letters().zip(comparison.rows()) {
            write!(self.writer, "{}", freq.letter)?;
            if sections.frequency {
                write!(self.writer, ",{},{:.p$}", freq.count, freq.percentage)?;
            }
            if sections.comparison {
                write!(self.writer, ",{:.p$}", cmp.expected)?;
                if !sections.frequency {
                    write!(self.writer, ",{:.p$}", cmp.observed)?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voynich_core::{compare, ReferenceDistribution};

    fn analyze(text: &str) -> (FrequencyTable, Comparison) {
        let table = FrequencyTable::from_text(text);
        let comparison = compare(&table, &ReferenceDistribution::LATIN);
        (table, comparison)
    }

    fn render(format: ExportFormat, sections: Sections, text: &str) -> String {
        let (table, comparison) = analyze(text);
        let mut writer = ReportWriter::new(Vec::new());
        writer
            .write_analysis(format, sections, &table, &comparison, ReportConfig::default())
            .unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_text_both_sections() {
        let out = render(ExportFormat::Text, Sections::ALL, "aabb");
        assert!(out.starts_with("Frequency Analysis of Latin Letters in the text:\n"));
        assert!(out.contains("z: 0 occurrences (0.00%)\n\nComparison with standard Latin"));
        assert!(out.ends_with("z: Expected 0.07%, Found 0.00%\n"));
    }

    #[test]
    fn test_text_single_section() {
        let out = render(ExportFormat::Text, Sections::COMPARISON, "aabb");
        assert!(out.starts_with("Comparison with standard Latin letter frequencies:\n"));
        assert!(!out.contains("occurrences"));
    }

    #[test]
    fn test_csv_all() {
        let out = render(ExportFormat::Csv, Sections::ALL, "aabb");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 27);
        assert_eq!(lines[0], "letter,count,percentage,expected");
        assert_eq!(lines[1], "a,2,50.00,8.17");
        assert_eq!(lines[3], "c,0,0.00,2.78");
    }

    #[test]
    fn test_csv_comparison_only() {
        let out = render(ExportFormat::Csv, Sections::COMPARISON, "aabb");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("letter,expected,observed"));
        assert_eq!(lines.next(), Some("a,8.17,50.00"));
    }

    #[test]
    fn test_json_export() {
        let out = render(ExportFormat::Json, Sections::FREQUENCY, "aabb!");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["reference"], "Latin");
        assert_eq!(value["total"], 4);
        assert_eq!(value["letters"].as_array().unwrap().len(), 26);
        assert_eq!(value["letters"][1]["letter"], "b");
        assert_eq!(value["letters"][1]["count"], 2);
        assert!(value.get("comparison").is_none());
    }

    #[test]
    fn test_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let (table, comparison) = analyze("");
        let mut writer = ReportWriter::create(&path).unwrap();
        writer
            .write_analysis(
                ExportFormat::Text,
                Sections::FREQUENCY,
                &table,
                &comparison,
                ReportConfig::default(),
            )
            .unwrap();
        drop(writer);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 27);
        assert!(written.contains("a: 0 occurrences (0.00%)"));
    }
}
