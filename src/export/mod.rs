//! Report export for tally
//!
//! Every format renders the same [`ReportDocument`]:
//! - Text: printable report with tables
//! - JSON: machine-readable document
//! - YAML: human-readable document
//! - CSV: category and savings tables (spreadsheet-compatible)

pub mod csv;
pub mod document;
pub mod json;
pub mod text;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::TallyResult;

pub use self::csv::export_csv;
pub use document::{GoalSection, ReportDocument, ReportLine, REPORT_SCHEMA_VERSION};
pub use json::{export_json, import_from_json};
pub use text::{export_text, render_text};
pub use yaml::export_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Printable text report
    #[default]
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// CSV tables
    Csv,
}

/// Write a report in the given format
///
/// `pretty` only affects JSON; `symbol` only affects text.
pub fn write_report<W: Write>(
    document: &ReportDocument,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
    symbol: &str,
) -> TallyResult<()> {
    match format {
        ExportFormat::Text => export_text(document, writer, symbol),
        ExportFormat::Json => export_json(document, writer, pretty),
        ExportFormat::Yaml => export_yaml(document, writer),
        ExportFormat::Csv => export_csv(document, writer),
    }
}
