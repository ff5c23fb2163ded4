//! CLI command for report export
//!
//! Writes the budget report to a file, or to stdout when no output is given.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use super::BudgetInput;
use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::export::{write_report, ExportFormat, ReportDocument};
use crate::services::InputFormat;

/// Export a budget report
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: BudgetInput,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Input format (inferred from the file extension by default)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> TallyResult<()> {
    let (state, _report) = args.input.load(settings, args.input_format)?;
    let document = ReportDocument::new(&state.presented(), Local::now().date_naive());
    let symbol = args.input.currency(settings);

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                TallyError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&document, args.format, &mut writer, args.pretty, symbol)?;
            writer
                .flush()
                .map_err(|e| TallyError::Export(e.to_string()))?;

            tracing::info!(path = %output.display(), format = ?args.format, "report exported");
            println!("Report exported to: {}", output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&document, args.format, &mut handle, args.pretty, symbol)?;
            handle
                .flush()
                .map_err(|e| TallyError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
