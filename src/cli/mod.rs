//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod summary;

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::TallyResult;
use crate::models::Period;
use crate::services::{read_rows, BudgetState, IngestReport, InputFormat};

pub use export::{handle_export_command, ExportArgs};
pub use summary::{handle_summary_command, SummaryArgs};

/// Arguments shared by every command that reads a budget file
#[derive(Args, Debug, Clone)]
pub struct BudgetInput {
    /// CSV or JSON file with type, category and amount columns
    pub file: PathBuf,

    /// Period to present (weekly, biweekly, monthly)
    #[arg(short, long)]
    pub period: Option<Period>,

    /// Savings goal (e.g., "500" or "1200.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub goal: Option<String>,

    /// Currency symbol shown before amounts
    #[arg(long)]
    pub currency: Option<String>,
}

impl BudgetInput {
    /// Read the file and build state, with flags taking precedence over settings
    pub(crate) fn load(
        &self,
        settings: &Settings,
        format: Option<InputFormat>,
    ) -> TallyResult<(BudgetState, IngestReport)> {
        let mut state = BudgetState::new(
            self.period.unwrap_or(settings.default_period),
            settings.savings_goal,
        );
        if let Some(goal) = &self.goal {
            state.set_goal(goal)?;
        }

        let rows = read_rows(&self.file, format, settings.delimiter_byte())?;
        let report = state.ingest(&rows);
        if !report.is_clean() {
            tracing::warn!(
                ignored = report.rows_ignored,
                malformed = report.malformed_amounts,
                "some rows were ignored or had unusable amounts"
            );
        }

        Ok((state, report))
    }

    pub(crate) fn currency<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.currency
            .as_deref()
            .unwrap_or(settings.currency_symbol.as_str())
    }
}
