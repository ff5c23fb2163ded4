//! Display formatting for terminal output
//!
//! Provides utilities for formatting presented summaries for terminal display.

pub mod format;
pub mod summary;

pub use format::{format_amount, format_bar, format_percentage, separator};
pub use summary::{
    format_distribution, format_income_vs_expenses, format_ingest_notes, format_progress,
    format_summary_table,
};
