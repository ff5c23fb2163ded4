//! Service layer for tally
//!
//! The service layer holds the budgeting rules: classifying rows, folding
//! them into a summary, scaling the summary to a period, and the host-side
//! state and import that feed those rules.

pub mod aggregator;
pub mod categorizer;
pub mod import;
pub mod presenter;
pub mod state;

pub use aggregator::{aggregate, aggregate_with_report, IngestReport};
pub use categorizer::{classify, Classification};
pub use import::{read_csv, read_json, read_rows, ColumnMapping, InputFormat};
pub use presenter::{present, progress_percentage, MAX_PROGRESS};
pub use state::BudgetState;
