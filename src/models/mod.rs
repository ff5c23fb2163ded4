//! Core data models for tally
//!
//! This module contains the data structures of the budgeting domain: raw
//! input rows, buckets, money, periods, the savings goal, and the summary
//! snapshots produced from them.

pub mod bucket;
pub mod goal;
pub mod money;
pub mod period;
pub mod presented;
pub mod record;
pub mod summary;

pub use bucket::{Bucket, EntryKind};
pub use goal::SavingsGoal;
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use presented::{round_cents, ExpenseShare, Outlook, PresentedSummary};
pub use record::RawRecord;
pub use summary::BudgetSummary;
