//! tally - categorized budget summaries
//!
//! This library turns spreadsheet-like income and expense rows into a
//! categorized summary, presents it for a weekly, biweekly or monthly period,
//! and measures progress toward a savings goal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, buckets, periods, goals and summaries
//! - `services`: Categorizer, aggregator, presenter, row import and session state
//! - `config`: Configuration and path management
//! - `display`: Terminal tables and progress bars
//! - `export`: Report documents in text, JSON, YAML and CSV
//! - `cli`: Command handlers for the `tally` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use tally::models::{Money, Period, RawRecord, SavingsGoal};
//! use tally::services::{aggregate, present};
//!
//! let rows = vec![
//!     RawRecord::income("1000"),
//!     RawRecord::expense("food", "200"),
//!     RawRecord::expense("water", "50"),
//!     RawRecord::expense("movies", "30"),
//! ];
//! let summary = aggregate(&rows);
//! assert_eq!(summary.balance(), Money::from_units(720));
//!
//! let goal = SavingsGoal::new(Money::from_units(500)).unwrap();
//! let weekly = present(&summary, Period::Weekly, goal);
//! assert_eq!(weekly.balance, 180.0);
//! assert_eq!(weekly.progress, 36.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{TallyError, TallyResult};
