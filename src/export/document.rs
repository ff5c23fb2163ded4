//! Budget report document
//!
//! A fixed descriptive template filled from a presented summary. Every
//! export format serializes this same structure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Bucket, Outlook, Period, PresentedSummary};

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

pub const REPORT_TITLE: &str = "Personal Budget Report";
pub const REPORT_SUBTITLE: &str = "Detailed summary generated by tally";

/// One labelled amount of the report table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub amount: f64,
}

/// Savings goal section of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSection {
    /// Goal as configured (not scaled)
    pub goal: f64,
    /// Scaled balance for the period
    pub current_savings: f64,
    /// Progress percentage with one decimal
    pub progress: f64,
}

/// Complete report ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub schema_version: String,
    pub app_version: String,
    pub title: String,
    pub subtitle: String,
    pub generated_on: NaiveDate,
    pub period: Period,
    /// Bucket totals followed by total expenses and balance, rounded to cents
    pub lines: Vec<ReportLine>,
    pub savings: GoalSection,
    pub outlook: Outlook,
    pub comment: String,
}

impl ReportDocument {
    /// Fill the template from a presented summary
    pub fn new(presented: &PresentedSummary, generated_on: NaiveDate) -> Self {
        let rounded = presented.rounded();

        let mut lines: Vec<ReportLine> = Bucket::ALL
            .iter()
            .map(|bucket| ReportLine {
                label: bucket.label().to_string(),
                amount: rounded.amount(*bucket),
            })
            .collect();
        lines.push(ReportLine {
            label: "Total Expenses".to_string(),
            amount: rounded.total_expenses,
        });
        lines.push(ReportLine {
            label: "Balance".to_string(),
            amount: rounded.balance,
        });

        let outlook = presented.outlook();

        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            title: REPORT_TITLE.to_string(),
            subtitle: REPORT_SUBTITLE.to_string(),
            generated_on,
            period: presented.period,
            lines,
            savings: GoalSection {
                goal: presented.goal_amount(),
                current_savings: rounded.balance,
                progress: (presented.progress * 10.0).round() / 10.0,
            },
            outlook,
            comment: outlook.message().to_string(),
        }
    }

    /// Amount of a labelled line
    pub fn line(&self, label: &str) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.amount)
    }
}
