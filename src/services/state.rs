//! Host-owned budget state
//!
//! Holds the current summary, period and goal. Each is replaced as a whole:
//! a new ingestion swaps in a fully computed summary, and a rejected goal
//! leaves the previous one in place.

use super::aggregator::{aggregate_with_report, IngestReport};
use super::presenter::present;
use crate::error::TallyResult;
use crate::models::{BudgetSummary, Period, PresentedSummary, RawRecord, SavingsGoal};

/// Current summary, display period and savings goal
#[derive(Debug, Clone, Default)]
pub struct BudgetState {
    summary: BudgetSummary,
    period: Period,
    goal: SavingsGoal,
}

impl BudgetState {
    /// Empty state with the given period and goal
    pub fn new(period: Period, goal: SavingsGoal) -> Self {
        Self {
            summary: BudgetSummary::empty(),
            period,
            goal,
        }
    }

    /// Replace the current summary with one built from `records`
    pub fn ingest<'a, I>(&mut self, records: I) -> IngestReport
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let (summary, report) = aggregate_with_report(records);
        self.summary = summary;
        report
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Validate and apply a new goal; on error the current goal is kept
    pub fn set_goal(&mut self, input: &str) -> TallyResult<SavingsGoal> {
        let goal = SavingsGoal::parse(input)?;
        self.goal = goal;
        tracing::debug!(goal = %goal, "savings goal updated");
        Ok(goal)
    }

    pub fn summary(&self) -> &BudgetSummary {
        &self.summary
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn goal(&self) -> SavingsGoal {
        self.goal
    }

    /// Period-scaled view of the current summary
    pub fn presented(&self) -> PresentedSummary {
        present(&self.summary, self.period, self.goal)
    }
}
