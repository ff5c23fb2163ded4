//! Period-scaled view of a budget summary
//!
//! Produced on demand from a `BudgetSummary`, a `Period` and a `SavingsGoal`.
//! Values are floating point currency units because weekly and biweekly
//! scaling can split a cent.

use serde::{Deserialize, Serialize};

use super::bucket::Bucket;
use super::goal::SavingsGoal;
use super::period::Period;

/// Scaled values plus savings progress, ready for display or export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedSummary {
    pub period: Period,
    /// Goal as configured; never scaled
    pub goal: SavingsGoal,
    pub income: f64,
    pub services: f64,
    pub food: f64,
    pub health: f64,
    pub loans: f64,
    pub other: f64,
    pub total_expenses: f64,
    pub balance: f64,
    /// Percentage of the goal covered by the scaled balance.
    /// Clamped at 100 from above only; may be negative.
    pub progress: f64,
}

/// One slice of the expense distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub bucket: Bucket,
    pub amount: f64,
    /// Share of total expenses, 0 when there are no expenses
    pub percentage: f64,
}

/// Whether the scaled balance covers spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    OnTrack,
    Overspending,
}

impl Outlook {
    pub fn message(&self) -> &'static str {
        match self {
            Outlook::OnTrack => "Good work! Your balance is positive.",
            Outlook::Overspending => "Careful, you are spending more than you earn.",
        }
    }
}

impl PresentedSummary {
    /// Scaled value for one bucket
    pub fn amount(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Income => self.income,
            Bucket::Services => self.services,
            Bucket::Food => self.food,
            Bucket::Health => self.health,
            Bucket::Loans => self.loans,
            Bucket::Other => self.other,
        }
    }

    /// Goal in currency units
    pub fn goal_amount(&self) -> f64 {
        self.goal.amount().to_units()
    }

    /// Copy with every currency value rounded to cents
    pub fn rounded(&self) -> Self {
        Self {
            period: self.period,
            goal: self.goal,
            income: round_cents(self.income),
            services: round_cents(self.services),
            food: round_cents(self.food),
            health: round_cents(self.health),
            loans: round_cents(self.loans),
            other: round_cents(self.other),
            total_expenses: round_cents(self.total_expenses),
            balance: round_cents(self.balance),
            progress: self.progress,
        }
    }

    /// Expense buckets with their share of total expenses
    pub fn expense_shares(&self) -> Vec<ExpenseShare> {
        Bucket::EXPENSES
            .iter()
            .map(|bucket| {
                let amount = self.amount(*bucket);
                let percentage = if self.total_expenses > 0.0 {
                    amount / self.total_expenses * 100.0
                } else {
                    0.0
                };
                ExpenseShare {
                    bucket: *bucket,
                    amount,
                    percentage,
                }
            })
            .collect()
    }

    /// Income against total expenses
    pub fn income_vs_expenses(&self) -> (f64, f64) {
        (self.income, self.total_expenses)
    }

    pub fn outlook(&self) -> Outlook {
        if self.balance >= 0.0 {
            Outlook::OnTrack
        } else {
            Outlook::Overspending
        }
    }
}

/// Round a currency value to cents, half away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
