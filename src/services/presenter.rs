//! Period scaling and savings progress
//!
//! Scales every summary value by the period factor. The goal stays an
//! absolute monthly target, so switching to a shorter period lowers progress.

use crate::models::{BudgetSummary, Money, Period, PresentedSummary, SavingsGoal};

/// Upper bound of the progress percentage
pub const MAX_PROGRESS: f64 = 100.0;

/// Produce the period-scaled view of a summary
pub fn present(summary: &BudgetSummary, period: Period, goal: SavingsGoal) -> PresentedSummary {
    let scale = |amount: Money| period.scale(amount.to_units());
    let balance = scale(summary.balance());

    PresentedSummary {
        period,
        goal,
        income: scale(summary.income()),
        services: scale(summary.services()),
        food: scale(summary.food()),
        health: scale(summary.health()),
        loans: scale(summary.loans()),
        other: scale(summary.other()),
        total_expenses: scale(summary.total_expenses()),
        balance,
        progress: progress_percentage(balance, goal),
    }
}

/// Share of the goal covered by a (scaled) balance, in percent
///
/// Zero when no positive goal is set. Only the upper bound is clamped: a
/// negative balance yields a negative percentage.
pub fn progress_percentage(balance: f64, goal: SavingsGoal) -> f64 {
    if !goal.is_set() {
        return 0.0;
    }
    (balance / goal.amount().to_units() * 100.0).min(MAX_PROGRESS)
}
