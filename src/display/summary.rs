//! Summary display formatting
//!
//! Renders a presented summary as terminal tables: bucket totals, the expense
//! distribution, and a savings progress line.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_amount, format_bar, format_percentage};
use crate::models::{Bucket, PresentedSummary};
use crate::services::IngestReport;

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Expense")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format bucket totals, total expenses and balance as a table
pub fn format_summary_table(presented: &PresentedSummary, symbol: &str) -> String {
    let mut rows: Vec<TotalRow> = Bucket::ALL
        .iter()
        .map(|bucket| TotalRow {
            label: bucket.label().to_string(),
            amount: format_amount(presented.amount(*bucket), symbol),
        })
        .collect();
    rows.push(TotalRow {
        label: "Total Expenses".to_string(),
        amount: format_amount(presented.total_expenses, symbol),
    });
    rows.push(TotalRow {
        label: "Balance".to_string(),
        amount: format_amount(presented.balance, symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format the share of each expense bucket in total expenses
pub fn format_distribution(presented: &PresentedSummary, symbol: &str) -> String {
    let rows: Vec<ShareRow> = presented
        .expense_shares()
        .into_iter()
        .map(|share| ShareRow {
            label: share.bucket.label().to_string(),
            amount: format_amount(share.amount, symbol),
            share: format_percentage(share.percentage),
            bar: format_bar(share.percentage, 100.0, BAR_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..3), Alignment::right());
    table.to_string()
}

/// Format income against total expenses as two bars on a shared scale
pub fn format_income_vs_expenses(presented: &PresentedSummary, symbol: &str) -> String {
    let (income, expenses) = presented.income_vs_expenses();
    let scale = income.max(expenses);
    let income_amount = format_amount(income, symbol);
    let expense_amount = format_amount(expenses, symbol);
    let width = income_amount.chars().count().max(expense_amount.chars().count());

    format!(
        "Income   {:>width$} {}\nExpenses {:>width$} {}",
        income_amount,
        format_bar(income, scale, BAR_WIDTH),
        expense_amount,
        format_bar(expenses, scale, BAR_WIDTH),
        width = width,
    )
}

/// Format savings progress: "36% (S/ 180.00 / S/ 500.00)" plus a bar
pub fn format_progress(presented: &PresentedSummary, symbol: &str) -> String {
    format!(
        "{} {:.0}% ({} / {})",
        format_bar(presented.progress, 100.0, BAR_WIDTH),
        presented.progress,
        format_amount(presented.balance, symbol),
        format_amount(presented.goal_amount(), symbol),
    )
}

/// Describe rows that were ignored or taken as zero, if any
pub fn format_ingest_notes(report: &IngestReport) -> Option<String> {
    if report.is_clean() {
        return None;
    }

    let mut notes = Vec::new();
    if report.rows_ignored > 0 {
        notes.push(format!(
            "{} of {} rows ignored (type was neither income nor expense)",
            report.rows_ignored, report.rows_read
        ));
    }
    if report.malformed_amounts > 0 {
        notes.push(format!(
            "{} rows had a missing or non-numeric amount (counted as 0)",
            report.malformed_amounts
        ));
    }
    Some(notes.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period, RawRecord, SavingsGoal};
    use crate::services::{aggregate, present};

    fn presented(period: Period) -> PresentedSummary {
        let summary = aggregate(&[
            RawRecord::income("1000"),
            RawRecord::expense("food", "200"),
            RawRecord::expense("water", "50"),
            RawRecord::expense("movies", "30"),
        ]);
        present(
            &summary,
            period,
            SavingsGoal::new(Money::from_units(500)).unwrap(),
        )
    }

    #[test]
    fn test_summary_table_lists_every_row() {
        let output = format_summary_table(&presented(Period::Monthly), "$");
        for label in [
            "Income",
            "Services",
            "Food",
            "Health",
            "Loans",
            "Other",
            "Total Expenses",
            "Balance",
        ] {
            assert!(output.contains(label), "missing {label}");
        }
        assert!(output.contains("$720.00"));
        assert!(output.contains("$280.00"));
    }

    #[test]
    fn test_distribution_percentages() {
        let output = format_distribution(&presented(Period::Monthly), "$");
        // food is 200 of 280
        assert!(output.contains("71%"));
        assert!(output.contains("$200.00"));
    }

    #[test]
    fn test_income_vs_expenses_bars() {
        let output = format_income_vs_expenses(&presented(Period::Monthly), "$");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Income   $1000.00 "));
        assert!(lines[0].ends_with(&"█".repeat(BAR_WIDTH)));
        assert!(lines[1].starts_with("Expenses  $280.00 "));
    }

    #[test]
    fn test_progress_line() {
        let output = format_progress(&presented(Period::Weekly), "S/ ");
        assert!(output.ends_with("36% (S/ 180.00 / S/ 500.00)"));
    }

    #[test]
    fn test_ingest_notes() {
        assert!(format_ingest_notes(&IngestReport::default()).is_none());

        let report = IngestReport {
            rows_read: 4,
            rows_counted: 3,
            rows_ignored: 1,
            malformed_amounts: 2,
        };
        let notes = format_ingest_notes(&report).unwrap();
        assert!(notes.contains("1 of 4 rows ignored"));
        assert!(notes.contains("2 rows had a missing or non-numeric amount"));
    }
}
