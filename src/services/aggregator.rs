//! Folding classified rows into a summary
//!
//! Bucket totals are accumulated as exact decimals, so the result does not
//! depend on row order. Totals saturate at the `Money` range. Derived totals are computed by `BudgetSummary` itself.

use serde::Serialize;

use super::categorizer::{classify, Classification};
use crate::models::summary::bucket_index;
use crate::models::{BudgetSummary, Money, RawRecord};

/// Counters describing how the rows of one ingestion were treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Rows read from the input
    pub rows_read: usize,
    /// Rows that contributed to a bucket
    pub rows_counted: usize,
    /// Rows dropped because their type was neither income nor expense
    pub rows_ignored: usize,
    /// Counted rows whose amount was missing or malformed (taken as zero)
    pub malformed_amounts: usize,
}

impl IngestReport {
    /// Whether every row was counted with a well-formed amount
    pub fn is_clean(&self) -> bool {
        self.rows_ignored == 0 && self.malformed_amounts == 0
    }
}

/// Aggregate rows into a summary
pub fn aggregate<'a, I>(records: I) -> BudgetSummary
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    aggregate_with_report(records).0
}

/// Aggregate rows into a summary, also reporting ignored and malformed rows
pub fn aggregate_with_report<'a, I>(records: I) -> (BudgetSummary, IngestReport)
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut totals = [Money::zero(); 6];
    let mut report = IngestReport::default();

    for (row, record) in records.into_iter().enumerate() {
        report.rows_read += 1;

        match classify(record) {
            Classification::Counted {
                bucket,
                amount,
                malformed_amount,
            } => {
                totals[bucket_index(bucket)] += amount;
                report.rows_counted += 1;
                if malformed_amount {
                    report.malformed_amounts += 1;
                    tracing::debug!(
                        row,
                        amount = record.amount.as_deref().unwrap_or_default(),
                        "malformed amount counted as zero"
                    );
                }
            }
            Classification::Ignored => {
                report.rows_ignored += 1;
                tracing::debug!(
                    row,
                    kind = record.kind.as_deref().unwrap_or_default(),
                    "row ignored: unrecognized type"
                );
            }
        }
    }

    let summary = BudgetSummary::from_bucket_array(totals);

    tracing::info!(
        rows = report.rows_read,
        ignored = report.rows_ignored,
        malformed = report.malformed_amounts,
        balance = %summary.balance(),
        "aggregated budget summary"
    );

    (summary, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bucket, Period, SavingsGoal};
    use crate::services::present;
    use proptest::prelude::*;

    fn scenario_rows() -> Vec<RawRecord> {
        vec![
            RawRecord::income("1000"),
            RawRecord::expense("food", "200"),
            RawRecord::expense("water", "50"),
            RawRecord::expense("movies", "30"),
        ]
    }

    #[test]
    fn test_scenario_totals() {
        let summary = aggregate(&scenario_rows());
        assert_eq!(summary.income(), Money::from_units(1000));
        assert_eq!(summary.services(), Money::from_units(50));
        assert_eq!(summary.food(), Money::from_units(200));
        assert_eq!(summary.health(), Money::zero());
        assert_eq!(summary.loans(), Money::zero());
        assert_eq!(summary.other(), Money::from_units(30));
        assert_eq!(summary.total_expenses(), Money::from_units(280));
        assert_eq!(summary.balance(), Money::from_units(720));
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<RawRecord> = Vec::new();
        let (summary, report) = aggregate_with_report(&rows);
        assert!(summary.is_empty());
        assert!(summary.balance().is_zero());
        assert_eq!(report, IngestReport::default());
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_counts() {
        let rows = vec![
            RawRecord::income("100"),
            RawRecord::new("", "food", "20"),
            RawRecord::new("refund", "food", "20"),
            RawRecord::expense("food", "abc"),
            RawRecord::expense("salud", "15"),
        ];
        let (summary, report) = aggregate_with_report(&rows);

        assert_eq!(report.rows_read, 5);
        assert_eq!(report.rows_counted, 3);
        assert_eq!(report.rows_ignored, 2);
        assert_eq!(report.malformed_amounts, 1);
        assert!(!report.is_clean());

        assert_eq!(summary.food(), Money::zero());
        assert_eq!(summary.health(), Money::from_units(15));
        assert_eq!(summary.balance(), Money::from_units(85));
    }

    #[test]
    fn test_unparseable_amount_contributes_zero() {
        let rows = vec![
            RawRecord::expense("food", "abc"),
            RawRecord::expense("food", "12"),
        ];
        assert_eq!(aggregate(&rows).food(), Money::from_units(12));
    }

    #[test]
    fn test_negative_amounts_accumulate() {
        let rows = vec![
            RawRecord::expense("loans", "100"),
            RawRecord::expense("loans", "-25"),
        ];
        assert_eq!(aggregate(&rows).loans(), Money::from_units(75));
    }

    #[test]
    fn test_sub_cent_amounts_are_kept() {
        let rows = vec![RawRecord::income("0.004"); 1000];
        let summary = aggregate(&rows);
        assert_eq!(summary.income(), Money::from_units(4));
        assert_eq!(summary.balance(), Money::from_units(4));

        let presented = present(&summary, Period::Monthly, SavingsGoal::none());
        assert_eq!(presented.income, 4.0);
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let rows = vec![RawRecord::income("8e16"), RawRecord::income("8e16")];
        assert_eq!(aggregate(&rows).income(), Money::from_units(160_000_000_000_000_000));

        let rows = vec![RawRecord::income("8e16"), RawRecord::expense("food", "-8e16")];
        let summary = aggregate(&rows);
        assert_eq!(summary.total_expenses(), Money::from_units(-80_000_000_000_000_000));
        assert_eq!(summary.balance(), Money::from_units(160_000_000_000_000_000));
    }

    #[test]
    fn test_totals_saturate_at_range_limit() {
        let rows = vec![
            RawRecord::income("7e28"),
            RawRecord::income("7e28"),
            RawRecord::expense("loans", "-7e28"),
            RawRecord::expense("food", "-7e28"),
        ];
        let (summary, report) = aggregate_with_report(&rows);

        assert!(report.is_clean());
        assert_eq!(summary.income(), Money::MAX);
        assert_eq!(summary.total_expenses(), Money::MIN);
        assert_eq!(summary.balance(), Money::MAX);
    }

    fn arb_record() -> impl Strategy<Value = RawRecord> {
        let kinds = prop::sample::select(vec!["income", "Expense", "gasto", "", "bogus"]);
        let categories = prop::sample::select(vec![
            "food", "Water", "salud", "loans", "netflix", "movies", "",
        ]);
        let amounts = prop_oneof![
            (-1_000_000i64..1_000_000).prop_map(|c| Money::from_cents(c).to_string()),
            Just("abc".to_string()),
            Just(String::new()),
        ];
        (kinds, categories, amounts).prop_map(|(k, c, a)| RawRecord::new(k, c, a))
    }

    proptest! {
        #[test]
        fn prop_derived_totals_are_exact(rows in prop::collection::vec(arb_record(), 0..40)) {
            let summary = aggregate(&rows);
            let expenses = summary.services() + summary.food() + summary.health()
                + summary.loans() + summary.other();
            prop_assert_eq!(summary.total_expenses(), expenses);
            prop_assert_eq!(summary.balance(), summary.income() - expenses);
        }

        #[test]
        fn prop_order_independent(rows in prop::collection::vec(arb_record(), 0..40)) {
            let forward = aggregate(&rows);
            let reversed: Vec<RawRecord> = rows.iter().rev().cloned().collect();
            prop_assert_eq!(forward, aggregate(&reversed));

            let mut rotated = rows.clone();
            if !rotated.is_empty() {
                rotated.rotate_left(rows.len() / 2);
            }
            prop_assert_eq!(forward, aggregate(&rotated));
        }

        #[test]
        fn prop_income_never_in_expense_buckets(amount in 0i64..1_000_000) {
            let rows = vec![RawRecord::income(Money::from_cents(amount).to_string())];
            let summary = aggregate(&rows);
            prop_assert_eq!(summary.income(), Money::from_cents(amount));
            for bucket in Bucket::EXPENSES {
                prop_assert!(summary.total(bucket).is_zero());
            }
        }
    }
}
