//! Row classification
//!
//! Assigns a raw row to a bucket. Classification is total: any row content
//! yields a result, and malformed input degrades to a neutral value.

use crate::models::{Bucket, EntryKind, Money, RawRecord};

/// Outcome of classifying one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The row contributes `amount` to `bucket`
    Counted {
        bucket: Bucket,
        amount: Money,
        /// The amount text was missing or not numeric and was taken as zero
        malformed_amount: bool,
    },
    /// The row's type is neither income nor expense; it contributes nothing
    Ignored,
}

impl Classification {
    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            Classification::Counted { bucket, .. } => Some(*bucket),
            Classification::Ignored => None,
        }
    }

    /// Amount contributed to the totals (zero for ignored rows)
    pub fn amount(&self) -> Money {
        match self {
            Classification::Counted { amount, .. } => *amount,
            Classification::Ignored => Money::zero(),
        }
    }
}

/// Classify a single row
///
/// Rules, in order: an unrecognized type is ignored; income goes to
/// `Income`; expenses are looked up by category, defaulting to `Other`.
pub fn classify(record: &RawRecord) -> Classification {
    let Some(kind) = EntryKind::recognize(&record.normalized_kind()) else {
        return Classification::Ignored;
    };

    let (amount, malformed_amount) = parse_amount(record.amount.as_deref());

    let bucket = match kind {
        EntryKind::Income => Bucket::Income,
        EntryKind::Expense => Bucket::for_expense_category(&record.normalized_category()),
    };

    Classification::Counted {
        bucket,
        amount,
        malformed_amount,
    }
}

/// Parse an amount, substituting zero when it is missing or malformed
fn parse_amount(raw: Option<&str>) -> (Money, bool) {
    match raw.map(Money::parse) {
        Some(Ok(amount)) => (amount, false),
        _ => (Money::zero(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_row() {
        let result = classify(&RawRecord::income("1000"));
        assert_eq!(result.bucket(), Some(Bucket::Income));
        assert_eq!(result.amount(), Money::from_units(1000));
    }

    #[test]
    fn test_income_ignores_category() {
        let result = classify(&RawRecord::new("income", "food", "10"));
        assert_eq!(result.bucket(), Some(Bucket::Income));
    }

    #[test]
    fn test_expense_categories() {
        assert_eq!(
            classify(&RawRecord::expense("food", "200")).bucket(),
            Some(Bucket::Food)
        );
        assert_eq!(
            classify(&RawRecord::expense("water", "50")).bucket(),
            Some(Bucket::Services)
        );
        assert_eq!(
            classify(&RawRecord::expense("movies", "30")).bucket(),
            Some(Bucket::Other)
        );
    }

    #[test]
    fn test_mixed_case_type_and_spanish_category() {
        let result = classify(&RawRecord::new("Expense", "Salud", "75.5"));
        assert_eq!(result.bucket(), Some(Bucket::Health));
        assert_eq!(result.amount(), Money::from_cents(7550));
    }

    #[test]
    fn test_spanish_type_values() {
        assert_eq!(
            classify(&RawRecord::new("INGRESO", "", "10")).bucket(),
            Some(Bucket::Income)
        );
        assert_eq!(
            classify(&RawRecord::new("gasto", "Préstamos", "10")).bucket(),
            Some(Bucket::Loans)
        );
    }

    #[test]
    fn test_unrecognized_type_is_ignored() {
        assert_eq!(classify(&RawRecord::new("", "food", "10")), Classification::Ignored);
        assert_eq!(
            classify(&RawRecord::new("expence", "food", "10")),
            Classification::Ignored
        );
        assert_eq!(classify(&RawRecord::default()), Classification::Ignored);
        assert!(classify(&RawRecord::new("transfer", "", "10")).amount().is_zero());
    }

    #[test]
    fn test_malformed_amount_is_zero() {
        let result = classify(&RawRecord::expense("food", "abc"));
        assert_eq!(
            result,
            Classification::Counted {
                bucket: Bucket::Food,
                amount: Money::zero(),
                malformed_amount: true,
            }
        );
    }

    #[test]
    fn test_missing_amount_is_zero() {
        let record = RawRecord {
            kind: Some("expense".into()),
            category: Some("food".into()),
            amount: None,
        };
        let result = classify(&record);
        assert_eq!(result.bucket(), Some(Bucket::Food));
        assert!(result.amount().is_zero());
    }

    #[test]
    fn test_missing_category_is_other() {
        let record = RawRecord {
            kind: Some("expense".into()),
            category: None,
            amount: Some("5".into()),
        };
        assert_eq!(classify(&record).bucket(), Some(Bucket::Other));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let record = RawRecord::new(" EXPENSE ", " Internet ", "$39.90");
        assert_eq!(classify(&record), classify(&record));
        assert_eq!(classify(&record).bucket(), Some(Bucket::Services));
    }
}
