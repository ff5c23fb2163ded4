//! Budget buckets and the category lookup table
//!
//! Every counted row lands in exactly one bucket: `Income` for income rows, or
//! one of the five expense buckets chosen by its category text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One fixed class a transaction amount is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Income,
    Services,
    Food,
    Health,
    Loans,
    /// Catch-all for expense categories without a rule
    Other,
}

impl Bucket {
    /// All buckets, income first
    pub const ALL: [Bucket; 6] = [
        Bucket::Income,
        Bucket::Services,
        Bucket::Food,
        Bucket::Health,
        Bucket::Loans,
        Bucket::Other,
    ];

    /// The five expense buckets in display order
    pub const EXPENSES: [Bucket; 5] = [
        Bucket::Services,
        Bucket::Food,
        Bucket::Health,
        Bucket::Loans,
        Bucket::Other,
    ];

    /// Map a normalized (trimmed, lowercase) expense category to its bucket
    pub fn for_expense_category(category: &str) -> Self {
        CATEGORY_RULES
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, bucket)| *bucket)
            .unwrap_or(Bucket::Other)
    }

    pub fn is_expense(&self) -> bool {
        !matches!(self, Bucket::Income)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Income => "Income",
            Bucket::Services => "Services",
            Bucket::Food => "Food",
            Bucket::Health => "Health",
            Bucket::Loans => "Loans",
            Bucket::Other => "Other",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category names (English and Spanish) with a dedicated expense bucket.
/// Anything absent from this table is `Other`.
static CATEGORY_RULES: &[(&str, Bucket)] = &[
    ("water", Bucket::Services),
    ("electricity", Bucket::Services),
    ("internet", Bucket::Services),
    ("signal", Bucket::Services),
    ("streaming-video", Bucket::Services),
    ("gas", Bucket::Services),
    ("agua", Bucket::Services),
    ("luz", Bucket::Services),
    ("señal", Bucket::Services),
    ("netflix", Bucket::Services),
    ("food", Bucket::Food),
    ("alimentos", Bucket::Food),
    ("health", Bucket::Health),
    ("salud", Bucket::Health),
    ("loans", Bucket::Loans),
    ("prestamos", Bucket::Loans),
    ("préstamos", Bucket::Loans),
];

/// The declared type of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Recognize a normalized (trimmed, lowercase) type value
    ///
    /// Returns `None` for blank or misspelled types; such rows are ignored.
    pub fn recognize(normalized: &str) -> Option<Self> {
        match normalized {
            "income" | "ingreso" => Some(EntryKind::Income),
            "expense" | "gasto" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}
