//! Raw input rows
//!
//! A `RawRecord` is one spreadsheet row before classification. Every field is
//! optional text; nothing about it is validated here.

use serde::{Deserialize, Serialize};

/// One loosely-typed input row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Declared type ("income"/"expense" or a locale equivalent)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Free-text category
    #[serde(default)]
    pub category: Option<String>,

    /// Amount as it appeared in the source, possibly malformed
    #[serde(default)]
    pub amount: Option<String>,
}

impl RawRecord {
    /// Create a record with all three fields present
    pub fn new(
        kind: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            kind: Some(kind.into()),
            category: Some(category.into()),
            amount: Some(amount.into()),
        }
    }

    /// Create an income record (income rows usually carry no category)
    pub fn income(amount: impl Into<String>) -> Self {
        Self {
            kind: Some("income".to_string()),
            category: None,
            amount: Some(amount.into()),
        }
    }

    /// Create an expense record
    pub fn expense(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self::new("expense", category, amount)
    }

    /// Normalized type: trimmed, lowercase, empty when missing
    pub fn normalized_kind(&self) -> String {
        normalize(self.kind.as_deref())
    }

    /// Normalized category: trimmed, lowercase, empty when missing
    pub fn normalized_category(&self) -> String {
        normalize(self.category.as_deref())
    }
}

fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}
