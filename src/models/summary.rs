//! Budget summary snapshot
//!
//! Holds one total per bucket. Total expenses and balance are derived from
//! those totals on every read and are never stored, so they cannot drift.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::bucket::Bucket;
use super::money::Money;

/// Immutable aggregated totals of one ingestion batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetSummary {
    totals: [Money; 6],
}

impl BudgetSummary {
    /// An all-zero summary
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a summary from per-bucket totals
    pub fn from_totals(
        income: Money,
        services: Money,
        food: Money,
        health: Money,
        loans: Money,
        other: Money,
    ) -> Self {
        Self {
            totals: [income, services, food, health, loans, other],
        }
    }

    pub(crate) fn from_bucket_array(totals: [Money; 6]) -> Self {
        Self { totals }
    }

    /// Total for a single bucket
    pub fn total(&self, bucket: Bucket) -> Money {
        self.totals[bucket_index(bucket)]
    }

    pub fn income(&self) -> Money {
        self.total(Bucket::Income)
    }

    pub fn services(&self) -> Money {
        self.total(Bucket::Services)
    }

    pub fn food(&self) -> Money {
        self.total(Bucket::Food)
    }

    pub fn health(&self) -> Money {
        self.total(Bucket::Health)
    }

    pub fn loans(&self) -> Money {
        self.total(Bucket::Loans)
    }

    pub fn other(&self) -> Money {
        self.total(Bucket::Other)
    }

    /// Sum of the five expense buckets
    pub fn total_expenses(&self) -> Money {
        Bucket::EXPENSES.iter().map(|b| self.total(*b)).sum()
    }

    /// Income minus total expenses
    pub fn balance(&self) -> Money {
        self.income() - self.total_expenses()
    }

    /// Whether every bucket is zero
    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(Money::is_zero)
    }
}

pub(crate) fn bucket_index(bucket: Bucket) -> usize {
    match bucket {
        Bucket::Income => 0,
        Bucket::Services => 1,
        Bucket::Food => 2,
        Bucket::Health => 3,
        Bucket::Loans => 4,
        Bucket::Other => 5,
    }
}

impl Serialize for BudgetSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BudgetSummary", 8)?;
        state.serialize_field("income", &self.income())?;
        state.serialize_field("services", &self.services())?;
        state.serialize_field("food", &self.food())?;
        state.serialize_field("health", &self.health())?;
        state.serialize_field("loans", &self.loans())?;
        state.serialize_field("other", &self.other())?;
        state.serialize_field("total_expenses", &self.total_expenses())?;
        state.serialize_field("balance", &self.balance())?;
        state.end()
    }
}
