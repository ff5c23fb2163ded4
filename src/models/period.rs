//! Reporting period selection
//!
//! Totals are always held on a monthly baseline. A period only rescales values
//! when they are read for display; it never changes a summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display period relative to the monthly baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// A quarter of the monthly totals
    Weekly,
    /// Half of the monthly totals
    #[serde(alias = "bi-weekly")]
    BiWeekly,
    #[default]
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Weekly, Period::BiWeekly, Period::Monthly];

    /// Multiplier applied to monthly totals
    ///
    /// Factors are powers of two, so scaling is exact in binary floating point.
    pub const fn factor(&self) -> f64 {
        match self {
            Period::Weekly => 0.25,
            Period::BiWeekly => 0.5,
            Period::Monthly => 1.0,
        }
    }

    /// Scale a monthly value to this period
    pub fn scale(&self, monthly: f64) -> f64 {
        monthly * self.factor()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Weekly => "Weekly",
            Period::BiWeekly => "Biweekly",
            Period::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Period::Weekly => "weekly",
            Period::BiWeekly => "biweekly",
            Period::Monthly => "monthly",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "semanal" => Ok(Period::Weekly),
            "biweekly" | "bi-weekly" | "fortnightly" | "quincenal" => Ok(Period::BiWeekly),
            "monthly" | "month" | "mensual" => Ok(Period::Monthly),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned for an unknown period name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown period '{}': expected weekly, biweekly or monthly",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}
