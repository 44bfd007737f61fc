//! Savings plan model
//!
//! A goal is driven either by a fixed monthly contribution or by a fixed
//! number of months. Exactly one of the two drives the projection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How a goal is expected to be funded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum SavingsPlan {
    /// Save a fixed amount every month
    Rate(Money),
    /// Reach the target within a fixed number of months
    Duration(u32),
}

/// Which input the presentation layer offers first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SavingsMode {
    #[default]
    Monthly,
    Time,
}

impl SavingsPlan {
    /// Build a plan from the two legacy fields.
    ///
    /// A positive rate wins over a positive duration. `None` if neither is
    /// positive.
    pub fn from_parts(monthly_savings: Money, months_to_save: u32) -> Option<Self> {
        if monthly_savings.is_positive() {
            Some(Self::Rate(monthly_savings))
        } else if months_to_save > 0 {
            Some(Self::Duration(months_to_save))
        } else {
            None
        }
    }

    /// Monthly rate, zero in duration mode
    pub fn monthly_savings(&self) -> Money {
        match self {
            Self::Rate(rate) => *rate,
            Self::Duration(_) => Money::zero(),
        }
    }

    /// Duration in months, zero in rate mode
    pub fn months_to_save(&self) -> u32 {
        match self {
            Self::Rate(_) => 0,
            Self::Duration(months) => *months,
        }
    }

    pub fn mode(&self) -> SavingsMode {
        match self {
            Self::Rate(_) => SavingsMode::Monthly,
            Self::Duration(_) => SavingsMode::Time,
        }
    }
}

impl fmt::Display for SavingsPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate(rate) => write!(f, "{} per month", rate),
            Self::Duration(1) => write!(f, "within 1 month"),
            Self::Duration(months) => write!(f, "within {} months", months),
        }
    }
}

impl fmt::Display for SavingsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly Savings"),
            Self::Time => write!(f, "Time Period"),
        }
    }
}
