//! Loosely-typed goal input
//!
//! Form fields arrive as text or as numbers. The core coerces and validates
//! them itself instead of trusting the caller.

use serde::{Deserialize, Serialize};

use super::calendar::MonthYear;
use super::money::Money;
use super::plan::SavingsPlan;
use crate::error::{PlannerError, PlannerResult};

/// A raw user-supplied value: either text from an input box or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl InputValue {
    /// Coerce to a money amount. `None` if empty or not numeric.
    pub fn as_money(&self) -> Option<Money> {
        match self {
            Self::Number(n) => Money::from_f64(*n),
            Self::Text(s) => Money::parse(s).ok(),
        }
    }

    /// Coerce to a whole, non-negative number. Fractions are rejected.
    pub fn as_whole(&self) -> Option<u64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
        };
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return None;
        }
        Some(value as u64)
    }

    /// Coerce to a (possibly negative) integer year
    pub fn as_year(&self) -> Option<i32> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < i32::MIN as f64 || value > i32::MAX as f64 {
            return None;
        }
        Some(value as i32)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for InputValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for InputValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u32> for InputValue {
    fn from(n: u32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<Money> for InputValue {
    fn from(m: Money) -> Self {
        Self::Text(m.to_string())
    }
}

/// The "new goal" form as submitted by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalInput {
    pub name: String,
    pub target_amount: Option<InputValue>,
    pub monthly_savings: Option<InputValue>,
    pub months_to_save: Option<InputValue>,
    pub start_month: Option<InputValue>,
    pub start_year: Option<InputValue>,
}

/// A goal request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedGoal {
    pub name: String,
    pub target_amount: Money,
    pub plan: SavingsPlan,
    pub start_date: MonthYear,
}

impl GoalInput {
    pub fn new(name: impl Into<String>, target_amount: impl Into<InputValue>) -> Self {
        Self {
            name: name.into(),
            target_amount: Some(target_amount.into()),
            ..Self::default()
        }
    }

    pub fn with_monthly_savings(mut self, rate: impl Into<InputValue>) -> Self {
        self.monthly_savings = Some(rate.into());
        self
    }

    pub fn with_months_to_save(mut self, months: impl Into<InputValue>) -> Self {
        self.months_to_save = Some(months.into());
        self
    }

    pub fn starting(mut self, month: impl Into<InputValue>, year: impl Into<InputValue>) -> Self {
        self.start_month = Some(month.into());
        self.start_year = Some(year.into());
        self
    }

    /// Validate the form. Omitted start month/year default to `today`.
    pub fn validate(&self, today: MonthYear) -> PlannerResult<ValidatedGoal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PlannerError::Validation(
                "Goal name cannot be empty".to_string(),
            ));
        }

        let target_amount = self
            .target_amount
            .as_ref()
            .and_then(InputValue::as_money)
            .filter(Money::is_positive)
            .ok_or_else(|| {
                PlannerError::Validation("Target amount must be a positive number".to_string())
            })?;

        let month = match &self.start_month {
            Some(value) => value
                .as_whole()
                .filter(|m| (1..=12).contains(m))
                .ok_or_else(|| {
                    PlannerError::Validation("Start month must be between 1 and 12".to_string())
                })? as u32,
            None => today.month,
        };
        let year = match &self.start_year {
            Some(value) => value.as_year().ok_or_else(|| {
                PlannerError::Validation("Start year must be a whole number".to_string())
            })?,
            None => today.year,
        };
        let start_date = MonthYear::new(month, year)
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        let monthly_savings = self
            .monthly_savings
            .as_ref()
            .and_then(InputValue::as_money)
            .unwrap_or_default();
        let months_to_save = self
            .months_to_save
            .as_ref()
            .and_then(InputValue::as_whole)
            .and_then(|months| u32::try_from(months).ok())
            .unwrap_or(0);

        let plan = SavingsPlan::from_parts(monthly_savings, months_to_save).ok_or_else(|| {
            PlannerError::Validation(
                "Either a positive monthly savings amount or a positive number of months is required"
                    .to_string(),
            )
        })?;

        Ok(ValidatedGoal {
            name: name.to_string(),
            target_amount,
            plan,
            start_date,
        })
    }
}
