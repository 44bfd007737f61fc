//! Progress and time-remaining evaluation
//!
//! Classifies a goal from its current fields only. Evaluating never reads
//! the clock and never mutates the goal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Goal, Money};

/// Where a goal stands relative to its plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalStatus {
    /// Saved amount reached or passed the target
    Achieved,
    /// Rate plan: months at the planned rate to cover the remainder
    OnTrackWithRate { months_needed: u32 },
    /// Duration plan keeping pace: months left at the planned pace
    OnTrackWithDuration { months_left: u32 },
    /// Duration plan behind pace: months needed at the planned pace
    BehindSchedule { additional_months: u32 },
    /// Neither a rate nor a duration is set
    InvalidPlan,
}

impl GoalStatus {
    /// Months still to go, if the status carries a count
    pub fn months(&self) -> Option<u32> {
        match self {
            Self::OnTrackWithRate { months_needed } => Some(*months_needed),
            Self::OnTrackWithDuration { months_left } => Some(*months_left),
            Self::BehindSchedule { additional_months } => Some(*additional_months),
            Self::Achieved | Self::InvalidPlan => None,
        }
    }

    pub fn is_achieved(&self) -> bool {
        matches!(self, Self::Achieved)
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Achieved => write!(f, "Goal Achieved!"),
            Self::OnTrackWithRate { months_needed: n } | Self::OnTrackWithDuration { months_left: n } => {
                write!(f, "{} months left", n)
            }
            Self::BehindSchedule { additional_months } => {
                write!(f, "{} more months needed", additional_months)
            }
            Self::InvalidPlan => write!(f, "Invalid savings plan"),
        }
    }
}

/// Evaluate a stored goal
pub fn evaluate_status(goal: &Goal) -> GoalStatus {
    evaluate(
        goal.target_amount,
        goal.saved_so_far,
        goal.monthly_savings(),
        goal.months_to_save(),
    )
}

/// Evaluate from raw fields. A positive rate takes precedence over a
/// positive duration.
pub fn evaluate(
    target_amount: Money,
    saved_so_far: Money,
    monthly_savings: Money,
    months_to_save: u32,
) -> GoalStatus {
    let remaining = target_amount - saved_so_far;
    if !remaining.is_positive() {
        return GoalStatus::Achieved;
    }

    if monthly_savings.is_positive() {
        let months_needed = remaining.installments_of(monthly_savings).unwrap_or(0);
        return GoalStatus::OnTrackWithRate { months_needed };
    }

    if months_to_save > 0 {
        // planned = target / months and achieved = saved / months share a
        // denominator, so the rates compare as their numerators.
        let behind = saved_so_far < target_amount;
        let months = months_at_planned_pace(remaining, target_amount, months_to_save);
        return if behind {
            GoalStatus::BehindSchedule {
                additional_months: months,
            }
        } else {
            GoalStatus::OnTrackWithDuration { months_left: months }
        };
    }

    GoalStatus::InvalidPlan
}

/// `ceil(remaining / (target / months))`, computed exactly as
/// `ceil(remaining * months / target)`
fn months_at_planned_pace(remaining: Money, target_amount: Money, months_to_save: u32) -> u32 {
    if !target_amount.is_positive() {
        return 0;
    }
    let numerator = remaining.cents() as i128 * months_to_save as i128;
    let denominator = target_amount.cents() as i128;
    let months = (numerator + denominator - 1) / denominator;
    months.clamp(0, u32::MAX as i128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    #[test]
    fn test_achieved_exactly_and_overshoot() {
        assert_eq!(evaluate(units(500), units(500), units(100), 0), GoalStatus::Achieved);
        assert_eq!(evaluate(units(500), units(500), Money::zero(), 5), GoalStatus::Achieved);
        assert_eq!(evaluate(units(500), units(700), Money::zero(), 0), GoalStatus::Achieved);
    }

    #[test]
    fn test_rate_mode() {
        assert_eq!(
            evaluate(units(1200), units(300), units(400), 0),
            GoalStatus::OnTrackWithRate { months_needed: 3 }
        );
        assert_eq!(
            evaluate(units(1000), Money::zero(), units(300), 0),
            GoalStatus::OnTrackWithRate { months_needed: 4 }
        );
        assert_eq!(
            evaluate(units(1000), Money::from_cents(99_999), units(300), 0),
            GoalStatus::OnTrackWithRate { months_needed: 1 }
        );
    }

    #[test]
    fn test_behind_schedule() {
        assert_eq!(
            evaluate(units(1200), units(300), Money::zero(), 12),
            GoalStatus::BehindSchedule {
                additional_months: 9
            }
        );
        assert_eq!(
            evaluate(units(1000), Money::zero(), Money::zero(), 3),
            GoalStatus::BehindSchedule {
                additional_months: 3
            }
        );
        // 100 remaining at a planned pace of 333.33 rounds up to one month
        assert_eq!(
            evaluate(units(1000), units(900), Money::zero(), 3),
            GoalStatus::BehindSchedule {
                additional_months: 1
            }
        );
    }

    #[test]
    fn test_rate_wins_when_both_set() {
        assert_eq!(
            evaluate(units(1200), units(300), units(100), 12),
            GoalStatus::OnTrackWithRate { months_needed: 9 }
        );
    }

    #[test]
    fn test_invalid_plan() {
        assert_eq!(
            evaluate(units(1200), units(300), Money::zero(), 0),
            GoalStatus::InvalidPlan
        );
        assert_eq!(
            evaluate(units(1200), Money::zero(), Money::from_cents(-100), 0),
            GoalStatus::InvalidPlan
        );
    }

    #[test]
    fn test_display_text() {
        assert_eq!(GoalStatus::Achieved.to_string(), "Goal Achieved!");
        assert_eq!(
            GoalStatus::OnTrackWithRate { months_needed: 3 }.to_string(),
            "3 months left"
        );
        assert_eq!(
            GoalStatus::OnTrackWithDuration { months_left: 2 }.to_string(),
            "2 months left"
        );
        assert_eq!(
            GoalStatus::BehindSchedule {
                additional_months: 9
            }
            .to_string(),
            "9 more months needed"
        );
        assert_eq!(GoalStatus::InvalidPlan.to_string(), "Invalid savings plan");
    }

    #[test]
    fn test_months_accessor() {
        assert_eq!(GoalStatus::Achieved.months(), None);
        assert_eq!(GoalStatus::OnTrackWithRate { months_needed: 4 }.months(), Some(4));
        assert!(GoalStatus::Achieved.is_achieved());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GoalStatus::BehindSchedule {
            additional_months: 9,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"behind_schedule","additional_months":9}"#);
    }
}
