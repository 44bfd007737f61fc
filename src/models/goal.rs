//! Savings goal model
//!
//! A goal is a named savings target with a funding plan, a start month and
//! the finish month projected when it was created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::MonthYear;
use super::ids::GoalId;
use super::input::ValidatedGoal;
use super::money::Money;
use super::plan::SavingsPlan;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    pub plan: SavingsPlan,
    pub saved_so_far: Money,
    pub start_date: MonthYear,
    /// Fixed at creation; reflects the plan, not actual progress
    pub finish_date: Option<MonthYear>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a goal from validated input with nothing saved yet
    pub fn new(validated: ValidatedGoal, finish_date: Option<MonthYear>) -> Self {
        Self {
            id: GoalId::new(),
            name: validated.name,
            target_amount: validated.target_amount,
            plan: validated.plan,
            saved_so_far: Money::zero(),
            start_date: validated.start_date,
            finish_date,
            created_at: Utc::now(),
        }
    }

    /// Monthly rate of a rate-mode plan, zero otherwise
    pub fn monthly_savings(&self) -> Money {
        self.plan.monthly_savings()
    }

    /// Months of a duration-mode plan, zero otherwise
    pub fn months_to_save(&self) -> u32 {
        self.plan.months_to_save()
    }

    /// Amount still missing; zero or negative once the target is reached
    pub fn remaining(&self) -> Money {
        self.target_amount - self.saved_so_far
    }

    pub fn is_achieved(&self) -> bool {
        !self.remaining().is_positive()
    }

    /// Saved amount as a percentage of the target (may exceed 100)
    pub fn progress_percent(&self) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        self.saved_so_far.as_f64() / self.target_amount.as_f64() * 100.0
    }

    /// For duration plans, the amount to put aside each month so the
    /// remainder is spread over the planned months. `None` in rate mode.
    pub fn required_monthly(&self) -> Option<Money> {
        match self.plan {
            SavingsPlan::Duration(months) => {
                let remaining = self.remaining().max(Money::zero());
                remaining.split_even(months)
            }
            SavingsPlan::Rate(_) => None,
        }
    }

    /// Add a contribution. Callers guarantee the amount is positive.
    /// Returns `false`, leaving the goal untouched, if the total would overflow.
    pub(crate) fn add_savings(&mut self, amount: Money) -> bool {
        match self.saved_so_far.checked_add(amount) {
            Some(total) => {
                self.saved_so_far = total;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: i64, plan: SavingsPlan) -> Goal {
        Goal::new(
            ValidatedGoal {
                name: "Emergency Fund".into(),
                target_amount: Money::from_units(target),
                plan,
                start_date: MonthYear::new(1, 2024).unwrap(),
            },
            None,
        )
    }

    #[test]
    fn test_new_goal() {
        let g = goal(1200, SavingsPlan::Rate(Money::from_units(100)));
        assert_eq!(g.name, "Emergency Fund");
        assert!(g.saved_so_far.is_zero());
        assert_eq!(g.monthly_savings(), Money::from_units(100));
        assert_eq!(g.months_to_save(), 0);
        assert!(g.finish_date.is_none());
    }

    #[test]
    fn test_remaining_and_progress() {
        let mut g = goal(1000, SavingsPlan::Duration(10));
        assert!(g.add_savings(Money::from_units(250)));
        assert_eq!(g.remaining(), Money::from_units(750));
        assert!((g.progress_percent() - 25.0).abs() < f64::EPSILON);
        assert!(!g.is_achieved());

        g.add_savings(Money::from_units(800));
        assert_eq!(g.remaining(), Money::from_units(-50));
        assert!(g.is_achieved());
        assert!(g.progress_percent() > 100.0);
    }

    #[test]
    fn test_add_savings_overflow_leaves_total() {
        let mut g = goal(1000, SavingsPlan::Duration(10));
        assert!(g.add_savings(Money::from_cents(i64::MAX - 5)));
        assert!(!g.add_savings(Money::from_cents(10)));
        assert_eq!(g.saved_so_far, Money::from_cents(i64::MAX - 5));
        assert!(g.add_savings(Money::from_cents(5)));
        assert_eq!(g.saved_so_far, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_required_monthly() {
        let mut g = goal(1200, SavingsPlan::Duration(12));
        assert_eq!(g.required_monthly(), Some(Money::from_units(100)));

        g.add_savings(Money::from_units(300));
        assert_eq!(g.required_monthly(), Some(Money::from_units(75)));

        g.add_savings(Money::from_units(1000));
        assert_eq!(g.required_monthly(), Some(Money::zero()));

        let rate = goal(1200, SavingsPlan::Rate(Money::from_units(100)));
        assert_eq!(rate.required_monthly(), None);
    }

    #[test]
    fn test_serialization() {
        let g = goal(500, SavingsPlan::Duration(5));
        let json = serde_json::to_string(&g).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
