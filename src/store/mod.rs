//! In-memory goal store
//!
//! The store owns every goal for its whole lifetime. Goals are only ever
//! created or topped up; nothing is edited, reordered or deleted. Nothing is
//! written to disk.

mod shared;

pub use shared::SharedGoalStore;

use tracing::{debug, info};

use crate::error::PlannerResult;
use crate::models::{Goal, GoalId, GoalInput, InputValue, Money, MonthYear};
use crate::services::{evaluate_status, project_finish};

/// Ordered collection of goals, in creation order
#[derive(Debug, Clone, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

/// Totals across all goals in a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub goal_count: usize,
    pub achieved_count: usize,
    pub total_target: Money,
    pub total_saved: Money,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a goal, defaulting an omitted start month/year to the current month
    pub fn create_goal(&mut self, input: &GoalInput) -> PlannerResult<Goal> {
        self.create_goal_at(input, MonthYear::current())
    }

    /// Create a goal with an explicit "today" for start-date defaults.
    ///
    /// On rejection the store is left untouched.
    pub fn create_goal_at(&mut self, input: &GoalInput, today: MonthYear) -> PlannerResult<Goal> {
        let validated = input.validate(today).map_err(|e| {
            debug!(name = %input.name, error = %e, "goal rejected");
            e
        })?;

        let finish_date = project_finish(validated.start_date, &validated.plan, validated.target_amount);
        let mut goal = Goal::new(validated, finish_date);
        while self.get(goal.id).is_some() {
            goal.id = GoalId::new();
        }

        info!(
            goal = %goal.id,
            name = %goal.name,
            target = %goal.target_amount,
            plan = %goal.plan,
            start = %goal.start_date,
            finish = ?finish_date,
            "goal created"
        );

        self.goals.push(goal.clone());
        Ok(goal)
    }

    /// Add a contribution to a goal.
    ///
    /// Returns `false` without touching anything when the amount is not a
    /// positive number, the goal does not exist, or the new total would not
    /// fit in the money range.
    pub fn add_contribution(&mut self, goal_id: GoalId, amount: impl Into<InputValue>) -> bool {
        let raw = amount.into();
        let Some(amount) = raw.as_money().filter(Money::is_positive) else {
            debug!(goal = %goal_id, amount = ?raw, "contribution ignored: not a positive amount");
            return false;
        };

        let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) else {
            debug!(goal = %goal_id, "contribution ignored: unknown goal");
            return false;
        };

        if !goal.add_savings(amount) {
            debug!(goal = %goal.id, amount = %amount, "contribution ignored: total would overflow");
            return false;
        }
        debug!(
            goal = %goal.id,
            amount = %amount,
            saved = %goal.saved_so_far,
            status = %evaluate_status(goal),
            "contribution added"
        );
        true
    }

    /// All goals in creation order
    pub fn list_goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, goal_id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    /// Find a goal by full ID, displayed ID ("goal-1a2b3c4d"), ID prefix,
    /// or case-insensitive name
    pub fn find(&self, query: &str) -> Option<&Goal> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Ok(id) = query.parse::<GoalId>() {
            return self.get(id);
        }

        let prefix = query.strip_prefix("goal-").unwrap_or(query).to_lowercase();
        if prefix.len() >= 4 && prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            if let Some(goal) = self
                .goals
                .iter()
                .find(|g| g.id.as_uuid().to_string().starts_with(&prefix))
            {
                return Some(goal);
            }
        }

        self.goals
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(query))
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            goal_count: self.goals.len(),
            achieved_count: self.goals.iter().filter(|g| g.is_achieved()).count(),
            total_target: self.goals.iter().map(|g| g.target_amount).sum(),
            total_saved: self.goals.iter().map(|g| g.saved_so_far).sum(),
        }
    }
}
