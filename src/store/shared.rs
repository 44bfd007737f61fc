//! Thread-safe goal store
//!
//! Wraps a `GoalStore` in a single mutex so that each create or contribute
//! is applied atomically when several clients share one store.

use std::sync::{Mutex, MutexGuard};

use super::{GoalStore, StoreSummary};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Goal, GoalId, GoalInput, InputValue, MonthYear};
use crate::services::{evaluate_status, GoalStatus};

#[derive(Debug, Default)]
pub struct SharedGoalStore {
    inner: Mutex<GoalStore>,
}

impl SharedGoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> PlannerResult<MutexGuard<'_, GoalStore>> {
        self.inner
            .lock()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire store lock: {}", e)))
    }

    pub fn create_goal(&self, input: &GoalInput) -> PlannerResult<Goal> {
        self.lock()?.create_goal(input)
    }

    pub fn create_goal_at(&self, input: &GoalInput, today: MonthYear) -> PlannerResult<Goal> {
        self.lock()?.create_goal_at(input, today)
    }

    pub fn add_contribution(
        &self,
        goal_id: GoalId,
        amount: impl Into<InputValue>,
    ) -> PlannerResult<bool> {
        Ok(self.lock()?.add_contribution(goal_id, amount))
    }

    /// Snapshot of all goals in creation order
    pub fn list_goals(&self) -> PlannerResult<Vec<Goal>> {
        Ok(self.lock()?.list_goals().to_vec())
    }

    pub fn get(&self, goal_id: GoalId) -> PlannerResult<Option<Goal>> {
        Ok(self.lock()?.get(goal_id).cloned())
    }

    /// Evaluate a goal's status under the lock
    pub fn status(&self, goal_id: GoalId) -> PlannerResult<GoalStatus> {
        let store = self.lock()?;
        let goal = store
            .get(goal_id)
            .ok_or_else(|| PlannerError::goal_not_found(goal_id.to_string()))?;
        Ok(evaluate_status(goal))
    }

    pub fn summary(&self) -> PlannerResult<StoreSummary> {
        Ok(self.lock()?.summary())
    }

    pub fn into_inner(self) -> PlannerResult<GoalStore> {
        self.inner
            .into_inner()
            .map_err(|e| PlannerError::Storage(format!("Store lock poisoned: {}", e)))
    }
}

impl From<GoalStore> for SharedGoalStore {
    fn from(store: GoalStore) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }
}
