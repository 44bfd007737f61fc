//! JSON export of the current goals
//!
//! Snapshot of every goal with its evaluated status, with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Goal, Money};
use crate::services::{evaluate_status, GoalStatus};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A goal together with its status at export time
#[derive(Debug, Clone, Serialize)]
pub struct ExportedGoal {
    #[serde(flatten)]
    pub goal: Goal,
    pub status: GoalStatus,
    pub status_text: String,
}

/// Full export structure
#[derive(Debug, Clone, Serialize)]
pub struct GoalExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub currency_label: String,
    pub goals: Vec<ExportedGoal>,
    pub total_target: Money,
    pub total_saved: Money,
}

impl GoalExport {
    pub fn from_goals(goals: &[Goal], currency_label: &str) -> Self {
        let exported = goals
            .iter()
            .map(|goal| {
                let status = evaluate_status(goal);
                ExportedGoal {
                    goal: goal.clone(),
                    status,
                    status_text: status.to_string(),
                }
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_label: currency_label.to_string(),
            goals: exported,
            total_target: goals.iter().map(|g| g.target_amount).sum(),
            total_saved: goals.iter().map(|g| g.saved_so_far).sum(),
        }
    }
}

/// Write the goals as pretty-printed JSON
pub fn export_goals_json<W: Write>(
    goals: &[Goal],
    currency_label: &str,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = GoalExport::from_goals(goals, currency_label);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}
