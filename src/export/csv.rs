//! CSV export of the current goals
//!
//! One row per goal, spreadsheet-compatible.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Goal;
use crate::services::evaluate_status;

const HEADER: [&str; 11] = [
    "ID",
    "Name",
    "Target",
    "Saved",
    "Remaining",
    "Monthly Savings",
    "Months To Save",
    "Start",
    "Finish",
    "Status",
    "Months",
];

/// Write the goals as CSV
pub fn export_goals_csv<W: Write>(goals: &[Goal], writer: &mut W) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let to_export_error = |e: csv::Error| PlannerError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(to_export_error)?;

    for goal in goals {
        let status = evaluate_status(goal);
        let monthly = if goal.monthly_savings().is_positive() {
            goal.monthly_savings().to_string()
        } else {
            String::new()
        };
        let months = if goal.months_to_save() > 0 {
            goal.months_to_save().to_string()
        } else {
            String::new()
        };

        csv_writer
            .write_record([
                goal.id.as_uuid().to_string(),
                goal.name.clone(),
                goal.target_amount.to_string(),
                goal.saved_so_far.to_string(),
                goal.remaining().to_string(),
                monthly,
                months,
                goal.start_date.to_string(),
                goal.finish_date.map(|d| d.to_string()).unwrap_or_default(),
                status.to_string(),
                status.months().map(|m| m.to_string()).unwrap_or_default(),
            ])
            .map_err(to_export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}
