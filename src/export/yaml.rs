//! YAML export of the current goals

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::export::json::GoalExport;
use crate::models::Goal;

/// Write the goals as YAML with a commented header
pub fn export_goals_yaml<W: Write>(
    goals: &[Goal],
    currency_label: &str,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = GoalExport::from_goals(goals, currency_label);
    let to_export_error = |e: std::io::Error| PlannerError::Export(e.to_string());

    writeln!(writer, "# Goal Planner Export").map_err(to_export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_error)?;
    writeln!(writer, "# Goals: {}", export.goals.len()).map_err(to_export_error)?;
    writeln!(writer).map_err(to_export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalInput, MonthYear};
    use crate::store::GoalStore;

    #[test]
    fn test_yaml_export() {
        let mut store = GoalStore::new();
        store
            .create_goal_at(
                &GoalInput::new("Solar System", "10000").with_monthly_savings("500"),
                MonthYear::new(6, 2025).unwrap(),
            )
            .unwrap();

        let mut output = Vec::new();
        export_goals_yaml(store.list_goals(), "BDT", &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Goal Planner Export"));
        assert!(yaml.contains("# Goals: 1"));
        assert!(yaml.contains("Solar System"));
        assert!(yaml.contains("status_text: 20 months left"));

        let body: String = yaml
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let value: serde_yaml::Value = serde_yaml::from_str(&body).unwrap();
        assert_eq!(value["goals"][0]["finish_date"]["month"], 1);
        assert_eq!(value["goals"][0]["finish_date"]["year"], 2027);
    }
}
