//! Export module for the goal planner
//!
//! Writes a snapshot of the in-memory goals in several formats:
//! - JSON: machine-readable, schema-versioned
//! - YAML: human-readable, with a commented header
//! - CSV: one row per goal, spreadsheet-compatible
//!
//! Exports are one-way; nothing is ever read back.

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Goal;

pub use self::csv::export_goals_csv;
pub use json::{export_goals_json, ExportedGoal, GoalExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_goals_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(PlannerError::Validation(format!(
                "Unknown export format '{}'. Valid options: json, yaml, csv",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Write goals in the requested format
pub fn export_goals<W: Write>(
    format: ExportFormat,
    goals: &[Goal],
    currency_label: &str,
    writer: &mut W,
) -> PlannerResult<()> {
    match format {
        ExportFormat::Json => export_goals_json(goals, currency_label, writer),
        ExportFormat::Yaml => export_goals_yaml(goals, currency_label, writer),
        ExportFormat::Csv => export_goals_csv(goals, writer),
    }
}
