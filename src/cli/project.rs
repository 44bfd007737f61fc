//! One-shot planning commands
//!
//! `project` answers "when will I be done?" and `status` answers "how long
//! is left?" without creating any goal.

use clap::Args;
use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{GoalInput, InputValue, MonthYear, SavingsPlan};
use crate::services::{evaluate, planned_duration, project_finish};

/// Plan parameters shared by the one-shot commands
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Total amount to save (e.g., "10000")
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: String,

    /// Amount saved every month
    #[arg(short, long, conflicts_with = "months", allow_negative_numbers = true)]
    pub rate: Option<String>,

    /// Number of months to reach the target
    #[arg(short, long, allow_negative_numbers = true)]
    pub months: Option<String>,
}

/// Arguments of `goalplan project`
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Start month (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub start: Option<String>,
}

/// Arguments of `goalplan status`
#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Amount saved so far
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub saved: String,
}

/// Split "YYYY-MM" into raw (month, year) form values for the core to validate
pub fn split_start(start: &str) -> PlannerResult<(InputValue, InputValue)> {
    let (year, month) = start
        .trim()
        .split_once('-')
        .or_else(|| start.trim().split_once('/'))
        .ok_or_else(|| {
            PlannerError::Validation(format!("Invalid start '{}'. Use YYYY-MM", start))
        })?;
    Ok((month.into(), year.into()))
}

fn goal_input(plan: &PlanArgs, start: Option<&str>) -> PlannerResult<GoalInput> {
    let mut input = GoalInput::new("projection", plan.target.as_str());
    if let Some(rate) = &plan.rate {
        input = input.with_monthly_savings(rate.as_str());
    }
    if let Some(months) = &plan.months {
        input = input.with_months_to_save(months.as_str());
    }
    if let Some(start) = start {
        let (month, year) = split_start(start)?;
        input = input.starting(month, year);
    }
    Ok(input)
}

/// Handle `goalplan project`
pub fn handle_project<W: Write>(
    args: &ProjectArgs,
    today: MonthYear,
    out: &mut W,
) -> PlannerResult<()> {
    let validated = goal_input(&args.plan, args.start.as_deref())?.validate(today)?;

    let finish = project_finish(validated.start_date, &validated.plan, validated.target_amount);
    let duration = planned_duration(&validated.plan, validated.target_amount);

    writeln!(out, "Start:  {}", validated.start_date.label())?;
    match finish {
        Some(finish) => writeln!(out, "Finish: {}", finish.label())?,
        None => writeln!(out, "Finish: Not Calculated")?,
    }
    if let Some(duration) = duration {
        writeln!(out, "Duration: {} months", duration)?;
    }
    if let SavingsPlan::Duration(months) = validated.plan {
        if let Some(monthly) = validated.target_amount.split_even(months) {
            writeln!(out, "Save every month: {}", monthly)?;
        }
    }

    Ok(())
}

/// Handle `goalplan status`
pub fn handle_status<W: Write>(
    args: &StatusArgs,
    settings: &Settings,
    today: MonthYear,
    out: &mut W,
) -> PlannerResult<()> {
    let validated = goal_input(&args.plan, None)?.validate(today)?;
    let saved = InputValue::from(args.saved.as_str())
        .as_money()
        .filter(|m| !m.is_negative())
        .ok_or_else(|| {
            PlannerError::Validation(format!("Invalid saved amount '{}'", args.saved))
        })?;

    let status = evaluate(
        validated.target_amount,
        saved,
        validated.plan.monthly_savings(),
        validated.plan.months_to_save(),
    );

    writeln!(
        out,
        "Saved {} of {}",
        saved.format_with_label(&settings.currency_label),
        validated
            .target_amount
            .format_with_label(&settings.currency_label)
    )?;
    writeln!(out, "Time Remaining: {}", status)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> MonthYear {
        MonthYear::new(10, 2026).unwrap()
    }

    fn plan(target: &str, rate: Option<&str>, months: Option<&str>) -> PlanArgs {
        PlanArgs {
            target: target.into(),
            rate: rate.map(Into::into),
            months: months.map(Into::into),
        }
    }

    fn run_project(args: ProjectArgs) -> PlannerResult<String> {
        let mut out = Vec::new();
        handle_project(&args, today(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_project_rate() {
        let text = run_project(ProjectArgs {
            plan: plan("1200", Some("400"), None),
            start: Some("2024-01".into()),
        })
        .unwrap();
        assert!(text.contains("Start:  January/2024"));
        assert!(text.contains("Finish: March/2024"));
        assert!(text.contains("Duration: 3 months"));
    }

    #[test]
    fn test_project_duration_defaults_to_today() {
        let text = run_project(ProjectArgs {
            plan: plan("1200", None, Some("3")),
            start: None,
        })
        .unwrap();
        assert!(text.contains("Start:  October/2026"));
        assert!(text.contains("Finish: December/2026"));
        assert!(text.contains("Save every month: 400.00"));
    }

    #[test]
    fn test_project_rejects_bad_input() {
        let bad_start = run_project(ProjectArgs {
            plan: plan("1200", None, Some("3")),
            start: Some("next year".into()),
        });
        assert!(bad_start.unwrap_err().is_validation());

        let no_plan = run_project(ProjectArgs {
            plan: plan("1200", None, None),
            start: None,
        });
        assert!(no_plan.unwrap_err().is_validation());
    }

    #[test]
    fn test_status() {
        let args = StatusArgs {
            plan: plan("1200", None, Some("12")),
            saved: "300".into(),
        };
        let mut out = Vec::new();
        handle_status(&args, &Settings::default(), today(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Saved 300.00 BDT of 1200.00 BDT"));
        assert!(text.contains("Time Remaining: 9 more months needed"));
    }

    #[test]
    fn test_status_rejects_negative_saved() {
        let args = StatusArgs {
            plan: plan("1200", Some("100"), None),
            saved: "-1".into(),
        };
        let mut out = Vec::new();
        assert!(handle_status(&args, &Settings::default(), today(), &mut out).is_err());
    }

    #[test]
    fn test_split_start() {
        let (month, year) = split_start("2025-03").unwrap();
        assert_eq!(month, InputValue::Text("03".into()));
        assert_eq!(year, InputValue::Text("2025".into()));
        assert!(split_start("March").is_err());
    }
}
