//! Goal display formatting
//!
//! Formats goals as detail cards and as a summary table for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::progress::{format_bar, format_percentage, separator};
use crate::models::{year_window, Goal, SavingsPlan, MONTH_NAMES};
use crate::services::evaluate_status;
use crate::store::StoreSummary;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Plan")]
    plan: String,
    #[tabled(rename = "Finish")]
    finish: String,
    #[tabled(rename = "Time Remaining")]
    status: String,
}

/// Finish date label, or "Not Calculated" when the plan had no projection
fn finish_label(goal: &Goal) -> String {
    goal.finish_date
        .map(|d| d.label())
        .unwrap_or_else(|| "Not Calculated".to_string())
}

/// Format goals as a table in creation order
pub fn format_goal_table(goals: &[Goal], currency_label: &str) -> String {
    if goals.is_empty() {
        return "No goals yet.\n\nUse 'add <name> <target> --rate <amount>' or '--months <n>' to create one."
            .to_string();
    }

    let rows = goals.iter().map(|goal| GoalRow {
        id: goal.id.to_string(),
        name: goal.name.clone(),
        target: goal.target_amount.format_with_label(currency_label),
        saved: goal.saved_so_far.format_with_label(currency_label),
        progress: format!(
            "{} {}",
            format_bar(goal.progress_percent(), 10),
            format_percentage(goal.progress_percent())
        ),
        plan: goal.plan.to_string(),
        finish: finish_label(goal),
        status: evaluate_status(goal).to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a single goal as a detail card
pub fn format_goal_card(goal: &Goal, currency_label: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", goal.name, goal.id));
    output.push_str(&format!("{}\n", separator(40)));
    output.push_str(&format!(
        "  Total Amount:   {}\n",
        goal.target_amount.format_with_label(currency_label)
    ));
    output.push_str(&format!(
        "  Saved So Far:   {}\n",
        goal.saved_so_far.format_with_label(currency_label)
    ));

    match goal.plan {
        SavingsPlan::Rate(rate) => {
            output.push_str(&format!(
                "  Plan to save every month: {}\n",
                rate.format_with_label(currency_label)
            ));
        }
        SavingsPlan::Duration(months) => {
            output.push_str(&format!("  Time Period:    {} months\n", months));
            if let Some(required) = goal.required_monthly() {
                output.push_str(&format!(
                    "  Need to save every month: {}\n",
                    required.format_with_label(currency_label)
                ));
            }
        }
    }

    output.push_str(&format!("  Start Date:     {}\n", goal.start_date.label()));
    output.push_str(&format!("  Finish Date:    {}\n", finish_label(goal)));
    output.push_str(&format!(
        "  Progress:       {} {}\n",
        format_bar(goal.progress_percent(), 20),
        format_percentage(goal.progress_percent())
    ));
    output.push_str(&format!("  Time Remaining: {}\n", evaluate_status(goal)));

    output
}

/// Format store totals
pub fn format_summary(summary: &StoreSummary, currency_label: &str) -> String {
    let pct = if summary.total_target.is_positive() {
        summary.total_saved.as_f64() / summary.total_target.as_f64() * 100.0
    } else {
        0.0
    };

    format!(
        "Goals: {} ({} achieved)\nTotal target: {}\nTotal saved:  {} ({})\n",
        summary.goal_count,
        summary.achieved_count,
        summary.total_target.format_with_label(currency_label),
        summary.total_saved.format_with_label(currency_label),
        format_percentage(pct)
    )
}

/// List the selectable start months, numbered 1-12
pub fn format_month_choices() -> String {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>2}  {}\n", i + 1, name))
        .collect()
}

/// List the selectable start years
pub fn format_year_choices(current_year: i32, window: u32) -> String {
    year_window(current_year, window)
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
