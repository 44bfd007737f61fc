//! Interactive goal session
//!
//! A line-oriented shell over an in-memory `GoalStore`. Goals live only for
//! the duration of the session. Lines are split with shell quoting rules, so
//! names with spaces can be quoted.

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

use super::project::split_start;
use crate::config::settings::Settings;
use crate::display::{
    format_goal_card, format_goal_table, format_month_choices, format_summary,
    format_year_choices,
};
use crate::error::{PlannerError, PlannerResult};
use crate::export::{export_goals, ExportFormat};
use crate::models::{GoalInput, MonthYear, SavingsMode};
use crate::store::GoalStore;

/// A single session line
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Create a new goal
    #[command(alias = "new")]
    Add {
        /// Goal name (quote names with spaces)
        name: String,
        /// Total amount to save
        #[arg(allow_negative_numbers = true)]
        target: String,
        /// Monthly amount or number of months, depending on the default savings mode
        #[arg(allow_negative_numbers = true)]
        plan: Option<String>,
        /// Amount saved every month
        #[arg(short, long, allow_negative_numbers = true)]
        rate: Option<String>,
        /// Number of months to reach the target
        #[arg(short, long, allow_negative_numbers = true)]
        months: Option<String>,
        /// Start month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Add savings to a goal
    #[command(alias = "contribute")]
    Save {
        /// Goal name or ID
        goal: String,
        /// Amount to add
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List all goals
    #[command(alias = "ls")]
    List,

    /// Show a single goal
    Show {
        /// Goal name or ID
        goal: String,
    },

    /// Show totals across all goals
    Summary,

    /// Write the goals to the output as json, yaml or csv
    Export {
        #[arg(default_value = "json")]
        format: String,
    },

    /// List the selectable start months
    Months,

    /// List the selectable start years
    Years,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session state: the goal store plus display settings
pub struct Session<'a> {
    store: GoalStore,
    settings: &'a Settings,
    today: MonthYear,
    prompt: bool,
}

impl<'a> Session<'a> {
    pub fn new(settings: &'a Settings, today: MonthYear) -> Self {
        Self {
            store: GoalStore::new(),
            settings,
            today,
            prompt: false,
        }
    }

    /// Print a prompt before each line (interactive use)
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn store(&self) -> &GoalStore {
        &self.store
    }

    /// Read and execute lines until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> PlannerResult<()> {
        if self.prompt {
            writeln!(out, "Goal planner session. Type 'help' for commands, 'quit' to leave.")?;
        }

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            if self.execute_line(&line?, out)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Execute one line. Rejected input is reported, not returned as an error;
    /// only output failures end the session.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> PlannerResult<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(parsed.command, out) {
            Ok(flow) => Ok(flow),
            Err(PlannerError::Io(e)) => Err(PlannerError::Io(e)),
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> PlannerResult<Flow> {
        let label = self.settings.currency_label.as_str();

        match command {
            SessionCommand::Add {
                name,
                target,
                plan,
                rate,
                months,
                start,
            } => {
                let mut input = GoalInput::new(name, target);
                if let Some(plan) = plan {
                    input = match self.settings.default_savings_mode {
                        SavingsMode::Monthly => input.with_monthly_savings(plan),
                        SavingsMode::Time => input.with_months_to_save(plan),
                    };
                }
                if let Some(rate) = rate {
                    input = input.with_monthly_savings(rate);
                }
                if let Some(months) = months {
                    input = input.with_months_to_save(months);
                }
                if let Some(start) = start {
                    let (month, year) = split_start(&start)?;
                    input = input.starting(month, year);
                }

                let goal = self.store.create_goal_at(&input, self.today)?;
                writeln!(out, "Created goal '{}' ({})", goal.name, goal.id)?;
                match goal.finish_date {
                    Some(finish) => writeln!(out, "  Finish Date: {}", finish.label())?,
                    None => writeln!(out, "  Finish Date: Not Calculated")?,
                }
            }

            SessionCommand::Save { goal, amount } => {
                let found = self
                    .store
                    .find(&goal)
                    .ok_or_else(|| PlannerError::goal_not_found(&goal))?;
                let id = found.id;

                if self.store.add_contribution(id, amount.as_str()) {
                    if let Some(updated) = self.store.get(id) {
                        writeln!(
                            out,
                            "Saved {} toward '{}': {} of {}",
                            amount.trim(),
                            updated.name,
                            updated.saved_so_far.format_with_label(label),
                            updated.target_amount.format_with_label(label)
                        )?;
                    }
                } else {
                    writeln!(
                        out,
                        "Ignored: '{}' is not a positive amount",
                        amount.trim()
                    )?;
                }
            }

            SessionCommand::List => {
                writeln!(out, "{}", format_goal_table(self.store.list_goals(), label))?;
            }

            SessionCommand::Show { goal } => {
                let found = self
                    .store
                    .find(&goal)
                    .ok_or_else(|| PlannerError::goal_not_found(&goal))?;
                write!(out, "{}", format_goal_card(found, label))?;
            }

            SessionCommand::Summary => {
                write!(out, "{}", format_summary(&self.store.summary(), label))?;
            }

            SessionCommand::Export { format } => {
                let format: ExportFormat = format.parse()?;
                export_goals(format, self.store.list_goals(), label, out)?;
            }

            SessionCommand::Months => {
                write!(out, "{}", format_month_choices())?;
            }

            SessionCommand::Years => {
                writeln!(
                    out,
                    "{}",
                    format_year_choices(self.today.year, self.settings.start_year_window)
                )?;
            }

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn today() -> MonthYear {
        MonthYear::new(1, 2024).unwrap()
    }

    fn run_script(settings: &Settings, script: &str) -> (String, GoalStore) {
        let mut session = Session::new(settings, today());
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session.store().clone())
    }

    #[test]
    fn test_add_save_show() {
        let settings = Settings::default();
        let (out, store) = run_script(
            &settings,
            "add \"Solar System\" 1200 --rate 400\nsave 'solar system' 300\nshow \"Solar System\"\n",
        );

        assert!(out.contains("Created goal 'Solar System'"));
        assert!(out.contains("Finish Date: March/2024"));
        assert!(out.contains("Saved 300 toward 'Solar System': 300.00 BDT of 1200.00 BDT"));
        assert!(out.contains("Time Remaining: 3 months left"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list_goals()[0].saved_so_far, Money::from_units(300));
    }

    #[test]
    fn test_positional_plan_follows_default_mode() {
        let settings = Settings {
            default_savings_mode: SavingsMode::Time,
            ..Settings::default()
        };
        let (out, store) = run_script(&settings, "add Car 1200 12 --start 2024-06\n");

        assert!(out.contains("Finish Date: May/2025"));
        assert_eq!(store.list_goals()[0].months_to_save(), 12);
    }

    #[test]
    fn test_rejected_input_keeps_session_running() {
        let settings = Settings::default();
        let (out, store) = run_script(
            &settings,
            "add Empty 0 --rate 10\nadd NoPlan 100\nadd Ok 100 --months 2\nsave Ok -5\nsave Missing 5\nfrobnicate\nlist\n",
        );

        assert!(out.contains("Error: Validation error: Target amount must be a positive number"));
        assert!(out.contains("Ignored: '-5' is not a positive amount"));
        assert!(out.contains("Error: Goal not found: Missing"));
        assert!(out.contains("Ok"));
        assert_eq!(store.len(), 1);
        assert!(store.list_goals()[0].saved_so_far.is_zero());
    }

    #[test]
    fn test_negative_numbers_reach_validation() {
        let settings = Settings::default();
        let (out, store) = run_script(
            &settings,
            "add Neg -500 --months 2
add Rate 500 --rate -50
add Pos 500 -5 --months 4
save Pos --5
",
        );

        assert!(out.contains("Error: Validation error: Target amount must be a positive number"));
        assert!(out.contains("Error: Validation error: Either a positive monthly savings amount"));
        assert!(out.contains("Created goal 'Pos'"));
        assert!(out.contains("Ignored: '--5' is not a positive amount"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list_goals()[0].months_to_save(), 4);
        assert!(store.list_goals()[0].saved_so_far.is_zero());
    }

    #[test]
    fn test_quit_stops_reading() {
        let settings = Settings::default();
        let (_, store) = run_script(
            &settings,
            "add A 100 --months 1\nquit\nadd B 100 --months 1\n",
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let settings = Settings::default();
        let (out, store) = run_script(&settings, "# setup\n\n   \nsummary\n");
        assert!(out.contains("Goals: 0 (0 achieved)"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_export_and_calendar() {
        let settings = Settings {
            start_year_window: 2,
            ..Settings::default()
        };
        let (out, _) = run_script(
            &settings,
            "add Bike 600 --months 6\nexport csv\nexport xml\nmonths\nyears\n",
        );

        assert!(out.contains("ID,Name,Target,Saved"));
        assert!(out.contains("Bike,600.00"));
        assert!(out.contains("Unknown export format 'xml'"));
        assert!(out.contains("12  December"));
        assert!(out.contains("2024 2025"));
    }

    #[test]
    fn test_unbalanced_quotes() {
        let settings = Settings::default();
        let (out, store) = run_script(&settings, "add \"Broken 100 --months 2\n");
        assert!(out.starts_with("Error:"));
        assert!(store.is_empty());
    }
}
