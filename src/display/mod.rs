//! Display formatting for terminal output
//!
//! Provides the goal cards, the goal table and the calendar choices shown by
//! the `goalplan` command.

pub mod goal;
pub mod progress;

pub use goal::{
    format_goal_card, format_goal_table, format_month_choices, format_summary,
    format_year_choices,
};
pub use progress::{format_bar, format_percentage, separator};
