//! Core data models for the goal planner
//!
//! This module contains the data structures of the savings-goal domain:
//! goals, their funding plans, money amounts and calendar months.

pub mod calendar;
pub mod goal;
pub mod ids;
pub mod input;
pub mod money;
pub mod plan;

pub use calendar::{year_window, CalendarError, MonthYear, MONTH_NAMES};
pub use goal::Goal;
pub use ids::GoalId;
pub use input::{GoalInput, InputValue, ValidatedGoal};
pub use money::{Money, MoneyParseError};
pub use plan::{SavingsMode, SavingsPlan};
