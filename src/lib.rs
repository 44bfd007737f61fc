//! Goal Planner - savings goals with finish-date projection
//!
//! This library keeps a collection of savings goals in memory, projects the
//! month each goal will be reached when it is created, and reports how much
//! time is left as savings are added.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (goals, plans, money, calendar months)
//! - `services`: Finish-date projection and progress evaluation
//! - `store`: The in-memory goal store and its thread-safe wrapper
//! - `config`: Settings and path management
//! - `display`: Terminal formatting of goals
//! - `export`: JSON, YAML and CSV snapshots
//! - `cli`: Command handlers used by the `goalplan` binary
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use goal_planner::models::GoalInput;
//! use goal_planner::store::GoalStore;
//!
//! let mut store = GoalStore::new();
//! let goal = store.create_goal(&GoalInput::new("Solar System", "10000").with_monthly_savings("500"))?;
//! store.add_contribution(goal.id, "1500");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

pub use error::{PlannerError, PlannerResult};
