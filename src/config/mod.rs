//! Configuration module for the goal planner
//!
//! - Path resolution for the settings file
//! - User display preferences

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
