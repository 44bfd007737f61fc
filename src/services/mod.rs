//! Goal planning logic
//!
//! Pure calculations on top of the models: the finish-date projection run
//! once at goal creation, and the progress evaluation run on every render.

pub mod progress;
pub mod projection;

pub use progress::{evaluate, evaluate_status, GoalStatus};
pub use projection::{compute_finish_date, planned_duration, project_finish};
