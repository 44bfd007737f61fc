//! CLI command handlers
//!
//! Each submodule implements one group of `goalplan` subcommands on top of
//! the library API. Handlers write to any `Write` so they can be tested
//! without a terminal.

pub mod project;
pub mod session;

pub use project::{handle_project, handle_status, split_start, PlanArgs, ProjectArgs, StatusArgs};
pub use session::{Flow, Session};
