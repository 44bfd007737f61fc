//! Tracing setup for the `goalplan` binary
//!
//! Logs go to stderr so they never mix with command output. The filter is
//! read from `GOALPLAN_LOG` (same syntax as `RUST_LOG`).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "GOALPLAN_LOG";

const DEFAULT_FILTER: &str = "goal_planner=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
