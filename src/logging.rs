//! Diagnostic logging via `tracing`.
//!
//! Log lines go to stderr so they never mix with anything a caller pipes from
//! stdout. The level is controlled by the `JUSTD_LOG` environment variable:
//!
//! ```bash
//! JUSTD_LOG=debug justd gray
//! JUSTD_LOG=justd=trace justd gray slate -y
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_ENV: &str = "JUSTD_LOG";

/// Filter used when `JUSTD_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
