//! Diagnostic logging to stderr.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "PROSE_GUARD_LOG";

static INIT: Once = Once::new();

/// Filter directive for the given `-v` count and `-q` flag.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Later calls are no-ops.
///
/// `PROSE_GUARD_LOG` takes precedence over the flags when set. `ansi` controls
/// colored level and field markup on stderr.
pub fn init(verbose: u8, quiet: bool, ansi: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(default_directive(2, true), "error");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(3, false), "debug");
    }

    #[test]
    fn init_is_idempotent() {
        init(0, true, false);
        init(2, false, true);
    }
}
