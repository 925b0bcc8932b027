//! Logging setup - tracing subscriber on stderr

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `gemscan=trace`
pub const LOG_ENV: &str = "GEMSCAN_LOG";

/// Default filter for the given verbosity flags
pub fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber.
///
/// `GEMSCAN_LOG` wins over the flags. Stdout is left to command output.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, false), "warn");
        assert_eq!(default_filter(true, false), "debug");
        assert_eq!(default_filter(true, true), "error");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false, true);
        init_logging(true, false);
    }
}
