//! Logging setup and crash reporting for the command-line tool.
//!
//! Library code logs through `tracing` and the `log` facade; nothing is
//! printed unless the binary installs a subscriber with [`init_logging`].
//!
//! ```ignore
//! use factibilidad::observability::{init_logging, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_logging(1);
//! }
//! ```

pub mod panic_hook;

pub use panic_hook::{install_panic_hook, set_current_command};

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warn, info, debug, then trace.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "factibilidad=info,warn",
        2 => "factibilidad=debug,info",
        _ => "trace",
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over the verbosity
/// count. `log` records are bridged into the subscriber. Calling this twice
/// is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        log::debug!("Logging already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_filter(0), "warn");
        assert!(verbosity_filter(1).contains("info"));
        assert!(verbosity_filter(2).contains("debug"));
        assert_eq!(verbosity_filter(9), "trace");
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logging(0);
        init_logging(3);
    }
}
