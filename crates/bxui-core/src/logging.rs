#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! The layout and matting crates log through `debug!`, `trace!` and `warn!`
//! from here. With the `tracing` feature these are the `tracing` macros;
//! without it they expand to nothing, so the default build carries no
//! logging dependency.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

// Without tracing the macros swallow their arguments.
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Install a JSON subscriber on stderr with the given filter directive
/// (`RUST_LOG` syntax).
///
/// Returns `false` if the directive is invalid or a global subscriber was
/// already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber(filter: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let Ok(filter) = EnvFilter::try_new(filter) else {
        return false;
    };
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
