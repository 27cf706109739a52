//! Structured logging setup.
//!
//! Uses the `tracing` ecosystem throughout. `RUST_LOG` overrides the
//! configured filter when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber on stderr.
///
/// Call once at startup; later calls are no-ops.
///
/// # Arguments
///
/// * `level` - Filter directive used when `RUST_LOG` is unset, e.g.
///   `"info,voice_navigator=debug"`.
/// * `json` - Emit one JSON object per event instead of compact text.
pub fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    // set_global_default fails if already set; that is fine
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing("warn", false);
        init_tracing("debug", true);
    }
}
