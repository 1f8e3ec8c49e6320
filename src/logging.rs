//! Diagnostic tracing.
//!
//! Stdout carries the operator lines (`Processed: ...`, `Done removing
//! emojis!`), so tracing always goes to stderr and stays silent unless
//! `RUST_LOG` or `-v` asks for it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level follows the `-v` count:
/// none is `warn`, `-vv` is `debug`, `-vvv` and up is `trace`.
///
/// # Example
/// ```bash
/// RUST_LOG=emoji_strip=debug emoji-strip ./articles
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 | 1 => "warn",
        2 => "emoji_strip=debug",
        _ => "emoji_strip=trace",
    }
}
