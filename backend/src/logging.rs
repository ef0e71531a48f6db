// Logging — powered by tracing-subscriber.
//
// `log::*` records emitted by the pages crate are bridged into the same
// subscriber through tracing-subscriber's `tracing-log` integration.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text format: timestamp LEVEL target - message
    Compact,
    /// JSON Lines format for structured logging
    Json,
}

impl LogFormat {
    /// Unrecognised values fall back to `Compact` instead of failing.
    pub fn parse_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

const NOISY: &[(&str, &str)] = &[("hyper", "warn"), ("tower_http", "warn"), ("mio", "warn")];

/// `RUST_LOG` wins when set; otherwise the configured level plus noisy-crate caps.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let mut directives = vec![level.to_string()];
    directives.extend(NOISY.iter().map(|(target, lvl)| format!("{target}={lvl}")));
    Ok(EnvFilter::try_new(directives.join(","))?)
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = build_env_filter(level)?;
    let fmt_layer = match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer().compact().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
    Ok(())
}
