use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing::{level_filters::LevelFilter, warn, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, registry::LookupSpan, EnvFilter, Layer};

use crate::config::{Logging, LoggingStyle};

#[derive(Debug, Error)]
#[error("Failed to initialize tracing")]
pub struct TracingInitError;

/// Installs the global subscriber. Logs always go to stderr so
/// they never mix with the command output on stdout.
pub fn init(config: &Logging) -> Result<(), TracingInitError> {
    let registry = tracing_subscriber::registry()
        .with(console_layer(config.style))
        .with(make_env_filter(&config.targets));

    tracing::subscriber::set_global_default(registry)
        .change_context(TracingInitError)
        .attach_printable("already initialized tracing")?;

    let rust_log = std::env::var("RUST_LOG").ok();
    if let Some(message) = targets_conflict(&config.targets, rust_log.as_deref()) {
        warn!("{message}");
    }

    Ok(())
}

// `logging.targets` may come from the config file or from
// `FORMWISE_LOGGING_TARGETS`, so the warning names the key.
fn targets_conflict(targets: &str, rust_log: Option<&str>) -> Option<&'static str> {
    (rust_log.is_some() && !targets.is_empty())
        .then_some("Both `RUST_LOG` and `logging.targets` are set, using `logging.targets`")
}

fn console_layer<S>(style: LoggingStyle) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    match style {
        LoggingStyle::Compact => layer.compact().boxed(),
        LoggingStyle::Full => layer.boxed(),
        LoggingStyle::Pretty => layer.pretty().boxed(),
        LoggingStyle::Json => layer.json().boxed(),
    }
}

fn make_env_filter(targets: &str) -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let targets = if targets.is_empty() {
        std::env::var("RUST_LOG").unwrap_or_default()
    } else {
        targets.to_string()
    };

    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(targets)
}
