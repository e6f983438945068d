use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// **Environment variable**: `FORMWISE_LOGGING_STYLE`
    ///
    /// One of `compact`, `full`, `pretty` or `json`, matched without
    /// regard to case. Defaults to `full`.
    pub style: LoggingStyle,

    /// **Environment variable**: `FORMWISE_LOGGING_TARGETS`
    ///
    /// `EnvFilter` directives. Left blank, `RUST_LOG` is used instead.
    pub targets: String,
}

/// Output format of the stderr log layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum LoggingStyle {
    Compact,
    #[default]
    Full,
    Pretty,
    Json,
}

impl LoggingStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl Display for LoggingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown {0:?} logging style")]
pub struct InvalidLoggingStyle(String);

impl FromStr for LoggingStyle {
    type Err = InvalidLoggingStyle;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        [Self::Compact, Self::Full, Self::Pretty, Self::Json]
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidLoggingStyle(s.to_string()))
    }
}

impl TryFrom<String> for LoggingStyle {
    type Error = InvalidLoggingStyle;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}
