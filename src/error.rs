use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Competition page returned HTTP {status} (URL: {url})")]
    PageStatus { status: u16, url: String },

    #[error("Failed to parse gateway response: {0}")]
    GatewayParse(#[from] serde_json::Error),

    #[error("Gateway returned HTTP {status}: {message} (URL: {url})")]
    GatewayStatus {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Message delivery failed: {0}")]
    Delivery(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a delivery error with context
    pub fn delivery_error(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }

    /// Create an error for a non-success HTTP status from the competition page
    pub fn page_status(status: u16, url: impl Into<String>) -> Self {
        Self::PageStatus {
            status,
            url: url.into(),
        }
    }

    /// Create an error for a non-success HTTP status from the gateway
    pub fn gateway_status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::GatewayStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }
}

/// Failure modes of fixture date-label parsing.
///
/// These are recoverable per record: the selector skips the record and moves
/// on. They never abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date label is empty")]
    EmptyLabel,

    #[error("expected at least weekday, day and month tokens, got {found}")]
    TooFewTokens { found: usize },

    #[error("day token '{0}' is not a number")]
    DayNotNumeric(String),

    #[error("day {0} is outside 1..=31")]
    DayOutOfRange(u32),

    #[error("no calendar date {year}-{month:02}-{day:02}")]
    ImpossibleDate { year: i32, month: u32, day: u32 },
}
