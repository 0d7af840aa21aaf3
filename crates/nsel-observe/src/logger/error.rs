use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format: {0} (expected: text|json|journald)")]
    InvalidFormat(String),

    #[error("invalid log filter: {0}")]
    InvalidLevel(String),

    #[error("unknown timezone: {0} (expected: utc|local)")]
    InvalidTimeZone(String),

    #[error("journald output is only available on Linux")]
    JournaldNotSupported,

    #[error("cannot connect to journald: {0}")]
    JournaldInitFailed(String),

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
