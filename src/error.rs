use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum HelloBenchError {
    // Configuration errors
    ConfigError(String),

    // Listener errors
    BindError(String),
    ServeError(String),

    // System errors
    SystemError(String),
}

impl fmt::Display for HelloBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::BindError(msg) => write!(f, "Bind error: {}", msg),
            Self::ServeError(msg) => write!(f, "Serve error: {}", msg),
            Self::SystemError(msg) => write!(f, "System error: {}", msg),
        }
    }
}

impl Error for HelloBenchError {}

// Generic result type for the benchmark server
pub type Result<T> = std::result::Result<T, HelloBenchError>;
