use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

/// Construction-time failures. The widget is never created when one of
/// these is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No input state was bound before `build()`.
    MissingInput,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "an input state is required to build a widget"),
        }
    }
}

impl StdError for ConfigError {}

/// Remote lookup failures beyond plain transport errors.
#[derive(Debug, Clone)]
pub enum LookupError {
    /// The endpoint answered with a non-success HTTP status.
    Status { status: u16, url: String },
    /// The response body parsed as JSON but is not an array.
    NotAnArray,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { status, url } => {
                write!(f, "status {status}: failed to load {url}")
            }
            Self::NotAnArray => write!(f, "response body is not a JSON array"),
        }
    }
}

impl StdError for LookupError {}

#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Io(io::Error),
    Json(serde_json::Error),
    Http(reqwest::Error),
    Lookup(LookupError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Lookup(e) => write!(f, "Lookup error: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Http(e) => Some(e),
            Self::Lookup(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<LookupError> for Error {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
