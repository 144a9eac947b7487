// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Application-wide error type.
///
/// Variants carry their source rendered to a `String` so the whole enum stays
/// `Clone`: errors travel inside UI messages, and task results must be
/// cloneable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Network request failed (connection, timeout, non-2xx status).
    Http(String),

    /// A response body could not be decoded into the expected shape.
    Decode(String),

    /// Configuration file could not be read or written.
    Config(String),

    /// Local file system error.
    Io(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Http(_) => "error-http",
            Error::Decode(_) => "error-decode",
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
