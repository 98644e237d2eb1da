//! Errors raised while loading configuration
//!
//! The simulation itself never fails; only reading tuning/settings files can.

use std::{fmt, io, result};

#[derive(Debug)]
pub enum Error {
    /// Config file could not be read
    Io(io::Error),
    /// Config file is not valid JSON for the expected shape
    Parse(serde_json::Error),
    /// Config parsed but holds values the game cannot run with
    Invalid(String),
}

pub type Result<T> = result::Result<T, Error>;

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Invalid(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "failed to read config: {}", err),
            Error::Parse(err) => write!(f, "failed to parse config: {}", err),
            Error::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e)
    }
}
