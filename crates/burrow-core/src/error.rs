//! Core error types

use burrow_protocol::Entry;
use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Response superseded by a newer request")]
    Superseded,

    #[error("Entry {0} is not a directory")]
    NotNavigable(usize),

    #[error("No entry numbered {0}")]
    NoSuchEntry(usize),

    #[error("Nothing displayed yet")]
    NothingDisplayed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Render as the single row shown in place of a listing
    pub fn to_entry(&self) -> Entry {
        Entry::info(format!("Error {}", self))
    }
}

impl From<FetchError> for CoreError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Timeout => CoreError::Timeout,
            FetchError::Connection { .. } => CoreError::Connection(error.to_string()),
        }
    }
}
