//! Protocol error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Reserved. Address parsing always falls back to defaults instead.
    #[error("Could not parse address: {0}")]
    AddressParseFailure(String),

    /// Recovered inside the listing parser; only ever logged.
    #[error("Malformed response line {line}: {reason}")]
    MalformedResponseLine { line: usize, reason: String },
}
