//! Burrow Protocol
//!
//! The Gopher side of the browser:
//! - Address resolution: free-form address bar text → [`Target`]
//! - Listing parsing: raw response bytes → typed [`Entry`] rows
//!
//! Neither step can fail. Bad input degrades to defaults or partial rows.

mod address;
mod entry;
mod error;
mod listing;
mod target;

pub use address::AddressParser;
pub use entry::{Entry, EntryKind};
pub use error::ProtocolError;
pub use listing::{parse_listing, request_payload, LINE_TERMINATOR, LISTING_TERMINATOR};
pub use target::Target;

pub type Result<T> = std::result::Result<T, ProtocolError>;
