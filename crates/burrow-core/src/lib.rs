//! Burrow Core
//!
//! Coordination layer for the browser. A [`BrowseSession`] owns the history
//! and turns [`Command`]s into [`Page`]s; the network is reached only through
//! a [`Fetcher`].

mod command;
mod config;
mod error;
mod fetch;
mod session;

pub use command::Command;
pub use config::{Config, HOME_ENV};
pub use error::CoreError;
pub use fetch::{FetchError, Fetcher, TcpFetcher};
pub use session::{BrowseSession, Page};

// Re-export the protocol and history types callers deal with
pub use burrow_navigation::{HistoryNode, NavigationHistory};
pub use burrow_protocol::{
    parse_listing, request_payload, AddressParser, Entry, EntryKind, ProtocolError, Target,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Logs go to stderr so they stay out of rendered pages.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
