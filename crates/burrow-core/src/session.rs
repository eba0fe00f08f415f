//! Browse session
//!
//! Owns one navigation history and drives every page load:
//! resolve address → fetch → parse listing → update history → return [`Page`].
//!
//! State sits behind a single mutex that is never held across a fetch. Each
//! fetch takes a sequence number; a response that is no longer the latest
//! request is dropped without touching state.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use burrow_navigation::{HistoryNode, NavigationHistory};
use burrow_protocol::{parse_listing, request_payload, AddressParser, Entry, Target};

use crate::command::Command;
use crate::config::Config;
use crate::error::CoreError;
use crate::fetch::Fetcher;
use crate::Result;

/// What the presentation layer shows: where we are and what is there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub target: Target,
    pub entries: Vec<Entry>,
}

impl Page {
    /// Text for the address bar
    pub fn address(&self) -> String {
        self.target.to_string()
    }
}

struct SessionState {
    /// Defaults follow the last successfully visited server
    parser: AddressParser,
    history: NavigationHistory,
    current: Option<Page>,
}

pub struct BrowseSession<F> {
    fetcher: F,
    timeout: Duration,
    state: Mutex<SessionState>,
    /// Last issued request number
    sequence: AtomicU64,
}

impl<F: Fetcher> BrowseSession<F> {
    pub fn new(config: &Config, fetcher: F) -> Self {
        Self {
            fetcher,
            timeout: config.timeout(),
            state: Mutex::new(SessionState {
                parser: config.address_parser(),
                history: NavigationHistory::new(),
                current: None,
            }),
            sequence: AtomicU64::new(0),
        }
    }

    /// Run one user command
    pub async fn execute(&self, command: Command) -> Result<Page> {
        tracing::debug!(command = command.name(), "Executing command");

        match command {
            Command::Open(input) => self.navigate(&input).await,
            Command::Visit(target) => self.visit(target).await,
            Command::Select(number) => self.select(number).await,
            Command::Back => self.navigate_back().await,
            Command::Forward => self.navigate_forward().await,
            Command::Reload => self.reload().await,
        }
    }

    /// Resolve typed address text and open it
    pub async fn navigate(&self, input: &str) -> Result<Page> {
        let target = self.state.lock().parser.parse(input);
        self.visit(target).await
    }

    /// Open a structured target as a new navigation (forward history is dropped)
    pub async fn visit(&self, target: Target) -> Result<Page> {
        let (seq, result) = self.load(&target).await;

        let mut state = self.state.lock();
        self.ensure_latest(seq)?;
        let entries = result?;

        let node = HistoryNode::new(target.clone(), entries.clone());
        let links = node.links().count();
        state.history.record_navigation(node);
        state.parser.set_defaults(target.host.clone(), target.port);

        let page = Page { target, entries };
        state.current = Some(page.clone());

        tracing::info!(
            seq,
            address = %page.address(),
            entries = page.entries.len(),
            links,
            "Navigated"
        );

        Ok(page)
    }

    /// Follow the n-th entry (counting from 1) of the current page
    pub async fn select(&self, number: usize) -> Result<Page> {
        let target = {
            let state = self.state.lock();
            let page = state.current.as_ref().ok_or(CoreError::NothingDisplayed)?;
            let entry = number
                .checked_sub(1)
                .and_then(|index| page.entries.get(index))
                .ok_or(CoreError::NoSuchEntry(number))?;

            if !entry.is_navigable() {
                return Err(CoreError::NotNavigable(number));
            }
            entry.target.clone()
        };

        self.visit(target).await
    }

    pub async fn navigate_back(&self) -> Result<Page> {
        self.step(NavigationHistory::go_back).await
    }

    pub async fn navigate_forward(&self) -> Result<Page> {
        self.step(NavigationHistory::go_forward).await
    }

    /// Fetch the current page again without touching history
    pub async fn reload(&self) -> Result<Page> {
        let target = self
            .state
            .lock()
            .current
            .as_ref()
            .map(|page| page.target.clone())
            .ok_or(CoreError::NothingDisplayed)?;

        let (seq, result) = self.load(&target).await;

        let mut state = self.state.lock();
        self.ensure_latest(seq)?;
        let page = Page {
            target,
            entries: result?,
        };
        state.current = Some(page.clone());
        Ok(page)
    }

    /// Page currently on screen
    pub fn current_page(&self) -> Option<Page> {
        self.state.lock().current.clone()
    }

    pub fn with_history<T>(&self, f: impl FnOnce(&NavigationHistory) -> T) -> T {
        f(&self.state.lock().history)
    }

    pub fn can_go_back(&self) -> bool {
        self.with_history(NavigationHistory::can_go_back)
    }

    pub fn can_go_forward(&self) -> bool {
        self.with_history(NavigationHistory::can_go_forward)
    }

    /// Shared back/forward path: fetch the node a pop would return, then
    /// apply the pop and re-enter the node.
    ///
    /// History is only touched once the fetch succeeded and is still the
    /// latest request, so failed or stale steps leave it as it was. With
    /// nothing to pop, the pop applies at once and the current page is
    /// returned unchanged.
    async fn step(&self, pop: fn(&mut NavigationHistory) -> Option<HistoryNode>) -> Result<Page> {
        let target = {
            let mut state = self.state.lock();
            let mut preview = state.history.clone();
            match pop(&mut preview) {
                Some(node) => node.target,
                None => {
                    // History moved without a fetch; pending responses are now stale
                    self.sequence.fetch_add(1, Ordering::SeqCst);
                    state.history = preview;
                    return state.current.clone().ok_or(CoreError::NothingDisplayed);
                }
            }
        };

        let (seq, result) = self.load(&target).await;

        let mut state = self.state.lock();
        self.ensure_latest(seq)?;
        let entries = result?;

        let node = pop(&mut state.history).ok_or(CoreError::Superseded)?;
        let page = Page {
            target: node.target.clone(),
            entries: entries.clone(),
        };
        state.history.record_return(node.refreshed(entries));
        state.current = Some(page.clone());

        tracing::info!(seq, address = %page.address(), "Returned to page");

        Ok(page)
    }

    /// Issue one request. Returns its sequence number alongside the outcome.
    async fn load(&self, target: &Target) -> (u64, Result<Vec<Entry>>) {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let payload = request_payload(&target.selector);

        tracing::info!(
            seq,
            host = %target.host,
            port = target.port,
            selector = %target.selector,
            "Fetching"
        );

        let fetch = self.fetcher.fetch(&target.host, target.port, &payload);
        let result = match tokio::time::timeout(self.timeout, fetch).await {
            Ok(Ok(raw)) => Ok(parse_listing(&raw)),
            Ok(Err(e)) => Err(CoreError::from(e)),
            Err(_) => Err(CoreError::Timeout),
        };

        if let Err(e) = &result {
            tracing::warn!(seq, host = %target.host, port = target.port, error = %e, "Fetch failed");
        }

        (seq, result)
    }

    fn ensure_latest(&self, seq: u64) -> Result<()> {
        let latest = self.sequence.load(Ordering::SeqCst);
        if seq != latest {
            tracing::debug!(seq, latest, "Dropping stale response");
            return Err(CoreError::Superseded);
        }
        Ok(())
    }
}
