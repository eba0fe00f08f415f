//! Address bar resolution
//!
//! Turns whatever the user typed into a [`Target`]:
//! 1. Scheme-qualified URL with a host (`gopher://host:port/selector`) → use its parts
//! 2. Anything else (`host:port/selector`, `host:port`, `host`) → split by hand
//!
//! Resolution never fails. Missing or unparsable pieces fall back to the
//! configured default host and port.

use url::{Host, Url};

use crate::target::Target;

/// Selector used when the address names no resource
const ROOT_SELECTOR: &str = "/";

#[derive(Debug, Clone)]
pub struct AddressParser {
    default_host: String,
    default_port: u16,
}

impl AddressParser {
    pub fn new(default_host: impl Into<String>, default_port: u16) -> Self {
        Self {
            default_host: default_host.into(),
            default_port,
        }
    }

    pub fn default_host(&self) -> &str {
        &self.default_host
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Replace the fallback host and port, e.g. with the last visited server
    pub fn set_defaults(&mut self, host: impl Into<String>, port: u16) {
        self.default_host = host.into();
        self.default_port = port;
    }

    /// Resolve input against this parser's defaults
    pub fn parse(&self, input: &str) -> Target {
        Self::parse_with(input, &self.default_host, self.default_port)
    }

    /// Resolve input against explicit defaults
    pub fn parse_with(input: &str, default_host: &str, default_port: u16) -> Target {
        let input = input.trim();

        if let Some(target) = Self::try_parse_url(input, default_port) {
            return target;
        }

        Self::split_manually(input, default_host, default_port)
    }

    /// Structured form. Only accepted when the URL actually carries a host.
    fn try_parse_url(input: &str, default_port: u16) -> Option<Target> {
        let url = Url::parse(input).ok()?;

        let host = match url.host()? {
            Host::Domain(domain) => domain.to_string(),
            Host::Ipv4(addr) => addr.to_string(),
            Host::Ipv6(addr) => addr.to_string(),
        };
        if host.is_empty() {
            return None;
        }

        let port = url
            .port()
            .filter(|port| *port != 0)
            .unwrap_or(default_port);
        let selector = percent::decode(url.path());

        Some(Target {
            host,
            port,
            selector,
        })
    }

    /// `host[:port[/selector]]`, split on the first two colon-separated segments
    fn split_manually(input: &str, default_host: &str, default_port: u16) -> Target {
        let mut segments = input.split(':');

        let host = match segments.next() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => default_host.to_string(),
        };

        let (port, selector) = match segments.next() {
            Some(rest) => match rest.split_once('/') {
                Some((port, path)) => (
                    Self::parse_port(port, default_port),
                    format!("/{}", path),
                ),
                None => (
                    Self::parse_port(rest, default_port),
                    ROOT_SELECTOR.to_string(),
                ),
            },
            None => (default_port, ROOT_SELECTOR.to_string()),
        };

        Target {
            host,
            port,
            selector,
        }
    }

    fn parse_port(text: &str, default_port: u16) -> u16 {
        match text.parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                if !text.is_empty() {
                    tracing::debug!(port = %text, default_port, "Unusable port, using default");
                }
                default_port
            }
        }
    }
}

// URL paths come back percent-encoded; selectors go on the wire as typed
mod percent {
    pub fn decode(input: &str) -> String {
        let bytes = input.as_bytes();
        let mut result = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' && i + 2 < bytes.len() {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    result.push((hi * 16 + lo) as u8);
                    i += 3;
                    continue;
                }
            }
            result.push(bytes[i]);
            i += 1;
        }
        String::from_utf8_lossy(&result).into_owned()
    }
}
