//! Request target

use serde::{Deserialize, Serialize};

/// A resource on a Gopher server: where to connect and what to ask for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub host: String,
    pub port: u16,
    /// Opaque selector string sent to the server, not a URL path
    pub selector: String,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16, selector: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            selector: selector.into(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gopher://{}:{}", self.host, self.port)?;
        if !self.selector.is_empty() && !self.selector.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let target = Target::new("gopher.navan.dev", 70, "/docs");
        assert_eq!(target.to_string(), "gopher://gopher.navan.dev:70/docs");

        let target = Target::new("gopher.navan.dev", 70, "");
        assert_eq!(target.to_string(), "gopher://gopher.navan.dev:70");

        // Selectors without a leading slash still produce a usable address
        let target = Target::new("example.org", 7070, "1/phlog");
        assert_eq!(target.to_string(), "gopher://example.org:7070/1/phlog");
    }
}
