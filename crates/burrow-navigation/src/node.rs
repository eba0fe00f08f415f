//! History node

use burrow_protocol::{Entry, EntryKind, Target};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A visited (or about to be visited) target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryNode {
    /// Unique identifier
    pub id: String,
    pub target: Target,
    /// Listing fetched for this target, absent for placeholder nodes
    pub entries: Option<Vec<Entry>>,
    /// When the node was created
    pub visited_at: DateTime<Utc>,
}

impl HistoryNode {
    pub fn new(target: Target, entries: Vec<Entry>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            target,
            entries: Some(entries),
            visited_at: Utc::now(),
        }
    }

    /// A node that only knows where it points
    pub fn placeholder(target: Target) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            target,
            entries: None,
            visited_at: Utc::now(),
        }
    }

    /// Same node, freshly fetched
    pub fn refreshed(self, entries: Vec<Entry>) -> Self {
        Self {
            entries: Some(entries),
            visited_at: Utc::now(),
            ..self
        }
    }

    /// Entries that lead somewhere, skipping informational rows
    pub fn links(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .flatten()
            .filter(|entry| entry.kind != EntryKind::Info)
    }
}

impl PartialEq for HistoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_compare_by_target() {
        let a = HistoryNode::placeholder(Target::new("example.org", 70, "/"));
        let b = HistoryNode::new(Target::new("example.org", 70, "/"), Vec::new());
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_refreshed_keeps_identity() {
        let node = HistoryNode::placeholder(Target::new("example.org", 70, "/"));
        let id = node.id.clone();
        let node = node.refreshed(vec![Entry::info("hi")]);
        assert_eq!(node.id, id);
        assert_eq!(node.entries.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_links_skip_info() {
        let mut dir = Entry::info("Phlog");
        dir.kind = EntryKind::Directory;
        dir.target = Target::new("example.org", 70, "/phlog");

        let node = HistoryNode::new(
            Target::new("example.org", 70, "/"),
            vec![Entry::info("Welcome"), dir.clone()],
        );
        let links: Vec<&Entry> = node.links().collect();
        assert_eq!(links, vec![&dir]);

        let placeholder = HistoryNode::placeholder(Target::new("example.org", 70, "/"));
        assert_eq!(placeholder.links().count(), 0);
    }
}
