//! Burrow Navigation
//!
//! Back/forward history as two stacks of visited nodes.
//! - Navigating somewhere new clears the forward stack
//! - Going back or forward only moves nodes between the stacks

mod history;
mod node;

pub use history::NavigationHistory;
pub use node::HistoryNode;
