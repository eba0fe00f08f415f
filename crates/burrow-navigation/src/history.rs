//! Navigation history state machine
//!
//! ```text
//! record_navigation(n)   back += n, forward cleared
//! go_back()              back.top → forward, then back.pop() is returned
//! go_forward()           forward.pop() is returned
//! record_return(n)       back += n, forward kept
//! ```
//!
//! Nodes returned by `go_back`/`go_forward` are on neither stack. The caller
//! fetches them again and hands them back through `record_return`.

use crate::node::HistoryNode;

#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    /// Visited nodes, most recent last. The top is the page on screen.
    back_stack: Vec<HistoryNode>,
    /// Nodes left by going back, most recent last
    forward_stack: Vec<HistoryNode>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a direct navigation to a new target
    pub fn record_navigation(&mut self, node: HistoryNode) {
        tracing::debug!(
            target_addr = %node.target,
            dropped_forward = self.forward_stack.len(),
            "Recording navigation"
        );

        self.back_stack.push(node);
        self.forward_stack.clear();
    }

    /// Re-enter a node obtained from `go_back` or `go_forward`
    pub fn record_return(&mut self, node: HistoryNode) {
        tracing::debug!(target_addr = %node.target, "Recording return");
        self.back_stack.push(node);
    }

    /// Leave the current node and hand out the one before it.
    ///
    /// The current node moves to the forward stack even when there is nothing
    /// to go back to.
    pub fn go_back(&mut self) -> Option<HistoryNode> {
        let current = self.back_stack.pop()?;
        self.forward_stack.push(current);

        let previous = self.back_stack.pop();
        tracing::debug!(
            found = previous.is_some(),
            back = self.back_stack.len(),
            forward = self.forward_stack.len(),
            "History back"
        );
        previous
    }

    pub fn go_forward(&mut self) -> Option<HistoryNode> {
        let next = self.forward_stack.pop();
        tracing::debug!(
            found = next.is_some(),
            back = self.back_stack.len(),
            forward = self.forward_stack.len(),
            "History forward"
        );
        next
    }

    /// Node on top of the back stack
    pub fn current(&self) -> Option<&HistoryNode> {
        self.back_stack.last()
    }

    pub fn back_stack(&self) -> &[HistoryNode] {
        &self.back_stack
    }

    pub fn forward_stack(&self) -> &[HistoryNode] {
        &self.forward_stack
    }

    /// `go_back` needs the current node plus one to return
    pub fn can_go_back(&self) -> bool {
        self.back_stack.len() > 1
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.back_stack.clear();
        self.forward_stack.clear();
    }
}
