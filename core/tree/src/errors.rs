//! Error types for the tree crate.

use thiserror::Error;

use crate::arena::NodeId;

/// Errors raised by structural edits of a [`Tree`](crate::arena::Tree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum TreeError {
    /// The handle does not belong to this tree.
    #[error("node {0} is not part of this tree")]
    UnknownNode(NodeId),

    /// The edit would make a node its own ancestor.
    #[error("attaching {child} below {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}
