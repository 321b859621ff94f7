//! Error types for the description crate.

use protoconv_tree::errors::TreeError;
use thiserror::Error;

use crate::descid::DescId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum DescriptionError {
    /// A parameter's parent group chain leads back to the parameter.
    #[error("parameter {descid} is its own ancestor through its parent group")]
    CyclicParent { descid: DescId },

    #[error(transparent)]
    Tree(#[from] TreeError),
}
