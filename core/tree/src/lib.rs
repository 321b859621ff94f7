#![warn(clippy::pedantic)]
//! Ownership trees for protoconv.
//!
//! [`arena::Tree`] stores nodes in a flat arena. Children are owned by their
//! parent's ordered child list; the parent link is a plain [`arena::NodeId`], so
//! there are no reference cycles and upward walks stay cheap.
//!
//! [`file_tree::file_tree`] reuses the same arena to turn a flat file list into
//! a directory hierarchy for listings.

pub mod arena;
pub mod errors;
pub mod file_tree;
