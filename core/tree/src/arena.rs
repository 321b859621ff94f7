use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::errors::TreeError;

/// Handle of a node stored in a [`Tree`].
///
/// Handles are plain indices and do not keep the node alive. They are only
/// meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeRoute<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena tree generic over its payload.
///
/// Parent nodes own the ordered list of their children; the upward edge is a
/// non-owning [`NodeId`]. Nodes that have no parent are roots, so a single
/// arena may hold a forest.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<NodeRoute<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> Tree<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a detached node to the arena.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("tree arena is full"));
        self.nodes.push(NodeRoute {
            data,
            parent: None,
            children: vec![],
        });
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.index()).map(|node| &node.data)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.index()).map(|node| &mut node.data)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|node| node.parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map_or(&[], |node| node.children.as_slice())
    }

    /// Appends `child` to the end of `parent`'s children, detaching it from its
    /// previous parent first.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if either handle is not part of this
    /// tree and [`TreeError::Cycle`] if `parent` is `child` itself or one of its
    /// descendants.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check(parent)?;
        self.check(child)?;
        if parent == child || self.is_ancestor(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }
        self.detach(child)?;
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// Removes `id` from its parent's children. The node and its subtree stay
    /// in the arena as a separate root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if `id` is not part of this tree.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.check(id)?;
        if let Some(parent) = self.nodes[id.index()].parent.take() {
            self.nodes[parent.index()].children.retain(|c| *c != id);
        }
        Ok(())
    }

    /// Returns true if `ancestor` appears on the parent chain of `node`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|id| id == ancestor)
    }

    /// Iterates the parent chain of `id`, nearest parent first.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Number of ancestors of `id`. Roots have depth zero.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Nodes without a parent, in insertion order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| NodeId(index as u32))
    }

    /// Depth-first pre-order walk of the subtree at `id`, `id` included.
    #[must_use]
    pub fn pre_order(&self, id: NodeId) -> PreOrder<'_, T> {
        let stack = if self.contains(id) { vec![id] } else { vec![] };
        PreOrder { tree: self, stack }
    }

    /// Depth-first pre-order walk of the subtree at `id`, `id` excluded.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> PreOrder<'_, T> {
        let stack = self.children(id).iter().rev().copied().collect();
        PreOrder { tree: self, stack }
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        &self.nodes[id.index()].data
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.index()].data
    }
}

/// Iterator over the parent chain of a node.
#[derive(Debug)]
pub struct Ancestors<'a, T> {
    tree: &'a Tree<T>,
    current: Option<NodeId>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator created by [`Tree::pre_order`] and [`Tree::descendants`].
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<T> Iterator for PreOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
