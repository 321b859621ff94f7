//! Reconstruction of the user data hierarchy from the flat container.

use protoconv_tree::arena::{NodeId, PreOrder, Tree};
use protoconv_tree::errors::TreeError;
use tracing::debug;

use crate::attributes::AttributeBag;
use crate::descid::{DescId, DescIndex};
use crate::errors::DescriptionError;
use crate::node::{Parameter, UserDataNode};

/// User data parameters arranged by their parent groups.
///
/// The root is synthetic. Its first child is the main user data group, which
/// the host never lists in the container; parameters whose parent group is
/// unknown are further children of the root.
#[derive(Debug, Clone)]
pub struct UserDataTree {
    tree: Tree<UserDataNode>,
    index: DescIndex<NodeId>,
    root: NodeId,
    main_group: NodeId,
    order: Vec<NodeId>,
}

impl UserDataTree {
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn main_group(&self) -> NodeId {
        self.main_group
    }

    #[must_use]
    pub fn is_main_group(&self, id: NodeId) -> bool {
        id == self.main_group
    }

    #[must_use]
    pub fn tree(&self) -> &Tree<UserDataNode> {
        &self.tree
    }

    #[must_use]
    pub fn param(&self, id: NodeId) -> Option<&Parameter> {
        self.tree.get(id).and_then(UserDataNode::param)
    }

    pub fn param_mut(&mut self, id: NodeId) -> Option<&mut Parameter> {
        self.tree.get_mut(id).and_then(UserDataNode::param_mut)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    /// Node registered for `descid`. For duplicated identifiers this is the
    /// one that came last in the container.
    #[must_use]
    pub fn find(&self, descid: &DescId) -> Option<NodeId> {
        self.index.get(descid).copied()
    }

    /// Pre-order walk of the whole tree, root first.
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_, UserDataNode> {
        self.tree.pre_order(self.root)
    }

    /// Nodes created from the container, in container order.
    pub fn params(&self) -> impl Iterator<Item = (NodeId, &Parameter)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.param(*id).map(|param| (*id, param)))
    }

    /// Number of nodes created from the container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builds the user data tree from `(descid, attributes)` pairs.
///
/// Every pair becomes exactly one node. A node is attached below the node
/// registered for its `parent_group`, or below the root when no such node
/// exists. Siblings keep container order.
///
/// # Errors
///
/// Returns [`DescriptionError::CyclicParent`] when following parent groups
/// leads from a parameter back to itself.
pub fn build<I>(pairs: I) -> Result<UserDataTree, DescriptionError>
where
    I: IntoIterator<Item = (DescId, AttributeBag)>,
{
    let mut tree = Tree::new();
    let mut index = DescIndex::new();
    let root = tree.add_node(UserDataNode::Root);

    let mut order = vec![];
    for (descid, attributes) in pairs {
        let id = tree.add_node(UserDataNode::Param(Parameter::new(
            descid.clone(),
            attributes,
        )));
        if index.insert(descid.clone(), id).is_some() {
            debug!(%descid, "duplicate parameter identifier, keeping the later one");
        }
        order.push(id);
    }

    let main_group = tree.add_node(UserDataNode::Param(Parameter::new(
        DescId::main_group(),
        AttributeBag::default(),
    )));
    index.insert(DescId::main_group(), main_group);
    tree.append_child(root, main_group)?;

    for id in &order {
        let Some(param) = tree.get(*id).and_then(UserDataNode::param) else {
            continue;
        };
        let parent = index
            .get(&param.attributes.parent_group)
            .copied()
            .unwrap_or(root);
        let descid = param.descid.clone();
        tree.append_child(parent, *id).map_err(|err| match err {
            TreeError::Cycle { .. } => DescriptionError::CyclicParent { descid },
            other @ TreeError::UnknownNode(_) => DescriptionError::Tree(other),
        })?;
    }

    debug!(parameters = order.len(), "built user data tree");
    Ok(UserDataTree {
        tree,
        index,
        root,
        main_group,
        order,
    })
}
