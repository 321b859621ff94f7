//! Directory trees built from flat file lists.
//!
//! Every intermediate directory of every listed path becomes its own node, so
//! `res/description/foo.h` and `res/icons/foo.tif` share the `res` node.

use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::arena::{NodeId, Tree};

/// One path component of a [`FileTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry<D> {
    /// Path relative to the tree's parent directory.
    pub path: PathBuf,
    /// True for nodes created for an intermediate directory.
    pub is_dir: bool,
    /// Payload of the listed file that first introduced this node.
    pub data: D,
}

impl<D> FileEntry<D> {
    /// Last component of the entry's path.
    #[must_use]
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct FileTree<D> {
    tree: Tree<FileEntry<D>>,
}

impl<D> FileTree<D> {
    #[must_use]
    pub fn tree(&self) -> &Tree<FileEntry<D>> {
        &self.tree
    }

    /// Top level entries, in the order they were first listed.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        self.tree.roots().collect()
    }

    /// All entries in pre-order, each root followed by its subtree.
    #[must_use]
    pub fn flatten(&self) -> Vec<NodeId> {
        self.tree
            .roots()
            .flat_map(|root| self.tree.pre_order(root))
            .collect()
    }

    /// Pre-order entries paired with their nesting depth.
    #[must_use]
    pub fn flatten_with_depth(&self) -> Vec<(usize, &FileEntry<D>)> {
        self.flatten()
            .into_iter()
            .map(|id| (self.tree.depth(id), &self.tree[id]))
            .collect()
    }
}

/// Builds a [`FileTree`] from `(path, payload)` pairs.
///
/// When `parent` is given, paths below it are made relative to it first.
pub fn file_tree<D, I>(items: I, parent: Option<&Path>) -> FileTree<D>
where
    D: Clone,
    I: IntoIterator<Item = (PathBuf, D)>,
{
    let mut tree = Tree::new();
    let mut entries: FxHashMap<PathBuf, NodeId> = FxHashMap::default();

    for (path, data) in items {
        let mut filename = normalize(&path);
        if let Some(parent) = parent
            && let Ok(relative) = filename.strip_prefix(normalize(parent))
        {
            filename = relative.to_path_buf();
        }

        let mut parent_entry: Option<NodeId> = None;
        let chain: Vec<&Path> = filename
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        for current in chain.into_iter().rev() {
            let entry = match entries.get(current) {
                Some(id) => *id,
                None => {
                    let id = tree.add_node(FileEntry {
                        path: current.to_path_buf(),
                        is_dir: current != filename.as_path(),
                        data: data.clone(),
                    });
                    if let Some(parent_id) = parent_entry {
                        let attached = tree.append_child(parent_id, id);
                        debug_assert!(attached.is_ok());
                    }
                    entries.insert(current.to_path_buf(), id);
                    id
                }
            };
            parent_entry = Some(entry);
        }
    }

    FileTree { tree }
}

/// Lexical normalization: drops `.` components and folds `..` where possible.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push("..");
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
