//! Symbol allocation for user data parameters.
//!
//! Every named parameter gets a unique uppercase constant and an integer id.
//! Ids are handed out from 1000 upwards in pre-order, so two runs over the
//! same container produce the same table.

use protoconv_tree::arena::NodeId;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::builder::UserDataTree;
use crate::descid::{DescId, DescIndex};
use crate::dtype::DataType;
use crate::naming::screaming_snake;
use crate::node::{Annotation, Parameter};

/// First id handed out by a fresh [`SymbolMap`].
pub const FIRST_SYMBOL_ID: i64 = 1000;

/// A description setting the resource grammar cannot express. The plugin
/// stub applies these when the description is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedDescription {
    pub node: NodeId,
    pub descid: DescId,
    /// Host constant name of the description key, without module prefix.
    pub key: &'static str,
    pub value: i32,
}

#[derive(Debug, Clone)]
pub struct SymbolMap {
    prefix: String,
    next_id: i64,
    symbols: Vec<(String, i64)>,
    used: FxHashSet<String>,
    descid_to_symbol: DescIndex<String>,
    descid_to_node: DescIndex<NodeId>,
    hardcoded: Vec<HardcodedDescription>,
}

impl SymbolMap {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: FIRST_SYMBOL_ID,
            symbols: vec![],
            used: FxHashSet::default(),
            descid_to_symbol: DescIndex::new(),
            descid_to_node: DescIndex::new(),
            hardcoded: vec![],
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Allocated symbols with their ids, in allocation order.
    #[must_use]
    pub fn symbols(&self) -> &[(String, i64)] {
        &self.symbols
    }

    #[must_use]
    pub fn symbol_for(&self, descid: &DescId) -> Option<&str> {
        self.descid_to_symbol.get(descid).map(String::as_str)
    }

    #[must_use]
    pub fn node_for(&self, descid: &DescId) -> Option<NodeId> {
        self.descid_to_node.get(descid).copied()
    }

    #[must_use]
    pub fn hardcoded_descriptions(&self) -> &[HardcodedDescription] {
        &self.hardcoded
    }

    /// Turns a display name into a symbol.
    ///
    /// With `unique`, the smallest numeric suffix that avoids every symbol
    /// allocated so far is appended; the first occurrence gets none.
    #[must_use]
    pub fn translate_name(&self, name: &str, add_prefix: bool, unique: bool) -> String {
        let mut result = screaming_snake(name);
        if add_prefix {
            result.insert_str(0, &self.prefix);
        }
        if unique {
            self.unused(result)
        } else {
            result
        }
    }

    /// `name`, or `name` with the smallest numeric suffix not taken yet.
    fn unused(&self, name: String) -> String {
        if !self.used.contains(&name) {
            return name;
        }
        let mut index = 1u64;
        loop {
            let candidate = format!("{name}{index}");
            if !self.used.contains(&candidate) {
                return candidate;
            }
            index += 1;
        }
    }

    /// Assigns a symbol and id to the parameter at `id`.
    ///
    /// Returns the existing pair for parameters that are already allocated and
    /// `None` for the root, the main group, unnamed separators and parameters
    /// of unhandled types.
    pub fn allocate(&mut self, tree: &mut UserDataTree, id: NodeId) -> Option<(String, i64)> {
        if tree.is_main_group(id) {
            return None;
        }
        let parent_name = tree
            .parent(id)
            .filter(|parent| !tree.is_main_group(*parent))
            .and_then(|parent| tree.param(parent))
            .map(|parent| parent.attributes.display_name().to_string())
            .filter(|name| !name.is_empty());
        let param = tree.param_mut(id)?;

        match &param.annotation {
            Annotation::Allocated {
                symbol, id: value, ..
            } => return Some((symbol.clone(), *value)),
            Annotation::Anonymous | Annotation::Unsupported => return None,
            Annotation::Pending => {}
        }

        let dtype = param.data_type();
        if !dtype.is_supported() {
            warn!(
                dtype = dtype.raw(),
                name = param.attributes.display_name(),
                "unhandled datatype"
            );
            param.annotation = Annotation::Unsupported;
            return None;
        }
        if dtype == DataType::Separator && param.attributes.display_name().is_empty() {
            param.annotation = Annotation::Anonymous;
            return None;
        }

        let mut name = param.attributes.symbol_name().to_string();
        if dtype == DataType::Group {
            name.push_str("_GROUP");
        } else if let Some(parent_name) = parent_name {
            name = format!("{parent_name} {name}");
        }

        let symbol = self.translate_name(&name, true, true);
        if symbol.is_empty() {
            param.annotation = Annotation::Anonymous;
            return None;
        }
        let value = self.next_id;
        self.next_id += 1;

        debug!(%symbol, id = value, descid = %param.descid, "allocated symbol");
        self.symbols.push((symbol.clone(), value));
        self.used.insert(symbol.clone());
        self.descid_to_symbol
            .insert(param.descid.clone(), symbol.clone());
        self.descid_to_node.insert(param.descid.clone(), id);
        self.record_hardcoded(id, param);
        let choices = if param.is_cycle() {
            self.allocate_choices(&symbol, param)
        } else {
            vec![]
        };
        param.annotation = Annotation::Allocated {
            symbol: symbol.clone(),
            id: value,
            choices,
        };
        Some((symbol, value))
    }

    /// Reserves one symbol per cycle entry, derived from the parameter's own
    /// symbol and the raw label.
    fn allocate_choices(&mut self, symbol: &str, param: &Parameter) -> Vec<String> {
        param
            .attributes
            .cycle
            .iter()
            .map(|entry| {
                let base = format!("{symbol}_{}", self.translate_name(&entry.label, false, false));
                let choice = self.unused(base);
                self.used.insert(choice.clone());
                choice
            })
            .collect()
    }

    /// Allocates every parameter of the tree in pre-order. Subtrees below
    /// parameters of unhandled types are skipped.
    pub fn allocate_tree(&mut self, tree: &mut UserDataTree) {
        let mut stack = vec![tree.root()];
        while let Some(id) = stack.pop() {
            self.allocate(tree, id);
            if tree
                .param(id)
                .is_some_and(|param| param.annotation == Annotation::Unsupported)
            {
                continue;
            }
            stack.extend(tree.children(id).iter().rev().copied());
        }
    }

    /// Symbol of one choice of a cycle parameter, allocating the parameter
    /// first if needed.
    pub fn cycle_symbol(
        &mut self,
        tree: &mut UserDataTree,
        id: NodeId,
        label: &str,
    ) -> Option<String> {
        self.allocate(tree, id)?;
        tree.param(id)?
            .choices()
            .find(|(entry, _)| entry.label == label)
            .map(|(_, symbol)| symbol.to_string())
    }

    fn record_hardcoded(&mut self, node: NodeId, param: &Parameter) {
        if !matches!(param.data_type(), DataType::Long | DataType::Real) {
            return;
        }
        if let Some(gui) = param.attributes.gui().filter(|gui| gui.is_hardcoded()) {
            self.hardcoded.push(HardcodedDescription {
                node,
                descid: param.descid.clone(),
                key: "DESC_CUSTOMGUI",
                value: i32::from(gui),
            });
        }
    }
}

/// Convenience for the common case: a fresh map with every parameter of
/// `tree` allocated.
#[must_use]
pub fn allocate_all(tree: &mut UserDataTree, prefix: &str) -> SymbolMap {
    let mut symbols = SymbolMap::new(prefix);
    symbols.allocate_tree(tree);
    symbols
}
