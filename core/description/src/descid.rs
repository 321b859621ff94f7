//! Structural parameter identifiers and the index keyed by them.

use std::fmt::{self, Display, Formatter};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::dtype::{DTYPE_SUBCONTAINER, DataType};

/// Id of the host's user data container.
pub const ID_USERDATA: i32 = 700;

/// One level of a [`DescId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32, i32)", into = "(i32, i32, i32)")]
pub struct DescLevel {
    pub id: i32,
    pub dtype: i32,
    pub creator: i32,
}

impl DescLevel {
    #[must_use]
    pub fn new(id: i32, dtype: i32, creator: i32) -> Self {
        Self { id, dtype, creator }
    }

    #[must_use]
    pub fn data_type(&self) -> DataType {
        DataType::from(self.dtype)
    }
}

impl From<(i32, i32, i32)> for DescLevel {
    fn from((id, dtype, creator): (i32, i32, i32)) -> Self {
        Self { id, dtype, creator }
    }
}

impl From<DescLevel> for (i32, i32, i32) {
    fn from(level: DescLevel) -> Self {
        (level.id, level.dtype, level.creator)
    }
}

/// Hierarchical parameter identifier.
///
/// Two identifiers are equal, and hash equally, when their level sequences are
/// equal; how they were constructed does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescId(Vec<DescLevel>);

impl DescId {
    #[must_use]
    pub fn new(levels: Vec<DescLevel>) -> Self {
        Self(levels)
    }

    /// Identifier of the implicit top level user data group.
    #[must_use]
    pub fn main_group() -> Self {
        Self(vec![DescLevel::new(ID_USERDATA, DTYPE_SUBCONTAINER, 0)])
    }

    /// A user data parameter `[ID_USERDATA, index]` of the given type.
    #[must_use]
    pub fn user_data(index: i32, dtype: DataType) -> Self {
        Self(vec![
            DescLevel::new(ID_USERDATA, DTYPE_SUBCONTAINER, 0),
            DescLevel::new(index, dtype.raw(), 0),
        ])
    }

    #[must_use]
    pub fn levels(&self) -> &[DescLevel] {
        &self.0
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DescLevel> {
        self.0.last()
    }

    /// Data type of the innermost level. The empty identifier has no type.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.last()
            .map_or(DataType::Other(0), DescLevel::data_type)
    }

    /// The identifier with its last level removed.
    #[must_use]
    pub fn parent(&self) -> Option<DescId> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }
}

impl Display for DescId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, level) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}:{}", level.id, level.dtype, level.creator)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<(i32, i32, i32)>> for DescId {
    fn from(levels: Vec<(i32, i32, i32)>) -> Self {
        Self(levels.into_iter().map(DescLevel::from).collect())
    }
}

/// Map keyed by the structural value of a [`DescId`].
///
/// Inserting an identifier that is already present replaces the previous
/// value.
#[derive(Debug, Clone)]
pub struct DescIndex<V> {
    entries: FxHashMap<DescId, V>,
}

impl<V> Default for DescIndex<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V> DescIndex<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, descid: DescId, value: V) -> Option<V> {
        self.entries.insert(descid, value)
    }

    #[must_use]
    pub fn get(&self, descid: &DescId) -> Option<&V> {
        self.entries.get(descid)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independently_built_ids_are_equal() {
        let a = DescId::from(vec![(700, 5, 0), (3, 15, 0)]);
        let b = DescId::user_data(3, DataType::Long);
        assert_eq!(a, b);

        let mut index = DescIndex::new();
        index.insert(a, "strength");
        assert_eq!(index.get(&b), Some(&"strength"));
    }

    #[test]
    fn creator_is_part_of_identity() {
        let a = DescId::from(vec![(700, 5, 0), (3, 15, 0)]);
        let b = DescId::from(vec![(700, 5, 0), (3, 15, 1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn later_insert_wins() {
        let mut index = DescIndex::new();
        index.insert(DescId::main_group(), 1);
        let previous = index.insert(DescId::main_group(), 2);
        assert_eq!(previous, Some(1));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&DescId::main_group()), Some(&2));
    }

    #[test]
    fn parent_drops_last_level() {
        let id = DescId::user_data(1, DataType::Bool);
        assert_eq!(id.parent(), Some(DescId::main_group()));
        assert_eq!(DescId::default().parent(), None);
    }

    #[test]
    fn levels_deserialize_from_triples() {
        let id: DescId = serde_json::from_str("[[700, 5, 0], [2, 19, 0]]").unwrap();
        assert_eq!(id.data_type(), DataType::Real);
        assert_eq!(id.to_string(), "[700:5:0, 2:19:0]");
    }
}
