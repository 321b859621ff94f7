use crate::attributes::{AttributeBag, CycleEntry};
use crate::descid::DescId;
use crate::dtype::DataType;

/// Result of running a parameter through the symbol allocator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Annotation {
    /// Not visited by the allocator yet.
    #[default]
    Pending,
    Allocated {
        symbol: String,
        id: i64,
        /// Symbols of the cycle choices, in cycle order. Empty unless the
        /// parameter is a cycle.
        choices: Vec<String>,
    },
    /// Separator without a name. Rendered into the grammar without a symbol.
    Anonymous,
    /// Data type without a rendering rule. Dropped from every output.
    Unsupported,
}

/// A user data parameter together with its allocation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub descid: DescId,
    pub attributes: AttributeBag,
    pub annotation: Annotation,
}

impl Parameter {
    #[must_use]
    pub fn new(descid: DescId, attributes: AttributeBag) -> Self {
        Self {
            descid,
            attributes,
            annotation: Annotation::Pending,
        }
    }

    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.descid.data_type()
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        self.data_type() == DataType::Group
    }

    /// Integer parameter with a non-empty choice list.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.data_type() == DataType::Long && !self.attributes.cycle.is_empty()
    }

    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match &self.annotation {
            Annotation::Allocated { symbol, .. } => Some(symbol),
            _ => None,
        }
    }

    #[must_use]
    pub fn symbol_id(&self) -> Option<i64> {
        match &self.annotation {
            Annotation::Allocated { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Cycle entries paired with their allocated symbols.
    pub fn choices(&self) -> impl Iterator<Item = (&CycleEntry, &str)> {
        let symbols: &[String] = match &self.annotation {
            Annotation::Allocated { choices, .. } => choices,
            _ => &[],
        };
        self.attributes
            .cycle
            .iter()
            .zip(symbols.iter().map(String::as_str))
    }

    /// Symbol of the first cycle entry with the given value.
    #[must_use]
    pub fn choice_symbol(&self, value: i64) -> Option<&str> {
        self.choices()
            .find(|(entry, _)| entry.value == value)
            .map(|(_, symbol)| symbol)
    }
}

/// Payload of the user data tree. The root is synthetic and carries no
/// parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum UserDataNode {
    Root,
    Param(Parameter),
}

impl UserDataNode {
    #[must_use]
    pub fn param(&self) -> Option<&Parameter> {
        match self {
            UserDataNode::Root => None,
            UserDataNode::Param(param) => Some(param),
        }
    }

    pub fn param_mut(&mut self) -> Option<&mut Parameter> {
        match self {
            UserDataNode::Root => None,
            UserDataNode::Param(param) => Some(param),
        }
    }
}
