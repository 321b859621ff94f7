//! Parameter metadata as exposed by the host's user data container.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::descid::DescId;
use crate::dtype::{AnimateMode, CustomGui, Unit};

/// Three component vector used for colors and vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub(crate) fn all(self, pred: impl Fn(f64) -> bool) -> bool {
        pred(self.x) && pred(self.y) && pred(self.z)
    }
}

/// Value stored under one attribute key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Real(f64),
    Vector(Vector),
    String(String),
}

impl Value {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view of integers and reals.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Real(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_vector(&self) -> Option<Vector> {
        match self {
            Value::Vector(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(value) => *value,
            Value::Int(value) => *value != 0,
            Value::Real(value) => *value != 0.0,
            Value::Vector(value) => *value != Vector::default(),
            Value::String(value) => !value.is_empty(),
        }
    }
}

/// One `(value, label)` pair of a cycle parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, String)", into = "(i64, String)")]
pub struct CycleEntry {
    pub value: i64,
    pub label: String,
}

impl From<(i64, String)> for CycleEntry {
    fn from((value, label): (i64, String)) -> Self {
        Self { value, label }
    }
}

impl From<CycleEntry> for (i64, String) {
    fn from(entry: CycleEntry) -> Self {
        (entry.value, entry.label)
    }
}

/// Type filter of a link parameter. Named filters render by name, the others
/// by numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, Option<String>)", into = "(i32, Option<String>)")]
pub struct LinkFilter {
    pub id: i32,
    pub name: Option<String>,
}

impl LinkFilter {
    #[must_use]
    pub fn token(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.id.to_string(),
        }
    }
}

impl From<(i32, Option<String>)> for LinkFilter {
    fn from((id, name): (i32, Option<String>)) -> Self {
        Self { id, name }
    }
}

impl From<LinkFilter> for (i32, Option<String>) {
    fn from(filter: LinkFilter) -> Self {
        (filter.id, filter.name)
    }
}

/// Attribute bag of a single parameter.
///
/// Every key the converter understands has its own field; everything else the
/// host stores is ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeBag {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub default: Option<Value>,
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub min_slider: Option<Value>,
    pub max_slider: Option<Value>,
    pub step: Option<Value>,
    pub unit: Option<Unit>,
    pub animate: Option<AnimateMode>,
    pub custom_gui: Option<i32>,
    pub cycle: Vec<CycleEntry>,
    pub cycle_icons: BTreeMap<i64, i64>,
    pub accept: Vec<LinkFilter>,
    pub refuse: Vec<LinkFilter>,
    pub parent_group: DescId,
    pub separator_line: bool,
    pub default_open: bool,
    pub columns: Option<i32>,
    pub scale_v: bool,
}

impl AttributeBag {
    /// Display name, empty when unset.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Short name when set and non-empty, the display name otherwise.
    #[must_use]
    pub fn symbol_name(&self) -> &str {
        match self.short_name.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => self.display_name(),
        }
    }

    #[must_use]
    pub fn gui(&self) -> Option<CustomGui> {
        self.custom_gui
            .filter(|raw| *raw != 0)
            .map(CustomGui::from)
    }

    #[must_use]
    pub fn is_percent(&self) -> bool {
        self.unit == Some(Unit::Percent)
    }

    /// Icon id attached to a cycle entry, ignoring unset (zero) ids.
    #[must_use]
    pub fn cycle_icon(&self, value: i64) -> Option<i64> {
        self.cycle_icons.get(&value).copied().filter(|icon| *icon != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_name_prefers_short_name() {
        let bag = AttributeBag {
            name: Some("Long Name".into()),
            short_name: Some("Short".into()),
            ..AttributeBag::default()
        };
        assert_eq!(bag.symbol_name(), "Short");

        let bag = AttributeBag {
            name: Some("Long Name".into()),
            short_name: Some(String::new()),
            ..AttributeBag::default()
        };
        assert_eq!(bag.symbol_name(), "Long Name");
    }

    #[test]
    fn values_deserialize_by_shape() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[true, 3, 0.5, {"x": 1.0, "y": 2.0, "z": 3.0}, "s"]"#)
                .unwrap();
        assert_eq!(values[0], Value::Bool(true));
        assert_eq!(values[1], Value::Int(3));
        assert_eq!(values[2], Value::Real(0.5));
        assert_eq!(values[3], Value::Vector(Vector::new(1.0, 2.0, 3.0)));
        assert_eq!(values[4], Value::String("s".into()));
    }

    #[test]
    fn bag_deserializes_with_defaults() {
        let bag: AttributeBag = serde_json::from_str(
            r#"{
                "name": "Mode",
                "default": 1,
                "cycle": [[0, "Low"], [1, "High"]],
                "cycle_icons": {"1": 5159},
                "accept": [[5100, "Obase"], [1234, null]],
                "parent_group": [[700, 5, 0]]
            }"#,
        )
        .unwrap();
        assert_eq!(bag.cycle[1].label, "High");
        assert_eq!(bag.cycle_icon(1), Some(5159));
        assert_eq!(bag.cycle_icon(0), None);
        assert_eq!(bag.accept[0].token(), "Obase");
        assert_eq!(bag.accept[1].token(), "1234");
        assert_eq!(bag.parent_group, DescId::main_group());
        assert!(!bag.scale_v);
    }

    #[test]
    fn zero_custom_gui_is_unset() {
        let bag = AttributeBag {
            custom_gui: Some(0),
            ..AttributeBag::default()
        };
        assert_eq!(bag.gui(), None);
    }
}
