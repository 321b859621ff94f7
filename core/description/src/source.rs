//! The source object whose user data is converted.
//!
//! The host's object model is not available outside the host, so the source
//! is read from a serialized dump: the object's name, the kind of object, and
//! its user data container as `(descid, attributes)` pairs.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeBag;
use crate::descid::DescId;

/// Base description a plugin resource can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Obase,
    Tbase,
    Xbase,
    Mbase,
}

impl BaseType {
    /// Probe order used when a source matches more than one base.
    pub const PRIORITY: [BaseType; 4] = [
        BaseType::Obase,
        BaseType::Tbase,
        BaseType::Xbase,
        BaseType::Mbase,
    ];

    #[must_use]
    pub fn include_name(self) -> &'static str {
        match self {
            BaseType::Obase => "Obase",
            BaseType::Tbase => "Tbase",
            BaseType::Xbase => "Xbase",
            BaseType::Mbase => "Mbase",
        }
    }

    /// Property group the main user data group is merged into.
    #[must_use]
    pub fn property_group(self) -> &'static str {
        match self {
            BaseType::Obase => "ID_OBJECTPROPERTIES",
            BaseType::Tbase => "ID_TAGPROPERTIES",
            BaseType::Xbase => "ID_SHADERPROPERTIES",
            BaseType::Mbase => "ID_MATERIALPROPERTIES",
        }
    }

    /// Prefix of generated resource names (`Omyplugin`, `Tmyplugin`, ...).
    #[must_use]
    pub fn resource_prefix(self) -> &'static str {
        match self {
            BaseType::Obase => "O",
            BaseType::Tbase => "T",
            BaseType::Xbase => "X",
            BaseType::Mbase => "M",
        }
    }
}

/// Kind of the source object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Object,
    PythonGenerator,
    Tag,
    PythonTag,
    Shader,
    Material,
    #[default]
    Other,
}

impl SourceKind {
    /// Host `CheckType` equivalent: does an object of this kind derive from
    /// `base`?
    #[must_use]
    pub fn check_type(self, base: BaseType) -> bool {
        matches!(
            (self, base),
            (SourceKind::Object | SourceKind::PythonGenerator, BaseType::Obase)
                | (SourceKind::Tag | SourceKind::PythonTag, BaseType::Tbase)
                | (SourceKind::Shader, BaseType::Xbase)
                | (SourceKind::Material, BaseType::Mbase)
        )
    }

    /// First base in [`BaseType::PRIORITY`] this kind derives from.
    #[must_use]
    pub fn base_type(self) -> Option<BaseType> {
        BaseType::PRIORITY
            .into_iter()
            .find(|base| self.check_type(*base))
    }
}

/// One entry of the user data container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDataEntry {
    pub descid: DescId,
    #[serde(default)]
    pub attributes: AttributeBag,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default)]
    pub user_data: Vec<UserDataEntry>,
}

impl SourceObject {
    /// Flat `(descid, attributes)` pairs in container order.
    pub fn user_data_pairs(&self) -> impl Iterator<Item = (DescId, AttributeBag)> + '_ {
        self.user_data
            .iter()
            .map(|entry| (entry.descid.clone(), entry.attributes.clone()))
    }
}
