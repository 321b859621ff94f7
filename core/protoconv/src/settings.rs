//! Converter settings and their `protoconv.toml` representation.
//!
//! Empty strings and missing paths mean "derive from the source" and are
//! filled in by [`Converter::autofill`](crate::converter::Converter::autofill).
//!
//! ```toml
//! plugin_name = "Cube Maker"
//! plugin_id = "1040000"
//! indent = "2space"
//! export = "all"
//! symbol_mode = "c4ddev"
//! overwrite = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConvertError;

/// Default file name of persisted settings.
pub const SETTINGS_FILE_NAME: &str = "protoconv.toml";

/// Indentation unit used in every generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    #[serde(rename = "tab")]
    Tab,
    #[default]
    #[serde(rename = "2space")]
    TwoSpaces,
    #[serde(rename = "4space")]
    FourSpaces,
}

impl IndentStyle {
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            IndentStyle::Tab => "\t",
            IndentStyle::TwoSpaces => "  ",
            IndentStyle::FourSpaces => "    ",
        }
    }
}

/// Which parts of the plugin are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportScope {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "res")]
    Resources,
    #[serde(rename = "plugin")]
    PluginStub,
}

impl ExportScope {
    #[must_use]
    pub fn writes_resources(self) -> bool {
        matches!(self, ExportScope::All | ExportScope::Resources)
    }

    #[must_use]
    pub fn writes_plugin_stub(self) -> bool {
        matches!(self, ExportScope::All | ExportScope::PluginStub)
    }
}

/// How the plugin stub gets hold of the parameter symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    /// Symbols are written into the stub as constants.
    C4d,
    /// Symbols are parsed from the description header when the plugin loads.
    #[default]
    C4ddev,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    pub plugin_name: String,
    /// Registered plugin id. Must be all digits when set.
    pub plugin_id: String,
    pub resource_name: String,
    pub symbol_prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    pub indent: IndentStyle,
    pub export: ExportScope,
    pub symbol_mode: SymbolMode,
    pub overwrite: bool,
}

impl ConverterSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Settings`] if the text is not valid settings TOML.
    pub fn from_toml(text: &str) -> Result<Self, ConvertError> {
        toml::from_str(text).map_err(|err| ConvertError::Settings(err.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`ConvertError::Settings`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConvertError> {
        toml::to_string_pretty(self).map_err(|err| ConvertError::Settings(err.to_string()))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the file cannot be read and
    /// [`ConvertError::Settings`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConvertError::io(path, err))?;
        Self::from_toml(&text)
    }

    /// Writes the settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), ConvertError> {
        let text = self.to_toml()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| ConvertError::io(parent, err))?;
        }
        std::fs::write(path, text).map_err(|err| ConvertError::io(path, err))
    }

    /// Trimmed plugin id, `None` when unset.
    #[must_use]
    pub fn plugin_id(&self) -> Option<&str> {
        Some(self.plugin_id.trim()).filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dialog() {
        let settings = ConverterSettings::default();
        assert_eq!(settings.indent.unit(), "  ");
        assert_eq!(settings.export, ExportScope::All);
        assert_eq!(settings.symbol_mode, SymbolMode::C4ddev);
        assert!(!settings.overwrite);
        assert_eq!(settings.plugin_id(), None);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let settings = ConverterSettings::from_toml(
            "plugin_name = \"Cube Maker\"\nindent = \"tab\"\nexport = \"res\"\nsymbol_mode = \"c4d\"\n",
        )
        .unwrap();
        assert_eq!(settings.plugin_name, "Cube Maker");
        assert_eq!(settings.indent, IndentStyle::Tab);
        assert!(settings.export.writes_resources());
        assert!(!settings.export.writes_plugin_stub());
        assert_eq!(settings.symbol_mode, SymbolMode::C4d);
        assert!(settings.directory.is_none());
    }

    #[test]
    fn unknown_indent_is_rejected() {
        let err = ConverterSettings::from_toml("indent = \"3space\"\n").unwrap_err();
        assert!(matches!(err, ConvertError::Settings(_)));
    }

    #[test]
    fn save_and_load_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
        let settings = ConverterSettings {
            plugin_name: "Cube Maker".into(),
            plugin_id: " 1040000 ".into(),
            directory: Some(PathBuf::from("plugins/cube-maker")),
            indent: IndentStyle::FourSpaces,
            overwrite: true,
            ..ConverterSettings::default()
        };
        settings.save(&path).unwrap();
        let loaded = ConverterSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.plugin_id(), Some("1040000"));
    }
}
