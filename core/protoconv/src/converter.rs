//! Planning and writing of a plugin directory.

use std::path::{Path, PathBuf};

use protoconv_description::builder::{UserDataTree, build};
use protoconv_description::naming::{kebab, replace_non_word, squashed};
use protoconv_description::render::{RenderContext, render_all};
use protoconv_description::source::{BaseType, SourceObject};
use protoconv_description::symbols::SymbolMap;
use tracing::{debug, info};

use crate::errors::ConvertError;
use crate::plan::{FilePlan, FileRole};
use crate::settings::ConverterSettings;
use crate::stub::{PluginKind, StubContext, render_plugin_stub};

/// Plugin name used when neither the settings nor the source provide one.
pub const DEFAULT_PLUGIN_NAME: &str = "My Plugin";

/// Contents of a freshly created `c4d_symbols.h`.
pub const EMPTY_SYMBOLS_HEADER: &str = "#pragma once\nenum {\n};\n";

/// Outcome of [`Converter::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReport {
    pub written: Vec<PathBuf>,
    /// Optional files left alone because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Number of parameters that received a symbol.
    pub symbols: usize,
}

/// Loads a source dump from a JSON file.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] if the file cannot be read and
/// [`ConvertError::Source`] if it is not a valid dump.
pub fn load_source(path: &Path) -> Result<SourceObject, ConvertError> {
    let text = std::fs::read_to_string(path).map_err(|err| ConvertError::io(path, err))?;
    serde_json::from_str(&text).map_err(|err| ConvertError::Source {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct Converter {
    pub settings: ConverterSettings,
    pub source: Option<SourceObject>,
}

impl Converter {
    #[must_use]
    pub fn new(settings: ConverterSettings, source: Option<SourceObject>) -> Self {
        Self { settings, source }
    }

    /// Base description matching the source's kind.
    #[must_use]
    pub fn base_type(&self) -> Option<BaseType> {
        self.source.as_ref().and_then(|source| source.kind.base_type())
    }

    #[must_use]
    pub fn plugin_kind(&self) -> Option<PluginKind> {
        self.base_type().and_then(PluginKind::for_base)
    }

    /// Derives every unset setting from the plugin name.
    pub fn autofill(&mut self) {
        let settings = &mut self.settings;
        if settings.plugin_name.is_empty() {
            settings.plugin_name = self
                .source
                .as_ref()
                .map(|source| source.name.clone())
                .unwrap_or_default();
        }
        if settings.plugin_name.is_empty() {
            settings.plugin_name = DEFAULT_PLUGIN_NAME.to_string();
        }
        if settings.resource_name.is_empty() {
            let prefix = self
                .source
                .as_ref()
                .and_then(|source| source.kind.base_type())
                .map_or("", BaseType::resource_prefix);
            settings.resource_name = format!("{prefix}{}", squashed(&settings.plugin_name));
        }
        if settings.symbol_prefix.is_empty() {
            let stem = replace_non_word(&settings.plugin_name, "_");
            settings.symbol_prefix = format!("{}_", stem.trim_end_matches('_').to_uppercase());
        }
        if settings.directory.is_none() {
            settings.directory =
                Some(Path::new("plugins").join(kebab(&settings.plugin_name)));
        }
    }

    /// Files a run would produce with the current settings.
    #[must_use]
    pub fn files(&self) -> FilePlan {
        let settings = &self.settings;
        let directory = settings
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(&settings.plugin_name));
        let mut plan = FilePlan::new(directory.clone());
        let res = directory.join("res");
        let resource = &settings.resource_name;

        if settings.export.writes_resources() {
            plan.push(FileRole::C4dSymbols, res.join("c4d_symbols.h"));
            plan.push(
                FileRole::Header,
                res.join("description").join(format!("{resource}.h")),
            );
            plan.push(
                FileRole::Description,
                res.join("description").join(format!("{resource}.res")),
            );
            plan.push(
                FileRole::StringsUs,
                res.join("strings_us")
                    .join("description")
                    .join(format!("{resource}.str")),
            );
        }
        if settings.export.writes_plugin_stub() && self.plugin_kind().is_some() {
            plan.push(
                FileRole::Plugin,
                directory.join(format!("{}.pyp", kebab(&settings.plugin_name))),
            );
        }
        if let Some(icon) = &settings.icon_file {
            let suffix = icon
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();
            plan.push(
                FileRole::Icon,
                res.join("icons")
                    .join(format!("{}{suffix}", settings.plugin_name)),
            );
        }
        plan
    }

    /// Writes the plugin.
    ///
    /// Nothing is written when a check fails. Once writing has started, a
    /// failure leaves the files written so far in place.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Configuration`] if the directory or source is missing
    ///   or the plugin id is not numeric
    /// - [`ConvertError::MissingResource`] if the icon file does not exist
    /// - [`ConvertError::FileExists`] if a planned file exists and overwrite
    ///   is off
    /// - [`ConvertError::Description`] if the user data has cyclic groups
    /// - [`ConvertError::Io`] if a write fails
    pub fn create(&self) -> Result<CreateReport, ConvertError> {
        let settings = &self.settings;
        if settings.directory.is_none() {
            return Err(ConvertError::Configuration(
                "plugin directory must be set".into(),
            ));
        }
        let Some(source) = &self.source else {
            return Err(ConvertError::Configuration("source must be set".into()));
        };
        if let Some(id) = settings.plugin_id()
            && !id.chars().all(|ch| ch.is_ascii_digit())
        {
            return Err(ConvertError::Configuration(format!(
                "plugin id \"{id}\" is not a number"
            )));
        }
        if let Some(icon) = &settings.icon_file
            && !icon.is_file()
        {
            return Err(ConvertError::MissingResource { path: icon.clone() });
        }

        let plan = self.files();
        if !settings.overwrite
            && let Some(path) = plan.conflicts().next()
        {
            return Err(ConvertError::FileExists {
                path: path.to_path_buf(),
            });
        }

        let mut tree = build(source.user_data_pairs())?;
        let mut symbols = SymbolMap::new(settings.symbol_prefix.as_str());
        symbols.allocate_tree(&mut tree);
        debug!(symbols = symbols.symbols().len(), "allocated symbols");

        let mut report = CreateReport {
            symbols: symbols.symbols().len(),
            ..CreateReport::default()
        };

        if let Some(path) = plan.get(FileRole::C4dSymbols) {
            write_unless_present(path, EMPTY_SYMBOLS_HEADER, settings.overwrite, &mut report)?;
        }
        if settings.export.writes_resources() {
            self.write_resources(&plan, &tree, &symbols, &mut report)?;
        }
        if let (Some(path), Some(kind)) = (plan.get(FileRole::Plugin), self.plugin_kind()) {
            let stub = render_plugin_stub(&StubContext {
                tree: &tree,
                symbols: &symbols,
                kind,
                source_kind: source.kind,
                plugin_name: &settings.plugin_name,
                plugin_id: settings.plugin_id(),
                resource_name: &settings.resource_name,
                icon: plan.get(FileRole::Icon).and_then(|icon| {
                    icon.file_name()
                        .map(|name| format!("res/icons/{}", name.to_string_lossy()))
                }),
                symbol_mode: settings.symbol_mode,
                indent: settings.indent.unit(),
            });
            write_unless_present(path, &stub, settings.overwrite, &mut report)?;
        }
        if let (Some(icon), Some(target)) = (&settings.icon_file, plan.get(FileRole::Icon)) {
            copy_icon(icon, target, &mut report)?;
        }

        info!(
            directory = %plan.directory.display(),
            files = report.written.len(),
            "plugin created"
        );
        Ok(report)
    }

    fn write_resources(
        &self,
        plan: &FilePlan,
        tree: &UserDataTree,
        symbols: &SymbolMap,
        report: &mut CreateReport,
    ) -> Result<(), ConvertError> {
        let settings = &self.settings;
        let resources = render_all(&RenderContext {
            tree,
            symbols,
            resource_name: &settings.resource_name,
            plugin_name: &settings.plugin_name,
            plugin_id: settings.plugin_id(),
            base: self.base_type(),
            indent: settings.indent.unit(),
        });
        for (role, text) in [
            (FileRole::Header, &resources.header),
            (FileRole::Description, &resources.description),
            (FileRole::StringsUs, &resources.strings),
        ] {
            if let Some(path) = plan.get(role) {
                write_file(path, text)?;
                report.written.push(path.to_path_buf());
            }
        }
        Ok(())
    }
}

fn write_file(path: &Path, text: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| ConvertError::io(parent, err))?;
    }
    std::fs::write(path, text).map_err(|err| ConvertError::io(path, err))?;
    info!(path = %path.display(), "wrote file");
    Ok(())
}

fn write_unless_present(
    path: &Path,
    text: &str,
    overwrite: bool,
    report: &mut CreateReport,
) -> Result<(), ConvertError> {
    if !overwrite && path.is_file() {
        debug!(path = %path.display(), "keeping existing file");
        report.skipped.push(path.to_path_buf());
        return Ok(());
    }
    write_file(path, text)?;
    report.written.push(path.to_path_buf());
    Ok(())
}

fn copy_icon(icon: &Path, target: &Path, report: &mut CreateReport) -> Result<(), ConvertError> {
    if icon == target {
        return Ok(());
    }
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|err| ConvertError::io(parent, err))?;
    }
    std::fs::copy(icon, target).map_err(|err| ConvertError::io(target, err))?;
    info!(path = %target.display(), "copied icon");
    report.written.push(target.to_path_buf());
    Ok(())
}
