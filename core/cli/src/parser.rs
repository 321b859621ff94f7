//! Command line argument parsing for `protoconv`.
//!
//! Every converter setting has a flag. Flags override values loaded with
//! `--config`; anything still unset afterwards is derived from the source.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use protoconv::settings::{ConverterSettings, ExportScope, IndentStyle, SymbolMode};

/// Command line interface definition for the plugin converter.
///
/// ## Examples
///
/// Show what would be written:
/// ```bash
/// protoconv plan cube.json --name "Cube Maker"
/// ```
///
/// Write the plugin and keep the settings next to it:
/// ```bash
/// protoconv create cube.json --plugin-id 1040000 --save-config
/// ```
#[derive(Parser)]
#[command(
    name = "protoconv",
    author,
    version,
    about = "Converts user data prototypes into description resource plugins",
    long_about = "The 'protoconv' command reads a JSON dump of an object's user data and writes \
the matching description header, resource, string table and plugin stub."
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Write the plugin files.
    Create(CreateArgs),
    /// Print the files a `create` run would write, marking existing ones.
    Plan(RunArgs),
}

#[derive(Args)]
pub(crate) struct CreateArgs {
    #[command(flatten)]
    pub(crate) run: RunArgs,

    /// Write the effective settings to `protoconv.toml` in the plugin directory.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub(crate) save_config: bool,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    /// JSON dump of the source object.
    pub(crate) source: PathBuf,

    /// Settings file to start from.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) settings: SettingsArgs,
}

#[derive(Args)]
pub(crate) struct SettingsArgs {
    /// Plugin name. Defaults to the source object's name.
    #[arg(long = "name")]
    pub(crate) plugin_name: Option<String>,

    /// Registered plugin id (digits only).
    #[arg(long)]
    pub(crate) plugin_id: Option<String>,

    /// Resource name, e.g. `Ocubemaker`.
    #[arg(long = "resource")]
    pub(crate) resource_name: Option<String>,

    /// Prefix of every generated symbol.
    #[arg(long = "prefix")]
    pub(crate) symbol_prefix: Option<String>,

    /// Icon copied into `res/icons`.
    #[arg(long = "icon")]
    pub(crate) icon_file: Option<PathBuf>,

    /// Plugin directory. Defaults to `plugins/<plugin-name>`.
    #[arg(long, short = 'd')]
    pub(crate) directory: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub(crate) indent: Option<IndentArg>,

    /// Which files to write.
    #[arg(long, value_enum)]
    pub(crate) export: Option<ExportArg>,

    /// How the plugin stub obtains the symbols.
    #[arg(long, value_enum)]
    pub(crate) symbol_mode: Option<SymbolModeArg>,

    /// Replace files that already exist.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub(crate) overwrite: bool,
}

impl SettingsArgs {
    /// Applies the flags that were given on top of `settings`.
    pub(crate) fn apply(&self, settings: &mut ConverterSettings) {
        if let Some(name) = &self.plugin_name {
            settings.plugin_name.clone_from(name);
        }
        if let Some(id) = &self.plugin_id {
            settings.plugin_id.clone_from(id);
        }
        if let Some(resource) = &self.resource_name {
            settings.resource_name.clone_from(resource);
        }
        if let Some(prefix) = &self.symbol_prefix {
            settings.symbol_prefix.clone_from(prefix);
        }
        if let Some(icon) = &self.icon_file {
            settings.icon_file = Some(icon.clone());
        }
        if let Some(directory) = &self.directory {
            settings.directory = Some(directory.clone());
        }
        if let Some(indent) = self.indent {
            settings.indent = indent.into();
        }
        if let Some(export) = self.export {
            settings.export = export.into();
        }
        if let Some(mode) = self.symbol_mode {
            settings.symbol_mode = mode.into();
        }
        if self.overwrite {
            settings.overwrite = true;
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum IndentArg {
    Tab,
    #[value(name = "2space")]
    TwoSpaces,
    #[value(name = "4space")]
    FourSpaces,
}

impl From<IndentArg> for IndentStyle {
    fn from(arg: IndentArg) -> Self {
        match arg {
            IndentArg::Tab => IndentStyle::Tab,
            IndentArg::TwoSpaces => IndentStyle::TwoSpaces,
            IndentArg::FourSpaces => IndentStyle::FourSpaces,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ExportArg {
    All,
    Res,
    Plugin,
}

impl From<ExportArg> for ExportScope {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::All => ExportScope::All,
            ExportArg::Res => ExportScope::Resources,
            ExportArg::Plugin => ExportScope::PluginStub,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum SymbolModeArg {
    C4d,
    C4ddev,
}

impl From<SymbolModeArg> for SymbolMode {
    fn from(arg: SymbolModeArg) -> Self {
        match arg {
            SymbolModeArg::C4d => SymbolMode::C4d,
            SymbolModeArg::C4ddev => SymbolMode::C4ddev,
        }
    }
}
