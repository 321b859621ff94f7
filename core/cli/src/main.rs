#![warn(clippy::pedantic)]

//! # protoconv
//!
//! Command line interface for the user data prototype converter.
//!
//! * `create <source.json>` writes the plugin directory.
//! * `plan <source.json>` prints the files `create` would write.
//!
//! Settings are resolved in three layers: the `--config` file, then flags,
//! then values derived from the source object.
//!
//! ## Exit codes
//! * 0 – success.
//! * 1 – usage / IO / conversion failure.
//!
//! ## Logging
//! Diagnostics go to stderr and are filtered with `RUST_LOG`
//! (default `protoconv=info`).
//!
//! ## Example
//! ```bash
//! protoconv create cube.json --plugin-id 1040000 -d plugins/cube
//! ```

mod parser;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use parser::{Cli, Command, RunArgs};
use protoconv::plan::FilePlan;
use protoconv::settings::{ConverterSettings, SETTINGS_FILE_NAME};
use protoconv::{Converter, load_source};
use protoconv_tree::file_tree::file_tree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("protoconv=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Create(args) => {
            let converter = load_converter(&args.run)?;
            let report = converter.create()?;
            println!(
                "Created {} ({} files, {} symbols)",
                converter.files().directory.display(),
                report.written.len(),
                report.symbols
            );
            for path in &report.skipped {
                println!("Kept existing {}", path.display());
            }
            if args.save_config
                && let Some(directory) = &converter.settings.directory
            {
                let path = directory.join(SETTINGS_FILE_NAME);
                converter
                    .settings
                    .save(&path)
                    .with_context(|| format!("saving settings to {}", path.display()))?;
                println!("Settings saved to {}", path.display());
            }
        }
        Command::Plan(args) => {
            let converter = load_converter(&args)?;
            print!("{}", render_plan(&converter.files()));
        }
    }
    Ok(())
}

/// Resolves the settings for one invocation and loads the source.
fn load_converter(args: &RunArgs) -> Result<Converter> {
    let mut settings = match &args.config {
        Some(path) => ConverterSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ConverterSettings::default(),
    };
    args.settings.apply(&mut settings);
    let source = load_source(&args.source)?;
    let mut converter = Converter::new(settings, Some(source));
    converter.autofill();
    Ok(converter)
}

/// Indented listing of the planned files below the plugin directory.
fn render_plan(plan: &FilePlan) -> String {
    let tree = file_tree(
        plan.files
            .iter()
            .map(|file| (file.path.clone(), file.role)),
        Some(&plan.directory),
    );
    let mut out = format!("{}\n", plan.directory.display());
    for (depth, entry) in tree.flatten_with_depth() {
        let indent = "  ".repeat(depth + 1);
        if entry.is_dir {
            out.push_str(&format!("{indent}{}/\n", entry.name()));
            continue;
        }
        let exists = exists_below(&plan.directory, &entry.path);
        out.push_str(&format!(
            "{indent}{} [{}]{}\n",
            entry.name(),
            entry.data,
            if exists { " (exists)" } else { "" }
        ));
    }
    out
}

fn exists_below(directory: &Path, relative: &Path) -> bool {
    directory.join(relative).exists()
}
