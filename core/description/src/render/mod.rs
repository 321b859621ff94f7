//! Rendering of the three description resource files.
//!
//! All renderers walk the same allocated [`UserDataTree`] and only read it.
//! Each one collects its output as a list of lines and joins them at the end.

pub mod escape;
pub mod grammar;
pub mod header;
pub mod strings;

use crate::builder::UserDataTree;
use crate::source::BaseType;
use crate::symbols::SymbolMap;

/// Everything a renderer needs besides the tree itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub tree: &'a UserDataTree,
    pub symbols: &'a SymbolMap,
    pub resource_name: &'a str,
    pub plugin_name: &'a str,
    /// Numeric plugin id. When present, the header also defines the resource
    /// name itself.
    pub plugin_id: Option<&'a str>,
    /// Base description to include, picked from the source's kind.
    pub base: Option<BaseType>,
    /// One level of indentation.
    pub indent: &'a str,
}

impl RenderContext<'_> {
    pub(crate) fn pad(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}

/// Rendered contents of the description files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    pub header: String,
    pub description: String,
    pub strings: String,
}

#[must_use]
pub fn render_all(ctx: &RenderContext<'_>) -> Resources {
    Resources {
        header: header::render_header(ctx),
        description: grammar::render_description(ctx),
        strings: strings::render_strings(ctx),
    }
}

pub(crate) fn finish(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
