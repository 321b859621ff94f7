//! Python plugin skeleton written next to the resources.
//!
//! The stub registers a plugin of the matching class with the generated
//! description, initializes every parameter with its default value and
//! applies description settings the resource grammar cannot express.

use protoconv_description::attributes::Value;
use protoconv_description::builder::UserDataTree;
use protoconv_description::naming::replace_non_word;
use protoconv_description::render::escape::escape_string;
use protoconv_description::source::{BaseType, SourceKind};
use protoconv_description::symbols::SymbolMap;

use crate::settings::SymbolMode;

/// Plugin class the stub derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    Object,
    Tag,
    Shader,
}

impl PluginKind {
    /// Materials have no scriptable plugin class.
    #[must_use]
    pub fn for_base(base: BaseType) -> Option<Self> {
        match base {
            BaseType::Obase => Some(PluginKind::Object),
            BaseType::Tbase => Some(PluginKind::Tag),
            BaseType::Xbase => Some(PluginKind::Shader),
            BaseType::Mbase => None,
        }
    }

    fn data_class(self) -> &'static str {
        match self {
            PluginKind::Object => "c4d.plugins.ObjectData",
            PluginKind::Tag => "c4d.plugins.TagData",
            PluginKind::Shader => "c4d.plugins.ShaderData",
        }
    }

    fn register_function(self) -> &'static str {
        match self {
            PluginKind::Object => "c4d.plugins.RegisterObjectPlugin",
            PluginKind::Tag => "c4d.plugins.RegisterTagPlugin",
            PluginKind::Shader => "c4d.plugins.RegisterShaderPlugin",
        }
    }

    fn info_flags(self, source: SourceKind) -> &'static str {
        match (self, source) {
            (PluginKind::Object, SourceKind::PythonGenerator) => "c4d.OBJECT_GENERATOR",
            (PluginKind::Tag, _) => "c4d.TAG_VISIBLE | c4d.TAG_EXPRESSION",
            _ => "0",
        }
    }
}

pub struct StubContext<'a> {
    pub tree: &'a UserDataTree,
    pub symbols: &'a SymbolMap,
    pub kind: PluginKind,
    pub source_kind: SourceKind,
    pub plugin_name: &'a str,
    pub plugin_id: Option<&'a str>,
    pub resource_name: &'a str,
    /// Icon path relative to the plugin directory.
    pub icon: Option<String>,
    pub symbol_mode: SymbolMode,
    pub indent: &'a str,
}

impl StubContext<'_> {
    fn pad(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    fn class_name(&self) -> String {
        format!("{}Data", replace_non_word(self.plugin_name, ""))
    }
}

#[must_use]
pub fn render_plugin_stub(ctx: &StubContext<'_>) -> String {
    let mut lines = vec![
        format!("# {} plugin.", ctx.plugin_name),
        String::new(),
        "import c4d".to_string(),
        "import os".to_string(),
        String::new(),
        format!("PLUGIN_ID = {}", ctx.plugin_id.unwrap_or("0")),
        format!("PLUGIN_NAME = {}", py_string(ctx.plugin_name)),
        format!("PLUGIN_DESC = {}", py_string(ctx.resource_name)),
        format!("PLUGIN_INFO = {}", ctx.kind.info_flags(ctx.source_kind)),
        String::new(),
    ];
    lines.extend(render_symbols(ctx));
    lines.push(String::new());
    lines.push(String::new());
    lines.extend(render_class(ctx));
    lines.push(String::new());
    lines.push(String::new());
    lines.extend(render_main(ctx));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn render_symbols(ctx: &StubContext<'_>) -> Vec<String> {
    match ctx.symbol_mode {
        SymbolMode::C4d => {
            let mut lines = vec!["class res(object):".to_string()];
            if ctx.symbols.symbols().is_empty() {
                lines.push(format!("{}pass", ctx.pad(1)));
            }
            for (symbol, id) in ctx.symbols.symbols() {
                lines.push(format!("{}{symbol} = {id}", ctx.pad(1)));
            }
            lines
        }
        SymbolMode::C4ddev => {
            let i = |depth| ctx.pad(depth);
            vec![
                "def load_symbols(filename):".to_string(),
                format!("{}symbols = {{}}", i(1)),
                format!("{}with open(filename) as fp:", i(1)),
                format!("{}for line in fp:", i(2)),
                format!("{}name, sep, value = line.strip().rstrip(',').partition('=')", i(3)),
                format!("{}if sep:", i(3)),
                format!("{}symbols[name.strip()] = int(value)", i(4)),
                format!("{}return type('res', (object,), symbols)", i(1)),
                String::new(),
                format!(
                    "res = load_symbols(os.path.join(os.path.dirname(__file__), 'res', 'description', {}))",
                    py_string(&format!("{}.h", ctx.resource_name))
                ),
            ]
        }
    }
}

fn render_class(ctx: &StubContext<'_>) -> Vec<String> {
    let i = |depth| ctx.pad(depth);
    let mut lines = vec![format!("class {}({}):", ctx.class_name(), ctx.kind.data_class())];

    let hardcoded = ctx.symbols.hardcoded_descriptions();
    if !hardcoded.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}HARDCODED_DESCRIPTION = [", i(1)));
        for entry in hardcoded {
            if let Some(symbol) = ctx.symbols.symbol_for(&entry.descid) {
                lines.push(format!(
                    "{}(res.{symbol}, c4d.{}, {}),",
                    i(2),
                    entry.key,
                    entry.value
                ));
            }
        }
        lines.push(format!("{}]", i(1)));
    }

    lines.push(String::new());
    lines.push(format!("{}def Init(self, node):", i(1)));
    let defaults: Vec<_> = ctx
        .tree
        .params()
        .filter_map(|(_, param)| {
            let symbol = param.symbol()?;
            let value = py_value(param.attributes.default.as_ref()?);
            Some(format!("{}node[res.{symbol}] = {value}", i(2)))
        })
        .collect();
    lines.extend(defaults);
    lines.push(format!("{}return True", i(2)));

    if !hardcoded.is_empty() {
        lines.extend([
            String::new(),
            format!("{}def GetDDescription(self, node, description, flags):", i(1)),
            format!("{}if not description.LoadDescription(node.GetType()):", i(2)),
            format!("{}return False", i(3)),
            format!("{}for symbol, key, value in self.HARDCODED_DESCRIPTION:", i(2)),
            format!("{}bc = description.GetParameterI(c4d.DescID(symbol), None)", i(3)),
            format!("{}if bc:", i(3)),
            format!("{}bc[key] = value", i(4)),
            format!("{}return (True, flags | c4d.DESCFLAGS_DESC_LOADED)", i(2)),
        ]);
    }

    match ctx.kind {
        PluginKind::Object => lines.extend([
            String::new(),
            format!("{}def GetVirtualObjects(self, op, hh):", i(1)),
            format!("{}return None", i(2)),
        ]),
        PluginKind::Tag => lines.extend([
            String::new(),
            format!("{}def Execute(self, op, doc, host, bt, priority, flags):", i(1)),
            format!("{}return c4d.EXECUTIONRESULT_OK", i(2)),
        ]),
        PluginKind::Shader => lines.extend([
            String::new(),
            format!("{}def Output(self, sh, cd):", i(1)),
            format!("{}return c4d.Vector(0.0)", i(2)),
        ]),
    }
    lines
}

fn render_main(ctx: &StubContext<'_>) -> Vec<String> {
    let i = |depth| ctx.pad(depth);
    let mut lines = vec!["def main():".to_string()];
    match &ctx.icon {
        Some(icon) => {
            lines.push(format!("{}icon = c4d.bitmaps.BaseBitmap()", i(1)));
            lines.push(format!(
                "{}icon.InitWith(os.path.join(os.path.dirname(__file__), {}))",
                i(1),
                py_string(icon)
            ));
        }
        None => lines.push(format!("{}icon = None", i(1))),
    }
    let register = ctx.kind.register_function();
    let class_name = ctx.class_name();
    let call = match ctx.kind {
        PluginKind::Shader => format!(
            "{}{register}(PLUGIN_ID, PLUGIN_NAME, PLUGIN_INFO, {class_name}, PLUGIN_DESC)",
            i(1)
        ),
        PluginKind::Object | PluginKind::Tag => format!(
            "{}{register}(PLUGIN_ID, PLUGIN_NAME, {class_name}, PLUGIN_DESC, PLUGIN_INFO, icon)",
            i(1)
        ),
    };
    lines.push(call);
    lines.push(String::new());
    lines.push(String::new());
    lines.push("if __name__ == '__main__':".to_string());
    lines.push(format!("{}main()", i(1)));
    lines
}

fn py_string(text: &str) -> String {
    let escaped = escape_string(text)
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("u\"{escaped}\"")
}

fn py_value(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(v) => v.to_string(),
        Value::Real(v) => format!("{v:?}"),
        Value::Vector(v) => format!("c4d.Vector({:?}, {:?}, {:?})", v.x, v.y, v.z),
        Value::String(text) => py_string(text),
    }
}
