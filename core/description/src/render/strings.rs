use super::escape::escape_string;
use super::{RenderContext, finish};

/// Renders the string table (`<resource>.str`).
#[must_use]
pub fn render_strings(ctx: &RenderContext<'_>) -> String {
    let mut lines = vec![
        format!("STRINGTABLE {} {{", ctx.resource_name),
        format!(
            "{}{} \"{}\";",
            ctx.pad(1),
            ctx.resource_name,
            escape_string(ctx.plugin_name)
        ),
    ];

    for id in ctx.tree.pre_order() {
        let Some(param) = ctx.tree.param(id) else {
            continue;
        };
        let Some(symbol) = param.symbol() else {
            continue;
        };
        lines.push(format!(
            "{}{symbol} \"{}\";",
            ctx.pad(1),
            escape_string(param.attributes.display_name())
        ));
        if !param.is_cycle() {
            continue;
        }
        for (entry, choice) in param.choices() {
            let mut label = escape_string(&entry.label);
            if let Some(icon) = param.attributes.cycle_icon(entry.value) {
                label.push_str(&format!("&i{icon}"));
            }
            lines.push(format!("{}{choice} \"{label}\";", ctx.pad(2)));
        }
    }

    lines.push("}".to_string());
    finish(&lines)
}
