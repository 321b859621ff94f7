use super::{RenderContext, finish};

/// Renders the enumeration header (`<resource>.h`).
#[must_use]
pub fn render_header(ctx: &RenderContext<'_>) -> String {
    let mut lines = vec!["#pragma once".to_string(), "enum {".to_string()];
    if let Some(plugin_id) = ctx.plugin_id.filter(|id| !id.is_empty()) {
        lines.push(format!("{}{} = {plugin_id},", ctx.pad(1), ctx.resource_name));
    }

    for id in ctx.tree.pre_order() {
        let Some(param) = ctx.tree.param(id) else {
            continue;
        };
        let (Some(symbol), Some(value)) = (param.symbol(), param.symbol_id()) else {
            continue;
        };
        lines.push(format!("{}{symbol} = {value},", ctx.pad(1)));
        if !param.is_cycle() {
            continue;
        }
        for (entry, choice) in param.choices() {
            lines.push(format!("{}{choice} = {},", ctx.pad(2), entry.value));
        }
    }

    lines.push("};".to_string());
    finish(&lines)
}
