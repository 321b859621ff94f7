//! The description grammar (`<resource>.res`).

use protoconv_tree::arena::NodeId;
use tracing::debug;

use super::{RenderContext, finish};
use crate::attributes::{AttributeBag, Value, Vector};
use crate::dtype::{AnimateMode, CustomGui, DataType, TBASELIST2D};
use crate::node::{Annotation, Parameter};

/// Bounds at or beyond these magnitudes mean "unbounded" to the user.
const REAL_EXTREME: f64 = 1e20;

#[must_use]
pub fn render_description(ctx: &RenderContext<'_>) -> String {
    let tree = ctx.tree;
    let mut lines = vec![format!("CONTAINER {} {{", ctx.resource_name)];
    if let Some(base) = ctx.base {
        lines.push(format!("{}INCLUDE {};", ctx.pad(1), base.include_name()));
    }
    lines.push(format!("{}NAME {};", ctx.pad(1), ctx.resource_name));

    let main_children = tree.children(tree.main_group());
    if let Some(base) = ctx.base {
        lines.push(format!("{}GROUP {} {{", ctx.pad(1), base.property_group()));
        for child in main_children {
            lines.extend(render_parameter(ctx, *child, 2));
        }
        lines.push(format!("{}}}", ctx.pad(1)));
    } else {
        for child in main_children {
            lines.extend(render_parameter(ctx, *child, 1));
        }
    }

    for child in tree.children(tree.root()) {
        if !tree.is_main_group(*child) {
            lines.extend(render_parameter(ctx, *child, 1));
        }
    }

    lines.push("}".to_string());
    finish(&lines)
}

fn render_parameter(ctx: &RenderContext<'_>, id: NodeId, depth: usize) -> Vec<String> {
    let Some(param) = ctx.tree.param(id) else {
        return vec![];
    };
    if matches!(
        param.annotation,
        Annotation::Pending | Annotation::Unsupported
    ) {
        return vec![];
    }
    if param.is_group() {
        return render_group(ctx, id, param, depth);
    }
    let Some((typename, props)) = leaf_properties(ctx, param) else {
        return vec![];
    };

    let mut head = format!("{}{typename}", ctx.pad(depth));
    if let Some(symbol) = param.symbol() {
        head.push(' ');
        head.push_str(symbol);
    }
    head.push_str(" {");

    if !props.iter().any(|prop| prop.contains('\n')) {
        if props.is_empty() {
            head.push_str(" }");
        } else {
            head.push_str(&format!(" {} }}", props.join(" ")));
        }
        return vec![head];
    }

    let (multi, single): (Vec<_>, Vec<_>) = props
        .iter()
        .map(|prop| prop.trim_end())
        .partition(|prop| prop.contains('\n'));
    let mut lines = vec![head];
    if !single.is_empty() {
        lines.push(format!("{}{}", ctx.pad(depth + 1), single.join(" ")));
    }
    for prop in multi {
        for line in prop.split('\n') {
            lines.push(format!("{}{line}", ctx.pad(depth + 1)));
        }
    }
    lines.push(format!("{}}}", ctx.pad(depth)));
    lines
}

fn render_group(
    ctx: &RenderContext<'_>,
    id: NodeId,
    param: &Parameter,
    depth: usize,
) -> Vec<String> {
    let attributes = &param.attributes;
    let mut lines = vec![format!(
        "{}GROUP {} {{",
        ctx.pad(depth),
        param.symbol().unwrap_or_default()
    )];
    if attributes.default_open {
        lines.push(format!("{}DEFAULT 1;", ctx.pad(depth + 1)));
    }
    if let Some(columns) = attributes.columns.filter(|n| !matches!(*n, 0 | 1)) {
        lines.push(format!("{}COLUMNS {columns};", ctx.pad(depth + 1)));
    }
    if attributes.scale_v {
        lines.push(format!("{}SCALE_V;", ctx.pad(depth + 1)));
    }
    for child in ctx.tree.children(id) {
        lines.extend(render_parameter(ctx, *child, depth + 1));
    }
    lines.push(format!("{}}}", ctx.pad(depth)));
    lines
}

/// Keyword and property clauses of a non-group parameter.
fn leaf_properties(
    ctx: &RenderContext<'_>,
    param: &Parameter,
) -> Option<(&'static str, Vec<String>)> {
    let attributes = &param.attributes;
    let dtype = param.data_type();
    let mut typename = dtype.keyword()?;
    let mut props = vec![];

    match attributes.animate {
        Some(AnimateMode::Off) => props.push("ANIMATE OFF;".to_string()),
        Some(AnimateMode::Mix) => props.push("ANIMATE MIX;".to_string()),
        Some(AnimateMode::On) | None => {}
    }

    match dtype {
        DataType::Bool => {
            if let Some(default) = &attributes.default {
                let flag = u8::from(default.is_truthy());
                props.push(format!("DEFAULT {flag};"));
            }
        }
        DataType::Long | DataType::Real => numeric_properties(ctx, param, &mut props),
        DataType::Color | DataType::Vector => vector_properties(param, &mut props),
        DataType::BaseListLink => {
            if attributes.gui() == Some(CustomGui::TexBox) {
                typename = "SHADERLINK";
            } else {
                link_properties(attributes, &mut props);
            }
        }
        DataType::Separator => {
            if attributes.separator_line {
                props.push("LINE;".to_string());
            }
        }
        _ => {}
    }

    if matches!(dtype, DataType::Long | DataType::Real | DataType::Vector)
        && let Some(unit) = attributes.unit.and_then(|unit| unit.keyword())
    {
        props.push(format!("UNIT {unit};"));
    }

    Some((typename, props))
}

fn numeric_properties(ctx: &RenderContext<'_>, param: &Parameter, props: &mut Vec<String>) {
    let attributes = &param.attributes;
    let dtype = param.data_type();
    let has_cycle = param.is_cycle();
    let multiplier = if !has_cycle && attributes.is_percent() {
        100
    } else {
        1
    };

    if has_cycle {
        let choices: Vec<_> = param
            .choices()
            .map(|(_, symbol)| format!("{}{symbol};", ctx.indent))
            .collect();
        props.push(format!("CYCLE {{\n{}\n}}", choices.join("\n")));

        let default = attributes.default.as_ref().and_then(Value::as_int);
        let choice = default.and_then(|value| param.choice_symbol(value));
        if let Some(choice) = choice {
            props.push(format!("DEFAULT {choice};"));
        } else if let Some(value) = default {
            props.push(format!("DEFAULT {value};"));
        }
    } else if let Some(default) = attributes
        .default
        .as_ref()
        .and_then(|value| format_scalar(dtype, value, multiplier, true))
    {
        props.push(format!("DEFAULT {default};"));
    }

    match attributes.gui() {
        Some(
            gui @ (CustomGui::LongSlider
            | CustomGui::CycleButton
            | CustomGui::RealSlider
            | CustomGui::RealSliderOnly
            | CustomGui::LongLat),
        ) => {
            if let Some(keyword) = gui.keyword() {
                props.push(format!("CUSTOMGUI {keyword};"));
            }
        }
        Some(CustomGui::QuickTab | CustomGui::RadioButtons) | None => {}
        Some(other) => debug!(
            name = attributes.display_name(),
            gui = i32::from(other),
            "unknown custom gui"
        ),
    }

    if has_cycle {
        return;
    }
    if let Some(min) =
        same_typed(dtype, attributes.min.as_ref()).filter(|value| !is_min_extreme(value))
    {
        push_scalar(props, "MIN", dtype, min, multiplier);
    }
    if let Some(max) =
        same_typed(dtype, attributes.max.as_ref()).filter(|value| !is_max_extreme(value))
    {
        push_scalar(props, "MAX", dtype, max, multiplier);
    }
    if attributes.gui().is_some_and(CustomGui::is_slider) {
        if let Some(min) = same_typed(dtype, attributes.min_slider.as_ref()) {
            push_scalar(props, "MINSLIDER", dtype, min, multiplier);
        }
        if let Some(max) = same_typed(dtype, attributes.max_slider.as_ref()) {
            push_scalar(props, "MAXSLIDER", dtype, max, multiplier);
        }
    }
    if let Some(step) = same_typed(dtype, attributes.step.as_ref()) {
        push_scalar(props, "STEP", dtype, step, multiplier);
    }
}

fn vector_properties(param: &Parameter, props: &mut Vec<String>) {
    let attributes = &param.attributes;
    let multiplier = if attributes.is_percent() { 100.0 } else { 1.0 };
    if let Some(default) = attributes.default.as_ref().and_then(Value::as_vector) {
        props.push(format!("DEFAULT {};", format_vector(default)));
    }
    if param.data_type() != DataType::Vector {
        return;
    }
    let vector = |value: &Option<Value>| value.as_ref().and_then(Value::as_vector);
    if let Some(min) = vector(&attributes.min).filter(|v| !v.all(|x| x <= -REAL_EXTREME)) {
        props.push(format!("MIN {};", format_vector(min.scaled(multiplier))));
    }
    if let Some(max) = vector(&attributes.max).filter(|v| !v.all(|x| x >= REAL_EXTREME)) {
        props.push(format!("MAX {};", format_vector(max.scaled(multiplier))));
    }
    if attributes.gui() == Some(CustomGui::SubDescription) {
        props.push("CUSTOMGUI SUBDESCRIPTION;".to_string());
    }
    if let Some(step) = vector(&attributes.step) {
        props.push(format!("STEP {};", format_vector(step.scaled(multiplier))));
    }
}

fn link_properties(attributes: &AttributeBag, props: &mut Vec<String>) {
    if !attributes.refuse.is_empty() {
        let tokens: Vec<_> = attributes
            .refuse
            .iter()
            .map(|filter| format!("{};", filter.token()))
            .collect();
        props.push(format!("REFUSE {{ {} }}", tokens.join(" ")));
    }
    let accepted: Vec<_> = attributes
        .accept
        .iter()
        .filter(|filter| filter.id != TBASELIST2D)
        .map(|filter| format!("{};", filter.token()))
        .collect();
    if !accepted.is_empty() {
        props.push(format!("ACCEPT {{ {} }}", accepted.join(" ")));
    }
}

/// `value` when its type matches the parameter's own type.
fn same_typed(dtype: DataType, value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| match dtype {
        DataType::Long => matches!(value, Value::Int(_)),
        DataType::Real => matches!(value, Value::Real(_)),
        _ => false,
    })
}

fn is_min_extreme(value: &Value) -> bool {
    match value {
        Value::Int(v) => *v <= i64::from(i32::MIN),
        Value::Real(v) => *v <= -REAL_EXTREME,
        _ => false,
    }
}

fn is_max_extreme(value: &Value) -> bool {
    match value {
        Value::Int(v) => *v >= i64::from(i32::MAX),
        Value::Real(v) => *v >= REAL_EXTREME,
        _ => false,
    }
}

fn push_scalar(props: &mut Vec<String>, key: &str, dtype: DataType, value: &Value, multiplier: i64) {
    if let Some(text) = format_scalar(dtype, value, multiplier, false) {
        props.push(format!("{key} {text};"));
    }
}

/// Formats an integer or real for a `LONG`/`REAL` clause. Integer parameters
/// accept real defaults and truncate them when `lenient`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn format_scalar(dtype: DataType, value: &Value, multiplier: i64, lenient: bool) -> Option<String> {
    match (dtype, value) {
        (DataType::Long, Value::Int(v)) => Some((v * multiplier).to_string()),
        (DataType::Long, Value::Real(v)) if lenient => {
            Some(((v * multiplier as f64) as i64).to_string())
        }
        (DataType::Real, Value::Real(_) | Value::Int(_)) => {
            let v = value.as_real()?;
            Some(format_real(v * multiplier as f64))
        }
        _ => None,
    }
}

fn format_real(value: f64) -> String {
    format!("{value:?}")
}

fn format_vector(v: Vector) -> String {
    format!("{} {} {}", format_real(v.x), format_real(v.y), format_real(v.z))
}
