use protoconv::load_source;
use protoconv_description::builder::{UserDataTree, build};
use protoconv_description::render::{RenderContext, Resources, render_all};
use protoconv_description::source::SourceObject;
use protoconv_description::symbols::{SymbolMap, allocate_all};

pub(crate) fn get_test_data_path() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap());
    manifest_dir.join("test_data")
}

/// Resolves a fixture path based on the test's module path.
///
/// # Example
/// For a test in `tests/src/description.rs`, `get_test_file_path(module_path!(), "showcase")`
/// resolves to `tests/test_data/description/showcase.json`.
pub(crate) fn get_test_file_path(module_path: &str, name: &str) -> std::path::PathBuf {
    let mut path = get_test_data_path();
    for part in get_test_path_parts(module_path) {
        path = path.join(part);
    }
    path.join(format!("{name}.json"))
}

fn get_test_path_parts(module_path: &str) -> Vec<&str> {
    module_path
        .split("::")
        .skip(1) // skip the crate name
        .filter(|p| !p.ends_with("_tests"))
        .collect()
}

pub(crate) fn load_fixture(module_path: &str, name: &str) -> SourceObject {
    let path = get_test_file_path(module_path, name);
    load_source(&path).unwrap_or_else(|e| panic!("Failed to load fixture {path:?}: {e}"))
}

/// Everything one conversion run produces in memory.
pub(crate) struct Rendered {
    pub(crate) tree: UserDataTree,
    pub(crate) symbols: SymbolMap,
    pub(crate) resources: Resources,
}

pub(crate) fn render_fixture(source: &SourceObject, prefix: &str) -> Rendered {
    let mut tree = build(source.user_data_pairs()).unwrap();
    let symbols = allocate_all(&mut tree, prefix);
    let resources = render_all(&RenderContext {
        tree: &tree,
        symbols: &symbols,
        resource_name: "Otest",
        plugin_name: &source.name,
        plugin_id: Some("1040000"),
        base: source.kind.base_type(),
        indent: "  ",
    });
    Rendered {
        tree,
        symbols,
        resources,
    }
}

/// `NAME = VALUE,` entries of a rendered header, in order.
pub(crate) fn header_entries(header: &str) -> Vec<(String, i64)> {
    header
        .lines()
        .filter_map(|line| {
            let (name, value) = line.trim().trim_end_matches(',').split_once(" = ")?;
            Some((name.to_string(), value.parse().ok()?))
        })
        .collect()
}

/// First token of every non-structural line of a string table.
pub(crate) fn string_table_symbols(strings: &str) -> Vec<String> {
    strings
        .lines()
        .skip(1)
        .filter_map(|line| line.trim().split_once(' ').map(|(name, _)| name.to_string()))
        .collect()
}
