//! Transliteration of display names into identifiers.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("constant pattern"));

/// Replaces every run of characters outside `[A-Za-z0-9_]` with `separator`.
#[must_use]
pub fn replace_non_word(name: &str, separator: &str) -> String {
    NON_WORD_RE.replace_all(name, separator).into_owned()
}

/// `Hello, World!` becomes `HELLO_WORLD`.
#[must_use]
pub fn screaming_snake(name: &str) -> String {
    replace_non_word(name, "_")
        .to_uppercase()
        .trim_matches('_')
        .to_string()
}

/// `My Plugin` becomes `my-plugin`.
#[must_use]
pub fn kebab(name: &str) -> String {
    replace_non_word(name, "-").to_lowercase()
}

/// `My Plugin!` becomes `myplugin`.
#[must_use]
pub fn squashed(name: &str) -> String {
    replace_non_word(name, "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screaming_snake_collapses_and_trims() {
        assert_eq!(screaming_snake(" -Hello, World!- "), "HELLO_WORLD");
        assert_eq!(screaming_snake("size_x"), "SIZE_X");
        assert_eq!(screaming_snake("Größe"), "GR_E");
        assert_eq!(screaming_snake("!!!"), "");
    }

    #[test]
    fn file_name_forms() {
        assert_eq!(kebab("My Plugin"), "my-plugin");
        assert_eq!(squashed("My Plugin!"), "myplugin");
        assert_eq!(squashed("cube_maker 2"), "cube_maker2");
    }
}
