use std::fmt::Write;

/// Escapes `text` for a string table literal.
///
/// Printable ASCII is kept except for `"` and `\`, which would end or break
/// the literal. Newlines, carriage returns and tabs are kept as they are.
/// Everything else becomes `\uXXXX`; characters outside the basic plane take
/// two escapes, one per UTF-16 code unit.
#[must_use]
pub fn escape_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' | '\\' => push_escape(&mut result, ch),
            '\n' | '\r' | '\t' | ' '..='~' => result.push(ch),
            _ => push_escape(&mut result, ch),
        }
    }
    result
}

fn push_escape(result: &mut String, ch: char) {
    let mut units = [0u16; 2];
    for unit in ch.encode_utf16(&mut units) {
        let _ = write!(result, "\\u{unit:04X}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(escape_string("Size (cm): 10%"), "Size (cm): 10%");
        assert_eq!(escape_string("a\tb\nc\r"), "a\tb\nc\r");
    }

    #[test]
    fn non_ascii_uses_uppercase_escapes() {
        assert_eq!(escape_string("Größe"), "Gr\\u00F6\\u00DFe");
        assert_eq!(escape_string("é"), "\\u00E9");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(escape_string(r#"say "hi"\"#), "say \\u0022hi\\u0022\\u005C");
    }

    #[test]
    fn astral_characters_become_surrogate_pairs() {
        assert_eq!(escape_string("🎲"), "\\uD83C\\uDFB2");
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(escape_string("\u{8}\u{7f}"), "\\u0008\\u007F");
    }
}
