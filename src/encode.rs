//! Escaping for the two generated text formats.
//!
//! Free-text fields are interpolated into structured text (a front-matter
//! header, a config module). Each target format gets its own encoder so an
//! embedded quote or control character can never terminate the enclosing
//! literal early.

/// Encode a value as a single-quoted front-matter scalar.
///
/// Embedded single quotes are doubled, the quoting rule of the header
/// format. A single-quoted scalar cannot carry escape sequences, so control
/// characters (including newlines) are folded to spaces.
#[must_use]
pub fn front_matter_scalar(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("''"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Encode a value as a single-quoted config-module string literal.
///
/// Backslashes and single quotes are backslash-escaped, common control
/// characters use their short escapes, and the rest of the C0 range becomes
/// a `\u` escape.
#[must_use]
pub fn config_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_doubles_quotes() {
        assert_eq!(front_matter_scalar("it's fine"), "'it''s fine'");
    }

    #[test]
    fn front_matter_folds_controls() {
        assert_eq!(front_matter_scalar("a\nb\tc"), "'a b c'");
    }

    #[test]
    fn config_escapes_quotes_and_backslashes() {
        assert_eq!(config_literal(r"C:\it's"), r"'C:\\it\'s'");
    }

    #[test]
    fn config_escapes_controls() {
        assert_eq!(config_literal("a\nb"), "'a\\nb'");
        assert_eq!(config_literal("\u{1}"), "'\\u0001'");
    }

    #[test]
    fn quotes_never_terminate_the_literal_early() {
        for value in ["'", "'; drop: '", "a'b'c", "\\'"] {
            let fm = front_matter_scalar(value);
            assert!(fm.starts_with('\'') && fm.ends_with('\''));
            // Interior quotes in the scalar only appear doubled.
            assert!(!fm[1..fm.len() - 1].replace("''", "").contains('\''));

            let js = config_literal(value);
            assert!(js.starts_with('\'') && js.ends_with('\''));
            assert!(!js[1..js.len() - 1].replace("\\'", "").contains('\''));
        }
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(front_matter_scalar("Hello World"), "'Hello World'");
        assert_eq!(config_literal("Hello World"), "'Hello World'");
    }
}
