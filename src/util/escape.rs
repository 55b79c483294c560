use std::borrow::Cow;

/// Resolves backslash escape sequences in a string literal's contents.
///
/// String literals keep their escapes verbatim through lexing and parsing;
/// they only become control characters when printed. Recognized sequences are
/// `\n`, `\t`, `\r`, `\0`, `\a`, `\b`, `\f`, `\v`, `\\`, `\"` and `\'`. Any
/// other escaped character stands for itself, and a trailing lone backslash
/// is kept.
///
/// Strings without a backslash are returned borrowed.
///
/// # Example
/// ```
/// use minipl::util::escape::unescape;
///
/// assert_eq!(unescape(r"a\nb"), "a\nb");
/// assert_eq!(unescape(r#"say \"hi\""#), "say \"hi\"");
/// assert_eq!(unescape("plain"), "plain");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\u{07}'),
            Some('b') => out.push('\u{08}'),
            Some('f') => out.push('\u{0C}'),
            Some('v') => out.push('\u{0B}'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn borrowed_without_escapes() {
        assert!(matches!(unescape("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn control_characters() {
        assert_eq!(unescape(r"\t1\r\n"), "\t1\r\n");
    }

    #[test]
    fn escaped_backslash_is_not_reinterpreted() {
        assert_eq!(unescape(r"\\n"), "\\n");
    }

    #[test]
    fn unknown_escape_stands_for_itself() {
        assert_eq!(unescape(r"\q"), "q");
    }

    #[test]
    fn trailing_backslash_is_kept() {
        assert_eq!(unescape("end\\"), "end\\");
    }
}
