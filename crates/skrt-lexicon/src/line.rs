// Form extraction and line splitting for comma-delimited trie content.

use std::borrow::Cow;

/// Separator between the form and the rest of a line.
pub const FIELD_SEPARATOR: char = ',';

/// Return the form of a line: everything before the first comma.
///
/// A line without a comma is its own form, so the empty line has the empty
/// form.
pub fn form_of(line: &str) -> &str {
    match line.find(FIELD_SEPARATOR) {
        Some(end) => &line[..end],
        None => line,
    }
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows the input when it already uses `\n` only.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Split text on `\n`, keeping the empty piece after a trailing newline.
///
/// `"a\nb\n"` yields `["a", "b", ""]`, so joining the pieces back with `\n`
/// reproduces the input exactly.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_is_text_before_first_comma() {
        assert_eq!(form_of("rama,rama,noun,masc"), "rama");
        assert_eq!(form_of("Darma,0~-/=0"), "Darma");
    }

    #[test]
    fn line_without_comma_is_its_own_form() {
        assert_eq!(form_of("budDa"), "budDa");
        assert_eq!(form_of(""), "");
    }

    #[test]
    fn leading_comma_gives_empty_form() {
        assert_eq!(form_of(",orphan"), "");
    }

    #[test]
    fn split_keeps_trailing_empty_piece() {
        let lines: Vec<&str> = split_lines("a,1\nb,2\n").collect();
        assert_eq!(lines, vec!["a,1", "b,2", ""]);
        assert_eq!(lines.join("\n"), "a,1\nb,2\n");
    }

    #[test]
    fn split_empty_text_yields_one_empty_line() {
        let lines: Vec<&str> = split_lines("").collect();
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn normalize_leaves_lf_text_borrowed() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn normalize_translates_crlf_and_cr() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
    }
}
