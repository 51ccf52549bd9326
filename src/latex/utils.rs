// Text utilities for LaTeX output

use memchr::{memchr, memchr3};

/// Check whether text contains characters that are special in LaTeX text mode
#[inline]
pub fn contains_latex_special(text: &str) -> bool {
    let bytes = text.as_bytes();

    memchr3(b'#', b'$', b'%', bytes).is_some()
        || memchr3(b'&', b'_', b'{', bytes).is_some()
        || memchr3(b'}', b'~', b'^', bytes).is_some()
        || memchr(b'\\', bytes).is_some()
}

/// Escape LaTeX special characters for text mode, appending to `buffer`.
///
/// Returns true if escaping was needed.
pub fn escape_latex_text(text: &str, buffer: &mut String) -> bool {
    if !contains_latex_special(text) {
        buffer.push_str(text);
        return false;
    }

    for ch in text.chars() {
        match ch {
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                buffer.push('\\');
                buffer.push(ch);
            },
            '~' => buffer.push_str("\\textasciitilde{}"),
            '^' => buffer.push_str("\\textasciicircum{}"),
            '\\' => buffer.push_str("\\textbackslash{}"),
            _ => buffer.push(ch),
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        let mut buffer = String::new();
        assert!(!escape_latex_text("hello world", &mut buffer));
        assert_eq!(buffer, "hello world");
    }

    #[test]
    fn test_escapes_specials() {
        let mut buffer = String::new();
        assert!(escape_latex_text("a_b & {c} #1 $5 100%", &mut buffer));
        assert_eq!(buffer, "a\\_b \\& \\{c\\} \\#1 \\$5 100\\%");
    }

    #[test]
    fn test_escapes_text_commands() {
        let mut buffer = String::new();
        escape_latex_text("~^\\", &mut buffer);
        assert_eq!(
            buffer,
            "\\textasciitilde{}\\textasciicircum{}\\textbackslash{}"
        );
    }

    #[test]
    fn test_contains_latex_special() {
        assert!(contains_latex_special("x^2"));
        assert!(contains_latex_special("\\alpha"));
        assert!(!contains_latex_special("plain"));
    }
}
