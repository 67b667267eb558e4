// escape.rs - Character escaping for user-supplied literal text.
//
// Two fixed special-character tables: one for text that ends up inside a
// character class, one for text that ends up outside. Each special character
// is prefixed with a single backslash; everything else passes through
// unchanged, in order.

/// Characters that must be escaped inside a character class (`[...]`).
const INSIDE_CLASS: &[char] = &['^', '-', ']'];

/// Characters that must be escaped outside a character class.
const OUTSIDE_CLASS: &[char] = &['.', '^', '$', '*', '+', '?', '(', ')', '[', '{'];

/// Escape `text` for use inside a character class.
pub(crate) fn inside_class(text: &str) -> String {
    escape(text, INSIDE_CLASS)
}

/// Escape `text` for use outside a character class.
pub(crate) fn outside_class(text: &str) -> String {
    escape(text, OUTSIDE_CLASS)
}

fn escape(text: &str, specials: &[char]) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if specials.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outside_class_escapes_all_specials() {
        assert_eq!(outside_class(".^$*+?()[{"), r"\.\^\$\*\+\?\(\)\[\{");
    }

    #[test]
    fn outside_class_leaves_plain_text_alone() {
        assert_eq!(outside_class("abc 123_-]"), "abc 123_-]");
    }

    #[test]
    fn inside_class_escapes_only_its_specials() {
        assert_eq!(inside_class("^-]"), r"\^\-\]");
        // Outside-class specials are ordinary inside a class.
        assert_eq!(inside_class(".$*+?("), ".$*+?(");
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(outside_class("a.b.c"), r"a\.b\.c");
    }

    #[test]
    fn empty_input() {
        assert_eq!(outside_class(""), "");
        assert_eq!(inside_class(""), "");
    }
}
