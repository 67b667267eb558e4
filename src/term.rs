// term.rs - Pending-term state and fragment rendering.
//
// A `Term` is the builder's working state for the next fragment to commit.
// Rendering a term produces one self-contained, already-escaped and
// quantified piece of pattern text.

use crate::error::Error;

/// What a pending term matches. Exactly one alternative can be set at a
/// time; a later content setter on the builder overwrites an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Content {
    /// Literal text, already escaped for use outside a character class.
    Text(String),
    /// Any single character (`.`).
    AnyChar,
    /// A positive character class, already escaped for use inside `[...]`.
    Class(String),
    /// A negative character class (`[^...]`).
    NegatedClass(String),
    /// A raw sub-pattern taken verbatim, typically another builder's literal.
    SubPattern(String),
}

impl Content {
    fn into_literal(self) -> String {
        match self {
            Content::Text(text) | Content::SubPattern(text) => text,
            Content::AnyChar => ".".to_owned(),
            Content::Class(class) => format!("[{}]", class),
            Content::NegatedClass(class) => format!("[^{}]", class),
        }
    }
}

/// The builder's pending term. Reset to `Term::default()` by every flush.
#[derive(Debug, Clone, Default)]
pub(crate) struct Term {
    pub(crate) min: Option<u32>,
    pub(crate) max: Option<u32>,
    pub(crate) content: Option<Content>,
    pub(crate) reluctant: bool,
    pub(crate) capture: bool,
    pub(crate) behind: Option<String>,
    pub(crate) not_behind: Option<String>,
}

impl Term {
    /// Whether a flush would commit anything. Quantity and modifier fields
    /// alone do not make a term pending; only content does.
    pub(crate) fn is_pending(&self) -> bool {
        self.content.is_some()
    }

    /// Whether a repetition bound has been set on this term.
    pub(crate) fn has_quantity(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Render this term as a fragment: the content wrapped in a capturing or
    /// non-capturing group, quantified, with an optional reluctant marker and
    /// trailing lookahead assertions.
    pub(crate) fn render(self) -> Result<String, Error> {
        let Some(content) = self.content else {
            return Ok(String::new());
        };
        let quantity = quantity_literal(self.min, self.max)?;
        let mut fragment = String::new();
        fragment.push('(');
        if !self.capture {
            fragment.push_str("?:");
        }
        fragment.push_str("(?:");
        fragment.push_str(&content.into_literal());
        fragment.push(')');
        fragment.push_str(&quantity);
        if self.reluctant {
            fragment.push('?');
        }
        fragment.push(')');
        if let Some(behind) = self.behind {
            fragment.push_str("(?=");
            fragment.push_str(&behind);
            fragment.push(')');
        }
        if let Some(not_behind) = self.not_behind {
            fragment.push_str("(?!");
            fragment.push_str(&not_behind);
            fragment.push(')');
        }
        Ok(fragment)
    }
}

/// `{min,max}` when both bounds are set, `{min,}` for min only, `{0,max}`
/// for max only. A term with no bound at all is a protocol misuse and
/// reported as such rather than rendered as a degenerate quantifier.
fn quantity_literal(min: Option<u32>, max: Option<u32>) -> Result<String, Error> {
    match (min, max) {
        (Some(min), Some(max)) => Ok(format!("{{{},{}}}", min, max)),
        (Some(min), None) => Ok(format!("{{{},}}", min)),
        (None, Some(max)) => Ok(format!("{{0,{}}}", max)),
        (None, None) => Err(Error::NoQuantitySpecified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn term(content: Content) -> Term {
        Term {
            min: Some(1),
            max: Some(1),
            content: Some(content),
            ..Term::default()
        }
    }

    #[test]
    fn quantity_bounds() {
        assert_eq!(quantity_literal(Some(3), Some(3)).unwrap(), "{3,3}");
        assert_eq!(quantity_literal(Some(2), None).unwrap(), "{2,}");
        assert_eq!(quantity_literal(None, Some(3)).unwrap(), "{0,3}");
    }

    #[test]
    fn missing_quantity_is_an_error() {
        assert!(matches!(
            quantity_literal(None, None),
            Err(Error::NoQuantitySpecified)
        ));
    }

    #[test]
    fn renders_non_capturing_by_default() {
        let fragment = term(Content::Text("x".to_owned())).render().unwrap();
        assert_eq!(fragment, r"(?:(?:x){1,1})");
    }

    #[test]
    fn renders_capturing_group() {
        let mut t = term(Content::Text("x".to_owned()));
        t.capture = true;
        assert_eq!(t.render().unwrap(), r"((?:x){1,1})");
    }

    #[test]
    fn renders_classes_and_any() {
        assert_eq!(
            term(Content::Class("a-z".to_owned())).render().unwrap(),
            r"(?:(?:[a-z]){1,1})"
        );
        assert_eq!(
            term(Content::NegatedClass("0-9".to_owned())).render().unwrap(),
            r"(?:(?:[^0-9]){1,1})"
        );
        assert_eq!(term(Content::AnyChar).render().unwrap(), r"(?:(?:.){1,1})");
    }

    #[test]
    fn renders_reluctant_marker_and_lookaheads() {
        let t = Term {
            min: Some(1),
            max: None,
            content: Some(Content::AnyChar),
            reluctant: true,
            capture: false,
            behind: Some("abc".to_owned()),
            not_behind: Some("def".to_owned()),
        };
        assert_eq!(t.render().unwrap(), r"(?:(?:.){1,}?)(?=abc)(?!def)");
    }

    #[test]
    fn empty_term_renders_nothing() {
        assert_eq!(Term::default().render().unwrap(), "");
    }
}
