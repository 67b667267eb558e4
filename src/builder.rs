// builder.rs - The fluent pattern builder.
//
// Owns the output accumulator, the pending term and the compile-time flags.
// Every fluent call either mutates the pending term or triggers a flush that
// commits it to the accumulator as one fragment. Terminal operations force a
// final flush, then read or compile the accumulated pattern text.

use std::mem;

use fancy_regex::Regex;

use crate::error::Error;
use crate::escape;
use crate::flags::Flags;
use crate::term::{Content, Term};

/// An argument that can stand for raw pattern text in
/// [`PatternBuilder::either`] and [`PatternBuilder::or`]: either a plain
/// string (taken verbatim, no escaping) or a sub-builder whose flushed
/// literal is used.
pub trait Expression {
    /// Resolve to raw pattern text.
    fn into_pattern(self) -> Result<String, Error>;
}

impl Expression for &str {
    fn into_pattern(self) -> Result<String, Error> {
        Ok(self.to_owned())
    }
}

impl Expression for String {
    fn into_pattern(self) -> Result<String, Error> {
        Ok(self)
    }
}

impl Expression for PatternBuilder {
    fn into_pattern(mut self) -> Result<String, Error> {
        self.literal()
    }
}

/// A fluent builder that assembles regular-expression pattern text from
/// readable method calls, then compiles it into a [`Regex`].
///
/// A term is started by a quantity setter ([`exactly`](Self::exactly),
/// [`min`](Self::min), [`max`](Self::max)), given content by a content
/// setter ([`of`](Self::of), [`of_any`](Self::of_any), [`from`](Self::from),
/// [`not_from`](Self::not_from), [`like`](Self::like)) and committed to the
/// output by the next quantity setter, anchor, alternation or terminal call.
///
/// # Examples
///
/// ```
/// use refluent::PatternBuilder;
///
/// let re = PatternBuilder::new()
///     .min(1)
///     .lower_case_letters()
///     .digit()
///     .end()
///     .compile()
///     .unwrap();
/// assert!(re.is_match("abc1").unwrap());
/// assert!(!re.is_match("abc123x").unwrap());
/// ```
///
/// Reading the pattern text without compiling:
///
/// ```
/// use refluent::PatternBuilder;
///
/// let literal = PatternBuilder::new().exactly(3).of("a.b").literal().unwrap();
/// assert_eq!(literal, r"(?:(?:a\.b){3,3})");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    literal: String,
    flags: Flags,
    term: Term,
    either: Option<String>,
    error: Option<Error>,
}

impl PatternBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit the pending term to the accumulator. No-op while the term has
    /// no content, so quantity setters and modifiers can accumulate on it.
    fn flush(&mut self) {
        if !self.term.is_pending() {
            return;
        }
        let term = mem::take(&mut self.term);
        match term.render() {
            Ok(fragment) => self.literal.push_str(&fragment),
            Err(err) => self.fail(err),
        }
    }

    /// Record a protocol-misuse error; the first one in a chain wins.
    fn fail(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }

    /// Resolve an [`Expression`] argument, folding its failure into this
    /// builder's deferred error.
    fn resolve(&mut self, expr: impl Expression) -> Option<String> {
        match expr.into_pattern() {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    /// Read a sub-builder's flushed literal, folding its failure into this
    /// builder's deferred error.
    fn sub_literal(&mut self, mut sub: PatternBuilder) -> Option<String> {
        match sub.literal() {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    // === Flags ===

    /// Compile with case-insensitive matching.
    pub fn ignore_case(mut self) -> Self {
        self.flags |= Flags::IGNORE_CASE;
        self
    }

    /// Compile with `^`/`$` matching at every line boundary.
    pub fn multi_line(mut self) -> Self {
        self.flags |= Flags::MULTI_LINE;
        self
    }

    /// The flag set that will be handed to the engine.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    // === Quantity setters ===

    /// Start a new term repeated exactly `n` times. Commits any pending term
    /// first.
    pub fn exactly(mut self, n: u32) -> Self {
        self.flush();
        self.term.min = Some(n);
        self.term.max = Some(n);
        self
    }

    /// Start a new term repeated at least `n` times. Commits any pending
    /// term first.
    pub fn min(mut self, n: u32) -> Self {
        self.flush();
        self.term.min = Some(n);
        self
    }

    /// Start a new term repeated at most `n` times (and possibly zero).
    /// Commits any pending term first.
    pub fn max(mut self, n: u32) -> Self {
        self.flush();
        self.term.max = Some(n);
        self
    }

    // === Content setters ===

    /// The term matches `text` literally. Regex metacharacters in `text` are
    /// escaped.
    pub fn of(mut self, text: &str) -> Self {
        self.term.content = Some(Content::Text(escape::outside_class(text)));
        self
    }

    /// The term matches any single character.
    pub fn of_any(mut self) -> Self {
        self.term.content = Some(Content::AnyChar);
        self
    }

    /// The term matches one character from `set`, a character-class body
    /// such as `"aeiou"`. Class metacharacters (`^`, `-`, `]`) are escaped,
    /// so ranges cannot be written here; use the letter/digit combinators
    /// for ranges.
    pub fn from(mut self, set: &str) -> Self {
        self.term.content = Some(Content::Class(escape::inside_class(set)));
        self
    }

    /// The term matches one character from the given set.
    pub fn from_chars(self, set: &[char]) -> Self {
        let set: String = set.iter().collect();
        self.from(&set)
    }

    /// The term matches one character *not* in `set`. Same escaping as
    /// [`from`](Self::from).
    pub fn not_from(mut self, set: &str) -> Self {
        self.term.content = Some(Content::NegatedClass(escape::inside_class(set)));
        self
    }

    /// The term matches one character not in the given set.
    pub fn not_from_chars(self, set: &[char]) -> Self {
        let set: String = set.iter().collect();
        self.not_from(&set)
    }

    /// The term matches `sub`'s flushed literal, taken verbatim as a raw
    /// sub-pattern with no further escaping.
    pub fn like(mut self, sub: PatternBuilder) -> Self {
        if let Some(pattern) = self.sub_literal(sub) {
            self.term.content = Some(Content::SubPattern(pattern));
        }
        self
    }

    // === Modifiers ===

    /// Quantify the pending term reluctantly (prefer the shortest match).
    pub fn reluctantly(mut self) -> Self {
        self.term.reluctant = true;
        self
    }

    /// Emit the pending term as a capturing group instead of the default
    /// non-capturing group.
    pub fn as_group(mut self) -> Self {
        self.term.capture = true;
        self
    }

    /// Assert that `sub`'s pattern follows the pending term, without
    /// consuming it (positive lookahead).
    pub fn behind(mut self, sub: PatternBuilder) -> Self {
        self.term.behind = self.sub_literal(sub);
        self
    }

    /// Assert that `sub`'s pattern does *not* follow the pending term
    /// (negative lookahead).
    pub fn not_behind(mut self, sub: PatternBuilder) -> Self {
        self.term.not_behind = self.sub_literal(sub);
        self
    }

    // === Anchors ===

    /// Append a start-of-input anchor. Appends directly, without committing
    /// the pending term.
    pub fn start(mut self) -> Self {
        self.literal.push_str("(?:^)");
        self
    }

    /// Commit the pending term, then append an end-of-input anchor.
    pub fn end(mut self) -> Self {
        self.flush();
        self.literal.push_str("(?:$)");
        self
    }

    // === Alternation ===

    /// Commit the pending term and stash `expr` as the left branch of an
    /// alternation, to be completed by [`or`](Self::or).
    pub fn either(mut self, expr: impl Expression) -> Self {
        self.flush();
        self.either = self.resolve(expr);
        self
    }

    /// Complete the alternation started by [`either`](Self::either),
    /// appending `(?:(?:left)|(?:right))`. Calling `or` without a stashed
    /// left branch is a hard error, reported at the next terminal call.
    ///
    /// ```
    /// use refluent::PatternBuilder;
    ///
    /// let literal = PatternBuilder::new().either("a").or("b").literal().unwrap();
    /// assert_eq!(literal, r"(?:(?:a)|(?:b))");
    /// ```
    pub fn or(mut self, expr: impl Expression) -> Self {
        let Some(left) = self.either.take() else {
            self.fail(Error::OrWithoutEither);
            return self;
        };
        if let Some(right) = self.resolve(expr) {
            self.literal.push_str("(?:(?:");
            self.literal.push_str(&left);
            self.literal.push_str(")|(?:");
            self.literal.push_str(&right);
            self.literal.push_str("))");
        }
        self.term = Term::default();
        self
    }

    // === Convenience combinators ===

    /// Exactly one occurrence of `text`. Alias for [`then`](Self::then).
    pub fn find(self, text: &str) -> Self {
        self.then(text)
    }

    /// Exactly one occurrence of `text`, escaped.
    pub fn then(self, text: &str) -> Self {
        self.exactly(1).of(text)
    }

    /// One or more characters from `set`.
    pub fn some(self, set: &str) -> Self {
        self.min(1).from(set)
    }

    /// Zero or more characters from `set`.
    pub fn maybe_some(self, set: &str) -> Self {
        self.min(0).from(set)
    }

    /// Zero or one occurrence of `text`.
    pub fn maybe(self, text: &str) -> Self {
        self.max(1).of(text)
    }

    /// One or more of any character.
    pub fn anything(self) -> Self {
        self.min(1).of_any()
    }

    /// A line break: CRLF, CR or LF.
    pub fn line_break(self) -> Self {
        self.either(r"\r\n")
            .or(PatternBuilder::new().either(r"\r").or(r"\n"))
    }

    /// Line breaks, quantified by a preceding `min`/`max`/`exactly`.
    pub fn line_breaks(self) -> Self {
        self.like(PatternBuilder::new().line_break())
    }

    /// Whitespace. Exactly one occurrence unless a quantity is already
    /// pending, in which case that quantity applies.
    pub fn whitespace(mut self) -> Self {
        if self.term.has_quantity() && self.term.content.is_none() {
            self.term.content = Some(Content::SubPattern(r"\s".to_owned()));
            return self;
        }
        self.exactly(1).of(r"\s")
    }

    /// Exactly one tab.
    pub fn tab(self) -> Self {
        self.exactly(1).of(r"\t")
    }

    /// Tabs, quantified by a preceding `min`/`max`/`exactly`.
    pub fn tabs(self) -> Self {
        self.like(PatternBuilder::new().tab())
    }

    /// Exactly one digit.
    pub fn digit(self) -> Self {
        self.exactly(1).of(r"\d")
    }

    /// Digits, quantified by a preceding `min`/`max`/`exactly`.
    ///
    /// ```
    /// use refluent::PatternBuilder;
    ///
    /// let re = PatternBuilder::new().min(2).digits().compile().unwrap();
    /// assert!(re.is_match("42").unwrap());
    /// assert!(!re.is_match("4").unwrap());
    /// ```
    pub fn digits(self) -> Self {
        self.like(PatternBuilder::new().digit())
    }

    /// Exactly one ASCII letter.
    pub fn letter(mut self) -> Self {
        self = self.exactly(1);
        self.term.content = Some(Content::Class("A-Za-z".to_owned()));
        self
    }

    /// ASCII letters, quantified by a preceding `min`/`max`/`exactly`.
    pub fn letters(mut self) -> Self {
        self.term.content = Some(Content::Class("A-Za-z".to_owned()));
        self
    }

    /// Exactly one lower-case ASCII letter.
    pub fn lower_case_letter(mut self) -> Self {
        self = self.exactly(1);
        self.term.content = Some(Content::Class("a-z".to_owned()));
        self
    }

    /// Lower-case ASCII letters, quantified by a preceding
    /// `min`/`max`/`exactly`.
    pub fn lower_case_letters(mut self) -> Self {
        self.term.content = Some(Content::Class("a-z".to_owned()));
        self
    }

    /// Exactly one upper-case ASCII letter.
    pub fn upper_case_letter(mut self) -> Self {
        self = self.exactly(1);
        self.term.content = Some(Content::Class("A-Z".to_owned()));
        self
    }

    /// Upper-case ASCII letters, quantified by a preceding
    /// `min`/`max`/`exactly`.
    pub fn upper_case_letters(mut self) -> Self {
        self.term.content = Some(Content::Class("A-Z".to_owned()));
        self
    }

    /// Exactly one occurrence of `sub`'s pattern.
    pub fn append(self, sub: PatternBuilder) -> Self {
        self.exactly(1).like(sub)
    }

    /// Zero or one occurrence of `sub`'s pattern.
    pub fn optional(self, sub: PatternBuilder) -> Self {
        self.max(1).like(sub)
    }

    // === Terminal operations ===

    /// Commit the pending term and return the accumulated pattern text.
    ///
    /// Reports the first protocol-misuse error recorded during the chain,
    /// if any. Idempotent: a second call without intervening mutators
    /// returns the same result.
    pub fn literal(&mut self) -> Result<String, Error> {
        self.flush();
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.literal.clone()),
        }
    }

    /// Commit the pending term and compile the accumulated pattern text,
    /// with the builder's flags, into a [`Regex`].
    ///
    /// Engine errors for malformed raw sub-patterns are propagated
    /// unchanged as [`Error::Compile`].
    pub fn compile(&mut self) -> Result<Regex, Error> {
        let literal = self.literal()?;
        let pattern = format!("{}{}", self.flags.inline_prefix(), literal);
        Regex::new(&pattern).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quantity_setter_commits_previous_term() {
        let literal = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .exactly(2)
            .of("b")
            .literal()
            .unwrap();
        assert_eq!(literal, r"(?:(?:a){1,1})(?:(?:b){2,2})");
    }

    #[test]
    fn modifiers_survive_a_content_less_flush() {
        // as_group before the quantity setter: the flush triggered by
        // exactly() must not wipe the capture request.
        let literal = PatternBuilder::new()
            .as_group()
            .exactly(1)
            .of("x")
            .literal()
            .unwrap();
        assert_eq!(literal, r"((?:x){1,1})");
    }

    #[test]
    fn term_state_resets_after_flush() {
        let literal = PatternBuilder::new()
            .as_group()
            .exactly(1)
            .of("a")
            .exactly(1)
            .of("b")
            .literal()
            .unwrap();
        // The second term is non-capturing again.
        assert_eq!(literal, r"((?:a){1,1})(?:(?:b){1,1})");
    }

    #[test]
    fn whitespace_respects_pending_quantity() {
        let mut exactly_one = PatternBuilder::new().whitespace();
        assert_eq!(exactly_one.literal().unwrap(), r"(?:(?:\s){1,1})");

        let mut quantified = PatternBuilder::new().min(2).whitespace();
        assert_eq!(quantified.literal().unwrap(), r"(?:(?:\s){2,})");
    }

    #[test]
    fn later_content_setter_overwrites_earlier() {
        let literal = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .of_any()
            .literal()
            .unwrap();
        assert_eq!(literal, r"(?:(?:.){1,1})");
    }

    #[test]
    fn sub_builder_error_propagates_through_like() {
        // The sub-builder's term has content but no quantity.
        let err = PatternBuilder::new()
            .exactly(1)
            .like(PatternBuilder::new().of("a"))
            .literal()
            .unwrap_err();
        assert!(matches!(err, Error::NoQuantitySpecified));
    }

    #[test]
    fn first_error_wins() {
        let err = PatternBuilder::new()
            .of("a") // no quantity
            .or("b") // stray or
            .literal()
            .unwrap_err();
        // or() records the stray-or error and resets the pending term, so
        // the missing quantity is never reached.
        assert!(matches!(err, Error::OrWithoutEither));
    }

    #[test]
    fn flags_survive_flushes() {
        let mut builder = PatternBuilder::new().ignore_case().then("a").then("b");
        builder.literal().unwrap();
        assert_eq!(builder.flags(), Flags::IGNORE_CASE);
    }
}
