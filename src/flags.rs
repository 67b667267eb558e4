// flags.rs - Compile-time flag set for the assembled pattern.

use bitflags::bitflags;

bitflags! {
    /// Flags applied when the assembled pattern is handed to the regex
    /// engine. They live on the builder for its whole lifetime and are
    /// consumed only at compile time; flushing terms never touches them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        /// Case-insensitive matching (the engine's `i` flag).
        const IGNORE_CASE = 1 << 0;
        /// `^` and `$` match at line boundaries (the engine's `m` flag).
        const MULTI_LINE = 1 << 1;
    }
}

impl Flags {
    /// The inline flag group the engine understands, prefixed to the
    /// pattern text at compile time. Empty when no flag is set.
    pub(crate) fn inline_prefix(self) -> &'static str {
        match (
            self.contains(Flags::IGNORE_CASE),
            self.contains(Flags::MULTI_LINE),
        ) {
            (true, true) => "(?im)",
            (true, false) => "(?i)",
            (false, true) => "(?m)",
            (false, false) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_prefix_covers_all_combinations() {
        assert_eq!(Flags::empty().inline_prefix(), "");
        assert_eq!(Flags::IGNORE_CASE.inline_prefix(), "(?i)");
        assert_eq!(Flags::MULTI_LINE.inline_prefix(), "(?m)");
        assert_eq!((Flags::IGNORE_CASE | Flags::MULTI_LINE).inline_prefix(), "(?im)");
    }
}
