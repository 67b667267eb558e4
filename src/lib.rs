//! # Refluent
//!
//! A fluent builder that assembles regular-expression pattern text from a
//! chain of human-readable method calls, then compiles it into a
//! [`fancy_regex::Regex`]. Write patterns without hand-writing regex syntax;
//! standard regex text is emitted underneath.
//!
//! ## Quick Start
//!
//! ```rust
//! use refluent::PatternBuilder;
//!
//! let re = PatternBuilder::new()
//!     .start()
//!     .min(1)
//!     .lower_case_letters()
//!     .digit()
//!     .end()
//!     .compile()
//!     .unwrap();
//! assert!(re.is_match("abc1").unwrap());
//! assert!(!re.is_match("1abc").unwrap());
//! ```
//!
//! The emitted pattern text can also be read directly:
//!
//! ```rust
//! use refluent::PatternBuilder;
//!
//! let literal = PatternBuilder::new()
//!     .either("cat")
//!     .or("dog")
//!     .literal()
//!     .unwrap();
//! assert_eq!(literal, r"(?:(?:cat)|(?:dog))");
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`builder`] | The fluent [`PatternBuilder`] surface |
//! | `term` (private) | Pending-term state and fragment rendering |
//! | `escape` (private) | Character-escaping tables and routine |
//! | [`flags`] | Compile-time [`Flags`] |
//! | [`error`] | The [`Error`] type |
//! | [`prelude`] | Convenient re-exports |
//!
//! Matching itself is delegated to the [`fancy-regex`](fancy_regex) engine,
//! which supports every construct this builder emits, including the
//! lookahead assertions produced by [`PatternBuilder::behind`] and
//! [`PatternBuilder::not_behind`].

pub mod builder;
pub mod error;
pub mod flags;
pub mod prelude;

mod escape;
mod term;

pub use crate::builder::{Expression, PatternBuilder};
pub use crate::error::Error;
pub use crate::flags::Flags;

// The engine's pattern type, as returned by `PatternBuilder::compile`.
pub use fancy_regex::Regex;
