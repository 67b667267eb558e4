// prelude.rs - Convenient re-exports for the fluent API.
//
//! # Prelude
//!
//! ```
//! use refluent::prelude::*;
//!
//! let re = PatternBuilder::new().min(2).digits().compile().unwrap();
//! assert!(re.is_match("42").unwrap());
//! ```

pub use crate::builder::{Expression, PatternBuilder};
pub use crate::error::Error;
pub use crate::flags::Flags;
pub use fancy_regex::Regex;
