//! Rules of the Life-like cellular automata understood by `rlelife`.
//!
//! Rules are looked up by their rule string with [`Rule::lookup`]. An unknown
//! rule string is not an error at lookup time. It produces
//! [`Rule::Unsupported`], which should be detected with [`Rule::check`]
//! before a simulation is started.

#![warn(clippy::missing_const_for_fn)]
#![warn(missing_docs)]

mod error;
mod rule;

pub use error::UnsupportedRuleError;
pub use rule::{BuiltinRule, Rule};
