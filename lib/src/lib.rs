//! A library for running Life-like cellular automata.
//!
//! A [`Pattern`] is decoded from the
//! [RLE format](https://conwaylife.com/wiki/Run_Length_Encoded), placed at the
//! center of a [`Simulation`], and evolved one generation at a time. Each step
//! returns an [`Evolution`] with the cells that changed.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod config;
mod error;
mod evolution;
mod grid;
mod pattern;
mod rle;
mod simulation;

pub use config::Config;
pub use error::{ConfigError, MalformedPatternError};
pub use evolution::{EvolvedCell, Evolution};
pub use grid::Grid;
pub use pattern::Pattern;
pub use rlelife_rules::{BuiltinRule, Rule, UnsupportedRuleError};
pub use simulation::{Simulation, Status};
