//! Textgen — random text generation from first-order Markov chains.
//!
//! Reads a whitespace-delimited corpus, records which word follows which
//! (keeping duplicates so frequent transitions are proportionally more
//! likely), then walks the chain at random to produce new text.

pub mod config;
pub mod core;

pub use crate::config::{ConfigError, TextgenConfig};
pub use crate::core::markov::{MarkovChain, MarkovError};
