//! Core text generation: tokenizing corpora and walking Markov chains.

pub mod markov;
pub mod tokenizer;
