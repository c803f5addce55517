/// Markov chain text generator — construction, re-seeding, generation, and printing.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::core::tokenizer::tokenize;

#[derive(Debug, Error)]
pub enum MarkovError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("could not open '{}' for reading: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A first-order Markov chain over lowercase words.
///
/// Each key maps to every word observed directly after it, in corpus order.
/// Duplicates are kept, so picking uniformly from a successor list is the
/// same as picking weighted by observed frequency.
///
/// # Invariants
/// - A key only exists together with at least one successor
/// - Keys iterate in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkovChain {
    edges: BTreeMap<String, Vec<String>>,
}

impl MarkovChain {
    /// Build a chain from a sequence of already case-folded tokens.
    ///
    /// Fewer than two tokens yields an empty chain.
    pub fn build<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut edges: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut tokens = tokens.into_iter();

        if let Some(mut previous) = tokens.next() {
            for current in tokens {
                // weighted by number of occurrences
                edges.entry(previous).or_default().push(current.clone());
                previous = current;
            }
        }

        Self { edges }
    }

    /// Tokenize raw text and build a chain from it.
    pub fn from_text(text: &str) -> Self {
        Self::build(tokenize(text))
    }

    /// Read a whole corpus from `reader` and build a chain from it.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, MarkovError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(&String::from_utf8_lossy(bytes))
    }

    /// Build a chain from the corpus file at `path`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `path` is empty
    /// - `Open` if the file cannot be opened
    /// - `Read` if reading the file fails
    ///
    /// An empty file is not an error; it produces an empty chain. Text that
    /// is not valid UTF-8 is decoded lossily.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MarkovError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(MarkovError::InvalidArgument(
                "corpus path must not be empty".to_owned(),
            ));
        }

        let mut file = File::open(path).map_err(|source| MarkovError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| MarkovError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let chain = Self::from_bytes(&bytes);
        debug!(
            path = %path.display(),
            keys = chain.len(),
            edges = chain.edge_count(),
            "built markov chain"
        );
        Ok(chain)
    }

    /// Replace this chain with one built from the corpus at `path`.
    ///
    /// The replacement is built completely before it is swapped in. On
    /// failure the current chain is left untouched and the error is returned.
    pub fn reseed_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MarkovError> {
        match Self::from_file(path.as_ref()) {
            Ok(chain) => {
                *self = chain;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "re-seed failed, keeping previous chain");
                Err(err)
            }
        }
    }

    /// Number of keys in the chain.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of stored transitions, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Observed successors of `word`, in corpus order.
    pub fn successors(&self, word: &str) -> Option<&[String]> {
        self.edges.get(word).map(Vec::as_slice)
    }

    /// Generate up to `count` words, starting from a key chosen uniformly
    /// at random.
    ///
    /// Returns fewer than `count` words if the walk reaches a word with no
    /// observed successor. Returns nothing if `count` is zero or the chain
    /// is empty.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }
        match self.edges.keys().choose(rng) {
            Some(start) => self.generate_from(rng, start, count),
            None => Vec::new(),
        }
    }

    /// Generate up to `count` words, starting from `start`.
    ///
    /// `start` is always emitted first (when `count > 0`), even if it is not
    /// a key; the walk then stops immediately.
    pub fn generate_from<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        start: &str,
        count: usize,
    ) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        let mut words = vec![start.to_owned()];
        let mut current = start;
        while words.len() < count {
            let next = match self.edges.get(current).and_then(|s| s.choose(rng)) {
                Some(next) => next,
                None => break,
            };
            words.push(next.clone());
            current = next.as_str();
        }

        trace!(requested = count, produced = words.len(), "walked chain");
        words
    }

    /// Generate up to `count` words from a thread-local, entropy-seeded RNG,
    /// joined with single spaces.
    pub fn generate_text(&self, count: usize) -> String {
        self.generate(&mut rand::thread_rng(), count).join(" ")
    }

    /// Write generated text of up to `count` words to `writer`.
    pub fn write_text<W: Write>(&self, writer: &mut W, count: usize) -> io::Result<()> {
        write!(writer, "{}", self.generate_text(count))
    }

    /// Write the chain to `writer`, one `key: [a, b, c]` line per key.
    pub fn write_chain<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (key, successors) in &self.edges {
            writeln!(writer, "{}: [{}]", key, successors.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for MarkovChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarkovChain (Chain Length: {})", self.len())
    }
}
