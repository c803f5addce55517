/// Generator settings loaded from an optional RON file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Word count used when neither the command line nor a config file sets one.
pub const DEFAULT_WORDS: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Defaults for a generator run. Command-line flags override these.
///
/// ```ron
/// (
///     words: 50,
///     print: false,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextgenConfig {
    /// Number of words to generate.
    pub words: u32,
    /// Print the chain instead of generating text.
    pub print: bool,
}

impl Default for TextgenConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS,
            print: false,
        }
    }
}

impl TextgenConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TextgenConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string. Missing fields take their defaults.
    pub fn parse_ron(input: &str) -> Result<TextgenConfig, ConfigError> {
        Ok(ron::from_str(input)?)
    }
}
