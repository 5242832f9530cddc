//! Configuration for the lexicon.

use serde::{Serialize, Deserialize};

/// Configuration parameters for lexicon loading and name-pool resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// A family's own name pool is used once it holds at least this many
    /// words; smaller pools defer to the parent family (default: 10).
    pub minimum_pool_size: usize,

    /// Run `check_all` after loading definitions (default: true).
    pub validate_on_load: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            minimum_pool_size: 10,
            validate_on_load: true,
        }
    }
}

impl LexiconConfig {
    /// Default configuration with a custom pool threshold.
    pub fn with_minimum_pool_size(minimum_pool_size: usize) -> Self {
        Self {
            minimum_pool_size,
            ..Self::default()
        }
    }
}
