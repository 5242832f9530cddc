//! Data-driven lexicon loading.
//!
//! Loads families, languages and words from JSON definition files. A
//! default lexicon is embedded in the binary via `include_str!`; a data
//! directory can add to it or refine it.

pub mod definitions;

use std::fs;
use std::path::{Path, PathBuf};

pub use definitions::{apply, DefinitionsFile, WordReference};

use super::error::Result;
use super::Lexicon;

// Embedded default data file
const DEFAULT_LEXICON_JSON: &str = include_str!("../../../data/defaults/lexicon.json");

/// Apply a JSON definitions document to the lexicon.
pub fn apply_str(lexicon: &mut Lexicon, json: &str) -> Result<()> {
    let file: DefinitionsFile = serde_json::from_str(json)?;
    apply(lexicon, &file)
}

/// Apply a JSON definitions file to the lexicon.
pub fn apply_file(lexicon: &mut Lexicon, path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "loading definitions");
    let contents = fs::read_to_string(path)?;
    apply_str(lexicon, &contents)
}

/// Load the embedded default lexicon.
pub fn defaults() -> Result<Lexicon> {
    let mut lexicon = Lexicon::default();
    apply_str(&mut lexicon, DEFAULT_LEXICON_JSON)?;
    finish(&mut lexicon)?;
    Ok(lexicon)
}

/// Load the embedded defaults, then every `*.json` file of `dir` in file
/// name order. A missing directory leaves the defaults unchanged.
pub fn load_from(dir: &Path) -> Result<Lexicon> {
    let mut lexicon = Lexicon::default();
    apply_str(&mut lexicon, DEFAULT_LEXICON_JSON)?;

    if dir.is_dir() {
        for path in definition_files(dir)? {
            apply_file(&mut lexicon, &path)?;
        }
    } else {
        tracing::warn!(dir = %dir.display(), "data directory not found, using defaults");
    }

    finish(&mut lexicon)?;
    Ok(lexicon)
}

fn definition_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn finish(lexicon: &mut Lexicon) -> Result<()> {
    if lexicon.config.validate_on_load {
        lexicon.check_all()?;
    }
    Ok(())
}
