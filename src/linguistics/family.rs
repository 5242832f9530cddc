//! Language families and name-pool inheritance.
//!
//! Families form a tree. Every word added to a family's name pool is also
//! added to the same pool of each ancestor, so an ancestor's pool holds
//! everything its subtree contributed. Resolution prefers a family's own
//! pool once it is large enough and otherwise walks up the tree, ending at
//! the lexicon-wide default pools.

use std::collections::HashMap;

use super::categories::Gender;
use super::error::Result;
use super::{Entity, FamilyId, LanguageId, Lexicon, WordId};

/// A name-generation axis and its key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamePool {
    /// Given names for people of a gender.
    Personal(Gender),
    /// Family names.
    Surname,
    /// Names for individuals of a species.
    Specimen { species: String, gender: Gender },
    /// Names for military units of a class.
    Unit(String),
    Ship,
    Settlement,
}

/// Word pools keyed by axis.
#[derive(Clone, Debug, Default)]
pub struct NamePools {
    pools: HashMap<NamePool, Vec<WordId>>,
}

impl NamePools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words of a pool; empty if nothing was ever added to it.
    pub fn get(&self, pool: &NamePool) -> &[WordId] {
        self.pools.get(pool).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn add(&mut self, pool: NamePool, word: WordId) {
        self.pools.entry(pool).or_default().push(word);
    }

    pub fn is_empty(&self) -> bool {
        self.pools.values().all(Vec::is_empty)
    }

    /// Every (pool, word) pair held.
    pub fn entries(&self) -> impl Iterator<Item = (&NamePool, WordId)> + '_ {
        self.pools
            .iter()
            .flat_map(|(pool, words)| words.iter().map(move |&word| (pool, word)))
    }

    /// Remove one occurrence of `word` from a pool.
    pub fn remove(&mut self, pool: &NamePool, word: WordId) {
        if let Some(words) = self.pools.get_mut(pool) {
            if let Some(at) = words.iter().position(|&w| w == word) {
                words.remove(at);
            }
        }
    }
}

/// A node of the language family tree.
#[derive(Clone, Debug)]
pub struct LanguageFamily {
    pub id: FamilyId,
    pub identifier: String,
    pub name: String,

    pub(crate) family: Option<FamilyId>,
    pub(crate) subfamilies: Vec<FamilyId>,
    pub(crate) languages: Vec<LanguageId>,

    /// Pools holding this family's words and those of its subtree.
    pub(crate) pools: NamePools,
}

impl LanguageFamily {
    pub fn new(id: FamilyId, identifier: impl Into<String>) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            name: String::new(),
            family: None,
            subfamilies: Vec::new(),
            languages: Vec::new(),
            pools: NamePools::new(),
        }
    }

    /// The parent family.
    pub fn family(&self) -> Option<FamilyId> {
        self.family
    }

    pub fn subfamilies(&self) -> &[FamilyId] {
        &self.subfamilies
    }

    pub fn languages(&self) -> &[LanguageId] {
        &self.languages
    }

    pub fn pools(&self) -> &NamePools {
        &self.pools
    }
}

impl Entity for LanguageFamily {
    const KIND: &'static str = "language family";

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn check(&self, lexicon: &Lexicon) -> Result<()> {
        if ancestors(lexicon, self.family).any(|ancestor| ancestor == self.id) {
            return Err(self.invalid("is its own ancestor"));
        }

        if let Some(parent) = self.family {
            if !lexicon.family(parent).subfamilies.contains(&self.id) {
                return Err(self.invalid("is missing from its parent's subfamilies"));
            }
        }

        Ok(())
    }
}

/// Iterate `start` and its ancestors, nearest first. Stops after visiting
/// as many families as the lexicon holds, so a cycle cannot loop forever.
pub fn ancestors(lexicon: &Lexicon, start: Option<FamilyId>) -> impl Iterator<Item = FamilyId> + '_ {
    let limit = lexicon.families().len();
    std::iter::successors(start, move |&id| lexicon.family(id).family).take(limit)
}

/// Resolve the pool a family should draw names from.
///
/// Returns the first pool, walking up from `family`, that holds at least
/// `minimum_pool_size` words. A family without a parent whose pool is too
/// small defers to the default pools, whatever their size.
pub fn resolve_pool<'a>(lexicon: &'a Lexicon, family: Option<FamilyId>, pool: &NamePool) -> &'a [WordId] {
    let minimum = lexicon.config.minimum_pool_size;

    for id in ancestors(lexicon, family) {
        let words = lexicon.family(id).pools.get(pool);
        if words.len() >= minimum {
            return words;
        }
    }

    tracing::debug!(?pool, ?family, "name pool falls back to the default pool");
    lexicon.default_pools().get(pool)
}
