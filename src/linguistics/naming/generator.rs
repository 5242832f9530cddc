//! Name generation from name pools.
//!
//! Every generator returns `None` only when the resolved pool is empty,
//! i.e. neither the family chain nor the default pools hold a word.

use rand::Rng;

use crate::linguistics::categories::{
    ArticleType, ComparisonDegree, Gender, GrammaticalCase, GrammaticalNumber, WordJunctionType, WordType,
};
use crate::linguistics::{FamilyId, Lexicon, WordId};

/// Name generator that renders words drawn from a lexicon's pools.
pub struct NameGenerator;

impl NameGenerator {
    /// Pick a word uniformly from a pool.
    pub fn pick(words: &[WordId], rng: &mut impl Rng) -> Option<WordId> {
        if words.is_empty() {
            return None;
        }
        Some(words[rng.gen_range(0..words.len())])
    }

    /// Nominative form of a name word, capitalized. Adjectives agree with
    /// `gender`; words with an inherent number keep it.
    pub fn render(lexicon: &Lexicon, word: WordId, gender: Gender) -> String {
        let entry = lexicon.word(word);
        let number = if entry.number.is_none() {
            GrammaticalNumber::Singular
        } else {
            entry.number
        };

        let form = match entry.word_type {
            WordType::Adjective => lexicon.adjective_inflection(
                word,
                ComparisonDegree::Positive,
                ArticleType::None,
                GrammaticalCase::Nominative,
                number,
                gender,
            ),
            _ => lexicon.noun_inflection(word, number, GrammaticalCase::Nominative, WordJunctionType::None),
        };
        capitalize(&form)
    }

    /// Generate a given name (e.g. "Marcus").
    pub fn personal_name(lexicon: &Lexicon, family: FamilyId, gender: Gender, rng: &mut impl Rng) -> Option<String> {
        let word = Self::pick(lexicon.personal_name_words(family, gender), rng)?;
        Some(Self::render(lexicon, word, gender))
    }

    /// Generate a given name followed by a family name when one is available
    /// (e.g. "Lucius Valerius").
    pub fn full_name(lexicon: &Lexicon, family: FamilyId, gender: Gender, rng: &mut impl Rng) -> Option<String> {
        let given = Self::personal_name(lexicon, family, gender, rng)?;
        match Self::pick(lexicon.surname_words(family), rng) {
            Some(surname) => Some(format!("{} {}", given, Self::render(lexicon, surname, gender))),
            None => Some(given),
        }
    }

    /// Generate a ship name, preceded by the definite article of the
    /// word's language if it has one (e.g. "La Fortuna").
    pub fn ship_name(lexicon: &Lexicon, family: FamilyId, rng: &mut impl Rng) -> Option<String> {
        let word = Self::pick(lexicon.ship_name_words(family), rng)?;
        let entry = lexicon.word(word);
        let name = Self::render(lexicon, word, entry.gender);

        let article = entry
            .language()
            .map(|language| {
                lexicon.article(
                    language,
                    ArticleType::Definite,
                    entry.gender,
                    GrammaticalNumber::Singular,
                    GrammaticalCase::Nominative,
                )
            })
            .unwrap_or_default();

        if article.is_empty() {
            Some(name)
        } else {
            Some(format!("{} {}", capitalize(&article), name))
        }
    }

    /// Generate a settlement name (e.g. "Castra").
    pub fn settlement_name(lexicon: &Lexicon, family: FamilyId, rng: &mut impl Rng) -> Option<String> {
        let word = Self::pick(lexicon.settlement_name_words(family), rng)?;
        Some(Self::render(lexicon, word, lexicon.word(word).gender))
    }

    /// Generate a military unit name for a unit class.
    pub fn unit_name(lexicon: &Lexicon, family: FamilyId, unit_class: &str, rng: &mut impl Rng) -> Option<String> {
        let word = Self::pick(lexicon.unit_name_words(family, unit_class), rng)?;
        Some(Self::render(lexicon, word, Gender::None))
    }

    /// Generate a name for an individual of a species.
    pub fn specimen_name(
        lexicon: &Lexicon,
        family: FamilyId,
        species: &str,
        gender: Gender,
        rng: &mut impl Rng,
    ) -> Option<String> {
        let word = Self::pick(lexicon.specimen_name_words(family, species, gender), rng)?;
        Some(Self::render(lexicon, word, gender))
    }

    /// Name of a people from a demonym noun: its plural nominative, or
    /// its own number if it has one (e.g. "Romani").
    pub fn people_name(lexicon: &Lexicon, demonym: WordId) -> String {
        let entry = lexicon.word(demonym);
        let number = if entry.number.is_none() {
            GrammaticalNumber::Plural
        } else {
            entry.number
        };
        capitalize(&lexicon.noun_inflection(demonym, number, GrammaticalCase::Nominative, WordJunctionType::None))
    }

    /// Faction name built from a demonym (e.g. "The Romani").
    pub fn faction_name(lexicon: &Lexicon, demonym: WordId) -> String {
        format!("The {}", Self::people_name(lexicon, demonym))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
