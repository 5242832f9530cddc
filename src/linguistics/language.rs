//! Languages and their regular ending tables.

use std::collections::HashMap;

use super::categories::{ArticleType, Gender, GrammaticalCase, GrammaticalNumber, WordJunctionType, WordType};
use super::error::Result;
use super::{Entity, FamilyId, LanguageId, Lexicon, WordId};

/// Key of the regular noun ending table.
pub type NounEndingKey = (GrammaticalNumber, GrammaticalCase, WordJunctionType);
/// Key of the regular adjective ending table.
pub type AdjectiveEndingKey = (ArticleType, GrammaticalCase, GrammaticalNumber, Gender);

/// A constructed language: member words plus regular inflection rules.
#[derive(Clone, Debug)]
pub struct Language {
    pub id: LanguageId,
    pub identifier: String,
    pub name: String,

    pub(crate) family: Option<FamilyId>,
    pub(crate) dialect_of: Option<LanguageId>,
    pub(crate) dialects: Vec<LanguageId>,
    pub(crate) words: Vec<WordId>,

    pub noun_endings: HashMap<NounEndingKey, String>,
    pub adjective_endings: HashMap<AdjectiveEndingKey, String>,
}

impl Language {
    pub fn new(id: LanguageId, identifier: impl Into<String>) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            name: String::new(),
            family: None,
            dialect_of: None,
            dialects: Vec::new(),
            words: Vec::new(),
            noun_endings: HashMap::new(),
            adjective_endings: HashMap::new(),
        }
    }

    pub fn family(&self) -> Option<FamilyId> {
        self.family
    }

    /// The language this one is a dialect of.
    pub fn dialect_of(&self) -> Option<LanguageId> {
        self.dialect_of
    }

    pub fn dialects(&self) -> &[LanguageId] {
        &self.dialects
    }

    /// Member words in declaration order.
    pub fn words(&self) -> &[WordId] {
        &self.words
    }

    /// Remove every occurrence of `word`; removing an absent word is a no-op.
    pub fn remove_word(&mut self, word: WordId) {
        self.words.retain(|w| *w != word);
    }

    // === Ending tables ===

    pub fn set_noun_ending(
        &mut self,
        number: GrammaticalNumber,
        case: GrammaticalCase,
        junction: WordJunctionType,
        ending: impl Into<String>,
    ) {
        self.noun_endings.insert((number, case, junction), ending.into());
    }

    pub fn set_adjective_ending(
        &mut self,
        article_type: ArticleType,
        case: GrammaticalCase,
        number: GrammaticalNumber,
        gender: Gender,
        ending: impl Into<String>,
    ) {
        self.adjective_endings.insert((article_type, case, number, gender), ending.into());
    }

    /// Regular noun ending. Misses retry without a junction, then give
    /// an empty ending.
    pub fn noun_ending(&self, number: GrammaticalNumber, case: GrammaticalCase, junction: WordJunctionType) -> String {
        self.noun_endings
            .get(&(number, case, junction))
            .or_else(|| self.noun_endings.get(&(number, case, WordJunctionType::None)))
            .cloned()
            .unwrap_or_default()
    }

    /// Regular adjective ending. Misses retry without gender at the same
    /// number, then without number and gender, then give an empty ending.
    pub fn adjective_ending(
        &self,
        article_type: ArticleType,
        case: GrammaticalCase,
        number: GrammaticalNumber,
        gender: Gender,
    ) -> String {
        self.adjective_endings
            .get(&(article_type, case, number, gender))
            .or_else(|| self.adjective_endings.get(&(article_type, case, number, Gender::None)))
            .or_else(|| {
                self.adjective_endings
                    .get(&(article_type, case, GrammaticalNumber::None, Gender::None))
            })
            .cloned()
            .unwrap_or_default()
    }

    // === Word lookup ===

    /// First member word (in declaration order) named `name`. The word type
    /// is only compared when not `None`, the meanings only when non-empty,
    /// and then by set equality. Does not search parent languages; see
    /// `Lexicon::find_word` for dialect-aware lookup.
    pub fn find_word(&self, lexicon: &Lexicon, name: &str, word_type: WordType, meanings: &[String]) -> Option<WordId> {
        self.words.iter().copied().find(|&id| {
            let word = lexicon.word(id);
            word.name == name
                && (word_type.is_none() || word.word_type == word_type)
                && (meanings.is_empty() || word.has_meanings(meanings))
        })
    }

    /// First numeral word with the given value.
    pub fn find_numeral(&self, lexicon: &Lexicon, value: i64) -> Option<WordId> {
        self.words.iter().copied().find(|&id| {
            let word = lexicon.word(id);
            word.word_type == WordType::Numeral && word.numeral_value == Some(value)
        })
    }

    /// Member words of a given type, in declaration order.
    pub fn words_of_type<'a>(&'a self, lexicon: &'a Lexicon, word_type: WordType) -> impl Iterator<Item = WordId> + 'a {
        self.words
            .iter()
            .copied()
            .filter(move |&id| lexicon.word(id).word_type == word_type)
    }
}

impl Entity for Language {
    const KIND: &'static str = "language";

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn check(&self, lexicon: &Lexicon) -> Result<()> {
        for &id in &self.words {
            let word = lexicon.word(id);
            if word.language() != Some(self.id) {
                return Err(self.invalid(format!(
                    "lists word \"{}\" which belongs to another language",
                    word.identifier
                )));
            }
        }

        if let Some(parent) = self.dialect_of {
            if !lexicon.language(parent).dialects.contains(&self.id) {
                return Err(self.invalid("is missing from its parent language's dialects"));
            }
        }

        Ok(())
    }
}
