//! Lexical entries.
//!
//! A `Word` carries its grammatical properties and any irregular forms.
//! Links to other entities (owning language, etymon, reflexes, compound
//! elements) are arena indices maintained by the `Lexicon` so that both
//! directions of every link stay in sync.

use std::collections::{BTreeSet, HashMap};

use super::categories::{
    AffixType, ArticleType, ComparisonDegree, Gender, GrammaticalCase, GrammaticalMood,
    GrammaticalNumber, GrammaticalPerson, GrammaticalTense, WordType,
};
use super::error::Result;
use super::{Entity, LanguageId, Lexicon, WordId};

/// Key of a verb form override.
pub type VerbFormKey = (GrammaticalNumber, GrammaticalPerson, GrammaticalTense, GrammaticalMood);

/// A single lexical entry of a language.
#[derive(Clone, Debug)]
pub struct Word {
    pub id: WordId,
    pub identifier: String,
    /// Bare form; every inflection falls back to it.
    pub name: String,
    pub word_type: WordType,
    pub gender: Gender,
    /// Inherent number for words that only exist in one number ("scissors").
    pub number: GrammaticalNumber,
    pub archaic: bool,
    pub meanings: Vec<String>,

    // --- Links (maintained by the lexicon) ---
    pub(crate) language: Option<LanguageId>,
    pub(crate) etymon: Option<WordId>,
    pub(crate) reflexes: Vec<WordId>,
    pub(crate) compound_elements: Vec<WordId>,
    pub(crate) compound_element_of: Vec<WordId>,

    // --- Irregular forms ---
    pub noun_forms: HashMap<(GrammaticalNumber, GrammaticalCase), String>,
    pub verb_forms: HashMap<VerbFormKey, String>,
    pub adjective_forms: HashMap<(ComparisonDegree, GrammaticalCase), String>,
    pub participles: HashMap<GrammaticalTense, String>,

    // --- Class-specific ---
    /// Case forms of pronouns and articles.
    pub case_forms: HashMap<GrammaticalCase, String>,
    pub article_type: ArticleType,
    pub numeral_value: Option<i64>,
    pub affix_type: AffixType,
}

impl Word {
    pub fn new(id: WordId, identifier: impl Into<String>) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            name: String::new(),
            word_type: WordType::None,
            gender: Gender::None,
            number: GrammaticalNumber::None,
            archaic: false,
            meanings: Vec::new(),
            language: None,
            etymon: None,
            reflexes: Vec::new(),
            compound_elements: Vec::new(),
            compound_element_of: Vec::new(),
            noun_forms: HashMap::new(),
            verb_forms: HashMap::new(),
            adjective_forms: HashMap::new(),
            participles: HashMap::new(),
            case_forms: HashMap::new(),
            article_type: ArticleType::None,
            numeral_value: None,
            affix_type: AffixType::None,
        }
    }

    pub fn language(&self) -> Option<LanguageId> {
        self.language
    }

    /// The word this one derives from.
    pub fn etymon(&self) -> Option<WordId> {
        self.etymon
    }

    /// Words that derive from this one, in the order they were linked.
    pub fn reflexes(&self) -> &[WordId] {
        &self.reflexes
    }

    pub fn compound_elements(&self) -> &[WordId] {
        &self.compound_elements
    }

    /// Compounds that use this word as an element.
    pub fn compound_element_of(&self) -> &[WordId] {
        &self.compound_element_of
    }

    /// Whether the word's meanings equal `meanings` as sets.
    pub fn has_meanings(&self, meanings: &[String]) -> bool {
        let own: BTreeSet<&str> = self.meanings.iter().map(String::as_str).collect();
        let wanted: BTreeSet<&str> = meanings.iter().map(String::as_str).collect();
        own == wanted
    }

    // === Override setters ===

    pub fn set_noun_form(&mut self, number: GrammaticalNumber, case: GrammaticalCase, form: impl Into<String>) {
        self.noun_forms.insert((number, case), form.into());
    }

    pub fn set_verb_form(
        &mut self,
        number: GrammaticalNumber,
        person: GrammaticalPerson,
        tense: GrammaticalTense,
        mood: GrammaticalMood,
        form: impl Into<String>,
    ) {
        self.verb_forms.insert((number, person, tense, mood), form.into());
    }

    pub fn set_adjective_form(&mut self, degree: ComparisonDegree, case: GrammaticalCase, form: impl Into<String>) {
        self.adjective_forms.insert((degree, case), form.into());
    }

    pub fn set_participle(&mut self, tense: GrammaticalTense, form: impl Into<String>) {
        self.participles.insert(tense, form.into());
    }

    pub fn set_case_form(&mut self, case: GrammaticalCase, form: impl Into<String>) {
        self.case_forms.insert(case, form.into());
    }

    // === Overrides without regular fallback ===

    /// Verb form for the coordinate, or the bare name. Verbs have no
    /// regular endings.
    pub fn verb_inflection(
        &self,
        number: GrammaticalNumber,
        person: GrammaticalPerson,
        tense: GrammaticalTense,
        mood: GrammaticalMood,
    ) -> String {
        self.verb_forms
            .get(&(number, person, tense, mood))
            .cloned()
            .unwrap_or_else(|| self.name.clone())
    }

    pub fn participle(&self, tense: GrammaticalTense) -> String {
        self.participles.get(&tense).cloned().unwrap_or_else(|| self.name.clone())
    }

    /// Case form of a pronoun or article: the exact case, then the
    /// caseless form, then the bare name.
    pub fn case_form(&self, case: GrammaticalCase) -> String {
        self.case_forms
            .get(&case)
            .or_else(|| self.case_forms.get(&GrammaticalCase::None))
            .cloned()
            .unwrap_or_else(|| self.name.clone())
    }

    /// Whether the word can stand in for the requested gender and number.
    /// `None` on either side matches anything.
    pub fn agrees_with(&self, gender: Gender, number: GrammaticalNumber) -> bool {
        let gender_ok = self.gender.is_none() || gender.is_none() || self.gender == gender;
        let number_ok = self.number.is_none() || number.is_none() || self.number == number;
        gender_ok && number_ok
    }
}

impl Entity for Word {
    const KIND: &'static str = "word";

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn check(&self, lexicon: &Lexicon) -> Result<()> {
        let Some(language) = self.language else {
            return Err(self.invalid("has no language"));
        };

        if !lexicon.language(language).words().contains(&self.id) {
            return Err(self.invalid("is not listed among its language's words"));
        }

        if self.word_type.is_none() {
            return Err(self.invalid("has no word type"));
        }

        if self.name.is_empty() {
            return Err(self.invalid("has no name"));
        }

        if self.etymon.is_some() && !self.compound_elements.is_empty() {
            return Err(self.invalid("has both an etymon and compound elements"));
        }

        if self.word_type != WordType::Affix && !self.affix_type.is_none() {
            return Err(self.invalid("has an affix type but is not an affix"));
        }

        Ok(())
    }
}
