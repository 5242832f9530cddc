//! Definition file format and its application to a lexicon.
//!
//! Definitions name entities by identifier and set their fields one by one.
//! Applying a file creates missing entities and only overwrites the fields
//! the file sets, so several files can refine the same identifier.

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use crate::linguistics::categories::{
    AffixType, ArticleType, ComparisonDegree, Gender, GrammaticalCase, GrammaticalMood, GrammaticalNumber,
    GrammaticalPerson, GrammaticalTense, WordJunctionType, WordType,
};
use crate::linguistics::config::LexiconConfig;
use crate::linguistics::error::{LexiconError, Result};
use crate::linguistics::family::NamePool;
use crate::linguistics::{FamilyId, Lexicon, WordId};

/// Top-level container of a definitions file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionsFile {
    /// Replaces the lexicon configuration when present.
    pub config: Option<LexiconConfig>,
    pub families: Vec<FamilyDefinition>,
    pub languages: Vec<LanguageDefinition>,
    pub words: Vec<WordDefinition>,
    /// Words for the lexicon-wide default pools.
    pub default_names: NamePoolsDefinition,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FamilyDefinition {
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Identifier of the parent family.
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub names: NamePoolsDefinition,
}

/// Word identifiers per name pool.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePoolsDefinition {
    pub personal_names: BTreeMap<Gender, Vec<String>>,
    pub surnames: Vec<String>,
    /// Species identifier, then gender.
    pub specimen_names: BTreeMap<String, BTreeMap<Gender, Vec<String>>>,
    /// Unit class identifier.
    pub unit_names: BTreeMap<String, Vec<String>>,
    pub ship_names: Vec<String>,
    pub settlement_names: Vec<String>,
}

impl NamePoolsDefinition {
    /// Flatten into (pool, word identifier) pairs in a stable order.
    fn entries(&self) -> Vec<(NamePool, &str)> {
        let mut entries = Vec::new();
        for (gender, words) in &self.personal_names {
            entries.extend(words.iter().map(|w| (NamePool::Personal(*gender), w.as_str())));
        }
        entries.extend(self.surnames.iter().map(|w| (NamePool::Surname, w.as_str())));
        for (species, genders) in &self.specimen_names {
            for (gender, words) in genders {
                entries.extend(words.iter().map(|w| {
                    let pool = NamePool::Specimen {
                        species: species.clone(),
                        gender: *gender,
                    };
                    (pool, w.as_str())
                }));
            }
        }
        for (unit_class, words) in &self.unit_names {
            entries.extend(words.iter().map(|w| (NamePool::Unit(unit_class.clone()), w.as_str())));
        }
        entries.extend(self.ship_names.iter().map(|w| (NamePool::Ship, w.as_str())));
        entries.extend(self.settlement_names.iter().map(|w| (NamePool::Settlement, w.as_str())));
        entries
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageDefinition {
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub dialect_of: Option<String>,
    #[serde(default)]
    pub noun_endings: Vec<NounEndingDefinition>,
    #[serde(default)]
    pub adjective_endings: Vec<AdjectiveEndingDefinition>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NounEndingDefinition {
    #[serde(default)]
    pub number: GrammaticalNumber,
    #[serde(default)]
    pub case: GrammaticalCase,
    #[serde(default)]
    pub junction: WordJunctionType,
    pub ending: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdjectiveEndingDefinition {
    #[serde(default)]
    pub article_type: ArticleType,
    #[serde(default)]
    pub case: GrammaticalCase,
    #[serde(default)]
    pub number: GrammaticalNumber,
    #[serde(default)]
    pub gender: Gender,
    pub ending: String,
}

/// A word named directly by identifier, or found by what it is.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordReference {
    Identifier(String),
    Query {
        /// Searched together with the languages it is a dialect of.
        language: String,
        #[serde(default, rename = "type")]
        word_type: WordType,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        meanings: Vec<String>,
    },
}

impl WordReference {
    pub fn resolve(&self, lexicon: &Lexicon) -> Result<WordId> {
        match self {
            WordReference::Identifier(identifier) => lexicon.word_by_identifier(identifier),
            WordReference::Query { language, word_type, name, meanings } => {
                let language_id = lexicon.language_by_identifier(language)?;
                let found = match name {
                    Some(name) => lexicon.find_word(language_id, name, *word_type, meanings),
                    None if !meanings.is_empty() => lexicon.find_word_by_meaning(language_id, *word_type, meanings),
                    None => None,
                };
                found.ok_or_else(|| LexiconError::UnresolvedWord {
                    language: language.clone(),
                    name: name.clone().unwrap_or_else(|| meanings.join(", ")),
                })
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NounFormDefinition {
    #[serde(default)]
    pub number: GrammaticalNumber,
    #[serde(default)]
    pub case: GrammaticalCase,
    pub form: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerbFormDefinition {
    #[serde(default)]
    pub number: GrammaticalNumber,
    #[serde(default)]
    pub person: GrammaticalPerson,
    #[serde(default)]
    pub tense: GrammaticalTense,
    #[serde(default)]
    pub mood: GrammaticalMood,
    pub form: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdjectiveFormDefinition {
    #[serde(default)]
    pub degree: ComparisonDegree,
    #[serde(default)]
    pub case: GrammaticalCase,
    pub form: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParticipleDefinition {
    pub tense: GrammaticalTense,
    pub form: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseFormDefinition {
    #[serde(default)]
    pub case: GrammaticalCase,
    pub form: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordDefinition {
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "type")]
    pub word_type: Option<WordType>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub number: Option<GrammaticalNumber>,
    #[serde(default)]
    pub archaic: Option<bool>,
    /// Appended to the meanings already defined.
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default)]
    pub etymon: Option<WordReference>,
    /// Appended, in order, to the elements already defined.
    #[serde(default)]
    pub compound_elements: Vec<WordReference>,
    #[serde(default)]
    pub noun_forms: Vec<NounFormDefinition>,
    #[serde(default)]
    pub verb_forms: Vec<VerbFormDefinition>,
    #[serde(default)]
    pub adjective_forms: Vec<AdjectiveFormDefinition>,
    #[serde(default)]
    pub participles: Vec<ParticipleDefinition>,
    #[serde(default)]
    pub case_forms: Vec<CaseFormDefinition>,
    #[serde(default)]
    pub article_type: Option<ArticleType>,
    #[serde(default)]
    pub numeral_value: Option<i64>,
    #[serde(default)]
    pub affix_type: Option<AffixType>,
}

// =============================================================================
// APPLICATION
// =============================================================================

/// Apply a definitions file to the lexicon.
///
/// Entities are created first so definitions may refer to identifiers
/// defined later in the same file. Word links (etymon, compound elements)
/// and name pools are resolved last, once every word has its language and
/// meanings.
pub fn apply(lexicon: &mut Lexicon, file: &DefinitionsFile) -> Result<()> {
    if let Some(config) = &file.config {
        lexicon.config = config.clone();
    }

    for definition in &file.families {
        lexicon.get_or_create_family(&definition.identifier);
    }
    for definition in &file.languages {
        lexicon.get_or_create_language(&definition.identifier);
    }
    for definition in &file.words {
        lexicon.get_or_create_word(&definition.identifier);
    }

    for definition in &file.families {
        apply_family(lexicon, definition)?;
    }
    for definition in &file.languages {
        apply_language(lexicon, definition)?;
    }
    for definition in &file.words {
        apply_word(lexicon, definition)?;
    }
    for definition in &file.words {
        apply_word_links(lexicon, definition)?;
    }

    for definition in &file.families {
        let family = lexicon.family_by_identifier(&definition.identifier)?;
        apply_pools(lexicon, Some(family), &definition.names)?;
    }
    apply_pools(lexicon, None, &file.default_names)?;

    tracing::debug!(
        families = file.families.len(),
        languages = file.languages.len(),
        words = file.words.len(),
        "applied definitions"
    );
    Ok(())
}

fn apply_family(lexicon: &mut Lexicon, definition: &FamilyDefinition) -> Result<()> {
    let family = lexicon.family_by_identifier(&definition.identifier)?;

    if let Some(name) = &definition.name {
        lexicon.family_mut(family).name = name.clone();
    }
    if let Some(parent) = &definition.family {
        let parent = lexicon.family_by_identifier(parent)?;
        lexicon.set_family_parent(family, parent)?;
    }
    Ok(())
}

fn apply_language(lexicon: &mut Lexicon, definition: &LanguageDefinition) -> Result<()> {
    let language = lexicon.language_by_identifier(&definition.identifier)?;

    if let Some(family) = &definition.family {
        let family = lexicon.family_by_identifier(family)?;
        lexicon.set_language_family(language, family);
    }
    if let Some(parent) = &definition.dialect_of {
        let parent = lexicon.language_by_identifier(parent)?;
        lexicon.set_dialect_of(language, parent)?;
    }

    let entry = lexicon.language_mut(language);
    if let Some(name) = &definition.name {
        entry.name = name.clone();
    }
    for ending in &definition.noun_endings {
        entry.set_noun_ending(ending.number, ending.case, ending.junction, ending.ending.clone());
    }
    for ending in &definition.adjective_endings {
        entry.set_adjective_ending(
            ending.article_type,
            ending.case,
            ending.number,
            ending.gender,
            ending.ending.clone(),
        );
    }
    Ok(())
}

fn apply_word(lexicon: &mut Lexicon, definition: &WordDefinition) -> Result<()> {
    let word = lexicon.word_by_identifier(&definition.identifier)?;

    if let Some(language) = &definition.language {
        let language = lexicon.language_by_identifier(language)?;
        lexicon.set_word_language(word, language)?;
    }

    let entry = lexicon.word_mut(word);
    if let Some(name) = &definition.name {
        entry.name = name.clone();
    }
    if let Some(word_type) = definition.word_type {
        entry.word_type = word_type;
    }
    if let Some(gender) = definition.gender {
        entry.gender = gender;
    }
    if let Some(number) = definition.number {
        entry.number = number;
    }
    if let Some(archaic) = definition.archaic {
        entry.archaic = archaic;
    }
    if let Some(article_type) = definition.article_type {
        entry.article_type = article_type;
    }
    if let Some(value) = definition.numeral_value {
        entry.numeral_value = Some(value);
    }
    if let Some(affix_type) = definition.affix_type {
        entry.affix_type = affix_type;
    }
    entry.meanings.extend(definition.meanings.iter().cloned());

    for form in &definition.noun_forms {
        entry.set_noun_form(form.number, form.case, form.form.clone());
    }
    for form in &definition.verb_forms {
        entry.set_verb_form(form.number, form.person, form.tense, form.mood, form.form.clone());
    }
    for form in &definition.adjective_forms {
        entry.set_adjective_form(form.degree, form.case, form.form.clone());
    }
    for form in &definition.participles {
        entry.set_participle(form.tense, form.form.clone());
    }
    for form in &definition.case_forms {
        entry.set_case_form(form.case, form.form.clone());
    }
    Ok(())
}

fn apply_word_links(lexicon: &mut Lexicon, definition: &WordDefinition) -> Result<()> {
    let word = lexicon.word_by_identifier(&definition.identifier)?;

    if let Some(reference) = &definition.etymon {
        let etymon = reference.resolve(lexicon)?;
        lexicon.set_etymon(word, etymon);
    }
    for reference in &definition.compound_elements {
        let element = reference.resolve(lexicon)?;
        lexicon.add_compound_element(word, element);
    }
    Ok(())
}

fn apply_pools(lexicon: &mut Lexicon, family: Option<FamilyId>, pools: &NamePoolsDefinition) -> Result<()> {
    for (pool, identifier) in pools.entries() {
        let word = lexicon.word_by_identifier(identifier)?;
        match family {
            Some(family) => lexicon.add_name_word(family, pool, word),
            None => lexicon.add_default_name_word(pool, word),
        }
    }
    Ok(())
}
