//! The lexicon database.
//!
//! Owns every word, language and language family in arena tables keyed by
//! typed indices, with identifier lookups on the side. All cross-links are
//! indices, and every operation that creates a link also maintains its
//! inverse. Definitions are applied during a load phase, `check_all`
//! validates the result once, and the lexicon is read-only afterwards
//! until `clear`.

use std::collections::HashMap;

use super::categories::{
    ArticleType, ComparisonDegree, Gender, GrammaticalCase, GrammaticalMood, GrammaticalNumber,
    GrammaticalPerson, GrammaticalTense, WordJunctionType, WordType,
};
use super::config::LexiconConfig;
use super::error::{LexiconError, Result};
use super::family::{self, LanguageFamily, NamePool, NamePools};
use super::inflection;
use super::language::Language;
use super::word::Word;
use super::{Entity, FamilyId, LanguageId, WordId};

/// Registry of all linguistic entities of one load cycle.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    pub config: LexiconConfig,

    words: Vec<Word>,
    languages: Vec<Language>,
    families: Vec<LanguageFamily>,

    word_index: HashMap<String, WordId>,
    language_index: HashMap<String, LanguageId>,
    family_index: HashMap<String, FamilyId>,

    /// Pools used when no family in a chain has enough words.
    default_pools: NamePools,

    validated: bool,
}

fn unknown(kind: &'static str, identifier: &str) -> LexiconError {
    LexiconError::UnknownIdentifier {
        kind,
        identifier: identifier.to_string(),
    }
}

fn duplicate(kind: &'static str, identifier: &str) -> LexiconError {
    LexiconError::DuplicateIdentifier {
        kind,
        identifier: identifier.to_string(),
    }
}

impl Lexicon {
    pub fn new(config: LexiconConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Drop every entity and pool, keeping the configuration.
    pub fn clear(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    // =========================================================================
    // FACTORIES
    // =========================================================================

    /// Create a word; fails if the identifier is taken.
    pub fn create_word(&mut self, identifier: &str) -> Result<WordId> {
        if self.word_index.contains_key(identifier) {
            return Err(duplicate(Word::KIND, identifier));
        }
        Ok(self.get_or_create_word(identifier))
    }

    /// Existing word with this identifier, or a new one. Used by
    /// incremental definition passes.
    pub fn get_or_create_word(&mut self, identifier: &str) -> WordId {
        if let Some(&id) = self.word_index.get(identifier) {
            return id;
        }
        let id = WordId(self.words.len() as u32);
        self.words.push(Word::new(id, identifier));
        self.word_index.insert(identifier.to_string(), id);
        self.validated = false;
        id
    }

    pub fn create_language(&mut self, identifier: &str) -> Result<LanguageId> {
        if self.language_index.contains_key(identifier) {
            return Err(duplicate(Language::KIND, identifier));
        }
        Ok(self.get_or_create_language(identifier))
    }

    pub fn get_or_create_language(&mut self, identifier: &str) -> LanguageId {
        if let Some(&id) = self.language_index.get(identifier) {
            return id;
        }
        let id = LanguageId(self.languages.len() as u32);
        self.languages.push(Language::new(id, identifier));
        self.language_index.insert(identifier.to_string(), id);
        self.validated = false;
        id
    }

    pub fn create_family(&mut self, identifier: &str) -> Result<FamilyId> {
        if self.family_index.contains_key(identifier) {
            return Err(duplicate(LanguageFamily::KIND, identifier));
        }
        Ok(self.get_or_create_family(identifier))
    }

    pub fn get_or_create_family(&mut self, identifier: &str) -> FamilyId {
        if let Some(&id) = self.family_index.get(identifier) {
            return id;
        }
        let id = FamilyId(self.families.len() as u32);
        self.families.push(LanguageFamily::new(id, identifier));
        self.family_index.insert(identifier.to_string(), id);
        self.validated = false;
        id
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================
    //
    // Indices are only handed out by this lexicon, so indexing with one from
    // the current load cycle cannot go out of bounds.

    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    pub fn word_mut(&mut self, id: WordId) -> &mut Word {
        &mut self.words[id.index()]
    }

    pub fn language(&self, id: LanguageId) -> &Language {
        &self.languages[id.index()]
    }

    pub fn language_mut(&mut self, id: LanguageId) -> &mut Language {
        &mut self.languages[id.index()]
    }

    pub fn family(&self, id: FamilyId) -> &LanguageFamily {
        &self.families[id.index()]
    }

    pub fn family_mut(&mut self, id: FamilyId) -> &mut LanguageFamily {
        &mut self.families[id.index()]
    }

    pub fn word_by_identifier(&self, identifier: &str) -> Result<WordId> {
        self.word_index
            .get(identifier)
            .copied()
            .ok_or_else(|| unknown(Word::KIND, identifier))
    }

    pub fn language_by_identifier(&self, identifier: &str) -> Result<LanguageId> {
        self.language_index
            .get(identifier)
            .copied()
            .ok_or_else(|| unknown(Language::KIND, identifier))
    }

    pub fn family_by_identifier(&self, identifier: &str) -> Result<FamilyId> {
        self.family_index
            .get(identifier)
            .copied()
            .ok_or_else(|| unknown(LanguageFamily::KIND, identifier))
    }

    /// All words in creation order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn families(&self) -> &[LanguageFamily] {
        &self.families
    }

    pub fn default_pools(&self) -> &NamePools {
        &self.default_pools
    }

    // =========================================================================
    // LINKS
    // =========================================================================

    /// Make `word` a member of `language`. A word's language is assigned
    /// once; assigning the same language again is a no-op.
    pub fn set_word_language(&mut self, word: WordId, language: LanguageId) -> Result<()> {
        match self.word(word).language {
            Some(current) if current == language => return Ok(()),
            Some(current) => {
                return Err(LexiconError::LanguageAlreadySet {
                    word: self.word(word).identifier.clone(),
                    language: self.language(current).identifier.clone(),
                })
            }
            None => {}
        }

        self.word_mut(word).language = Some(language);
        self.language_mut(language).words.push(word);
        Ok(())
    }

    /// Remove `word` from `language`'s member list, releasing the word's
    /// back-reference if it pointed there.
    pub fn remove_word(&mut self, language: LanguageId, word: WordId) {
        self.language_mut(language).remove_word(word);
        if self.word(word).language == Some(language) {
            self.word_mut(word).language = None;
        }
    }

    /// Record that `word` derives from `etymon`. `word` appears in the
    /// etymon's reflexes exactly once.
    pub fn set_etymon(&mut self, word: WordId, etymon: WordId) {
        if let Some(previous) = self.word(word).etymon {
            if previous != etymon {
                self.word_mut(previous).reflexes.retain(|&w| w != word);
            }
        }

        self.word_mut(word).etymon = Some(etymon);
        let reflexes = &mut self.word_mut(etymon).reflexes;
        if !reflexes.contains(&word) {
            reflexes.push(word);
        }
    }

    /// Append `element` to the compound elements of `word`. Order matters.
    pub fn add_compound_element(&mut self, word: WordId, element: WordId) {
        self.word_mut(word).compound_elements.push(element);
        self.word_mut(element).compound_element_of.push(word);
    }

    /// Make `dialect` a dialect of `language`.
    pub fn set_dialect_of(&mut self, dialect: LanguageId, language: LanguageId) -> Result<()> {
        let cyclic = dialect == language || self.dialect_chain(language).any(|id| id == dialect);
        if cyclic {
            return Err(LexiconError::DialectCycle {
                dialect: self.language(dialect).identifier.clone(),
                language: self.language(language).identifier.clone(),
            });
        }

        if let Some(previous) = self.language(dialect).dialect_of {
            self.language_mut(previous).dialects.retain(|&l| l != dialect);
        }

        self.language_mut(dialect).dialect_of = Some(language);
        let dialects = &mut self.language_mut(language).dialects;
        if !dialects.contains(&dialect) {
            dialects.push(dialect);
        }
        Ok(())
    }

    /// Place `language` in `family`.
    pub fn set_language_family(&mut self, language: LanguageId, family: FamilyId) {
        if let Some(previous) = self.language(language).family {
            self.family_mut(previous).languages.retain(|&l| l != language);
        }

        self.language_mut(language).family = Some(family);
        let languages = &mut self.family_mut(family).languages;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }

    /// Make `parent` the upward link of `family`. Fails if the family tree
    /// would become cyclic.
    ///
    /// The family's pool words move with it: they are withdrawn from the
    /// previous ancestors and added to the new ones, so every ancestor keeps
    /// holding exactly what its subtree contributed.
    pub fn set_family_parent(&mut self, family: FamilyId, parent: FamilyId) -> Result<()> {
        let cyclic = family::ancestors(self, Some(parent)).any(|id| id == family);
        if cyclic {
            return Err(LexiconError::FamilyCycle {
                child: self.family(family).identifier.clone(),
                parent: self.family(parent).identifier.clone(),
            });
        }

        let previous = self.family(family).family;
        if previous == Some(parent) {
            return Ok(());
        }

        let carried: Vec<(NamePool, WordId)> = self
            .family(family)
            .pools
            .entries()
            .map(|(pool, word)| (pool.clone(), word))
            .collect();

        if let Some(previous) = previous {
            self.family_mut(previous).subfamilies.retain(|&f| f != family);
            let chain: Vec<FamilyId> = family::ancestors(self, Some(previous)).collect();
            for id in chain {
                let pools = &mut self.family_mut(id).pools;
                for (pool, word) in &carried {
                    pools.remove(pool, *word);
                }
            }
        }

        self.family_mut(family).family = Some(parent);
        self.family_mut(parent).subfamilies.push(family);

        let chain: Vec<FamilyId> = family::ancestors(self, Some(parent)).collect();
        for id in chain {
            let pools = &mut self.family_mut(id).pools;
            for (pool, word) in &carried {
                pools.add(pool.clone(), *word);
            }
        }
        Ok(())
    }

    /// `language` followed by the languages it is a dialect of, nearest first.
    pub fn dialect_chain(&self, language: LanguageId) -> impl Iterator<Item = LanguageId> + '_ {
        let limit = self.languages.len();
        std::iter::successors(Some(language), move |&id| self.language(id).dialect_of).take(limit)
    }

    // =========================================================================
    // WORD LOOKUP
    // =========================================================================

    /// Find a word in `language`, then in the languages it is a dialect of.
    /// A dialect shares its parent's vocabulary unless it has its own word.
    pub fn find_word(
        &self,
        language: LanguageId,
        name: &str,
        word_type: WordType,
        meanings: &[String],
    ) -> Option<WordId> {
        self.dialect_chain(language)
            .find_map(|id| self.language(id).find_word(self, name, word_type, meanings))
    }

    /// Like `find_word`, but matches on type and meanings only, for
    /// references that do not name the word ("the noun meaning 'stone'").
    pub fn find_word_by_meaning(&self, language: LanguageId, word_type: WordType, meanings: &[String]) -> Option<WordId> {
        self.dialect_chain(language).find_map(|id| {
            self.language(id).words().iter().copied().find(|&w| {
                let word = self.word(w);
                (word_type.is_none() || word.word_type == word_type) && word.has_meanings(meanings)
            })
        })
    }

    /// Numeral word with `value` in `language` or a parent language.
    pub fn find_numeral(&self, language: LanguageId, value: i64) -> Option<WordId> {
        self.dialect_chain(language)
            .find_map(|id| self.language(id).find_numeral(self, value))
    }

    // =========================================================================
    // INFLECTION
    // =========================================================================

    fn language_of(&self, word: &Word) -> Option<&Language> {
        word.language.map(|id| self.language(id))
    }

    pub fn noun_inflection(
        &self,
        word: WordId,
        number: GrammaticalNumber,
        case: GrammaticalCase,
        junction: WordJunctionType,
    ) -> String {
        let word = self.word(word);
        inflection::noun_inflection(word, self.language_of(word), number, case, junction)
    }

    pub fn verb_inflection(
        &self,
        word: WordId,
        number: GrammaticalNumber,
        person: GrammaticalPerson,
        tense: GrammaticalTense,
        mood: GrammaticalMood,
    ) -> String {
        self.word(word).verb_inflection(number, person, tense, mood)
    }

    pub fn adjective_inflection(
        &self,
        word: WordId,
        degree: ComparisonDegree,
        article_type: ArticleType,
        case: GrammaticalCase,
        number: GrammaticalNumber,
        gender: Gender,
    ) -> String {
        let word = self.word(word);
        inflection::adjective_inflection(word, self.language_of(word), degree, article_type, case, number, gender)
    }

    pub fn participle(&self, word: WordId, tense: GrammaticalTense) -> String {
        self.word(word).participle(tense)
    }

    pub fn compound_form(&self, word: WordId) -> String {
        inflection::compound_form(self, self.word(word))
    }

    /// Article of `language` for a noun phrase, in the given case. Searches
    /// the language and then its parent languages for an article word of
    /// the requested type that agrees with gender and number. Empty if the
    /// language has no such article.
    pub fn article(
        &self,
        language: LanguageId,
        article_type: ArticleType,
        gender: Gender,
        number: GrammaticalNumber,
        case: GrammaticalCase,
    ) -> String {
        if article_type.is_none() {
            return String::new();
        }

        self.dialect_chain(language)
            .find_map(|id| {
                self.language(id).words_of_type(self, WordType::Article).find(|&w| {
                    let word = self.word(w);
                    word.article_type == article_type && word.agrees_with(gender, number)
                })
            })
            .map(|w| self.word(w).case_form(case))
            .unwrap_or_default()
    }

    // =========================================================================
    // NAME POOLS
    // =========================================================================

    /// Add `word` to a pool of `family` and of every ancestor family.
    pub fn add_name_word(&mut self, family: FamilyId, pool: NamePool, word: WordId) {
        let chain: Vec<FamilyId> = family::ancestors(self, Some(family)).collect();
        for id in chain {
            self.family_mut(id).pools.add(pool.clone(), word);
        }
    }

    /// Add `word` to a lexicon-wide default pool.
    pub fn add_default_name_word(&mut self, pool: NamePool, word: WordId) {
        self.default_pools.add(pool, word);
    }

    /// Pool that `family` should draw from; see `family::resolve_pool`.
    pub fn name_words(&self, family: FamilyId, pool: &NamePool) -> &[WordId] {
        family::resolve_pool(self, Some(family), pool)
    }

    /// Pool for a language, starting at its family; languages without a
    /// family use the default pools.
    pub fn name_words_for_language(&self, language: LanguageId, pool: &NamePool) -> &[WordId] {
        family::resolve_pool(self, self.language(language).family, pool)
    }

    pub fn add_personal_name_word(&mut self, family: FamilyId, gender: Gender, word: WordId) {
        self.add_name_word(family, NamePool::Personal(gender), word);
    }

    pub fn personal_name_words(&self, family: FamilyId, gender: Gender) -> &[WordId] {
        self.name_words(family, &NamePool::Personal(gender))
    }

    pub fn add_surname_word(&mut self, family: FamilyId, word: WordId) {
        self.add_name_word(family, NamePool::Surname, word);
    }

    pub fn surname_words(&self, family: FamilyId) -> &[WordId] {
        self.name_words(family, &NamePool::Surname)
    }

    pub fn add_specimen_name_word(&mut self, family: FamilyId, species: &str, gender: Gender, word: WordId) {
        let pool = NamePool::Specimen {
            species: species.to_string(),
            gender,
        };
        self.add_name_word(family, pool, word);
    }

    pub fn specimen_name_words(&self, family: FamilyId, species: &str, gender: Gender) -> &[WordId] {
        let pool = NamePool::Specimen {
            species: species.to_string(),
            gender,
        };
        self.name_words(family, &pool)
    }

    pub fn add_unit_name_word(&mut self, family: FamilyId, unit_class: &str, word: WordId) {
        self.add_name_word(family, NamePool::Unit(unit_class.to_string()), word);
    }

    pub fn unit_name_words(&self, family: FamilyId, unit_class: &str) -> &[WordId] {
        self.name_words(family, &NamePool::Unit(unit_class.to_string()))
    }

    pub fn add_ship_name_word(&mut self, family: FamilyId, word: WordId) {
        self.add_name_word(family, NamePool::Ship, word);
    }

    pub fn ship_name_words(&self, family: FamilyId) -> &[WordId] {
        self.name_words(family, &NamePool::Ship)
    }

    pub fn add_settlement_name_word(&mut self, family: FamilyId, word: WordId) {
        self.add_name_word(family, NamePool::Settlement, word);
    }

    pub fn settlement_name_words(&self, family: FamilyId) -> &[WordId] {
        self.name_words(family, &NamePool::Settlement)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Validate every entity. Stops at the first violation.
    pub fn check_all(&mut self) -> Result<()> {
        self.validated = false;

        for family in &self.families {
            family.check(self)?;
        }
        for language in &self.languages {
            language.check(self)?;
        }
        for word in &self.words {
            word.check(self)?;
        }

        self.validated = true;
        tracing::info!(
            words = self.words.len(),
            languages = self.languages.len(),
            families = self.families.len(),
            "lexicon validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon_with_language() -> (Lexicon, LanguageId) {
        let mut lexicon = Lexicon::new(LexiconConfig::with_minimum_pool_size(3));
        let language = lexicon.create_language("common").unwrap();
        lexicon.language_mut(language).name = "Common".to_string();
        lexicon.language_mut(language).set_noun_ending(
            GrammaticalNumber::Plural,
            GrammaticalCase::Nominative,
            WordJunctionType::None,
            "s",
        );
        (lexicon, language)
    }

    fn add_word(lexicon: &mut Lexicon, language: LanguageId, identifier: &str, word_type: WordType) -> WordId {
        add_named_word(lexicon, language, identifier, identifier, word_type)
    }

    fn add_named_word(
        lexicon: &mut Lexicon,
        language: LanguageId,
        identifier: &str,
        name: &str,
        word_type: WordType,
    ) -> WordId {
        let id = lexicon.create_word(identifier).unwrap();
        let word = lexicon.word_mut(id);
        word.name = name.to_string();
        word.word_type = word_type;
        lexicon.set_word_language(id, language).unwrap();
        id
    }

    fn named_family(lexicon: &mut Lexicon, identifier: &str) -> FamilyId {
        let id = lexicon.create_family(identifier).unwrap();
        lexicon.family_mut(id).name = identifier.to_string();
        id
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let mut lexicon = Lexicon::default();
        lexicon.create_word("cat").unwrap();
        let err = lexicon.create_word("cat").unwrap_err();
        assert!(matches!(err, LexiconError::DuplicateIdentifier { kind: "word", .. }));

        let again = lexicon.get_or_create_word("cat");
        assert_eq!(lexicon.word(again).identifier, "cat");
        assert_eq!(lexicon.words().len(), 1);
    }

    #[test]
    fn test_unknown_identifier() {
        let lexicon = Lexicon::default();
        let err = lexicon.language_by_identifier("elvish").unwrap_err();
        assert_eq!(err.to_string(), "no language with identifier \"elvish\"");
    }

    #[test]
    fn test_cat_becomes_cats() {
        let (mut lexicon, language) = lexicon_with_language();
        let cat = add_word(&mut lexicon, language, "cat", WordType::Noun);

        let form = lexicon.noun_inflection(cat, GrammaticalNumber::Plural, GrammaticalCase::Nominative, WordJunctionType::None);
        assert_eq!(form, "cats");
    }

    #[test]
    fn test_child_becomes_children() {
        let (mut lexicon, language) = lexicon_with_language();
        let child = add_word(&mut lexicon, language, "child", WordType::Noun);
        lexicon
            .word_mut(child)
            .set_noun_form(GrammaticalNumber::Plural, GrammaticalCase::Nominative, "children");

        let form = lexicon.noun_inflection(child, GrammaticalNumber::Plural, GrammaticalCase::Nominative, WordJunctionType::None);
        assert_eq!(form, "children");
    }

    #[test]
    fn test_language_is_assigned_once() {
        let (mut lexicon, language) = lexicon_with_language();
        let other = lexicon.create_language("other").unwrap();
        let cat = add_word(&mut lexicon, language, "cat", WordType::Noun);

        lexicon.set_word_language(cat, language).unwrap();
        assert_eq!(lexicon.language(language).words(), &[cat]);
        assert!(matches!(
            lexicon.set_word_language(cat, other),
            Err(LexiconError::LanguageAlreadySet { .. })
        ));
    }

    #[test]
    fn test_etymon_links_reflex_once() {
        let (mut lexicon, language) = lexicon_with_language();
        let root = add_word(&mut lexicon, language, "stan", WordType::Noun);
        let stone = add_word(&mut lexicon, language, "stone", WordType::Noun);

        lexicon.set_etymon(stone, root);
        lexicon.set_etymon(stone, root);

        assert_eq!(lexicon.word(stone).etymon(), Some(root));
        assert_eq!(lexicon.word(root).reflexes(), &[stone]);
    }

    #[test]
    fn test_changing_etymon_moves_reflex() {
        let (mut lexicon, language) = lexicon_with_language();
        let first = add_word(&mut lexicon, language, "first", WordType::Noun);
        let second = add_word(&mut lexicon, language, "second", WordType::Noun);
        let derived = add_word(&mut lexicon, language, "derived", WordType::Noun);

        lexicon.set_etymon(derived, first);
        lexicon.set_etymon(derived, second);

        assert!(lexicon.word(first).reflexes().is_empty());
        assert_eq!(lexicon.word(second).reflexes(), &[derived]);
    }

    #[test]
    fn test_compound_elements_are_bidirectional() {
        let (mut lexicon, language) = lexicon_with_language();
        let black = add_word(&mut lexicon, language, "black", WordType::Adjective);
        let smith = add_word(&mut lexicon, language, "smith", WordType::Noun);
        let blacksmith = add_word(&mut lexicon, language, "blacksmith", WordType::Noun);

        lexicon.add_compound_element(blacksmith, black);
        lexicon.add_compound_element(blacksmith, smith);

        assert_eq!(lexicon.word(blacksmith).compound_elements(), &[black, smith]);
        assert_eq!(lexicon.word(black).compound_element_of(), &[blacksmith]);
        assert_eq!(lexicon.word(smith).compound_element_of(), &[blacksmith]);
        assert_eq!(lexicon.compound_form(blacksmith), "blacksmith");
    }

    #[test]
    fn test_check_rejects_etymon_with_compound_elements() {
        let (mut lexicon, language) = lexicon_with_language();
        let a = add_word(&mut lexicon, language, "a", WordType::Noun);
        let b = add_word(&mut lexicon, language, "b", WordType::Noun);
        let c = add_word(&mut lexicon, language, "c", WordType::Noun);

        lexicon.set_etymon(a, b);
        lexicon.add_compound_element(a, c);

        let err = lexicon.check_all().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"a\""), "{}", message);
        assert!(message.contains("both an etymon and compound elements"), "{}", message);
        assert!(!lexicon.is_validated());
    }

    #[test]
    fn test_check_rejects_word_without_language() {
        let mut lexicon = Lexicon::default();
        let orphan = lexicon.create_word("orphan").unwrap();
        lexicon.word_mut(orphan).name = "orphan".to_string();
        lexicon.word_mut(orphan).word_type = WordType::Noun;

        let err = lexicon.check_all().unwrap_err();
        assert!(err.to_string().contains("has no language"));
    }

    #[test]
    fn test_check_rejects_missing_word_type() {
        let (mut lexicon, language) = lexicon_with_language();
        add_word(&mut lexicon, language, "thing", WordType::None);
        let err = lexicon.check_all().unwrap_err();
        assert!(err.to_string().contains("has no word type"));
    }

    #[test]
    fn test_check_accepts_valid_lexicon() {
        let (mut lexicon, language) = lexicon_with_language();
        add_word(&mut lexicon, language, "cat", WordType::Noun);
        lexicon.check_all().unwrap();
        assert!(lexicon.is_validated());

        lexicon.get_or_create_word("dog");
        assert!(!lexicon.is_validated());
    }

    #[test]
    fn test_failed_check_clears_validated() {
        let (mut lexicon, language) = lexicon_with_language();
        let cat = add_word(&mut lexicon, language, "cat", WordType::Noun);
        lexicon.check_all().unwrap();
        assert!(lexicon.is_validated());

        lexicon.remove_word(language, cat);
        assert!(lexicon.check_all().is_err());
        assert!(!lexicon.is_validated());
    }

    #[test]
    fn test_removed_word_fails_validation_until_reassigned() {
        let (mut lexicon, language) = lexicon_with_language();
        let cat = add_word(&mut lexicon, language, "cat", WordType::Noun);

        lexicon.remove_word(language, cat);
        assert!(lexicon.language(language).words().is_empty());
        assert_eq!(lexicon.word(cat).language(), None);
        assert!(lexicon.check_all().is_err());

        lexicon.set_word_language(cat, language).unwrap();
        lexicon.check_all().unwrap();
    }

    #[test]
    fn test_find_word_filters() {
        let (mut lexicon, language) = lexicon_with_language();
        let verb = add_named_word(&mut lexicon, language, "run_verb", "run", WordType::Verb);
        let noun = add_named_word(&mut lexicon, language, "run_noun", "run", WordType::Noun);
        lexicon.word_mut(noun).meanings = vec!["sprint".to_string(), "route".to_string()];

        assert_eq!(lexicon.find_word(language, "run", WordType::None, &[]), Some(verb));
        assert_eq!(lexicon.find_word(language, "run", WordType::Noun, &[]), Some(noun));
        assert_eq!(
            lexicon.find_word(language, "run", WordType::None, &["route".to_string(), "sprint".to_string()]),
            Some(noun)
        );
        assert_eq!(lexicon.find_word(language, "run", WordType::None, &["route".to_string()]), None);
        assert_eq!(lexicon.find_word(language, "walk", WordType::None, &[]), None);
    }

    #[test]
    fn test_dialect_shares_parent_vocabulary() {
        let (mut lexicon, language) = lexicon_with_language();
        let dialect = lexicon.create_language("northern").unwrap();
        lexicon.language_mut(dialect).name = "Northern".to_string();
        lexicon.set_dialect_of(dialect, language).unwrap();

        let common_stone = add_word(&mut lexicon, language, "stone", WordType::Noun);
        let common_hill = add_named_word(&mut lexicon, language, "common_hill", "hill", WordType::Noun);
        let northern_hill = add_named_word(&mut lexicon, dialect, "northern_hill", "hill", WordType::Noun);

        assert_eq!(lexicon.language(language).dialects(), &[dialect]);
        assert_eq!(lexicon.find_word(dialect, "stone", WordType::Noun, &[]), Some(common_stone));
        assert_eq!(lexicon.find_word(dialect, "hill", WordType::Noun, &[]), Some(northern_hill));
        assert_eq!(lexicon.find_word(language, "hill", WordType::Noun, &[]), Some(common_hill));
        assert_eq!(lexicon.language(dialect).find_word(&lexicon, "stone", WordType::None, &[]), None);
        lexicon.check_all().unwrap();
    }

    #[test]
    fn test_dialect_cycle_is_rejected() {
        let (mut lexicon, language) = lexicon_with_language();
        let dialect = lexicon.create_language("northern").unwrap();
        lexicon.set_dialect_of(dialect, language).unwrap();

        assert!(matches!(
            lexicon.set_dialect_of(language, dialect),
            Err(LexiconError::DialectCycle { .. })
        ));
        assert!(lexicon.set_dialect_of(language, language).is_err());
    }

    #[test]
    fn test_family_cycle_is_rejected() {
        let mut lexicon = Lexicon::default();
        let root = named_family(&mut lexicon, "root");
        let child = named_family(&mut lexicon, "child");
        let grandchild = named_family(&mut lexicon, "grandchild");
        lexicon.set_family_parent(child, root).unwrap();
        lexicon.set_family_parent(grandchild, child).unwrap();

        assert!(matches!(
            lexicon.set_family_parent(root, grandchild),
            Err(LexiconError::FamilyCycle { .. })
        ));
        assert_eq!(lexicon.family(root).subfamilies(), &[child]);
        lexicon.check_all().unwrap();
    }

    #[test]
    fn test_numeral_lookup() {
        let (mut lexicon, language) = lexicon_with_language();
        let three = add_word(&mut lexicon, language, "three", WordType::Numeral);
        lexicon.word_mut(three).numeral_value = Some(3);

        assert_eq!(lexicon.find_numeral(language, 3), Some(three));
        assert_eq!(lexicon.find_numeral(language, 4), None);
    }

    #[test]
    fn test_article_selection() {
        let (mut lexicon, language) = lexicon_with_language();
        let der = add_word(&mut lexicon, language, "der", WordType::Article);
        let die = add_word(&mut lexicon, language, "die", WordType::Article);
        {
            let der = lexicon.word_mut(der);
            der.article_type = ArticleType::Definite;
            der.gender = Gender::Masculine;
            der.number = GrammaticalNumber::Singular;
            der.set_case_form(GrammaticalCase::Accusative, "den");
        }
        {
            let die = lexicon.word_mut(die);
            die.article_type = ArticleType::Definite;
            die.gender = Gender::Feminine;
        }

        let article = |gender, number, case| lexicon.article(language, ArticleType::Definite, gender, number, case);
        assert_eq!(article(Gender::Masculine, GrammaticalNumber::Singular, GrammaticalCase::Nominative), "der");
        assert_eq!(article(Gender::Masculine, GrammaticalNumber::Singular, GrammaticalCase::Accusative), "den");
        assert_eq!(article(Gender::Feminine, GrammaticalNumber::Plural, GrammaticalCase::Nominative), "die");
        assert_eq!(article(Gender::Neuter, GrammaticalNumber::Singular, GrammaticalCase::Nominative), "");
        assert_eq!(
            lexicon.article(language, ArticleType::None, Gender::Masculine, GrammaticalNumber::Singular, GrammaticalCase::Nominative),
            ""
        );
    }

    #[test]
    fn test_pool_propagates_to_ancestors() {
        let (mut lexicon, language) = lexicon_with_language();
        let root = named_family(&mut lexicon, "root");
        let child = named_family(&mut lexicon, "child");
        lexicon.set_family_parent(child, root).unwrap();

        let aric = add_word(&mut lexicon, language, "aric", WordType::Noun);
        lexicon.add_personal_name_word(child, Gender::Masculine, aric);

        assert_eq!(lexicon.family(child).pools().get(&NamePool::Personal(Gender::Masculine)), &[aric]);
        assert_eq!(lexicon.family(root).pools().get(&NamePool::Personal(Gender::Masculine)), &[aric]);
        assert!(lexicon.family(root).pools().get(&NamePool::Personal(Gender::Feminine)).is_empty());
    }

    #[test]
    fn test_linking_parent_carries_existing_pool_words() {
        let (mut lexicon, language) = lexicon_with_language();
        let leaf = named_family(&mut lexicon, "leaf");
        let swift = add_word(&mut lexicon, language, "swift", WordType::Adjective);
        lexicon.add_ship_name_word(leaf, swift);

        let root = named_family(&mut lexicon, "root");
        lexicon.set_family_parent(leaf, root).unwrap();
        lexicon.set_family_parent(leaf, root).unwrap();

        assert_eq!(lexicon.family(root).pools().get(&NamePool::Ship), &[swift]);
        assert_eq!(lexicon.family(root).subfamilies(), &[leaf]);
    }

    #[test]
    fn test_reparenting_moves_pool_words() {
        let (mut lexicon, language) = lexicon_with_language();
        let top = named_family(&mut lexicon, "top");
        let west = named_family(&mut lexicon, "west");
        let east = named_family(&mut lexicon, "east");
        let child = named_family(&mut lexicon, "child");
        lexicon.set_family_parent(west, top).unwrap();
        lexicon.set_family_parent(east, top).unwrap();
        lexicon.set_family_parent(child, west).unwrap();

        let ash = add_word(&mut lexicon, language, "ash", WordType::Noun);
        let elm = add_word(&mut lexicon, language, "elm", WordType::Noun);
        lexicon.add_settlement_name_word(child, ash);
        lexicon.add_settlement_name_word(west, elm);

        lexicon.set_family_parent(child, east).unwrap();

        let settlements = |family| lexicon.family(family).pools().get(&NamePool::Settlement).to_vec();
        assert_eq!(settlements(west), vec![elm]);
        assert_eq!(settlements(east), vec![ash]);
        assert_eq!(settlements(top), vec![elm, ash]);
        assert!(lexicon.family(west).subfamilies().is_empty());
        lexicon.check_all().unwrap();
    }

    #[test]
    fn test_ship_name_threshold() {
        let (mut lexicon, language) = lexicon_with_language();
        let parent = named_family(&mut lexicon, "parent");
        let child = named_family(&mut lexicon, "child");
        lexicon.set_family_parent(child, parent).unwrap();

        for name in ["valiant", "dauntless", "resolute", "vigilant", "intrepid"] {
            let word = add_word(&mut lexicon, language, name, WordType::Adjective);
            lexicon.add_ship_name_word(parent, word);
        }
        let swift = add_word(&mut lexicon, language, "swift", WordType::Adjective);
        lexicon.add_ship_name_word(child, swift);

        let resolved = lexicon.ship_name_words(child);
        assert_eq!(resolved.len(), 6);
        assert!(resolved.contains(&swift));
        assert_eq!(resolved, lexicon.family(parent).pools().get(&NamePool::Ship));

        let bold = add_word(&mut lexicon, language, "bold", WordType::Adjective);
        let brave = add_word(&mut lexicon, language, "brave", WordType::Adjective);
        lexicon.add_ship_name_word(child, bold);
        lexicon.add_ship_name_word(child, brave);

        assert_eq!(lexicon.ship_name_words(child), &[swift, bold, brave]);
        assert_eq!(lexicon.ship_name_words(parent).len(), 8);
    }

    #[test]
    fn test_pool_falls_back_to_defaults() {
        let (mut lexicon, language) = lexicon_with_language();
        let family = named_family(&mut lexicon, "lonely");
        lexicon.set_language_family(language, family);

        let town = add_word(&mut lexicon, language, "town", WordType::Noun);
        let burg = add_word(&mut lexicon, language, "burg", WordType::Noun);
        lexicon.add_settlement_name_word(family, town);
        lexicon.add_default_name_word(NamePool::Settlement, burg);

        assert_eq!(lexicon.settlement_name_words(family), &[burg]);
        assert_eq!(lexicon.name_words_for_language(language, &NamePool::Settlement), &[burg]);
        assert!(lexicon.unit_name_words(family, "cavalry").is_empty());
        assert_eq!(lexicon.family(family).languages(), &[language]);
    }

    #[test]
    fn test_specimen_and_unit_pools() {
        let (mut lexicon, language) = lexicon_with_language();
        lexicon.config.minimum_pool_size = 1;
        let family = named_family(&mut lexicon, "beasts");
        let fang = add_word(&mut lexicon, language, "fang", WordType::Noun);
        let lancer = add_word(&mut lexicon, language, "lancer", WordType::Noun);

        lexicon.add_specimen_name_word(family, "wolf", Gender::Feminine, fang);
        lexicon.add_unit_name_word(family, "cavalry", lancer);

        assert_eq!(lexicon.specimen_name_words(family, "wolf", Gender::Feminine), &[fang]);
        assert!(lexicon.specimen_name_words(family, "wolf", Gender::Masculine).is_empty());
        assert_eq!(lexicon.unit_name_words(family, "cavalry"), &[lancer]);
    }

    #[test]
    fn test_clear_keeps_config() {
        let (mut lexicon, language) = lexicon_with_language();
        add_word(&mut lexicon, language, "cat", WordType::Noun);
        lexicon.clear();

        assert!(lexicon.words().is_empty());
        assert!(lexicon.languages().is_empty());
        assert_eq!(lexicon.config.minimum_pool_size, 3);
        assert!(lexicon.create_word("cat").is_ok());
    }
}
