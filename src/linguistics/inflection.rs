//! Inflection resolution.
//!
//! Combines a word's irregular forms with its language's regular endings.
//! These functions never fail: a missing form degrades along a fixed chain
//! that ends at the bare word name.

use super::categories::{
    AffixType, ArticleType, ComparisonDegree, Gender, GrammaticalCase, GrammaticalNumber, WordJunctionType,
};
use super::language::Language;
use super::word::Word;
use super::Lexicon;

/// Noun form: the word's own `(number, case)` form if it has one,
/// otherwise the name plus the language's regular ending.
pub fn noun_inflection(
    word: &Word,
    language: Option<&Language>,
    number: GrammaticalNumber,
    case: GrammaticalCase,
    junction: WordJunctionType,
) -> String {
    if let Some(form) = word.noun_forms.get(&(number, case)) {
        return form.clone();
    }

    let ending = language
        .map(|language| language.noun_ending(number, case, junction))
        .unwrap_or_default();
    format!("{}{}", word.name, ending)
}

/// Adjective form.
///
/// The stem is the `(degree, case)` form, else the caseless `(degree, None)`
/// form, else the name. A regular ending is appended unless the exact
/// `(degree, case)` form was used or no article type is given.
pub fn adjective_inflection(
    word: &Word,
    language: Option<&Language>,
    degree: ComparisonDegree,
    article_type: ArticleType,
    case: GrammaticalCase,
    number: GrammaticalNumber,
    gender: Gender,
) -> String {
    if let Some(form) = word.adjective_forms.get(&(degree, case)) {
        return form.clone();
    }

    let stem = word
        .adjective_forms
        .get(&(degree, GrammaticalCase::None))
        .unwrap_or(&word.name);

    match language {
        Some(language) if !article_type.is_none() => {
            format!("{}{}", stem, language.adjective_ending(article_type, case, number, gender))
        }
        _ => stem.clone(),
    }
}

/// Attach an affix to a stem. Infixes go after the stem's first vowel
/// group, or at the end of a stem without vowels.
pub fn affix(stem: &str, affix: &str, affix_type: AffixType) -> String {
    match affix_type {
        AffixType::Prefix => format!("{}{}", affix, stem),
        AffixType::Suffix | AffixType::None => format!("{}{}", stem, affix),
        AffixType::Infix => {
            let at = infix_position(stem);
            format!("{}{}{}", &stem[..at], affix, &stem[at..])
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn infix_position(stem: &str) -> usize {
    let mut seen_vowel = false;
    for (index, c) in stem.char_indices() {
        if is_vowel(c) {
            seen_vowel = true;
        } else if seen_vowel {
            return index;
        }
    }
    stem.len()
}

/// Joined names of a compound's elements, or the bare name of a word that
/// is not a compound.
pub fn compound_form(lexicon: &Lexicon, word: &Word) -> String {
    if word.compound_elements().is_empty() {
        return word.name.clone();
    }

    word.compound_elements()
        .iter()
        .map(|&id| lexicon.word(id).name.as_str())
        .collect()
}
