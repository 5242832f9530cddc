//! Closed grammatical categories.
//!
//! Every category has a `None` value that doubles as the "unset" sentinel
//! and as the generic key in ending tables (no case, no number, no gender,
//! no junction). Each value has a serialization key used in definition
//! files and a display name.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use super::error::{LexiconError, Result};

/// Generates a category enum with key/display conversions and serde impls.
macro_rules! define_category {
    (
        $(#[$meta:meta])*
        $name:ident, $category:literal {
            $($variant:ident => ($key:literal, $display:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            /// Category name used in error messages.
            pub const CATEGORY: &'static str = $category;

            /// All values, the `None` sentinel first.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Serialization key (e.g. "nominative").
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Human-readable name (e.g. "Nominative").
            pub fn display_name(self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }

            /// Parse a key, failing with an error that names the category.
            pub fn from_key(key: &str) -> Result<Self> {
                match key {
                    $($key => Ok($name::$variant),)+
                    _ => Err(LexiconError::InvalidCategory {
                        category: $category,
                        key: key.to_string(),
                    }),
                }
            }

            /// Parse a key, mapping anything unknown to `None`.
            pub fn from_key_or_none(key: &str) -> Self {
                Self::from_key(key).unwrap_or_default()
            }

            pub fn is_none(self) -> bool {
                self == Self::default()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.display_name())
            }
        }

        impl FromStr for $name {
            type Err = LexiconError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_key(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.key())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let key = String::deserialize(deserializer)?;
                Self::from_key(&key).map_err(de::Error::custom)
            }
        }
    };
}

define_category! {
    /// Grammatical gender.
    Gender, "gender" {
        None => ("none", "None"),
        Masculine => ("masculine", "Masculine"),
        Feminine => ("feminine", "Feminine"),
        Neuter => ("neuter", "Neuter"),
    }
}

define_category! {
    /// Word class (part of speech).
    WordType, "word type" {
        None => ("none", "None"),
        Noun => ("noun", "Noun"),
        Verb => ("verb", "Verb"),
        Adjective => ("adjective", "Adjective"),
        Pronoun => ("pronoun", "Pronoun"),
        Article => ("article", "Article"),
        Numeral => ("numeral", "Numeral"),
        Adverb => ("adverb", "Adverb"),
        Conjunction => ("conjunction", "Conjunction"),
        Preposition => ("preposition", "Preposition"),
        Affix => ("affix", "Affix"),
    }
}

define_category! {
    /// Grammatical case.
    GrammaticalCase, "grammatical case" {
        None => ("none", "None"),
        Nominative => ("nominative", "Nominative"),
        Accusative => ("accusative", "Accusative"),
        Dative => ("dative", "Dative"),
        Genitive => ("genitive", "Genitive"),
    }
}

define_category! {
    /// Grammatical number.
    GrammaticalNumber, "grammatical number" {
        None => ("none", "None"),
        Singular => ("singular", "Singular"),
        Plural => ("plural", "Plural"),
    }
}

define_category! {
    /// Grammatical person.
    GrammaticalPerson, "grammatical person" {
        None => ("none", "None"),
        First => ("first", "First Person"),
        Second => ("second", "Second Person"),
        Third => ("third", "Third Person"),
    }
}

define_category! {
    /// Grammatical tense.
    GrammaticalTense, "grammatical tense" {
        None => ("none", "None"),
        Present => ("present", "Present"),
        Past => ("past", "Past"),
        Future => ("future", "Future"),
    }
}

define_category! {
    /// Grammatical mood.
    GrammaticalMood, "grammatical mood" {
        None => ("none", "None"),
        Indicative => ("indicative", "Indicative"),
        Subjunctive => ("subjunctive", "Subjunctive"),
        Conditional => ("conditional", "Conditional"),
        Imperative => ("imperative", "Imperative"),
    }
}

define_category! {
    /// Degree of comparison for adjectives.
    ComparisonDegree, "comparison degree" {
        None => ("none", "None"),
        Positive => ("positive", "Positive"),
        Comparative => ("comparative", "Comparative"),
        Superlative => ("superlative", "Superlative"),
    }
}

define_category! {
    /// Article accompanying a noun phrase.
    ArticleType, "article type" {
        None => ("none", "None"),
        Definite => ("definite", "Definite"),
        Indefinite => ("indefinite", "Indefinite"),
    }
}

define_category! {
    /// Position of an affix relative to its stem.
    AffixType, "affix type" {
        None => ("none", "None"),
        Prefix => ("prefix", "Prefix"),
        Suffix => ("suffix", "Suffix"),
        Infix => ("infix", "Infix"),
    }
}

define_category! {
    /// How a modifier joins its head word.
    WordJunctionType, "word junction type" {
        None => ("none", "No Junction"),
        Compound => ("compound", "Compound"),
        Separate => ("separate", "Separate"),
    }
}
