//! Linguistics module
//!
//! Models constructed languages for world generation: words with their
//! grammatical properties, languages with regular ending tables, and
//! language families that pool name material for their descendants.
//! Everything lives in a `Lexicon`, which owns the entities and hands out
//! typed indices for every cross-link.

pub mod categories;
pub mod config;
pub mod data;
pub mod error;
pub mod family;
pub mod inflection;
pub mod language;
pub mod lexicon;
pub mod naming;
pub mod word;

use std::fmt;

pub use categories::{
    AffixType, ArticleType, ComparisonDegree, Gender, GrammaticalCase, GrammaticalMood,
    GrammaticalNumber, GrammaticalPerson, GrammaticalTense, WordJunctionType, WordType,
};
pub use config::LexiconConfig;
pub use error::{LexiconError, Result};
pub use family::{LanguageFamily, NamePool, NamePools};
pub use language::Language;
pub use lexicon::Lexicon;
pub use word::Word;

// =============================================================================
// ID TYPES
// =============================================================================

/// Macro to generate newtype arena indices with common derives and Display.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_id!(WordId);
define_id!(LanguageId);
define_id!(FamilyId);

// =============================================================================
// ENTITY CAPABILITY
// =============================================================================

/// An identifier-keyed entity that is validated once its load cycle ends.
pub trait Entity {
    /// Kind name used in error messages ("word", "language", ...).
    const KIND: &'static str;

    fn identifier(&self) -> &str;

    /// Check the structural invariants of this entity.
    fn check(&self, lexicon: &Lexicon) -> Result<()>;

    /// Build a validation error that names this entity.
    fn invalid(&self, message: impl Into<String>) -> LexiconError {
        LexiconError::Validation {
            kind: Self::KIND,
            identifier: self.identifier().to_string(),
            message: message.into(),
        }
    }
}
