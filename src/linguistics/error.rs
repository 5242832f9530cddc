//! Error types for lexicon loading and validation.
//!
//! Only load-time and validation-time operations return these errors.
//! Inflection and name-pool queries always resolve to a fallback instead.

/// Result type defaulting to [`LexiconError`].
pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// An entity with this identifier was already created.
    #[error("{kind} \"{identifier}\" already exists")]
    DuplicateIdentifier {
        kind: &'static str,
        identifier: String,
    },

    /// No entity of this kind has the identifier.
    #[error("no {kind} with identifier \"{identifier}\"")]
    UnknownIdentifier {
        kind: &'static str,
        identifier: String,
    },

    /// A string does not name any value of a grammatical category.
    #[error("invalid {category} key: \"{key}\"")]
    InvalidCategory {
        category: &'static str,
        key: String,
    },

    /// A structural invariant is violated.
    #[error("{kind} \"{identifier}\" is invalid: {message}")]
    Validation {
        kind: &'static str,
        identifier: String,
        message: String,
    },

    /// Setting the upward link would make the family tree cyclic.
    #[error("language family \"{child}\" cannot be placed under \"{parent}\": the family tree would become cyclic")]
    FamilyCycle { child: String, parent: String },

    /// Setting the dialect link would make the dialect tree cyclic.
    #[error("language \"{dialect}\" cannot be a dialect of \"{language}\": the dialect tree would become cyclic")]
    DialectCycle { dialect: String, language: String },

    /// A word reference in a definition matched nothing.
    #[error("no word named \"{name}\" in language \"{language}\" matches the reference")]
    UnresolvedWord { language: String, name: String },

    /// The word was already assigned to a language.
    #[error("word \"{word}\" already belongs to language \"{language}\"")]
    LanguageAlreadySet { word: String, language: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
