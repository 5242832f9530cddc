//! Name generation from a lexicon's name pools.
//!
//! Picks words from the pool a family resolves to and renders them through
//! the inflection resolvers, so generated names follow the grammar of the
//! language they come from.

pub mod generator;

pub use generator::NameGenerator;
