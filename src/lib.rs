//! Procedural linguistics library
//!
//! Constructed languages for world generation: words, languages, language
//! families, inflection and name pools.

pub mod linguistics;
