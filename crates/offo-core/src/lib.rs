//! Shared types for the OFFO-to-Thrax hyphenation grammar tooling.
//!
//! - [`model`] -- In-memory representation of a loaded hyphenation document
//! - [`language`] -- Static per-language configuration table
//! - [`charset`] -- Bidirectional mapping between native letters and the
//!   internal flat ASCII symbol alphabet

pub mod charset;
pub mod language;
pub mod model;

/// Error type for language lookup and charset conversion.
#[derive(Debug, thiserror::Error)]
pub enum CharsetError {
    #[error("language {0:?} is not configured")]
    UnknownLanguage(String),
    #[error("character {ch:?} is not in the declared alphabet of language {language:?}")]
    UnsupportedCharacter { ch: char, language: String },
    #[error("symbol {symbol:?} is not an internal symbol of language {language:?}")]
    UnknownSymbol { symbol: char, language: String },
}
