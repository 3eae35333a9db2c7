// Charset normalization between a document's native letters and the
// internal flat ASCII symbol alphabet.
//
// Patterns are case-insensitive, so normalization case-folds: every
// external spelling of a letter maps to a single internal symbol, and the
// reverse map restores one canonical (lowercase) spelling per symbol. The
// alphabet is closed: any character outside it is an error, never passed
// through silently.

use hashbrown::HashMap;

use crate::CharsetError;
use crate::language::LanguageConfig;

/// Bidirectional character mapping for one language, built once from its
/// [`LanguageConfig`] and immutable afterwards.
pub struct Alphabet {
    language: &'static str,
    symbols: Vec<char>,
    to_internal: HashMap<char, char>,
    to_external: HashMap<char, char>,
    /// All (external, internal) pairs in a stable enumeration order, for
    /// rendering the input conversion table.
    mappings: Vec<(char, char)>,
    /// One (internal, canonical external) pair per symbol, in alphabet
    /// order, for rendering the output conversion table.
    canonical: Vec<(char, char)>,
}

impl Alphabet {
    /// Build the alphabet for a language.
    ///
    /// ASCII letters are implied by every configuration: lowercase maps to
    /// itself, uppercase case-folds to lowercase. The boundary dot and the
    /// hyphen map to themselves. Configured extra letters map to their
    /// reserved placeholder symbols.
    pub fn new(config: &LanguageConfig) -> Self {
        let mut mappings: Vec<(char, char)> = Vec::new();
        for c in 'a'..='z' {
            mappings.push((c, c));
        }
        for c in 'A'..='Z' {
            mappings.push((c, c.to_ascii_lowercase()));
        }
        mappings.extend_from_slice(config.extra_letters);
        mappings.push(('.', '.'));
        mappings.push(('-', '-'));

        let mut to_internal = HashMap::new();
        let mut to_external = HashMap::new();
        for &(external, internal) in &mappings {
            to_internal.insert(external, internal);
            // First external spelling listed for a symbol is canonical.
            to_external.entry(internal).or_insert(external);
        }

        let symbols: Vec<char> = config.symbols.chars().collect();
        let canonical = symbols
            .iter()
            .map(|&s| (s, *to_external.get(&s).unwrap_or(&s)))
            .collect();

        Self {
            language: config.id,
            symbols,
            to_internal,
            to_external,
            mappings,
            canonical,
        }
    }

    /// The internal symbol alphabet, in declaration order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// All (external, internal) character pairs, in a stable order.
    pub fn mappings(&self) -> &[(char, char)] {
        &self.mappings
    }

    /// One (internal, canonical external) pair per symbol, in alphabet order.
    pub fn canonical(&self) -> &[(char, char)] {
        &self.canonical
    }

    /// Map a native character to its internal symbol.
    pub fn to_internal(&self, ch: char) -> Result<char, CharsetError> {
        self.to_internal
            .get(&ch)
            .copied()
            .ok_or(CharsetError::UnsupportedCharacter {
                ch,
                language: self.language.to_string(),
            })
    }

    /// Map an internal symbol back to its canonical native character.
    pub fn to_external(&self, symbol: char) -> Result<char, CharsetError> {
        self.to_external
            .get(&symbol)
            .copied()
            .ok_or(CharsetError::UnknownSymbol {
                symbol,
                language: self.language.to_string(),
            })
    }

    /// Normalize a raw pattern token: letters and boundary dots go through
    /// [`Self::to_internal`], embedded priority digits pass unchanged.
    pub fn normalize_pattern(&self, raw: &str) -> Result<String, CharsetError> {
        let mut out = String::with_capacity(raw.len());
        for ch in raw.chars() {
            if ch.is_ascii_digit() {
                out.push(ch);
            } else {
                out.push(self.to_internal(ch)?);
            }
        }
        Ok(out)
    }
}
