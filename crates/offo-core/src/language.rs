// Static per-language configuration.
//
// Each supported language declares the charset of its OFFO XML document,
// the internal flat symbol alphabet used by the grammar, and the mapping
// from native letters that fall outside plain ASCII to reserved internal
// placeholder symbols. The table is a plain static slice so the set of
// supported languages is statically inspectable; there is no runtime
// registry to populate.

use crate::CharsetError;

/// Configuration of one supported language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageConfig {
    /// Language identifier, also the base name of the XML document inside
    /// the OFFO archive (`offo-hyphenation/hyph/<id>.xml`).
    pub id: &'static str,
    /// Character encoding of the XML document.
    pub xml_charset: &'static str,
    /// Internal symbol alphabet: ASCII lowercase letters, the reserved
    /// placeholder symbols, the boundary dot, and the hyphen.
    pub symbols: &'static str,
    /// Native letters mapped to reserved placeholder symbols. ASCII letters
    /// are implied (lowercase identity, uppercase case-folded) and need not
    /// be listed. Pairs are ordered canonical-form first: the first external
    /// spelling listed for each placeholder is the one restored on output.
    pub extra_letters: &'static [(char, char)],
}

/// German: the four non-ASCII letters plus sharp s map to reserved
/// uppercase placeholders that the alphabet does not otherwise use.
const GERMAN: LanguageConfig = LanguageConfig {
    id: "de",
    xml_charset: "iso-8859-1",
    symbols: "abcdefghijklmnopqrstuvwxyzAOUNS.-",
    extra_letters: &[
        ('\u{00E4}', 'A'), // ä
        ('\u{00C4}', 'A'), // Ä
        ('\u{00F6}', 'O'), // ö
        ('\u{00D6}', 'O'), // Ö
        ('\u{00FC}', 'U'), // ü
        ('\u{00DC}', 'U'), // Ü
        ('\u{00E5}', 'N'), // å
        ('\u{00C5}', 'N'), // Å
        ('\u{00DF}', 'S'), // ß
    ],
};

/// All supported languages.
pub const LANGUAGES: &[LanguageConfig] = &[GERMAN];

/// Look up a language configuration by identifier.
pub fn find(id: &str) -> Result<&'static LanguageConfig, CharsetError> {
    LANGUAGES
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| CharsetError::UnknownLanguage(id.to_string()))
}
