// In-memory representation of a loaded OFFO hyphenation document.
//
// Everything here is constructed once by the loader and never mutated.
// Defaulting of absent values belongs to the consumer, not to the loader,
// so optional attributes stay `Option` all the way through.

/// Minimum number of letters required between a word boundary and a
/// hyphenation point. An absent value means the document imposes no
/// constraint from this source; the grammar compiler supplies its own
/// default in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HyphenMin {
    pub before: Option<u32>,
    pub after: Option<u32>,
}

/// The literal character used as the hyphen marker in exception data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyphenChar(pub char);

impl Default for HyphenChar {
    fn default() -> Self {
        HyphenChar('-')
    }
}

/// Properties of an explicit hyphen marker inside an exception entry.
///
/// `pre` is text inserted before the break, `post` after it, and `no` is
/// text that replaces the marker when no break is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HyphenMarker {
    pub pre: Option<String>,
    pub post: Option<String>,
    pub no: Option<String>,
}

/// One token of an exception entry: either syllable text or an explicit
/// hyphen marker between syllables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionToken {
    Syllable(String),
    Hyphen(HyphenMarker),
}

/// A whole-word exception overriding pattern-based rules for that exact
/// word: alternating syllable text and hyphen markers, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionEntry {
    pub tokens: Vec<ExceptionToken>,
}

/// A complete hyphenation document as produced by the loader.
///
/// `patterns` are the raw whitespace-split pattern tokens in declaration
/// order. Order defines no priority between patterns; priority is carried
/// by the digits embedded in each pattern. `exceptions` preserves order and
/// duplicates; resolving duplicate entries is the consuming grammar's job.
#[derive(Debug, Clone, Default)]
pub struct HyphenationDocument {
    pub hyphen_min: HyphenMin,
    pub hyphen_char: HyphenChar,
    pub exceptions: Vec<ExceptionEntry>,
    pub patterns: Vec<String>,
}
