//! Compiler from TeX-style hyphenation patterns to OpenGRM Thrax source.
//!
//! The pipeline is a pure batch transformation:
//!
//! 1. normalize each pattern into the internal symbol alphabet,
//! 2. [`splitter`] -- split every pattern into one rewrite rule per
//!    embedded priority digit,
//! 3. [`rules`] -- group the rules by ascending priority,
//! 4. [`partition`] -- cut the ordered list into fixed-size chunks,
//! 5. [`emit`] -- render symbol, partition and top-level grammar files.
//!
//! Nothing is written to disk here; [`compile`] returns rendered files and
//! the caller writes them once the whole set has rendered, so a failed run
//! never leaves partial output behind.

pub mod emit;
pub mod partition;
pub mod rules;
pub mod splitter;

use offo_core::CharsetError;
use offo_core::charset::Alphabet;
use offo_core::model::HyphenationDocument;

use emit::GrammarFile;

/// Error type for pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error(transparent)]
    Charset(#[from] CharsetError),
    #[error("pattern {pattern:?}: digit at index {point} has no adjacent letter on either side")]
    DanglingDigit { pattern: String, point: usize },
}

/// Compilation options.
///
/// `min_before` and `min_after` are fallbacks for documents whose
/// `hyphen-min` element omits the corresponding attribute; the document
/// itself always wins when it declares a value.
#[derive(Debug, Clone, Copy)]
pub struct GrammarOptions {
    pub min_before: u32,
    pub min_after: u32,
    pub partition_size: usize,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            min_before: 2,
            min_after: 2,
            partition_size: partition::PARTITION_SIZE,
        }
    }
}

/// Compile a loaded hyphenation document into rendered Thrax source files.
///
/// `primary_name` is the file name of the top-level grammar; the symbol and
/// partition file names are derived from its base name with a 1-based
/// partition index and the `.grm` extension.
pub fn compile(
    document: &HyphenationDocument,
    alphabet: &Alphabet,
    options: &GrammarOptions,
    primary_name: &str,
) -> Result<Vec<GrammarFile>, GrammarError> {
    let before = document.hyphen_min.before.unwrap_or(options.min_before);
    let after = document.hyphen_min.after.unwrap_or(options.min_after);

    let mut all_rules = Vec::new();
    for raw in &document.patterns {
        let normalized: Vec<char> = alphabet.normalize_pattern(raw)?.chars().collect();
        all_rules.extend(splitter::split_pattern(&normalized, before, after)?);
    }

    let ordered = rules::group_by_priority(all_rules);
    let partitions = partition::partition_rules(ordered, options.partition_size);
    Ok(emit::render_all(alphabet, &partitions, primary_name))
}
