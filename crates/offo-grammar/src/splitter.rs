// Pattern splitting: one rewrite rule per embedded priority digit.
//
// A TeX-style pattern like ".ab1cd." mixes letters, optional boundary dots
// and single-digit priorities. Each digit becomes one context-dependent
// rewrite rule whose left and right contexts are the surrounding symbols.
// Word-boundary minimum-hyphenation-distance constraints suppress the
// soft-hyphen placeholders near the protected zones at either end.
//
// The placeholder insertion conditions (`i + 1 < point` and
// `i >= min_hyphen_pos` on the left; `i < last_letter_pos` and
// `i < max_hyphen_pos` on the right) are deliberately asymmetric; the
// downstream grammar depends on these exact semantics.

use crate::GrammarError;
use crate::rules::{BOUNDARY, CompiledRule, ContextToken};

/// Split one normalized pattern into compiled rules, one per digit.
///
/// `before` and `after` are the resolved minimum distances between a word
/// boundary and a hyphenation point; they only take effect when the pattern
/// actually carries the corresponding boundary marker.
///
/// A pattern without digits yields no rules. A digit with no letter on
/// either side (boundary markers aside) is malformed input.
pub fn split_pattern(
    pattern: &[char],
    before: u32,
    after: u32,
) -> Result<Vec<CompiledRule>, GrammarError> {
    let last_letter_pos = match pattern.iter().rposition(|c| c.is_ascii_alphabetic()) {
        Some(pos) => pos,
        None => {
            // No letters at all: legal only if there are no digits either.
            if let Some(point) = pattern.iter().position(|c| c.is_ascii_digit()) {
                return Err(dangling(pattern, point));
            }
            return Ok(Vec::new());
        }
    };

    let min_hyphen_pos = min_hyphen_pos(pattern, before);
    let max_hyphen_pos = max_hyphen_pos(pattern, after, last_letter_pos);

    let mut rules = Vec::new();
    for (point, &ch) in pattern.iter().enumerate() {
        let Some(priority) = ch.to_digit(10) else {
            continue;
        };

        let left_letters = pattern[..point].iter().any(|c| c.is_ascii_alphabetic());
        let right_letters = pattern[point + 1..]
            .iter()
            .any(|c| c.is_ascii_alphabetic());
        if !left_letters && !right_letters {
            return Err(dangling(pattern, point));
        }

        let mut left = Vec::new();
        for (i, &sym) in pattern.iter().enumerate().take(point) {
            if sym.is_ascii_digit() {
                continue;
            }
            if sym == BOUNDARY {
                left.push(ContextToken::WordStart);
                continue;
            }
            left.push(ContextToken::Symbol(sym));
            if i + 1 < point && i >= min_hyphen_pos {
                left.push(ContextToken::SoftHyphen);
            }
        }

        let mut right = Vec::new();
        for (i, &sym) in pattern.iter().enumerate().skip(point + 1) {
            if sym.is_ascii_digit() {
                continue;
            }
            if sym == BOUNDARY {
                right.push(ContextToken::WordEnd);
                continue;
            }
            right.push(ContextToken::Symbol(sym));
            if i < last_letter_pos && i < max_hyphen_pos {
                right.push(ContextToken::SoftHyphen);
            }
        }

        rules.push(CompiledRule {
            priority: priority as u8,
            left,
            right,
        });
    }

    Ok(rules)
}

/// Leftmost index at which a hyphenation point may exist.
///
/// With a leading boundary marker this is the index of the `(before + 1)`-th
/// letter, i.e. the first `before` letters of the word are protected.
/// Without one the pattern floats freely inside the word and no left
/// constraint applies.
fn min_hyphen_pos(pattern: &[char], before: u32) -> usize {
    if pattern.first() != Some(&BOUNDARY) {
        return 0;
    }
    let mut remaining = before;
    for (i, &c) in pattern.iter().enumerate() {
        if c.is_ascii_alphabetic() {
            if remaining == 0 {
                return i;
            }
            remaining -= 1;
        }
    }
    // Fewer letters than the protected zone: suppress everywhere.
    pattern.len()
}

/// Rightmost index (exclusive for placeholder purposes) symmetric to
/// [`min_hyphen_pos`]: with a trailing boundary marker, the index of the
/// `(after + 1)`-th letter counting from the end.
fn max_hyphen_pos(pattern: &[char], after: u32, last_letter_pos: usize) -> usize {
    if pattern.last() != Some(&BOUNDARY) {
        return last_letter_pos;
    }
    let mut remaining = after;
    for (i, &c) in pattern.iter().enumerate().rev() {
        if c.is_ascii_alphabetic() {
            if remaining == 0 {
                return i;
            }
            remaining -= 1;
        }
    }
    0
}

fn dangling(pattern: &[char], point: usize) -> GrammarError {
    GrammarError::DanglingDigit {
        pattern: pattern.iter().collect(),
        point,
    }
}
