// Compiled rewrite rules and priority grouping.
//
// A compiled rule is derived from one (pattern, digit-position) pair. Odd
// priorities insert a hyphen, even priorities delete one inserted by a rule
// composed earlier in the chain. Priority 0 rules are generated like any
// other even rule; they are inert because nothing precedes them.

/// Word boundary marker as it appears in raw patterns.
pub const BOUNDARY: char = '.';

/// One element of a rendered rewrite context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextToken {
    /// A literal internal symbol.
    Symbol(char),
    /// Begin-of-string, from a leading boundary marker.
    WordStart,
    /// End-of-string, from a trailing boundary marker.
    WordEnd,
    /// A position where a hyphen inserted by a previously composed rule is
    /// permitted but not required to appear.
    SoftHyphen,
}

/// A context-dependent rewrite rule derived from one priority digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// Priority digit value, 0-9.
    pub priority: u8,
    /// Required context left of the rewrite position.
    pub left: Vec<ContextToken>,
    /// Required context right of the rewrite position.
    pub right: Vec<ContextToken>,
}

impl CompiledRule {
    /// Odd priorities insert a hyphen; even priorities delete one.
    pub fn is_insertion(&self) -> bool {
        self.priority % 2 == 1
    }
}

/// Reorder rules into ascending priority, preserving source pattern order
/// within each priority.
///
/// The ordering is a correctness requirement for the downstream grammar:
/// composition is sequential, so higher-priority rules must come later in
/// the chain to be able to override the breaks placed by lower ones.
pub fn group_by_priority(rules: Vec<CompiledRule>) -> Vec<CompiledRule> {
    let mut buckets: [Vec<CompiledRule>; 10] = Default::default();
    for rule in rules {
        buckets[usize::from(rule.priority)].push(rule);
    }
    buckets.into_iter().flatten().collect()
}
