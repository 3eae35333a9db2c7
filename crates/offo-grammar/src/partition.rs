// Rule partitioning.
//
// The downstream Thrax compiler has a practical ceiling on the number of
// rewrite rules composable in one compilation unit, so the full ordered
// rule list is cut into fixed-size chunks. Each chunk becomes its own
// grammar file; the top-level file recomposes the exported results in the
// original order, which preserves overall priority semantics.

use crate::rules::CompiledRule;

/// Default maximum number of rules per compilation unit.
pub const PARTITION_SIZE: usize = 50;

/// A bounded run of consecutive rules destined for one grammar file.
/// Exists only during emission.
#[derive(Debug)]
pub struct RulePartition {
    /// Stable 1-based index, also used in the partition file name.
    pub index: usize,
    pub rules: Vec<CompiledRule>,
}

/// Cut the ordered rule list into partitions of at most `size` rules,
/// preserving global order across partition boundaries.
pub fn partition_rules(rules: Vec<CompiledRule>, size: usize) -> Vec<RulePartition> {
    let size = size.max(1);
    let mut partitions: Vec<RulePartition> = Vec::with_capacity(rules.len().div_ceil(size));
    for rule in rules {
        match partitions.last_mut() {
            Some(last) if last.rules.len() < size => last.rules.push(rule),
            _ => partitions.push(RulePartition {
                index: partitions.len() + 1,
                rules: vec![rule],
            }),
        }
    }
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ContextToken;

    fn rule(n: u8) -> CompiledRule {
        CompiledRule {
            priority: n % 10,
            left: vec![ContextToken::Symbol(char::from(b'a' + n % 26))],
            right: Vec::new(),
        }
    }

    #[test]
    fn hundred_twenty_rules_make_three_partitions() {
        let rules: Vec<CompiledRule> = (0..120).map(|n| rule(n as u8)).collect();
        let partitions = partition_rules(rules, PARTITION_SIZE);
        let sizes: Vec<usize> = partitions.iter().map(|p| p.rules.len()).collect();
        assert_eq!(sizes, vec![50, 50, 20]);
        assert_eq!(
            partitions.iter().map(|p| p.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn concatenating_partitions_reproduces_the_rule_list() {
        let rules: Vec<CompiledRule> = (0..77).map(|n| rule(n as u8)).collect();
        let original = rules.clone();
        let partitions = partition_rules(rules, 10);
        let rejoined: Vec<CompiledRule> =
            partitions.into_iter().flat_map(|p| p.rules).collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn no_partition_exceeds_the_size_limit() {
        let rules: Vec<CompiledRule> = (0..101).map(|n| rule(n as u8)).collect();
        for p in partition_rules(rules, 25) {
            assert!(p.rules.len() <= 25);
        }
    }

    #[test]
    fn empty_rule_list_yields_no_partitions() {
        assert!(partition_rules(Vec::new(), PARTITION_SIZE).is_empty());
    }
}
