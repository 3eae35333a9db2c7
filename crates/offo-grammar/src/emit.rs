// Thrax source rendering.
//
// Pure text generation: everything is rendered into in-memory files so the
// caller can write all of them atomically at the end of the run. A run
// produces, for a primary file `<stem>.grm`:
//
//   <stem>-sym.grm    alphabet declaration and the optional-hyphen token
//   <stem>-<i>.grm    one file per rule partition, 1-based index
//   <stem>.grm        charset conversion tables and the exported top-level
//                     composition conv_in @ partitions @ conv_out

use std::fmt::Write;

use offo_core::charset::Alphabet;

use crate::partition::RulePartition;
use crate::rules::{CompiledRule, ContextToken};

/// A rendered grammar source file, not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarFile {
    /// File name relative to the output directory.
    pub name: String,
    pub contents: String,
}

/// Render the symbol file, every partition file, and the top-level file.
///
/// `primary_name` is the file name of the top-level grammar; partition and
/// symbol file names are derived from its base name.
pub fn render_all(
    alphabet: &Alphabet,
    partitions: &[RulePartition],
    primary_name: &str,
) -> Vec<GrammarFile> {
    let stem = stem_of(primary_name);
    let mut files = Vec::with_capacity(partitions.len() + 2);
    files.push(render_symbols(alphabet, stem));
    for partition in partitions {
        files.push(render_partition(partition, stem));
    }
    files.push(render_toplevel(alphabet, partitions, primary_name, stem));
    files
}

/// File name of the symbol table grammar.
pub fn symbol_file_name(stem: &str) -> String {
    format!("{stem}-sym.grm")
}

/// File name of one partition grammar.
pub fn partition_file_name(stem: &str, index: usize) -> String {
    format!("{stem}-{index}.grm")
}

fn stem_of(primary_name: &str) -> &str {
    match primary_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => primary_name,
    }
}

/// Alphabet declaration: the union of every internal symbol (the hyphen and
/// boundary dot included), its closure, and the optional-hyphen token used
/// for soft-hyphen placeholders in rule contexts.
fn render_symbols(alphabet: &Alphabet, stem: &str) -> GrammarFile {
    let mut out = String::new();
    let _ = writeln!(out, "# Internal symbol alphabet shared by all rule partitions.");
    let union = alphabet
        .symbols()
        .iter()
        .map(|&s| quote(s))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "export SIGMA = {union};");
    let _ = writeln!(out, "export SIGMA_STAR = SIGMA*;");
    let _ = writeln!(out, "export OPT_HYPHEN = (\"-\")?;");
    GrammarFile {
        name: symbol_file_name(stem),
        contents: out,
    }
}

/// One self-contained partition file: local alphabet import plus the
/// composed chain of context-dependent rewrites, in rule order.
fn render_partition(partition: &RulePartition, stem: &str) -> GrammarFile {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# Hyphenation rewrite rules, partition {}.",
        partition.index
    );
    let _ = writeln!(out, "import '{}' as sym;", symbol_file_name(stem));
    let _ = writeln!(out);

    for (n, rule) in partition.rules.iter().enumerate() {
        let _ = writeln!(
            out,
            "r{num} = CDRewrite[{change}, {left}, {right}, sym.SIGMA_STAR];",
            num = n + 1,
            change = render_change(rule),
            left = render_context(&rule.left),
            right = render_context(&rule.right),
        );
    }

    let chain = (1..=partition.rules.len())
        .map(|n| format!("r{n}"))
        .collect::<Vec<_>>()
        .join(" @ ");
    let _ = writeln!(out);
    let _ = writeln!(out, "export RULES = Optimize[{chain}];");

    GrammarFile {
        name: partition_file_name(stem, partition.index),
        contents: out,
    }
}

/// Top-level file: partition imports, the enumerated charset conversion
/// tables, and the exported composition in strict partition order.
fn render_toplevel(
    alphabet: &Alphabet,
    partitions: &[RulePartition],
    primary_name: &str,
    stem: &str,
) -> GrammarFile {
    let mut out = String::new();
    let _ = writeln!(out, "# Top-level hyphenation grammar.");
    for partition in partitions {
        let _ = writeln!(
            out,
            "import '{}' as part{};",
            partition_file_name(stem, partition.index),
            partition.index
        );
    }
    let _ = writeln!(out);

    // Input conversion: one explicit pair per declared external character.
    let conv_in = alphabet
        .mappings()
        .iter()
        .map(|&(ext, int)| format!("({} : {})", quote(ext), quote(int)))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "conv_in_pair = {conv_in};");
    let _ = writeln!(out, "export CONV_IN = Optimize[conv_in_pair*];");
    let _ = writeln!(out);

    // Output conversion: one canonical pair per internal symbol.
    let conv_out = alphabet
        .canonical()
        .iter()
        .map(|&(int, ext)| format!("({} : {})", quote(int), quote(ext)))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "conv_out_pair = {conv_out};");
    let _ = writeln!(out, "export CONV_OUT = Optimize[conv_out_pair*];");
    let _ = writeln!(out);

    let mut chain = vec!["CONV_IN".to_string()];
    chain.extend(partitions.iter().map(|p| format!("part{}.RULES", p.index)));
    chain.push("CONV_OUT".to_string());
    let _ = writeln!(out, "export HYPHENATE = Optimize[{}];", chain.join(" @ "));

    GrammarFile {
        name: primary_name.to_string(),
        contents: out,
    }
}

/// The rewrite itself: insertions add a hyphen, deletions remove one placed
/// by an earlier rule in the chain.
fn render_change(rule: &CompiledRule) -> &'static str {
    if rule.is_insertion() {
        "\"\" : \"-\""
    } else {
        "\"-\" : \"\""
    }
}

/// Render a context token sequence. An empty context is the explicit empty
/// string token.
fn render_context(tokens: &[ContextToken]) -> String {
    if tokens.is_empty() {
        return "\"\"".to_string();
    }
    tokens
        .iter()
        .map(|t| match t {
            ContextToken::Symbol(c) => quote(*c),
            ContextToken::WordStart => "[BOS]".to_string(),
            ContextToken::WordEnd => "[EOS]".to_string(),
            ContextToken::SoftHyphen => "sym.OPT_HYPHEN".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(c: char) -> String {
    format!("\"{c}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition_rules;
    use offo_core::charset::Alphabet;
    use offo_core::language;

    fn german() -> Alphabet {
        Alphabet::new(language::find("de").unwrap())
    }

    fn rule(priority: u8, left: &str, right: &str) -> CompiledRule {
        CompiledRule {
            priority,
            left: left.chars().map(ContextToken::Symbol).collect(),
            right: right.chars().map(ContextToken::Symbol).collect(),
        }
    }

    #[test]
    fn file_names_derive_from_the_primary_base_name() {
        let alphabet = german();
        let partitions = partition_rules(vec![rule(1, "a", "b")], 50);
        let files = render_all(&alphabet, &partitions, "hyph-de.grm");
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["hyph-de-sym.grm", "hyph-de-1.grm", "hyph-de.grm"]);
    }

    #[test]
    fn insertion_and_deletion_rewrites() {
        let partitions = partition_rules(vec![rule(1, "a", "b"), rule(2, "c", "d")], 50);
        let file = render_partition(&partitions[0], "x");
        assert!(file.contents.contains(
            r#"r1 = CDRewrite["" : "-", "a", "b", sym.SIGMA_STAR];"#
        ));
        assert!(file.contents.contains(
            r#"r2 = CDRewrite["-" : "", "c", "d", sym.SIGMA_STAR];"#
        ));
        assert!(file.contents.contains("export RULES = Optimize[r1 @ r2];"));
    }

    #[test]
    fn boundary_and_placeholder_tokens_render_in_dialect() {
        let r = CompiledRule {
            priority: 1,
            left: vec![
                ContextToken::WordStart,
                ContextToken::Symbol('a'),
                ContextToken::SoftHyphen,
                ContextToken::Symbol('b'),
            ],
            right: vec![ContextToken::Symbol('c'), ContextToken::WordEnd],
        };
        assert_eq!(render_context(&r.left), r#"[BOS] "a" sym.OPT_HYPHEN "b""#);
        assert_eq!(render_context(&r.right), r#""c" [EOS]"#);
    }

    #[test]
    fn empty_context_renders_as_empty_string_token() {
        assert_eq!(render_context(&[]), "\"\"");
    }

    #[test]
    fn symbol_file_covers_the_whole_alphabet() {
        let file = render_symbols(&german(), "hyph-de");
        assert!(file.contents.contains("\"a\" | \"b\""));
        assert!(file.contents.contains("\"S\" | \".\" | \"-\""));
        assert!(file.contents.contains("export SIGMA_STAR = SIGMA*;"));
        assert!(file.contents.contains("export OPT_HYPHEN = (\"-\")?;"));
    }

    #[test]
    fn toplevel_composes_partitions_in_order() {
        let alphabet = german();
        let rules: Vec<CompiledRule> = (0u8..7).map(|n| rule(n % 10, "a", "b")).collect();
        let partitions = partition_rules(rules, 3);
        let file = render_toplevel(&alphabet, &partitions, "hyph-de.grm", "hyph-de");
        assert!(file.contents.contains(
            "export HYPHENATE = Optimize[CONV_IN @ part1.RULES @ part2.RULES @ part3.RULES @ CONV_OUT];"
        ));
        assert!(file.contents.contains("import 'hyph-de-1.grm' as part1;"));
    }

    #[test]
    fn conversion_tables_enumerate_character_pairs() {
        let file = render_toplevel(&german(), &[], "hyph-de.grm", "hyph-de");
        let umlaut_in = format!("(\"{}\" : \"A\")", '\u{00E4}');
        assert!(file.contents.contains(&umlaut_in));
        assert!(file.contents.contains(r#"("A" : "a")"#)); // ASCII case fold
        // Canonical restoration uses the lowercase spelling.
        let umlaut_out = format!("(\"A\" : \"{}\")", '\u{00E4}');
        assert!(file.contents.contains(&umlaut_out));
    }

    #[test]
    fn primary_name_without_extension_is_used_verbatim() {
        assert_eq!(stem_of("hyph-de.grm"), "hyph-de");
        assert_eq!(stem_of("hyphde"), "hyphde");
        assert_eq!(stem_of(".grm"), ".grm");
    }
}
