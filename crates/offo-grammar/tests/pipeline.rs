//! End-to-end compilation tests: document in, rendered grammar files out.

use offo_core::charset::Alphabet;
use offo_core::language;
use offo_core::model::{HyphenMin, HyphenationDocument};
use offo_grammar::{GrammarOptions, compile};

fn german() -> Alphabet {
    Alphabet::new(language::find("de").unwrap())
}

fn document(patterns: Vec<String>) -> HyphenationDocument {
    HyphenationDocument {
        hyphen_min: HyphenMin {
            before: Some(2),
            after: Some(2),
        },
        patterns,
        ..Default::default()
    }
}

/// 120 single-digit patterns must land in three partitions of 50/50/20,
/// named with 1-based indices, and the top-level composition must chain
/// them in order between the conversion tables.
#[test]
fn large_document_partitions_and_composes_in_order() {
    let letters: Vec<char> = ('a'..='z').collect();
    let patterns: Vec<String> = (0..120)
        .map(|n| {
            let a = letters[n % 26];
            let b = letters[(n + 7) % 26];
            let digit = (n % 9) + 1;
            format!("{a}{digit}{b}")
        })
        .collect();

    let files = compile(
        &document(patterns),
        &german(),
        &GrammarOptions::default(),
        "hyph-de.grm",
    )
    .unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "hyph-de-sym.grm",
            "hyph-de-1.grm",
            "hyph-de-2.grm",
            "hyph-de-3.grm",
            "hyph-de.grm",
        ]
    );

    let count_rules = |name: &str| {
        files
            .iter()
            .find(|f| f.name == name)
            .unwrap()
            .contents
            .lines()
            .filter(|l| l.contains("CDRewrite["))
            .count()
    };
    assert_eq!(count_rules("hyph-de-1.grm"), 50);
    assert_eq!(count_rules("hyph-de-2.grm"), 50);
    assert_eq!(count_rules("hyph-de-3.grm"), 20);

    let top = &files.last().unwrap().contents;
    assert!(top.contains(
        "export HYPHENATE = Optimize[CONV_IN @ part1.RULES @ part2.RULES @ part3.RULES @ CONV_OUT];"
    ));
}

/// Priorities order the emitted rules globally, regardless of the order in
/// which the source patterns were declared.
#[test]
fn priority_order_beats_declaration_order() {
    let patterns = vec![
        "e9f".to_string(),
        "a1b".to_string(),
        "c4d".to_string(),
        "g1h".to_string(),
    ];
    let files = compile(
        &document(patterns),
        &german(),
        &GrammarOptions::default(),
        "t.grm",
    )
    .unwrap();
    let part = files.iter().find(|f| f.name == "t-1.grm").unwrap();

    let pos = |needle: &str| part.contents.find(needle).unwrap();
    let p1a = pos(r#""a", "b""#);
    let p1b = pos(r#""g", "h""#);
    let p4 = pos(r#""c", "d""#);
    let p9 = pos(r#""e", "f""#);
    assert!(p1a < p1b, "same priority keeps declaration order");
    assert!(p1b < p4);
    assert!(p4 < p9);
}

/// German letters normalize into placeholder symbols before splitting, and
/// the rendered contexts use the internal spelling.
#[test]
fn native_letters_flow_through_normalization() {
    let patterns = vec![format!("{}1b", '\u{00FC}')]; // ü1b
    let files = compile(
        &document(patterns),
        &german(),
        &GrammarOptions::default(),
        "t.grm",
    )
    .unwrap();
    let part = files.iter().find(|f| f.name == "t-1.grm").unwrap();
    assert!(part.contents.contains(r#"CDRewrite["" : "-", "U", "b", sym.SIGMA_STAR];"#));
}

/// A failing pattern anywhere aborts the run before any file is produced.
#[test]
fn malformed_pattern_fails_the_whole_run() {
    let patterns = vec!["a1b".to_string(), "5".to_string()];
    assert!(
        compile(
            &document(patterns),
            &german(),
            &GrammarOptions::default(),
            "t.grm",
        )
        .is_err()
    );
}
