// Criterion benchmarks for the pattern compiler.
//
// Uses a synthetic pattern set shaped like real TeX hyphenation data
// (short letter runs, one or two embedded digits, occasional boundary
// markers), so no external pattern archive is needed.
//
// Run:
//   cargo bench -p offo-grammar

use criterion::{Criterion, criterion_group, criterion_main};

use offo_core::charset::Alphabet;
use offo_core::language;
use offo_core::model::HyphenationDocument;
use offo_grammar::{GrammarOptions, compile, splitter};

/// Deterministic synthetic pattern set.
fn synthetic_patterns(count: usize) -> Vec<String> {
    let letters = b"abcdefghijklmnopqrstuvwxyz";
    (0..count)
        .map(|n| {
            let a = letters[n % 26] as char;
            let b = letters[(n / 26) % 26] as char;
            let c = letters[(n / 676) % 26] as char;
            let digit = char::from(b'1' + (n % 5) as u8);
            match n % 4 {
                0 => format!("{a}{b}{digit}{c}"),
                1 => format!(".{a}{b}{digit}{c}{a}"),
                2 => format!("{a}{digit}{b}{c}{digit}{a}"),
                _ => format!("{a}{b}{c}{digit}{a}{b}."),
            }
        })
        .collect()
}

fn bench_split_patterns(c: &mut Criterion) {
    let alphabet = Alphabet::new(language::find("de").unwrap());
    let normalized: Vec<Vec<char>> = synthetic_patterns(5000)
        .iter()
        .map(|p| alphabet.normalize_pattern(p).unwrap().chars().collect())
        .collect();

    c.bench_function("split_5000_patterns", |b| {
        b.iter(|| {
            for pattern in &normalized {
                std::hint::black_box(splitter::split_pattern(pattern, 2, 2).unwrap());
            }
        });
    });
}

fn bench_full_compile(c: &mut Criterion) {
    let alphabet = Alphabet::new(language::find("de").unwrap());
    let document = HyphenationDocument {
        patterns: synthetic_patterns(5000),
        ..Default::default()
    };

    c.bench_function("compile_5000_patterns", |b| {
        b.iter(|| {
            std::hint::black_box(
                compile(
                    &document,
                    &alphabet,
                    &GrammarOptions::default(),
                    "hyph-de.grm",
                )
                .unwrap(),
            );
        });
    });
}

criterion_group!(benches, bench_split_patterns, bench_full_compile);
criterion_main!(benches);
