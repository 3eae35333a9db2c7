// offo2thrax: Export OFFO hyphenation rules of a language to Thrax sources.
//
// Reads the language's XML document from an OFFO zip archive, compiles the
// TeX-style hyphenation patterns into context-dependent rewrite rules, and
// writes an OpenGRM Thrax grammar: a symbol file, one rule file per
// partition, and the top-level file exporting the HYPHENATE composition.
//
// Usage:
//   offo2thrax [-l LANG] OFFOFILE THRAXFILE
//
// Options:
//   -l, --language LANG   Language identifier (default: de)
//   -h, --help            Print help
//
// Partition and symbol files are written next to THRAXFILE, named after its
// base name. The files are staged under temporary names and renamed into
// place once every one of them is on disk, so a failed run leaves no
// partial grammar behind.

use std::path::Path;
use std::process;

use offo_cli::Command;
use offo_core::charset::Alphabet;
use offo_core::language;
use offo_grammar::GrammarOptions;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match offo_cli::parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Convert(options)) => options,
        Err(message) => {
            eprintln!("offo2thrax: {message}");
            eprintln!("run 'offo2thrax --help' for usage");
            process::exit(1);
        }
    };

    let config = match language::find(&options.language) {
        Ok(config) => config,
        Err(_) => {
            eprintln!(
                "offo2thrax: language {:?} is not configured",
                options.language
            );
            eprintln!(
                "supported languages: {}",
                language::LANGUAGES
                    .iter()
                    .map(|l| l.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            process::exit(1);
        }
    };

    let primary_name = match options.thrax_path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => {
            eprintln!(
                "offo2thrax: invalid output path {}",
                options.thrax_path.display()
            );
            process::exit(1);
        }
    };

    let document = match offo_loader::load_archive(&options.offo_path, config) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("offo2thrax: {}: {e}", options.offo_path.display());
            process::exit(1);
        }
    };

    let alphabet = Alphabet::new(config);
    let files = match offo_grammar::compile(
        &document,
        &alphabet,
        &GrammarOptions::default(),
        primary_name,
    ) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("offo2thrax: {e}");
            process::exit(1);
        }
    };

    // Everything rendered; only now touch the filesystem.
    let out_dir = match options.thrax_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if let Err(e) = offo_cli::write_grammar_files(out_dir, &files) {
        eprintln!("offo2thrax: failed to write grammar files: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("offo2thrax: Export OFFO hyphenation rules to an OpenGRM Thrax grammar.");
    println!();
    println!("Usage: offo2thrax [-l LANG] OFFOFILE THRAXFILE");
    println!();
    println!("  OFFOFILE    Zip archive of OFFO hyphenation documents");
    println!("  THRAXFILE   Top-level Thrax source to write; partition and");
    println!("              symbol files are written alongside it");
    println!();
    println!("Options:");
    println!("  -l, --language LANG   Language identifier (default: de)");
    println!("  -h, --help            Print this help");
}
