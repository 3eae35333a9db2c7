// offo-cli: argument handling and output staging for the conversion tools.

use std::io;
use std::path::{Path, PathBuf};

use offo_grammar::emit::GrammarFile;

/// Parsed command line of `offo2thrax`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub language: String,
    pub offo_path: PathBuf,
    pub thrax_path: PathBuf,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Convert(Options),
}

/// Parse the `offo2thrax` command line: an optional language flag plus the
/// two positional arguments OFFOFILE and THRAXFILE.
///
/// `-h`/`--help` anywhere wins over everything else. The language defaults
/// to `de` when no flag is given; whether the value names a configured
/// language is decided later, against the static language table.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut language: Option<String> = None;
    let mut positional: Vec<&String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-l" | "--language" => match iter.next() {
                Some(value) => language = Some(value.clone()),
                None => return Err(format!("{arg} requires a value")),
            },
            other => {
                if let Some(value) = other.strip_prefix("--language=") {
                    language = Some(value.to_string());
                } else if other.starts_with('-') && other.len() > 1 {
                    return Err(format!("unknown option {other:?}"));
                } else {
                    positional.push(arg);
                }
            }
        }
    }

    match positional.as_slice() {
        [offo, thrax] => Ok(Command::Convert(Options {
            language: language.unwrap_or_else(|| "de".to_string()),
            offo_path: PathBuf::from(offo),
            thrax_path: PathBuf::from(thrax),
        })),
        other => Err(format!(
            "expected OFFOFILE and THRAXFILE, got {} positional argument(s)",
            other.len()
        )),
    }
}

/// Write rendered grammar files into `dir`.
///
/// Every file is staged under a temporary name first; the staged files are
/// renamed into place only once all of them are on disk. A failed write
/// removes whatever was staged, so an aborted run leaves no partial
/// grammar behind.
pub fn write_grammar_files(dir: &Path, files: &[GrammarFile]) -> io::Result<()> {
    let staged: Vec<PathBuf> = files
        .iter()
        .map(|f| dir.join(format!("{}.tmp", f.name)))
        .collect();

    for (tmp, file) in staged.iter().zip(files) {
        if let Err(e) = std::fs::write(tmp, &file.contents) {
            for written in &staged {
                let _ = std::fs::remove_file(written);
            }
            return Err(e);
        }
    }
    for (tmp, file) in staged.iter().zip(files) {
        std::fs::rename(tmp, dir.join(&file.name))?;
    }
    Ok(())
}
