//! Loader for OFFO hyphenation documents.
//!
//! The OFFO distribution is a zip archive containing one XML document per
//! language at `offo-hyphenation/hyph/<lang>.xml`. This crate extracts and
//! decodes that document and walks it into the [`offo_core::model`] types.
//! It makes no defaulting decisions: absent attributes stay absent and are
//! resolved by the grammar compiler.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use offo_core::language::LanguageConfig;
use offo_core::model::{
    ExceptionEntry, ExceptionToken, HyphenChar, HyphenMarker, HyphenMin, HyphenationDocument,
};

/// Error type for archive extraction and document parsing.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("archive has no entry {0:?}")]
    MissingEntry(String),
    #[error("document has no {0:?} element")]
    MissingElement(&'static str),
    #[error("element {element:?}: attribute {attribute:?} has invalid value {value:?}")]
    BadAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
    #[error("hyphen element found outside an exceptions block")]
    MisplacedHyphen,
    #[error("charset {0:?} is not supported for XML documents")]
    UnsupportedEncoding(String),
    #[error("document is not valid {charset}")]
    InvalidText { charset: &'static str },
}

/// Load the hyphenation document for `config`'s language from an OFFO zip
/// archive on disk.
pub fn load_archive(
    path: &Path,
    config: &LanguageConfig,
) -> Result<HyphenationDocument, LoadError> {
    load_reader(BufReader::new(File::open(path)?), config)
}

/// Load from any seekable reader over the zip archive bytes.
pub fn load_reader<R: Read + Seek>(
    reader: R,
    config: &LanguageConfig,
) -> Result<HyphenationDocument, LoadError> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let entry_name = format!("offo-hyphenation/hyph/{}.xml", config.id);
    let mut entry = archive.by_name(&entry_name).map_err(|e| match e {
        zip::result::ZipError::FileNotFound => LoadError::MissingEntry(entry_name.clone()),
        other => LoadError::Zip(other),
    })?;
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    let text = decode(&bytes, config.xml_charset)?;
    parse_document(&text)
}

/// Decode the raw XML bytes according to the language's declared charset.
fn decode(bytes: &[u8], charset: &str) -> Result<String, LoadError> {
    match charset {
        // Latin-1 maps every byte directly to the equal code point.
        "iso-8859-1" | "latin-1" => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        "utf-8" => String::from_utf8(bytes.to_vec())
            .map_err(|_| LoadError::InvalidText { charset: "utf-8" }),
        other => Err(LoadError::UnsupportedEncoding(other.to_string())),
    }
}

/// Parse a decoded hyphenation XML document.
///
/// Expected shape (all elements except `patterns` optional):
///
/// ```xml
/// <hyphenation-info>
///   <hyphen-char value="-"/>
///   <hyphen-min before="2" after="2"/>
///   <exceptions> wo-chen<hyphen pre="k" post="k" no="ck"/>ende ... </exceptions>
///   <patterns> .ab1te .ab1wa ... </patterns>
/// </hyphenation-info>
/// ```
pub fn parse_document(xml: &str) -> Result<HyphenationDocument, LoadError> {
    let doc = roxmltree::Document::parse(xml)?;
    let root = doc.root_element();

    // Structural check before anything else: exception markup may only
    // appear inside an exceptions block. Anywhere else the document is
    // corrupt and there is no recovery.
    for node in doc.descendants() {
        if node.has_tag_name("hyphen")
            && !node.ancestors().any(|a| a.has_tag_name("exceptions"))
        {
            return Err(LoadError::MisplacedHyphen);
        }
    }

    let hyphen_min = match root.children().find(|n| n.has_tag_name("hyphen-min")) {
        Some(elem) => HyphenMin {
            before: int_attribute(&elem, "hyphen-min", "before")?,
            after: int_attribute(&elem, "hyphen-min", "after")?,
        },
        None => HyphenMin::default(),
    };

    let hyphen_char = match root.children().find(|n| n.has_tag_name("hyphen-char")) {
        Some(elem) => parse_hyphen_char(&elem)?,
        None => HyphenChar::default(),
    };

    let exceptions = match root.children().find(|n| n.has_tag_name("exceptions")) {
        Some(elem) => parse_exceptions(&elem, hyphen_char.0),
        None => Vec::new(),
    };

    let patterns = root
        .children()
        .find(|n| n.has_tag_name("patterns"))
        .ok_or(LoadError::MissingElement("patterns"))?
        .text()
        .unwrap_or("")
        .split_whitespace()
        .map(|p| p.to_string())
        .collect();

    Ok(HyphenationDocument {
        hyphen_min,
        hyphen_char,
        exceptions,
        patterns,
    })
}

/// Parse an optional non-negative integer attribute.
fn int_attribute(
    node: &roxmltree::Node<'_, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<Option<u32>, LoadError> {
    match node.attribute(attribute) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| LoadError::BadAttribute {
                element,
                attribute,
                value: value.to_string(),
            }),
    }
}

fn parse_hyphen_char(node: &roxmltree::Node<'_, '_>) -> Result<HyphenChar, LoadError> {
    let value = node.attribute("value").unwrap_or("-");
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(HyphenChar(c)),
        _ => Err(LoadError::BadAttribute {
            element: "hyphen-char",
            attribute: "value",
            value: value.to_string(),
        }),
    }
}

/// Walk the children of an `exceptions` element into entries.
///
/// Text content carries whole words separated by whitespace, with plain
/// hyphen characters between syllables. A `<hyphen>` element stands in for
/// a marker with explicit pre/post/no-break text and continues the current
/// word, so `wo<hyphen .../>che` is a single entry of three tokens.
fn parse_exceptions(node: &roxmltree::Node<'_, '_>, hyphen_char: char) -> Vec<ExceptionEntry> {
    let mut entries = Vec::new();
    let mut tokens: Vec<ExceptionToken> = Vec::new();
    let mut syllable = String::new();

    let mut flush_syllable = |tokens: &mut Vec<ExceptionToken>, syllable: &mut String| {
        if !syllable.is_empty() {
            tokens.push(ExceptionToken::Syllable(std::mem::take(syllable)));
        }
    };

    for child in node.children() {
        if child.is_text() {
            for ch in child.text().unwrap_or("").chars() {
                if ch == hyphen_char {
                    flush_syllable(&mut tokens, &mut syllable);
                    tokens.push(ExceptionToken::Hyphen(HyphenMarker::default()));
                } else if ch.is_whitespace() {
                    flush_syllable(&mut tokens, &mut syllable);
                    if !tokens.is_empty() {
                        entries.push(ExceptionEntry {
                            tokens: std::mem::take(&mut tokens),
                        });
                    }
                } else {
                    syllable.push(ch);
                }
            }
        } else if child.is_element() && child.has_tag_name("hyphen") {
            flush_syllable(&mut tokens, &mut syllable);
            tokens.push(ExceptionToken::Hyphen(HyphenMarker {
                pre: child.attribute("pre").map(str::to_string),
                post: child.attribute("post").map(str::to_string),
                no: child.attribute("no").map(str::to_string),
            }));
        }
    }

    flush_syllable(&mut tokens, &mut syllable);
    if !tokens.is_empty() {
        entries.push(ExceptionEntry { tokens });
    }
    entries
}
