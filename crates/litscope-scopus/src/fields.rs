//! Column normalizers
//!
//! One function per attribute. A missing column and an empty cell mean the
//! same thing: no value.

use litscope_core::DocumentIdentifier;

use crate::error::LoadError;
use crate::reader::RawRecord;

// Column names exactly as Scopus writes them in the header row
pub const DOI: &str = "DOI";
pub const TITLE: &str = "Title";
pub const PUBMED_ID: &str = "PubMed ID";
pub const EID: &str = "EID";
pub const AUTHORS_WITH_AFFILIATIONS: &str = "Authors with affiliations";
pub const AUTHOR_IDS: &str = "Author(s) ID";
pub const PUBLISHER: &str = "Publisher";
pub const YEAR: &str = "Year";
pub const AUTHOR_KEYWORDS: &str = "Author Keywords";
pub const ABSTRACT: &str = "Abstract";
pub const CITED_BY: &str = "Cited by";
pub const LANGUAGE: &str = "Language of Original Document";
pub const SOURCE_TITLE: &str = "Source title";
pub const DOCUMENT_TYPE: &str = "Document Type";

/// Separator between keywords (and between author chunks)
pub const LIST_DELIMITER: &str = "; ";

/// Non-empty cell text
fn text(record: &RawRecord, column: &str) -> Option<String> {
    record
        .get(column)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Non-empty cell parsed as a base-10 integer. Surrounding whitespace is
/// ignored; anything else that does not parse is an error.
fn integer(record: &RawRecord, column: &'static str) -> Result<Option<i32>, LoadError> {
    let Some(value) = record.get(column).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|source| LoadError::InvalidInteger {
            row: record.row(),
            column,
            value: value.to_string(),
            source,
        })
}

/// Identity from title, DOI, PubMed ID and EID
pub fn identifier(record: &RawRecord) -> DocumentIdentifier {
    let raw = |column: &str| record.get(column).map(String::from);
    DocumentIdentifier::new(raw(TITLE))
        .with_doi(raw(DOI))
        .with_pubmed(raw(PUBMED_ID))
        .with_eid(raw(EID))
}

pub fn title(record: &RawRecord) -> Option<String> {
    text(record, TITLE)
}

pub fn publisher(record: &RawRecord) -> Option<String> {
    text(record, PUBLISHER)
}

pub fn publication_year(record: &RawRecord) -> Result<Option<i32>, LoadError> {
    integer(record, YEAR)
}

/// Author keywords split on `"; "`
pub fn keywords(record: &RawRecord) -> Option<Vec<String>> {
    record
        .get(AUTHOR_KEYWORDS)
        .filter(|s| !s.is_empty())
        .map(|s| s.split(LIST_DELIMITER).map(String::from).collect())
}

pub fn abstract_text(record: &RawRecord) -> Option<String> {
    text(record, ABSTRACT)
}

pub fn citation_count(record: &RawRecord) -> Result<Option<i32>, LoadError> {
    integer(record, CITED_BY)
}

pub fn language(record: &RawRecord) -> Option<String> {
    text(record, LANGUAGE)
}

/// Journal or proceedings name
pub fn publication_source(record: &RawRecord) -> Option<String> {
    text(record, SOURCE_TITLE)
}

pub fn source_type(record: &RawRecord) -> Option<String> {
    text(record, DOCUMENT_TYPE)
}
