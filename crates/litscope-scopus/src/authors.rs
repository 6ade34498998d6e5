//! Authors from the compound "Authors with affiliations" cell
//!
//! Scopus writes one chunk per author, chunks joined by `"; "`:
//!
//! ```text
//! Smith, J., Dept. of CS, MIT, Cambridge, United States; Doe, A., Stanford
//! ```
//!
//! The first two comma-separated fields of a chunk are the name
//! (`Last, Initials`), the rest is the affiliation. Affiliations may contain
//! `", "` themselves, so they are joined back, never split further.
//!
//! Scopus author IDs come in a separate `"Author(s) ID"` cell with a
//! trailing `;`. They are appended to names only when the counts line up.

use litscope_core::{Affiliation, Author};

use crate::config::ScopusConfig;
use crate::error::LoadError;
use crate::fields::{AUTHOR_IDS, AUTHORS_WITH_AFFILIATIONS, LIST_DELIMITER};
use crate::reader::RawRecord;

const FIELD_DELIMITER: &str = ", ";

/// Number of leading comma-separated fields that form the author name
const NAME_FIELDS: usize = 2;

/// Split one author chunk into (name, affiliation).
///
/// Chunks with fewer than two fields give back what is there as the name
/// and an empty affiliation.
pub fn split_name_affiliation(chunk: &str) -> (String, String) {
    let parts: Vec<&str> = chunk.split(FIELD_DELIMITER).collect();
    let split = parts.len().min(NAME_FIELDS);
    (
        parts[..split].join(FIELD_DELIMITER),
        parts[split..].join(FIELD_DELIMITER),
    )
}

/// Author IDs from the `"Author(s) ID"` cell.
///
/// The cell ends with `;`, so the last piece after splitting is always
/// dropped.
pub fn split_author_ids(cell: &str) -> Vec<&str> {
    let mut ids: Vec<&str> = cell.split(';').collect();
    ids.pop();
    ids
}

/// Build the author list of one row.
///
/// An empty or missing cell yields an empty list. IDs are attached to all
/// names or to none.
pub fn assemble_authors(record: &RawRecord, config: &ScopusConfig) -> Result<Vec<Author>, LoadError> {
    let cell = match record.get(AUTHORS_WITH_AFFILIATIONS) {
        Some(cell) if !cell.is_empty() => cell,
        _ => return Ok(Vec::new()),
    };

    let chunks: Vec<&str> = cell.split(LIST_DELIMITER).collect();

    let mut names = Vec::with_capacity(chunks.len());
    let mut affiliations = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        if chunk.split(FIELD_DELIMITER).count() < NAME_FIELDS {
            if config.strict_authors {
                return Err(LoadError::MalformedAuthor {
                    row: record.row(),
                    chunk: chunk.to_string(),
                });
            }
            log::debug!("row {}: short author entry {:?}", record.row(), chunk);
        }
        let (name, affiliation) = split_name_affiliation(chunk);
        names.push(name);
        affiliations.push(affiliation);
    }

    let ids = split_author_ids(record.get(AUTHOR_IDS).unwrap_or(""));
    if names.len() == ids.len() {
        for (name, id) in names.iter_mut().zip(&ids) {
            *name = format!("{name} (ID: {id})");
        }
    } else if !ids.is_empty() {
        log::debug!(
            "row {}: {} authors but {} author IDs, IDs not attached",
            record.row(),
            names.len(),
            ids.len()
        );
    }

    Ok(names
        .into_iter()
        .zip(affiliations)
        .map(|(name, affiliation)| Author::new(name, vec![Affiliation::new(affiliation)]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(authors: Option<&str>, ids: Option<&str>) -> RawRecord {
        let mut pairs = Vec::new();
        if let Some(a) = authors {
            pairs.push((AUTHORS_WITH_AFFILIATIONS, a));
        }
        if let Some(i) = ids {
            pairs.push((AUTHOR_IDS, i));
        }
        RawRecord::from_pairs(1, pairs)
    }

    fn lenient(record: &RawRecord) -> Vec<Author> {
        assemble_authors(record, &ScopusConfig::default()).unwrap()
    }

    fn names(authors: &[Author]) -> Vec<&str> {
        authors.iter().map(|a| a.name()).collect()
    }

    fn affiliation_names(authors: &[Author]) -> Vec<&str> {
        authors
            .iter()
            .map(|a| {
                assert_eq!(a.affiliations().len(), 1);
                a.affiliations()[0].name()
            })
            .collect()
    }

    #[test]
    fn two_authors_without_ids() {
        let authors = lenient(&row(Some("Smith, J., MIT; Doe, A., Stanford"), None));
        assert_eq!(names(&authors), vec!["Smith, J.", "Doe, A."]);
        assert_eq!(affiliation_names(&authors), vec!["MIT", "Stanford"]);
    }

    #[test]
    fn ids_attached_when_counts_match() {
        let authors = lenient(&row(
            Some("Smith, J., MIT; Doe, A., Stanford"),
            Some("1001;1002;"),
        ));
        assert_eq!(
            names(&authors),
            vec!["Smith, J. (ID: 1001)", "Doe, A. (ID: 1002)"]
        );
        assert_eq!(affiliation_names(&authors), vec!["MIT", "Stanford"]);
    }

    #[test]
    fn ids_dropped_when_counts_differ() {
        let authors = lenient(&row(Some("Smith, J., MIT; Doe, A., Stanford"), Some("1001;")));
        assert_eq!(names(&authors), vec!["Smith, J.", "Doe, A."]);
    }

    #[test]
    fn id_cell_without_trailing_separator_loses_last_id() {
        let authors = lenient(&row(Some("Smith, J., MIT; Doe, A., Stanford"), Some("1001;1002")));
        assert_eq!(names(&authors), vec!["Smith, J.", "Doe, A."]);
    }

    #[test]
    fn empty_or_missing_cell_gives_empty_list() {
        assert!(lenient(&row(Some(""), Some("1001;"))).is_empty());
        assert!(lenient(&row(None, None)).is_empty());
    }

    #[test]
    fn affiliation_keeps_inner_commas() {
        let authors = lenient(&row(
            Some("Smith, J., Dept. of CS, MIT, Cambridge, United States"),
            None,
        ));
        assert_eq!(names(&authors), vec!["Smith, J."]);
        assert_eq!(
            affiliation_names(&authors),
            vec!["Dept. of CS, MIT, Cambridge, United States"]
        );
    }

    #[test]
    fn author_without_affiliation() {
        let authors = lenient(&row(Some("Smith, J."), None));
        assert_eq!(names(&authors), vec!["Smith, J."]);
        assert_eq!(affiliation_names(&authors), vec![""]);
    }

    #[test]
    fn short_chunk_is_lenient_by_default() {
        let authors = lenient(&row(Some("Consortium; Doe, A., Stanford"), None));
        assert_eq!(names(&authors), vec!["Consortium", "Doe, A."]);
        assert_eq!(affiliation_names(&authors), vec!["", "Stanford"]);
    }

    #[test]
    fn short_chunk_rejected_in_strict_mode() {
        let record = RawRecord::from_pairs(4, [(AUTHORS_WITH_AFFILIATIONS, "Doe, A.; Consortium")]);
        match assemble_authors(&record, &ScopusConfig::strict()).unwrap_err() {
            LoadError::MalformedAuthor { row, chunk } => {
                assert_eq!(row, 4);
                assert_eq!(chunk, "Consortium");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn split_name_affiliation_cases() {
        assert_eq!(
            split_name_affiliation("Smith, J., MIT"),
            ("Smith, J.".to_string(), "MIT".to_string())
        );
        assert_eq!(
            split_name_affiliation("Smith"),
            ("Smith".to_string(), String::new())
        );
        assert_eq!(split_name_affiliation(""), (String::new(), String::new()));
    }

    #[test]
    fn split_author_ids_drops_trailing_piece() {
        assert_eq!(split_author_ids("1;2;"), vec!["1", "2"]);
        assert_eq!(split_author_ids("1"), Vec::<&str>::new());
        assert!(split_author_ids("").is_empty());
    }
}
