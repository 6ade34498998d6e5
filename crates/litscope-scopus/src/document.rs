//! Scopus CSV row as a [`Document`]

use litscope_core::{Author, Document, DocumentIdentifier};

use crate::authors::assemble_authors;
use crate::config::ScopusConfig;
use crate::error::LoadError;
use crate::fields;
use crate::reader::RawRecord;

/// Document built from one row of a Scopus CSV export.
///
/// All attributes are extracted when the row is converted, so a bad cell
/// surfaces at load time rather than on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopusCsvDocument {
    id: DocumentIdentifier,
    title: Option<String>,
    authors: Vec<Author>,
    publisher: Option<String>,
    publication_year: Option<i32>,
    keywords: Option<Vec<String>>,
    abstract_text: Option<String>,
    citation_count: Option<i32>,
    language: Option<String>,
    publication_source: Option<String>,
    source_type: Option<String>,
}

impl ScopusCsvDocument {
    pub fn from_record(record: &RawRecord, config: &ScopusConfig) -> Result<Self, LoadError> {
        Ok(Self {
            id: fields::identifier(record),
            title: fields::title(record),
            authors: assemble_authors(record, config)?,
            publisher: fields::publisher(record),
            publication_year: fields::publication_year(record)?,
            keywords: fields::keywords(record),
            abstract_text: fields::abstract_text(record),
            citation_count: fields::citation_count(record)?,
            language: fields::language(record),
            publication_source: fields::publication_source(record),
            source_type: fields::source_type(record),
        })
    }
}

impl Document for ScopusCsvDocument {
    fn id(&self) -> &DocumentIdentifier {
        &self.id
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Always `Some`; rows without author data give an empty slice.
    fn authors(&self) -> Option<&[Author]> {
        Some(&self.authors)
    }

    fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    fn publication_year(&self) -> Option<i32> {
        self.publication_year
    }

    fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    fn abstract_text(&self) -> Option<&str> {
        self.abstract_text.as_deref()
    }

    fn citation_count(&self) -> Option<i32> {
        self.citation_count
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn publication_source(&self) -> Option<&str> {
        self.publication_source.as_deref()
    }

    fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::*;

    fn full_row() -> RawRecord {
        RawRecord::from_pairs(
            1,
            [
                (TITLE, "Formate assay in body fluids"),
                (DOI, "10.1016/0006-2944(75)90147-7"),
                (PUBMED_ID, "1"),
                (EID, "2-s2.0-0016687543"),
                (
                    AUTHORS_WITH_AFFILIATIONS,
                    "Makar, A.B., Univ. of Iowa, Iowa City; McMartin, K.E., Univ. of Iowa",
                ),
                (AUTHOR_IDS, "7004212771;7005396544;"),
                (PUBLISHER, "Academic Press"),
                (YEAR, "1975"),
                (AUTHOR_KEYWORDS, "methanol; poisoning"),
                (ABSTRACT, "A rapid assay for formate."),
                (CITED_BY, "42"),
                (LANGUAGE, "English"),
                (SOURCE_TITLE, "Biochemical Medicine"),
                (DOCUMENT_TYPE, "Article"),
                ("Volume", "13"),
            ],
        )
    }

    #[test]
    fn full_row_populates_every_attribute() {
        let doc = ScopusCsvDocument::from_record(&full_row(), &ScopusConfig::default()).unwrap();

        // Identifier
        assert_eq!(doc.id().title(), Some("Formate assay in body fluids"));
        assert_eq!(doc.id().doi(), Some("10.1016/0006-2944(75)90147-7"));
        assert_eq!(doc.id().pubmed(), Some("1"));
        assert_eq!(doc.id().eid(), Some("2-s2.0-0016687543"));

        // Content
        assert_eq!(doc.title(), Some("Formate assay in body fluids"));
        assert_eq!(doc.abstract_text(), Some("A rapid assay for formate."));
        assert_eq!(
            doc.keywords(),
            Some(&["methanol".to_string(), "poisoning".to_string()][..])
        );

        // Publication
        assert_eq!(doc.publisher(), Some("Academic Press"));
        assert_eq!(doc.publication_year(), Some(1975));
        assert_eq!(doc.citation_count(), Some(42));
        assert_eq!(doc.language(), Some("English"));
        assert_eq!(doc.publication_source(), Some("Biochemical Medicine"));
        assert_eq!(doc.source_type(), Some("Article"));

        // Authors
        let authors = doc.authors().unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].name(), "Makar, A.B. (ID: 7004212771)");
        assert_eq!(
            authors[0].affiliations()[0].name(),
            "Univ. of Iowa, Iowa City"
        );
        assert_eq!(authors[1].name(), "McMartin, K.E. (ID: 7005396544)");
    }

    #[test]
    fn empty_row_keeps_identifier() {
        let doc = ScopusCsvDocument::from_record(
            &RawRecord::from_pairs(1, [(TITLE, "")]),
            &ScopusConfig::default(),
        )
        .unwrap();
        assert!(doc.title().is_none());
        assert!(doc.id().title().is_none());
        assert!(doc.id().doi().is_none());
        assert_eq!(doc.authors(), Some(&[][..]));
        assert!(doc.keywords().is_none());
        assert!(doc.publication_year().is_none());
        assert!(doc.citation_count().is_none());
    }

    #[test]
    fn bad_year_fails_the_row() {
        let record = RawRecord::from_pairs(2, [(TITLE, "A"), (YEAR, "n.d.")]);
        let err = ScopusCsvDocument::from_record(&record, &ScopusConfig::default()).unwrap_err();
        assert_eq!(err.row(), Some(2));
    }

    #[test]
    fn no_cross_field_validation() {
        let record = RawRecord::from_pairs(1, [(CITED_BY, "3")]);
        let doc = ScopusCsvDocument::from_record(&record, &ScopusConfig::default()).unwrap();
        assert!(doc.title().is_none());
        assert_eq!(doc.citation_count(), Some(3));
    }
}
