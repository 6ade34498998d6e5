//! Flat, serializable snapshot of a document for export

use serde::{Deserialize, Serialize};

use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub affiliations: Vec<String>,
}

/// Every attribute of a [`Document`], detached from its format type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    // Identifiers
    pub title: Option<String>,
    pub doi: Option<String>,
    pub pubmed_id: Option<String>,
    pub eid: Option<String>,

    // Authors
    pub authors: Option<Vec<AuthorRecord>>,

    // Publication
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
    pub publication_source: Option<String>,
    pub source_type: Option<String>,
    pub language: Option<String>,

    // Content
    pub keywords: Option<Vec<String>>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    // Metrics
    pub citation_count: Option<i32>,
}

impl DocumentRecord {
    pub fn from_document(doc: &dyn Document) -> Self {
        let id = doc.id();
        Self {
            title: doc.title().map(String::from),
            doi: id.doi().map(String::from),
            pubmed_id: id.pubmed().map(String::from),
            eid: id.eid().map(String::from),
            authors: doc.authors().map(|authors| {
                authors
                    .iter()
                    .map(|a| AuthorRecord {
                        name: a.name().to_string(),
                        affiliations: a
                            .affiliations()
                            .iter()
                            .map(|aff| aff.name().to_string())
                            .collect(),
                    })
                    .collect()
            }),
            publisher: doc.publisher().map(String::from),
            publication_year: doc.publication_year(),
            publication_source: doc.publication_source().map(String::from),
            source_type: doc.source_type().map(String::from),
            language: doc.language().map(String::from),
            keywords: doc.keywords().map(<[String]>::to_vec),
            abstract_text: doc.abstract_text().map(String::from),
            citation_count: doc.citation_count(),
        }
    }
}

impl From<&dyn Document> for DocumentRecord {
    fn from(doc: &dyn Document) -> Self {
        Self::from_document(doc)
    }
}
