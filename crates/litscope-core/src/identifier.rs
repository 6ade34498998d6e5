//! Composite identity key of a document

use serde::{Deserialize, Serialize};

/// Title plus any known persistent identifiers of a document.
///
/// Empty strings are stored as `None`, so an identifier built from blank
/// export cells is indistinguishable from one built from missing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIdentifier {
    title: Option<String>,
    doi: Option<String>,
    pubmed: Option<String>,
    eid: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl DocumentIdentifier {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title: non_empty(title),
            ..Default::default()
        }
    }

    pub fn with_doi(mut self, doi: Option<String>) -> Self {
        self.doi = non_empty(doi);
        self
    }

    pub fn with_pubmed(mut self, pubmed: Option<String>) -> Self {
        self.pubmed = non_empty(pubmed);
        self
    }

    /// Scopus electronic identifier (e.g. `2-s2.0-85012345678`)
    pub fn with_eid(mut self, eid: Option<String>) -> Self {
        self.eid = non_empty(eid);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }

    pub fn pubmed(&self) -> Option<&str> {
        self.pubmed.as_deref()
    }

    pub fn eid(&self) -> Option<&str> {
        self.eid.as_deref()
    }

    /// Check whether two identifiers likely refer to the same document.
    ///
    /// Persistent ids known on both sides decide: any disagreement is a
    /// mismatch, any agreement is a match. Without a shared id, falls back
    /// to comparing canonical titles.
    pub fn matches(&self, other: &DocumentIdentifier) -> bool {
        let pairs = [
            (self.doi(), other.doi(), true),
            (self.pubmed(), other.pubmed(), false),
            (self.eid(), other.eid(), false),
        ];

        let mut agreed = 0;
        for (lhs, rhs, case_insensitive) in pairs {
            if let (Some(a), Some(b)) = (lhs, rhs) {
                let same = if case_insensitive {
                    a.eq_ignore_ascii_case(b)
                } else {
                    a == b
                };
                if !same {
                    return false;
                }
                agreed += 1;
            }
        }

        if agreed > 0 {
            return true;
        }

        match (self.canonical_title(), other.canonical_title()) {
            (Some(a), Some(b)) => !a.is_empty() && a == b,
            _ => false,
        }
    }

    /// Title lowercased with everything but letters and digits removed.
    pub fn canonical_title(&self) -> Option<String> {
        self.title.as_deref().map(|t| {
            t.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect()
        })
    }
}
