//! Document contract shared by all export formats

use serde::{Deserialize, Serialize};

use crate::identifier::DocumentIdentifier;

/// Institution an author is associated with, as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    name: String,
}

impl Affiliation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Author of a document with their affiliations in export order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    name: String,
    affiliations: Vec<Affiliation>,
}

impl Author {
    pub fn new(name: impl Into<String>, affiliations: Vec<Affiliation>) -> Self {
        Self {
            name: name.into(),
            affiliations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn affiliations(&self) -> &[Affiliation] {
        &self.affiliations
    }
}

/// A bibliographic record loaded from some export format.
///
/// Each format provides its own implementing type; consumers only see the
/// attributes below. All attributes except [`Document::id`] are optional
/// because exports routinely leave columns blank.
pub trait Document: std::fmt::Debug + Send + Sync {
    /// Identity of the document. Always present, even when only the title
    /// (or nothing at all) is known.
    fn id(&self) -> &DocumentIdentifier;

    fn title(&self) -> Option<&str>;

    /// Authors in byline order, `None` when the format carries no author data.
    fn authors(&self) -> Option<&[Author]>;

    fn publisher(&self) -> Option<&str>;

    fn publication_year(&self) -> Option<i32>;

    fn keywords(&self) -> Option<&[String]>;

    fn abstract_text(&self) -> Option<&str>;

    fn citation_count(&self) -> Option<i32>;

    fn language(&self) -> Option<&str>;

    /// Journal, proceedings or other venue the document appeared in.
    fn publication_source(&self) -> Option<&str>;

    /// Record category as reported by the exporting database
    /// (e.g. "Article", "Conference Paper").
    fn source_type(&self) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_exposes_affiliations_in_order() {
        let author = Author::new(
            "Smith, J.",
            vec![Affiliation::new("MIT"), Affiliation::new("Harvard")],
        );
        assert_eq!(author.name(), "Smith, J.");
        let names: Vec<&str> = author.affiliations().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["MIT", "Harvard"]);
    }

    #[test]
    fn affiliation_may_be_empty() {
        assert_eq!(Affiliation::new("").name(), "");
    }
}
