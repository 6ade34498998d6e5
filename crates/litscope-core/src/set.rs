//! Ordered collection of loaded documents

use crate::document::Document;

/// Documents in the order they were loaded.
///
/// No uniqueness is enforced; two rows describing the same paper stay two
/// entries.
#[derive(Debug, Default)]
pub struct DocumentSet {
    docs: Vec<Box<dyn Document>>,
}

impl DocumentSet {
    pub fn new(docs: Vec<Box<dyn Document>>) -> Self {
        Self { docs }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Document> {
        self.docs.get(index).map(|d| d.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Document> {
        self.docs.iter().map(|d| d.as_ref())
    }

    /// Keep only documents matching `predicate`, preserving order.
    pub fn filter<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(&dyn Document) -> bool,
    {
        self.docs.retain(|d| predicate(d.as_ref()));
        self
    }

    /// Append all documents of `other` after the current ones.
    pub fn extend(&mut self, other: DocumentSet) {
        self.docs.extend(other.docs);
    }
}

impl FromIterator<Box<dyn Document>> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn Document>>>(iter: I) -> Self {
        Self {
            docs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DocumentSet {
    type Item = Box<dyn Document>;
    type IntoIter = std::vec::IntoIter<Box<dyn Document>>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Box<dyn Document>;
    type IntoIter = std::slice::Iter<'a, Box<dyn Document>>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
