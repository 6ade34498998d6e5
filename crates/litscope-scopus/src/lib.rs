//! Litscope Scopus - Scopus CSV export loader
//!
//! Turns the CSV file produced by Scopus' "Export → CSV" into a
//! [`DocumentSet`](litscope_core::DocumentSet).
//!
//! # Pipeline
//!
//! - [`reader`]: header-keyed rows from the CSV
//! - [`fields`]: one normalizer per column (empty cell = no value)
//! - [`authors`]: the compound "Authors with affiliations" cell
//! - [`document`]: one [`ScopusCsvDocument`] per row
//! - [`loader`]: the whole file into an ordered collection
//!
//! # Example
//!
//! ```ignore
//! use litscope_scopus::load_scopus_csv;
//!
//! let docs = load_scopus_csv("scopus.csv")?;
//! for doc in docs.iter() {
//!     println!("{:?} ({:?})", doc.title(), doc.publication_year());
//! }
//! ```

pub mod authors;
pub mod config;
pub mod document;
pub mod error;
pub mod fields;
pub mod loader;
pub mod reader;

// Re-exports
pub use config::ScopusConfig;
pub use document::ScopusCsvDocument;
pub use error::LoadError;
pub use loader::{ScopusCsvLoader, load_scopus_csv};
pub use reader::{RawRecord, RowReader};
