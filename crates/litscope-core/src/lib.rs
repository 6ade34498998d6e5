//! Litscope Core - Shared document model for bibliographic loaders
//!
//! Every export-format loader populates the same contract:
//! a [`DocumentSet`] of boxed [`Document`] trait objects, each carrying a
//! [`DocumentIdentifier`] and typed, optional attributes.
//!
//! This crate also provides the [`TextOpener`] seam loaders read files
//! through, and the logging setup shared by binaries.

pub mod document;
pub mod identifier;
pub mod logging;
pub mod open;
pub mod record;
pub mod set;

// Re-exports for convenience
pub use document::{Affiliation, Author, Document};
pub use identifier::DocumentIdentifier;
pub use logging::init_logging;
pub use open::{RobustOpener, TextOpener, decode_text};
pub use record::{AuthorRecord, DocumentRecord};
pub use set::DocumentSet;
