//! Whole-file loading into a [`DocumentSet`]

use std::io::Read;
use std::path::Path;

use litscope_core::{Document, DocumentSet, RobustOpener, TextOpener};

use crate::config::ScopusConfig;
use crate::document::ScopusCsvDocument;
use crate::error::LoadError;
use crate::reader::RowReader;

/// Load a Scopus CSV export with default settings.
pub fn load_scopus_csv(path: impl AsRef<Path>) -> Result<DocumentSet, LoadError> {
    ScopusCsvLoader::new().load(path)
}

/// Loader with a configurable opener and row options.
#[derive(Debug, Clone, Default)]
pub struct ScopusCsvLoader<O = RobustOpener> {
    config: ScopusConfig,
    opener: O,
}

impl ScopusCsvLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: TextOpener> ScopusCsvLoader<O> {
    pub fn with_config(mut self, config: ScopusConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace how files are opened and decoded.
    pub fn with_opener<P: TextOpener>(self, opener: P) -> ScopusCsvLoader<P> {
        ScopusCsvLoader {
            config: self.config,
            opener,
        }
    }

    pub fn config(&self) -> &ScopusConfig {
        &self.config
    }

    /// Load every row of the file at `path`, in file order.
    ///
    /// The first failing row aborts the load.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DocumentSet, LoadError> {
        let path = path.as_ref();
        let reader = self.opener.open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let docs = self.load_reader(reader)?;
        log::debug!("{}: loaded {} documents", path.display(), docs.len());
        Ok(docs)
    }

    /// Load already-decoded CSV text from any reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<DocumentSet, LoadError> {
        RowReader::new(reader)?
            .map(|record| -> Result<Box<dyn Document>, LoadError> {
                let doc = ScopusCsvDocument::from_record(&record?, &self.config)?;
                Ok(Box::new(doc))
            })
            .collect()
    }
}
