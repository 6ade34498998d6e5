//! Scopus loader configuration

use serde::Deserialize;

/// Options for turning Scopus rows into documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScopusConfig {
    /// Reject author chunks with fewer than two comma-separated name
    /// fields instead of loading them as-is with an empty affiliation
    pub strict_authors: bool,
}

impl ScopusConfig {
    pub fn strict() -> Self {
        Self {
            strict_authors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_lenient() {
        let config = ScopusConfig::default();
        assert!(!config.strict_authors);
        assert!(ScopusConfig::strict().strict_authors);
    }

    #[test]
    fn parse_config_toml() {
        let config: ScopusConfig = toml::from_str("strict_authors = true").unwrap();
        assert!(config.strict_authors);

        let config: ScopusConfig = toml::from_str("").unwrap();
        assert!(!config.strict_authors);
    }
}
