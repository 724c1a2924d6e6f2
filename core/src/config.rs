use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of top-ranked documents scanned for temporal tokens.
pub const DEFAULT_MAX_SEARCH_DOCUMENTS: usize = 3;
/// Documents scoring below this are treated as irrelevant.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.000001;

/// Tunables for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ignore document frequency entirely (IDF fixed at 1.0). Debug aid.
    pub disable_df: bool,
    pub max_search_documents: usize,
    pub relevance_threshold: f64,
    /// Drop repeated query terms at registration. When false every repeat
    /// keeps its own slot and counts again in the average.
    pub dedupe_queries: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            disable_df: false,
            max_search_documents: DEFAULT_MAX_SEARCH_DOCUMENTS,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            dedupe_queries: true,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_search_documents == 0 {
            return Err(Error::InvalidConfig("max_search_documents must be at least 1"));
        }
        if !self.relevance_threshold.is_finite() || self.relevance_threshold < 0.0 {
            return Err(Error::InvalidConfig("relevance_threshold must be a non-negative number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_search_documents, 3);
        assert!(cfg.dedupe_queries);
        assert!(!cfg.disable_df);
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = EngineConfig { max_search_documents: 0, ..Default::default() };
        assert!(cfg.validate().unwrap_err().is_configuration());
        let cfg = EngineConfig { relevance_threshold: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = EngineConfig { relevance_threshold: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"disable_df": true}"#).unwrap();
        assert!(cfg.disable_df);
        assert_eq!(cfg.max_search_documents, DEFAULT_MAX_SEARCH_DOCUMENTS);
    }
}
