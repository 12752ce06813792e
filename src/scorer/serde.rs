use serde::{Deserialize, Serialize};

use crate::scorer::{config::ScorerConfig, error::ScorerError, TfIdfScorer};

/// Serializable form of `TfIdfScorer`
/// A decoded scorer goes through this so its settings are validated
/// the same way `TfIdfScorer::with_config` validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerData {
    pub documents: Vec<String>,
    #[serde(default)]
    pub config: ScorerConfig,
}

impl TryFrom<ScorerData> for TfIdfScorer {
    type Error = ScorerError;

    fn try_from(data: ScorerData) -> Result<Self, Self::Error> {
        TfIdfScorer::with_config(data.documents, data.config)
    }
}

impl From<&TfIdfScorer> for ScorerData {
    fn from(scorer: &TfIdfScorer) -> Self {
        Self {
            documents: scorer.get_documents().to_vec(),
            config: *scorer.config(),
        }
    }
}
