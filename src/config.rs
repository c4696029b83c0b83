use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess_openings::OPENING_PLY_LIMIT;
use crate::difficulty::DifficultyTier;
use crate::error::ConfigError;

pub const SEARCH_CONFIDENCE: f64 = 0.3;
pub const ADVISOR_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorySettings {
    pub name: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for AdvisorySettings {
    fn default() -> Self {
        Self { name: "Advisor".to_string(), endpoint: String::new(), api_key: None, timeout_secs: Some(10) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tier: DifficultyTier,
    /// Fixed RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
    pub search_confidence: f64,
    pub advisor_confidence: f64,
    pub opening_ply_limit: u32,
    pub use_opening_book: bool,
    pub advisory: Option<AdvisorySettings>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tier: DifficultyTier::default(),
            seed: None,
            search_confidence: SEARCH_CONFIDENCE,
            advisor_confidence: ADVISOR_CONFIDENCE,
            opening_ply_limit: OPENING_PLY_LIMIT,
            use_opening_book: true,
            advisory: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, v) in [("search_confidence", self.search_confidence), ("advisor_confidence", self.advisor_confidence)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ConfigError::Invalid(format!("{field} must be within 0..=1, got {v}")));
            }
        }
        if let Some(adv) = &self.advisory {
            if adv.endpoint.trim().is_empty() {
                return Err(ConfigError::Invalid("advisory.endpoint is empty".to_string()));
            }
        }
        Ok(())
    }
}
