use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search::SearchParams;

/// Strength setting, fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[serde(alias = "easy")]
    #[value(alias = "easy")]
    Novice,
    #[default]
    #[serde(alias = "normal")]
    #[value(alias = "normal")]
    Intermediate,
    #[serde(alias = "hard")]
    #[value(alias = "hard")]
    Master,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [DifficultyTier::Novice, DifficultyTier::Intermediate, DifficultyTier::Master];

    pub fn search_depth(self) -> u32 {
        match self {
            DifficultyTier::Novice => 1,
            DifficultyTier::Intermediate => 2,
            DifficultyTier::Master => 4,
        }
    }

    pub fn use_alpha_beta(self) -> bool {
        match self {
            DifficultyTier::Novice | DifficultyTier::Intermediate => false,
            DifficultyTier::Master => true,
        }
    }

    pub fn search_params(self) -> SearchParams {
        SearchParams::new(self.search_depth(), self.use_alpha_beta())
    }

    /// Chance that the engine candidate is a random legal move instead of the search result.
    pub fn random_move_probability(self) -> f64 {
        match self {
            DifficultyTier::Novice => 0.7,
            DifficultyTier::Intermediate => 0.4,
            DifficultyTier::Master => 0.0,
        }
    }

    /// Chance of playing the top-ranked candidate outright.
    pub fn pick_top_probability(self) -> f64 {
        match self {
            DifficultyTier::Novice => 0.6,
            DifficultyTier::Intermediate => 0.8,
            DifficultyTier::Master => 1.0,
        }
    }

    /// How many ranked candidates the fallback draw may pick from; `None` means all.
    pub fn fallback_pool(self) -> Option<usize> {
        match self {
            DifficultyTier::Novice => None,
            DifficultyTier::Intermediate => Some(3),
            DifficultyTier::Master => Some(1),
        }
    }

    pub fn thinking_verb(self) -> &'static str {
        match self {
            DifficultyTier::Novice => "Thinking",
            DifficultyTier::Intermediate => "Calculating",
            DifficultyTier::Master => "Analyzing",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyTier::Novice => "novice",
            DifficultyTier::Intermediate => "intermediate",
            DifficultyTier::Master => "master",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "novice" | "easy" => Ok(DifficultyTier::Novice),
            "intermediate" | "normal" => Ok(DifficultyTier::Intermediate),
            "master" | "hard" => Ok(DifficultyTier::Master),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_naming_schemes() {
        assert_eq!("Easy".parse::<DifficultyTier>(), Ok(DifficultyTier::Novice));
        assert_eq!("normal".parse::<DifficultyTier>(), Ok(DifficultyTier::Intermediate));
        assert_eq!("MASTER".parse::<DifficultyTier>(), Ok(DifficultyTier::Master));
        assert!("grandmaster".parse::<DifficultyTier>().is_err());
    }

    #[test]
    fn master_is_deterministic_and_deepest() {
        let m = DifficultyTier::Master;
        assert_eq!(m.random_move_probability(), 0.0);
        assert_eq!(m.pick_top_probability(), 1.0);
        assert!(m.search_params().use_alpha_beta);
        assert!(DifficultyTier::ALL.iter().all(|t| t.search_depth() <= m.search_depth()));
    }
}
