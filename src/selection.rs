use rand::Rng;

use crate::board::Move;
use crate::difficulty::DifficultyTier;

/// A move proposed by one source, tagged with how much that source is trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMove {
    pub mv: Move,
    pub source_name: String,
    /// 0.0..=1.0
    pub confidence: f64,
}

impl CandidateMove {
    pub fn new(mv: Move, source_name: impl Into<String>, confidence: f64) -> Self {
        Self { mv, source_name: source_name.into(), confidence: confidence.clamp(0.0, 1.0) }
    }
}

/// Sort by confidence, highest first. Stable, so equal confidences keep
/// collection order (the search candidate is always collected first).
pub fn rank(candidates: &mut [CandidateMove]) {
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}

/// Apply the tier's selection policy to candidates already ranked by `rank`.
pub fn select<R: Rng>(ranked: &[CandidateMove], tier: DifficultyTier, rng: &mut R) -> Option<CandidateMove> {
    let top = ranked.first()?;
    if rng.gen_bool(tier.pick_top_probability()) {
        return Some(top.clone());
    }
    let k = tier.fallback_pool().unwrap_or(ranked.len()).clamp(1, ranked.len());
    let idx = rng.gen_range(0..k);
    Some(ranked[idx].clone())
}
