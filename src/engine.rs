//! The computer opponent: opening table, search candidate, optional advisor,
//! and the tier's selection policy, combined into one `get_move` call.

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::advisory::{parse_advice, AdvisoryRequest, AdvisorySource, HttpAdvisor};
use crate::board::{Move, Position};
use crate::chess_openings::OpeningTable;
use crate::config::{EngineConfig, ADVISOR_CONFIDENCE, SEARCH_CONFIDENCE};
use crate::difficulty::DifficultyTier;
use crate::error::AdvisoryError;
use crate::search::Searcher;
use crate::selection::{rank, select, CandidateMove};

pub const SEARCH_SOURCE: &str = "Search Engine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Ready,
    Thinking,
}

pub struct ComputerOpponent {
    tier: DifficultyTier,
    searcher: Searcher,
    openings: Option<OpeningTable>,
    advisor: Option<Box<dyn AdvisorySource>>,
    advisory_enabled: bool,
    quota_exhausted: bool,
    search_confidence: f64,
    advisor_confidence: f64,
    rng: SmallRng,
    state: EngineState,
}

impl ComputerOpponent {
    pub fn new(tier: DifficultyTier) -> Self {
        Self {
            tier,
            searcher: Searcher::new(),
            openings: Some(OpeningTable::default()),
            advisor: None,
            advisory_enabled: false,
            quota_exhausted: false,
            search_confidence: SEARCH_CONFIDENCE,
            advisor_confidence: ADVISOR_CONFIDENCE,
            rng: SmallRng::from_entropy(),
            state: EngineState::Ready,
        }
    }

    /// Build from configuration; an `advisory` section yields an `HttpAdvisor`.
    pub fn from_config(cfg: &EngineConfig) -> Result<Self, AdvisoryError> {
        let mut engine = Self::new(cfg.tier);
        engine.search_confidence = cfg.search_confidence.clamp(0.0, 1.0);
        engine.advisor_confidence = cfg.advisor_confidence.clamp(0.0, 1.0);
        engine.openings = cfg.use_opening_book.then(|| OpeningTable::with_ply_limit(cfg.opening_ply_limit));
        if let Some(seed) = cfg.seed {
            engine = engine.with_seed(seed);
        }
        if let Some(settings) = &cfg.advisory {
            engine = engine.with_advisor(Box::new(HttpAdvisor::new(settings)?));
        }
        Ok(engine)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn with_advisor(mut self, advisor: Box<dyn AdvisorySource>) -> Self {
        self.advisor = Some(advisor);
        self.advisory_enabled = true;
        self.quota_exhausted = false;
        self
    }

    pub fn without_opening_book(mut self) -> Self {
        self.openings = None;
        self
    }

    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn quota_exhausted(&self) -> bool {
        self.quota_exhausted
    }

    pub fn advisory_enabled(&self) -> bool {
        self.advisor.is_some() && self.advisory_enabled && !self.quota_exhausted
    }

    /// User toggle; has no effect once the advisor's quota is gone.
    pub fn set_advisory_enabled(&mut self, enabled: bool) {
        self.advisory_enabled = enabled;
    }

    /// Names of the sources that will be consulted on the next move.
    pub fn active_sources(&self) -> Vec<String> {
        let mut sources = Vec::with_capacity(2);
        if self.advisory_enabled() {
            if let Some(advisor) = &self.advisor {
                sources.push(advisor.name().to_string());
            }
        }
        sources.push(SEARCH_SOURCE.to_string());
        sources
    }

    pub fn status_message(&self) -> String {
        match self.state {
            EngineState::Ready => "Ready".to_string(),
            EngineState::Thinking => self.thinking_message(),
        }
    }

    /// What `status_message` reports while a move is being chosen.
    pub fn thinking_message(&self) -> String {
        let mut msg = format!("{} with {}", self.tier.thinking_verb(), self.active_sources().join(" and "));
        if self.quota_exhausted {
            if let Some(advisor) = &self.advisor {
                msg.push_str(&format!(" ({} quota exceeded)", advisor.name()));
            }
        }
        msg.push_str("...");
        msg
    }

    /// Choose a move for the side to move. `pos` is left exactly as it was given.
    pub async fn get_move(&mut self, pos: &mut Position) -> Option<Move> {
        self.state = EngineState::Thinking;
        let chosen = self.choose(pos).await;
        self.state = EngineState::Ready;
        // Attach SAN for display.
        chosen.map(|mv| pos.legal_moves_with_san().into_iter().find(|m| *m == mv).unwrap_or(mv))
    }

    async fn choose(&mut self, pos: &mut Position) -> Option<Move> {
        if !pos.has_legal_moves() {
            return None;
        }
        if let Some(mv) = self.openings.and_then(|t| t.lookup(pos, pos.ply_count())) {
            return Some(mv);
        }

        let mut candidates = Vec::with_capacity(2);
        if let Some(c) = self.engine_candidate(pos) {
            candidates.push(c);
        }
        if let Some(c) = self.advisor_candidate(pos).await {
            candidates.push(c);
        }
        rank(&mut candidates);
        let pick = select(&candidates, self.tier, &mut self.rng)?;
        info!("{} plays {} ({})", self.tier, pick.mv.uci(), pick.source_name);
        Some(pick.mv)
    }

    fn engine_candidate(&mut self, pos: &mut Position) -> Option<CandidateMove> {
        let p = self.tier.random_move_probability();
        let mv = if p > 0.0 && self.rng.gen_bool(p) {
            let mv = pos.legal_moves().choose(&mut self.rng).cloned();
            debug!("{}: random legal move {:?}", self.tier, mv.as_ref().map(Move::uci));
            mv
        } else {
            self.searcher.search(pos, self.tier.search_params()).best_move
        }?;
        Some(CandidateMove::new(mv, SEARCH_SOURCE, self.search_confidence))
    }

    async fn advisor_candidate(&mut self, pos: &Position) -> Option<CandidateMove> {
        if !self.advisory_enabled() {
            return None;
        }
        let advisor = self.advisor.as_deref()?;
        let request = AdvisoryRequest::from_position(pos, self.tier);
        let reply = advisor.suggest(&request).await;
        let name = advisor.name().to_string();
        match reply {
            Ok(text) => match parse_advice(pos, &text) {
                Some(mv) => Some(CandidateMove::new(mv, name, self.advisor_confidence)),
                None => {
                    warn!("{name} suggested an unusable move: {text:?}");
                    None
                }
            },
            Err(AdvisoryError::QuotaExhausted(msg)) => {
                warn!("{name} quota exhausted, disabled for this session: {msg}");
                self.quota_exhausted = true;
                None
            }
            Err(e) => {
                warn!("{name} unavailable: {e}");
                None
            }
        }
    }
}
