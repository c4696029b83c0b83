//! External advisory sources.
//!
//! An advisor is any third party that, given a position, answers with a single
//! move in text form. Its replies are untrusted: they are parsed against the
//! position's legal moves and dropped when they do not match one.

pub mod http;

use async_trait::async_trait;
use cozy_chess::Color;
use serde::Serialize;

use crate::board::notation;
use crate::board::{Move, Position};
use crate::difficulty::DifficultyTier;
pub use crate::error::AdvisoryError;

pub use http::HttpAdvisor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryRequest {
    pub fen: String,
    pub move_history: Vec<String>,
    /// SAN of every legal move.
    pub legal_moves: Vec<String>,
    pub side_to_move: String,
    pub difficulty: DifficultyTier,
}

impl AdvisoryRequest {
    pub fn from_position(pos: &Position, difficulty: DifficultyTier) -> Self {
        let legal_moves = pos
            .legal_moves_with_san()
            .into_iter()
            .filter_map(|m| m.san().map(str::to_string))
            .collect();
        let side_to_move = match pos.side_to_move() {
            Color::White => "White",
            Color::Black => "Black",
        };
        Self {
            fen: pos.serialize(),
            move_history: pos.move_history(),
            legal_moves,
            side_to_move: side_to_move.to_string(),
            difficulty,
        }
    }

    /// Plain-text prompt for text-completion style advisors.
    pub fn prompt(&self) -> String {
        let guidance = match self.difficulty {
            DifficultyTier::Novice => "Focus on basic principles and avoid blunders.",
            DifficultyTier::Intermediate => "Play solid moves with some tactical awareness.",
            DifficultyTier::Master => "Play the strongest move with deep calculation.",
        };
        format!(
            "You are a chess assistant. Suggest the best move in the current position.\n\
             Current position (FEN): {}\n\
             Move history: {}\n\
             Current turn: {}\n\
             Difficulty level: {} ({})\n\
             Available moves: {}\n\
             Respond with only the move in algebraic notation (e.g. e4, Nf3, O-O), nothing else.",
            self.fen,
            self.move_history.join(", "),
            self.side_to_move,
            self.difficulty,
            guidance,
            self.legal_moves.join(", "),
        )
    }
}

#[async_trait]
pub trait AdvisorySource: Send + Sync {
    /// Display name, as listed among the active sources.
    fn name(&self) -> &str;

    /// One move in SAN or coordinate notation, or a failure signal.
    async fn suggest(&self, request: &AdvisoryRequest) -> Result<String, AdvisoryError>;
}

/// Map an advisor's reply onto a legal move of `pos`.
pub fn parse_advice(pos: &Position, reply: &str) -> Option<Move> {
    notation::parse_move(pos, reply)
}
