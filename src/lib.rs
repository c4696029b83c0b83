// Computer chess opponent: evaluator, minimax search, opening table,
// optional external advisor and difficulty-tiered move selection.
pub mod advisory;
pub mod board;
pub mod chess_openings;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod perft;
pub mod search;
pub mod selection;

pub use board::{Move, Position};
pub use config::EngineConfig;
pub use difficulty::DifficultyTier;
pub use engine::{ComputerOpponent, EngineState};
