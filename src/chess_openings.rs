//! Canned first moves for both colours.
//! The table is consulted only during the first few plies of a game; the first
//! entry whose (from, to) pair is legal in the current position wins.

use cozy_chess::Square;
use log::info;

use crate::board::{Move, Position};

/// Plies after which the table is no longer consulted.
pub const OPENING_PLY_LIMIT: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessOpening {
    pub name: &'static str,
    pub from: Square,
    pub to: Square,
}

const COMMON_OPENINGS: [ChessOpening; 10] = [
    // White
    ChessOpening { name: "King's Pawn", from: Square::E2, to: Square::E4 },
    ChessOpening { name: "Queen's Pawn", from: Square::D2, to: Square::D4 },
    ChessOpening { name: "English Opening", from: Square::C2, to: Square::C4 },
    ChessOpening { name: "King's Knight", from: Square::G1, to: Square::F3 },
    ChessOpening { name: "Queen's Knight", from: Square::B1, to: Square::C3 },
    // Black
    ChessOpening { name: "King's Pawn Reply", from: Square::E7, to: Square::E5 },
    ChessOpening { name: "Queen's Pawn Reply", from: Square::D7, to: Square::D5 },
    ChessOpening { name: "King's Knight Reply", from: Square::G8, to: Square::F6 },
    ChessOpening { name: "Sicilian Defense", from: Square::C7, to: Square::C5 },
    ChessOpening { name: "French Defense", from: Square::E7, to: Square::E6 },
];

/// Get all chess openings in lookup order
pub fn get_chess_openings() -> &'static [ChessOpening] { &COMMON_OPENINGS }

#[derive(Debug, Clone, Copy)]
pub struct OpeningTable {
    ply_limit: u32,
}

impl Default for OpeningTable {
    fn default() -> Self { Self { ply_limit: OPENING_PLY_LIMIT } }
}

impl OpeningTable {
    pub fn with_ply_limit(ply_limit: u32) -> Self { Self { ply_limit } }

    pub fn ply_limit(&self) -> u32 { self.ply_limit }

    /// First table move legal in `pos`, or `None` once `ply_count` reaches the limit.
    pub fn lookup(&self, pos: &Position, ply_count: u32) -> Option<Move> {
        if ply_count >= self.ply_limit { return None; }
        let legal = pos.legal_moves();
        COMMON_OPENINGS.iter().find_map(|opening| {
            let hit = legal.iter().find(|m| m.from() == opening.from && m.to() == opening.to)?;
            info!("opening table: {} ({})", opening.name, hit.uci());
            Some(hit.clone())
        })
    }
}

/// Table lookup with the default limit and the position's own ply count.
pub fn lookup(pos: &Position) -> Option<Move> {
    OpeningTable::default().lookup(pos, pos.ply_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_openings() {
        let openings = get_chess_openings();
        assert_eq!(openings.len(), 10);
        assert_eq!(openings[0].name, "King's Pawn");
        assert_eq!(openings[0].from, Square::E2);
    }

    #[test]
    fn test_startpos_plays_kings_pawn() {
        let m = lookup(&Position::startpos()).expect("book move at startpos");
        assert_eq!(m.uci(), "e2e4");
    }

    #[test]
    fn test_black_reply_after_e4() {
        let pos = Position::set_from_start_and_moves(&["e2e4".to_string()]).unwrap();
        assert_eq!(lookup(&pos).map(|m| m.uci()), Some("e7e5".to_string()));
    }

    #[test]
    fn test_ply_limit_cuts_off() {
        let pos = Position::startpos();
        let table = OpeningTable::default();
        assert!(table.lookup(&pos, OPENING_PLY_LIMIT - 1).is_some());
        assert!(table.lookup(&pos, OPENING_PLY_LIMIT).is_none());
        assert!(table.lookup(&pos, 40).is_none());
    }
}
