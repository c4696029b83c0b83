use piebot_opponent::chess_openings::{lookup, OpeningTable, OPENING_PLY_LIMIT};
use piebot_opponent::Position;

fn after(moves: &[&str]) -> Position {
    let list: Vec<String> = moves.iter().map(|s| s.to_string()).collect();
    Position::set_from_start_and_moves(&list).unwrap()
}

#[test]
fn first_legal_entry_wins() {
    // e2e4 is gone once the e-pawn has moved.
    assert_eq!(lookup(&after(&["e2e4", "e7e5"])).map(|m| m.uci()), Some("d2d4".to_string()));
    // Black after 1.d4: the e-pawn reply comes first in table order.
    assert_eq!(lookup(&after(&["d2d4"])).map(|m| m.uci()), Some("e7e5".to_string()));
}

#[test]
fn table_is_silent_after_ply_limit() {
    let pos = after(&["g1f3", "g8f6", "b1c3", "b8c6", "f3g1", "f6g8"]);
    assert_eq!(pos.ply_count(), OPENING_PLY_LIMIT);
    assert!(lookup(&pos).is_none());
}

#[test]
fn fen_move_counter_counts_toward_limit() {
    let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 10").unwrap();
    assert!(lookup(&pos).is_none());
    assert!(OpeningTable::with_ply_limit(40).lookup(&pos, pos.ply_count()).is_some());
}

#[test]
fn no_entry_when_nothing_matches() {
    // Only kings and a rook: no table move is legal.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(lookup(&pos).is_none());
}
