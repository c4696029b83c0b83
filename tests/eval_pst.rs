use piebot_opponent::search::eval::{evaluate, evaluate_for, positional_cp, DRAW_SCORE, MATE_SCORE};
use piebot_opponent::Position;

fn pos(fen: &str) -> Position { Position::from_fen(fen).expect("valid fen") }

#[test]
fn knight_center_beats_rim() {
    let center = pos("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
    let rim = pos("4k3/8/8/8/N7/8/8/4K3 w - - 0 1");
    assert!(positional_cp(center.board()) > positional_cp(rim.board()));
}

#[test]
fn advanced_pawn_scores_higher() {
    let advanced = pos("4k3/8/4P3/8/8/8/8/4K3 w - - 0 1");
    let home = pos("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    assert!(positional_cp(advanced.board()) > positional_cp(home.board()));
}

#[test]
fn startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn material_advantage_is_white_positive() {
    // White has an extra queen.
    let p = pos("4k3/pppppppp/8/8/8/8/PPPPPPPP/3QK3 w - - 0 1");
    assert!(evaluate(&p) > 0);
    assert!(evaluate_for(&p, cozy_chess::Color::Black) < 0);
}

#[test]
fn checkmate_and_stalemate_short_circuit() {
    // Black is mated despite being a queen up.
    let mated = pos("R5k1/5ppp/8/7q/8/8/8/6K1 b - - 1 1");
    assert!(mated.is_checkmate());
    assert_eq!(evaluate(&mated), MATE_SCORE);

    let stalemate = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(stalemate.is_stalemate());
    assert_eq!(evaluate(&stalemate), DRAW_SCORE);

    let bare = pos("k7/8/8/8/8/8/8/7K w - - 0 1");
    assert_eq!(evaluate(&bare), DRAW_SCORE);
}

#[test]
fn evaluate_is_pure() {
    let p = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let before = p.clone();
    assert_eq!(evaluate(&p), evaluate(&p));
    assert_eq!(p, before);
}

#[test]
fn rook_prefers_open_file() {
    let open = pos("4k3/pp6/8/8/8/8/PP6/4K2R w - - 0 1");
    let closed = pos("4k3/7p/8/8/8/8/7P/4K2R w - - 0 1");
    assert!(positional_cp(open.board()) > positional_cp(closed.board()));
}
