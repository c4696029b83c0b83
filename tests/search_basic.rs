use piebot_opponent::search::eval::material_eval_cp_side_agnostic;
use piebot_opponent::search::{SearchParams, Searcher};
use piebot_opponent::Position;

#[test]
fn eval_material_startpos_is_zero() {
    let p = Position::startpos();
    assert_eq!(material_eval_cp_side_agnostic(p.board()), 0);
}

#[test]
fn search_returns_legal_move_startpos() {
    let mut p = Position::startpos();
    let mut searcher = Searcher::new();
    let bm = searcher.search_best_move(&mut p, 1, false).expect("no move found at depth 1");
    assert!(p.legal_moves().contains(&bm));
}

#[test]
fn search_prefers_winning_queen_capture() {
    // Qe2xd2 wins a queen.
    let mut p = Position::from_fen("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").expect("valid fen");
    let mut searcher = Searcher::new();
    for ab in [false, true] {
        let bm = searcher.search_best_move(&mut p, 1, ab).expect("expected a best move");
        assert_eq!(bm.uci(), "e2d2", "alpha_beta={ab}");
    }
}

#[test]
fn search_leaves_position_untouched() {
    let mut p = Position::set_from_start_and_moves(&["e2e4".into(), "e7e5".into(), "g1f3".into()]).unwrap();
    let before = p.clone();
    let mut searcher = Searcher::new();
    let r = searcher.search(&mut p, SearchParams::new(3, true));
    assert!(r.best_move.is_some());
    assert!(r.nodes > 0);
    assert_eq!(p, before);
    assert_eq!(p.serialize(), before.serialize());
}

#[test]
fn startpos_depth_two_plays_a_standard_first_move() {
    let mut p = Position::startpos();
    let bm = Searcher::new().search_best_move(&mut p, 2, false).expect("a move at startpos");
    assert!(p.legal_moves().contains(&bm));
    let standard = ["e2e4", "d2d4", "e2e3", "d2d3", "c2c4", "c2c3", "f2f4", "g1f3", "b1c3"];
    assert!(standard.contains(&bm.uci().as_str()), "unexpected first move {}", bm.uci());
    assert_eq!(p, Position::startpos());
}

#[test]
fn search_is_deterministic() {
    let mut p = Position::startpos();
    let a = Searcher::new().search(&mut p, SearchParams::new(2, false));
    let b = Searcher::new().search(&mut p, SearchParams::new(2, false));
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn no_move_without_legal_moves() {
    // Black is checkmated.
    let mut p = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
    assert!(p.is_checkmate());
    assert!(Searcher::new().search_best_move(&mut p, 2, true).is_none());
}

#[test]
fn depth_zero_is_treated_as_one() {
    let mut p = Position::from_fen("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").unwrap();
    let bm = Searcher::new().search_best_move(&mut p, 0, false);
    assert_eq!(bm.map(|m| m.uci()), Some("e2d2".to_string()));
}
