use piebot_opponent::search::Searcher;
use piebot_opponent::Position;

fn assert_mates(fen: &str, expected: &str) {
    for (depth, ab) in [(1, false), (2, false), (3, true), (4, true)] {
        let mut p = Position::from_fen(fen).expect("valid FEN");
        let bm = Searcher::new().search_best_move(&mut p, depth, ab).expect("a move");
        assert_eq!(bm.uci(), expected, "depth={depth} alpha_beta={ab}");
        p.apply_move(&bm).unwrap();
        assert!(p.is_checkmate(), "{} should mate", bm.uci());
    }
}

#[test]
fn white_back_rank_mate_in_one() {
    assert_mates("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1a8");
}

#[test]
fn black_back_rank_mate_in_one() {
    assert_mates("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", "a8a1");
}
