use piebot_opponent::search::{SearchParams, Searcher};
use piebot_opponent::Position;

const FENS: [&str; 3] = [
    "4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
];

fn params(depth: u32, use_alpha_beta: bool, order_moves: bool) -> SearchParams {
    SearchParams { depth, use_alpha_beta, order_moves, quiescence: true }
}

#[test]
fn alpha_beta_matches_plain_minimax_score() {
    for fen in FENS {
        let mut p = Position::from_fen(fen).unwrap();
        let plain = Searcher::new().search(&mut p, params(3, false, false));
        let pruned = Searcher::new().search(&mut p, params(3, true, false));
        let ordered = Searcher::new().search(&mut p, params(3, true, true));
        assert_eq!(plain.score, pruned.score, "{fen}");
        assert_eq!(plain.score, ordered.score, "{fen}");
    }
}

#[test]
fn pruning_reduces_nodes() {
    let mut p = Position::from_fen(FENS[1]).unwrap();
    let plain = Searcher::new().search(&mut p, params(3, false, false));
    let pruned = Searcher::new().search(&mut p, params(3, true, false));
    assert!(pruned.nodes < plain.nodes, "alpha-beta should visit fewer nodes: {} vs {}", pruned.nodes, plain.nodes);
}

#[test]
fn same_move_without_pruning_and_without_ordering() {
    // Plain minimax with and without the pruning flag visits moves in the same order.
    let mut p = Position::from_fen(FENS[0]).unwrap();
    let a = Searcher::new().search(&mut p, params(2, false, false));
    let b = Searcher::new().search(&mut p, params(2, true, false));
    assert_eq!(a.best_move, b.best_move);
}
