use cozy_chess::Color;
use piebot_opponent::search::eval::{eval_cp, evaluate_for, DRAW_SCORE};
use piebot_opponent::search::Searcher;
use piebot_opponent::Position;

#[test]
fn qsearch_improves_tactical_position() {
    // Black bishop on c1 can take the hanging queen on f4.
    let mut p = Position::from_fen("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1").unwrap();
    let mut s = Searcher::new();
    let stand = eval_cp(&p);
    let qs = s.quiescence_eval(&mut p);
    assert!(qs > stand, "qsearch should improve eval: qs {qs} vs stand {stand}");
}

#[test]
fn qsearch_equals_standpat_without_captures() {
    let mut p = Position::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
    let mut s = Searcher::new();
    let stand = eval_cp(&p);
    let qs = s.quiescence_eval(&mut p);
    assert_eq!(qs, stand, "qsearch should equal stand pat without captures");
}

#[test]
fn qsearch_must_take_a_capture_when_one_exists() {
    // Qxh6 is White's only capture and it stalemates Black.
    let mut p = Position::from_fen("k7/2K5/1P5p/8/8/8/7Q/8 w - - 0 1").unwrap();
    let stand = eval_cp(&p);
    assert!(stand > 0);
    assert_eq!(Searcher::new().quiescence_eval(&mut p), DRAW_SCORE);
}

#[test]
fn qsearch_scores_the_capture_result() {
    // Nxe5 is the only capture.
    let mut p = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();
    let nxe5 = p.legal_moves().into_iter().find(|m| m.uci() == "f3e5").unwrap();
    assert_eq!(p.legal_moves().iter().filter(|m| m.is_capture()).count(), 1);
    let mut after = p.clone();
    after.apply_move(&nxe5).unwrap();
    let expected = evaluate_for(&after, Color::White);
    assert_eq!(Searcher::new().quiescence_eval(&mut p), expected);
}
