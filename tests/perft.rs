use piebot_opponent::perft::perft;
use piebot_opponent::Position;

#[test]
fn perft_startpos_shallow() {
    let mut p = Position::startpos();
    assert_eq!(perft(&mut p, 1), 20);
    assert_eq!(perft(&mut p, 2), 400);
    assert_eq!(perft(&mut p, 3), 8902);
    assert_eq!(p, Position::startpos());
}

#[test]
fn perft_kiwipete_shallow() {
    // Castling, en passant and promotions all show up by depth 2.
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let mut p = Position::from_fen(fen).unwrap();
    assert_eq!(perft(&mut p, 1), 48);
    assert_eq!(perft(&mut p, 2), 2039);
}

#[test]
fn perft_endgame_position() {
    let mut p = Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(perft(&mut p, 1), 14);
    assert_eq!(perft(&mut p, 2), 191);
    assert_eq!(perft(&mut p, 3), 2812);
}
