use crate::board::Position;

// Leaf count using apply/undo on a single Position (no cloning per node)
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = pos.legal_moves();
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for m in moves {
        pos.push(m.raw());
        nodes += perft(pos, depth - 1);
        pos.undo_last_move();
    }
    nodes
}
