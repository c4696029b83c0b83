use cozy_chess::{BitBoard, Board, Color, Piece};

use crate::board::Position;
use crate::search::pst;

pub const PIECE_SCALE: i32 = 100;
pub const MOBILITY_WEIGHT: i32 = 10;
pub const CHECK_PENALTY: i32 = 50;
pub const ROOK_SEMI_OPEN_FILE: i32 = 10;
pub const ROOK_OPEN_FILE: i32 = 20;
// Fewer non-king pieces than this switches the king to its endgame table.
pub const ENDGAME_PIECES: u32 = 10;

// Mate scoring helpers
pub const MATE_SCORE: i32 = 10_000;
pub const DRAW_SCORE: i32 = 0;

fn piece_units(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 3,
        Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 0,
    }
}

pub fn piece_value_cp(piece: Piece) -> i32 { piece_units(piece) * PIECE_SCALE }

/// +1 for White, -1 for Black.
pub fn sign(color: Color) -> i32 {
    match color { Color::White => 1, Color::Black => -1 }
}

pub fn is_endgame(board: &Board) -> bool {
    board.occupied().len().saturating_sub(2) < ENDGAME_PIECES
}

// Side-agnostic material in centipawns: positive means White has more material.
pub fn material_eval_cp_side_agnostic(board: &Board) -> i32 {
    let mut score = 0;
    for color in Color::ALL {
        for piece in Piece::ALL {
            let n = (board.colors(color) & board.pieces(piece)).len() as i32;
            score += sign(color) * n * piece_value_cp(piece);
        }
    }
    score
}

// Material plus piece-square bonuses, White-positive.
pub fn positional_cp(board: &Board) -> i32 {
    let endgame = is_endgame(board);
    let mut score = 0;
    for color in Color::ALL {
        for piece in Piece::ALL {
            for sq in board.colors(color) & board.pieces(piece) {
                score += sign(color) * (piece_value_cp(piece) + pst::bonus(piece, color, sq, endgame));
            }
        }
    }
    score + rook_file_cp(board)
}

// Rooks on files without own pawns (semi-open) or without any pawns (open).
fn rook_file_cp(board: &Board) -> i32 {
    let pawns = board.pieces(Piece::Pawn);
    let mut score = 0;
    for color in Color::ALL {
        let own_pawns = pawns & board.colors(color);
        for sq in board.colors(color) & board.pieces(Piece::Rook) {
            let file = sq.file();
            let on_file = |bb: BitBoard| bb.into_iter().any(|p| p.file() == file);
            if !on_file(pawns) {
                score += sign(color) * ROOK_OPEN_FILE;
            } else if !on_file(own_pawns) {
                score += sign(color) * ROOK_SEMI_OPEN_FILE;
            }
        }
    }
    score
}

/// Static evaluation, positive favours White.
///
/// Terminal positions short-circuit: checkmate is worth `MATE_SCORE` against the
/// mated side regardless of material, any draw is `DRAW_SCORE`.
pub fn evaluate(pos: &Position) -> i32 {
    let stm = pos.side_to_move();
    let in_check = pos.is_in_check();
    let own_moves = pos.legal_move_count();
    if own_moves == 0 {
        return if in_check { -sign(stm) * MATE_SCORE } else { DRAW_SCORE };
    }
    if pos.is_fifty_move_draw() || pos.is_insufficient_material() || pos.is_threefold_repetition() {
        return DRAW_SCORE;
    }

    let mut score = positional_cp(pos.board());
    if let Some(their_moves) = pos.null_move_legal_count() {
        score += sign(stm) * (own_moves as i32 - their_moves as i32) * MOBILITY_WEIGHT;
    }
    if in_check {
        score -= sign(stm) * CHECK_PENALTY;
    }
    score
}

/// Evaluation from `color`'s point of view.
pub fn evaluate_for(pos: &Position, color: Color) -> i32 { sign(color) * evaluate(pos) }

// Side-to-move perspective (negamax-friendly)
pub fn eval_cp(pos: &Position) -> i32 { evaluate_for(pos, pos.side_to_move()) }
