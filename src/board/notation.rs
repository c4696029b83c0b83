//! Standard algebraic notation and move-text parsing.

use cozy_chess::{Board, Color, Piece};

use crate::board::cozy::{Move, Position};

pub fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

fn file_char(sq: cozy_chess::Square) -> char { (b'a' + sq.file() as u8) as char }
fn rank_char(sq: cozy_chess::Square) -> char { (b'1' + sq.rank() as u8) as char }

/// SAN for `raw`, which must be legal on `board`.
pub fn san(board: &Board, raw: cozy_chess::Move) -> String {
    let mv = Move::describe(board, raw);
    let mut out = String::new();
    if mv.is_castle_kingside() {
        out.push_str("O-O");
    } else if mv.is_castle_queenside() {
        out.push_str("O-O-O");
    } else {
        let piece = board.piece_on(raw.from).unwrap_or(Piece::Pawn);
        if piece == Piece::Pawn {
            if mv.is_capture() {
                out.push(file_char(raw.from));
                out.push('x');
            }
            out.push_str(&raw.to.to_string());
            if let Some(p) = raw.promotion {
                out.push('=');
                out.push(piece_letter(p));
            }
        } else {
            out.push(piece_letter(piece));
            // Other pieces of the same kind that can reach the same square
            let mut rivals = Vec::new();
            board.generate_moves(|ml| {
                if ml.piece == piece && ml.from != raw.from {
                    for m in ml { if m.to == raw.to { rivals.push(m.from); } }
                }
                false
            });
            if !rivals.is_empty() {
                let same_file = rivals.iter().any(|sq| sq.file() == raw.from.file());
                let same_rank = rivals.iter().any(|sq| sq.rank() == raw.from.rank());
                if !same_file {
                    out.push(file_char(raw.from));
                } else if !same_rank {
                    out.push(rank_char(raw.from));
                } else {
                    out.push(file_char(raw.from));
                    out.push(rank_char(raw.from));
                }
            }
            if mv.is_capture() { out.push('x'); }
            out.push_str(&raw.to.to_string());
        }
    }
    let mut after = board.clone();
    after.play(raw);
    if !after.checkers().is_empty() {
        let mut has_reply = false;
        after.generate_moves(|ml| { has_reply = !ml.is_empty(); has_reply });
        out.push(if has_reply { '+' } else { '#' });
    }
    out
}

fn strip_check_marks(s: &str) -> &str { s.trim_end_matches(['+', '#', '!', '?']) }

fn normalize(text: &str) -> String {
    text.trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`' || c == '*')
        .trim_end_matches('.')
        .trim()
        .to_string()
}

fn match_castle(text: &str) -> Option<bool> {
    match strip_check_marks(text) {
        "O-O" | "0-0" | "o-o" => Some(true),
        "O-O-O" | "0-0-0" | "o-o-o" => Some(false),
        _ => None,
    }
}

fn match_one(position: &Position, text: &str) -> Option<Move> {
    if text.is_empty() { return None; }
    let legal = position.legal_moves_with_san();
    if let Some(kingside) = match_castle(text) {
        return legal.into_iter().find(|m| if kingside { m.is_castle_kingside() } else { m.is_castle_queenside() });
    }
    let bare = strip_check_marks(text);
    let coord = bare.to_ascii_lowercase().replace('-', "");
    legal.into_iter().find(|m| {
        let san = m.san().unwrap_or_default();
        san == text || strip_check_marks(san) == bare || m.uci() == coord
    })
}

/// Resolve free-form move text (SAN, coordinate, `e2-e4`, castles with O or 0)
/// to one of the position's legal moves.
pub fn parse_move(position: &Position, text: &str) -> Option<Move> {
    let cleaned = normalize(text);
    match_one(position, strip_move_number(&cleaned))
}

// "1. e4", "12...Nf6" -> the move itself. Castles written with zeros are left alone.
fn strip_move_number(text: &str) -> &str {
    let rest = text.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < text.len() && rest.starts_with('.') {
        rest.trim_start_matches('.').trim_start()
    } else {
        text
    }
}

fn color_name(color: Color) -> &'static str {
    match color { Color::White => "White", Color::Black => "Black" }
}

/// Human-readable game state line.
pub fn status_message(position: &Position) -> String {
    let stm = position.side_to_move();
    if position.is_checkmate() {
        let winner = match stm { Color::White => Color::Black, Color::Black => Color::White };
        return format!("Checkmate! {} wins!", color_name(winner));
    }
    if position.is_stalemate() { return "Draw by stalemate".to_string(); }
    if position.is_insufficient_material() { return "Draw by insufficient material".to_string(); }
    if position.is_threefold_repetition() { return "Draw by threefold repetition".to_string(); }
    if position.is_fifty_move_draw() { return "Draw by fifty-move rule".to_string(); }
    if position.is_in_check() { return format!("{} is in check!", color_name(stm)); }
    format!("{} to move", color_name(stm))
}
