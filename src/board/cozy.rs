use std::fmt;
use std::hash::{Hash, Hasher};

use cozy_chess::{Board as CozyBoard, Color, File, Piece, Rank, Square};

use crate::board::notation;
use crate::error::PositionError;

pub fn opponent(color: Color) -> Color {
    match color { Color::White => Color::Black, Color::Black => Color::White }
}

/// A legal move, described relative to the position it was generated from.
///
/// Castling is reported king-two-squares (e1g1) even though cozy-chess encodes
/// it as the king capturing its own rook; the raw encoding is kept alongside.
#[derive(Debug, Clone)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
    is_capture: bool,
    is_castle_kingside: bool,
    is_castle_queenside: bool,
    san: Option<String>,
    raw: cozy_chess::Move,
}

impl Move {
    pub(crate) fn describe(board: &CozyBoard, raw: cozy_chess::Move) -> Self {
        let stm = board.side_to_move();
        let mover = board.piece_on(raw.from);
        let castle = mover == Some(Piece::King) && board.color_on(raw.to) == Some(stm);
        let (to, kingside, queenside) = if castle {
            let rank = raw.from.rank();
            if raw.to.file() as usize > raw.from.file() as usize {
                (Square::new(File::G, rank), true, false)
            } else {
                (Square::new(File::C, rank), false, true)
            }
        } else {
            (raw.to, false, false)
        };
        let en_passant = mover == Some(Piece::Pawn)
            && raw.from.file() != raw.to.file()
            && board.piece_on(raw.to).is_none();
        let is_capture = !castle && (board.color_on(raw.to) == Some(opponent(stm)) || en_passant);
        Self {
            from: raw.from,
            to,
            promotion: raw.promotion,
            is_capture,
            is_castle_kingside: kingside,
            is_castle_queenside: queenside,
            san: None,
            raw,
        }
    }

    pub fn from(&self) -> Square { self.from }
    pub fn to(&self) -> Square { self.to }
    pub fn promotion(&self) -> Option<Piece> { self.promotion }
    pub fn is_capture(&self) -> bool { self.is_capture }
    pub fn is_castle_kingside(&self) -> bool { self.is_castle_kingside }
    pub fn is_castle_queenside(&self) -> bool { self.is_castle_queenside }
    pub fn is_castle(&self) -> bool { self.is_castle_kingside || self.is_castle_queenside }
    pub fn san(&self) -> Option<&str> { self.san.as_deref() }

    /// Coordinate notation, e.g. `e2e4`, `e7e8q`, `e1g1`.
    pub fn uci(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(p) = self.promotion { s.push(notation::piece_letter(p).to_ascii_lowercase()); }
        s
    }

    pub(crate) fn raw(&self) -> cozy_chess::Move { self.raw }

    pub(crate) fn with_san(mut self, san: String) -> Self {
        self.san = Some(san);
        self
    }
}

// Identity is the (from, to, promotion) triple; the SAN cache does not take part.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.san {
            Some(san) => f.write_str(san),
            None => f.write_str(&self.uci()),
        }
    }
}

/// 8x8 view of the board, row 0 is rank 8.
pub type BoardSnapshot = [[Option<(Piece, Color)>; 8]; 8];

#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    start_ply: u32,
    // Board before each applied move, for exact undo and SAN history.
    stack: Vec<(CozyBoard, cozy_chess::Move)>,
    // Hash of every board reached since creation, current one last.
    hashes: Vec<u64>,
}

impl Position {
    fn from_board(board: CozyBoard) -> Self {
        let fullmove = board.fullmove_number() as u32;
        let black = if board.side_to_move() == Color::Black { 1 } else { 0 };
        let start_ply = fullmove.saturating_sub(1) * 2 + black;
        let hashes = vec![board.hash()];
        Self { board, start_ply, stack: Vec::with_capacity(128), hashes }
    }

    pub fn startpos() -> Self {
        Self::from_board(CozyBoard::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        CozyBoard::from_fen(fen, false)
            .map(Self::from_board)
            .map_err(|e| PositionError::InvalidFen(format!("{e:?}")))
    }

    /// Start position followed by a list of moves in coordinate or SAN notation.
    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, PositionError> {
        let mut pos = Self::startpos();
        for m in moves {
            let mv = notation::parse_move(&pos, m).ok_or_else(|| PositionError::IllegalMove(m.clone()))?;
            pos.apply_move(&mv)?;
        }
        Ok(pos)
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.board.generate_moves(|ml| {
            for m in ml { out.push(Move::describe(&self.board, m)); }
            false
        });
        out
    }

    /// Legal moves starting on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves().into_iter().filter(|m| m.from() == from).collect()
    }

    /// Legal moves with their SAN filled in; slower than `legal_moves`.
    pub fn legal_moves_with_san(&self) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .map(|m| {
                let san = notation::san(&self.board, m.raw());
                m.with_san(san)
            })
            .collect()
    }

    pub fn legal_move_count(&self) -> usize {
        let mut ct = 0usize;
        self.board.generate_moves(|ml| { ct += ml.len(); false });
        ct
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|ml| { any = !ml.is_empty(); any });
        any
    }

    /// Opponent's legal move count if the side to move could pass.
    /// `None` while in check.
    pub fn null_move_legal_count(&self) -> Option<usize> {
        let passed = self.board.null_move()?;
        let mut ct = 0usize;
        passed.generate_moves(|ml| { ct += ml.len(); false });
        Some(ct)
    }

    pub fn apply_move(&mut self, mv: &Move) -> Result<(), PositionError> {
        let raw = mv.raw();
        let mut legal = false;
        self.board.generate_moves(|ml| {
            for m in ml { if m == raw { legal = true; break; } }
            legal
        });
        if !legal { return Err(PositionError::IllegalMove(mv.uci())); }
        self.push(raw);
        Ok(())
    }

    /// Play a move taken from this position's own `legal_moves`.
    pub(crate) fn push(&mut self, raw: cozy_chess::Move) {
        self.stack.push((self.board.clone(), raw));
        self.board.play(raw);
        self.hashes.push(self.board.hash());
    }

    /// Exact inverse of the last `apply_move`. Returns false when nothing was applied.
    pub fn undo_last_move(&mut self) -> bool {
        match self.stack.pop() {
            Some((prev, _)) => {
                self.board = prev;
                self.hashes.pop();
                true
            }
            None => false,
        }
    }

    pub fn is_in_check(&self) -> bool { !self.board.checkers().is_empty() }

    pub fn is_checkmate(&self) -> bool { self.is_in_check() && !self.has_legal_moves() }

    pub fn is_stalemate(&self) -> bool { !self.is_in_check() && !self.has_legal_moves() }

    pub fn is_fifty_move_draw(&self) -> bool { self.board.halfmove_clock() >= 100 }

    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() { return false; }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        let minors = knights.len() + bishops.len();
        if minors <= 1 { return true; }
        // K+B vs K+B with both bishops on the same square colour
        if knights.is_empty() && bishops.len() == 2 {
            let white = (b.colors(Color::White) & bishops).len();
            if white == 1 {
                let shades: Vec<usize> = bishops
                    .into_iter()
                    .map(|sq| (sq.file() as usize + sq.rank() as usize) % 2)
                    .collect();
                return shades[0] == shades[1];
            }
        }
        false
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.hash();
        self.hashes.iter().filter(|&&h| h == current).count() >= 3
    }

    pub fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_fifty_move_draw()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves()
            || self.is_fifty_move_draw()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        let mut grid: BoardSnapshot = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            let rank = Rank::index(7 - row);
            for (file, cell) in cells.iter_mut().enumerate() {
                let sq = Square::new(File::index(file), rank);
                if let (Some(p), Some(c)) = (self.board.piece_on(sq), self.board.color_on(sq)) {
                    *cell = Some((p, c));
                }
            }
        }
        grid
    }

    /// FEN of the current position.
    pub fn serialize(&self) -> String { format!("{}", self.board) }

    /// SAN of every move applied since this position was created.
    pub fn move_history(&self) -> Vec<String> {
        self.stack.iter().map(|(before, raw)| notation::san(before, *raw)).collect()
    }

    /// Plies played in the game, counting those implied by the FEN move counter.
    pub fn ply_count(&self) -> u32 { self.start_ply + self.stack.len() as u32 }

    /// Number of moves applied since creation.
    pub fn applied_moves(&self) -> usize { self.stack.len() }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.serialize() == other.serialize()
            && self.start_ply == other.start_ply
            && self.hashes == other.hashes
            && self.stack.len() == other.stack.len()
            && self.stack.iter().zip(&other.stack).all(|((a, ma), (b, mb))| {
                ma == mb && format!("{a}") == format!("{b}")
            })
    }
}

impl Eq for Position {}
