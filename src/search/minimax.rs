use log::debug;

use crate::board::{Move, Position};
use crate::search::eval::{evaluate, sign, MATE_SCORE};

// Larger than any reachable score, small enough to negate safely.
const INF: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u32,
    pub use_alpha_beta: bool,
    /// Captures first, then checking moves, then the rest (stable).
    pub order_moves: bool,
    /// One capture-only ply past the nominal depth.
    pub quiescence: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: 2, use_alpha_beta: false, order_moves: false, quiescence: true }
    }
}

impl SearchParams {
    pub fn new(depth: u32, use_alpha_beta: bool) -> Self {
        Self { depth, use_alpha_beta, order_moves: use_alpha_beta, quiescence: true }
    }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Root mover's point of view.
    pub score: i32,
    pub nodes: u64,
}

/// Fixed-depth minimax with optional alpha-beta pruning.
///
/// The search mutates the position in place through apply/undo and always
/// hands it back unchanged. There is no randomness here: the same position,
/// depth and flags give the same move every time.
pub struct Searcher {
    pub(crate) nodes: u64,
    params: SearchParams,
    root_sign: i32,
}

impl Default for Searcher {
    fn default() -> Self {
        Self { nodes: 0, params: SearchParams::default(), root_sign: 1 }
    }
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Best move at `depth` (clamped to at least 1); `None` only without legal moves.
    pub fn search_best_move(&mut self, pos: &mut Position, depth: u32, use_alpha_beta: bool) -> Option<Move> {
        self.search(pos, SearchParams::new(depth, use_alpha_beta)).best_move
    }

    pub fn search(&mut self, pos: &mut Position, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        self.params = params;
        self.root_sign = sign(pos.side_to_move());
        let depth = params.depth.max(1);

        let moves = self.ordered_moves(pos);
        if moves.is_empty() {
            return SearchResult { best_move: None, score: self.leaf(pos, 0), nodes: self.nodes };
        }

        let mut alpha = -INF;
        let mut best_move: Option<Move> = None;
        let mut best_score = -INF;
        for m in moves {
            pos.push(m.raw());
            let score = self.minimax(pos, depth - 1, false, alpha, INF, 1);
            pos.undo_last_move();
            if score > best_score { best_score = score; best_move = Some(m); }
            if params.use_alpha_beta && score > alpha { alpha = score; }
        }

        debug!(
            "search depth={} alpha_beta={} best={} score={} nodes={}",
            depth,
            params.use_alpha_beta,
            best_move.as_ref().map(Move::uci).unwrap_or_default(),
            best_score,
            self.nodes
        );
        SearchResult { best_move, score: best_score, nodes: self.nodes }
    }

    /// Best result of one capture ply, from the side to move's point of view.
    /// Without captures this is the static evaluation.
    pub fn quiescence_eval(&mut self, pos: &mut Position) -> i32 {
        self.root_sign = sign(pos.side_to_move());
        self.quiesce(pos, true, 0)
    }

    fn minimax(&mut self, pos: &mut Position, depth: u32, maximizing: bool, mut alpha: i32, mut beta: i32, ply: i32) -> i32 {
        self.nodes += 1;
        if pos.is_game_over() { return self.leaf(pos, ply); }
        if depth == 0 {
            return if self.params.quiescence { self.quiesce(pos, maximizing, ply) } else { self.leaf(pos, ply) };
        }

        let moves = self.ordered_moves(pos);
        let mut best = if maximizing { -INF } else { INF };
        for m in moves {
            pos.push(m.raw());
            let value = self.minimax(pos, depth - 1, !maximizing, alpha, beta, ply + 1);
            pos.undo_last_move();
            if maximizing {
                best = best.max(value);
                if self.params.use_alpha_beta {
                    alpha = alpha.max(value);
                    if beta <= alpha { break; }
                }
            } else {
                best = best.min(value);
                if self.params.use_alpha_beta {
                    beta = beta.min(value);
                    if beta <= alpha { break; }
                }
            }
        }
        best
    }

    // Captures only; the static evaluation stands in when there are none.
    fn quiesce(&mut self, pos: &mut Position, maximizing: bool, ply: i32) -> i32 {
        let captures: Vec<Move> = pos.legal_moves().into_iter().filter(Move::is_capture).collect();
        if captures.is_empty() { return self.leaf(pos, ply); }
        let mut best = if maximizing { -INF } else { INF };
        for c in captures {
            pos.push(c.raw());
            self.nodes += 1;
            let value = self.leaf(pos, ply + 1);
            pos.undo_last_move();
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    // Static evaluation from the root mover's side; mates found closer to the root score higher.
    fn leaf(&self, pos: &Position, ply: i32) -> i32 {
        let v = self.root_sign * evaluate(pos);
        if v >= MATE_SCORE {
            v - ply
        } else if v <= -MATE_SCORE {
            v + ply
        } else {
            v
        }
    }

    fn ordered_moves(&self, pos: &mut Position) -> Vec<Move> {
        let moves = pos.legal_moves();
        if !self.params.order_moves || moves.len() <= 1 { return moves; }
        let mut keyed: Vec<(u8, Move)> = moves
            .into_iter()
            .map(|m| {
                let key = if m.is_capture() { 0 } else if gives_check(pos, &m) { 1 } else { 2 };
                (key, m)
            })
            .collect();
        keyed.sort_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, m)| m).collect()
    }
}

pub fn gives_check(pos: &mut Position, m: &Move) -> bool {
    pos.push(m.raw());
    let check = pos.is_in_check();
    pos.undo_last_move();
    check
}
