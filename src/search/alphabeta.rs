use crate::board::{Board, Color, Move};
use crate::search::eval::{evaluate, INF};

/// Minimax opponent with alpha-beta pruning. Holds the color it plays and the
/// search depth in plies; both may be reconfigured between moves without any
/// effect on boards already in play.
pub struct Engine {
    color: Color,
    depth: u32,
    nodes: u64,
}

impl Engine {
    pub fn new(color: Color, difficulty: u32) -> Self {
        Engine { color, depth: difficulty, nodes: 0 }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_difficulty(&mut self, difficulty: u32) {
        self.depth = difficulty;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Nodes visited by the most recent `get_best_move` call.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks a root move for the side to move. Root candidates obey the
    /// forced-capture rule: captures if any exist, quiet moves otherwise.
    /// Each candidate is applied to a cloned board and scored by `minimax`
    /// with the opponent to reply. Among candidates tied for the best score
    /// the last one in enumeration order wins.
    ///
    /// Precondition: the side to move has at least one legal move. Callers
    /// check game-over first; violating this panics.
    pub fn get_best_move(&mut self, board: &Board) -> Move {
        self.nodes = 0;
        let candidates = board.legal_moves();
        assert!(!candidates.is_empty(), "get_best_move: side to move has no legal moves");
        let mut best = candidates[0].clone();
        let mut best_value = -INF;
        for mv in candidates {
            let mut child = board.clone();
            child.make_move(&mv);
            let value = self.minimax(&child, self.depth, -INF, INF, false);
            if value >= best_value {
                best_value = value;
                best = mv;
            }
        }
        log::debug!(
            "depth {} search visited {} nodes, best {} scores {}",
            self.depth,
            self.nodes,
            best,
            best_value
        );
        best
    }

    /// Alpha-beta minimax. Leaf scores always come from `evaluate` for the
    /// engine's own color; alternation lives entirely in `maximizing`. The
    /// move list below the root is captures followed by quiet moves with no
    /// forced-capture filtering, so the search explores a superset of the
    /// legal continuations. A side with no moves at an interior node scores
    /// as the worst case for whoever is to choose there.
    pub fn minimax(&mut self, board: &Board, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(board, self.color);
        }
        let (mut moves, mut quiets) = board.generate_moves();
        moves.append(&mut quiets);
        if maximizing {
            let mut best = -INF;
            for mv in moves {
                let mut child = board.clone();
                child.make_move(&mv);
                let value = self.minimax(&child, depth - 1, alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mv in moves {
                let mut child = board.clone();
                child.make_move(&mv);
                let value = self.minimax(&child, depth - 1, alpha, beta, true);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
