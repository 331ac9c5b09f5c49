use crate::board::{Board, Color, PieceKind};

/// Score bound; outside anything `evaluate` can produce.
pub const INF: i32 = 1_000_000;

const KING_VALUE: i32 = 10;
const PAWN_VALUE: i32 = 5;
const MOBILITY_WEIGHT: i32 = 3;
const COUNT_WEIGHT: i32 = 1000;

/// Static score of the position from `color`'s perspective:
/// material + mobility + piece-count differential.
///
/// The mobility term scores the quiet-move list of the side to move, weighted
/// by squares visited beyond the first. Quiet moves always span exactly two
/// squares, so in practice this is `MOBILITY_WEIGHT` per available quiet
/// move, credited to `color` when it is the side to move and charged
/// otherwise. The count differential dominates both other terms, making raw
/// piece count the primary signal with material and mobility as tie-breakers.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for (_, piece) in board.pieces() {
        let value = match piece.kind {
            PieceKind::King => KING_VALUE,
            PieceKind::Pawn => PAWN_VALUE,
        };
        if piece.color == color {
            score += value;
        } else {
            score -= value;
        }
    }

    let (_, quiets) = board.generate_moves();
    let mobility: i32 = quiets.iter().map(|mv| MOBILITY_WEIGHT * mv.jumps() as i32).sum();
    if board.side_to_move() == color {
        score += mobility;
    } else {
        score -= mobility;
    }

    let own = board.piece_count(color) as i32;
    let opponent = board.piece_count(color.opponent()) as i32;
    score + (own - opponent) * COUNT_WEIGHT
}
