use draughtbot::board::{Board, Color, Coord, Piece, PieceKind};
use draughtbot::perft::perft;

#[test]
fn shallow_perft_from_the_starting_position() {
    let b = Board::new();
    assert_eq!(perft(&b, 0), 1);
    // only the four row-2 pawns can step, 7 squares between them
    assert_eq!(perft(&b, 1), 7);
    // no capture can arise after one step each, so the counts multiply
    assert_eq!(perft(&b, 2), 49);
}

#[test]
fn perft_counts_only_legal_moves_under_forced_capture() {
    let mut b = Board::empty();
    b.set_piece(Coord::new(2, 2), Piece::new(Color::White, PieceKind::Pawn));
    b.set_piece(Coord::new(3, 3), Piece::new(Color::Black, PieceKind::Pawn));
    b.set_piece(Coord::new(0, 6), Piece::new(Color::Black, PieceKind::Pawn));
    // quiet steps exist but the single capture is the only legal move
    assert_eq!(perft(&b, 1), 1);
}

#[test]
fn perft_is_zero_in_a_lost_position() {
    let mut b = Board::empty();
    b.set_piece(Coord::new(0, 6), Piece::new(Color::White, PieceKind::Pawn));
    b.set_piece(Coord::new(1, 7), Piece::new(Color::Black, PieceKind::Pawn));
    b.set_piece(Coord::new(1, 5), Piece::new(Color::Black, PieceKind::Pawn));
    b.set_piece(Coord::new(2, 4), Piece::new(Color::Black, PieceKind::Pawn));
    assert_eq!(perft(&b, 1), 0);
}
