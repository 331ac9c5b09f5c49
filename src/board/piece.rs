#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    King,
}

/// Diagonal step vector in `(dx, dy)` form.
pub type Direction = (i8, i8);

const WHITE_PAWN_DIRECTIONS: [Direction; 2] = [(1, 1), (-1, 1)];
const BLACK_PAWN_DIRECTIONS: [Direction; 2] = [(1, -1), (-1, -1)];

/// Kings step in all four diagonals; captures use this table for every piece.
pub const KING_DIRECTIONS: [Direction; 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Quiet-move directions for this piece, keyed by `(kind, color)`.
    /// Pawns step toward the opposing back row only; kings go anywhere.
    pub fn move_directions(self) -> &'static [Direction] {
        match (self.kind, self.color) {
            (PieceKind::Pawn, Color::White) => &WHITE_PAWN_DIRECTIONS,
            (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_DIRECTIONS,
            (PieceKind::King, _) => &KING_DIRECTIONS,
        }
    }

    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '⛂',
            (Color::White, PieceKind::King) => '⛃',
            (Color::Black, PieceKind::Pawn) => '⛀',
            (Color::Black, PieceKind::King) => '⛁',
        }
    }
}
