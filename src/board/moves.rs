use super::piece::Direction;

/// Board coordinate, `x` is the file and `y` the rank, each in `[0, 8)`.
/// Out-of-range values may appear transiently while probing candidate
/// squares; `in_board` gates them before any occupancy access.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Coord { x, y }
    }

    pub fn in_board(self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }

    pub fn offset(self, dir: Direction, length: i8) -> Coord {
        Coord::new(self.x + dir.0 * length, self.y + dir.1 * length)
    }

    /// Square halfway between two jump endpoints; the captured piece sits here.
    pub fn midpoint(a: Coord, b: Coord) -> Coord {
        Coord::new((a.x + b.x) / 2, (a.y + b.y) / 2)
    }

    pub(crate) fn index(self) -> usize {
        debug_assert!(self.in_board());
        (self.y as usize) * 8 + self.x as usize
    }

    pub(crate) fn from_index(idx: usize) -> Coord {
        Coord::new((idx % 8) as i8, (idx / 8) as i8)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Normal,
    Capture,
}

/// A move as the ordered squares the piece visits. Normal moves hold exactly
/// two squares; captures hold one per landing in the jump chain.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub kind: MoveKind,
    pub squares: Vec<Coord>,
}

impl Move {
    pub fn normal(from: Coord, to: Coord) -> Self {
        Move { kind: MoveKind::Normal, squares: vec![from, to] }
    }

    pub fn capture(squares: Vec<Coord>) -> Self {
        debug_assert!(squares.len() >= 2);
        Move { kind: MoveKind::Capture, squares }
    }

    pub fn from(&self) -> Coord {
        self.squares[0]
    }

    pub fn to(&self) -> Coord {
        self.squares[self.squares.len() - 1]
    }

    /// Number of jumps in a capture chain (zero for a normal move is never
    /// meaningful; callers only ask this of captures).
    pub fn jumps(&self) -> usize {
        self.squares.len() - 1
    }
}
