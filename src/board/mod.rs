pub mod moves;
pub mod piece;

pub use moves::{Coord, Move, MoveKind};
pub use piece::{Color, Direction, Piece, PieceKind, KING_DIRECTIONS};

use std::fmt;

/// The position: a flat occupancy array indexed by square, cached per-color
/// piece counts, and the side to move. The flat array keeps `Clone` cheap,
/// which matters because the search copies the board at every node.
#[derive(Clone)]
pub struct Board {
    squares: [Option<Piece>; 64],
    white_count: u8,
    black_count: u8,
    side: Color,
}

impl Board {
    /// Starting position: twelve pawns per side on the dark squares
    /// (`row % 2 == column % 2`) of rows 0-2 (White) and 5-7 (Black),
    /// White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for row in 0..8i8 {
            for column in 0..8i8 {
                if row % 2 != column % 2 {
                    continue;
                }
                if row < 3 {
                    board.set_piece(Coord::new(column, row), Piece::new(Color::White, PieceKind::Pawn));
                } else if row > 4 {
                    board.set_piece(Coord::new(column, row), Piece::new(Color::Black, PieceKind::Pawn));
                }
            }
        }
        board
    }

    pub fn empty() -> Self {
        Board { squares: [None; 64], white_count: 0, black_count: 0, side: Color::White }
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side = color;
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        if !at.in_board() {
            return None;
        }
        self.squares[at.index()]
    }

    pub fn piece_count(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_count as u32,
            Color::Black => self.black_count as u32,
        }
    }

    /// Places a piece, replacing whatever occupied the square. Position setup
    /// for tests and tools; not part of normal game flow.
    pub fn set_piece(&mut self, at: Coord, piece: Piece) {
        if let Some(old) = self.squares[at.index()].take() {
            self.decrement(old.color);
        }
        self.squares[at.index()] = Some(piece);
        self.increment(piece.color);
    }

    /// All pieces on the board in ascending square order. The fixed scan
    /// order is what makes move enumeration (and therefore the search's
    /// root tie-break) deterministic.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, sq)| sq.map(|p| (Coord::from_index(idx), p)))
    }

    /// Enumerates moves for the side to move as `(captures, quiets)`.
    /// No forced-capture filtering happens here; `legal_moves` applies it.
    pub fn generate_moves(&self) -> (Vec<Move>, Vec<Move>) {
        let mut captures = Vec::new();
        let mut quiets = Vec::new();
        for (pos, piece) in self.pieces() {
            if piece.color != self.side {
                continue;
            }
            let mut taken = Vec::new();
            captures.extend(self.find_all_captures(pos, piece.color, &mut taken));
            for &dir in piece.move_directions() {
                let to = pos.offset(dir, 1);
                if to.in_board() && self.piece_at(to).is_none() {
                    quiets.push(Move::normal(pos, to));
                }
            }
        }
        (captures, quiets)
    }

    /// Depth-first enumeration of every maximal capture chain for a piece of
    /// `color` standing at `from`. Captures run in all four diagonals
    /// regardless of piece kind. `taken` holds the squares already jumped in
    /// the current chain and follows a push/recurse/pop discipline; callers
    /// pass an empty buffer.
    ///
    /// A single jump is emitted only when no further capture exists from its
    /// landing square; otherwise each continuation is emitted with the
    /// current square prepended, so partial chains never surface.
    pub fn find_all_captures(&self, from: Coord, color: Color, taken: &mut Vec<Coord>) -> Vec<Move> {
        let mut found = Vec::new();
        for dir in KING_DIRECTIONS {
            let over = from.offset(dir, 1);
            let landing = from.offset(dir, 2);
            if !landing.in_board() {
                continue;
            }
            match self.piece_at(over) {
                Some(p) if p.color != color => {}
                _ => continue,
            }
            if taken.contains(&over) {
                // each piece may be captured once per chain
                continue;
            }
            if self.piece_at(landing).is_some() {
                continue;
            }
            taken.push(over);
            let continuations = self.find_all_captures(landing, color, taken);
            if continuations.is_empty() {
                found.push(Move::capture(vec![from, landing]));
            } else {
                for mut chain in continuations {
                    chain.squares.insert(0, from);
                    found.push(chain);
                }
            }
            taken.pop();
        }
        found
    }

    /// The moves actually offered to the side to move: captures are
    /// mandatory whenever any exist.
    pub fn legal_moves(&self) -> Vec<Move> {
        let (captures, quiets) = self.generate_moves();
        if captures.is_empty() {
            quiets
        } else {
            captures
        }
    }

    /// The side to move loses when it has nothing to play.
    pub fn is_game_over(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Applies a move produced by `generate_moves` on this exact position:
    /// relocation, captured-piece removal at each jump midpoint, promotion on
    /// the far row, side toggle. Feeding a move that did not come from this
    /// position violates the contract and panics.
    pub fn make_move(&mut self, mv: &Move) {
        let from = mv.from();
        let to = mv.to();
        let mut piece = match self.squares[from.index()].take() {
            Some(p) => p,
            None => panic!("make_move: empty origin square {:?}", from),
        };
        if mv.kind == MoveKind::Capture {
            for pair in mv.squares.windows(2) {
                let victim_square = Coord::midpoint(pair[0], pair[1]);
                match self.squares[victim_square.index()].take() {
                    Some(victim) => self.decrement(victim.color),
                    None => panic!("make_move: no piece to capture at {:?}", victim_square),
                }
            }
        }
        let promotion_row = match piece.color {
            Color::White => 7,
            Color::Black => 0,
        };
        if to.y == promotion_row {
            piece.kind = PieceKind::King;
        }
        self.squares[to.index()] = Some(piece);
        self.side = self.side.opponent();
    }

    fn increment(&mut self, color: Color) {
        match color {
            Color::White => self.white_count += 1,
            Color::Black => self.black_count += 1,
        }
    }

    fn decrement(&mut self, color: Color) {
        match color {
            Color::White => self.white_count -= 1,
            Color::Black => self.black_count -= 1,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Rows print top (row 7) to bottom (row 0), columns left to right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8i8).rev() {
            for column in 0..8i8 {
                match self.piece_at(Coord::new(column, row)) {
                    Some(piece) => write!(f, "{}  ", piece.glyph())?,
                    None => write!(f, "·  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
