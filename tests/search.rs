use draughtbot::board::{Board, Color, Coord, Move, MoveKind, Piece, PieceKind};
use draughtbot::search::alphabeta::Engine;
use draughtbot::search::eval::{evaluate, INF};

#[test]
fn minimax_at_depth_zero_is_the_static_evaluation() {
    let b = Board::new();
    let mut engine = Engine::new(Color::White, 3);
    let expected = evaluate(&b, Color::White);
    assert_eq!(engine.minimax(&b, 0, -INF, INF, true), expected);
    assert_eq!(engine.minimax(&b, 0, -INF, INF, false), expected);
}

#[test]
fn leaf_evaluation_is_always_from_the_engines_color() {
    let mut b = Board::new();
    let first = b.legal_moves()[0].clone();
    b.make_move(&first);
    // Black to move, but a White engine still scores the leaf for White.
    let mut engine = Engine::new(Color::White, 3);
    assert_eq!(engine.minimax(&b, 0, -INF, INF, false), evaluate(&b, Color::White));
}

#[test]
fn the_only_candidate_is_returned_whatever_its_value() {
    let mut b = Board::empty();
    b.set_piece(Coord::new(0, 0), Piece::new(Color::White, PieceKind::Pawn));
    b.set_piece(Coord::new(7, 7), Piece::new(Color::Black, PieceKind::Pawn));
    assert_eq!(b.legal_moves().len(), 1);
    let mut engine = Engine::new(Color::White, 2);
    let mv = engine.get_best_move(&b);
    assert_eq!(mv, Move::normal(Coord::new(0, 0), Coord::new(1, 1)));
}

#[test]
fn root_ties_resolve_to_the_last_candidate_in_enumeration_order() {
    // With difficulty 0 every reply-free candidate scores identically from
    // the start (level material, seven black quiet moves), so the engine
    // must keep the final candidate: the (6,2) pawn's second direction.
    let b = Board::new();
    let mut engine = Engine::new(Color::White, 0);
    let mv = engine.get_best_move(&b);
    assert_eq!(mv, Move::normal(Coord::new(6, 2), Coord::new(5, 3)));
}

#[test]
fn the_engine_does_not_hang_a_piece_at_depth_one() {
    let mut b = Board::empty();
    b.set_piece(Coord::new(2, 2), Piece::new(Color::White, PieceKind::Pawn));
    b.set_piece(Coord::new(4, 4), Piece::new(Color::Black, PieceKind::Pawn));
    // stepping to (3,3) lets Black jump to (2,2); stepping to (1,3) is safe
    let mut engine = Engine::new(Color::White, 1);
    let mv = engine.get_best_move(&b);
    assert_eq!(mv, Move::normal(Coord::new(2, 2), Coord::new(1, 3)));
}

#[test]
fn root_candidates_obey_the_forced_capture_rule() {
    let mut b = Board::empty();
    b.set_piece(Coord::new(2, 2), Piece::new(Color::White, PieceKind::Pawn));
    b.set_piece(Coord::new(3, 3), Piece::new(Color::Black, PieceKind::Pawn));
    b.set_piece(Coord::new(6, 0), Piece::new(Color::Black, PieceKind::King));
    let mut engine = Engine::new(Color::White, 2);
    let mv = engine.get_best_move(&b);
    assert_eq!(mv.kind, MoveKind::Capture);
    assert_eq!(mv.squares, vec![Coord::new(2, 2), Coord::new(4, 4)]);
}

#[test]
fn search_reports_visited_nodes() {
    let b = Board::new();
    let mut engine = Engine::new(Color::White, 3);
    engine.get_best_move(&b);
    assert!(engine.nodes() > 7, "a depth-3 search must expand beyond the root candidates");
}

#[test]
fn reconfiguring_the_engine_touches_no_board() {
    let b = Board::new();
    let mut engine = Engine::new(Color::White, 2);
    engine.set_difficulty(4);
    engine.set_color(Color::Black);
    assert_eq!(engine.color(), Color::Black);
    assert_eq!(b.piece_count(Color::White), 12);
    assert_eq!(b.piece_count(Color::Black), 12);
}
