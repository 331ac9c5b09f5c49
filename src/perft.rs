use crate::board::Board;

/// Counts leaf positions reachable in `depth` plies of legal play (forced
/// capture applied at every ply). Clones per child, same as the search.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for mv in board.legal_moves() {
        let mut child = board.clone();
        child.make_move(&mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}
