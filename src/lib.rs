pub mod board;
pub mod notation;
pub mod perft;
pub mod search;
pub mod selfplay;
