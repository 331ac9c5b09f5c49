//! Batch game generation: engine versus engine or seeded random movers.
//! Records end up as one JSON object per line so runs can be appended and
//! replayed.

use crate::board::{Board, Color};
use crate::search::alphabeta::Engine;
use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    /// Search depth when `use_engine` is set.
    pub depth: u32,
    pub seed: u64,
    /// Engine picks moves when true, the seeded RNG otherwise.
    pub use_engine: bool,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        SelfPlayParams { games: 1, max_plies: 150, depth: 3, seed: 42, use_engine: true }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// Moves in wire notation, in play order.
    pub moves: Vec<String>,
    /// 1 white win, -1 black win, 0 unfinished at the ply cap.
    pub result: i8,
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for game_index in 0..params.games {
        let mut board = Board::new();
        let mut record = GameRecord { moves: Vec::new(), result: 0 };
        while record.moves.len() < params.max_plies {
            let legal = board.legal_moves();
            if legal.is_empty() {
                // side to move cannot play and loses
                record.result = match board.side_to_move() {
                    Color::White => -1,
                    Color::Black => 1,
                };
                break;
            }
            let mv = if params.use_engine {
                let mut engine = Engine::new(board.side_to_move(), params.depth);
                engine.get_best_move(&board)
            } else {
                legal[rng.gen_range(0..legal.len())].clone()
            };
            record.moves.push(mv.to_string());
            board.make_move(&mv);
        }
        log::info!(
            "game {}: {} plies, result {}",
            game_index,
            record.moves.len(),
            record.result
        );
        games.push(record);
    }
    games
}

pub fn save_records_jsonl(path: &Path, records: &[GameRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_records_jsonl(path: &Path) -> Result<Vec<GameRecord>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
