use anyhow::Result;
use clap::Parser;
use draughtbot::selfplay::{generate_games, save_records_jsonl, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate draughts selfplay games as JSONL", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Ply cap per game; games hitting it record result 0
    #[arg(long, default_value_t = 150)]
    max_plies: usize,

    /// Engine search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// RNG seed for the random mover
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pick moves uniformly at random instead of searching
    #[arg(long)]
    random: bool,

    /// Output path for JSONL records
    #[arg(long, default_value = "selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = SelfPlayParams {
        games: args.games,
        max_plies: args.max_plies,
        depth: args.depth,
        seed: args.seed,
        use_engine: !args.random,
    };
    let records = generate_games(&params);

    let white_wins = records.iter().filter(|r| r.result == 1).count();
    let black_wins = records.iter().filter(|r| r.result == -1).count();
    let unfinished = records.len() - white_wins - black_wins;
    println!(
        "{} games: {} white wins, {} black wins, {} unfinished",
        records.len(),
        white_wins,
        black_wins,
        unfinished
    );

    save_records_jsonl(&args.out, &records)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
