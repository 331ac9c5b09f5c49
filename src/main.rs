use anyhow::Result;
use clap::Parser;
use draughtbot::board::{Board, Color, Move};
use draughtbot::notation::is_valid_move_string;
use draughtbot::search::alphabeta::Engine;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play draughts against the alpha-beta engine", long_about = None)]
struct Args {
    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Engine search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Operation mode: 'h' human vs engine, 's' engine self play
    #[arg(long, default_value = "h")]
    mode: String,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn get_human_move(legal_moves: &[Move]) -> Result<Move> {
    println!("Available moves:");
    for mv in legal_moves {
        print!("{mv}  ");
    }
    println!();
    loop {
        print!("Enter your move (e.g. 9-14 or 22x15): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if !is_valid_move_string(input) {
            println!("Invalid move format! Use square numbers 1-32 like '9-14' or '22x15'");
            continue;
        }
        let mv = Move::from_str(input)?;
        if legal_moves.contains(&mv) {
            return Ok(mv);
        }
        println!("Illegal move!");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_color = parse_color(&args.color)?;
    let mut engine = Engine::new(human_color.opponent(), args.depth);

    let mut board = Board::new();
    loop {
        println!("\n{}'s turn", color_name(board.side_to_move()));
        println!("{board}");

        if board.is_game_over() {
            // no legal moves: the side to move loses
            println!("{} has no moves. {} wins!", color_name(board.side_to_move()), color_name(board.side_to_move().opponent()));
            break;
        }

        let is_human_turn = mode == 'h' && board.side_to_move() == human_color;
        let mv = if is_human_turn {
            get_human_move(&board.legal_moves())?
        } else {
            engine.set_color(board.side_to_move());
            let mv = engine.get_best_move(&board);
            println!("Engine plays: {mv}");
            mv
        };
        board.make_move(&mv);
    }

    Ok(())
}
