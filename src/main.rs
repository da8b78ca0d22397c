//! Gomoku self-play driver
//!
//! Pits two AI tiers against each other and prints the final board.

use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use gomoku::{
    create_player_with, find_five_positions, is_winning_move, Board, GomokuError, Player,
    PlayerKind, Stone,
};

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
struct Options {
    #[arg(long, default_value = "hard", value_parser = parse_automated)]
    /// tier playing black (very-easy, easy, medium, hard, very-hard or 2..=6)
    black: PlayerKind,

    #[arg(long, default_value = "very-hard", value_parser = parse_automated)]
    /// tier playing white
    white: PlayerKind,

    #[arg(short, long, default_value_t = gomoku::DEFAULT_BOARD_SIZE)]
    /// board side length
    size: usize,

    #[arg(long)]
    /// seed for reproducible random tiers
    seed: Option<u64>,

    #[arg(long, default_value_t = 15_000)]
    /// per-move search budget in milliseconds
    time_budget_ms: u64,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show (RUST_LOG overrides)
    log_level: String,
}

fn parse_automated(selector: &str) -> Result<PlayerKind, String> {
    let kind: PlayerKind = selector.parse().map_err(|e: GomokuError| e.to_string())?;
    if kind.is_automated() {
        Ok(kind)
    } else {
        Err("self-play needs two automated players".to_string())
    }
}

fn main() {
    let options = Options::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(options.log_level.as_str()))
        .init();

    if let Err(e) = run(&options) {
        error!("fatal error: {}", e);
        std::process::exit(1);
    }
}

fn run(options: &Options) -> gomoku::Result<()> {
    let mut board = Board::with_size(options.size)?;
    let budget = Duration::from_millis(options.time_budget_ms);

    let mut players: [Box<dyn Player>; 2] = [
        build(options.black, Stone::Black, options.seed, budget)?,
        build(options.white, Stone::White, options.seed.map(|s| s.wrapping_add(1)), budget)?,
    ];

    info!(
        "{}x{} board: {} (black) vs {} (white)",
        board.size(),
        board.size(),
        options.black,
        options.white
    );

    let mut turn = 0;
    loop {
        if board.is_full() {
            println!("{}", render(&board));
            println!("Draw after {} moves", turn);
            return Ok(());
        }

        let player = &mut players[turn % 2];
        let stone = player.stone();
        let pos = player.get_move(&mut board)?;
        board.place(pos, stone)?;
        turn += 1;
        info!("move {}: {} {} plays {}", turn, player.kind(), stone, pos);

        if is_winning_move(&board, pos, stone) {
            println!("{}", render(&board));
            let line = find_five_positions(&board, stone)
                .map(|cells| {
                    cells
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();
            println!("{} ({}) wins after {} moves: {}", stone, player.kind(), turn, line);
            return Ok(());
        }
    }
}

fn build(
    kind: PlayerKind,
    stone: Stone,
    seed: Option<u64>,
    budget: Duration,
) -> gomoku::Result<Box<dyn Player>> {
    create_player_with(kind, stone, |config| {
        let config = config.with_time_budget(budget);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    })
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for pos in board.cells() {
        out.push(match board.stone(pos) {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        });
        if usize::from(pos.col) == board.size() {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out
}
