use anyhow::{Context, Result};
use clap::Parser;
use cozy_chess::Color;
use indicatif::{ProgressBar, ProgressStyle};
use piebot_opponent::{ComputerOpponent, DifficultyTier, Position};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "tier-match", about = "Play games between two difficulty tiers")]
struct Args {
    /// Tier playing White in even-numbered games
    #[arg(long, value_enum, default_value_t = DifficultyTier::Master)]
    first: DifficultyTier,

    /// Tier playing Black in even-numbered games
    #[arg(long, value_enum, default_value_t = DifficultyTier::Novice)]
    second: DifficultyTier,

    /// Number of games; colours alternate
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Max plies before declaring a draw
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Worker threads
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Base random seed; game i uses seed + i
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Optional: write summary JSON to this path
    #[arg(long)]
    json_out: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    First,
    Second,
    Draw,
}

#[derive(Debug, Serialize)]
struct GameRecord {
    game: usize,
    white: DifficultyTier,
    black: DifficultyTier,
    outcome: Outcome,
    plies: usize,
    moves: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Summary {
    first: DifficultyTier,
    second: DifficultyTier,
    games: usize,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
    score_first: f64,
    records: Vec<GameRecord>,
}

fn play_game(args: &Args, game: usize, rt: &tokio::runtime::Runtime) -> Result<GameRecord> {
    let first_is_white = game % 2 == 0;
    let (white, black) = if first_is_white { (args.first, args.second) } else { (args.second, args.first) };
    let seed = args.seed.wrapping_add(game as u64);
    let mut engines = [
        ComputerOpponent::new(white).with_seed(seed),
        ComputerOpponent::new(black).with_seed(seed ^ 0x9E37_79B9),
    ];
    let mut pos = Position::startpos();

    while !pos.is_game_over() && pos.applied_moves() < args.max_plies {
        let idx = if pos.side_to_move() == Color::White { 0 } else { 1 };
        let Some(mv) = rt.block_on(engines[idx].get_move(&mut pos)) else { break };
        pos.apply_move(&mv).with_context(|| format!("game {game}: engine produced {}", mv.uci()))?;
    }

    let outcome = if pos.is_checkmate() {
        // Side to move is mated.
        let white_won = pos.side_to_move() == Color::Black;
        if white_won == first_is_white { Outcome::First } else { Outcome::Second }
    } else {
        Outcome::Draw
    };
    Ok(GameRecord { game, white, black, outcome, plies: pos.applied_moves(), moves: pos.move_history() })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let records = pool.install(|| {
        (0..args.games)
            .into_par_iter()
            .map(|game| {
                let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
                let rec = play_game(&args, game, &rt);
                pb.inc(1);
                rec
            })
            .collect::<Result<Vec<_>>>()
    })?;
    pb.finish_and_clear();

    let count = |o: Outcome| records.iter().filter(|r| r.outcome == o).count();
    let (first_wins, second_wins, draws) = (count(Outcome::First), count(Outcome::Second), count(Outcome::Draw));
    let summary = Summary {
        first: args.first,
        second: args.second,
        games: records.len(),
        first_wins,
        second_wins,
        draws,
        score_first: if records.is_empty() { 0.0 } else { (first_wins as f64 + 0.5 * draws as f64) / records.len() as f64 },
        records,
    };

    println!(
        "{} vs {}: +{} -{} ={} (score {:.3})",
        summary.first, summary.second, summary.first_wins, summary.second_wins, summary.draws, summary.score_first
    );
    let json = serde_json::to_string_pretty(&summary)?;
    match args.json_out.as_deref() {
        Some(path) => std::fs::write(path, json).with_context(|| format!("writing {path}"))?,
        None => println!("{json}"),
    }
    Ok(())
}
