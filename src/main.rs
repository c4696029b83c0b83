use anyhow::{Context, Result};
use clap::Parser;
use cozy_chess::Color;
use piebot_opponent::board::notation;
use piebot_opponent::config::AdvisorySettings;
use piebot_opponent::{ComputerOpponent, DifficultyTier, EngineConfig, Move, Position};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the computer opponent", long_about = None)]
struct Args {
    /// Difficulty: novice, intermediate or master (easy/normal/hard also accepted)
    #[arg(long, value_enum)]
    tier: Option<DifficultyTier>,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Advisory endpoint; overrides the config file
    #[arg(long)]
    advisor_url: Option<String>,

    /// Bearer token for the advisory endpoint
    #[arg(long, env = "ADVISOR_API_KEY")]
    advisor_key: Option<String>,

    /// Fixed RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let the engine play both sides
    #[arg(long)]
    selfplay: bool,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn print_board(pos: &Position) {
    println!();
    for (i, row) in pos.board_snapshot().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some((piece, color)) => {
                    let c = notation::piece_letter(*piece);
                    if *color == Color::White { c.to_string() } else { c.to_ascii_lowercase().to_string() }
                }
                None => ".".to_string(),
            })
            .collect();
        println!("{} {}", 8 - i, cells.join(" "));
    }
    println!("  a b c d e f g h");
}

fn get_human_move(pos: &Position) -> Result<Option<Move>> {
    loop {
        print!("Your move (e.g. e4, Nf3, e2e4; 'quit' to exit): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let input = input.trim();
        if input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match notation::parse_move(pos, input) {
            Some(mv) => return Ok(Some(mv)),
            None => println!("Illegal or unrecognised move: {input}"),
        }
    }
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut cfg = match &args.config {
        Some(path) => EngineConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(tier) = args.tier {
        cfg.tier = tier;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(url) = &args.advisor_url {
        let settings = cfg.advisory.get_or_insert_with(AdvisorySettings::default);
        settings.endpoint = url.clone();
    }
    if let (Some(key), Some(settings)) = (&args.advisor_key, cfg.advisory.as_mut()) {
        settings.api_key = Some(key.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let human_color = parse_color(&args.color)?;
    let cfg = build_config(&args)?;

    let mut engine = ComputerOpponent::from_config(&cfg).context("creating advisory client")?;
    let mut pos = match &args.fen {
        Some(fen) => Position::from_fen(fen).context("Invalid FEN string")?,
        None => Position::startpos(),
    };
    println!("Difficulty: {} | sources: {}", engine.tier(), engine.active_sources().join(", "));

    loop {
        print_board(&pos);
        println!("{}", notation::status_message(&pos));
        if pos.is_game_over() {
            break;
        }

        if !args.selfplay && pos.side_to_move() == human_color {
            let Some(mv) = get_human_move(&pos)? else {
                println!("Thanks for playing!");
                break;
            };
            pos.apply_move(&mv)?;
        } else {
            println!("{}", engine.thinking_message());
            let start_time = Instant::now();
            let Some(mv) = engine.get_move(&mut pos).await else {
                println!("No legal moves available!");
                break;
            };
            println!("Computer plays: {} ({:.2}s)", mv, start_time.elapsed().as_secs_f32());
            pos.apply_move(&mv)?;
        }
    }

    let history = pos.move_history();
    if !history.is_empty() {
        println!("\nMoves: {}", history.join(" "));
    }
    Ok(())
}
