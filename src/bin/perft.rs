use anyhow::{Context, Result};
use clap::Parser;
use piebot_opponent::perft::perft;
use piebot_opponent::Position;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let depth = args.depth;
    let base = if args.fen == "startpos" {
        Position::startpos()
    } else {
        Position::from_fen(&args.fen).context("Invalid FEN")?
    };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| -> Result<(u64, f64)> {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth <= 1 {
            perft(&mut base.clone(), depth)
        } else {
            base.legal_moves()
                .par_iter()
                .map(|mv| -> Result<u64> {
                    let mut p = base.clone();
                    p.apply_move(mv)?;
                    Ok(perft(&mut p, depth - 1))
                })
                .sum::<Result<u64>>()?
        };
        Ok((nodes, t0.elapsed().as_secs_f64()))
    })?;

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
