//! Arena Binary
//!
//! Self-play games between searching seats, one JSON log per game.
//!
//! Options: --games, --players, --iterations, --horizon, --threads, --output, --seed

use anyhow::Context;
use clap::Parser;
use colori::arena::Arena;
use colori::arena::GameLog;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Play Colori games between searching seats", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=4))]
    players: u8,
    #[arg(long, default_value_t = 100)]
    iterations: usize,
    /// rounds searched past the current one
    #[arg(long)]
    horizon: Option<u32>,
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,
    #[arg(long, default_value = "game-logs")]
    output: PathBuf,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    colori::log();
    let args = Args::parse();
    let arena = Arena {
        players: args.players as usize,
        iterations: args.iterations,
        lookahead: args.horizon,
        seed: args.seed.unwrap_or_else(rand::random),
    };
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("create output directory {}", args.output.display()))?;
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("build thread pool")?;
    log::info!(
        "playing {} games of {} players at {} iterations on {} threads (seed {})",
        args.games,
        arena.players,
        arena.iterations,
        args.threads,
        arena.seed
    );
    let logs = (0..args.games)
        .into_par_iter()
        .map(|index| -> anyhow::Result<GameLog> {
            let log = arena.play(index)?;
            save(&args.output, index, &log)?;
            Ok(log)
        })
        .collect::<anyhow::Result<Vec<GameLog>>>()?;
    let rounds = logs
        .iter()
        .filter_map(|log| log.entries.last())
        .map(|entry| entry.round as f32)
        .sum::<f32>()
        / logs.len().max(1) as f32;
    log::info!("wins per seat {:?}", arena.tally(&logs));
    log::info!("average rounds {:.1}", rounds);
    Ok(())
}

fn save(dir: &std::path::Path, index: usize, log: &GameLog) -> anyhow::Result<()> {
    let path = dir.join(format!("game-{}-{:04}.json", log.game_started_at, index));
    std::fs::write(&path, log.to_json()?).with_context(|| format!("write {}", path.display()))
}
