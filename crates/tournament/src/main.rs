//! Tournament CLI
//!
//! Run a match between two engines and optionally keep the report.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use chess_core::Engine;
use classical_engine::ChessAi;
use random_engine::RandomEngine;
use tournament::{ConfigError, MatchConfig, MatchRunner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament <engine1> <engine2> [--games N] [--depth D] [--max-moves N]");
    println!("             [--config FILE] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  classical     - Alpha-beta with material eval");
    println!("  random        - Uniformly random legal moves");
    println!("  random:SEED   - Random with a fixed seed");
    println!();
    println!("Examples:");
    println!("  tournament classical random --games 20 --depth 3");
    println!("  tournament classical classical --config match.toml --out report.json");
}

fn create_engine(name: &str) -> Result<Box<dyn Engine>, ConfigError> {
    let parts: Vec<&str> = name.split(':').collect();
    match (parts[0].to_lowercase().as_str(), parts.get(1)) {
        ("classical" | "classic", None) => Ok(Box::new(ChessAi::new())),
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => {
            let seed = parse_flag("random seed", seed)?;
            Ok(Box::new(RandomEngine::with_seed(seed)))
        }
        _ => Err(ConfigError::UnknownEngine(name.to_string())),
    }
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidFlag {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Command line after flag parsing. Flags given explicitly override the
/// config file.
struct Cli {
    engine1: String,
    engine2: String,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    games: Option<u32>,
    depth: Option<u8>,
    max_moves: Option<u32>,
}

fn parse_args(args: &[String]) -> Result<Cli, ConfigError> {
    let mut cli = Cli {
        engine1: args[0].clone(),
        engine2: args[1].clone(),
        config: None,
        out: None,
        games: None,
        depth: None,
        max_moves: None,
    };

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1).ok_or_else(|| ConfigError::InvalidFlag {
            flag: flag.to_string(),
            value: String::new(),
        })?;
        match flag {
            "--games" | "-g" => cli.games = Some(parse_flag(flag, value)?),
            "--depth" | "-d" => cli.depth = Some(parse_flag(flag, value)?),
            "--max-moves" => cli.max_moves = Some(parse_flag(flag, value)?),
            "--config" | "-c" => cli.config = Some(PathBuf::from(value)),
            "--out" | "-o" => cli.out = Some(PathBuf::from(value)),
            _ => {
                return Err(ConfigError::InvalidFlag {
                    flag: flag.to_string(),
                    value: value.clone(),
                })
            }
        }
        i += 2;
    }
    Ok(cli)
}

fn run(args: &[String]) -> Result<(), ConfigError> {
    let cli = parse_args(args)?;

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(games) = cli.games {
        config.num_games = games;
    }
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(max_moves) = cli.max_moves {
        config.max_moves = max_moves;
    }

    let mut engine1 = create_engine(&cli.engine1)?;
    let mut engine2 = create_engine(&cli.engine2)?;

    info!(
        engine1 = %cli.engine1,
        engine2 = %cli.engine2,
        games = config.num_games,
        depth = config.depth,
        "starting match"
    );

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("{}", report.generate_report());

    if let Some(path) = &cli.out {
        report.save(path)?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
