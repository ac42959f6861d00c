// Standalone replay tool for analyzing maze-hunter turn logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Hunter.toml (default: Hunter.toml)

use std::env;
use std::process;

// Import from the main crate
use maze_hunter::config::Config;
use maze_hunter::replay::ReplayEngine;

fn print_usage() {
    eprintln!("maze-hunter Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Hunter.toml (default: Hunter.toml)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  # Replay all turns");
    eprintln!("  replay maze_hunter_turns.jsonl --all");
    eprintln!();
    eprintln!("  # Replay specific turns with detail");
    eprintln!("  replay maze_hunter_turns.jsonl --turns 5,10,15 --verbose");
}

fn parse_turns(s: &str) -> Result<Vec<u32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let log_file = &args[1];
    let mut replay_all = false;
    let mut turns: Option<Vec<u32>> = None;
    let mut verbose = false;
    let mut config_path = "Hunter.toml".to_string();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => replay_all = true,
            "--verbose" => verbose = true,
            "--turns" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--turns requires an argument");
                    process::exit(1);
                }
                match parse_turns(&args[i]) {
                    Ok(t) => turns = Some(t),
                    Err(e) => {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--config requires an argument");
                    process::exit(1);
                }
                config_path = args[i].clone();
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !replay_all && turns.is_none() {
        eprintln!("Specify --all or --turns");
        print_usage();
        process::exit(1);
    }

    let config = match Config::from_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {} — using hardcoded defaults", e);
            Config::default_hardcoded()
        }
    };

    let engine = ReplayEngine::new(config, verbose);

    let mut entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Failed to load log file: {}", e);
            process::exit(1);
        }
    };

    if let Some(selected) = turns {
        entries.retain(|e| selected.contains(&e.turn));
        if entries.is_empty() {
            eprintln!("No matching turns found in log");
            process::exit(1);
        }
    }

    let stats = engine.replay_entries(&entries);

    println!();
    println!("Replay complete:");
    println!("  turns replayed:       {}", stats.total_turns);
    println!(
        "  log matches:          {} ({:.1}%)",
        stats.log_matches,
        stats.log_match_rate * 100.0
    );
    println!(
        "  strategy agreements:  {} ({:.1}%)",
        stats.strategy_agreements,
        stats.agreement_rate * 100.0
    );
}
