//! Booster collection simulator CLI.
//!
//! Estimate how many packs it takes to complete each card set.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --release --bin simulate                 # 10,000 trials
//!   cargo run --release --bin simulate -- -n 1000      # 1,000 trials
//!   cargo run --release --bin simulate -- --seed 42    # Reproducible run

use packsim::simulator::{run_simulation, SimConfig};
use packsim::stacks::booster_slots;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, output) = parse_args(&args);

    let slots = match booster_slots() {
        Ok(slots) => slots,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║               BOOSTER COLLECTION SIMULATOR                    ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Trials:     {}", config.num_trials);
        println!("  Round cap:  {}", config.max_rounds);
        if let Some(seed) = config.seed {
            println!("  Seed:       {}", seed);
        }
        if let Some(workers) = config.workers {
            println!("  Workers:    {}", workers);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&slots, &config);

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    std::fs::write(&output, report.results_to_json()).expect("Failed to write results");
    println!("Results saved to: {}", output);
}

fn parse_args(args: &[String]) -> (SimConfig, String) {
    let mut config = SimConfig::default();
    let mut output = "simulation_results.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                if i + 1 < args.len() {
                    config.num_trials = args[i + 1].parse().unwrap_or(config.num_trials);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-r" | "--rounds" => {
                if i + 1 < args.len() {
                    config.max_rounds = args[i + 1].parse().unwrap_or(config.max_rounds);
                    i += 1;
                }
            }
            "-w" | "--workers" => {
                if i + 1 < args.len() {
                    config.workers = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-o" | "--output" => {
                if i + 1 < args.len() {
                    output = args[i + 1].clone();
                    i += 1;
                }
            }
            "--stamp" => {
                output = format!(
                    "simulation_results_{}.json",
                    chrono::Utc::now().format("%Y%m%d_%H%M%S")
                );
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, output)
}

fn print_help() {
    println!("Booster Collection Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --release --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --trials <N>    Number of trials (default: 10,000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -r, --rounds <R>    Round cap per trial (default: 20,000)");
    println!("    -w, --workers <W>   Worker threads (default: all cores)");
    println!("    -o, --output <F>    Output file (default: simulation_results.json)");
    println!("    --stamp             Timestamp the output filename");
    println!("    --quick             Quick run (100 trials)");
    println!("    -q, --quiet         Silence the banner and report");
    println!("    -v, --verbose       Per-anomaly detail");
    println!("    -h, --help          Show this help");
}
