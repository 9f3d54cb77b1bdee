//! Game of Life CLI - Run simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use torus_life::{
    schema::{GridConfig, Seed},
    sim::Simulation,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a toroidal Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to grid configuration file");
        eprintln!("  generations  Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");

        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: GridConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    println!("Game of Life (toroidal)");
    println!("=======================");
    println!("Grid: {}x{}", config.rows, config.cols);
    println!("Generations: {}", generations);
    println!();

    let mut simulation = Simulation::from_seed(config, &seed).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    let initial_stats = simulation.stats();
    println!("Initial state:");
    println!("  Population: {}", initial_stats.population);
    println!("  Density: {:.4}", initial_stats.density);
    println!();

    // Run simulation
    println!("Running simulation...");
    let start = Instant::now();
    simulation.mark_restart_point();

    let mut total_births = 0usize;
    let mut total_deaths = 0usize;
    for i in 0..generations {
        let delta = simulation.tick();
        total_births += delta.births;
        total_deaths += delta.deaths;

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = simulation.stats();
            let elapsed = start.elapsed().as_secs_f32();
            let gens_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: population={}, {:.1} gens/s",
                i + 1,
                generations,
                stats.population,
                gens_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = simulation.stats();

    println!();
    println!("Final state:");
    println!("  Population: {}", final_stats.population);
    println!("  Density: {:.4}", final_stats.density);
    println!("  Births: {}, deaths: {}", total_births, total_deaths);
    println!();
    println!(
        "Time: {:.2}s ({:.1} gens/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = GridConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
