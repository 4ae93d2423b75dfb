//! Moth-Flame CLI - Run benchmark optimizations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::time::Instant;

use moth_flame::{MothFlameOptimizer, RunConfig};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <run.json>", args[0]);
        eprintln!();
        eprintln!("Run a moth-flame optimization from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  run.json  Path to run configuration file");
        eprintln!();
        eprintln!("Example configuration is printed with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let config = RunConfig::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", config_path.display(), e);
        std::process::exit(1);
    });

    let optimizer_config = &config.optimizer;
    println!("Moth-Flame Optimization");
    println!("=======================");
    println!("Objective: {:?}", config.objective);
    println!(
        "Agents: {}, dimensions: {}, iterations: {}",
        optimizer_config.search_agents,
        optimizer_config.dimensions,
        optimizer_config.max_iterations
    );
    println!();

    let mut optimizer = MothFlameOptimizer::new(config.optimizer.clone()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let total = config.optimizer.max_iterations;
    let report_every = (total / 10).max(1);
    let start = Instant::now();

    let result = optimizer
        .run_with_callback(&config.objective, |progress| {
            // Print progress every 10%
            if (progress.iteration + 1) % report_every == 0 {
                println!(
                    "  Iteration {}/{}: best={:.6e}, mean={:.6e}, flames={}",
                    progress.iteration + 1,
                    progress.total_iterations,
                    progress.best_fitness,
                    progress.mean_fitness,
                    progress.flame_count
                );
            }
        })
        .unwrap_or_else(|e| {
            eprintln!("Optimization failed: {}", e);
            std::process::exit(1);
        });

    let elapsed = start.elapsed();

    println!();
    println!("Best fitness: {:.6e}", result.best_fitness);
    println!(
        "Time: {:.2}s ({:.1} evaluations/s)",
        elapsed.as_secs_f32(),
        optimizer.evaluations() as f64 / elapsed.as_secs_f64()
    );
    println!();

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}

fn print_example_config() {
    let config = RunConfig::default();

    println!("Example configuration (run.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example: {}", e),
    }
}
