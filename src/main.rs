use clap::Parser;

use pathfinding_compare::algorithms::StrategyKind;
use pathfinding_compare::config::Config;
use pathfinding_compare::grid::Grid;
use pathfinding_compare::{report, runner};

fn main() {
    env_logger::init();
    let config = Config::parse();

    let kinds = match StrategyKind::parse_list(&config.algorithms) {
        Ok(kinds) => kinds,
        Err(e) => {
            eprintln!("Invalid --algorithms value: {}", e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        println!("Starting pathfinding comparison...");
        println!("Grid size: {}x{}", config.width, config.height);
        println!("Obstacles: {}", config.num_obstacles);
        match config.seed {
            Some(seed) => println!("Seed: {}", seed),
            None => println!("Seed: random"),
        }
        println!(
            "Algorithms: {}",
            kinds
                .iter()
                .map(|kind| kind.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    let grid = Grid::generate(config.width, config.height, config.num_obstacles, config.seed);

    match runner::compare(&grid, grid.start(), grid.target(), &kinds) {
        Ok(runs) => {
            report::print_comparison(&runs);
            if !config.no_grid {
                for run in &runs {
                    report::print_overlay(&grid, run);
                }
            }
        }
        Err(e) => {
            eprintln!("Comparison failed: {}", e);
            std::process::exit(1);
        }
    }
}
