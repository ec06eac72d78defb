//! Solve both parts for a grid file, or the built-in sample.
//!
//! ```text
//! RUST_LOG=patrol_engine=debug cargo run -p patrol-bench --example patrol_sample -- grid.txt
//! ```

use std::error::Error;
use std::fs;

use patrol_bench::sample_profile;
use patrol_engine::{traverse, ObstructionSearch, SearchConfig};
use patrol_grid::Grid;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let grid = match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
            let grid = Grid::from_lines(&lines)?;
            info!(%path, rows = grid.rows(), cols = grid.cols(), "loaded grid");
            grid
        }
        None => {
            info!("no grid file given, using the built-in sample");
            sample_profile()?
        }
    };

    println!("=== Patrol ===\n");

    let mut marked = grid.clone();
    let traversal = traverse(&mut marked)?;
    if grid.cell_count() <= 400 {
        println!("{marked}\n");
    }
    println!("Part 1: {} distinct cells visited", traversal.visited);

    let search = ObstructionSearch::new(SearchConfig::default())?;
    let report = search.run(&grid)?;
    println!("Part 2: {} loop-inducing placements", report.count());

    let m = &report.metrics;
    println!(
        "\n{} trials on {} worker(s), {} ticks total, longest {} ticks, {:.2} ms",
        m.candidates,
        m.worker_count,
        m.total_ticks,
        m.max_trial_ticks,
        m.total_us as f64 / 1000.0
    );
    Ok(())
}
