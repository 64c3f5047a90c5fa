use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use icebergs::{Grid, count_paths_dynamic_programming, count_paths_exhaustive, count_paths_unbounded};
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "icebergs")]
#[command(about = "Count monotone paths across a grid that avoid icebergs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Exhaustive,
    Dynamic,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recorded test cases for a task
    Verify {
        /// Task name: exhaustive, dynamic or compare
        task: String,
    },
    /// Count the paths across a grid read from a file, or stdin when omitted
    Count {
        #[arg(short, long, value_enum, default_value_t = Algorithm::Dynamic)]
        algorithm: Algorithm,
        file: Option<PathBuf>,
    },
    /// Check both counters against each other on random grids
    Agree {
        #[arg(short, long, default_value = "6")]
        rows: usize,
        #[arg(short, long, default_value = "6")]
        columns: usize,
        /// Probability that a cell is an iceberg
        #[arg(short, long, default_value = "0.2")]
        density: f64,
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, default_value = "10")]
        trials: usize,
    },
}

fn main() -> std::io::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Verify { task } => {
            if !icebergs::tasks::tasks().run(&task) {
                std::process::exit(1);
            }
        }
        Commands::Count { algorithm, file } => {
            let text = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };
            let grid: Grid = text.parse()?;
            debug!("read {}x{} grid", grid.rows(), grid.columns());
            match algorithm {
                Algorithm::Exhaustive => println!("{}", count_paths_exhaustive(&grid)),
                Algorithm::Dynamic => match count_paths_dynamic_programming(&grid) {
                    Ok(count) => println!("{}", count),
                    Err(overflow) => {
                        info!("{}, recounting with arbitrary precision", overflow);
                        println!("{}", count_paths_unbounded(&grid));
                    }
                },
            }
        }
        Commands::Agree {
            rows,
            columns,
            density,
            seed,
            trials,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!("agreement check, seed {}", seed);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut failures = 0;
            for trial in 0..trials {
                let grid = Grid::random(rows, columns, density, &mut rng);

                let start = Instant::now();
                let exhaustive = count_paths_exhaustive(&grid);
                let exhaustive_time = start.elapsed();

                let start = Instant::now();
                let dynamic = count_paths_dynamic_programming(&grid)?;
                let dynamic_time = start.elapsed();

                info!(
                    "trial {}: {} paths, exhaustive {:?}, dynamic {:?}",
                    trial, exhaustive, exhaustive_time, dynamic_time
                );
                if exhaustive != dynamic {
                    error!(
                        "trial {}: exhaustive {} != dynamic {}\n{}",
                        trial, exhaustive, dynamic, grid
                    );
                    failures += 1;
                }
            }
            println!("{} of {} trials agreed", trials - failures, trials);
            if failures > 0 {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
