//! Sortlab CLI: run and benchmark the sorting algorithms.

use clap::{ArgAction, Args, Parser, Subcommand};
use sortlab_cli::config::{BenchOverrides, SortlabConfig};
use sortlab_cli::error::CliError;
use sortlab_cli::report::{self, Format};
use sortlab_cli::{bench, colors, commands, logging};
use sortlab_core::Algorithm;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "sortlab", version, about = "Classic sorting algorithms and their benchmarks")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time each algorithm on random inputs
    Bench(BenchArgs),
    /// Sort integers given on the command line
    Sort {
        /// Algorithm to use
        #[arg(short, long, default_value = "merge")]
        algorithm: Algorithm,

        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Print random integers drawn from an inclusive range
    Generate {
        /// Number of values
        n: usize,
        /// Inclusive lower bound
        #[arg(allow_negative_numbers = true)]
        low: i32,
        /// Inclusive upper bound
        #[arg(allow_negative_numbers = true)]
        high: i32,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List available algorithms
    List,
}

#[derive(Args)]
struct BenchArgs {
    /// Config file (default: search for sortlab.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Timed runs per algorithm and size
    #[arg(long)]
    iterations: Option<u32>,

    /// Untimed runs before measuring
    #[arg(long)]
    warmup: Option<u32>,

    /// Inclusive lower bound of generated values
    #[arg(long, allow_negative_numbers = true)]
    low: Option<i32>,

    /// Inclusive upper bound of generated values
    #[arg(long, allow_negative_numbers = true)]
    high: Option<i32>,

    /// Seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Restrict to these algorithms (repeatable)
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,

    /// Skip the standard library baselines
    #[arg(long)]
    no_baselines: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl BenchArgs {
    fn overrides(&self) -> BenchOverrides {
        BenchOverrides {
            sizes: self.sizes.clone(),
            iterations: self.iterations,
            warmup: self.warmup,
            low: self.low,
            high: self.high,
            seed: self.seed,
            algorithms: self.algorithms.clone(),
            no_baselines: self.no_baselines,
        }
    }
}

fn run_bench(args: BenchArgs) -> Result<(), CliError> {
    let (path, config) = SortlabConfig::load(args.config.as_deref())?;
    match &path {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }
    let mut settings = config.bench;
    settings.apply_overrides(&args.overrides());
    debug!(?settings, "resolved bench settings");

    let results = bench::run_benchmarks(&settings)?;
    print!("{}", report::render(&results, args.format)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Bench(args) => run_bench(args),
        Commands::Sort { algorithm, values } => {
            println!("{}", commands::sort_values(algorithm, values));
            Ok(())
        }
        Commands::Generate { n, low, high, seed } => {
            println!("{}", commands::generate_values(n, low, high, seed)?);
            Ok(())
        }
        Commands::List => {
            print!("{}", commands::list_algorithms());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.no_color {
        colors::set_enabled(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}", colors::red(&e.format_chain()));
        std::process::exit(1);
    }
}
