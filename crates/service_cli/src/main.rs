//! rngtool - command-line front end for the prng_core engines
//!
//! # Commands
//!
//! - `rngtool list` - Print every generator descriptor
//! - `rngtool draw -g mrg -s 1 -n 5` - Print draws from a seeded generator
//! - `rngtool state -g taus --skip 100 --json` - Dump a generator state
//! - `rngtool check` - Run the reference vectors

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prng_core::GeneratorKind;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::draw::DrawMode;
use config::{build_config, CliOverrides};

const DEFAULT_CONFIG_PATH: &str = "rngtool.toml";

/// Pseudo-random number generator toolkit
#[derive(Parser)]
#[command(name = "rngtool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported generators
    List,

    /// Print draws from a seeded generator
    Draw {
        /// Generator algorithm (ranf, mrg, uni, uni32, taus)
        #[arg(short, long)]
        generator: Option<GeneratorKind>,

        /// Seed
        #[arg(short, long, allow_hyphen_values = true)]
        seed: Option<i64>,

        /// Number of draws
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print doubles in [0, 1) instead of integers
        #[arg(long, conflicts_with = "normal")]
        doubles: bool,

        /// Print standard normal variates
        #[arg(long)]
        normal: bool,
    },

    /// Dump the state of a seeded generator
    State {
        /// Generator algorithm (ranf, mrg, uni, uni32, taus)
        #[arg(short, long)]
        generator: Option<GeneratorKind>,

        /// Seed
        #[arg(short, long, allow_hyphen_values = true)]
        seed: Option<i64>,

        /// Number of draws to discard before dumping
        #[arg(long, default_value = "0")]
        skip: u64,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the reference vectors and report pass/fail
    Check,
}

impl Commands {
    fn overrides(&self, verbose: bool) -> CliOverrides {
        let mut overrides = CliOverrides {
            verbose,
            ..CliOverrides::default()
        };
        match *self {
            Commands::Draw {
                generator,
                seed,
                count,
                ..
            } => {
                overrides.generator = generator;
                overrides.seed = seed;
                overrides.count = count;
            }
            Commands::State {
                generator, seed, ..
            } => {
                overrides.generator = generator;
                overrides.seed = seed;
            }
            Commands::List | Commands::Check => {}
        }
        overrides
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = build_config(
        &config_path,
        cli.config.is_some(),
        &cli.command.overrides(cli.verbose),
    )?;

    // Initialise tracing; RUST_LOG wins unless --verbose was given
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if !cli.verbose => filter,
        _ => EnvFilter::new(config.log_level.as_filter_str()),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?config, "Resolved configuration");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::List => commands::list::run(&mut stdout),
        Commands::Draw {
            doubles, normal, ..
        } => {
            let mode = DrawMode::from_flags(doubles, normal);
            commands::draw::run(&config, mode, &mut stdout)
        }
        Commands::State { skip, json, .. } => {
            commands::state::run(&config, skip, json, &mut stdout)
        }
        Commands::Check => {
            let result = commands::check::run(&mut stdout);
            if result.is_ok() {
                info!("All reference vectors passed");
            }
            result
        }
    }
}
