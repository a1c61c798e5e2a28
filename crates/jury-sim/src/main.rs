//! # Jury simulator
//!
//! Hold Condorcet elections from the command line:
//!
//! - `elect` holds a single election and prints every vote, optionally with
//!   the points needed to draw it.
//! - `experiment` holds the same election many times and compares how often
//!   the majority was right with the exact probability.
//! - `sweep` does the same for a list of jury sizes.
//!
//! Results are written to stdout, logs to stderr.

mod commands;
mod error;

use clap::Parser;
use error::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use tracing_subscriber::EnvFilter;

use crate::commands::{ElectConfig, ExperimentArgs, SweepConfig};

#[derive(Debug, Clone, Parser)]
#[cfg_attr(test, derive(PartialEq))]
#[clap(author, version, about)]
pub struct Opt {
    #[clap(subcommand)]
    pub command: Command,

    /// Seed for every random draw. Runs with the same seed give the same
    /// results.
    #[clap(long, global = true, env = "JURY_SEED")]
    pub seed: Option<u64>,

    /// Logging filter, written as `<level>` or `<target>=<level>`.
    ///
    /// `-lcondorcet=debug` logs every election and experiment,
    /// `-lcondorcet=trace` also logs each batch of trials.
    #[clap(long, short, global = true, default_value = "info")]
    pub log: String,
}

#[derive(Debug, Clone, Parser)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Command {
    /// Hold a single election and print it as JSON.
    Elect(ElectConfig),
    /// Hold many elections and summarize how often the majority was right.
    Experiment(ExperimentArgs),
    /// Run an experiment for each of several jury sizes.
    Sweep(SweepConfig),
}

fn main() -> Result<(), Error> {
    let Opt { command, seed, log } = Opt::parse();
    let filter = EnvFilter::from_default_env().add_directive(log.parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut rng = match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_rng(&mut rand::rng()),
    };
    let mut out = std::io::stdout().lock();

    match command {
        Command::Elect(config) => commands::elect(&config, &mut rng, &mut out),
        Command::Experiment(args) => commands::experiment(&args, seed, &mut out),
        Command::Sweep(config) => commands::sweep(&config, &mut rng, &mut out),
    }
    .map_err(|e| {
        log::error!("{e}");
        e
    })
}
