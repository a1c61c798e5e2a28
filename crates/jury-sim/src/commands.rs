use std::{fs, io::Write, path::PathBuf};

use circle_scatter::{Coordinates, Scatter, ScatterConfig};
use condorcet::{
    experiment::{Experiment, ExperimentConfig, Summary},
    theory::majority_probability,
    ElectionModel,
};
use log::info;
use rand::Rng;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScatterMode {
    Polar,
    Cartesian,
}

impl From<ScatterMode> for Coordinates {
    fn from(mode: ScatterMode) -> Self {
        match mode {
            ScatterMode::Polar => Coordinates::Polar,
            ScatterMode::Cartesian => Coordinates::Cartesian,
        }
    }
}

#[derive(Debug, Clone, clap::Parser)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ElectConfig {
    /// Number of electors.
    #[clap(long)]
    pub electors: usize,

    /// Probability that an elector votes correctly.
    #[clap(long)]
    pub competence: f64,

    /// Also scatter the votes inside a disk, in these coordinates.
    #[clap(long, value_enum)]
    pub scatter: Option<ScatterMode>,

    /// Radius of the scatter disk.
    #[clap(long, default_value_t = 1.0)]
    pub radius: f64,
}

#[derive(Debug, Clone, clap::Parser)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ExperimentArgs {
    /// Number of electors. Overrides the config file.
    #[clap(long)]
    pub electors: Option<usize>,

    /// Probability that an elector votes correctly. Overrides the config file.
    #[clap(long)]
    pub competence: Option<f64>,

    /// Number of elections to hold. Overrides the config file.
    #[clap(long)]
    pub trials: Option<usize>,

    /// JSON file with an experiment config. Missing fields take their default.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Parser)]
#[cfg_attr(test, derive(PartialEq))]
pub struct SweepConfig {
    /// Probability that an elector votes correctly.
    #[clap(long)]
    pub competence: f64,

    /// Number of elections to hold for each jury size.
    #[clap(long, default_value_t = 10_000)]
    pub trials: usize,

    /// Comma separated jury sizes.
    #[clap(long, value_delimiter = ',', required = true)]
    pub electors: Vec<usize>,
}

#[derive(serde::Serialize)]
struct ElectionReport<'a> {
    #[serde(flatten)]
    model: &'a ElectionModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    scatter: Option<Scatter>,
}

#[derive(serde::Serialize)]
struct ExperimentReport {
    config: ExperimentConfig,
    summary: Summary,
    majority_accuracy: f64,
    expected_majority_accuracy: f64,
    tie_rate: f64,
    tie_true_fraction: Option<f64>,
    mean_accuracy: f64,
}

pub fn elect<R: Rng, W: Write>(
    config: &ElectConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<(), Error> {
    let model = ElectionModel::new(config.electors, config.competence, rng)?;
    info!(
        "{} of {} electors voted correctly, outcome {}",
        model.correct_count(),
        model.elector_count(),
        model.outcome()
    );
    let scatter = match config.scatter {
        Some(mode) => {
            let scatter_config = ScatterConfig { radius: config.radius, ..ScatterConfig::default() };
            let votes = model.votes().as_slice();
            Some(circle_scatter::scatter(votes, &scatter_config, mode.into(), rng)?)
        }
        None => None,
    };
    serde_json::to_writer_pretty(&mut *out, &ElectionReport { model: &model, scatter })?;
    writeln!(out)?;
    Ok(())
}

pub fn experiment<W: Write>(
    args: &ExperimentArgs,
    seed: Option<u64>,
    out: &mut W,
) -> Result<(), Error> {
    let mut config = match &args.config {
        Some(path) => {
            info!("reading experiment config from {}", path.display());
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => ExperimentConfig::default(),
    };
    if let Some(electors) = args.electors {
        config.electors = electors;
    }
    if let Some(competence) = args.competence {
        config.competence = competence;
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let summary = Experiment::new(&config)?.run();
    let expected = majority_probability(config.electors, config.competence)?;
    info!(
        "majority was right {:.4} of the time, expected {:.4}",
        summary.majority_accuracy(),
        expected
    );
    let report = ExperimentReport {
        majority_accuracy: summary.majority_accuracy(),
        expected_majority_accuracy: expected,
        tie_rate: summary.tie_rate(),
        tie_true_fraction: summary.tie_true_fraction(),
        mean_accuracy: summary.mean_accuracy(),
        summary,
        config,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn sweep<R: Rng, W: Write>(
    config: &SweepConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<(), Error> {
    writeln!(out, "{:>10} {:>10} {:>10} {:>10}", "electors", "majority", "expected", "ties")?;
    for &electors in &config.electors {
        let experiment_config = ExperimentConfig {
            electors,
            competence: config.competence,
            trials: config.trials,
            seed: Some(rng.random()),
        };
        let summary = Experiment::new(&experiment_config)?.run();
        let expected = majority_probability(electors, config.competence)?;
        writeln!(
            out,
            "{:>10} {:>10.4} {:>10.4} {:>10.4}",
            electors,
            summary.majority_accuracy(),
            expected,
            summary.tie_rate()
        )?;
    }
    Ok(())
}
