//! Hold the same election many times to estimate how often the majority is
//! right.
//!
//! Trials are split into batches of [`BATCH_SIZE`] and every batch gets its
//! own generator, seeded from a master generator. Batches run in parallel, but
//! since the split doesn't depend on the number of threads, a seeded
//! experiment always gives the same [`Summary`].
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rayon::prelude::*;

use crate::{ElectionError, Jury, Trial};

/// Number of trials run on a single generator
pub const BATCH_SIZE: usize = 1024;

/// Parameters of an experiment
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Electors in every election
    pub electors: usize,

    /// Probability that an elector votes correctly
    pub competence: f64,

    /// How many elections to hold
    pub trials: usize,

    /// Seed for the master generator. Without one, the experiment is seeded
    /// from the thread rng.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig { electors: 101, competence: 0.6, trials: 10_000, seed: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experiment {
    jury: Jury,
    trials: usize,
    seed: Option<u64>,
}

impl Experiment {
    pub fn new(config: &ExperimentConfig) -> Result<Experiment, ElectionError> {
        let jury = Jury::new(config.electors, config.competence)?;
        Ok(Experiment { jury, trials: config.trials, seed: config.seed })
    }

    pub fn jury(&self) -> Jury {
        self.jury
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run all trials, in parallel.
    pub fn run(&self) -> Summary {
        let mut master = match self.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_rng(&mut rand::rng()),
        };
        // Seeds are drawn up front, so each batch gets the same seed no matter
        // which thread runs it.
        let batches: Vec<(usize, u64)> = (0..self.trials)
            .step_by(BATCH_SIZE)
            .map(|start| ((self.trials - start).min(BATCH_SIZE), master.random()))
            .collect();
        debug!(
            "running {} trials of {} electors at competence {} in {} batches",
            self.trials,
            self.jury.electors(),
            self.jury.competence(),
            batches.len()
        );
        let summary = batches
            .into_par_iter()
            .map(|(trials, seed)| {
                trace!("batch of {} trials with seed {}", trials, seed);
                let mut rng = ChaCha12Rng::seed_from_u64(seed);
                self.run_trials(trials, &mut rng)
            })
            .reduce(|| Summary::new(self.jury.electors()), Summary::merge);
        debug_assert!(summary.trials == self.trials);
        debug!("majority was right in {} of {} trials", summary.correct_outcomes, summary.trials);
        summary
    }

    /// Run all trials on a single thread using `rng`.
    pub fn run_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Summary {
        self.run_trials(self.trials, rng)
    }

    fn run_trials<R: Rng + ?Sized>(&self, trials: usize, rng: &mut R) -> Summary {
        let mut summary = Summary::new(self.jury.electors());
        for _ in 0..trials {
            summary.add(&self.jury.run(rng));
        }
        summary
    }
}

/// Counts collected over many elections of the same jury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Summary {
    pub electors: usize,
    pub trials: usize,
    /// Trials where the outcome was `true`
    pub correct_outcomes: usize,
    /// Trials that were decided by a coin toss
    pub ties: usize,
    /// Trials decided by a coin toss that came out `true`
    pub ties_decided_true: usize,
    /// Correct votes summed over all trials
    pub correct_votes: u64,
}

impl Summary {
    pub fn new(electors: usize) -> Summary {
        Summary {
            electors,
            trials: 0,
            correct_outcomes: 0,
            ties: 0,
            ties_decided_true: 0,
            correct_votes: 0,
        }
    }

    pub fn add(&mut self, trial: &Trial) {
        debug_assert!(trial.votes().len() == self.electors);
        self.trials += 1;
        self.correct_votes += trial.correct_count() as u64;
        if trial.outcome() {
            self.correct_outcomes += 1;
        }
        if trial.was_tie() {
            self.ties += 1;
            if trial.outcome() {
                self.ties_decided_true += 1;
            }
        }
    }

    /// Combine the counts of two summaries of the same jury
    pub fn merge(self, other: Summary) -> Summary {
        debug_assert!(self.electors == other.electors);
        Summary {
            electors: self.electors,
            trials: self.trials + other.trials,
            correct_outcomes: self.correct_outcomes + other.correct_outcomes,
            ties: self.ties + other.ties,
            ties_decided_true: self.ties_decided_true + other.ties_decided_true,
            correct_votes: self.correct_votes + other.correct_votes,
        }
    }

    /// Share of trials where the majority was right
    pub fn majority_accuracy(&self) -> f64 {
        ratio(self.correct_outcomes as f64, self.trials as f64)
    }

    /// Share of trials that were tied
    pub fn tie_rate(&self) -> f64 {
        ratio(self.ties as f64, self.trials as f64)
    }

    /// Share of tied trials that were decided `true`, if there were any ties
    pub fn tie_true_fraction(&self) -> Option<f64> {
        if self.ties == 0 {
            None
        } else {
            Some(self.ties_decided_true as f64 / self.ties as f64)
        }
    }

    /// Share of all votes that were correct, i.e. the average accuracy of a
    /// trial
    pub fn mean_accuracy(&self) -> f64 {
        ratio(self.correct_votes as f64, self.trials as f64 * self.electors as f64)
    }
}

fn ratio(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::majority_probability;

    fn config(electors: usize, competence: f64, trials: usize, seed: u64) -> ExperimentConfig {
        ExperimentConfig { electors, competence, trials, seed: Some(seed) }
    }

    #[test]
    fn invalid_config() {
        assert!(Experiment::new(&config(1, 0.5, 10, 0)).is_err());
        assert!(Experiment::new(&config(3, 1.5, 10, 0)).is_err());
    }

    #[test]
    fn no_trials() {
        let summary = Experiment::new(&config(3, 0.5, 0, 0)).unwrap().run();
        assert_eq!(summary, Summary::new(3));
        assert_eq!(summary.majority_accuracy(), 0.0);
        assert_eq!(summary.mean_accuracy(), 0.0);
        assert_eq!(summary.tie_true_fraction(), None);
    }

    #[test]
    fn counts_every_trial() {
        // Not a multiple of BATCH_SIZE
        let summary = Experiment::new(&config(9, 0.5, 2 * BATCH_SIZE + 17, 1)).unwrap().run();
        assert_eq!(summary.trials, 2 * BATCH_SIZE + 17);
        assert_eq!(summary.ties, 0);
    }

    #[test]
    fn seeded_is_reproducible() {
        let experiment = Experiment::new(&config(20, 0.55, 5000, 42)).unwrap();
        assert_eq!(experiment.run(), experiment.run());
    }

    #[test]
    fn different_seeds_differ() {
        let a = Experiment::new(&config(20, 0.55, 5000, 1)).unwrap().run();
        let b = Experiment::new(&config(20, 0.55, 5000, 2)).unwrap().run();
        assert_ne!(a, b);
    }

    #[test]
    fn certain_juries() {
        let right = Experiment::new(&config(4, 1.0, 3000, 3)).unwrap().run();
        assert_eq!(right.correct_outcomes, 3000);
        assert_eq!(right.mean_accuracy(), 1.0);
        let wrong = Experiment::new(&config(4, 0.0, 3000, 3)).unwrap().run();
        assert_eq!(wrong.correct_outcomes, 0);
        assert_eq!(wrong.mean_accuracy(), 0.0);
    }

    #[test]
    fn tie_fairness() {
        let summary = Experiment::new(&config(4, 0.5, 40_000, 4)).unwrap().run();
        // P(tie) = 6/16
        assert!((summary.tie_rate() - 0.375).abs() < 0.02, "tie rate {}", summary.tie_rate());
        let share = summary.tie_true_fraction().unwrap();
        let sd = (0.25 / summary.ties as f64).sqrt();
        assert!((share - 0.5).abs() < 4.0 * sd, "share was {}", share);
    }

    #[test]
    fn jury_theorem() {
        let better = Experiment::new(&config(101, 0.6, 10_000, 5)).unwrap().run();
        assert!(better.majority_accuracy() > 0.6);
        let worse = Experiment::new(&config(101, 0.4, 10_000, 6)).unwrap().run();
        assert!(worse.majority_accuracy() < 0.4);
    }

    #[test]
    fn close_to_theory() {
        for (electors, competence) in [(11, 0.55), (10, 0.5), (30, 0.45), (101, 0.52)] {
            let summary =
                Experiment::new(&config(electors, competence, 20_000, 7)).unwrap().run();
            let p = majority_probability(electors, competence).unwrap();
            let sd = (p * (1.0 - p) / 20_000.0).sqrt();
            let observed = summary.majority_accuracy();
            assert!(
                (observed - p).abs() < 5.0 * sd,
                "{} electors at {}: {} vs {}",
                electors,
                competence,
                observed,
                p
            );
        }
    }

    #[test]
    fn mean_accuracy_is_competence() {
        let summary = Experiment::new(&config(50, 0.7, 5000, 8)).unwrap().run();
        assert!((summary.mean_accuracy() - 0.7).abs() < 0.005);
    }

    #[test]
    fn sequential_matches_counts() {
        let experiment = Experiment::new(&config(6, 0.5, 3000, 9)).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(9);
        let summary = experiment.run_with(&mut rng);
        assert_eq!(summary.trials, 3000);
        assert!(summary.ties > 0);
        assert!(summary.ties_decided_true <= summary.ties);
        assert!(summary.correct_outcomes <= summary.trials);
    }

    #[test]
    fn merge_adds() {
        let mut a = Summary::new(5);
        a.trials = 3;
        a.correct_outcomes = 2;
        a.correct_votes = 9;
        let mut b = Summary::new(5);
        b.trials = 1;
        b.ties = 1;
        let c = a.merge(b);
        assert_eq!(c.trials, 4);
        assert_eq!(c.correct_outcomes, 2);
        assert_eq!(c.ties, 1);
        assert_eq!(c.mean_accuracy(), 9.0 / 20.0);
    }
}
