use log::debug;
use rand::Rng;

use crate::{ElectionError, Jury, Tally, Votes};

/// The result of holding one election.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Trial {
    votes: Votes,
    correct_count: usize,
    incorrect_count: usize,
    outcome: bool,
    tie_broken: bool,
    accuracy: f64,
}

impl Trial {
    /// Count `votes` and decide the outcome, tossing a coin from `rng` if the
    /// votes are tied.
    pub(crate) fn decide<R: Rng + ?Sized>(votes: Votes, rng: &mut R) -> Trial {
        let tally = Tally::count(&votes);
        let outcome = tally.decide(rng);
        let trial = Trial {
            correct_count: tally.correct,
            incorrect_count: tally.incorrect,
            outcome,
            tie_broken: tally.is_tie(),
            accuracy: tally.accuracy(),
            votes,
        };
        debug_assert!(trial.valid());
        trial
    }

    pub fn votes(&self) -> &Votes {
        &self.votes
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect_count
    }

    pub fn tally(&self) -> Tally {
        Tally { correct: self.correct_count, incorrect: self.incorrect_count }
    }

    /// The decision of the group
    pub fn outcome(&self) -> bool {
        self.outcome
    }

    /// Whether the votes were tied and the outcome came from a coin toss
    pub fn was_tie(&self) -> bool {
        self.tie_broken
    }

    /// Share of electors that voted correctly in this election. This is not
    /// the competence, only what happened this time.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub(crate) fn valid(&self) -> bool {
        self.correct_count + self.incorrect_count == self.votes.len()
            && self.correct_count == self.votes.correct()
            && (0.0..=1.0).contains(&self.accuracy)
            && self.tie_broken == (self.correct_count == self.incorrect_count)
            && (self.tie_broken || self.outcome == (self.correct_count > self.incorrect_count))
    }
}

/// A Condorcet election together with the result of its latest run.
///
/// Creating the model holds the first election, so there is always a result
/// to read. Calling [`ElectionModel::run`] holds a new election and replaces
/// the old result.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElectionModel {
    elector_count: usize,
    competence: f64,
    #[serde(flatten)]
    trial: Trial,
    #[serde(skip)]
    jury: Jury,
}

impl ElectionModel {
    pub fn new<R: Rng + ?Sized>(
        electors: usize,
        competence: f64,
        rng: &mut R,
    ) -> Result<ElectionModel, ElectionError> {
        let jury = Jury::new(electors, competence)?;
        Ok(ElectionModel::from_jury(jury, rng))
    }

    pub fn from_jury<R: Rng + ?Sized>(jury: Jury, rng: &mut R) -> ElectionModel {
        let trial = jury.run(rng);
        log_trial(&jury, &trial);
        ElectionModel {
            elector_count: jury.electors(),
            competence: jury.competence(),
            trial,
            jury,
        }
    }

    /// Hold a new election with fresh randomness, replacing the last result.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.trial = self.jury.run(rng);
        log_trial(&self.jury, &self.trial);
    }

    pub fn jury(&self) -> Jury {
        self.jury
    }

    pub fn elector_count(&self) -> usize {
        self.elector_count
    }

    pub fn competence(&self) -> f64 {
        self.competence
    }

    pub fn trial(&self) -> &Trial {
        &self.trial
    }

    pub fn votes(&self) -> &Votes {
        self.trial.votes()
    }

    pub fn correct_count(&self) -> usize {
        self.trial.correct_count()
    }

    pub fn incorrect_count(&self) -> usize {
        self.trial.incorrect_count()
    }

    pub fn outcome(&self) -> bool {
        self.trial.outcome()
    }

    pub fn accuracy(&self) -> f64 {
        self.trial.accuracy()
    }

    pub fn into_trial(self) -> Trial {
        self.trial
    }
}

fn log_trial(jury: &Jury, trial: &Trial) {
    debug!(
        "election with {} electors at competence {}: {} correct, {} incorrect, outcome {}{}",
        jury.electors(),
        jury.competence(),
        trial.correct_count(),
        trial.incorrect_count(),
        trial.outcome(),
        if trial.was_tie() { " (coin toss)" } else { "" },
    );
}
