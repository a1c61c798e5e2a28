use rand::Rng;

use crate::Votes;

/// Number of correct and incorrect votes in an election.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Tally {
    pub correct: usize,
    pub incorrect: usize,
}

impl Tally {
    pub fn count(votes: &Votes) -> Tally {
        let correct = votes.correct();
        Tally { correct, incorrect: votes.len() - correct }
    }

    pub fn electors(&self) -> usize {
        self.correct + self.incorrect
    }

    pub fn is_tie(&self) -> bool {
        self.correct == self.incorrect
    }

    /// The strict majority, or `None` if the votes are tied.
    pub fn majority(&self) -> Option<bool> {
        if self.is_tie() {
            None
        } else {
            Some(self.correct > self.incorrect)
        }
    }

    /// The majority, with ties decided by a fair coin toss. The toss is a
    /// fresh draw `u` in `[0, 1)` deciding `true` iff `u >= 0.5`.
    pub fn decide<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        match self.majority() {
            Some(m) => m,
            None => coin_toss(rng),
        }
    }

    /// Share of correct votes. An empty tally has no accuracy and gives 0.0.
    pub fn accuracy(&self) -> f64 {
        let electors = self.electors();
        if electors == 0 {
            0.0
        } else {
            self.correct as f64 / electors as f64
        }
    }
}

fn coin_toss<R: Rng + ?Sized>(rng: &mut R) -> bool {
    let draw: f64 = rng.random();
    draw >= 0.5
}
