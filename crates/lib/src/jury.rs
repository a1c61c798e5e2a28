use rand::Rng;

use crate::{
    error::{NOT_A_PROBABILITY, TOO_FEW_ELECTORS},
    election::Trial,
    ElectionError, Votes,
};

/// A group of independent electors who are all equally competent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Jury {
    electors: usize,
    competence: f64,
}

impl Jury {
    /// Returns `Err` unless there are at least two electors and `competence`
    /// lies in `[0, 1]`.
    pub fn new(electors: usize, competence: f64) -> Result<Jury, ElectionError> {
        if electors <= 1 {
            return Err(TOO_FEW_ELECTORS);
        }
        // Also rejects NaN
        if !(0.0..=1.0).contains(&competence) {
            return Err(NOT_A_PROBABILITY);
        }
        Ok(Jury { electors, competence })
    }

    pub fn electors(&self) -> usize {
        self.electors
    }

    /// Probability that a single elector votes correctly
    pub fn competence(&self) -> f64 {
        self.competence
    }

    /// Every elector makes an independent draw `u` in `[0, 1)` and votes
    /// correctly iff `competence >= u`.
    pub fn cast_votes<R: Rng + ?Sized>(&self, rng: &mut R) -> Votes {
        let mut votes = Votes::with_capacity(self.electors);
        for _ in 0..self.electors {
            let draw: f64 = rng.random();
            votes.push(self.competence >= draw);
        }
        debug_assert!(votes.len() == self.electors);
        votes
    }

    /// Hold one election: cast votes, count them and decide the outcome.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Trial {
        let votes = self.cast_votes(rng);
        Trial::decide(votes, rng)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;
    use crate::tests::competence;

    impl Arbitrary for Jury {
        fn arbitrary(g: &mut Gen) -> Self {
            let electors = 2 + usize::arbitrary(g) % g.size().max(1);
            Jury::new(electors, competence(g)).unwrap()
        }
    }

    #[test]
    fn rejects_too_few_electors() {
        assert_eq!(Jury::new(0, 0.5), Err(TOO_FEW_ELECTORS));
        assert_eq!(Jury::new(1, 0.5), Err(TOO_FEW_ELECTORS));
        assert!(Jury::new(2, 0.5).is_ok());
    }

    #[test]
    fn rejects_bad_competence() {
        for c in [-0.1, 1.000001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(Jury::new(10, c), Err(NOT_A_PROBABILITY));
        }
        assert!(Jury::new(10, 0.0).is_ok());
        assert!(Jury::new(10, 1.0).is_ok());
    }

    #[test]
    fn electors_are_checked_first() {
        assert_eq!(Jury::new(1, 2.0), Err(TOO_FEW_ELECTORS));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TOO_FEW_ELECTORS.to_string(),
            "invalid parameter: at least two electors required"
        );
        assert_eq!(
            NOT_A_PROBABILITY.to_string(),
            "invalid parameter: competence must be a probability"
        );
    }

    #[quickcheck]
    fn validity(electors: usize, competence: f64) -> bool {
        let electors = electors % 1000;
        let valid = electors > 1 && (0.0..=1.0).contains(&competence);
        Jury::new(electors, competence).is_ok() == valid
    }

    #[quickcheck]
    fn one_vote_per_elector(jury: Jury, g: u64) -> bool {
        let mut rng = ChaCha12Rng::seed_from_u64(g);
        jury.cast_votes(&mut rng).len() == jury.electors()
    }

    #[test]
    fn certain_electors() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let always = Jury::new(500, 1.0).unwrap().cast_votes(&mut rng);
        assert!(always.iter().all(|v| v));
        let never = Jury::new(500, 0.0).unwrap().cast_votes(&mut rng);
        assert!(never.iter().all(|v| !v));
    }

    #[test]
    fn vote_frequency_follows_competence() {
        let mut rng = ChaCha12Rng::seed_from_u64(2);
        let jury = Jury::new(100_000, 0.3).unwrap();
        let share = jury.cast_votes(&mut rng).correct() as f64 / 100_000.0;
        // Standard deviation is about 0.0015
        assert!((share - 0.3).abs() < 0.01, "share was {}", share);
    }

    #[test]
    fn electors_are_independent() {
        // With independent electors, a vote says nothing about the next one.
        let mut rng = ChaCha12Rng::seed_from_u64(3);
        let votes = Jury::new(200_000, 0.5).unwrap().cast_votes(&mut rng);
        let pairs = votes.as_slice().windows(2).filter(|w| w[0]).count();
        let both = votes.as_slice().windows(2).filter(|w| w[0] && w[1]).count();
        let conditional = both as f64 / pairs as f64;
        assert!((conditional - 0.5).abs() < 0.01, "conditional was {}", conditional);
    }

    #[quickcheck]
    fn same_seed_same_votes(jury: Jury, seed: u64) -> bool {
        let a = jury.cast_votes(&mut ChaCha12Rng::seed_from_u64(seed));
        let b = jury.cast_votes(&mut ChaCha12Rng::seed_from_u64(seed));
        a == b
    }

    #[quickcheck]
    fn run_is_consistent(jury: Jury, seed: u64) -> bool {
        let trial = jury.run(&mut ChaCha12Rng::seed_from_u64(seed));
        trial.votes().len() == jury.electors()
            && trial.correct_count() + trial.incorrect_count() == jury.electors()
    }
}
