//! A crate used to study the [Condorcet Jury Theorem][cjt]: a group of
//! independent electors, each right with some fixed probability, votes on a
//! single yes/no question and the majority decides.
//!
//! A vote of `true` is a correct vote. Every election draws its randomness
//! from an rng supplied by the caller, so runs can be seeded and reproduced.
//!
//! Example usage:
//! ```
//! use condorcet::ElectionModel;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha12Rng;
//!
//! let mut rng = ChaCha12Rng::seed_from_u64(7);
//! let mut model = ElectionModel::new(101, 0.6, &mut rng).unwrap();
//! assert_eq!(model.votes().len(), 101);
//! assert_eq!(model.correct_count() + model.incorrect_count(), 101);
//!
//! // Run it again with fresh randomness
//! model.run(&mut rng);
//! assert!(0.0 <= model.accuracy() && model.accuracy() <= 1.0);
//! ```
//!
//! [cjt]: https://en.wikipedia.org/wiki/Condorcet%27s_jury_theorem
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod election;
mod error;
pub mod experiment;
mod jury;
mod tally;
pub mod theory;
mod votes;

pub use election::{ElectionModel, Trial};
pub use error::ElectionError;
pub use jury::Jury;
pub use tally::Tally;
pub use votes::Votes;

/// Commonly used types
pub mod prelude {
    pub use super::{
        experiment::{Experiment, ExperimentConfig, Summary},
        ElectionError, ElectionModel, Jury, Trial, Votes,
    };
}

#[cfg(test)]
pub(crate) mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    // `Gen` contains a rng, but it's a private member so this method is used to get
    // a seedable rng generated from `Gen`
    pub fn chacha_rng(g: &mut Gen) -> ChaCha12Rng {
        let mut seed = [0u8; 32];
        for byte in seed.iter_mut() {
            *byte = Arbitrary::arbitrary(g);
        }
        ChaCha12Rng::from_seed(seed)
    }

    /// A competence in `[0, 1]`, with the endpoints showing up now and then
    pub fn competence(g: &mut Gen) -> f64 {
        match u8::arbitrary(g) % 8 {
            0 => 0.0,
            1 => 1.0,
            2 => 0.5,
            _ => (u32::arbitrary(g) as f64) / (u32::MAX as f64),
        }
    }
}
