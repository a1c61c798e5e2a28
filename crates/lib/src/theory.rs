//! Exact probabilities for the Condorcet Jury Theorem.
//!
//! The number of correct votes in an election is binomially distributed, so
//! the chance of a correct outcome can be summed directly instead of
//! estimated. Sums are done in log space to stay finite for large juries.
use crate::{ElectionError, Jury};

/// Probability that an election of `electors` electors with the given
/// `competence` has the outcome `true`, counting a tie as half a win.
pub fn majority_probability(electors: usize, competence: f64) -> Result<f64, ElectionError> {
    let jury = Jury::new(electors, competence)?;
    let n = jury.electors();
    if competence == 0.0 {
        return Ok(0.0);
    } else if competence == 1.0 {
        return Ok(1.0);
    }

    let ln_p = competence.ln();
    let ln_q = (1.0 - competence).ln();
    let half = n / 2;
    let mut ln_choose_k = ln_choose(n, half);
    let mut sum = 0.0;
    for k in half..=n {
        let pmf = (ln_choose_k + k as f64 * ln_p + (n - k) as f64 * ln_q).exp();
        if 2 * k == n {
            sum += 0.5 * pmf;
        } else if 2 * k > n {
            sum += pmf;
        }
        if k < n {
            ln_choose_k += ((n - k) as f64).ln() - ((k + 1) as f64).ln();
        }
    }
    Ok(sum.clamp(0.0, 1.0))
}

/// Probability of exactly `k` successes in `n` independent trials which each
/// succeed with probability `p`.
pub fn binomial_pmf(n: usize, k: usize, p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p));
    if k > n {
        0.0
    } else if p == 0.0 {
        if k == 0 { 1.0 } else { 0.0 }
    } else if p == 1.0 {
        if k == n { 1.0 } else { 0.0 }
    } else {
        (ln_choose(n, k) + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln()).exp()
    }
}

// ln(n choose k)
fn ln_choose(n: usize, k: usize) -> f64 {
    debug_assert!(k <= n);
    let k = k.min(n - k);
    (0..k).map(|i| ((n - i) as f64).ln() - ((i + 1) as f64).ln()).sum()
}
