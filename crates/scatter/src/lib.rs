//! Scatter a list of votes as random points inside a disk, colored by how
//! each elector voted. Used to draw an election; the points carry no meaning
//! beyond their color.
//!
//! Points are uniformly distributed over the disk: the angle is uniform in
//! `[0, 2π)` and the distance from the center is `radius * sqrt(u)` for a
//! uniform `u`.
//!
//! ```
//! use circle_scatter::{scatter_polar, ScatterConfig};
//!
//! let votes = [true, false, true, true];
//! let points = scatter_polar(&votes, &ScatterConfig::default(), &mut rand::rng()).unwrap();
//! assert_eq!(points.len(), 4);
//! assert!(points.iter().all(|p| p.distance <= 1.0));
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

use std::f64::consts::TAU;

use rand::Rng;
use rand_distr::{uniform, Distribution, Uniform};
use thiserror::Error;

pub mod color;
mod point;

pub use color::Color;
pub use point::{CartesianPoint, Point, PolarPoint};

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("radius must be non-negative")]
    InvalidRadius,
    #[error("could not sample points: {0}")]
    Sampling(#[from] uniform::Error),
}

/// Where to draw the disk and how to color the votes
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub center: Point,
    pub radius: f64,
    /// Color of correct votes
    pub color_true: Color,
    /// Color of incorrect votes
    pub color_false: Color,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        ScatterConfig {
            center: Point::ORIGIN,
            radius: 1.0,
            color_true: color::GREEN,
            color_false: color::RED,
        }
    }
}

impl ScatterConfig {
    fn validate(&self) -> Result<(), ScatterError> {
        if self.radius.is_finite() && self.radius >= 0.0 {
            Ok(())
        } else {
            Err(ScatterError::InvalidRadius)
        }
    }

    fn color(&self, vote: bool) -> Color {
        if vote {
            self.color_true
        } else {
            self.color_false
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coordinates {
    Polar,
    #[default]
    Cartesian,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Scatter {
    Polar(Vec<PolarPoint>),
    Cartesian(Vec<CartesianPoint>),
}

impl Scatter {
    pub fn len(&self) -> usize {
        match self {
            Scatter::Polar(points) => points.len(),
            Scatter::Cartesian(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One point per vote, in the same order as `votes`, relative to the center
/// of the disk.
pub fn scatter_polar<R: Rng + ?Sized>(
    votes: &[bool],
    config: &ScatterConfig,
    rng: &mut R,
) -> Result<Vec<PolarPoint>, ScatterError> {
    config.validate()?;
    let angle = Uniform::new(0.0, TAU)?;
    let area = Uniform::<f64>::new(0.0, 1.0)?;
    let points = votes
        .iter()
        .map(|&vote| PolarPoint {
            angle: angle.sample(rng),
            distance: config.radius * area.sample(rng).sqrt(),
            color: config.color(vote),
        })
        .collect();
    Ok(points)
}

/// Same as [`scatter_polar`], but the points are placed around
/// `config.center`.
pub fn scatter_cartesian<R: Rng + ?Sized>(
    votes: &[bool],
    config: &ScatterConfig,
    rng: &mut R,
) -> Result<Vec<CartesianPoint>, ScatterError> {
    let polar = scatter_polar(votes, config, rng)?;
    Ok(polar.iter().map(|p| p.to_cartesian(config.center)).collect())
}

pub fn scatter<R: Rng + ?Sized>(
    votes: &[bool],
    config: &ScatterConfig,
    coordinates: Coordinates,
    rng: &mut R,
) -> Result<Scatter, ScatterError> {
    match coordinates {
        Coordinates::Polar => scatter_polar(votes, config, rng).map(Scatter::Polar),
        Coordinates::Cartesian => scatter_cartesian(votes, config, rng).map(Scatter::Cartesian),
    }
}
