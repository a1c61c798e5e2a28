use thiserror::Error;

/// Rejected election parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ElectionError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

pub(crate) const TOO_FEW_ELECTORS: ElectionError =
    ElectionError::InvalidParameter("at least two electors required");

pub(crate) const NOT_A_PROBABILITY: ElectionError =
    ElectionError::InvalidParameter("competence must be a probability");
