use std::{
    fmt::{self, Display},
    slice,
    str::FromStr,
};

/// The votes cast in a single election, one per elector, in the order they
/// were cast. `true` is a correct vote.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Votes {
    votes: Vec<bool>,
}

impl Votes {
    pub fn new() -> Votes {
        Votes { votes: Vec::new() }
    }

    pub fn with_capacity(electors: usize) -> Votes {
        Votes { votes: Vec::with_capacity(electors) }
    }

    pub fn push(&mut self, vote: bool) {
        self.votes.push(vote);
    }

    /// Number of votes, i.e. the number of electors that voted
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<bool> {
        self.votes.get(i).copied()
    }

    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, bool>> {
        self.votes.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.votes
    }

    /// Number of correct votes
    pub fn correct(&self) -> usize {
        self.votes.iter().filter(|&&v| v).count()
    }

    /// Number of incorrect votes
    pub fn incorrect(&self) -> usize {
        self.len() - self.correct()
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.votes
    }
}

impl From<Vec<bool>> for Votes {
    fn from(votes: Vec<bool>) -> Self {
        Votes { votes }
    }
}

impl FromIterator<bool> for Votes {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Votes { votes: iter.into_iter().collect() }
    }
}

impl AsRef<[bool]> for Votes {
    fn as_ref(&self) -> &[bool] {
        &self.votes
    }
}

impl<'a> IntoIterator for &'a Votes {
    type Item = bool;
    type IntoIter = std::iter::Copied<slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the votes as `1` (correct) and `0` (incorrect), separated by commas.
impl Display for Votes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((last, rest)) = self.votes.split_last() {
            for &v in rest {
                write!(f, "{},", if v { '1' } else { '0' })?;
            }
            write!(f, "{}", if *last { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Votes {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Votes::new());
        }
        s.split(',')
            .map(|v| match v.trim() {
                "1" => Ok(true),
                "0" => Ok(false),
                _ => Err("Invalid vote"),
            })
            .collect()
    }
}
