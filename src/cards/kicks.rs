use super::frequency::Frequency;
use super::rank::Rank;
use crate::Error;
use std::cmp::Ordering;

/// A hand's tie-break sequence.
///
/// Distinct ranks, most frequent first, and higher rank first among equal
/// frequency. For `4D 4S 4C 2H 2D` that is `[4, 2]`; for `5H 5C 6S 7S KD`
/// it is `[5, K, 7, 6]`. Two hands of the same category are settled by
/// walking their sequences in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position-by-position comparison. The first differing rank decides.
    ///
    /// Sequences of different length cannot be compared meaningfully;
    /// that only happens for hands holding duplicate cards, and it is
    /// reported rather than silently truncated.
    pub fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        if self.len() != other.len() {
            return Err(Error::InternalInvariantViolation(
                "kicker sequences differ in length",
            ));
        }
        Ok(self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal))
    }
}

impl From<Frequency> for Kickers {
    fn from(freq: Frequency) -> Self {
        let mut ranks = freq.iter().collect::<Vec<(Rank, u8)>>();
        ranks.sort_by(|(r1, n1), (r2, n2)| n2.cmp(n1).then_with(|| r2.cmp(r1)));
        Self(ranks.into_iter().map(|(r, _)| r).collect())
    }
}

/// Vec<Rank> isomorphism
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0.iter() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
