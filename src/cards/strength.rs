use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::Error;
use std::cmp::Ordering;

/// A hand's strength.
///
/// Always constructed from a Hand. The category decides first and the
/// kicker sequence breaks ties within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kickers
    }
    pub fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        match self.ranking.cmp(&other.ranking) {
            Ordering::Equal => self.kickers.compare(&other.kickers),
            decided => Ok(decided),
        }
    }
}

impl From<&Hand> for Strength {
    fn from(hand: &Hand) -> Self {
        let eval = Evaluator::from(hand);
        Self::from((eval.find_ranking(), eval.find_kickers()))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{}", self.ranking, self.kickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn category_decides_before_kickers() {
        let weak = Strength::from((Ranking::TwoPair, Kickers::from(vec![Rank::Ace, Rank::King, Rank::Queen])));
        let strong = Strength::from((Ranking::ThreeOAK, Kickers::from(vec![Rank::Two, Rank::Four, Rank::Three])));
        assert_eq!(strong.compare(&weak), Ok(Ordering::Greater));
        assert_eq!(weak.compare(&strong), Ok(Ordering::Less));
    }

    #[test]
    fn category_mismatch_skips_length_check() {
        let pair = Strength::from((Ranking::OnePair, Kickers::from(vec![Rank::Ace, Rank::Four, Rank::Three, Rank::Two])));
        let quads = Strength::from((Ranking::FourOAK, Kickers::from(vec![Rank::Two, Rank::Three])));
        assert_eq!(quads.compare(&pair), Ok(Ordering::Greater));
    }

    #[test]
    fn display_pads_category() {
        let hand = Hand::try_from("KC KD 3S 3H AS").unwrap();
        assert_eq!(Strength::from(&hand).to_string(), "TwoPair       K3A");
    }
}
