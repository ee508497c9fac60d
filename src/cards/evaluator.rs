use super::frequency::Frequency;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// T J Q K A
const BROADWAY: u16 = 0b_1111100000000;

type Test = fn(&Evaluator) -> bool;

/// Category tests, strongest first. The first one that holds wins.
///
/// These are not mutually exclusive on their own: `is_one_pair` only asks
/// for a maximum count of two and `is_flush` ignores ranks entirely. The
/// order of this table is what makes the classification correct.
const CHAIN: [(Ranking, Test); 9] = [
    (Ranking::RoyalFlush, Evaluator::is_royal_flush),
    (Ranking::StraightFlush, Evaluator::is_straight_flush),
    (Ranking::FourOAK, Evaluator::is_four_oak),
    (Ranking::FullHouse, Evaluator::is_full_house),
    (Ranking::Flush, Evaluator::is_flush),
    (Ranking::Straight, Evaluator::is_straight),
    (Ranking::ThreeOAK, Evaluator::is_three_oak),
    (Ranking::TwoPair, Evaluator::is_two_pair),
    (Ranking::OnePair, Evaluator::is_one_pair),
];

/// Classifies a five-card hand.
///
/// Holds the hand's rank frequency table and whether every card shares
/// a suit; each test reads only those two facts.
pub struct Evaluator {
    freq: Frequency,
    suited: bool,
}

impl From<&Hand> for Evaluator {
    fn from(hand: &Hand) -> Self {
        Self {
            freq: hand.frequency(),
            suited: hand.is_suited(),
        }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        CHAIN
            .iter()
            .find(|(_, test)| test(self))
            .map(|(ranking, _)| *ranking)
            .unwrap_or(Ranking::HighCard)
    }
    pub fn find_kickers(&self) -> Kickers {
        Kickers::from(self.freq)
    }

    fn is_royal_flush(&self) -> bool {
        self.suited && self.freq.mask() == BROADWAY
    }
    fn is_straight_flush(&self) -> bool {
        self.suited && self.is_straight()
    }
    fn is_four_oak(&self) -> bool {
        self.freq.max() == 4
    }
    fn is_full_house(&self) -> bool {
        self.freq.counts() == [2, 3]
    }
    fn is_flush(&self) -> bool {
        self.suited
    }
    /// five distinct ranks spanning exactly five values, aces high only
    fn is_straight(&self) -> bool {
        self.freq.max() == 1
            && self
                .span()
                .map(|(lo, hi)| hi.difference(&lo) == 4)
                .unwrap_or(false)
    }
    fn is_three_oak(&self) -> bool {
        self.freq.max() == 3
    }
    fn is_two_pair(&self) -> bool {
        self.freq.counts() == [1, 2, 2]
    }
    fn is_one_pair(&self) -> bool {
        self.freq.max() == 2
    }

    fn span(&self) -> Option<(Rank, Rank)> {
        self.freq.lowest().zip(self.freq.highest())
    }
}
