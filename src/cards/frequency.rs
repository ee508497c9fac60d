use super::card::Card;
use super::rank::Rank;

/// How many cards of each rank a hand holds.
///
/// Every classification rule is a question about this table: the largest
/// count, the multiset of counts, or which ranks are present at all.
/// It is derived from cards on demand and never stored alongside them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Frequency([u8; 13]);

impl Frequency {
    /// Number of cards holding this rank.
    pub fn of(&self, rank: Rank) -> u8 {
        self.0[rank.index()]
    }
    /// Present ranks paired with their counts, ascending by rank.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::all()
            .into_iter()
            .map(move |r| (r, self.of(r)))
            .filter(|&(_, n)| n > 0)
    }
    /// Distinct ranks present, ascending.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.iter().map(|(r, _)| r)
    }
    pub fn distinct(&self) -> usize {
        self.ranks().count()
    }
    pub fn max(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
    /// Multiset of non-zero counts, ascending. A full house is `[2, 3]`.
    pub fn counts(&self) -> Vec<u8> {
        let mut counts = self.iter().map(|(_, n)| n).collect::<Vec<u8>>();
        counts.sort_unstable();
        counts
    }
    pub fn lowest(&self) -> Option<Rank> {
        self.ranks().next()
    }
    pub fn highest(&self) -> Option<Rank> {
        self.ranks().last()
    }
    /// Set of present ranks as a 13-bit mask.
    pub fn mask(&self) -> u16 {
        self.ranks().map(u16::from).fold(0u16, |a, b| a | b)
    }
}

impl From<&[Card]> for Frequency {
    fn from(cards: &[Card]) -> Self {
        let mut table = [0u8; 13];
        for card in cards {
            table[card.rank().index()] += 1;
        }
        Self(table)
    }
}
