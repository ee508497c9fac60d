use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::Error;
use rand::Rng;
use std::cmp::Ordering;

/// A playing card: a rank and an opaque suit.
///
/// Comparison is by rank alone. Two cards of equal rank and different
/// suit are `Equal` under `Ord` and `==`, since nothing downstream ever
/// breaks a tie on suit. Use [`Card::same`] when identity matters.
///
/// # Parsing
///
/// Cards parse from two-character tokens like `"AS"` (ace of spades)
/// or `"TC"` (ten of clubs): rank symbol first, suit symbol second.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Rank and suit both match.
    pub fn same(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let rank = Rank::all()[rng.random_range(0..13)];
        let suit = Suit::all()[rng.random_range(0..4)];
        Self::from((rank, suit))
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let token = s.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Card::from((Rank::try_from(rank)?, Suit::from(suit)))),
            _ => Err(Error::MalformedCard(token.to_string())),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}
impl Eq for Card {}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rank_then_suit() {
        let card = Card::try_from("TD").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::D);
        assert_eq!(card.to_string(), "TD");
    }

    #[test]
    fn suit_is_not_validated() {
        let card = Card::try_from("Kz").unwrap();
        assert_eq!(card.rank(), Rank::King);
        assert_eq!(card.suit().symbol(), 'z');
    }

    #[test]
    fn rejects_bad_rank() {
        assert_eq!(Card::try_from("1S"), Err(Error::InvalidRank('1')));
        assert_eq!(Card::try_from("XH"), Err(Error::InvalidRank('X')));
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(Card::try_from("A"), Err(Error::MalformedCard("A".into())));
        assert_eq!(Card::try_from("10H"), Err(Error::MalformedCard("10H".into())));
        assert_eq!(Card::try_from(""), Err(Error::MalformedCard("".into())));
    }

    #[test]
    fn ordering_ignores_suit() {
        let spade = Card::try_from("QS").unwrap();
        let heart = Card::try_from("QH").unwrap();
        assert_eq!(spade.cmp(&heart), Ordering::Equal);
        assert_eq!(spade, heart);
        assert!(!spade.same(&heart));
        assert!(Card::try_from("AC").unwrap() > Card::try_from("KC").unwrap());
    }

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        let (rank, suit) = <(Rank, Suit)>::from(card);
        assert!(card.same(&Card::from((rank, suit))));
    }
}
