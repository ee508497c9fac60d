use super::card::Card;
use super::evaluator::Evaluator;
use super::frequency::Frequency;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;
use crate::Arbitrary;
use crate::Error;
use crate::HAND_SIZE;
use rand::seq::SliceRandom;
use std::cmp::Ordering;

/// Hand represents an unordered set of exactly five Cards.
///
/// The arity lives in the type. Nothing checks that the five cards are
/// distinct: a hand holding the same card twice is classified like any
/// other. Everything else (frequency table, category, kickers) is
/// recomputed from the cards on each call, and the cards never change.
#[derive(Debug, Clone, Copy)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn frequency(&self) -> Frequency {
        Frequency::from(self.cards())
    }
    /// Every card shares one suit.
    pub fn is_suited(&self) -> bool {
        let suit = self.0[0].suit();
        self.0.iter().all(|c| c.suit() == suit)
    }
    pub fn ranking(&self) -> Ranking {
        Evaluator::from(self).find_ranking()
    }
    pub fn kickers(&self) -> Kickers {
        Evaluator::from(self).find_kickers()
    }
    pub fn strength(&self) -> Strength {
        Strength::from(self)
    }
    /// Three-way comparison: category first, then kickers.
    pub fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        self.strength().compare(&other.strength())
    }
}

/// five distinct cards from a shuffled deck
impl Arbitrary for Hand {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let mut deck = Rank::all()
            .into_iter()
            .flat_map(|r| Suit::all().map(|s| Card::from((r, s))))
            .collect::<Vec<Card>>();
        deck.shuffle(rng);
        Self([deck[0], deck[1], deck[2], deck[3], deck[4]])
    }
}

/// [Card; 5] isomorphism
impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}
impl From<Hand> for [Card; HAND_SIZE] {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> conversion, exactly five or nothing
impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let n = cards.len();
        <[Card; HAND_SIZE]>::try_from(cards)
            .map(Self)
            .map_err(|_| Error::CardCount(n))
    }
}

/// token slice conversion
impl TryFrom<&[&str]> for Hand {
    type Error = Error;
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        if tokens.len() != HAND_SIZE {
            return Err(Error::CardCount(tokens.len()));
        }
        tokens
            .iter()
            .map(|t| Card::try_from(*t))
            .collect::<Result<Vec<Card>, _>>()
            .and_then(|cards: Vec<Card>| Self::try_from(cards))
    }
}

/// str conversion, whitespace separated tokens
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.split_whitespace().collect::<Vec<&str>>().as_slice())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<String>>();
        write!(f, "{}", cards.join(" "))
    }
}
