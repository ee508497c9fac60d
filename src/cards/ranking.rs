/// A poker hand's category.
///
/// This is the coarse half of a hand's value and says nothing about which
/// ranks make up the category. Categories are totally ordered by the
/// discriminant; the kicker cards are used to break ties within one.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ranking {
    #[serde(rename = "highest_card")]
    HighCard = 0,
    OnePair = 1,
    #[serde(rename = "two_pairs")]
    TwoPair = 2,
    #[serde(rename = "three_kind")]
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    #[serde(rename = "four_kind")]
    FourOAK = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Ranking {
    pub const MIN: Self = Ranking::HighCard;
    pub const MAX: Self = Ranking::RoyalFlush;

    /// All categories from weakest to strongest.
    pub const fn all() -> [Ranking; 10] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
            Ranking::RoyalFlush,
        ]
    }
}

/// u8 isomorphism
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}
impl TryFrom<u8> for Ranking {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ranking::all().get(n as usize).copied().ok_or(n)
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Ranking::HighCard => "HighCard",
            Ranking::OnePair => "OnePair",
            Ranking::TwoPair => "TwoPair",
            Ranking::ThreeOAK => "ThreeOfAKind",
            Ranking::Straight => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse => "FullHouse",
            Ranking::FourOAK => "FourOfAKind",
            Ranking::StraightFlush => "StraightFlush",
            Ranking::RoyalFlush => "RoyalFlush",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_increasing() {
        let all = Ranking::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0], Ranking::MIN);
        assert_eq!(all[9], Ranking::MAX);
    }

    #[test]
    fn bijective_u8() {
        for ranking in Ranking::all() {
            assert_eq!(Ok(ranking), Ranking::try_from(u8::from(ranking)));
        }
        assert_eq!(Ranking::try_from(10u8), Err(10));
    }

    #[test]
    fn full_house_over_flush_over_straight() {
        assert!(Ranking::FullHouse > Ranking::Flush);
        assert!(Ranking::Flush > Ranking::Straight);
    }
}
