use crate::Error;

/// Card face value. Aces are always high; there is no wraparound,
/// so A-2-3-4-5 never forms a run.
///
/// The discriminant is the ordinal used for ordering and differences:
/// 2 through 14.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize)]
pub enum Rank {
    #[default]
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const MIN: Self = Rank::Two;
    pub const MAX: Self = Rank::Ace;

    /// All thirteen ranks in ascending order.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Signed distance between two ranks, `self - other`.
    pub fn difference(&self, other: &Self) -> i8 {
        self.ordinal() as i8 - other.ordinal() as i8
    }

    /// position in a 13-slot table, Two at 0
    pub(crate) fn index(&self) -> usize {
        (self.ordinal() - Self::MIN.ordinal()) as usize
    }
}

/// u8 isomorphism over ordinals 2..=14
impl TryFrom<u8> for Rank {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Rank::all()
            .into_iter()
            .find(|r| r.ordinal() == n)
            .ok_or(Error::InvalidOrdinal(n))
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.ordinal()
    }
}

/// u16 injection
///
/// With 13 ranks we only need 13 bits. OR-ing these together
/// gives the set of ranks present in a hand.
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << r.index()
    }
}

/// char isomorphism
impl TryFrom<char> for Rank {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(Error::InvalidRank(c)),
        }
    }
}

/// str isomorphism, single symbol
impl TryFrom<&str> for Rank {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            (Some(c), Some(_)) => Err(Error::InvalidRank(c)),
            (None, _) => Err(Error::InvalidRank(' ')),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_span_two_to_fourteen() {
        assert_eq!(Rank::Two.ordinal(), 2);
        assert_eq!(Rank::Ten.ordinal(), 10);
        assert_eq!(Rank::Ace.ordinal(), 14);
    }

    #[test]
    fn ace_is_strictly_high() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Ace > Rank::Two);
        assert_eq!(Rank::MAX, Rank::Ace);
    }

    #[test]
    fn difference_is_signed() {
        assert_eq!(Rank::Nine.difference(&Rank::Five), 4);
        assert_eq!(Rank::Five.difference(&Rank::Nine), -4);
        assert_eq!(Rank::Queen.difference(&Rank::Queen), 0);
    }

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert_eq!(rank, Rank::try_from(u8::from(rank)).unwrap());
        }
        assert_eq!(Rank::try_from(1u8), Err(Error::InvalidOrdinal(1)));
        assert_eq!(Rank::try_from(15u8), Err(Error::InvalidOrdinal(15)));
        assert_eq!(Error::InvalidOrdinal(1).to_string(), "invalid rank ordinal 1, expected 2..=14");
    }

    #[test]
    fn injective_u16() {
        assert_eq!(u16::from(Rank::Two), 0b0000000000001);
        assert_eq!(u16::from(Rank::Ace), 0b1000000000000);
        let all = Rank::all().map(u16::from).iter().fold(0u16, |a, b| a | b);
        assert_eq!(all.count_ones(), 13);
    }

    #[test]
    fn symbols_round_trip_through_display() {
        for rank in Rank::all() {
            assert_eq!(rank, Rank::try_from(rank.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(Rank::try_from('1'), Err(Error::InvalidRank('1')));
        assert_eq!(Rank::try_from('t'), Err(Error::InvalidRank('t')));
        assert_eq!(Rank::try_from("10"), Err(Error::InvalidRank('1')));
        assert!(Rank::try_from("").is_err());
    }
}
