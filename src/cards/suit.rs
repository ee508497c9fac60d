/// Card suit, kept as the raw symbol it was parsed from.
///
/// Suits never order cards. The only question ever asked of a suit is
/// whether it matches another one, which is all flush detection needs,
/// so any single character is accepted.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Suit(char);

impl Suit {
    pub const C: Self = Suit('C');
    pub const D: Self = Suit('D');
    pub const H: Self = Suit('H');
    pub const S: Self = Suit('S');

    /// The four conventional suits.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    pub fn symbol(&self) -> char {
        self.0
    }
}

/// char isomorphism
impl From<char> for Suit {
    fn from(c: char) -> Self {
        Self(c)
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        s.0
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
