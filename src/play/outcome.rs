use std::cmp::Ordering;

/// Who took the pot in a heads-up comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Player1,
    Player2,
    Tie,
}

impl Outcome {
    /// Only a strict win counts; a tie is a loss for player 1.
    pub fn is_player1(&self) -> bool {
        matches!(self, Outcome::Player1)
    }
}

/// Ordering of player 1 relative to player 2
impl From<Ordering> for Outcome {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Outcome::Player1,
            Ordering::Less => Outcome::Player2,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Player1 => write!(f, "P1"),
            Outcome::Player2 => write!(f, "P2"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}
