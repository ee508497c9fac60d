use super::outcome::Outcome;
use crate::DIAGNOSTIC_THRESHOLD;
use crate::Error;
use crate::HAND_SIZE;
use crate::LINE_SIZE;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;

/// Two hands dealt from one line of ten card tokens.
///
/// Player 1 holds the first five tokens, player 2 the last five.
/// Built fresh per line; nothing outlives a single comparison.
#[derive(Debug, Clone, Copy)]
pub struct Showdown {
    p1: Hand,
    p2: Hand,
}

/// Both strengths and the result, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Verdict {
    pub p1: Strength,
    pub p2: Strength,
    pub outcome: Outcome,
}

impl Showdown {
    pub fn p1(&self) -> &Hand {
        &self.p1
    }
    pub fn p2(&self) -> &Hand {
        &self.p2
    }
    pub fn verdict(&self) -> Result<Verdict, Error> {
        let p1 = self.p1.strength();
        let p2 = self.p2.strength();
        let outcome = Outcome::from(p1.compare(&p2)?);
        if p1.ranking() > DIAGNOSTIC_THRESHOLD && p2.ranking() > DIAGNOSTIC_THRESHOLD {
            log::debug!("{} | {} | {}", p1, p2, outcome);
        }
        Ok(Verdict { p1, p2, outcome })
    }
    pub fn outcome(&self) -> Result<Outcome, Error> {
        self.verdict().map(|v| v.outcome)
    }
}

impl From<(Hand, Hand)> for Showdown {
    fn from((p1, p2): (Hand, Hand)) -> Self {
        Self { p1, p2 }
    }
}

/// str conversion, exactly ten whitespace separated tokens
impl TryFrom<&str> for Showdown {
    type Error = Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let tokens = line.split_whitespace().collect::<Vec<&str>>();
        if tokens.len() != LINE_SIZE {
            return Err(Error::MalformedLine(tokens.len()));
        }
        let p1 = Hand::try_from(&tokens[..HAND_SIZE])?;
        let p2 = Hand::try_from(&tokens[HAND_SIZE..])?;
        Ok(Self::from((p1, p2)))
    }
}

impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}", self.p1, self.p2)
    }
}

/// Whether player 1's hand strictly beats player 2's.
///
/// Each call is independent and pure, so lines may be resolved
/// in any order or in parallel.
pub fn resolve_winner(line: &str) -> Result<bool, Error> {
    Showdown::try_from(line)?
        .outcome()
        .map(|o| o.is_player1())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ranking::Ranking;

    #[test]
    fn higher_pair_wins() {
        assert_eq!(resolve_winner("5H 5C 6S 7S KD 2C 3S 8S 8D TD"), Ok(false));
    }

    #[test]
    fn ace_high_beats_queen_high() {
        assert_eq!(resolve_winner("5D 8C 9S JS AC 2C 5C 7D 8S QH"), Ok(true));
    }

    #[test]
    fn flush_beats_three_aces() {
        let line = "2D 9C AS AH AC 3D 6D 7D TD QD";
        let verdict = Showdown::try_from(line).unwrap().verdict().unwrap();
        assert_eq!(verdict.p1.ranking(), Ranking::ThreeOAK);
        assert_eq!(verdict.p2.ranking(), Ranking::Flush);
        assert_eq!(verdict.outcome, Outcome::Player2);
        assert_eq!(resolve_winner(line), Ok(false));
    }

    #[test]
    fn queens_settled_by_third_kicker() {
        assert_eq!(resolve_winner("4D 6S 9H QH QC 3D 6D 7H QD QS"), Ok(true));
    }

    #[test]
    fn full_house_settled_by_triple() {
        assert_eq!(resolve_winner("2H 2D 4C 4D 4S 3C 3D 3S 9S 9D"), Ok(true));
    }

    #[test]
    fn straight_flush_beats_straight() {
        let line = "2H 3D 4C 5D 6D 2S 3S 4S 5S 6S";
        let verdict = Showdown::try_from(line).unwrap().verdict().unwrap();
        assert_eq!(verdict.p1.ranking(), Ranking::Straight);
        assert_eq!(verdict.p2.ranking(), Ranking::StraightFlush);
        assert_eq!(resolve_winner(line), Ok(false));
    }

    #[test]
    fn tie_is_a_loss_for_player1() {
        let line = "2H 3D 4C 5D 6D 2S 3C 4S 5H 6C";
        assert_eq!(Showdown::try_from(line).unwrap().outcome(), Ok(Outcome::Tie));
        assert_eq!(resolve_winner(line), Ok(false));
    }

    #[test]
    fn royal_flush_beats_everything_below() {
        assert_eq!(resolve_winner("TH JH QH KH AH 9S TS JS QS KS"), Ok(true));
        assert_eq!(resolve_winner("9S TS JS QS KS TH JH QH KH AH"), Ok(false));
    }

    #[test]
    fn wrong_token_count() {
        assert_eq!(resolve_winner("5H 5C 6S 7S KD 2C 3S 8S 8D"), Err(Error::MalformedLine(9)));
        assert_eq!(resolve_winner("5H 5C 6S 7S KD 2C 3S 8S 8D TD 9C"), Err(Error::MalformedLine(11)));
        assert_eq!(resolve_winner(""), Err(Error::MalformedLine(0)));
    }

    #[test]
    fn bad_rank_propagates() {
        assert_eq!(resolve_winner("5H 5C 6S 7S KD 2C 3S 8S 8D 1D"), Err(Error::InvalidRank('1')));
    }

    #[test]
    fn duplicate_cards_can_trip_the_kicker_guard() {
        let line = "AS AS KS QS JS AH KH QH JH 9H";
        assert!(matches!(
            resolve_winner(line),
            Err(Error::InternalInvariantViolation(_))
        ));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(resolve_winner("  5D 8C 9S JS AC\t2C 5C 7D 8S QH\r\n"), Ok(true));
    }
}
