use super::showdown::resolve_winner;
use crate::Error;
use rayon::prelude::*;

/// Player 1's record over a batch of lines.
///
/// Lines are independent, so they are resolved in parallel and summed.
/// Blank lines are not counted at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Tally {
    lines: usize,
    wins: usize,
    losses: usize,
    skipped: usize,
}

impl Tally {
    /// Fails on the first bad line found.
    pub fn strict<S>(lines: &[S]) -> Result<Self, Error>
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_iter()
            .map(|line| line.as_ref())
            .filter(|line| !line.trim().is_empty())
            .map(|line| resolve_winner(line).map(Self::from))
            .try_reduce(Self::default, |a, b| Ok(a + b))
    }

    /// Skips and logs bad lines instead of failing.
    pub fn lenient<S>(lines: &[S]) -> Self
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_iter()
            .enumerate()
            .map(|(i, line)| (i, line.as_ref()))
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| match resolve_winner(line) {
                Ok(win) => Self::from(win),
                Err(e) => {
                    log::warn!("skipping line {}: {}", i + 1, e);
                    Self::skip()
                }
            })
            .reduce(Self::default, |a, b| a + b)
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn skip() -> Self {
        Self {
            lines: 1,
            skipped: 1,
            ..Self::default()
        }
    }
}

/// one resolved line
impl From<bool> for Tally {
    fn from(win: bool) -> Self {
        Self {
            lines: 1,
            wins: win as usize,
            losses: !win as usize,
            skipped: 0,
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            lines: self.lines + rhs.lines,
            wins: self.wins + rhs.wins,
            losses: self.losses + rhs.losses,
            skipped: self.skipped + rhs.skipped,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} lines, player 1 wins {}, loses or ties {}, skipped {}",
            self.lines, self.wins, self.losses, self.skipped
        )
    }
}
