use std::collections::BTreeMap;

/// Prime factorization of a positive integer, prime to exponent.
///
/// One has the empty factorization.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Factorization(BTreeMap<u64, u32>);

impl Factorization {
    pub fn exponent(&self, prime: u64) -> u32 {
        self.0.get(&prime).copied().unwrap_or(0)
    }
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.0.iter().map(|(&p, &e)| (p, e))
    }
    /// Keep the larger exponent of every prime in either factorization.
    pub fn join(mut self, other: &Self) -> Self {
        for (prime, exp) in other.iter() {
            let mine = self.0.entry(prime).or_insert(0);
            *mine = (*mine).max(exp);
        }
        self
    }
    /// Product of the factors, or None past u64.
    pub fn product(&self) -> Option<u64> {
        self.iter()
            .try_fold(1u64, |acc, (p, e)| p.checked_pow(e).and_then(|f| acc.checked_mul(f)))
    }
}

/// trial division
impl From<u64> for Factorization {
    fn from(mut n: u64) -> Self {
        let mut factors = BTreeMap::new();
        let mut d = 2u64;
        while d.saturating_mul(d) <= n {
            if n % d == 0 {
                n /= d;
                *factors.entry(d).or_insert(0) += 1;
            } else {
                d += 1;
            }
        }
        if n > 1 {
            *factors.entry(n).or_insert(0) += 1;
        }
        Self(factors)
    }
}
