//! Least common multiple of a range of integers, by prime factorization.
pub mod factorization;
pub use factorization::*;

use crate::Error;

/// Smallest number divisible by every integer in the range.
///
/// An empty range (or one holding only 1) gives 1. Any 0 in the range
/// makes the result 0. Stops at the first element that pushes the
/// product past u64.
pub fn lcm<I>(range: I) -> Result<u64, Error>
where
    I: IntoIterator<Item = u64>,
{
    let mut joined = Factorization::default();
    let mut value = 1;
    for n in range {
        if n == 0 {
            return Ok(0);
        }
        joined = joined.join(&Factorization::from(n));
        value = joined.product().ok_or(Error::Overflow(n))?;
    }
    log::trace!("factorization of lcm: {:?}", joined);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_through_ten() {
        assert_eq!(lcm(1..=10), Ok(2520));
    }

    #[test]
    fn one_through_twenty() {
        assert_eq!(lcm(1..=20), Ok(232792560));
        assert_eq!(lcm(1..20), Ok(232792560));
    }

    #[test]
    fn degenerate_ranges() {
        assert_eq!(lcm(1..1), Ok(1));
        assert_eq!(lcm(1..=1), Ok(1));
        assert_eq!(lcm(7..=7), Ok(7));
    }

    #[test]
    fn zero_in_range_gives_zero() {
        assert_eq!(lcm(0..=10), Ok(0));
        assert_eq!(lcm(0..=0), Ok(0));
        assert_eq!(lcm([3, 0, 5]), Ok(0));
    }

    #[test]
    fn largest_range_that_fits() {
        assert_eq!(lcm(1..=46), Ok(9419588158802421600));
    }

    #[test]
    fn overflow_is_reported_where_it_happens() {
        assert_eq!(lcm(1..=100), Err(Error::Overflow(47)));
    }

    #[test]
    fn overflow_stops_early_on_huge_ranges() {
        assert_eq!(lcm(1..=1_000_000_000_000), Err(Error::Overflow(47)));
    }
}
