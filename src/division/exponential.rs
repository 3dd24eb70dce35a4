//! Long division of intervals in an arbitrary base.
//!
//! Instead of subtracting the denominator once per unit of the quotient, the denominator is first scaled up by powers
//! of the factor until it no longer fits into the numerator. Then the quotient is extracted one base-factor digit at a
//! time, starting at the most significant one. This needs O(factor * log_factor(quotient)) interval operations, which
//! matters once quotients get into the hundreds of millions.

use crate::time_interval::TimeInterval;
use crate::DivisionError;
use super::{IntervalDivision, Reduction};

/// Base of the exponential search if nothing else is configured.
pub const DEFAULT_FACTOR : i64 = 2;

/// Divides intervals by exponential long division. See the module documentation.
///
/// The factor trades the number of search steps (fewer for larger factors) against the number of subtractions per
/// digit (up to `factor - 1`). A factor of 1 or less cannot make progress, and yields a quotient of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialDivider {
    factor : i64,
}

impl ExponentialDivider {
    pub const fn new(factor : i64) -> Self {
        ExponentialDivider { factor }
    }

    pub const fn factor(&self) -> i64 {
        self.factor
    }
}

impl Default for ExponentialDivider {
    fn default() -> Self {
        ExponentialDivider::new(DEFAULT_FACTOR)
    }
}

impl IntervalDivision for ExponentialDivider {
    fn reduce(&self, denominator : &TimeInterval, numerator : &mut TimeInterval) -> Result<Reduction, DivisionError> {
        let reduction = reduce_by_factor(self.factor, denominator, numerator)?;
        log::trace!("Reduced by factor {}: quotient {}, remainder {}, {} operations.",
            self.factor, reduction.quotient, numerator, reduction.operations);
        Ok(reduction)
    }
}

/// Replaces numerator with the remainder of the division, and returns the quotient.
fn reduce_by_factor(factor : i64, denominator : &TimeInterval, numerator : &mut TimeInterval) -> Result<Reduction, DivisionError> {
    let mut operations = 1;
    if factor <= 1 || *numerator < *denominator {
        return Ok(Reduction{ quotient : 0, operations });
    }

    let (mut delta, search_operations) = find_highest_fitting_power(factor, denominator, numerator);
    operations += search_operations;

    //digit extraction. Each digit is at most factor - 1, so the inner loop is short.
    let mut quotient : i64 = 0;
    while delta >= 1 {
        let step = (denominator * delta).ok_or(DivisionError::ArithmeticOverflow)?;
        operations += 2;
        while *numerator >= step {
            *numerator = (&*numerator - &step).ok_or(DivisionError::ArithmeticOverflow)?;
            quotient = quotient.checked_add(delta).ok_or(DivisionError::ArithmeticOverflow)?;
            operations += 2;
        }
        delta /= factor;
    }
    Ok(Reduction{ quotient, operations })
}

/// Largest power of factor, that, multiplied with denominator, still fits into numerator.
/// Requires numerator >= denominator, so the result is at least 1.
/// Returns the power and the number of operations needed to find it.
fn find_highest_fitting_power(factor : i64, denominator : &TimeInterval, numerator : &TimeInterval) -> (i64, usize) {
    let mut delta : i64 = 1;
    let mut operations = 0;
    //An overflowing multiplication is larger than any numerator, so it simply doesn't fit.
    while let Some(candidate) = delta.checked_mul(factor) {
        operations += 2;
        match denominator * candidate {
            Some(total) if total <= *numerator => delta = candidate,
            _ => break,
        }
    }
    (delta, operations)
}

#[cfg(test)]
mod exponential_tests {
    use super::*;
    use crate::division::DivisionResult;
    use rand::Rng;
    use rand_xoshiro::rand_core::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    fn us(microseconds : i64) -> TimeInterval {
        TimeInterval::from_microseconds(microseconds)
    }

    #[test]
    fn fifteen_by_three() {
        let mut n = us(15);
        let r = reduce_by_factor(2, &us(3), &mut n).unwrap();
        assert_eq!(r.quotient, 5);
        assert_eq!(n, TimeInterval::ZERO);
    }

    #[test]
    fn highest_fitting_power() {
        assert_eq!(find_highest_fitting_power(2, &us(3), &us(15)).0, 4);
        assert_eq!(find_highest_fitting_power(2, &us(3), &us(3)).0, 1);
        assert_eq!(find_highest_fitting_power(10, &us(3), &us(3000)).0, 1000);
        assert_eq!(find_highest_fitting_power(10, &us(3), &us(2999)).0, 100);
    }

    #[test]
    fn highest_fitting_power_near_overflow() {
        //denominator * factor^k overflows before it exceeds the numerator.
        assert_eq!(find_highest_fitting_power(2, &us(1), &us(i64::MAX)).0, 1 << 62);
        assert_eq!(find_highest_fitting_power(3, &us(i64::MAX / 2), &us(i64::MAX)).0, 1);
    }

    #[test]
    fn factor_below_two_does_nothing() {
        for factor in &[1, 0, -1, i64::MIN] {
            let mut n = us(100);
            let r = reduce_by_factor(*factor, &us(7), &mut n).unwrap();
            assert_eq!(r.quotient, 0);
            assert_eq!(n, us(100));
        }
    }

    #[test]
    fn numerator_smaller_than_denominator() {
        let mut n = us(6);
        assert_eq!(reduce_by_factor(2, &us(7), &mut n).unwrap().quotient, 0);
        assert_eq!(n, us(6));
    }

    #[test]
    fn zero_numerator() {
        let d = ExponentialDivider::default();
        assert_eq!(d.divide(&TimeInterval::ZERO, &us(7)), Ok(DivisionResult{ quotient : 0, remainder : TimeInterval::ZERO }));
    }

    #[test]
    fn largest_numerator() {
        let d = ExponentialDivider::new(7);
        assert_eq!(d.divide(&us(i64::MAX), &us(1)), Ok(DivisionResult{ quotient : i64::MAX, remainder : TimeInterval::ZERO }));
        assert_eq!(d.divide(&us(i64::MAX), &us(2)), Ok(DivisionResult{ quotient : i64::MAX / 2, remainder : us(1) }));
    }

    #[test]
    fn default_factor() {
        assert_eq!(ExponentialDivider::default().factor(), DEFAULT_FACTOR);
    }

    #[test]
    fn operations_grow_logarithmically() {
        let numerator = TimeInterval::new(500, 0, 0).unwrap();
        let denominator = us(200_000);
        for factor in 2..=16 {
            let (result, operations) = ExponentialDivider::new(factor).divide_counting(&numerator, &denominator).unwrap();
            assert_eq!(result.quotient, 216_000_000);
            //~28 binary digits, each costing at most factor - 1 subtractions plus the search.
            assert!(operations < 4 * 30 * factor as usize, "factor {} took {} operations", factor, operations);
        }
    }

    #[test]
    fn many_random_divisions_against_integer_division() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0);
        for _i in 0..100000 {
            let factor = rng.gen_range(2..=16);
            let n = rng.gen_range(0..=i64::MAX);
            //mix small and large denominators, otherwise nearly all quotients are tiny.
            let d = if rng.gen() { rng.gen_range(1..=1_000_000) } else { rng.gen_range(1..=i64::MAX) };
            let mut remainder = us(n);
            let r = reduce_by_factor(factor, &us(d), &mut remainder).unwrap();
            assert_eq!(r.quotient, n / d, "{} / {} in base {}", n, d, factor);
            assert_eq!(remainder, us(n % d), "{} % {} in base {}", n, d, factor);
        }
    }
}
