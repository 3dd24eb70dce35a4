use crate::time_interval::TimeInterval;
use crate::DivisionError;
use super::{IntervalDivision, Reduction};

/// The simplest possible division: subtract the denominator until it no longer fits.
/// Needs O(quotient) operations, so only usable for small quotients. Mainly serves as a reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatedSubtraction;

impl IntervalDivision for RepeatedSubtraction {
    fn reduce(&self, denominator : &TimeInterval, numerator : &mut TimeInterval) -> Result<Reduction, DivisionError> {
        let mut quotient : i64 = 0;
        let mut operations = 1;
        while *numerator >= *denominator {
            *numerator = (&*numerator - denominator).ok_or(DivisionError::ArithmeticOverflow)?;
            quotient = quotient.checked_add(1).ok_or(DivisionError::ArithmeticOverflow)?;
            operations += 2;
        }
        Ok(Reduction{ quotient, operations })
    }
}

#[cfg(test)]
mod repeated_subtraction_tests {
    use super::*;
    use crate::division::DivisionResult;

    #[test]
    fn small_division() {
        let r = RepeatedSubtraction.divide(&TimeInterval::from_microseconds(17), &TimeInterval::from_microseconds(5));
        assert_eq!(r, Ok(DivisionResult{ quotient : 3, remainder : TimeInterval::from_microseconds(2) }));
    }

    #[test]
    fn operations_are_linear_in_the_quotient() {
        let (result, operations) = RepeatedSubtraction.divide_counting(&TimeInterval::from_microseconds(1000), &TimeInterval::from_microseconds(1)).unwrap();
        assert_eq!(result.quotient, 1000);
        assert_eq!(operations, 2001);
    }
}
