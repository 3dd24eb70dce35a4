use crate::time_interval::TimeInterval;
use crate::DivisionError;

pub(crate) mod exponential;
pub(crate) mod repeated_subtraction;

/// Quotient and remainder of an interval division.
/// For a non-negative numerator and a positive denominator `numerator == denominator * quotient + remainder` holds,
/// and the remainder lies in `[0, denominator)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionResult {
    pub quotient : i64,
    pub remainder : TimeInterval,
}

/// What a reduction algorithm reports back: the quotient, and how many interval operations
/// (multiplications, comparisons, additions, subtractions) it needed to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    pub quotient : i64,
    pub operations : usize,
}

/// A way to divide one [`TimeInterval`] by another.
///
/// Implementors only provide [`reduce`](IntervalDivision::reduce), which may assume a positive denominator and a
/// non-negative numerator. Operand validation lives in the provided [`divide`](IntervalDivision::divide) method.
pub trait IntervalDivision {
    /// Reduces `numerator` in place to the remainder of the division and returns the quotient.
    fn reduce(&self, denominator : &TimeInterval, numerator : &mut TimeInterval) -> Result<Reduction, DivisionError>;

    /// Divides `numerator` by `denominator`.
    ///
    /// Fails with [`DivisionError::DivisionByZero`] for a zero denominator. If either operand is negative, no division
    /// happens at all: the quotient is 0 and the remainder is the unchanged numerator.
    fn divide(&self, numerator : &TimeInterval, denominator : &TimeInterval) -> Result<DivisionResult, DivisionError> {
        self.divide_counting(numerator, denominator).map(|(result, _)| result)
    }

    /// Like [`divide`](IntervalDivision::divide), but also returns the number of interval operations used.
    fn divide_counting(&self, numerator : &TimeInterval, denominator : &TimeInterval) -> Result<(DivisionResult, usize), DivisionError> {
        if denominator.is_zero() {
            return Err(DivisionError::DivisionByZero);
        }
        if let Some(undivided) = undivided_negative_operands(numerator, denominator) {
            return Ok((undivided, 0));
        }
        let mut remainder = *numerator;
        let Reduction{ quotient, operations } = self.reduce(denominator, &mut remainder)?;
        Ok((DivisionResult{ quotient, remainder }, operations))
    }
}

/// Negative operands are left undivided.
//Whether this should rather be an error is undecided. Keep the policy in here, so that changing it doesn't touch the algorithms.
fn undivided_negative_operands(numerator : &TimeInterval, denominator : &TimeInterval) -> Option<DivisionResult> {
    if numerator.is_negative() || denominator.is_negative() {
        log::debug!("Not dividing {} by {}: negative operand.", numerator, denominator);
        Some(DivisionResult{ quotient : 0, remainder : *numerator })
    } else {
        None
    }
}
