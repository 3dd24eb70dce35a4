//! Fixed-point time intervals with microsecond resolution.
//! Internally a single i64 count of microseconds. The day/second/microsecond banding only exists for
//! construction and display.

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, Mul, Sub};

mod duration_conversion;

pub(crate) const MICROSECONDS_PER_SECOND : i64 = 1_000_000;
pub(crate) const SECONDS_PER_DAY : i64 = 24 * 60 * 60;
pub(crate) const MICROSECONDS_PER_DAY : i64 = SECONDS_PER_DAY * MICROSECONDS_PER_SECOND;

/// The bands a [`TimeInterval`] is displayed in, from coarse to fine.
#[cfg_attr(any(test, feature = "strum"), derive(strum_macros::EnumIter, strum_macros::Display))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Seconds,
    Microseconds,
}

impl TimeUnit {
    /// How many microseconds one of this unit is worth.
    pub const fn microseconds_per_unit(self) -> i64 {
        match self {
            TimeUnit::Days => MICROSECONDS_PER_DAY,
            TimeUnit::Seconds => MICROSECONDS_PER_SECOND,
            TimeUnit::Microseconds => 1,
        }
    }

    /// Modulus of the normalized band. Days are unbounded.
    const fn band_modulus(self) -> Option<i64> {
        match self {
            TimeUnit::Days => None,
            TimeUnit::Seconds => Some(SECONDS_PER_DAY),
            TimeUnit::Microseconds => Some(MICROSECONDS_PER_SECOND),
        }
    }
}

/// A duration with microsecond resolution.
///
/// Two intervals are equal if and only if their total microsecond counts are equal, and they are ordered by that same total.
/// All arithmetic is exact and checked: instead of wrapping on overflow, the operations return `None`.
/// The operators are implemented on references and return `Option<TimeInterval>` for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeInterval(i64);

impl TimeInterval {
    pub const ZERO : TimeInterval = TimeInterval(0);

    /// Builds an interval from a (days, seconds, microseconds) triple.
    /// The components don't need to be normalized, and may be negative. They are simply summed up.
    pub fn new(days : i64, seconds : i64, microseconds : i64) -> Result<Self, IntervalOverflow> {
        let days = days.checked_mul(MICROSECONDS_PER_DAY);
        let seconds = seconds.checked_mul(MICROSECONDS_PER_SECOND);
        days.zip(seconds)
            .and_then(|(d, s)| d.checked_add(s))
            .and_then(|ds| ds.checked_add(microseconds))
            .map(TimeInterval)
            .ok_or(IntervalOverflow)
    }

    pub const fn from_microseconds(microseconds : i64) -> Self {
        TimeInterval(microseconds)
    }

    pub fn from_units(count : i64, unit : TimeUnit) -> Result<Self, IntervalOverflow> {
        count.checked_mul(unit.microseconds_per_unit()).map(TimeInterval).ok_or(IntervalOverflow)
    }

    pub const fn as_microseconds(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Normalized value of one band of the magnitude of this interval.
    /// Seconds are in `[0, 86400)`, microseconds in `[0, 1000000)`. Days carry the rest.
    pub fn component(self, unit : TimeUnit) -> u64 {
        //unsigned, so that i64::MIN has a magnitude as well.
        let magnitude = self.0.unsigned_abs();
        let scaled = magnitude / (unit.microseconds_per_unit() as u64);
        match unit.band_modulus() {
            Some(modulus) => scaled % (modulus as u64),
            None => scaled,
        }
    }

    pub fn days(self) -> u64 {
        self.component(TimeUnit::Days)
    }

    pub fn seconds(self) -> u64 {
        self.component(TimeUnit::Seconds)
    }

    pub fn microseconds(self) -> u64 {
        self.component(TimeUnit::Microseconds)
    }

    pub fn checked_add(self, rhs : TimeInterval) -> Option<TimeInterval> {
        self.0.checked_add(rhs.0).map(TimeInterval)
    }

    /// Subtracting a larger interval yields a negative one.
    pub fn checked_sub(self, rhs : TimeInterval) -> Option<TimeInterval> {
        self.0.checked_sub(rhs.0).map(TimeInterval)
    }

    pub fn checked_mul(self, factor : i64) -> Option<TimeInterval> {
        self.0.checked_mul(factor).map(TimeInterval)
    }
}

impl Add<&TimeInterval> for &TimeInterval {
    type Output = Option<TimeInterval>;
    fn add(self, rhs : &TimeInterval) -> Self::Output {
        self.checked_add(*rhs)
    }
}

impl Sub<&TimeInterval> for &TimeInterval {
    type Output = Option<TimeInterval>;
    fn sub(self, rhs : &TimeInterval) -> Self::Output {
        self.checked_sub(*rhs)
    }
}

impl Mul<i64> for &TimeInterval {
    type Output = Option<TimeInterval>;
    fn mul(self, rhs : i64) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl PartialEq<i64> for TimeInterval {
    fn eq(&self, other : &i64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<i64> for TimeInterval {
    fn partial_cmp(&self, other : &i64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}d {}s {}us", sign, self.days(), self.seconds(), self.microseconds())
    }
}

/// Returned if an interval would not fit into 64 bits worth of microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalOverflow;

impl Display for IntervalOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Time interval exceeds the representable range of 64 bit microseconds.")
    }
}
impl std::error::Error for IntervalOverflow{}

/// Returned when converting a negative interval into a type that can only hold non-negative durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeInterval;

impl Display for NegativeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Negative time intervals cannot be converted to a duration.")
    }
}
impl std::error::Error for NegativeInterval{}
