//! Conversions between [`TimeInterval`] and [`std::time::Duration`].

use std::convert::TryFrom;
use std::time::Duration;

use super::{TimeInterval, IntervalOverflow, NegativeInterval};

/// Sub-microsecond precision of the `Duration` is truncated.
impl TryFrom<Duration> for TimeInterval {
    type Error = IntervalOverflow;
    fn try_from(value : Duration) -> Result<Self, Self::Error> {
        i64::try_from(value.as_micros())
            .map(TimeInterval::from_microseconds)
            .map_err(|_| IntervalOverflow)
    }
}

impl TryFrom<TimeInterval> for Duration {
    type Error = NegativeInterval;
    fn try_from(value : TimeInterval) -> Result<Self, Self::Error> {
        u64::try_from(value.as_microseconds())
            .map(Duration::from_micros)
            .map_err(|_| NegativeInterval)
    }
}
