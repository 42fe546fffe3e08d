use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Display;

/// A point on an unbounded, monotonic line (timestamps, dates,...).
///
/// The lowest and highest values are used to build the canonical empty
/// (`[lowest, lowest]`) and infinite (`[lowest, highest]`) ranges.
pub trait LinearBound: Ord + Copy + Display {
    fn lowest() -> Self;
    fn highest() -> Self;
}

impl LinearBound for NaiveDateTime {
    fn lowest() -> Self {
        NaiveDateTime::MIN
    }
    fn highest() -> Self {
        NaiveDateTime::MAX
    }
}

impl LinearBound for NaiveDate {
    fn lowest() -> Self {
        NaiveDate::MIN
    }
    fn highest() -> Self {
        NaiveDate::MAX
    }
}

macro_rules! integer_linear_bound {
    ($($t:ty),*) => {
        $(
            impl LinearBound for $t {
                fn lowest() -> Self {
                    <$t>::MIN
                }
                fn highest() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}
integer_linear_bound!(i32, i64);

/// A point on a cycle of fixed period, for instance a time of day.
///
/// Values are ordered from the zero point of the period (`lowest`) up to the
/// last representable point before the cycle wraps (`highest`).
pub trait CyclicBound: Ord + Copy + Display {
    /// The type used to measure the distance between two points.
    type Span: Ord + Copy;

    fn lowest() -> Self;
    fn highest() -> Self;

    /// The literal distance `to - from`.  This does not wrap: it is negative
    /// when `to` is before `from`.
    fn distance(from: Self, to: Self) -> Self::Span;

    fn zero_span() -> Self::Span;

    /// Move forward by `by`, wrapping around the period boundary.
    fn forward(self, by: Self::Span) -> Self;

    /// Move backward by `by`, wrapping around the period boundary.
    fn backward(self, by: Self::Span) -> Self;

    /// The span of the whole period, `highest - lowest`.
    fn full_span() -> Self::Span {
        Self::distance(Self::lowest(), Self::highest())
    }
}

impl CyclicBound for NaiveTime {
    type Span = Duration;

    fn lowest() -> Self {
        NaiveTime::MIN
    }

    /// One nanosecond before midnight
    fn highest() -> Self {
        NaiveTime::MIN.overflowing_sub_signed(Duration::nanoseconds(1)).0
    }

    fn distance(from: Self, to: Self) -> Duration {
        to.signed_duration_since(from)
    }

    fn zero_span() -> Duration {
        Duration::zero()
    }

    fn forward(self, by: Duration) -> Self {
        self.overflowing_add_signed(by).0
    }

    fn backward(self, by: Duration) -> Self {
        self.overflowing_sub_signed(by).0
    }
}
