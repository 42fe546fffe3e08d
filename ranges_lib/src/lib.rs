//! This crate provides immutable ranges of time, with the usual set
//! operations: membership, overlap, contiguity, merge (union),
//! intersection and complement.
//!
//! Two kinds of ranges are provided:
//!
//!  |Type                |Bounds          |Description
//!  |--------------------|----------------|-----------------------------
//!  |[`DateTimeRange`]   |`NaiveDateTime` |timestamps, `start <= end`
//!  |[`DateRange`]       |`NaiveDate`     |days, `start <= end`
//!  |[`TimeOfDayRange`]  |`NaiveTime`     |may wrap past midnight
//!
//! Linear ranges live on a line that never wraps.  Given two ranges that
//! overlap or touch:
//!
//! ```text
//!        [------ A ------]
//!               [----- B -------]
//!
//!        [----------------------]     A.merge(B)
//!               [--------]            A.intersect(B)
//! ```
//!
//! Merging two linear ranges that neither overlap nor touch is an error.
//!
//! Circular ranges live on a cycle, and `start > end` describes an arc that
//! crosses the period boundary.  The complement of `09:00 - 17:00` is
//! `17:00 - 09:00`.  Merging two circular ranges that neither overlap nor
//! touch returns the empty range rather than an error.
//!
//! Each range type has a canonical empty value `[MIN, MIN]` and a canonical
//! infinite value `[MIN, MAX]`, see [`CanBeEmpty`] and [`CanBeInfinite`].
//! Several ranges can be combined into a [`RangeSet`].

pub mod bounded_ranges;
pub mod bounds;
pub mod capabilities;
pub mod circular_ranges;
pub mod errors;
pub mod formatters;
pub mod linear_ranges;
pub mod range_sets;

pub use crate::bounded_ranges::BoundedRange;
pub use crate::bounds::{CyclicBound, LinearBound};
pub use crate::capabilities::{CanBeEmpty, CanBeInfinite, Mergeable, Range};
pub use crate::circular_ranges::{CircularRange, TimeOfDayRange};
pub use crate::errors::Error;
pub use crate::formatters::Formatter;
pub use crate::linear_ranges::{DateRange, DateTimeRange, LinearRange};
pub use crate::range_sets::RangeSet;
