use crate::bounded_ranges::BoundedRange;
use crate::bounds::CyclicBound;
use crate::capabilities::{CanBeEmpty, CanBeInfinite, Mergeable, Range};
use crate::errors::Error;
use chrono::NaiveTime;
use std::cmp::Ordering;

/// A range on a cyclic domain, for instance a time of day.
///
/// When `start > end`, the range wraps around the period boundary:
/// ```txt
///     MIN                                    MAX
///     |-----]                        [-------|     22:00 - 06:00
///     |           [---------]                |     09:00 - 17:00
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CircularRange<B> {
    bounds: BoundedRange<B>,
}

/// A window within a day, possibly crossing midnight
pub type TimeOfDayRange = CircularRange<NaiveTime>;

impl<B: CyclicBound> CircularRange<B> {
    pub fn new(start: B, end: B) -> Self {
        Self {
            bounds: BoundedRange::new(start, end),
        }
    }

    /// From the start of the period up to `end`
    pub fn up_to(end: B) -> Self {
        Self::new(B::lowest(), end)
    }

    /// From `start` up to the end of the period
    pub fn down_to(start: B) -> Self {
        Self::new(start, B::highest())
    }

    /// The whole period.  Same as [`CanBeInfinite::infinite`]
    pub fn all_day() -> Self {
        Self::infinite()
    }

    pub fn with_start(&self, start: B) -> Self {
        Self {
            bounds: self.bounds.with_start(start),
        }
    }

    pub fn with_end(&self, end: B) -> Self {
        Self {
            bounds: self.bounds.with_end(end),
        }
    }

    /// True if the range crosses the period boundary
    pub fn wraps(&self) -> bool {
        self.bounds.start() > self.bounds.end()
    }

    /// The distance between the two bounds.  For a range that wraps, this
    /// is the literal `start - end`, not the length of the covered arc.
    pub fn span(&self) -> B::Span {
        if self.wraps() {
            B::distance(self.bounds.end(), self.bounds.start())
        } else {
            B::distance(self.bounds.start(), self.bounds.end())
        }
    }

    fn swapped(&self) -> Self {
        Self::new(self.bounds.end(), self.bounds.start())
    }

    /// The arc covering every point not in self
    pub fn complement(&self) -> Self {
        if self.is_empty() {
            Self::infinite()
        } else if self.is_infinite() {
            Self::empty()
        } else {
            self.swapped()
        }
    }

    /// Whether every point of other is also in self
    fn contains_arc(&self, other: &Self) -> bool {
        if self.is_infinite() {
            return true;
        }
        let (start, end) = (self.bounds.start(), self.bounds.end());
        let (o_start, o_end) = (other.bounds.start(), other.bounds.end());
        match (self.wraps(), other.wraps()) {
            (false, false) => start <= o_start && o_end <= end,
            (true, false) => o_start >= start || o_end <= end,
            (false, true) => false,
            (true, true) => o_start >= start && o_end <= end,
        }
    }

    /// Whether the two arcs share more than a boundary point
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_infinite() || other.is_infinite() {
            return true;
        }
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.contains_arc(other) || other.contains_arc(self) {
            return true;
        }

        let (start, end) = (self.bounds.start(), self.bounds.end());
        let (o_start, o_end) = (other.bounds.start(), other.bounds.end());

        if !self.wraps() {
            if !other.wraps() {
                start < o_end && o_start < end
            } else {
                //  other is [o_start, MAX] + [MIN, o_end]
                o_start < end || start < o_end
            }
        } else if !other.wraps() {
            //  self is [start, MAX] + [MIN, end]
            start < o_end || o_start < end
        } else {
            //  both cross the boundary, they share it unless one of them
            //  only touches it
            (start < B::highest() && o_start < B::highest())
                || (B::lowest() < end && B::lowest() < o_end)
        }
    }

    /// Whether one range ends exactly where the other starts
    pub fn is_contiguous_with(&self, other: &Self) -> bool {
        self.bounds.is_contiguous_with(&other.bounds)
    }

    /// The range covering both self and other.  This never fails: when the
    /// two ranges neither overlap nor touch, the empty range is returned.
    pub fn merge(&self, other: &Self) -> Self {
        let candidate = if other.is_infinite() {
            Self::infinite()
        } else if other.is_empty() {
            *self
        } else if self.is_contiguous_with(other) {
            if *self == other.complement() {
                Self::infinite()
            } else {
                Self {
                    bounds: self.bounds.hull(&other.bounds),
                }
            }
        } else if self.overlaps(other) {
            if self.wraps() {
                self.absorb(other)
            } else {
                Self {
                    bounds: self.bounds.hull(&other.bounds),
                }
            }
        } else {
            log::debug!("{} and {} are disjoint, merge is empty", self, other);
            Self::empty()
        };
        Self::normalize(candidate)
    }

    /// Grow a wrapping range with the part of other that lies in its gap
    fn absorb(&self, other: &Self) -> Self {
        let gap = self.complement();
        if !gap.overlaps(other) {
            return *self; // other is already inside self
        }

        let extra = gap.intersect(other);
        let grown = if extra.bounds.end() == self.bounds.start() {
            self.with_start(self.bounds.start().backward(extra.span()))
        } else if extra.bounds.start() == self.bounds.end() {
            self.with_end(self.bounds.end().forward(extra.span()))
        } else {
            return *self;
        };

        if grown.bounds.start() == grown.bounds.end() {
            Self::infinite()
        } else {
            grown
        }
    }

    /// Join a wrapping range with a range starting at its end, or ending at
    /// its start.  The result is infinite when other reaches around to the
    /// far bound of self.
    fn join_touching(&self, other: &Self) -> Self {
        let joined = if self.bounds.end() == other.bounds.start() {
            if other.overlaps_point(&self.bounds.start()) {
                return Self::infinite();
            }
            Self::new(self.bounds.start(), other.bounds.end())
        } else if other.bounds.end() == self.bounds.start() {
            if other.overlaps_point(&self.bounds.end()) {
                return Self::infinite();
            }
            Self::new(other.bounds.start(), self.bounds.end())
        } else {
            return self.merge(other);
        };
        Self::normalize(joined)
    }

    fn normalize(candidate: Self) -> Self {
        let span = candidate.span();
        if span >= B::full_span() {
            if candidate != Self::infinite() {
                log::trace!("{} covers the whole period", candidate);
            }
            Self::infinite()
        } else if span <= B::zero_span() {
            Self::empty()
        } else {
            candidate
        }
    }

    /// The arc shared by both ranges.
    ///
    /// When the two ranges share two disjoint arcs (each one covering the
    /// gap of the other), only one of them is returned.
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() || !self.overlaps(other) {
            return Self::empty();
        }

        if other.is_infinite() {
            *self
        } else if self.is_infinite() {
            *other
        } else if other.contains_arc(self) {
            *self
        } else if other.overlaps_point(&self.bounds.end()) {
            //  right overhang
            //          [----- other -----]
            //     [------ self -----]
            Self::new(other.bounds.start(), self.bounds.end())
        } else if other.overlaps_point(&self.bounds.start()) {
            //  left overhang
            //     [----- other -----]
            //          [------ self -----]
            Self::new(self.bounds.start(), other.bounds.end())
        } else if self.contains_arc(other) {
            *other
        } else {
            Self::empty()
        }
    }
}

impl<B: CyclicBound> Range for CircularRange<B> {
    type Bound = B;

    fn start(&self) -> B {
        self.bounds.start()
    }

    fn end(&self) -> B {
        self.bounds.end()
    }

    /// Membership on the arc, taking wrapping into account
    fn overlaps_point(&self, point: &B) -> bool {
        if self.wraps() {
            *point >= self.bounds.start() || *point <= self.bounds.end()
        } else {
            self.bounds.overlaps_point(point)
        }
    }
}

impl<B: CyclicBound> CanBeEmpty for CircularRange<B> {
    fn empty() -> Self {
        Self::new(B::lowest(), B::lowest())
    }

    fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl<B: CyclicBound> CanBeInfinite for CircularRange<B> {
    fn infinite() -> Self {
        Self::new(B::lowest(), B::highest())
    }

    fn is_infinite(&self) -> bool {
        if self.wraps() {
            self.swapped().span() <= B::zero_span()
        } else {
            self.span() == B::full_span()
        }
    }
}

impl<B: CyclicBound> Mergeable for CircularRange<B> {
    fn overlaps_range(&self, other: &Self) -> bool {
        self.overlaps(other)
    }

    fn is_contiguous_with(&self, other: &Self) -> bool {
        self.bounds.is_contiguous_with(&other.bounds)
    }

    /// Merges from the wrapping side, so that a forward range is grown into
    /// the wrapping one rather than the reverse.  Touching ranges where one
    /// side wraps are joined end to start, since the hull used by `merge`
    /// would drop the wrapped arc.
    fn try_merge(&self, other: &Self) -> Result<Self, Error> {
        let touching_wrap = (self.wraps() || other.wraps())
            && !self.is_empty()
            && !other.is_empty()
            && self.is_contiguous_with(other);
        let merged = if touching_wrap {
            if self.wraps() {
                self.join_touching(other)
            } else {
                other.join_touching(self)
            }
        } else if !self.wraps() && other.wraps() {
            other.merge(self)
        } else {
            self.merge(other)
        };
        if merged.is_empty() && !self.is_empty() && !other.is_empty() {
            Err(Error::Disjoint {
                left: self.to_string(),
                right: other.to_string(),
            })
        } else {
            Ok(merged)
        }
    }
}

impl<B: CyclicBound> Ord for CircularRange<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bounds
            .compare_to(&other.bounds)
            .then_with(|| self.bounds.end().cmp(&other.bounds.end()))
    }
}

impl<B: CyclicBound> PartialOrd for CircularRange<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: CyclicBound> core::ops::Add for CircularRange<B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(&rhs)
    }
}

impl<B: CyclicBound> core::ops::Not for CircularRange<B> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl<B: CyclicBound> std::fmt::Display for CircularRange<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bounds.is_empty() {
            write!(f, "{}", self.bounds.start())
        } else {
            write!(f, "{} - {}", self.bounds.start(), self.bounds.end())
        }
    }
}
