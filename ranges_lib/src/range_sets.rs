use crate::capabilities::{CanBeEmpty, CanBeInfinite, Mergeable, Range};
use itertools::Itertools;
use std::fmt::Display;

/// A union of ranges, stored as a sorted list of ranges that neither
/// overlap nor touch each other.
///
/// ```txt
///     [--A--]   [--B--]                 insert C
///                  [------ C ------]
///     [--A--]   [-------- B+C -----]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSet<R> {
    ranges: Vec<R>,
}

impl<R> Default for RangeSet<R> {
    fn default() -> Self {
        Self { ranges: Vec::new() }
    }
}

impl<R: Mergeable + Ord + Copy + Display> RangeSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a range, merging it with all the ranges it overlaps or touches.
    /// Ranges for which the merge is refused are kept unchanged.
    pub fn insert(&mut self, range: R) {
        if range.is_empty() {
            return;
        }
        if range.is_infinite() {
            self.ranges = vec![range];
            return;
        }

        let mut merged = range;
        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for existing in self.ranges.drain(..) {
            let touching = merged.overlaps_range(&existing)
                || existing.overlaps_range(&merged)
                || merged.is_contiguous_with(&existing);
            if !touching {
                kept.push(existing);
                continue;
            }
            match merged.try_merge(&existing) {
                Ok(m) => {
                    log::debug!("{} absorbed {}", m, existing);
                    merged = m;
                }
                Err(e) => {
                    log::debug!("keeping range apart: {}", e);
                    kept.push(existing);
                }
            }
        }
        kept.push(merged);
        kept.sort();
        self.ranges = kept;
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn is_infinite(&self) -> bool {
        self.ranges.iter().any(|r| r.is_infinite())
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.ranges.iter()
    }

    /// Whether any of the ranges contains the point
    pub fn contains(&self, point: &R::Bound) -> bool {
        self.ranges.iter().any(|r| r.overlaps_point(point))
    }

    /// Whether any of the ranges overlaps `range`
    pub fn overlaps(&self, range: &R) -> bool {
        self.ranges.iter().any(|r| r.overlaps_range(range))
    }
}

impl<R: Mergeable + Ord + Copy + Display> FromIterator<R> for RangeSet<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut result = RangeSet::new();
        for r in iter {
            result.insert(r);
        }
        result
    }
}

impl<R: Display> Display for RangeSet<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ranges.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "{}", self.ranges.iter().join(", "))
        }
    }
}
