use crate::bounded_ranges::BoundedRange;
use crate::bounds::LinearBound;
use crate::capabilities::{CanBeEmpty, CanBeInfinite, Mergeable, Range};
use crate::errors::Error;
use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// A range of values on a line that never wraps, `[start, end]`, with
/// `start <= end`.
///
/// ```txt
///     [------ A ------]
///             [------ B ------]
///
///     [-----------------------]     A.merge(B)
///             [-------]             A.intersect(B)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinearRange<B> {
    bounds: BoundedRange<B>,
}

/// A range of timestamps
pub type DateTimeRange = LinearRange<NaiveDateTime>;

/// A range of days
pub type DateRange = LinearRange<NaiveDate>;

impl<B: LinearBound> LinearRange<B> {
    /// Fails when `start` is after `end`
    pub fn new(start: B, end: B) -> Result<Self, Error> {
        if start > end {
            return Err(Error::OutOfRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            bounds: BoundedRange::new(start, end),
        })
    }

    /// All values up to `end`, `[MIN, end]`
    pub fn up_to(end: B) -> Self {
        Self {
            bounds: BoundedRange::new(B::lowest(), end),
        }
    }

    /// All values from `start`, `[start, MAX]`
    pub fn down_to(start: B) -> Self {
        Self {
            bounds: BoundedRange::new(start, B::highest()),
        }
    }

    pub fn with_start(&self, start: B) -> Result<Self, Error> {
        Self::new(start, self.bounds.end())
    }

    pub fn with_end(&self, end: B) -> Result<Self, Error> {
        Self::new(self.bounds.start(), end)
    }

    /// Whether the two ranges share values.  The infinite range also
    /// overlaps the empty one.
    pub fn overlaps(&self, other: &Self) -> bool {
        (self.is_infinite() && other.is_empty())
            || (self.is_empty() && other.is_infinite())
            || self.bounds.overlaps(&other.bounds)
    }

    /// Whether one range ends exactly where the other starts
    pub fn is_contiguous_with(&self, other: &Self) -> bool {
        self.bounds.is_contiguous_with(&other.bounds)
    }

    /// The range covering both self and other.  Only ranges that overlap or
    /// touch can be merged.
    pub fn merge(&self, other: &Self) -> Result<Self, Error> {
        if other.is_empty() {
            Ok(*self)
        } else if self.overlaps(other) || self.is_contiguous_with(other) {
            Ok(Self {
                bounds: self.bounds.hull(&other.bounds),
            })
        } else {
            log::debug!("refusing to merge disjoint {} and {}", self, other);
            Err(Error::InvalidOperation {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }

    /// The values common to both ranges, or the empty range.
    pub fn intersect(&self, other: &Self) -> Self {
        if self.overlaps(other) {
            Self {
                bounds: self.bounds.common(&other.bounds),
            }
        } else {
            Self::empty()
        }
    }
}

impl<B: LinearBound> Range for LinearRange<B> {
    type Bound = B;

    fn start(&self) -> B {
        self.bounds.start()
    }

    fn end(&self) -> B {
        self.bounds.end()
    }
}

impl<B: LinearBound> CanBeEmpty for LinearRange<B> {
    fn empty() -> Self {
        Self {
            bounds: BoundedRange::new(B::lowest(), B::lowest()),
        }
    }

    fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl<B: LinearBound> CanBeInfinite for LinearRange<B> {
    fn infinite() -> Self {
        Self {
            bounds: BoundedRange::new(B::lowest(), B::highest()),
        }
    }

    fn is_infinite(&self) -> bool {
        self.bounds.start() == B::lowest() && self.bounds.end() == B::highest()
    }
}

impl<B: LinearBound> Mergeable for LinearRange<B> {
    fn overlaps_range(&self, other: &Self) -> bool {
        self.overlaps(other)
    }

    fn is_contiguous_with(&self, other: &Self) -> bool {
        self.bounds.is_contiguous_with(&other.bounds)
    }

    fn try_merge(&self, other: &Self) -> Result<Self, Error> {
        self.merge(other)
    }
}

impl<B: LinearBound> Ord for LinearRange<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bounds
            .compare_to(&other.bounds)
            .then_with(|| self.bounds.end().cmp(&other.bounds.end()))
    }
}

impl<B: LinearBound> PartialOrd for LinearRange<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: LinearBound> core::ops::Add for LinearRange<B> {
    type Output = Result<Self, Error>;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(&rhs)
    }
}

impl<B: LinearBound> std::fmt::Display for LinearRange<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bounds.is_empty() {
            write!(f, "{}", self.bounds.start())
        } else {
            write!(f, "{} - {}", self.bounds.start(), self.bounds.end())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn days(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(ymd(start.0, start.1, start.2), ymd(end.0, end.1, end.2))
            .unwrap()
    }

    fn ints(start: i64, end: i64) -> LinearRange<i64> {
        LinearRange::new(start, end).unwrap()
    }

    #[test]
    fn test_new() {
        assert!(DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 1)).is_ok());
        assert_eq!(
            DateRange::new(ymd(2024, 1, 2), ymd(2024, 1, 1)),
            Err(Error::OutOfRange {
                start: "2024-01-02".to_string(),
                end: "2024-01-01".to_string(),
            }),
        );

        let r = ints(1, 5);
        assert_eq!(r.start(), 1);
        assert_eq!(r.end(), 5);
        assert_eq!(r.with_end(8), Ok(ints(1, 8)));
        assert!(r.with_start(6).is_err());
    }

    #[test]
    fn test_sentinels() {
        let empty = LinearRange::<i64>::empty();
        let infinite = LinearRange::<i64>::infinite();
        assert!(empty.is_empty());
        assert!(!empty.is_infinite());
        assert!(infinite.is_infinite());
        assert!(!infinite.is_empty());

        assert_eq!(LinearRange::up_to(4_i64), ints(i64::MIN, 4));
        assert_eq!(LinearRange::down_to(4_i64), ints(4, i64::MAX));
        assert!(!LinearRange::up_to(4_i64).is_infinite());
        assert!(LinearRange::up_to(i64::MAX).is_infinite());

        assert!(DateTimeRange::infinite().is_infinite());
        assert!(!DateTimeRange::empty().is_infinite());
    }

    #[test]
    fn test_overlaps() {
        let empty = LinearRange::<i64>::empty();
        let infinite = LinearRange::<i64>::infinite();
        assert!(infinite.overlaps(&empty));
        assert!(empty.overlaps(&infinite));
        assert!(infinite.overlaps(&ints(3, 4)));
        assert!(ints(3, 4).overlaps(&infinite));

        assert!(ints(1, 5).overlaps(&ints(4, 8)));
        assert!(!ints(1, 5).overlaps(&ints(5, 8)));
        assert!(!ints(5, 5).overlaps(&ints(1, 5)));
        assert!(ints(1, 5).overlaps(&ints(5, 5)));

        // point membership comes from the capability
        assert!(ints(1, 5).overlaps_point(&5));
        assert!(!ints(1, 5).overlaps_point(&6));
        assert!(ints(1, 5).overlaps_endpoints(&ints(5, 8)));
    }

    #[test]
    fn test_merge() {
        let a = days((2024, 1, 1), (2024, 1, 10));
        let b = days((2024, 1, 5), (2024, 1, 20));
        assert_eq!(a.merge(&b), Ok(days((2024, 1, 1), (2024, 1, 20))));
        assert_eq!(b.merge(&a), Ok(days((2024, 1, 1), (2024, 1, 20))));
        assert_eq!(a + b, Ok(days((2024, 1, 1), (2024, 1, 20))));

        // contiguous
        let c = days((2024, 1, 10), (2024, 1, 12));
        assert_eq!(a.merge(&c), Ok(days((2024, 1, 1), (2024, 1, 12))));

        // disjoint
        let a = days((2024, 1, 1), (2024, 1, 2));
        let b = days((2024, 3, 1), (2024, 3, 2));
        assert!(matches!(a.merge(&b), Err(Error::InvalidOperation { .. })));
        assert!(matches!(a + b, Err(Error::InvalidOperation { .. })));

        assert_eq!(a.merge(&DateRange::empty()), Ok(a));
        assert_eq!(a.merge(&DateRange::infinite()), Ok(DateRange::infinite()));
    }

    #[test]
    fn test_intersect() {
        let a = days((2024, 1, 1), (2024, 1, 10));
        let b = days((2024, 1, 5), (2024, 1, 20));
        assert_eq!(a.intersect(&b), days((2024, 1, 5), (2024, 1, 10)));
        assert_eq!(b.intersect(&a), days((2024, 1, 5), (2024, 1, 10)));

        let a = days((2024, 1, 1), (2024, 1, 2));
        let b = days((2024, 3, 1), (2024, 3, 2));
        assert_eq!(a.intersect(&b), DateRange::empty());

        assert_eq!(a.intersect(&DateRange::infinite()), a);
        assert_eq!(
            DateRange::empty().intersect(&DateRange::infinite()),
            DateRange::empty(),
        );
    }

    #[test]
    fn test_ord() {
        let mut v = vec![ints(3, 4), ints(1, 9), ints(1, 2), ints(-5, 0)];
        v.sort();
        assert_eq!(v, vec![ints(-5, 0), ints(1, 2), ints(1, 9), ints(3, 4)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            days((2024, 1, 1), (2024, 1, 10)).to_string(),
            "2024-01-01 - 2024-01-10",
        );
        assert_eq!(days((2024, 1, 1), (2024, 1, 1)).to_string(), "2024-01-01");
        assert_eq!(
            DateTimeRange::new(
                ymd(2024, 1, 1).and_hms_opt(8, 0, 0).unwrap(),
                ymd(2024, 1, 1).and_hms_opt(9, 30, 0).unwrap(),
            )
            .unwrap()
            .to_string(),
            "2024-01-01 08:00:00 - 2024-01-01 09:30:00",
        );
    }

    fn any_range() -> impl Strategy<Value = LinearRange<i64>> {
        (-100_i64..100, -100_i64..100)
            .prop_map(|(a, b)| LinearRange::new(a.min(b), a.max(b)).unwrap())
    }

    proptest! {
        #[test]
        fn empty_iff_bounds_equal(r in any_range()) {
            prop_assert_eq!(r.is_empty(), r.start() == r.end());
        }

        #[test]
        fn merge_with_empty_is_identity(r in any_range()) {
            prop_assert_eq!(r.merge(&LinearRange::empty()), Ok(r));
        }

        #[test]
        fn merge_is_idempotent(r in any_range()) {
            prop_assert_eq!(r.merge(&r), Ok(r));
        }

        #[test]
        fn empty_does_not_overlap_from_boundary(p in -100_i64..100, len in 1_i64..50) {
            let e = ints(p, p);
            prop_assert!(!e.overlaps(&ints(p, p + len)));
            prop_assert!(e.overlaps(&e));
        }

        #[test]
        fn intersection_is_inside_both(a in any_range(), b in any_range()) {
            let i = a.intersect(&b);
            if a.overlaps(&b) {
                prop_assert!(a.start() <= i.start() && i.end() <= a.end());
                prop_assert!(b.start() <= i.start() && i.end() <= b.end());
            } else {
                prop_assert_eq!(i, LinearRange::empty());
            }
        }

        #[test]
        fn merge_covers_both(a in any_range(), b in any_range()) {
            if let Ok(m) = a.merge(&b) {
                prop_assert!(m.start() <= a.start() && a.end() <= m.end());
                if !b.is_empty() {
                    prop_assert!(m.start() <= b.start() && b.end() <= m.end());
                }
            }
        }
    }
}
