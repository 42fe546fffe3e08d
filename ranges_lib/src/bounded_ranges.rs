use std::cmp::Ordering;

/// The two bounds of a range, and the algorithms shared by all concrete
/// range types.
///
/// This type makes no assumption on the order of `start` and `end`: linear
/// ranges require `start <= end`, while circular ranges use `start > end`
/// for arcs that wrap around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundedRange<B> {
    start: B,
    end: B,
}

impl<B> BoundedRange<B> {
    pub fn new(start: B, end: B) -> Self {
        Self { start, end }
    }
}

impl<B: Copy> BoundedRange<B> {
    pub fn start(&self) -> B {
        self.start
    }

    pub fn end(&self) -> B {
        self.end
    }

    /// Same end, but a different start
    pub fn with_start(&self, start: B) -> Self {
        Self { start, end: self.end }
    }

    /// Same start, but a different end
    pub fn with_end(&self, end: B) -> Self {
        Self { start: self.start, end }
    }
}

impl<B: Ord + Copy> BoundedRange<B> {
    /// True for a zero-width range
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the point is between the two bounds, both included
    pub fn overlaps_point(&self, point: &B) -> bool {
        self.start <= *point && *point <= self.end
    }

    /// Whether the two ranges overlap.
    ///
    /// A range whose single point sits on a boundary of `other` does not
    /// overlap it, unless `other` is the same empty range:
    /// ```txt
    ///     [-------]
    ///             |        => no overlap from the empty range
    /// ```
    /// The reverse relation does hold, since the non-empty range contains
    /// the empty one.
    pub fn overlaps(&self, other: &Self) -> bool {
        let start_vs_other_start = self.start.cmp(&other.start);
        let start_vs_other_end = self.start.cmp(&other.end);
        let end_vs_other_start = self.end.cmp(&other.start);
        let end_vs_other_end = self.end.cmp(&other.end);

        if start_vs_other_start == Ordering::Greater
            && start_vs_other_end == Ordering::Less
        {
            true // start strictly inside other
        } else if end_vs_other_start == Ordering::Greater
            && end_vs_other_end == Ordering::Less
        {
            true // end strictly inside other
        } else if start_vs_other_start != Ordering::Greater
            && end_vs_other_end != Ordering::Less
        {
            true // contains other
        } else {
            self.is_empty()
                && other.is_empty()
                && start_vs_other_start == Ordering::Equal
        }
    }

    /// Whether the two ranges touch at one of their bounds
    pub fn is_contiguous_with(&self, other: &Self) -> bool {
        self.end == other.start || self.start == other.end
    }

    /// Order by start only.  Concrete range types break ties on the end.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start)
    }

    /// The smallest range with both bounds, `[min(starts), max(ends)]`
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// `[max(starts), min(ends)]`
    pub fn common(&self, other: &Self) -> Self {
        Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(BoundedRange::new(3, 3).is_empty());
        assert!(!BoundedRange::new(3, 4).is_empty());
    }

    #[test]
    fn test_overlaps_point() {
        let r = BoundedRange::new(1, 5);
        assert!(r.overlaps_point(&1));
        assert!(r.overlaps_point(&3));
        assert!(r.overlaps_point(&5));
        assert!(!r.overlaps_point(&0));
        assert!(!r.overlaps_point(&6));
    }

    #[test]
    fn test_overlaps() {
        let r = BoundedRange::new(1, 5);
        assert!(r.overlaps(&BoundedRange::new(3, 8))); // end inside
        assert!(r.overlaps(&BoundedRange::new(-2, 3))); // start inside
        assert!(r.overlaps(&BoundedRange::new(2, 4))); // contains
        assert!(r.overlaps(&BoundedRange::new(0, 9))); // contained
        assert!(r.overlaps(&r));

        // touching is not overlapping
        assert!(!r.overlaps(&BoundedRange::new(5, 9)));
        assert!(!BoundedRange::new(5, 9).overlaps(&r));
        assert!(!r.overlaps(&BoundedRange::new(7, 9)));
    }

    #[test]
    fn test_overlaps_empty() {
        let r = BoundedRange::new(1, 5);
        let on_boundary = BoundedRange::new(5, 5);
        let inside = BoundedRange::new(3, 3);

        assert!(!on_boundary.overlaps(&r));
        assert!(!BoundedRange::new(1, 1).overlaps(&r));
        assert!(r.overlaps(&on_boundary)); // r contains it
        assert!(inside.overlaps(&r));
        assert!(r.overlaps(&inside));

        assert!(on_boundary.overlaps(&on_boundary));
        assert!(!on_boundary.overlaps(&inside));
    }

    #[test]
    fn test_contiguous() {
        let r = BoundedRange::new(1, 5);
        assert!(r.is_contiguous_with(&BoundedRange::new(5, 9)));
        assert!(r.is_contiguous_with(&BoundedRange::new(-3, 1)));
        assert!(!r.is_contiguous_with(&BoundedRange::new(6, 9)));
        assert!(!r.is_contiguous_with(&BoundedRange::new(1, 9)));
    }

    #[test]
    fn test_compare() {
        let r = BoundedRange::new(1, 5);
        assert_eq!(r.compare_to(&BoundedRange::new(1, 2)), Ordering::Equal);
        assert_eq!(r.compare_to(&BoundedRange::new(2, 3)), Ordering::Less);
        assert_eq!(r.compare_to(&BoundedRange::new(0, 9)), Ordering::Greater);
    }

    #[test]
    fn test_copy() {
        let r = BoundedRange::new(1, 5);
        assert_eq!(r.with_start(2), BoundedRange::new(2, 5));
        assert_eq!(r.with_end(9), BoundedRange::new(1, 9));
        assert_eq!(r, BoundedRange::new(1, 5));
    }
}
