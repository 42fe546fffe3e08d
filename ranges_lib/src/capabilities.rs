use crate::errors::Error;

/// Anything with a start and an end.
pub trait Range {
    type Bound: Ord + Copy;

    fn start(&self) -> Self::Bound;
    fn end(&self) -> Self::Bound;

    /// Whether the point is between the two bounds, both included.
    fn overlaps_point(&self, point: &Self::Bound) -> bool {
        self.start() <= *point && *point <= self.end()
    }

    /// A loose overlap test that only looks at the bounds of `other`.
    /// Concrete types provide a stricter `overlaps`.
    fn overlaps_endpoints(&self, other: &Self) -> bool {
        self.overlaps_point(&other.start()) || self.overlaps_point(&other.end())
    }
}

/// Range types that have a canonical empty value.
pub trait CanBeEmpty {
    fn empty() -> Self;
    fn is_empty(&self) -> bool;
}

/// Range types that have a canonical value overlapping every other value
/// of the type.
pub trait CanBeInfinite {
    fn infinite() -> Self;
    fn is_infinite(&self) -> bool;
}

/// What a [`crate::range_sets::RangeSet`] needs to fold ranges together.
pub trait Mergeable: Range + CanBeEmpty + CanBeInfinite + Sized {
    fn overlaps_range(&self, other: &Self) -> bool;

    fn is_contiguous_with(&self, other: &Self) -> bool;

    /// A single range covering both, or an error when there is none.
    fn try_merge(&self, other: &Self) -> Result<Self, Error>;
}
