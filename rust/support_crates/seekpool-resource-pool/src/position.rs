//! Position and resource contracts.

use std::fmt;

/// A totally ordered coordinate in the caller's domain.
///
/// The pool only ever asks whether one position is strictly before another.
/// Every `Ord + Clone + Debug` type is a `Position`, and its ordering is the
/// type's `Ord`: a domain picks its order by how it implements `Ord`.
pub trait Position: Ord + Clone + fmt::Debug {
    /// Returns `true` if `self` strictly precedes `other`.
    fn is_before(&self, other: &Self) -> bool;
}

impl<T: Ord + Clone + fmt::Debug> Position for T {
    #[inline]
    fn is_before(&self, other: &T) -> bool {
        self < other
    }
}

/// A stateful, forward-only cursor that can report where it currently is.
///
/// Implementors must never move backwards: once `position()` returns
/// `Some(p)`, every later call returns a position that is not before `p`.
/// Positional reuse relies on this.
pub trait PositionedResource {
    type Position: Position;

    /// The position of the last entry the cursor moved over, or `None` if the
    /// cursor is fresh and has not been advanced yet.
    fn position(&self) -> Option<&Self::Position>;

    /// Returns `true` if the cursor has at least one more entry to yield.
    fn has_remaining_data(&self) -> bool;
}
