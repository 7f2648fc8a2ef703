//! Units of traversal work.

use std::ops::Range;

use seekpool_common::{Result, verify_arg};
use seekpool_resource_pool::Position;

use crate::locus::Locus;

/// A unit of work that starts at a known position.
pub trait Shard {
    type Position: Position;

    /// The first position covered by the shard.
    fn start(&self) -> Self::Position;
}

/// A half-open span `[start, end)` of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval<P> {
    start: P,
    end: P,
}

impl<P: Position> Interval<P> {
    pub fn new(start: P, end: P) -> Result<Interval<P>> {
        verify_arg!(end, !end.is_before(&start));
        Ok(Interval { start, end })
    }

    pub fn end(&self) -> &P {
        &self.end
    }

    /// Returns `true` if `position` falls inside the span.
    pub fn contains(&self, position: &P) -> bool {
        !position.is_before(&self.start) && position.is_before(&self.end)
    }
}

impl<P: Position> Shard for Interval<P> {
    type Position = P;

    fn start(&self) -> P {
        self.start.clone()
    }
}

impl<P: Position> Shard for Range<P> {
    type Position = P;

    fn start(&self) -> P {
        self.start.clone()
    }
}

impl Shard for Locus {
    type Position = Locus;

    fn start(&self) -> Locus {
        *self
    }
}

impl<S: Shard + ?Sized> Shard for &S {
    type Position = S::Position;

    fn start(&self) -> S::Position {
        (**self).start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let interval = Interval::new(Locus::new(1, 100), Locus::new(1, 200)).unwrap();
        assert_eq!(interval.start(), Locus::new(1, 100));
        assert!(interval.contains(&Locus::new(1, 100)));
        assert!(interval.contains(&Locus::new(1, 199)));
        assert!(!interval.contains(&Locus::new(1, 200)));
        assert!(!interval.contains(&Locus::new(0, 150)));

        assert!(Interval::new(5u64, 5).is_ok());
        assert!(Interval::new(6u64, 5).is_err());
    }

    #[test]
    fn test_shard_start() {
        assert_eq!((10u64..20).start(), 10);
        assert_eq!(Locus::new(2, 3).start(), Locus::new(2, 3));
        let range = 4u64..8;
        assert_eq!((&range).start(), 4);
    }
}
