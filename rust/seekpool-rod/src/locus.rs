use std::fmt;

use serde::{Deserialize, Serialize};

/// A single point on the reference: a contig index and a zero-based offset.
///
/// Loci order by contig first, then by offset, which is the order records of
/// a reference-ordered dataset are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Locus {
    pub contig: u32,
    pub start: u64,
}

impl Locus {
    pub const fn new(contig: u32, start: u64) -> Locus {
        Locus { contig, start }
    }

    /// Returns the locus `distance` bases further along the same contig, or
    /// `None` if that offset does not fit in a `u64`.
    pub fn offset(self, distance: u64) -> Option<Locus> {
        let start = self.start.checked_add(distance)?;
        Some(Locus::new(self.contig, start))
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.contig, self.start)
    }
}
