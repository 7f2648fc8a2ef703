use std::sync::Arc;

use seekpool_resource_pool::{Position, PositionedResource};

use crate::dataset::{MemoryDatasetInner, RodRecord};

/// A forward-only cursor over a [`MemoryDataset`](crate::MemoryDataset).
///
/// The cursor's position is the position of the last record it moved over,
/// either by yielding it or by skipping it in [`seek_forward`](Self::seek_forward).
/// A fresh cursor has no position. No record positioned after the cursor's
/// position has been consumed yet, so a cursor positioned before a target can
/// still deliver every record from that target on.
pub struct RodCursor<P, T> {
    dataset: Arc<MemoryDatasetInner<P, T>>,
    /// Index of the next record to yield.
    next: usize,
    position: Option<P>,
}

impl<P: Position, T: Clone> RodCursor<P, T> {
    pub(crate) fn new(dataset: Arc<MemoryDatasetInner<P, T>>) -> RodCursor<P, T> {
        RodCursor {
            dataset,
            next: 0,
            position: None,
        }
    }

    pub fn position(&self) -> Option<&P> {
        self.position.as_ref()
    }

    /// Position of the record the next call to `next()` yields.
    pub fn peek_position(&self) -> Option<&P> {
        self.dataset.records().get(self.next).map(|r| &r.position)
    }

    pub fn has_remaining_data(&self) -> bool {
        self.next < self.dataset.records().len()
    }

    /// Number of records yielded or skipped so far.
    pub fn consumed(&self) -> usize {
        self.next
    }

    /// Skips every record positioned before `target` and returns how many
    /// were skipped.
    ///
    /// Never moves backwards: if the cursor already went past `target`, this
    /// is a no-op.
    pub fn seek_forward(&mut self, target: &P) -> usize {
        let records = &self.dataset.records()[self.next..];
        let skipped = records.partition_point(|r| r.position.is_before(target));
        if skipped > 0 {
            self.position = Some(records[skipped - 1].position.clone());
            self.next += skipped;
        }
        skipped
    }

    /// Yields the records positioned before `end`, leaving the first record at
    /// or after `end` unconsumed.
    pub fn take_before<'a>(
        &'a mut self,
        end: &'a P,
    ) -> impl Iterator<Item = RodRecord<P, T>> + 'a {
        std::iter::from_fn(move || {
            if self.peek_position()?.is_before(end) {
                self.next()
            } else {
                None
            }
        })
    }
}

impl<P: Position, T: Clone> Iterator for RodCursor<P, T> {
    type Item = RodRecord<P, T>;

    fn next(&mut self) -> Option<RodRecord<P, T>> {
        let record = self.dataset.records().get(self.next)?.clone();
        self.next += 1;
        self.position = Some(record.position.clone());
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.records().len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<P: Position, T: Clone> PositionedResource for RodCursor<P, T> {
    type Position = P;

    fn position(&self) -> Option<&P> {
        RodCursor::position(self)
    }

    fn has_remaining_data(&self) -> bool {
        RodCursor::has_remaining_data(self)
    }
}

impl<P: std::fmt::Debug, T> std::fmt::Debug for RodCursor<P, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodCursor")
            .field("next", &self.next)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
