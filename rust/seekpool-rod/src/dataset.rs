//! Reference-ordered datasets.

use std::sync::Arc;

use seekpool_common::{Result, error::Error};
use seekpool_resource_pool::{Position, PositionedResource};

use crate::cursor::RodCursor;

/// A named dataset whose records are sorted by position, read through
/// independent forward-only cursors.
pub trait OrderedDataset {
    type Position: Position;
    type Cursor: PositionedResource<Position = Self::Position>;

    /// Stable name of the dataset, used to tell sources apart when several
    /// are scanned together.
    fn name(&self) -> &str;

    /// Opens a new cursor positioned before the first record.
    ///
    /// Every call returns a cursor that is independent of all others.
    fn open_cursor(&self) -> Result<Self::Cursor>;
}

impl<D: OrderedDataset + ?Sized> OrderedDataset for Arc<D> {
    type Position = D::Position;
    type Cursor = D::Cursor;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn open_cursor(&self) -> Result<Self::Cursor> {
        (**self).open_cursor()
    }
}

/// A single record of a reference-ordered dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RodRecord<P, T> {
    pub position: P,
    pub value: T,
}

impl<P, T> RodRecord<P, T> {
    pub fn new(position: P, value: T) -> RodRecord<P, T> {
        RodRecord { position, value }
    }
}

/// An immutable, in-memory reference-ordered dataset.
///
/// Cloning is cheap: clones share the record storage.
#[derive(Debug)]
pub struct MemoryDataset<P, T>(Arc<MemoryDatasetInner<P, T>>);

#[derive(Debug)]
pub(crate) struct MemoryDatasetInner<P, T> {
    name: String,
    records: Vec<RodRecord<P, T>>,
}

impl<P, T> MemoryDatasetInner<P, T> {
    pub(crate) fn records(&self) -> &[RodRecord<P, T>] {
        &self.records
    }
}

impl<P: Position, T: Clone> MemoryDataset<P, T> {
    /// Creates a dataset from records already sorted by position.
    ///
    /// Records sharing a position are allowed; a record positioned before its
    /// predecessor is rejected.
    pub fn new(
        name: impl Into<String>,
        records: Vec<RodRecord<P, T>>,
    ) -> Result<MemoryDataset<P, T>> {
        let name = name.into();
        if let Some(i) = records
            .windows(2)
            .position(|pair| pair[1].position.is_before(&pair[0].position))
        {
            return Err(Error::invalid_arg(
                "records",
                format!(
                    "dataset '{name}' is not sorted: {:?} follows {:?}",
                    records[i + 1].position,
                    records[i].position
                ),
            ));
        }
        Ok(MemoryDataset(Arc::new(MemoryDatasetInner { name, records })))
    }

    /// Creates a dataset from records in any order.
    ///
    /// The sort is stable, so records sharing a position keep their relative
    /// order.
    pub fn from_unsorted(
        name: impl Into<String>,
        mut records: Vec<RodRecord<P, T>>,
    ) -> MemoryDataset<P, T> {
        records.sort_by(|a, b| a.position.cmp(&b.position));
        MemoryDataset(Arc::new(MemoryDatasetInner {
            name: name.into(),
            records,
        }))
    }

    pub fn len(&self) -> usize {
        self.0.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.records.is_empty()
    }

    pub fn records(&self) -> &[RodRecord<P, T>] {
        self.0.records()
    }
}

impl<P, T> Clone for MemoryDataset<P, T> {
    fn clone(&self) -> Self {
        MemoryDataset(self.0.clone())
    }
}

impl<P: Position, T: Clone> OrderedDataset for MemoryDataset<P, T> {
    type Position = P;
    type Cursor = RodCursor<P, T>;

    fn name(&self) -> &str {
        &self.0.name
    }

    fn open_cursor(&self) -> Result<RodCursor<P, T>> {
        Ok(RodCursor::new(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use seekpool_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_sorted_construction() {
        let records = vec![
            RodRecord::new(1u64, "a"),
            RodRecord::new(1, "b"),
            RodRecord::new(4, "c"),
        ];
        let dataset = MemoryDataset::new("sites", records).unwrap();
        assert_eq!(dataset.name(), "sites");
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());

        let err = MemoryDataset::new(
            "sites",
            vec![RodRecord::new(5u64, "a"), RodRecord::new(2, "b")],
        )
        .unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "records");
                assert_eq!(message, "dataset 'sites' is not sorted: 2 follows 5");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_from_unsorted_is_stable() {
        let dataset = MemoryDataset::from_unsorted(
            "sites",
            vec![
                RodRecord::new(9u64, 'x'),
                RodRecord::new(3, 'a'),
                RodRecord::new(3, 'b'),
            ],
        );
        let values = dataset.records().iter().map(|r| r.value).collect::<String>();
        assert_eq!(values, "abx");
    }

    #[test]
    fn test_cursors_are_independent() {
        let dataset = MemoryDataset::from_unsorted(
            "sites",
            (0u64..10).map(|i| RodRecord::new(i, i * 2)).collect(),
        );
        let shared = Arc::new(dataset.clone());
        let mut first = shared.open_cursor().unwrap();
        let mut second = dataset.open_cursor().unwrap();
        assert_eq!(first.nth(4).map(|r| r.value), Some(8));
        assert_eq!(second.next().map(|r| r.value), Some(0));
        assert_eq!(shared.name(), dataset.name());
    }
}
