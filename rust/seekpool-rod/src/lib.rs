//! Reference-ordered data sources backed by a positional cursor pool.
//!
//! A reference-ordered dataset is a named sequence of records sorted by
//! [`Locus`] (or any other ordered position). A traversal visits the dataset
//! shard by shard in increasing order; [`ReferenceOrderedDataSource`] serves
//! each shard from a [`ResourcePool`](seekpool_resource_pool::ResourcePool)
//! of cursors, so consecutive shards reuse one cursor that only moves forward
//! instead of rescanning from the start.

pub mod cursor;
pub mod dataset;
pub mod locus;
pub mod pool;
pub mod shard;
pub mod source;

#[cfg(test)]
mod tests;

pub use cursor::RodCursor;
pub use dataset::{MemoryDataset, OrderedDataset, RodRecord};
pub use locus::Locus;
pub use pool::RodPoolStrategy;
pub use shard::{Interval, Shard};
pub use source::ReferenceOrderedDataSource;
