use std::sync::Arc;

use seekpool_common::Result;
use seekpool_resource_pool::{Lease, PoolOptions, ResourcePool, ShutdownReport};

use crate::{dataset::OrderedDataset, pool::RodPoolStrategy, shard::Shard};

/// A data source providing a single reference-ordered dataset to a traversal.
///
/// Each source owns one cursor pool. [`seek`](Self::seek) hands out a cursor
/// that is at or before the start of the requested shard; the caller advances
/// it as it consumes the shard and must give it back with
/// [`close`](Self::close) so the next shard can pick up where it stopped.
///
/// A source is meant for one sequential traversal. Parallel workers should
/// each build their own source over the shared dataset.
pub struct ReferenceOrderedDataSource<D: OrderedDataset> {
    pool: ResourcePool<RodPoolStrategy<D>>,
}

impl<D: OrderedDataset> ReferenceOrderedDataSource<D> {
    /// Creates a source with first-fit cursor reuse, logging under the
    /// dataset's name.
    pub fn new(dataset: Arc<D>) -> ReferenceOrderedDataSource<D> {
        let options = PoolOptions::default().with_label(dataset.name());
        Self::with_options(dataset, options)
    }

    pub fn with_options(dataset: Arc<D>, options: PoolOptions) -> ReferenceOrderedDataSource<D> {
        let strategy = RodPoolStrategy::new(dataset);
        ReferenceOrderedDataSource {
            pool: ResourcePool::with_options(strategy, options),
        }
    }

    /// Name of the underlying dataset.
    pub fn name(&self) -> &str {
        self.dataset().name()
    }

    pub fn dataset(&self) -> &Arc<D> {
        self.pool.strategy().dataset()
    }

    /// Returns a cursor able to read the data starting at the shard's start.
    ///
    /// The cursor is not advanced to the shard; it is only guaranteed not to
    /// be past it.
    pub fn seek<S>(&mut self, shard: &S) -> Result<Lease<D::Cursor>>
    where
        S: Shard<Position = D::Position> + ?Sized,
    {
        self.pool.acquire(&shard.start())
    }

    /// Returns a cursor obtained from [`seek`](Self::seek) to the pool.
    pub fn close(&mut self, cursor: Lease<D::Cursor>) -> Result<()> {
        self.pool.release(cursor)
    }

    /// Disposes of the pooled cursors. Later seeks fail.
    pub fn shutdown(&mut self) -> Result<ShutdownReport> {
        self.pool.shutdown()
    }

    pub fn pool(&self) -> &ResourcePool<RodPoolStrategy<D>> {
        &self.pool
    }
}

impl<D: OrderedDataset> std::fmt::Debug for ReferenceOrderedDataSource<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceOrderedDataSource")
            .field("name", &self.name())
            .field("pool", &self.pool)
            .finish()
    }
}
