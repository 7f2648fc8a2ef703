//! Cursor pooling for reference-ordered datasets.

use std::sync::Arc;

use seekpool_common::Result;
use seekpool_resource_pool::{Candidate, PoolStrategy, ResourceId, SelectionPolicy};

use crate::dataset::OrderedDataset;

/// Pool strategy serving cursors of one [`OrderedDataset`].
///
/// Every new resource is a freshly opened, independent cursor. The cursor is
/// handed to consumers as is, and disposing of one simply drops it, letting
/// the underlying handles expire on their own.
pub struct RodPoolStrategy<D> {
    dataset: Arc<D>,
}

impl<D: OrderedDataset> RodPoolStrategy<D> {
    pub fn new(dataset: Arc<D>) -> RodPoolStrategy<D> {
        RodPoolStrategy { dataset }
    }

    pub fn dataset(&self) -> &Arc<D> {
        &self.dataset
    }
}

impl<D: OrderedDataset> PoolStrategy for RodPoolStrategy<D> {
    type Position = D::Position;
    type Resource = D::Cursor;
    type Iter = D::Cursor;

    fn create_new_resource(&self, position: &D::Position) -> Result<D::Cursor> {
        log::debug!(
            "opening cursor over '{}' for {position:?}",
            self.dataset.name()
        );
        self.dataset.open_cursor()
    }

    /// Picks an idle cursor that is at or before `position` according to the
    /// pool's [`SelectionPolicy`]. With the default first-fit policy this
    /// is the first such cursor in creation order, not the closest one.
    fn select_best_existing_resource(
        &self,
        policy: SelectionPolicy,
        position: &D::Position,
        candidates: &[Candidate<'_, D::Cursor>],
    ) -> Option<ResourceId> {
        policy.select(position, candidates)
    }

    fn create_iterator_from_resource(
        &self,
        _position: &D::Position,
        resource: D::Cursor,
    ) -> D::Cursor {
        resource
    }

    fn recover_resource(&self, iter: D::Cursor) -> D::Cursor {
        iter
    }

    fn close_resource(&self, resource: D::Cursor) -> Result<()> {
        drop(resource);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use seekpool_resource_pool::{PoolOptions, ResourcePool, SelectionPolicy};

    use super::RodPoolStrategy;
    use crate::tests::data::random_dataset;

    #[test]
    fn test_pool_options_select_the_policy() {
        let dataset = random_dataset("dense", 1000, 1.0, 0);
        let mut pool = ResourcePool::with_options(
            RodPoolStrategy::new(dataset),
            PoolOptions::default().with_selection(SelectionPolicy::NearestFit),
        );
        let mut r1 = pool.acquire(&0).unwrap();
        let mut r2 = pool.acquire(&0).unwrap();
        r1.seek_forward(&10);
        r1.next();
        r2.seek_forward(&20);
        r2.next();
        pool.release(r1).unwrap();
        pool.release(r2).unwrap();

        let lease = pool.acquire(&30).unwrap();
        assert_eq!(lease.resource_id().index(), 1);
        pool.release(lease).unwrap();

        // The default options keep first-fit.
        let dataset = random_dataset("dense", 100, 1.0, 0);
        let mut pool = ResourcePool::new(RodPoolStrategy::new(dataset));
        let mut r1 = pool.acquire(&0).unwrap();
        let mut r2 = pool.acquire(&0).unwrap();
        r1.seek_forward(&10);
        r1.next();
        r2.seek_forward(&20);
        r2.next();
        pool.release(r1).unwrap();
        pool.release(r2).unwrap();
        let lease = pool.acquire(&30).unwrap();
        assert_eq!(lease.resource_id().index(), 0);
        pool.release(lease).unwrap();
    }
}
