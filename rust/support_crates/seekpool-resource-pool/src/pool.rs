//! The pool engine.

use std::{
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicU64, Ordering},
};

use seekpool_common::{Result, error::Error};

use crate::{
    options::PoolOptions,
    position::PositionedResource,
    strategy::{Candidate, PoolStrategy, ResourceId},
};

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// A reuse-first pool of positioned resources for one dataset.
///
/// Every resource the pool creates stays in its arena for the life of the
/// pool, tagged as available or checked out. An [`acquire`](Self::acquire)
/// asks the strategy to pick among the available resources and only creates a
/// new one when nothing qualifies. There is no eviction: the resource count
/// only grows until [`shutdown`](Self::shutdown).
///
/// The pool is not synchronized. Concurrent traversals should each use their
/// own pool.
pub struct ResourcePool<S: PoolStrategy> {
    id: u64,
    strategy: S,
    options: PoolOptions,
    /// Resources in creation order, indexed by `ResourceId`.
    slots: Vec<Slot<S::Resource>>,
    stats: PoolStats,
    shut_down: bool,
}

enum Slot<R> {
    Available(R),
    /// The resource is out on a lease.
    CheckedOut,
    /// Checked out when the pool shut down; disposed on release.
    Retired,
    Disposed,
}

/// Counters describing a pool's activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Resources built by the strategy.
    pub created: u64,
    /// Acquires served by an existing resource.
    pub reused: u64,
    /// Successful releases.
    pub released: u64,
    /// Resources handed to `close_resource`.
    pub disposed: u64,
}

/// Outcome of [`ResourcePool::shutdown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Available resources that were disposed.
    pub disposed: usize,
    /// Resources still checked out, disposed when their lease is released.
    pub outstanding: usize,
}

impl<S: PoolStrategy> ResourcePool<S> {
    pub fn new(strategy: S) -> ResourcePool<S> {
        Self::with_options(strategy, PoolOptions::default())
    }

    pub fn with_options(strategy: S, options: PoolOptions) -> ResourcePool<S> {
        ResourcePool {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            strategy,
            options,
            slots: Vec::new(),
            stats: PoolStats::default(),
            shut_down: false,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn options(&self) -> &PoolOptions {
        &self.options
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Number of resources the pool has created and not yet disposed.
    pub fn resource_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, Slot::Disposed))
            .count()
    }

    pub fn available_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Available(_)))
            .count()
    }

    pub fn checked_out_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::CheckedOut | Slot::Retired))
            .count()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Checks out a resource able to serve a request at `position`.
    ///
    /// The available resources are offered to the strategy in creation order.
    /// If it selects one, that resource is checked out; otherwise a new one is
    /// created and appended to the pool. A creation failure is returned as is
    /// and leaves the pool untouched.
    pub fn acquire(&mut self, position: &S::Position) -> Result<Lease<S::Iter>> {
        if self.shut_down {
            return Err(Error::invalid_operation(format!(
                "acquire on shut down pool '{}'",
                self.options.label
            )));
        }

        let candidates = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Available(resource) => Some(Candidate::new(ResourceId(index), resource)),
                _ => None,
            })
            .collect::<Vec<_>>();
        let selected = self.strategy.select_best_existing_resource(
            self.options.selection,
            position,
            &candidates,
        );
        if let Some(id) = selected {
            if !candidates.iter().any(|c| c.id() == id) {
                return Err(Error::invalid_operation(format!(
                    "strategy of pool '{}' selected resource {id}, which is not available",
                    self.options.label
                )));
            }
        }
        let candidate_count = candidates.len();

        let (resource_id, resource) = match selected {
            Some(id) => {
                let resource = self.check_out(id)?;
                self.stats.reused += 1;
                log::debug!(
                    "pool '{}': reusing resource {id} for {position:?} ({candidate_count} available)",
                    self.options.label
                );
                (id, resource)
            }
            None => {
                let resource = self.strategy.create_new_resource(position)?;
                let id = ResourceId(self.slots.len());
                self.slots.push(Slot::CheckedOut);
                self.stats.created += 1;
                log::debug!(
                    "pool '{}': created resource {id} for {position:?} ({candidate_count} available, none eligible)",
                    self.options.label
                );
                (id, resource)
            }
        };

        let iter = self
            .strategy
            .create_iterator_from_resource(position, resource);
        Ok(Lease {
            pool_id: self.id,
            resource_id,
            iter,
        })
    }

    /// Returns a leased resource to the pool, making it available to later
    /// acquires.
    ///
    /// A lease issued by another pool is rejected with an invalid-release
    /// error, as is a lease whose resource is not checked out. A lease that was
    /// outstanding when the pool shut down is disposed instead.
    pub fn release(&mut self, lease: Lease<S::Iter>) -> Result<()> {
        let Lease {
            pool_id,
            resource_id,
            iter,
        } = lease;
        if pool_id != self.id {
            return Err(Error::invalid_release(format!(
                "resource {resource_id} belongs to another pool, not '{}'",
                self.options.label
            )));
        }
        let Some(slot) = self.slots.get_mut(resource_id.0) else {
            return Err(Error::invalid_release(format!(
                "resource {resource_id} is unknown to pool '{}'",
                self.options.label
            )));
        };

        match *slot {
            Slot::CheckedOut => {
                *slot = Slot::Available(self.strategy.recover_resource(iter));
                self.stats.released += 1;
                log::trace!(
                    "pool '{}': resource {resource_id} released",
                    self.options.label
                );
                Ok(())
            }
            Slot::Retired => {
                *slot = Slot::Disposed;
                self.stats.released += 1;
                self.stats.disposed += 1;
                log::debug!(
                    "pool '{}': disposing resource {resource_id} released after shutdown",
                    self.options.label
                );
                let resource = self.strategy.recover_resource(iter);
                self.strategy.close_resource(resource)
            }
            Slot::Available(_) | Slot::Disposed => Err(Error::invalid_release(format!(
                "resource {resource_id} of pool '{}' is not checked out",
                self.options.label
            ))),
        }
    }

    /// Disposes of every available resource and closes the pool to further
    /// acquires.
    ///
    /// Resources still out on a lease are disposed when released. All
    /// available resources are handed to the strategy even if some of them
    /// fail to close; the first failure is returned. Calling this again is a
    /// no-op.
    pub fn shutdown(&mut self) -> Result<ShutdownReport> {
        if self.shut_down {
            return Ok(ShutdownReport::default());
        }
        self.shut_down = true;

        let mut report = ShutdownReport::default();
        let mut first_error = None;
        for slot in self.slots.iter_mut() {
            match std::mem::replace(slot, Slot::Disposed) {
                Slot::Available(resource) => {
                    report.disposed += 1;
                    if let Err(e) = self.strategy.close_resource(resource) {
                        first_error.get_or_insert(e);
                    }
                }
                Slot::CheckedOut => {
                    *slot = Slot::Retired;
                    report.outstanding += 1;
                }
                other => *slot = other,
            }
        }
        self.stats.disposed += report.disposed as u64;

        log::debug!(
            "pool '{}': shut down, disposed {} resources",
            self.options.label,
            report.disposed
        );
        if report.outstanding > 0 {
            log::warn!(
                "pool '{}': {} resources still checked out at shutdown",
                self.options.label,
                report.outstanding
            );
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }

    fn check_out(&mut self, id: ResourceId) -> Result<S::Resource> {
        let slot = &mut self.slots[id.0];
        match std::mem::replace(slot, Slot::CheckedOut) {
            Slot::Available(resource) => Ok(resource),
            other => {
                *slot = other;
                Err(Error::invalid_operation(format!(
                    "check out of unavailable resource {id}"
                )))
            }
        }
    }
}

impl<S: PoolStrategy> Drop for ResourcePool<S> {
    fn drop(&mut self) {
        if self.shut_down {
            return;
        }
        for slot in self.slots.iter_mut() {
            if let Slot::Available(resource) = std::mem::replace(slot, Slot::Disposed) {
                if let Err(e) = self.strategy.close_resource(resource) {
                    log::warn!(
                        "pool '{}': failed to dispose resource on drop: {e}",
                        self.options.label
                    );
                }
            }
        }
    }
}

impl<S: PoolStrategy> std::fmt::Debug for ResourcePool<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcePool")
            .field("label", &self.options.label)
            .field("resources", &self.resource_count())
            .field("available", &self.available_count())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// A checked-out resource, as adapted by the pool's strategy.
///
/// Dereferences to the adapted value and forwards iteration to it. Hand it
/// back with [`ResourcePool::release`] on every exit path; a dropped lease
/// leaves its resource checked out for good.
#[must_use = "a lease must be released back to its pool"]
pub struct Lease<I> {
    pool_id: u64,
    resource_id: ResourceId,
    iter: I,
}

impl<I> Lease<I> {
    pub fn resource_id(&self) -> ResourceId {
        self.resource_id
    }
}

impl<I> Deref for Lease<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.iter
    }
}

impl<I> DerefMut for Lease<I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut self.iter
    }
}

impl<I: Iterator> Iterator for Lease<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: PositionedResource> PositionedResource for Lease<I> {
    type Position = I::Position;

    fn position(&self) -> Option<&Self::Position> {
        self.iter.position()
    }

    fn has_remaining_data(&self) -> bool {
        self.iter.has_remaining_data()
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for Lease<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lease")
            .field("resource_id", &self.resource_id)
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}
