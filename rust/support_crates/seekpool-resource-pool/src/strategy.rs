//! The per-domain operations plugged into a [`ResourcePool`](crate::ResourcePool).

use std::fmt;

use seekpool_common::Result;

use crate::selection::SelectionPolicy;

/// Identifies a resource slot within one pool.
///
/// Ids are assigned in creation order, so comparing two ids of the same pool
/// compares their insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub(crate) usize);

impl ResourceId {
    /// Zero-based creation index of the resource within its pool.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An available resource offered to
/// [`PoolStrategy::select_best_existing_resource`].
pub struct Candidate<'a, R> {
    id: ResourceId,
    resource: &'a R,
}

impl<'a, R> Candidate<'a, R> {
    pub(crate) fn new(id: ResourceId, resource: &'a R) -> Candidate<'a, R> {
        Candidate { id, resource }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn resource(&self) -> &'a R {
        self.resource
    }
}

impl<R> Clone for Candidate<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Candidate<'_, R> {}

/// The capability set a domain supplies to a pool.
///
/// The pool owns the bookkeeping (which resources exist, which are checked
/// out); the strategy decides how resources are built, reused, exposed to
/// consumers and disposed of.
pub trait PoolStrategy {
    /// The position type requests are keyed by.
    type Position: fmt::Debug;

    /// The pooled resource, typically a cursor.
    type Resource;

    /// What consumers receive from an acquire.
    type Iter;

    /// Builds a brand-new resource for a request at `position`.
    ///
    /// May perform I/O and may fail; the pool propagates the error unchanged
    /// and registers nothing.
    fn create_new_resource(&self, position: &Self::Position) -> Result<Self::Resource>;

    /// Picks one of the available `candidates` to serve a request at
    /// `position`, or `None` if none of them can.
    ///
    /// `policy` is the pool's configured [`SelectionPolicy`]. `candidates` are
    /// in insertion order. The returned id must be one of the candidates' ids.
    fn select_best_existing_resource(
        &self,
        policy: SelectionPolicy,
        position: &Self::Position,
        candidates: &[Candidate<'_, Self::Resource>],
    ) -> Option<ResourceId>;

    /// Adapts a checked-out resource into the consumer-facing type.
    fn create_iterator_from_resource(
        &self,
        position: &Self::Position,
        resource: Self::Resource,
    ) -> Self::Iter;

    /// Inverse of [`create_iterator_from_resource`](Self::create_iterator_from_resource),
    /// used on release to take the resource back.
    fn recover_resource(&self, iter: Self::Iter) -> Self::Resource;

    /// Disposes of a resource. Only called when the pool shuts down (or when a
    /// lease outstanding at shutdown is released).
    fn close_resource(&self, resource: Self::Resource) -> Result<()>;
}
