//! A reuse-first pool of forward-only cursors over ordered data.
//!
//! Opening a cursor over an ordered dataset and scanning it from the start is
//! expensive. [`ResourcePool`] keeps every cursor it has ever created and, when
//! asked for a cursor at some position, hands out an idle one that is still
//! positioned before that point, so the caller only has to skip forward.
//! A new cursor is created only when no idle one qualifies.
//!
//! # Key Types
//!
//! - [`ResourcePool`] - The pool engine: acquire, release and shutdown
//! - [`PoolStrategy`] - The four per-domain operations injected into the pool
//! - [`PositionedResource`] - What a cursor must report for positional reuse
//! - [`SelectionPolicy`] - First-fit (default) or nearest-fit reuse
//! - [`Lease`] - A checked-out resource, returned to the pool on release
//!
//! The pool is not synchronized: give each worker its own pool.

pub mod options;
pub mod pool;
pub mod position;
pub mod selection;
pub mod strategy;

pub use options::PoolOptions;
pub use pool::{Lease, PoolStats, ResourcePool, ShutdownReport};
pub use position::{Position, PositionedResource};
pub use selection::{SelectionPolicy, is_eligible, select_first_fit, select_nearest_fit};
pub use strategy::{Candidate, PoolStrategy, ResourceId};
