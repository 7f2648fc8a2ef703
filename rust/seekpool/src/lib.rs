//! # Seekpool: positional cursor reuse for ordered data
//!
//! Seekpool serves traversals of reference-ordered datasets shard by shard.
//! Instead of reopening a dataset and scanning it from the start for every
//! shard, each data source keeps a pool of forward-only cursors and hands out
//! one that is already positioned at or before the requested shard.
//!
//! ## Module Organization
//!
//! * [`common`] - Error types shared across components
//! * [`resource_pool`] - The generic pool engine and its reuse policies
//! * [`rod`] - Reference-ordered datasets, cursors and data sources

pub use seekpool_common as common;
pub use seekpool_resource_pool as resource_pool;
pub use seekpool_rod as rod;
