//! # Shared Lookup State
//!
//! Lock-guarded access to a [`crate::ClosestNodeSet`] for drivers that query
//! peers from several threads or tasks at once. Drivers that confine the set
//! to one coordinating task and receive results over a channel can use the
//! domain type directly.

mod shared;

pub use shared::SharedClosestNodeSet;
