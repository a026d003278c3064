//! Closest-Node Candidate Set
//!
//! The bounded, distance-ordered working set an iterative lookup reads its
//! next queries from and feeds responses back into.

mod candidate;
mod set;

pub use set::ClosestNodeSet;
