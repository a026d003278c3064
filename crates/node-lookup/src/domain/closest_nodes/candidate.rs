//! Heap entry pairing a peer with its distance to the lookup reference.

use std::cmp::Ordering;

use crate::domain::{Distance, PeerIdentity};

/// A peer keyed by its XOR distance to the set's reference.
///
/// XOR against a single reference is injective, so two distinct ids never
/// share a distance and ordering by distance alone is total over a set.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) distance: Distance,
    pub(crate) peer: PeerIdentity,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}
