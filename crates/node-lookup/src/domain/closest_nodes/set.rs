//! Distance-ordered candidate set for one iterative lookup.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::domain::{LookupConfig, LookupError, NodeId, PeerIdentity};

use super::candidate::Candidate;

/// Peers ordered by XOR distance to a lookup target.
///
/// The backing min-heap may grow past `maxsize`; only the `maxsize` nearest
/// entries form the *visible window* that counting, iteration and the
/// termination check see. Removing entries can therefore surface peers that
/// were hidden behind the window. [`ClosestNodeSet::pop_nearest`],
/// [`ClosestNodeSet::contains`] and [`ClosestNodeSet::get_by_id`] reach past
/// the window into the whole collection.
///
/// # Invariants
/// - No two entries share a [`NodeId`]
/// - The contacted set only grows
/// - Window reads are fresh snapshots of the current state
#[derive(Debug, Clone)]
pub struct ClosestNodeSet {
    /// Lookup target every distance is measured from
    reference: NodeId,
    /// Min-heap over all stored candidates
    heap: BinaryHeap<Reverse<Candidate>>,
    /// Ids present in `heap`, for deduplicating pushes
    members: HashSet<NodeId>,
    /// Ids an RPC has been sent to during this lookup
    contacted: HashSet<NodeId>,
    /// Size of the visible window
    maxsize: usize,
}

impl ClosestNodeSet {
    /// Create an empty set anchored at `reference`.
    ///
    /// # Errors
    /// `InvalidCapacity` when `maxsize` is zero.
    pub fn new(reference: NodeId, maxsize: usize) -> Result<Self, LookupError> {
        if maxsize == 0 {
            return Err(LookupError::InvalidCapacity { maxsize });
        }
        Ok(Self {
            reference,
            heap: BinaryHeap::new(),
            members: HashSet::new(),
            contacted: HashSet::new(),
            maxsize,
        })
    }

    /// Create a set whose window is the configured `ksize`.
    ///
    /// Only `ksize` matters here; `alpha` and `max_rounds` belong to the
    /// driver and are checked by [`LookupConfig::validate`].
    ///
    /// # Errors
    /// `InvalidCapacity` when `ksize` is zero.
    pub fn from_config(reference: NodeId, config: &LookupConfig) -> Result<Self, LookupError> {
        Self::new(reference, config.ksize)
    }

    /// Lookup target all distances are measured from.
    pub fn reference(&self) -> &NodeId {
        &self.reference
    }

    /// Size of the visible window.
    pub fn maxsize(&self) -> usize {
        self.maxsize
    }

    /// Insert peers not already present anywhere in the set.
    ///
    /// Accepts a single peer (`[peer]`, `Some(peer)`) or any collection.
    /// Returns how many were new.
    ///
    /// # Errors
    /// `IdentifierLengthMismatch` if any peer's id differs in width from the
    /// reference. The batch is checked up front, so a failed push changes
    /// nothing.
    pub fn push<I>(&mut self, peers: I) -> Result<usize, LookupError>
    where
        I: IntoIterator<Item = PeerIdentity>,
    {
        let candidates = peers
            .into_iter()
            .map(|peer| {
                let distance = self.reference.distance_to(peer.node_id())?;
                Ok(Candidate { distance, peer })
            })
            .collect::<Result<Vec<_>, LookupError>>()?;

        let mut inserted = 0;
        for candidate in candidates {
            if !self.members.insert(candidate.peer.node_id().clone()) {
                trace!(node = %candidate.peer.node_id(), "candidate already present");
                continue;
            }
            self.heap.push(Reverse(candidate));
            inserted += 1;
        }

        debug!(inserted, total = self.heap.len(), "pushed lookup candidates");
        Ok(inserted)
    }

    /// Remove and return the globally nearest entry.
    ///
    /// Not bounded by the visible window.
    pub fn pop_nearest(&mut self) -> Option<PeerIdentity> {
        let Reverse(candidate) = self.heap.pop()?;
        self.members.remove(candidate.peer.node_id());
        trace!(node = %candidate.peer.node_id(), "popped nearest candidate");
        Some(candidate.peer)
    }

    /// Drop every entry whose id is in `ids` by rebuilding the heap.
    ///
    /// Returns the number of entries removed. Hidden entries move into the
    /// window as nearer ones disappear.
    pub fn remove_ids<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        let doomed: HashSet<&NodeId> = ids.into_iter().collect();
        if doomed.is_empty() {
            return 0;
        }

        let before = self.heap.len();
        self.heap = std::mem::take(&mut self.heap)
            .into_vec()
            .into_iter()
            .filter(|Reverse(candidate)| !doomed.contains(candidate.peer.node_id()))
            .collect();
        self.members.retain(|id| !doomed.contains(id));

        let removed = before - self.heap.len();
        debug!(removed, total = self.heap.len(), "rebuilt candidate heap");
        removed
    }

    /// Record that `peer` has been queried. Idempotent.
    pub fn mark_contacted(&mut self, peer: &PeerIdentity) {
        if self.contacted.insert(peer.node_id().clone()) {
            trace!(node = %peer.node_id(), "marked contacted");
        }
    }

    /// True if `id` was marked contacted, even if since removed.
    pub fn is_contacted(&self, id: &NodeId) -> bool {
        self.contacted.contains(id)
    }

    /// Find a stored peer by id, looking past the window.
    pub fn get_by_id(&self, id: &NodeId) -> Option<&PeerIdentity> {
        self.heap
            .iter()
            .map(|Reverse(candidate)| &candidate.peer)
            .find(|peer| peer.node_id() == id)
    }

    /// The `count()` nearest peers in ascending distance.
    ///
    /// Each call orders the current entries afresh.
    pub fn visible_window(&self) -> impl Iterator<Item = &PeerIdentity> + '_ {
        self.window().into_iter().map(|candidate| &candidate.peer)
    }

    /// Visible peers that have not been contacted yet, nearest first.
    pub fn uncontacted_in_window(&self) -> impl Iterator<Item = &PeerIdentity> + '_ {
        self.visible_window()
            .filter(|peer| !self.contacted.contains(peer.node_id()))
    }

    /// Termination signal for the lookup driver.
    pub fn all_contacted(&self) -> bool {
        self.uncontacted_in_window().next().is_none()
    }

    /// Ids of the visible window, nearest first.
    pub fn visible_ids(&self) -> Vec<NodeId> {
        self.visible_window()
            .map(|peer| peer.node_id().clone())
            .collect()
    }

    /// True if a peer with the same id is stored anywhere in the set.
    pub fn contains(&self, peer: &PeerIdentity) -> bool {
        self.contains_id(peer.node_id())
    }

    /// True if an entry with `id` is stored anywhere in the set.
    pub fn contains_id(&self, id: &NodeId) -> bool {
        self.members.contains(id)
    }

    /// Externally visible size: `min(total_len(), maxsize())`.
    pub fn count(&self) -> usize {
        self.heap.len().min(self.maxsize)
    }

    /// Same as [`ClosestNodeSet::count`].
    pub fn len(&self) -> usize {
        self.count()
    }

    /// True when nothing is stored, hidden entries included.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of stored entries including those hidden behind the window.
    pub fn total_len(&self) -> usize {
        self.heap.len()
    }

    fn window(&self) -> Vec<&Candidate> {
        let mut ordered: Vec<&Candidate> = self.heap.iter().map(|Reverse(c)| c).collect();
        if ordered.len() > self.maxsize {
            ordered.select_nth_unstable(self.maxsize - 1);
            ordered.truncate(self.maxsize);
        }
        ordered.sort_unstable();
        ordered
    }
}
