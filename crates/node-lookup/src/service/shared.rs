use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{ClosestNodeSet, LookupConfig, LookupError, NodeId, PeerIdentity};

/// A [`ClosestNodeSet`] behind a single mutex.
///
/// Every method is one critical section over the whole set (heap, membership
/// index and contacted markers together). Reads return owned snapshots so no
/// guard outlives the call. Sequences that must be atomic as a whole go
/// through [`SharedClosestNodeSet::with`].
///
/// Cloning yields another handle to the same set.
#[derive(Debug, Clone)]
pub struct SharedClosestNodeSet {
    inner: Arc<Mutex<ClosestNodeSet>>,
}

impl SharedClosestNodeSet {
    pub fn new(reference: NodeId, maxsize: usize) -> Result<Self, LookupError> {
        ClosestNodeSet::new(reference, maxsize).map(Self::from)
    }

    pub fn from_config(reference: NodeId, config: &LookupConfig) -> Result<Self, LookupError> {
        ClosestNodeSet::from_config(reference, config).map(Self::from)
    }

    /// Run `f` with exclusive access to the set.
    pub fn with<R>(&self, f: impl FnOnce(&mut ClosestNodeSet) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    pub fn push<I>(&self, peers: I) -> Result<usize, LookupError>
    where
        I: IntoIterator<Item = PeerIdentity>,
    {
        self.inner.lock().push(peers)
    }

    pub fn pop_nearest(&self) -> Option<PeerIdentity> {
        self.inner.lock().pop_nearest()
    }

    pub fn remove_ids<'a, I>(&self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        self.inner.lock().remove_ids(ids)
    }

    pub fn mark_contacted(&self, peer: &PeerIdentity) {
        self.inner.lock().mark_contacted(peer);
    }

    pub fn get_by_id(&self, id: &NodeId) -> Option<PeerIdentity> {
        self.inner.lock().get_by_id(id).cloned()
    }

    pub fn visible_window(&self) -> Vec<PeerIdentity> {
        self.inner.lock().visible_window().cloned().collect()
    }

    pub fn uncontacted_in_window(&self) -> Vec<PeerIdentity> {
        self.inner.lock().uncontacted_in_window().cloned().collect()
    }

    /// Take up to `limit` uncontacted window peers, nearest first, and mark
    /// them contacted in the same critical section.
    ///
    /// Concurrent callers never receive the same peer.
    pub fn claim_uncontacted(&self, limit: usize) -> Vec<PeerIdentity> {
        self.with(|set| {
            let batch: Vec<PeerIdentity> =
                set.uncontacted_in_window().take(limit).cloned().collect();
            for peer in &batch {
                set.mark_contacted(peer);
            }
            batch
        })
    }

    pub fn all_contacted(&self) -> bool {
        self.inner.lock().all_contacted()
    }

    pub fn contains(&self, peer: &PeerIdentity) -> bool {
        self.inner.lock().contains(peer)
    }

    pub fn count(&self) -> usize {
        self.inner.lock().count()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ClosestNodeSet {
        self.inner.lock().clone()
    }
}

impl From<ClosestNodeSet> for SharedClosestNodeSet {
    fn from(set: ClosestNodeSet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(set)),
        }
    }
}
