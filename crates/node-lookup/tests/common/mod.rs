#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;

use node_lookup::{
    IpAddr, LookupConfig, NodeId, PeerIdentity, SharedClosestNodeSet, SocketAddr, NODE_ID_LEN,
};

pub fn make_node_id(value: u64) -> NodeId {
    let mut bytes = [0u8; NODE_ID_LEN];
    bytes[NODE_ID_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    NodeId::new(bytes)
}

pub fn make_peer(value: u64) -> PeerIdentity {
    PeerIdentity::new(
        make_node_id(value),
        SocketAddr::new(IpAddr::v4(10, 0, (value >> 8) as u8, value as u8), 18467),
    )
}

pub fn random_peer<R: Rng>(rng: &mut R) -> PeerIdentity {
    let id: [u8; NODE_ID_LEN] = rng.gen();
    PeerIdentity::new(
        NodeId::new(id),
        SocketAddr::new(IpAddr::v4(10, rng.gen(), rng.gen(), rng.gen()), 18467),
    )
}

#[derive(Debug)]
pub struct Unreachable;

/// In-memory stand-in for the FIND_NODE RPC.
#[derive(Default)]
pub struct SimulatedNetwork {
    contacts: HashMap<NodeId, Vec<PeerIdentity>>,
    offline: HashSet<NodeId>,
}

impl SimulatedNetwork {
    pub fn add_node(&mut self, node: &PeerIdentity, contacts: Vec<PeerIdentity>) {
        self.contacts.insert(node.node_id().clone(), contacts);
    }

    pub fn set_offline(&mut self, node: &PeerIdentity) {
        self.offline.insert(node.node_id().clone());
    }

    pub fn is_online(&self, id: &NodeId) -> bool {
        self.contacts.contains_key(id) && !self.offline.contains(id)
    }

    pub async fn find_node(&self, to: &PeerIdentity) -> Result<Vec<PeerIdentity>, Unreachable> {
        tokio::task::yield_now().await;
        if self.offline.contains(to.node_id()) {
            return Err(Unreachable);
        }
        self.contacts.get(to.node_id()).cloned().ok_or(Unreachable)
    }
}

pub struct LookupOutcome {
    pub nearest: SharedClosestNodeSet,
    pub rounds: usize,
}

/// Minimal iterative FIND_NODE driver.
///
/// Each round claims `alpha` uncontacted window peers and queries them on
/// separate tasks. Tasks feed replies straight into the shared set; peers that
/// fail are removed and remembered so later replies cannot re-add them.
pub async fn run_lookup(
    network: Arc<SimulatedNetwork>,
    target: NodeId,
    seeds: Vec<PeerIdentity>,
    config: &LookupConfig,
) -> LookupOutcome {
    let nearest = SharedClosestNodeSet::from_config(target, config).unwrap();
    nearest.push(seeds).unwrap();
    let dead: Arc<Mutex<HashSet<NodeId>>> = Arc::default();

    let mut rounds = 0;
    while !nearest.all_contacted() && rounds < config.max_rounds {
        rounds += 1;
        let tasks: Vec<_> = nearest
            .claim_uncontacted(config.alpha)
            .into_iter()
            .map(|peer| {
                let network = Arc::clone(&network);
                let nearest = nearest.clone();
                let dead = Arc::clone(&dead);
                tokio::spawn(async move {
                    match network.find_node(&peer).await {
                        Ok(contacts) => nearest.with(|set| {
                            let dead = dead.lock();
                            set.push(contacts.into_iter().filter(|c| !dead.contains(c.node_id())))
                                .unwrap();
                        }),
                        Err(Unreachable) => nearest.with(|set| {
                            dead.lock().insert(peer.node_id().clone());
                            set.remove_ids([peer.node_id()]);
                        }),
                    }
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }
    }

    LookupOutcome { nearest, rounds }
}
