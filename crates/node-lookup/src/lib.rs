//! # Node Lookup
//!
//! Peer identities over the Kademlia XOR metric and the bounded,
//! distance-ordered candidate set an iterative node lookup converges with.
//!
//! The transport, the routing table and the lookup control loop live
//! elsewhere. This crate supplies the pieces they share:
//!
//! - **Domain Layer:** `NodeId`, `PeerIdentity`, XOR `Distance`, and
//!   `ClosestNodeSet` (visible window, contacted markers, termination signal)
//! - **Ports Layer:** `NodeMessageBuilder` for wire serialization and
//!   `ConfigProvider` for lookup parameters
//! - **Adapters Layer:** serde `WireNode` record and TOML configuration
//! - **Service Layer:** `SharedClosestNodeSet`, one lock around the whole set
//!   for multi-task drivers
//!
//! ## Example
//!
//! ```rust
//! use node_lookup::{ClosestNodeSet, IpAddr, NodeId, PeerIdentity, SocketAddr};
//!
//! let target = NodeId::zero();
//! let mut nearest = ClosestNodeSet::new(target, 2).unwrap();
//!
//! let peer = |last: u8| {
//!     let mut id = [0u8; 20];
//!     id[19] = last;
//!     PeerIdentity::new(NodeId::new(id), SocketAddr::new(IpAddr::v4(10, 0, 0, last), 18467))
//! };
//!
//! nearest.push([peer(8), peer(1), peer(4), peer(2)]).unwrap();
//!
//! // Query the two closest, then feed results back in
//! let round: Vec<PeerIdentity> = nearest.uncontacted_in_window().cloned().collect();
//! for p in &round {
//!     nearest.mark_contacted(p);
//! }
//! assert!(nearest.all_contacted());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Domain entities and services
pub use domain::{
    xor_distance, ClosestNodeSet, Distance, IpAddr, LookupConfig, LookupError, NatType, NodeId,
    PeerIdentity, SocketAddr, NODE_ID_LEN,
};

// Port traits
pub use ports::{ConfigProvider, NodeMessageBuilder};

// Adapters
pub use adapters::{
    ConfigError, StaticConfigProvider, TomlConfigProvider, WireError, WireNode, WireNodeBuilder,
};

// Service
pub use service::SharedClosestNodeSet;
