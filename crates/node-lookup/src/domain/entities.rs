//! Core Domain Entities for Node Lookup
//!
//! A peer is identified by its [`NodeId`] alone. Addresses and metadata travel
//! with the identity but never take part in membership decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{xor_distance, Distance, LookupError};
use crate::ports::NodeMessageBuilder;

/// Width of a standard node identifier in bytes (160 bits).
pub const NODE_ID_LEN: usize = 20;

/// Fixed-width node identifier in the XOR metric space.
///
/// The bytes are read as a big-endian unsigned integer for distance
/// arithmetic. Identifiers of any width can be represented so that ids decoded
/// from the wire are checked at distance time rather than silently truncated.
///
/// # Security
///
/// Equality runs in constant time over the identifier bytes so that lookups
/// keyed by a remote-supplied id do not leak how many leading bytes matched.
// SAFETY: derived_hash_with_manual_eq is intentionally allowed here.
// The manual PartialEq compares the same bytes the derived Hash covers,
// so equal ids always hash equally.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Clone, Hash)]
pub struct NodeId(Box<[u8]>);

impl PartialEq for NodeId {
    /// Constant-time comparison once the widths agree.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut result = 0u8;
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            result |= a ^ b;
        }
        result == 0
    }
}

impl Eq for NodeId {}

impl NodeId {
    /// Create a standard 160-bit NodeId.
    pub fn new(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(Box::new(bytes))
    }

    /// Create a NodeId of arbitrary width from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    /// All-zero 160-bit identifier.
    pub fn zero() -> Self {
        Self::new([0u8; NODE_ID_LEN])
    }

    /// Big-endian identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Width of the identifier in bytes.
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }

    /// Width of the identifier in bits.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// XOR distance to another identifier of the same width.
    pub fn distance_to(&self, other: &NodeId) -> Result<Distance, LookupError> {
        xor_distance(self, other)
    }
}

impl From<[u8; NODE_ID_LEN]> for NodeId {
    fn from(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for NodeId {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", hex::encode(&self.0))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// IP address enum supporting both IPv4 and IPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpAddr {
    /// IPv4 address (4 bytes).
    V4([u8; 4]),
    /// IPv6 address (16 bytes).
    V6([u8; 16]),
}

impl IpAddr {
    /// Create an IPv4 address
    pub fn v4(a: u8, b: u8, c: u8, d: u8) -> Self {
        IpAddr::V4([a, b, c, d])
    }

    /// Create an IPv6 address from bytes
    pub fn v6(bytes: [u8; 16]) -> Self {
        IpAddr::V6(bytes)
    }

    /// Check if this is an IPv4 address
    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpAddr::V4(_))
    }
}

impl From<std::net::IpAddr> for IpAddr {
    fn from(ip: std::net::IpAddr) -> Self {
        match ip {
            std::net::IpAddr::V4(v4) => IpAddr::V4(v4.octets()),
            std::net::IpAddr::V6(v6) => IpAddr::V6(v6.octets()),
        }
    }
}

impl From<IpAddr> for std::net::IpAddr {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(octets) => std::net::IpAddr::from(octets),
            IpAddr::V6(octets) => std::net::IpAddr::from(octets),
        }
    }
}

impl fmt::Display for IpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&std::net::IpAddr::from(*self), f)
    }
}

/// Host and port a peer can be reached on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketAddr {
    /// IP address (v4 or v6).
    pub ip: IpAddr,
    /// Port number.
    pub port: u16,
}

impl SocketAddr {
    /// Create a new socket address from IP and port.
    pub fn new(ip: IpAddr, port: u16) -> Self {
        Self { ip, port }
    }
}

impl From<std::net::SocketAddr> for SocketAddr {
    fn from(addr: std::net::SocketAddr) -> Self {
        Self::new(addr.ip().into(), addr.port())
    }
}

impl fmt::Display for SocketAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&std::net::SocketAddr::new(self.ip.into(), self.port), f)
    }
}

/// NAT classification advertised by a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NatType {
    /// Reachable directly once a mapping exists.
    FullCone,
    /// Reachable only from endpoints it has already contacted.
    Restricted,
    /// Needs a relay to be reached.
    Symmetric,
}

impl fmt::Display for NatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullCone => write!(f, "Full cone"),
            Self::Restricted => write!(f, "Restricted"),
            Self::Symmetric => write!(f, "Symmetric"),
        }
    }
}

/// Immutable description of one peer.
///
/// Two identities are the same peer iff their [`NodeId`]s are equal; address
/// and metadata are ignored. `PeerIdentity` has no `PartialEq`;
/// use [`PeerIdentity::is_same_peer`] or compare [`PeerIdentity::node_id`].
#[derive(Debug, Clone)]
pub struct PeerIdentity {
    node_id: NodeId,
    address: Option<SocketAddr>,
    signed_pubkey: Option<Vec<u8>>,
    nat_type: Option<NatType>,
    relay: Option<SocketAddr>,
    vendor: bool,
}

impl PeerIdentity {
    /// Create a reachable peer identity.
    pub fn new(node_id: NodeId, address: SocketAddr) -> Self {
        Self {
            address: Some(address),
            ..Self::unaddressed(node_id)
        }
    }

    /// Create an identity without a network address, e.g. a lookup target.
    pub fn unaddressed(node_id: NodeId) -> Self {
        Self {
            node_id,
            address: None,
            signed_pubkey: None,
            nat_type: None,
            relay: None,
            vendor: false,
        }
    }

    /// Attach the peer's signed public key.
    pub fn with_signed_pubkey(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.signed_pubkey = Some(key.into());
        self
    }

    /// Attach the NAT classification.
    pub fn with_nat_type(mut self, nat_type: NatType) -> Self {
        self.nat_type = Some(nat_type);
        self
    }

    /// Attach the relay the peer is reachable through.
    pub fn with_relay(mut self, relay: SocketAddr) -> Self {
        self.relay = Some(relay);
        self
    }

    /// Set the vendor flag.
    pub fn with_vendor(mut self, vendor: bool) -> Self {
        self.vendor = vendor;
        self
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn address(&self) -> Option<&SocketAddr> {
        self.address.as_ref()
    }

    pub fn signed_pubkey(&self) -> Option<&[u8]> {
        self.signed_pubkey.as_deref()
    }

    pub fn nat_type(&self) -> Option<NatType> {
        self.nat_type
    }

    pub fn relay(&self) -> Option<&SocketAddr> {
        self.relay.as_ref()
    }

    pub fn is_vendor(&self) -> bool {
        self.vendor
    }

    /// XOR distance between the two identifiers.
    pub fn distance_to(&self, other: &PeerIdentity) -> Result<Distance, LookupError> {
        self.node_id.distance_to(&other.node_id)
    }

    /// True iff both peers advertise the same host and port.
    pub fn same_home(&self, other: &PeerIdentity) -> bool {
        self.address == other.address
    }

    /// Membership predicate: identifier equality only.
    pub fn is_same_peer(&self, other: &PeerIdentity) -> bool {
        self.node_id == other.node_id
    }

    /// `(id, ip, port)` view of the identity.
    pub fn as_tuple(&self) -> (&NodeId, Option<IpAddr>, Option<u16>) {
        (
            &self.node_id,
            self.address.map(|a| a.ip),
            self.address.map(|a| a.port),
        )
    }

    /// Populate an external wire message with this identity's fields.
    ///
    /// Whether a missing address is acceptable is decided by the builder.
    pub fn to_wire_message<B: NodeMessageBuilder>(
        &self,
        mut builder: B,
    ) -> Result<B::Message, B::Error> {
        builder.set_guid(self.node_id.as_bytes());
        if let Some(address) = &self.address {
            builder.set_node_address(address);
        }
        if let Some(key) = &self.signed_pubkey {
            builder.set_signed_public_key(key);
        }
        if let Some(nat_type) = self.nat_type {
            builder.set_nat_type(nat_type);
        }
        builder.set_vendor(self.vendor);
        if let Some(relay) = &self.relay {
            builder.set_relay_address(relay);
        }
        builder.build()
    }
}

impl fmt::Display for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.address {
            Some(address) => fmt::Display::fmt(address, f),
            None => fmt::Display::fmt(&self.node_id, f),
        }
    }
}
