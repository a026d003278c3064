//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this crate **requires** the host application to
//! implement. The wire byte layout belongs to the implementor.

use crate::domain::{LookupConfig, NatType, SocketAddr};

/// Receives the logical fields of a peer identity and produces a message.
///
/// [`crate::PeerIdentity::to_wire_message`] calls each setter at most once,
/// skipping optional fields the identity does not carry, then calls
/// [`NodeMessageBuilder::build`]. Implementations decide which fields are
/// mandatory and report missing ones from `build`.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct ProtoNodeBuilder {
///     node: proto::Node,
/// }
///
/// impl NodeMessageBuilder for ProtoNodeBuilder {
///     type Message = proto::Node;
///     type Error = EncodeError;
///
///     fn set_guid(&mut self, guid: &[u8]) {
///         self.node.guid = guid.to_vec();
///     }
///     // ...
/// }
/// ```
pub trait NodeMessageBuilder {
    /// The finished wire message.
    type Message;
    /// Error reported when the collected fields cannot form a message.
    type Error;

    /// Identifier bytes (always set).
    fn set_guid(&mut self, guid: &[u8]);

    /// Host and port the peer listens on.
    fn set_node_address(&mut self, address: &SocketAddr);

    /// Signed public key bytes.
    fn set_signed_public_key(&mut self, key: &[u8]);

    /// NAT classification tag.
    fn set_nat_type(&mut self, nat_type: NatType);

    /// Vendor flag (always set).
    fn set_vendor(&mut self, vendor: bool);

    /// Relay the peer is reachable through.
    fn set_relay_address(&mut self, relay: &SocketAddr);

    /// Assemble the message from the fields set so far.
    fn build(self) -> Result<Self::Message, Self::Error>;
}

/// Abstract interface for configuration loading.
///
/// Allows different configuration sources (embedded TOML, static values, ...).
pub trait ConfigProvider: Send + Sync {
    /// Get lookup parameters (window size, parallelism, round budget).
    fn get_lookup_config(&self) -> LookupConfig;
}
