//! Serde node record for RPC payloads.
//!
//! [`WireNodeBuilder`] implements the [`NodeMessageBuilder`] port and produces
//! a [`WireNode`], which any serde format can encode. Received records decode
//! back into a [`PeerIdentity`] through `TryFrom`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{NatType, NodeId, PeerIdentity, SocketAddr};
use crate::ports::NodeMessageBuilder;

/// Node record exchanged in FIND_NODE responses and STORE requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNode {
    pub guid: Vec<u8>,
    pub node_address: SocketAddr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_public_key: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat_type: Option<NatType>,
    #[serde(default)]
    pub vendor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_address: Option<SocketAddr>,
}

/// Errors from building or decoding node records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The identity has no network address; records must be dialable.
    #[error("Node record requires a network address")]
    MissingAddress,

    /// The record carries no identifier bytes.
    #[error("Node record has an empty guid")]
    InvalidNodeId,
}

/// Collects identity fields into a [`WireNode`].
#[derive(Debug, Clone, Default)]
pub struct WireNodeBuilder {
    guid: Vec<u8>,
    node_address: Option<SocketAddr>,
    signed_public_key: Option<Vec<u8>>,
    nat_type: Option<NatType>,
    vendor: bool,
    relay_address: Option<SocketAddr>,
}

impl WireNodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeMessageBuilder for WireNodeBuilder {
    type Message = WireNode;
    type Error = WireError;

    fn set_guid(&mut self, guid: &[u8]) {
        self.guid = guid.to_vec();
    }

    fn set_node_address(&mut self, address: &SocketAddr) {
        self.node_address = Some(*address);
    }

    fn set_signed_public_key(&mut self, key: &[u8]) {
        self.signed_public_key = Some(key.to_vec());
    }

    fn set_nat_type(&mut self, nat_type: NatType) {
        self.nat_type = Some(nat_type);
    }

    fn set_vendor(&mut self, vendor: bool) {
        self.vendor = vendor;
    }

    fn set_relay_address(&mut self, relay: &SocketAddr) {
        self.relay_address = Some(*relay);
    }

    fn build(self) -> Result<WireNode, WireError> {
        if self.guid.is_empty() {
            return Err(WireError::InvalidNodeId);
        }
        let node_address = self.node_address.ok_or(WireError::MissingAddress)?;
        Ok(WireNode {
            guid: self.guid,
            node_address,
            signed_public_key: self.signed_public_key,
            nat_type: self.nat_type,
            vendor: self.vendor,
            relay_address: self.relay_address,
        })
    }
}

impl TryFrom<WireNode> for PeerIdentity {
    type Error = WireError;

    fn try_from(record: WireNode) -> Result<Self, WireError> {
        if record.guid.is_empty() {
            return Err(WireError::InvalidNodeId);
        }
        let mut peer = PeerIdentity::new(NodeId::from(record.guid), record.node_address)
            .with_vendor(record.vendor);
        if let Some(key) = record.signed_public_key {
            peer = peer.with_signed_pubkey(key);
        }
        if let Some(nat_type) = record.nat_type {
            peer = peer.with_nat_type(nat_type);
        }
        if let Some(relay) = record.relay_address {
            peer = peer.with_relay(relay);
        }
        Ok(peer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IpAddr, NODE_ID_LEN};

    fn make_peer() -> PeerIdentity {
        PeerIdentity::new(
            NodeId::new([7u8; NODE_ID_LEN]),
            SocketAddr::new(IpAddr::v4(203, 0, 113, 5), 18467),
        )
    }

    #[test]
    fn test_builder_populates_all_fields() {
        let relay = SocketAddr::new(IpAddr::v4(198, 51, 100, 1), 18470);
        let peer = make_peer()
            .with_signed_pubkey(vec![1, 2, 3])
            .with_nat_type(NatType::Symmetric)
            .with_relay(relay)
            .with_vendor(true);

        let record = peer.to_wire_message(WireNodeBuilder::new()).unwrap();

        assert_eq!(record.guid, vec![7u8; NODE_ID_LEN]);
        assert_eq!(record.node_address, *peer.address().unwrap());
        assert_eq!(record.signed_public_key, Some(vec![1, 2, 3]));
        assert_eq!(record.nat_type, Some(NatType::Symmetric));
        assert!(record.vendor);
        assert_eq!(record.relay_address, Some(relay));
    }

    #[test]
    fn test_builder_omits_absent_optionals() {
        let record = make_peer().to_wire_message(WireNodeBuilder::new()).unwrap();

        assert_eq!(record.signed_public_key, None);
        assert_eq!(record.nat_type, None);
        assert_eq!(record.relay_address, None);
        assert!(!record.vendor);
    }

    #[test]
    fn test_builder_requires_address() {
        let target = PeerIdentity::unaddressed(NodeId::zero());

        assert_eq!(
            target.to_wire_message(WireNodeBuilder::new()).unwrap_err(),
            WireError::MissingAddress
        );
    }

    #[test]
    fn test_record_decodes_into_identity() {
        let original = make_peer().with_nat_type(NatType::Restricted);
        let record = original.to_wire_message(WireNodeBuilder::new()).unwrap();

        let decoded = PeerIdentity::try_from(record).unwrap();

        assert!(decoded.is_same_peer(&original));
        assert!(decoded.same_home(&original));
        assert_eq!(decoded.nat_type(), Some(NatType::Restricted));
    }

    #[test]
    fn test_empty_guid_is_rejected() {
        let record = WireNode {
            guid: Vec::new(),
            node_address: SocketAddr::new(IpAddr::v4(127, 0, 0, 1), 1),
            signed_public_key: None,
            nat_type: None,
            vendor: false,
            relay_address: None,
        };

        assert_eq!(
            PeerIdentity::try_from(record).unwrap_err(),
            WireError::InvalidNodeId
        );
    }

    #[test]
    fn test_record_serializes_with_camel_case_fields() {
        let record = make_peer()
            .with_signed_pubkey(vec![9])
            .to_wire_message(WireNodeBuilder::new())
            .unwrap();

        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("nodeAddress").is_some());
        assert!(json.get("signedPublicKey").is_some());
        assert!(json.get("relayAddress").is_none());

        let back: WireNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
