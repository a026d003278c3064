//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driven Ports (Outbound):** collaborators this crate requires from the
//!   host: the wire-message builder used to serialize identities and the
//!   configuration source.
//!
//! The candidate set itself is the driving surface and is used directly by
//! the lookup driver.

pub mod outbound;

pub use outbound::{ConfigProvider, NodeMessageBuilder};
