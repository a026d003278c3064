//! Domain Layer - Pure lookup logic with no I/O
//!
//! This module contains:
//! - Node identifiers, peer identities and XOR distance calculation
//! - The closest-node candidate set used by iterative lookups
//! - Lookup configuration and domain errors

pub mod closest_nodes;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use closest_nodes::*;
pub use entities::*;
pub use errors::*;
pub use services::*;
pub use value_objects::*;
