//! # Adapters
//!
//! Concrete implementations of the outbound ports:
//! - `wire` - serde node record built through [`crate::NodeMessageBuilder`]
//! - `config` - static and TOML configuration providers

pub mod config;
pub mod wire;

pub use config::{ConfigError, StaticConfigProvider, TomlConfigProvider};
pub use wire::{WireError, WireNode, WireNodeBuilder};
