//! Heirloom Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined
//! in the application layer: the reqwest-backed transport, file-based
//! session persistence, the channel navigator, and configuration
//! loading.

pub mod adapters;
pub mod config;
pub mod navigation;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use config::{ClientConfig, ConfigError};
pub use navigation::ChannelNavigator;
pub use persistence::FileSessionStorage;
