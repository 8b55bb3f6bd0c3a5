//! # Demo Actor Types
//!
//! The types the sample declares to the registry: a chat room with a contract
//! and one implementation, a standalone greeter, an unbound audit contract,
//! and a deliberately over-implemented alerts contract.

pub mod alerts;
pub mod chat;
pub mod greeter;

pub use alerts::{Alerts, Audit, EmailAlerts, PagerAlerts};
pub use chat::{Chat, ChatServer};
pub use greeter::Greeter;
