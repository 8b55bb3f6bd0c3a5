//! # Registry Sample Library
//!
//! This library exposes the sample's modules for integration testing: the
//! demo actor types, the scope they are declared in, and the lifecycle
//! orchestration around the registry service.

pub mod lifecycle;
pub mod model;
pub mod modules;
