//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the sample: booting the
//! registry service with its scope, handing out the client, and coordinating
//! a graceful shutdown.
//!
//! ## The Orchestration Pattern
//!
//! The service itself is simple; the wiring order is where the constraints
//! live. [`RegistrySystem`] is the conductor:
//!
//! 1. **Scope assembly** - the caller builds the `ModuleScope` first
//! 2. **Actor creation** - create the registry actor and its client
//! 3. **Late binding** - the scope is injected via `run(scope)`, not the
//!    constructor
//! 4. **Graceful shutdown** - drop the client, then await the task
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **The service detects closure** - `recv()` returns `None`
//! 3. **It logs final state and exits**
//! 4. **Await the handle** - no registrations are lost
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole process.
//! Control verbosity with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and registrations
//! RUST_LOG=debug cargo run     # every request
//! ```

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
