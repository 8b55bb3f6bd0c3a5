//! # Actor Registry
//!
//! This crate provides the registration and identity layer for actor systems:
//! it turns declared types into named, canonically-keyed actor kinds and
//! serves them from an async registry service. It answers one question
//! deterministically: *given this type, which actor kind is it, and which
//! types make that kind up?*
//!
//! ## The Kind Model
//!
//! An actor kind has up to two constituent types:
//!
//! - a **contract**: the trait callers program against;
//! - an **implementation**: the concrete type backing it.
//!
//! A kind can be a lone implementation (no contract), a contract bound to its
//! single implementation, or a contract with no implementation in scope yet.
//! What a kind may never be is ambiguous: a contract claimed by more than one
//! implementation fails resolution with the full conflict list.
//!
//! ## Explicit Scope Instead of Scanning
//!
//! Runtimes with reflection discover actor types by scanning loaded code.
//! Here the caller builds a [`ModuleScope`] of [`TypeModule`]s once at
//! startup, each declaring its contracts and implementations, and resolution
//! runs only against that value. Nothing is ambient and nothing is scanned,
//! so two runs over the same declarations produce identical identities no
//! matter the declaration order.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Identity Layer** ([`TypeDescriptor`], [`TypeDeclaration`],
//!    [`ModuleScope`]) - what the types are and how they relate
//! 2. **Resolution Layer** ([`ActorMapping`]) - the pure function from a type
//!    and a scope to a kind
//! 3. **Service Layer** ([`RegistryActor`], [`RegistryClient`],
//!    [`KindCatalog`]) - registration and lookup behind a message-passing
//!    service
//!
//! The service processes requests sequentially in its own task, so the
//! catalog needs no locks; clients are cheap clones of a channel sender.
//!
//! ## Example
//!
//! ```rust
//! use actor_registry::{ModuleScope, RegistryActor, TypeDescriptor, type_module};
//!
//! trait Chat { fn post(&mut self, line: &str); }
//! struct ChatServer;
//! impl Chat for ChatServer { fn post(&mut self, _line: &str) {} }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Declare the scope
//!     let mut scope = ModuleScope::new();
//!     scope.add_module(type_module!("chat", {
//!         contract dyn Chat;
//!         class ChatServer: dyn Chat;
//!     })?)?;
//!
//!     // 2. Start the registry
//!     let (actor, client) = RegistryActor::new(8);
//!     tokio::spawn(actor.run(scope));
//!
//!     // 3. Register and look up kinds
//!     let kind = client.register(TypeDescriptor::of_contract::<dyn Chat>()).await?;
//!     assert_eq!(kind.type_name(), "Chat");
//!
//!     let found = client.lookup("Chat").await?;
//!     assert_eq!(found.as_ref(), Some(&kind));
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Model
//!
//! Everything fails fast at declaration or registration time, as a `Result`:
//! malformed declarations are rejected when modules are built, unknown or
//! ambiguous types when kinds are resolved, and conflicting names when kinds
//! are registered. A failed registration only affects that kind; the service
//! keeps running.
//!
//! ## Testing
//!
//! The [`mock`] module provides a mock client plus `expect_*` helpers for
//! testing registry callers without spawning the service.

pub mod actor;
pub mod catalog;
pub mod client;
pub mod declaration;
pub mod descriptor;
pub mod error;
mod macros;
pub mod mapping;
pub mod message;
pub mod mock;
pub mod naming;
pub mod scope;

// Re-export core types for convenience
pub use actor::RegistryActor;
pub use catalog::KindCatalog;
pub use client::RegistryClient;
pub use declaration::{ContractDecl, ImplementationDecl, TypeDeclaration};
pub use descriptor::{TypeDescriptor, TypeKind};
pub use error::{DeclarationError, RegistryError, ResolveError};
pub use mapping::ActorMapping;
pub use message::{RegistryRequest, Response};
pub use scope::{ModuleScope, TypeModule};
