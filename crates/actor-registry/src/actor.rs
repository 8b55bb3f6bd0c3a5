//! # Registry Actor
//!
//! The server side of the registry: a task that owns the [`KindCatalog`] and
//! processes requests sequentially, so the catalog needs no locking. The
//! scope to resolve against is injected into [`RegistryActor::run`], not the
//! constructor, which keeps construction free of ordering constraints: create
//! the actor, hand out clients, assemble the scope, then start the loop.
//!
//! ```rust
//! use actor_registry::{ModuleScope, RegistryActor, TypeDescriptor, type_module};
//!
//! trait Ping: Send {}
//! struct Pinger;
//! impl Ping for Pinger {}
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut scope = ModuleScope::new();
//!     scope.add_module(type_module!("demo", {
//!         contract dyn Ping;
//!         class Pinger: dyn Ping;
//!     })?)?;
//!
//!     let (actor, client) = RegistryActor::new(8);
//!     tokio::spawn(actor.run(scope));
//!
//!     let mapping = client.register(TypeDescriptor::of_contract::<dyn Ping>()).await?;
//!     assert_eq!(mapping.type_name(), "Ping");
//!     Ok(())
//! }
//! ```

use crate::catalog::KindCatalog;
use crate::client::RegistryClient;
use crate::descriptor::TypeDescriptor;
use crate::error::RegistryError;
use crate::mapping::ActorMapping;
use crate::message::RegistryRequest;
use crate::scope::ModuleScope;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct RegistryActor {
    receiver: mpsc::Receiver<RegistryRequest>,
    catalog: KindCatalog,
}

impl RegistryActor {
    /// Creates a new `RegistryActor` and its associated `RegistryClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            catalog: KindCatalog::new(),
        };
        let client = RegistryClient::new(sender);
        (actor, client)
    }

    /// Runs the registry loop, processing requests until every client is
    /// dropped.
    ///
    /// A failed registration is reported to the caller and leaves the catalog
    /// untouched; the loop keeps serving other kinds.
    pub async fn run(mut self, scope: ModuleScope) {
        info!(
            modules = scope.module_count(),
            declarations = scope.declaration_count(),
            "Registry started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Register { target, respond_to } => {
                    debug!(%target, "Register");
                    let result = self.register(&target, &scope);
                    match &result {
                        Ok(mapping) => info!(
                            type_name = mapping.type_name(),
                            key = mapping.key(),
                            total = self.catalog.len(),
                            "Kind registered"
                        ),
                        Err(e) => warn!(%target, error = %e, "Registration failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Lookup { name, respond_to } => {
                    let mapping = self.catalog.lookup(&name).cloned();
                    debug!(%name, found = mapping.is_some(), "Lookup");
                    let _ = respond_to.send(Ok(mapping));
                }
                RegistryRequest::List { respond_to } => {
                    debug!(total = self.catalog.len(), "List");
                    let _ = respond_to.send(Ok(self.catalog.iter().cloned().collect()));
                }
            }
        }

        info!(total = self.catalog.len(), "Registry shutdown");
    }

    fn register(
        &mut self,
        target: &TypeDescriptor,
        scope: &ModuleScope,
    ) -> Result<ActorMapping, RegistryError> {
        let mapping = ActorMapping::resolve(target, scope)?;
        self.catalog.insert(mapping.clone())?;
        Ok(mapping)
    }
}
