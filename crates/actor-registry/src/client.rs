//! # Registry Client
//!
//! The caller-facing handle for a running registry. Holds only a channel
//! sender, so it is cheap to clone and share across tasks; every method is a
//! oneshot round-trip to the service.

use crate::descriptor::TypeDescriptor;
use crate::error::RegistryError;
use crate::mapping::ActorMapping;
use crate::message::RegistryRequest;
use tokio::sync::{mpsc, oneshot};

#[derive(Clone)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    /// Resolves `target` against the registry's scope and registers the
    /// resulting kind. Registering the same kind again returns it unchanged.
    pub async fn register(&self, target: TypeDescriptor) -> Result<ActorMapping, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Register { target, respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    /// Fetches a registered kind by logical name.
    pub async fn lookup(
        &self,
        name: impl Into<String>,
    ) -> Result<Option<ActorMapping>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Lookup {
                name: name.into(),
                respond_to,
            })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    /// Every registered kind, in name order.
    pub async fn list(&self) -> Result<Vec<ActorMapping>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::List { respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }
}
