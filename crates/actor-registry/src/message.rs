//! # Registry Messages
//!
//! The request types sent from a [`RegistryClient`](crate::client::RegistryClient)
//! to the [`RegistryActor`](crate::actor::RegistryActor).

use crate::descriptor::TypeDescriptor;
use crate::error::RegistryError;
use crate::mapping::ActorMapping;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the registry.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Requests handled by the registry.
///
/// Mappings are immutable and live for the registry's lifetime, so there are
/// no update or delete variants: a kind is registered once and answers
/// lookups from then on.
#[derive(Debug)]
pub enum RegistryRequest {
    /// Resolve `target` against the injected scope and register the kind.
    Register {
        target: TypeDescriptor,
        respond_to: Response<ActorMapping>,
    },
    /// Fetch a registered kind by logical name.
    Lookup {
        name: String,
        respond_to: Response<Option<ActorMapping>>,
    },
    /// Every registered kind, in name order.
    List {
        respond_to: Response<Vec<ActorMapping>>,
    },
}
