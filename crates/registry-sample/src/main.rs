//! # Chat Registry Sample
//!
//! A demo of the actor registry over a small chat-flavored domain.
//!
//! ## Components
//!
//! - **[model]**: the declared types ([`Chat`]/[`ChatServer`], [`Greeter`],
//!   [`Audit`], the deliberately ambiguous [`Alerts`]).
//! - **[modules]**: assembles the [`ModuleScope`](actor_registry::ModuleScope)
//!   the registry resolves against.
//! - **[lifecycle]**: boots the [`RegistrySystem`] and shuts it down.
//!
//! The flow below registers the well-formed kinds, shows the registry
//! refusing the ambiguous one, and looks kinds up by logical name.

use actor_registry::{ActorMapping, TypeDescriptor};
use registry_sample::lifecycle::{setup_tracing, RegistrySystem};
use registry_sample::model::{Alerts, Audit, Chat, EmailAlerts, Greeter, PagerAlerts};
use registry_sample::modules::demo_scope;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting chat registry sample");

    let scope = demo_scope().map_err(|e| e.to_string())?;
    let system = RegistrySystem::new(scope);

    // Register the chat kind from its contract side
    let span = tracing::info_span!("kind_registration");
    let chat = async {
        info!("Registering chat kind");
        system
            .registry_client
            .register(TypeDescriptor::of_contract::<dyn Chat>())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(kind = chat.type_name(), key = chat.key(), "Chat kind registered");

    // Register the standalone greeter from its class side
    let greeter = system
        .registry_client
        .register(TypeDescriptor::of_implementation::<Greeter>())
        .await
        .map_err(|e| e.to_string())?;

    info!(kind = greeter.type_name(), "Greeter kind registered");

    // The audit contract has no implementation in scope; it registers unbound
    let audit = system
        .registry_client
        .register(TypeDescriptor::of_contract::<dyn Audit>())
        .await
        .map_err(|e| e.to_string())?;

    info!(kind = audit.type_name(), key = audit.key(), "Audit kind registered");

    // The alerts contract has two implementations in scope; the registry
    // refuses to pick one
    let ambiguous = system
        .registry_client
        .register(TypeDescriptor::of_contract::<dyn Alerts>())
        .await;

    match ambiguous {
        Ok(mapping) => info!(kind = mapping.type_name(), "Alerts kind registered"),
        Err(e) => error!(error = %e, "Alerts kind rejected"),
    }

    // One alerts class on its own resolves fine and takes the contract's
    // name; the competing class then collides with it in the catalog
    let email = system
        .registry_client
        .register(TypeDescriptor::of_implementation::<EmailAlerts>())
        .await
        .map_err(|e| e.to_string())?;
    info!(kind = email.type_name(), key = email.key(), "Email alerts registered");

    if let Err(e) = system
        .registry_client
        .register(TypeDescriptor::of_implementation::<PagerAlerts>())
        .await
    {
        error!(error = %e, "Pager alerts rejected");
    }

    // Registered kinds answer lookups by logical name
    if let Some(found) = system
        .registry_client
        .lookup("Chat")
        .await
        .map_err(|e| e.to_string())?
    {
        info!(kind = found.type_name(), key = found.key(), "Lookup hit");

        // A name-only token shares the name but never the identity
        let token = ActorMapping::by_name("Chat").map_err(|e| e.to_string())?;
        info!(token = %token, equals_resolved = (token == found), "Name token compared");
    }

    let kinds = system
        .registry_client
        .list()
        .await
        .map_err(|e| e.to_string())?;
    info!(total = kinds.len(), "Catalog contents");
    for kind in &kinds {
        info!(key = kind.key(), "Kind");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Sample completed successfully");
    Ok(())
}
