use actor_registry::{ModuleScope, RegistryActor, RegistryClient};
use tracing::{error, info};

/// The runtime orchestrator for the sample's registry service.
///
/// `RegistrySystem` is responsible for:
/// - **Lifecycle Management**: starting the registry and shutting it down
/// - **Scope Injection**: handing the assembled `ModuleScope` to the service
///   when its loop starts
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new(demo_scope()?);
///
/// let kind = system.registry_client.register(target).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for registering and looking up actor kinds
    pub registry_client: RegistryClient,

    /// Task handles for the running service (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrySystem {
    /// Boots the registry over `scope` and returns the running system.
    pub fn new(scope: ModuleScope) -> Self {
        let (registry_actor, registry_client) = RegistryActor::new(16);
        let registry_handle = tokio::spawn(registry_actor.run(scope));

        Self {
            registry_client,
            handles: vec![registry_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the request channel; the service drains
    /// what it has and exits, and this method waits for it.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down registry...");

        drop(self.registry_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Registry task failed: {:?}", e);
                return Err(format!("Registry task failed: {:?}", e));
            }
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
