use actor_registry::{ActorMapping, RegistryError, ResolveError, TypeDescriptor};
use registry_sample::lifecycle::RegistrySystem;
use registry_sample::model::{Alerts, Audit, Chat, ChatServer, Greeter};
use registry_sample::modules::demo_scope;

#[tokio::test]
async fn test_full_registry_system_integration() {
    let system = RegistrySystem::new(demo_scope().unwrap());

    // Register the chat kind from its contract side
    let chat = system
        .registry_client
        .register(TypeDescriptor::of_contract::<dyn Chat>())
        .await
        .unwrap();
    assert_eq!(chat.type_name(), "Chat");
    assert_eq!(chat.constituents().len(), 2);

    // The class side lands on the same kind
    let via_server = system
        .registry_client
        .register(TypeDescriptor::of_implementation::<ChatServer>())
        .await
        .unwrap();
    assert_eq!(via_server, chat);

    // Standalone class
    let greeter = system
        .registry_client
        .register(TypeDescriptor::of_implementation::<Greeter>())
        .await
        .unwrap();
    assert_eq!(greeter.type_name(), "Greeter");
    assert!(greeter.custom_interface().is_none());

    // Unbound contract, under its name override
    let audit = system
        .registry_client
        .register(TypeDescriptor::of_contract::<dyn Audit>())
        .await
        .unwrap();
    assert_eq!(audit.type_name(), "audit-log");
    assert!(audit.implementation_class().is_none());

    // The ambiguous contract is rejected and never enters the catalog
    let error = system
        .registry_client
        .register(TypeDescriptor::of_contract::<dyn Alerts>())
        .await
        .unwrap_err();
    match error {
        RegistryError::Resolve(ResolveError::AmbiguousImplementation {
            implementations, ..
        }) => {
            assert_eq!(implementations.len(), 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(system
        .registry_client
        .lookup("Alerts")
        .await
        .unwrap()
        .is_none());

    // The catalog lists kinds in name order
    let kinds = system.registry_client.list().await.unwrap();
    let names: Vec<_> = kinds.iter().map(|m| m.type_name().to_string()).collect();
    assert_eq!(names, vec!["Chat", "Greeter", "audit-log"]);

    // A name-only token never equals the resolved kind
    let token = ActorMapping::by_name("Chat").unwrap();
    assert_ne!(token, chat);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_clients_share_one_catalog() {
    let system = RegistrySystem::new(demo_scope().unwrap());

    let client = system.registry_client.clone();
    client
        .register(TypeDescriptor::of_implementation::<Greeter>())
        .await
        .unwrap();
    drop(client);

    // The original client sees what the clone registered
    let found = system.registry_client.lookup("Greeter").await.unwrap();
    assert!(found.is_some());

    system.shutdown().await.unwrap();
}
