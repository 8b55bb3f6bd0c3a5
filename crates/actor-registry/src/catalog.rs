//! # Kind Catalog
//!
//! The registration table the service keeps: resolved kinds by logical name.
//! Registering the same kind twice is a no-op; registering a different kind
//! under an occupied name is rejected with both identities. Kinds are never
//! removed; the table lives as long as the registry.

use crate::error::RegistryError;
use crate::mapping::ActorMapping;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct KindCatalog {
    kinds: BTreeMap<String, ActorMapping>,
}

impl KindCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resolved kind under its logical name.
    pub fn insert(&mut self, mapping: ActorMapping) -> Result<(), RegistryError> {
        match self.kinds.get(mapping.type_name()) {
            None => {
                self.kinds.insert(mapping.type_name().to_string(), mapping);
                Ok(())
            }
            Some(existing) if existing == &mapping => Ok(()),
            Some(existing) => Err(RegistryError::DuplicateTypeName {
                name: mapping.type_name().to_string(),
                existing: existing.key().to_string(),
                attempted: mapping.key().to_string(),
            }),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&ActorMapping> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Registered kinds in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ActorMapping> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{ContractDecl, ImplementationDecl};
    use crate::descriptor::TypeDescriptor;
    use crate::scope::{ModuleScope, TypeModule};

    fn chat_scope() -> ModuleScope {
        let mut module = TypeModule::new("chat");
        module.declare(ContractDecl::at("demo::Chat")).unwrap();
        module
            .declare(
                ImplementationDecl::at("demo::ChatServer")
                    .implements(TypeDescriptor::contract("demo::Chat")),
            )
            .unwrap();
        module
            .declare(ImplementationDecl::at("demo::Greeter"))
            .unwrap();
        let mut scope = ModuleScope::new();
        scope.add_module(module).unwrap();
        scope
    }

    #[test]
    fn registered_kinds_answer_lookups() {
        let scope = chat_scope();
        let mut catalog = KindCatalog::new();
        let mapping =
            ActorMapping::resolve(&TypeDescriptor::contract("demo::Chat"), &scope).unwrap();
        catalog.insert(mapping.clone()).unwrap();

        assert_eq!(catalog.lookup("Chat"), Some(&mapping));
        assert!(catalog.lookup("Greeter").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn re_registering_the_same_kind_is_a_no_op() {
        let scope = chat_scope();
        let mut catalog = KindCatalog::new();

        let via_contract =
            ActorMapping::resolve(&TypeDescriptor::contract("demo::Chat"), &scope).unwrap();
        let via_class =
            ActorMapping::resolve(&TypeDescriptor::implementation("demo::ChatServer"), &scope)
                .unwrap();

        catalog.insert(via_contract).unwrap();
        catalog.insert(via_class).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn a_different_kind_under_an_occupied_name_is_rejected() {
        let mut catalog = KindCatalog::new();
        let scope = chat_scope();
        let resolved =
            ActorMapping::resolve(&TypeDescriptor::contract("demo::Chat"), &scope).unwrap();
        let token = ActorMapping::by_name("Chat").unwrap();

        catalog.insert(resolved.clone()).unwrap();
        let error = catalog.insert(token.clone()).unwrap_err();
        assert_eq!(
            error,
            RegistryError::DuplicateTypeName {
                name: "Chat".to_string(),
                existing: resolved.key().to_string(),
                attempted: token.key().to_string(),
            }
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn iteration_is_name_ordered() {
        let scope = chat_scope();
        let mut catalog = KindCatalog::new();
        catalog
            .insert(
                ActorMapping::resolve(&TypeDescriptor::implementation("demo::Greeter"), &scope)
                    .unwrap(),
            )
            .unwrap();
        catalog
            .insert(ActorMapping::resolve(&TypeDescriptor::contract("demo::Chat"), &scope).unwrap())
            .unwrap();

        let names: Vec<_> = catalog.iter().map(|m| m.type_name()).collect();
        assert_eq!(names, vec!["Chat", "Greeter"]);
    }
}
