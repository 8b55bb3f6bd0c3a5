//! # Module Scope
//!
//! The explicit registry of declared types. Runtimes with reflection scan
//! loaded assemblies for actor types; here a [`ModuleScope`] is assembled once
//! at startup from [`TypeModule`]s and then only queried. The scope is a plain
//! value handed to the resolver, so its stability over a run is the caller's
//! responsibility.
//!
//! Both layers key their contents through `BTreeMap`s, which makes every
//! query independent of insertion order.

use crate::declaration::{ContractDecl, ImplementationDecl, TypeDeclaration};
use crate::descriptor::TypeDescriptor;
use crate::error::DeclarationError;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// A named set of type declarations, one per path.
#[derive(Debug, Clone)]
pub struct TypeModule {
    name: &'static str,
    declarations: BTreeMap<&'static str, TypeDeclaration>,
}

impl TypeModule {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            declarations: BTreeMap::new(),
        }
    }

    /// Adds a declaration, rejecting malformed ones and duplicate paths.
    pub fn declare(
        &mut self,
        declaration: impl Into<TypeDeclaration>,
    ) -> Result<(), DeclarationError> {
        let declaration = declaration.into();
        declaration.validate()?;
        let path = declaration.descriptor().path();
        if self.declarations.contains_key(path) {
            return Err(DeclarationError::DuplicateDeclaration {
                path,
                module: self.name,
            });
        }
        self.declarations.insert(path, declaration);
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations in path order.
    pub fn declarations(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.declarations.values()
    }

    fn get(&self, path: &str) -> Option<&TypeDeclaration> {
        self.declarations.get(path)
    }
}

/// The set of modules a resolution runs against.
///
/// Every declared path has exactly one owner across the whole scope; the
/// second module to bring a path is rejected when it is added. An empty scope
/// is valid: every contract simply resolves unbound.
#[derive(Debug, Clone, Default)]
pub struct ModuleScope {
    modules: BTreeMap<&'static str, TypeModule>,
}

impl ModuleScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module, rejecting name and declaration collisions.
    pub fn add_module(&mut self, module: TypeModule) -> Result<(), DeclarationError> {
        if module.name().trim().is_empty() {
            return Err(DeclarationError::EmptyModuleName);
        }
        if self.modules.contains_key(module.name()) {
            return Err(DeclarationError::DuplicateModule {
                module: module.name(),
            });
        }
        for declaration in module.declarations() {
            let path = declaration.descriptor().path();
            if let Some(owner) = self.owner_of(path) {
                return Err(DeclarationError::DuplicateDeclaration {
                    path,
                    module: owner,
                });
            }
        }
        debug!(
            module = module.name(),
            declarations = module.len(),
            "Module added to scope"
        );
        self.modules.insert(module.name(), module);
        Ok(())
    }

    fn owner_of(&self, path: &str) -> Option<&'static str> {
        self.modules
            .values()
            .find(|module| module.get(path).is_some())
            .map(|module| module.name())
    }

    /// The declaration for `target`, if the scope declares exactly that
    /// descriptor. A path declared under a different kind does not match.
    pub fn declaration(&self, target: &TypeDescriptor) -> Option<&TypeDeclaration> {
        self.modules
            .values()
            .find_map(|module| module.get(target.path()))
            .filter(|declaration| declaration.descriptor() == *target)
    }

    pub fn contains(&self, target: &TypeDescriptor) -> bool {
        self.declaration(target).is_some()
    }

    /// The contract declaration for `target`, if declared as a contract.
    pub fn contract_decl(&self, target: &TypeDescriptor) -> Option<&ContractDecl> {
        match self.declaration(target) {
            Some(TypeDeclaration::Contract(contract)) => Some(contract),
            _ => None,
        }
    }

    /// Every implementation whose claimed contract is `contract` or
    /// transitively extends it, sorted by path.
    pub fn implementations_of(&self, contract: &TypeDescriptor) -> Vec<&ImplementationDecl> {
        let mut found = Vec::new();
        for module in self.modules.values() {
            for declaration in module.declarations() {
                if let TypeDeclaration::Implementation(implementation) = declaration {
                    if let Some(claimed) = implementation.contract() {
                        if self.assignable(claimed, contract) {
                            found.push(implementation);
                        }
                    }
                }
            }
        }
        found.sort_by_key(|implementation| implementation.descriptor());
        found
    }

    /// Whether `declared` is `target` or reaches it through `extends` chains.
    /// Parents missing from the scope end the walk; cycles terminate it.
    fn assignable(&self, declared: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        let mut visited = BTreeSet::new();
        let mut queue = vec![*declared];
        while let Some(current) = queue.pop() {
            if !visited.insert(current) {
                continue;
            }
            if current == *target {
                return true;
            }
            if let Some(contract) = self.contract_decl(&current) {
                queue.extend(contract.parents().iter().copied());
            }
        }
        false
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn declaration_count(&self) -> usize {
        self.modules.values().map(|module| module.len()).sum()
    }

    /// Modules in name order.
    pub fn modules(&self) -> impl Iterator<Item = &TypeModule> {
        self.modules.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_module() -> TypeModule {
        let mut module = TypeModule::new("chat");
        module.declare(ContractDecl::at("demo::Chat")).unwrap();
        module
            .declare(
                ImplementationDecl::at("demo::ChatServer")
                    .implements(TypeDescriptor::contract("demo::Chat")),
            )
            .unwrap();
        module
    }

    #[test]
    fn duplicate_paths_in_a_module_are_rejected() {
        let mut module = TypeModule::new("chat");
        module.declare(ContractDecl::at("demo::Chat")).unwrap();
        let result = module.declare(ContractDecl::at("demo::Chat"));
        assert_eq!(
            result,
            Err(DeclarationError::DuplicateDeclaration {
                path: "demo::Chat",
                module: "chat",
            })
        );
    }

    #[test]
    fn duplicate_module_names_are_rejected() {
        let mut scope = ModuleScope::new();
        scope.add_module(TypeModule::new("chat")).unwrap();
        let result = scope.add_module(TypeModule::new("chat"));
        assert_eq!(
            result,
            Err(DeclarationError::DuplicateModule { module: "chat" })
        );
    }

    #[test]
    fn blank_module_names_are_rejected() {
        let mut scope = ModuleScope::new();
        let result = scope.add_module(TypeModule::new("  "));
        assert_eq!(result, Err(DeclarationError::EmptyModuleName));
    }

    #[test]
    fn a_path_has_one_owner_across_the_scope() {
        let mut scope = ModuleScope::new();
        scope.add_module(chat_module()).unwrap();

        let mut other = TypeModule::new("other");
        other.declare(ContractDecl::at("demo::Chat")).unwrap();
        let result = scope.add_module(other);
        assert_eq!(
            result,
            Err(DeclarationError::DuplicateDeclaration {
                path: "demo::Chat",
                module: "chat",
            })
        );
    }

    #[test]
    fn declaration_lookup_is_kind_strict() {
        let mut scope = ModuleScope::new();
        scope.add_module(chat_module()).unwrap();

        assert!(scope
            .declaration(&TypeDescriptor::contract("demo::Chat"))
            .is_some());
        assert!(scope
            .declaration(&TypeDescriptor::implementation("demo::Chat"))
            .is_none());
    }

    #[test]
    fn implementations_are_found_through_the_claimed_contract() {
        let mut scope = ModuleScope::new();
        scope.add_module(chat_module()).unwrap();

        let found = scope.implementations_of(&TypeDescriptor::contract("demo::Chat"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].descriptor().path(), "demo::ChatServer");
    }

    #[test]
    fn implementations_are_found_transitively() {
        let mut module = TypeModule::new("chat");
        module.declare(ContractDecl::at("demo::Chat")).unwrap();
        module
            .declare(
                ContractDecl::at("demo::OpsChat").extends(TypeDescriptor::contract("demo::Chat")),
            )
            .unwrap();
        module
            .declare(
                ImplementationDecl::at("demo::OpsServer")
                    .implements(TypeDescriptor::contract("demo::OpsChat")),
            )
            .unwrap();
        let mut scope = ModuleScope::new();
        scope.add_module(module).unwrap();

        let found = scope.implementations_of(&TypeDescriptor::contract("demo::Chat"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].descriptor().path(), "demo::OpsServer");
    }

    #[test]
    fn implementations_list_is_sorted_across_modules() {
        let mut scope = ModuleScope::new();

        let mut zeta = TypeModule::new("zeta");
        zeta.declare(ContractDecl::at("demo::Chat")).unwrap();
        zeta.declare(
            ImplementationDecl::at("demo::AlphaServer")
                .implements(TypeDescriptor::contract("demo::Chat")),
        )
        .unwrap();
        scope.add_module(zeta).unwrap();

        let mut alpha = TypeModule::new("alpha");
        alpha
            .declare(
                ImplementationDecl::at("demo::ZetaServer")
                    .implements(TypeDescriptor::contract("demo::Chat")),
            )
            .unwrap();
        scope.add_module(alpha).unwrap();

        let found = scope.implementations_of(&TypeDescriptor::contract("demo::Chat"));
        let paths: Vec<_> = found.iter().map(|i| i.descriptor().path()).collect();
        assert_eq!(paths, vec!["demo::AlphaServer", "demo::ZetaServer"]);
    }

    #[test]
    fn extends_cycles_terminate_the_walk() {
        let mut module = TypeModule::new("cyclic");
        module
            .declare(ContractDecl::at("demo::A").extends(TypeDescriptor::contract("demo::B")))
            .unwrap();
        module
            .declare(ContractDecl::at("demo::B").extends(TypeDescriptor::contract("demo::A")))
            .unwrap();
        module
            .declare(
                ImplementationDecl::at("demo::Server")
                    .implements(TypeDescriptor::contract("demo::A")),
            )
            .unwrap();
        let mut scope = ModuleScope::new();
        scope.add_module(module).unwrap();

        // Reachable through the cycle from either side, and no target at all
        // still terminates.
        assert_eq!(
            scope
                .implementations_of(&TypeDescriptor::contract("demo::B"))
                .len(),
            1
        );
        assert!(scope
            .implementations_of(&TypeDescriptor::contract("demo::Missing"))
            .is_empty());
    }

    #[test]
    fn counts_cover_every_module() {
        let mut scope = ModuleScope::new();
        scope.add_module(chat_module()).unwrap();
        let mut ops = TypeModule::new("ops");
        ops.declare(ContractDecl::at("demo::Audit")).unwrap();
        scope.add_module(ops).unwrap();

        assert_eq!(scope.module_count(), 2);
        assert_eq!(scope.declaration_count(), 3);
    }
}
