//! # Naming Scheme
//!
//! How declarations turn into logical actor type names. The rules are small
//! but they are what routing keys hang off, so they live in one place:
//!
//! - a declaration with a name override uses the override;
//! - otherwise the unqualified tail of its path;
//! - an implementation that claims a contract takes the *contract's* name,
//!   which is why resolving either side of a pair lands on the same kind.

use crate::declaration::{ContractDecl, ImplementationDecl, TypeDeclaration};
use crate::error::ResolveError;
use crate::scope::ModuleScope;

/// Logical name of a contract declaration.
pub fn contract_name(contract: &ContractDecl) -> &'static str {
    contract
        .name_override()
        .unwrap_or_else(|| contract.descriptor().type_name())
}

/// Logical name of an implementation declaration, ignoring any contract it
/// claims.
pub fn implementation_name(implementation: &ImplementationDecl) -> &'static str {
    implementation
        .name_override()
        .unwrap_or_else(|| implementation.descriptor().type_name())
}

/// Logical name of a declaration viewed on its own.
pub fn actor_type_name(declaration: &TypeDeclaration) -> &'static str {
    match declaration {
        TypeDeclaration::Contract(contract) => contract_name(contract),
        TypeDeclaration::Implementation(implementation) => implementation_name(implementation),
    }
}

/// The contract declaration claimed by an implementation.
///
/// Returns `None` when no contract is claimed. A claimed contract that the
/// scope does not declare is a configuration error, not a silent `None`:
/// without reflection there is no second chance to find it later.
pub fn custom_interface_of<'scope>(
    implementation: &ImplementationDecl,
    scope: &'scope ModuleScope,
) -> Result<Option<&'scope ContractDecl>, ResolveError> {
    let contract = match implementation.contract() {
        Some(contract) => contract,
        None => return Ok(None),
    };
    match scope.contract_decl(contract) {
        Some(declaration) => Ok(Some(declaration)),
        None => Err(ResolveError::UndeclaredContract {
            implementation: implementation.descriptor(),
            contract: *contract,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;
    use crate::scope::TypeModule;

    #[test]
    fn names_default_to_the_path_tail() {
        let contract = ContractDecl::at("demo::chat::Chat");
        assert_eq!(contract_name(&contract), "Chat");

        let implementation = ImplementationDecl::at("demo::chat::ChatServer");
        assert_eq!(implementation_name(&implementation), "ChatServer");
    }

    #[test]
    fn overrides_win_over_the_tail() {
        let contract = ContractDecl::at("demo::chat::Chat").named("chat-room");
        assert_eq!(contract_name(&contract), "chat-room");

        let declaration: TypeDeclaration = contract.into();
        assert_eq!(actor_type_name(&declaration), "chat-room");
    }

    #[test]
    fn unclaimed_implementations_have_no_custom_interface() {
        let implementation = ImplementationDecl::at("demo::Greeter");
        let scope = ModuleScope::new();
        assert_eq!(custom_interface_of(&implementation, &scope), Ok(None));
    }

    #[test]
    fn claimed_contracts_are_looked_up_in_the_scope() {
        let mut module = TypeModule::new("chat");
        module.declare(ContractDecl::at("demo::Chat")).unwrap();
        let mut scope = ModuleScope::new();
        scope.add_module(module).unwrap();

        let implementation = ImplementationDecl::at("demo::ChatServer")
            .implements(TypeDescriptor::contract("demo::Chat"));
        let found = custom_interface_of(&implementation, &scope).unwrap();
        assert_eq!(found.map(|c| c.descriptor().path()), Some("demo::Chat"));
    }

    #[test]
    fn missing_claimed_contracts_are_an_error() {
        let implementation = ImplementationDecl::at("demo::ChatServer")
            .implements(TypeDescriptor::contract("demo::Chat"));
        let scope = ModuleScope::new();
        assert_eq!(
            custom_interface_of(&implementation, &scope),
            Err(ResolveError::UndeclaredContract {
                implementation: TypeDescriptor::implementation("demo::ChatServer"),
                contract: TypeDescriptor::contract("demo::Chat"),
            })
        );
    }
}
