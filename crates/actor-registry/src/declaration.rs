//! # Type Declarations
//!
//! What a module says about each of its actor-relevant types. A declaration
//! is the explicit substitute for what reflection would discover at runtime:
//! whether the type is a contract or an implementation, which contract an
//! implementation claims, which contracts a contract extends, and whether the
//! logical name is overridden.

use crate::descriptor::{TypeDescriptor, TypeKind};
use crate::error::DeclarationError;
use serde::Serialize;

/// Declaration of a contract trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractDecl {
    descriptor: TypeDescriptor,
    name_override: Option<&'static str>,
    extends: Vec<TypeDescriptor>,
}

impl ContractDecl {
    /// Declares the contract trait `T`, usually spelled `of::<dyn Chat>()`.
    pub fn of<T: ?Sized>() -> Self {
        Self::from_descriptor(TypeDescriptor::of_contract::<T>())
    }

    /// Declares a contract at an explicit path.
    pub fn at(path: &'static str) -> Self {
        Self::from_descriptor(TypeDescriptor::contract(path))
    }

    fn from_descriptor(descriptor: TypeDescriptor) -> Self {
        Self {
            descriptor,
            name_override: None,
            extends: Vec::new(),
        }
    }

    /// Overrides the logical name. A later call replaces an earlier one.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name_override = Some(name);
        self
    }

    /// Adds a parent contract. Implementations of this contract also count
    /// as implementations of every parent, transitively.
    pub fn extends(mut self, parent: TypeDescriptor) -> Self {
        self.extends.push(parent);
        self
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }

    pub fn name_override(&self) -> Option<&'static str> {
        self.name_override
    }

    pub fn parents(&self) -> &[TypeDescriptor] {
        &self.extends
    }
}

/// Declaration of a concrete implementation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplementationDecl {
    descriptor: TypeDescriptor,
    name_override: Option<&'static str>,
    contract: Option<TypeDescriptor>,
}

impl ImplementationDecl {
    /// Declares the implementation type `T`.
    pub fn of<T>() -> Self {
        Self::from_descriptor(TypeDescriptor::of_implementation::<T>())
    }

    /// Declares an implementation at an explicit path.
    pub fn at(path: &'static str) -> Self {
        Self::from_descriptor(TypeDescriptor::implementation(path))
    }

    fn from_descriptor(descriptor: TypeDescriptor) -> Self {
        Self {
            descriptor,
            name_override: None,
            contract: None,
        }
    }

    /// Overrides the logical name. A later call replaces an earlier one.
    ///
    /// The override only matters for implementations without a contract;
    /// an implementation with a contract takes the contract's name.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name_override = Some(name);
        self
    }

    /// Claims a contract. An implementation has at most one; a later call
    /// replaces an earlier one.
    pub fn implements(mut self, contract: TypeDescriptor) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }

    pub fn name_override(&self) -> Option<&'static str> {
        self.name_override
    }

    pub fn contract(&self) -> Option<&TypeDescriptor> {
        self.contract.as_ref()
    }
}

/// A declaration of either side of an actor kind.
///
/// There is no third variant: a type that is neither a contract nor an
/// implementation has no place in a scope and cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeDeclaration {
    Contract(ContractDecl),
    Implementation(ImplementationDecl),
}

impl TypeDeclaration {
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            TypeDeclaration::Contract(contract) => contract.descriptor(),
            TypeDeclaration::Implementation(implementation) => implementation.descriptor(),
        }
    }

    pub fn name_override(&self) -> Option<&'static str> {
        match self {
            TypeDeclaration::Contract(contract) => contract.name_override(),
            TypeDeclaration::Implementation(implementation) => implementation.name_override(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.descriptor().kind()
    }

    /// Checks the declaration before it enters a module.
    pub(crate) fn validate(&self) -> Result<(), DeclarationError> {
        let descriptor = self.descriptor();
        if descriptor.path().trim().is_empty() {
            return Err(DeclarationError::EmptyTypePath);
        }
        if let Some(name) = self.name_override() {
            if name.trim().is_empty() {
                return Err(DeclarationError::EmptyTypeName);
            }
        }
        match self {
            TypeDeclaration::Contract(contract) => {
                for parent in contract.parents() {
                    if !parent.is_contract() {
                        return Err(DeclarationError::NotAContract {
                            declared: descriptor,
                            reference: *parent,
                        });
                    }
                }
            }
            TypeDeclaration::Implementation(implementation) => {
                if let Some(contract) = implementation.contract() {
                    if !contract.is_contract() {
                        return Err(DeclarationError::NotAContract {
                            declared: descriptor,
                            reference: *contract,
                        });
                    }
                    if contract.path() == descriptor.path() {
                        return Err(DeclarationError::SelfContract {
                            declared: descriptor,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl From<ContractDecl> for TypeDeclaration {
    fn from(declaration: ContractDecl) -> Self {
        TypeDeclaration::Contract(declaration)
    }
}

impl From<ImplementationDecl> for TypeDeclaration {
    fn from(declaration: ImplementationDecl) -> Self {
        TypeDeclaration::Implementation(declaration)
    }
}
