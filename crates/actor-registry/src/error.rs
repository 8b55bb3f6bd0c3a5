//! # Registry Errors
//!
//! This module defines the error types used throughout the registry. Each
//! layer has its own enum: declaring types, resolving kinds, and talking to
//! the running service. Everything fails at configuration or registration
//! time; nothing here is retried.

use crate::descriptor::TypeDescriptor;

/// Errors raised while declaring types and assembling modules into a scope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    #[error("Type path must not be empty")]
    EmptyTypePath,
    #[error("Type name must not be empty")]
    EmptyTypeName,
    #[error("Module name must not be empty")]
    EmptyModuleName,
    /// A `: contract` reference pointed at a descriptor that is not a contract.
    #[error("[{reference}] referenced by [{declared}] is not a contract")]
    NotAContract {
        declared: TypeDescriptor,
        reference: TypeDescriptor,
    },
    #[error("[{declared}] cannot declare itself as its own contract")]
    SelfContract { declared: TypeDescriptor },
    #[error("[{path}] is already declared in module [{module}]")]
    DuplicateDeclaration {
        path: &'static str,
        module: &'static str,
    },
    #[error("Module [{module}] is already part of the scope")]
    DuplicateModule { module: &'static str },
}

/// Errors raised while resolving a type into an actor kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Actor type name must not be empty")]
    EmptyTypeName,
    /// The resolution target is not declared anywhere in the scope.
    #[error("[{target}] is not declared in the scope")]
    UndeclaredType { target: TypeDescriptor },
    /// An implementation names a contract the scope does not declare.
    #[error("Contract [{contract}] declared by [{implementation}] is not in the scope")]
    UndeclaredContract {
        implementation: TypeDescriptor,
        contract: TypeDescriptor,
    },
    /// More than one implementation in scope claims the contract. The kind
    /// cannot be formed; the conflict list is sorted by path.
    #[error(
        "Custom actor contract [{contract}] is implemented by multiple classes: {}",
        .implementations.iter().map(|d| d.path()).collect::<Vec<_>>().join(" ; ")
    )]
    AmbiguousImplementation {
        contract: TypeDescriptor,
        implementations: Vec<TypeDescriptor>,
    },
}

/// Errors surfaced by the registry service and its catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),
    /// A different kind already answers to this logical name.
    #[error(
        "Actor type [{name}] is already registered with a different identity: \
         existing [{existing}], attempted [{attempted}]"
    )]
    DuplicateTypeName {
        name: String,
        existing: String,
        attempted: String,
    },
    #[error("Registry closed")]
    RegistryClosed,
    #[error("Registry dropped response channel")]
    RegistryDropped,
}
