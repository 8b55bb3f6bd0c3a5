//! # Type Descriptors
//!
//! Stable, sortable identities for the types that participate in actor kinds.
//! A descriptor stands in for a Rust type the way a reflection handle would in
//! runtimes that have one: it carries the fully qualified path of the type plus
//! which side of a kind it belongs to.

use serde::Serialize;
use std::fmt;

/// Which role a declared type plays in an actor kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TypeKind {
    /// A contract trait: the customer-facing face of a kind.
    Contract,
    /// A concrete type that backs a kind.
    Implementation,
}

/// A stable identity token for a declared type.
///
/// The `path` is the fully qualified symbol path of the type, unique within a
/// scope. Descriptors order by path, which is what makes identity keys and
/// conflict lists canonical regardless of declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TypeDescriptor {
    path: &'static str,
    kind: TypeKind,
}

impl TypeDescriptor {
    /// Descriptor for a contract at an explicit path.
    pub const fn contract(path: &'static str) -> Self {
        Self {
            path,
            kind: TypeKind::Contract,
        }
    }

    /// Descriptor for an implementation at an explicit path.
    pub const fn implementation(path: &'static str) -> Self {
        Self {
            path,
            kind: TypeKind::Implementation,
        }
    }

    /// Descriptor for a contract trait, with the path derived from the type.
    ///
    /// Accepts the trait object form (`of_contract::<dyn Chat>()`); the
    /// `dyn ` prefix is stripped so the path names the trait itself.
    pub fn of_contract<T: ?Sized>() -> Self {
        let path = std::any::type_name::<T>();
        Self {
            path: path.strip_prefix("dyn ").unwrap_or(path),
            kind: TypeKind::Contract,
        }
    }

    /// Descriptor for an implementation, with the path derived from the type.
    pub fn of_implementation<T>() -> Self {
        Self {
            path: std::any::type_name::<T>(),
            kind: TypeKind::Implementation,
        }
    }

    /// The fully qualified path of the type.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_contract(&self) -> bool {
        self.kind == TypeKind::Contract
    }

    pub fn is_implementation(&self) -> bool {
        self.kind == TypeKind::Implementation
    }

    /// The unqualified tail of the path (e.g. "Chat" for "demo::chat::Chat").
    ///
    /// This is the default logical name of a declaration without an override.
    pub fn type_name(&self) -> &'static str {
        self.path.split("::").last().unwrap_or(self.path)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}
