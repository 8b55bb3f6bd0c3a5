//! # Actor Mappings
//!
//! The resolved identity of an actor kind: its logical name, the contract and
//! implementation behind it, and a canonical identity key. Mappings are
//! immutable values; two mappings are the same kind exactly when their keys
//! are equal.
//!
//! Resolution is a pure function of the target descriptor and the scope. It
//! never logs, never consults anything ambient, and returns the same mapping
//! for the same inputs no matter how the scope was assembled.

use crate::declaration::TypeDeclaration;
use crate::descriptor::TypeDescriptor;
use crate::error::ResolveError;
use crate::naming;
use crate::scope::ModuleScope;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The resolved identity record of an actor kind.
///
/// Constructed through [`ActorMapping::by_name`] or [`ActorMapping::resolve`]
/// only; there is no way to assemble one with an inconsistent key.
#[derive(Debug, Clone, Serialize)]
pub struct ActorMapping {
    type_name: String,
    custom_interface: Option<TypeDescriptor>,
    implementation_class: Option<TypeDescriptor>,
    constituents: Vec<TypeDescriptor>,
    key: String,
}

impl ActorMapping {
    /// A name-only mapping: a comparison and lookup token for a kind known
    /// just by its logical name.
    ///
    /// The name is trimmed; a name that is blank after trimming is rejected.
    /// A name-only mapping never equals a resolved mapping for the same name,
    /// because their constituent sets differ.
    pub fn by_name(name: &str) -> Result<Self, ResolveError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ResolveError::EmptyTypeName);
        }
        Ok(Self::assemble(name.to_string(), None, None))
    }

    /// Resolves `target` into its actor kind against `scope`.
    ///
    /// An implementation maps to itself plus the contract it claims, under
    /// the contract's name. A contract maps to itself plus its single
    /// implementation in scope; no implementation leaves the kind unbound,
    /// and more than one is [`ResolveError::AmbiguousImplementation`] with
    /// the full conflict list.
    pub fn resolve(target: &TypeDescriptor, scope: &ModuleScope) -> Result<Self, ResolveError> {
        let declaration = scope
            .declaration(target)
            .ok_or(ResolveError::UndeclaredType { target: *target })?;

        match declaration {
            TypeDeclaration::Implementation(implementation) => {
                let contract = naming::custom_interface_of(implementation, scope)?;
                let type_name = match contract {
                    Some(contract) => naming::contract_name(contract),
                    None => naming::implementation_name(implementation),
                };
                Ok(Self::assemble(
                    type_name.to_string(),
                    contract.map(|c| c.descriptor()),
                    Some(*target),
                ))
            }
            TypeDeclaration::Contract(contract) => {
                let implementations = scope.implementations_of(target);
                let implementation_class = match implementations.len() {
                    0 => None,
                    1 => Some(implementations[0].descriptor()),
                    _ => {
                        return Err(ResolveError::AmbiguousImplementation {
                            contract: *target,
                            implementations: implementations
                                .iter()
                                .map(|i| i.descriptor())
                                .collect(),
                        });
                    }
                };
                Ok(Self::assemble(
                    naming::contract_name(contract).to_string(),
                    Some(*target),
                    implementation_class,
                ))
            }
        }
    }

    fn assemble(
        type_name: String,
        custom_interface: Option<TypeDescriptor>,
        implementation_class: Option<TypeDescriptor>,
    ) -> Self {
        let constituents: Vec<TypeDescriptor> = [custom_interface, implementation_class]
            .into_iter()
            .flatten()
            .collect();
        let key = identity_key(&type_name, &constituents);
        Self {
            type_name,
            custom_interface,
            implementation_class,
            constituents,
            key,
        }
    }

    /// The logical actor type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The contract side of the kind, if any.
    pub fn custom_interface(&self) -> Option<TypeDescriptor> {
        self.custom_interface
    }

    /// The implementation side of the kind, if any.
    pub fn implementation_class(&self) -> Option<TypeDescriptor> {
        self.implementation_class
    }

    /// The types that make up the kind, contract first. Display order only;
    /// identity does not depend on it.
    pub fn constituents(&self) -> &[TypeDescriptor] {
        &self.constituents
    }

    /// The canonical identity key: the name, an arrow, and the constituent
    /// paths sorted and joined with `;`.
    pub fn key(&self) -> &str {
        &self.key
    }
}

fn identity_key(type_name: &str, constituents: &[TypeDescriptor]) -> String {
    let mut paths: Vec<&str> = constituents.iter().map(|d| d.path()).collect();
    paths.sort_unstable();
    format!("{} -> {}", type_name, paths.join(";"))
}

impl PartialEq for ActorMapping {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ActorMapping {}

impl Hash for ActorMapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for ActorMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
