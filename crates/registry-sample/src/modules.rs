//! # Scope Assembly
//!
//! Which modules contribute which types. The scope is built once here and
//! handed to the registry at startup; nothing else in the sample declares
//! types.

use crate::model::{Alerts, Audit, Chat, ChatServer, EmailAlerts, Greeter, PagerAlerts};
use actor_registry::{type_module, DeclarationError, ModuleScope, TypeModule};

/// The full demo scope: the chat module plus the operations module.
pub fn demo_scope() -> Result<ModuleScope, DeclarationError> {
    let mut scope = ModuleScope::new();
    scope.add_module(chat_module()?)?;
    scope.add_module(ops_module()?)?;
    Ok(scope)
}

/// Chat-facing types.
pub fn chat_module() -> Result<TypeModule, DeclarationError> {
    type_module!("chat", {
        contract dyn Chat;
        class ChatServer: dyn Chat;
        class Greeter;
    })
}

/// Operational types: alert delivery and the audit trail. The audit contract
/// keeps a name override so lookups use "audit-log" rather than "Audit".
pub fn ops_module() -> Result<TypeModule, DeclarationError> {
    type_module!("ops", {
        contract dyn Audit as "audit-log";
        contract dyn Alerts;
        class EmailAlerts: dyn Alerts;
        class PagerAlerts: dyn Alerts;
    })
}
