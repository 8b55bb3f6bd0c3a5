//! Declarative construction of [`TypeModule`](crate::scope::TypeModule)s.

/// Builds a [`TypeModule`](crate::scope::TypeModule) from a braced list of
/// contract and class declarations.
///
/// Supported forms, one declaration per line:
///
/// - `contract dyn T;`
/// - `contract dyn T: dyn Parent;` (extends one parent; chain calls to
///   [`extends`](crate::declaration::ContractDecl::extends) for more)
/// - `class T;`
/// - `class T: dyn Contract;` (the class claims the contract)
///
/// Any form may end in `as "name"` to override the logical name. Trait types
/// are spelled in their `dyn` form. The macro evaluates to
/// `Result<TypeModule, DeclarationError>`.
///
/// ```
/// use actor_registry::{type_module, ModuleScope};
///
/// trait Chat { fn post(&mut self, line: &str); }
/// struct ChatServer;
/// impl Chat for ChatServer { fn post(&mut self, _line: &str) {} }
/// struct Greeter;
///
/// # fn main() -> Result<(), actor_registry::DeclarationError> {
/// let module = type_module!("chat", {
///     contract dyn Chat;
///     class ChatServer: dyn Chat;
///     class Greeter as "hello";
/// })?;
/// assert_eq!(module.len(), 3);
///
/// let mut scope = ModuleScope::new();
/// scope.add_module(module)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! type_module {
    ($name:literal, { $($body:tt)* }) => {
        (|| -> ::std::result::Result<$crate::TypeModule, $crate::DeclarationError> {
            #[allow(unused_mut)]
            let mut module = $crate::TypeModule::new($name);
            $crate::__declare_types!(module, $($body)*);
            ::std::result::Result::Ok(module)
        })()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declare_types {
    ($module:ident,) => {};
    ($module:ident, contract $ty:ty $(: $parent:ty)? $(as $name:literal)? ; $($rest:tt)*) => {
        {
            #[allow(unused_mut)]
            let mut declaration = $crate::ContractDecl::of::<$ty>();
            $(declaration = declaration.extends($crate::TypeDescriptor::of_contract::<$parent>());)?
            $(declaration = declaration.named($name);)?
            $module.declare(declaration)?;
        }
        $crate::__declare_types!($module, $($rest)*);
    };
    ($module:ident, class $ty:ty $(: $contract:ty)? $(as $name:literal)? ; $($rest:tt)*) => {
        {
            #[allow(unused_mut)]
            let mut declaration = $crate::ImplementationDecl::of::<$ty>();
            $(declaration = declaration.implements($crate::TypeDescriptor::of_contract::<$contract>());)?
            $(declaration = declaration.named($name);)?
            $module.declare(declaration)?;
        }
        $crate::__declare_types!($module, $($rest)*);
    };
}
