//! C++ Declaration Synthesis
//!
//! Builds the textual C++ declaration of a type from an in-memory descriptor
//! tree: bare type names (`typedecl`), variable and parameter declarations
//! with an embedded identifier (`namedecl`/`vardecl`), flat type-id strings
//! (`type_name`), and English prose (`describe`).
//!
//! The prefix of a declaration (what comes before the identifier) and its
//! suffix (what comes after) accumulate independently during recursion and
//! only meet at the end, which is what gets C's "spiral" declarator syntax
//! right: `int(*p)[3]` is a pointer to an array, `int* p[3]` an array of
//! pointers.
//!
//! ```
//! use typedecl::{namedecl, Registry, Type, Primitive};
//!
//! let registry = Registry::with_primitives();
//! let ty = Type::Primitive(Primitive::Int).sized_array(3).ptr();
//! assert_eq!(namedecl(&registry, &ty, "p").unwrap(), "int(* p)[3]");
//! ```

#![warn(missing_docs)]

pub mod declarator;
pub mod describe;
pub mod error;
pub mod names;
pub mod registry;
pub mod ty;

pub use declarator::{namedecl, typedecl, vardecl, DeclarationContext, SplitDeclaration};
pub use describe::{describe, DescriptionContext};
pub use error::DeclError;
pub use names::{type_name, TypeNameContext};
pub use registry::Registry;
pub use ty::{
    ClassId, FunctionType, MemberPointerType, Primitive, QualifiedType, RefQualifier,
    SizedArrayType, TemplateId, TemplateInstance, Type, UnsizedArrayType,
};
