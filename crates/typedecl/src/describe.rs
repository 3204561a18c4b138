//! English-prose type descriptions
//!
//! Renders a descriptor as readable prose ("pointer to array of 5 const
//! ints"), sharing the registry with the syntactic synthesizers. Pluralized
//! forms exist because array elements are always described in the plural.

use crate::error::DeclError;
use crate::names::TypeNameContext;
use crate::registry::Registry;
use crate::ty::{RefQualifier, Type};

/// Prose description synthesis over a read-only registry
#[derive(Debug, Clone)]
pub struct DescriptionContext<'a> {
    registry: &'a Registry,
}

impl<'a> DescriptionContext<'a> {
    /// Create a new description context
    pub fn new(registry: &'a Registry) -> Self {
        DescriptionContext { registry }
    }

    /// Describe `ty` in English
    pub fn describe(&self, ty: &Type) -> Result<String, DeclError> {
        self.render(&ty.normalized(), false)
    }

    fn render(&self, ty: &Type, plural: bool) -> Result<String, DeclError> {
        let names = TypeNameContext::new(self.registry);
        match ty {
            Type::Primitive(_) | Type::Named(_) | Type::Template(_) => {
                let mut name = names.type_name(ty)?;
                if plural {
                    name.push('s');
                }
                Ok(name)
            }
            Type::Qualified(q) => {
                let words = match (q.is_const, q.is_volatile) {
                    (true, true) => "const volatile",
                    (true, false) => "const",
                    (false, true) => "volatile",
                    (false, false) => "",
                };
                Ok(format!("{} {}", words, self.render(&q.inner, plural)?))
            }
            Type::Pointer(inner) => {
                let prefix = if plural { "pointers to" } else { "pointer to" };
                Ok(format!("{} {}", prefix, self.render(inner, false)?))
            }
            Type::LValueRef(inner) => {
                let prefix = if plural {
                    "lvalue references to"
                } else {
                    "lvalue reference to"
                };
                Ok(format!("{} {}", prefix, self.render(inner, false)?))
            }
            Type::RValueRef(inner) => {
                let prefix = if plural {
                    "rvalue references to"
                } else {
                    "rvalue reference to"
                };
                Ok(format!("{} {}", prefix, self.render(inner, false)?))
            }
            Type::SizedArray(array) => {
                let prefix = if plural { "arrays of" } else { "array of" };
                Ok(format!(
                    "{} {} {}",
                    prefix,
                    array.len,
                    self.render(&array.element, true)?
                ))
            }
            Type::UnsizedArray(array) => {
                let prefix = if plural { "arrays of" } else { "array of" };
                Ok(format!("{} {}", prefix, self.render(&array.element, true)?))
            }
            Type::Function(function) => {
                let mut words = String::new();
                if function.is_const {
                    words.push_str("const ");
                }
                if function.is_volatile {
                    words.push_str("volatile ");
                }
                words.push_str(if plural { "functions" } else { "function" });

                let mut params = function
                    .params
                    .iter()
                    .map(|param| names.type_name(param))
                    .collect::<Result<Vec<_>, _>>()?;
                if function.variadic {
                    params.push("...".to_string());
                }

                let mut description = format!(
                    "{} ({}) returning {}",
                    words,
                    params.join(", "),
                    self.render(&function.result, false)?
                );
                match function.ref_qualifier {
                    RefQualifier::None => {}
                    RefQualifier::LValue => description.push_str(", &-qualified"),
                    RefQualifier::RValue => description.push_str(", &&-qualified"),
                }
                Ok(description)
            }
            Type::MemberPointer(member_pointer) => {
                let prefix = if plural {
                    "pointers to member of"
                } else {
                    "pointer to member of"
                };
                Ok(format!(
                    "{} {} with type {}",
                    prefix,
                    names.type_name(&member_pointer.class)?,
                    self.render(&member_pointer.member, false)?
                ))
            }
        }
    }
}

/// Describe `ty` in English
pub fn describe(registry: &Registry, ty: &Type) -> Result<String, DeclError> {
    DescriptionContext::new(registry).describe(ty)
}
