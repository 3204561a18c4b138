//! Split-declaration synthesizer
//!
//! Renders a descriptor as a C++ declaration by accumulating the part before
//! the identifier and the part after it independently. Pointer, reference,
//! and cv tokens grow the prefix right-to-left; array brackets and parameter
//! lists grow the suffix left-to-right; a pointer or reference into an array
//! or function type parenthesizes the accumulated pair, which is what keeps
//! `int(*)[3]` distinct from `int*[3]`.

use crate::error::DeclError;
use crate::registry::Registry;
use crate::ty::{FunctionType, RefQualifier, TemplateInstance, Type};

/// A declaration split around the identifier-insertion point
///
/// The pair is threaded through the recursion whole; outer layers extend both
/// ends independently and the two halves only meet in [`SplitDeclaration::bare`]
/// or [`SplitDeclaration::with_identifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitDeclaration {
    /// Everything before the identifier position
    pub prefix: String,
    /// Everything after the identifier position
    pub suffix: String,
}

impl SplitDeclaration {
    /// The bare type name: both halves joined with nothing between them
    pub fn bare(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
    }

    /// The declaration with `identifier` inserted, separated by one space
    pub fn with_identifier(&self, identifier: &str) -> String {
        format!("{} {}{}", self.prefix, identifier, self.suffix)
    }
}

/// Declaration synthesis over a read-only registry
#[derive(Debug, Clone)]
pub struct DeclarationContext<'a> {
    registry: &'a Registry,
}

impl<'a> DeclarationContext<'a> {
    /// Create a new declaration context
    pub fn new(registry: &'a Registry) -> Self {
        DeclarationContext { registry }
    }

    /// Synthesize the split declaration of `ty`
    pub fn split(&self, ty: &Type) -> Result<SplitDeclaration, DeclError> {
        self.render(&ty.normalized(), SplitDeclaration::default())
    }

    /// Synthesize the bare type name of `ty`
    pub fn type_decl(&self, ty: &Type) -> Result<String, DeclError> {
        Ok(self.split(ty)?.bare())
    }

    /// Synthesize the declaration of a variable or parameter named
    /// `identifier` with type `ty`
    pub fn named_decl(&self, ty: &Type, identifier: &str) -> Result<String, DeclError> {
        Ok(self.split(ty)?.with_identifier(identifier))
    }

    /// Synthesize a variable declaration; identical to
    /// [`DeclarationContext::named_decl`]
    pub fn var_decl(&self, ty: &Type, identifier: &str) -> Result<String, DeclError> {
        self.named_decl(ty, identifier)
    }

    /// Structural recursion over a normalized descriptor
    ///
    /// `around` holds the tokens accumulated by the enclosing layers on both
    /// sides of the identifier position.
    fn render(&self, ty: &Type, around: SplitDeclaration) -> Result<SplitDeclaration, DeclError> {
        match ty {
            Type::Primitive(primitive) => {
                let name = self.registry.primitive_name(*primitive)?;
                Ok(leaf(name, around))
            }
            Type::Named(class) => {
                let name = self.registry.class_name(*class)?;
                Ok(leaf(name, around))
            }
            Type::Template(instance) => {
                let text = self.template_text(instance)?;
                Ok(leaf(&text, around))
            }
            Type::Qualified(q) => {
                let words = cv_words(q.is_const, q.is_volatile);
                if q.inner.is_basic() {
                    // cv precedes a basic type name: `const int`
                    let rendered = self.render(&q.inner, around)?;
                    Ok(SplitDeclaration {
                        prefix: format!("{} {}", words, rendered.prefix),
                        suffix: rendered.suffix,
                    })
                } else {
                    // cv follows a compound token: `int* const`
                    self.render(
                        &q.inner,
                        SplitDeclaration {
                            prefix: format!(" {}{}", words, around.prefix),
                            suffix: around.suffix,
                        },
                    )
                }
            }
            Type::Pointer(inner) => self.prefix_token("*", inner, around),
            Type::LValueRef(inner) => self.prefix_token("&", inner, around),
            Type::RValueRef(inner) => self.prefix_token("&&", inner, around),
            Type::SizedArray(array) => self.render(
                &array.element,
                SplitDeclaration {
                    prefix: around.prefix,
                    suffix: format!("{}[{}]", around.suffix, array.len),
                },
            ),
            Type::UnsizedArray(array) => self.render(
                &array.element,
                SplitDeclaration {
                    prefix: around.prefix,
                    suffix: format!("{}[]", around.suffix),
                },
            ),
            Type::Function(function) => {
                let tail = format!(
                    "({}){}",
                    self.parameter_list(&function.params, function.variadic)?,
                    function_qualifiers(function)
                );
                if function.result.unqualified().is_pointer_or_reference() {
                    // the parameter list decorates whatever the result's own
                    // recursion produces: `void(*)()`, `int&(&&)(int, ...)`
                    self.render(
                        &function.result,
                        SplitDeclaration {
                            prefix: around.prefix,
                            suffix: format!("{}{}", around.suffix, tail),
                        },
                    )
                } else {
                    let result = self.type_decl(&function.result)?;
                    Ok(SplitDeclaration {
                        prefix: format!("{}{}", result, around.prefix),
                        suffix: format!("{}{}", around.suffix, tail),
                    })
                }
            }
            Type::MemberPointer(member_pointer) => {
                let class = self.type_decl(&member_pointer.class)?;
                let around = if requires_parentheses(&member_pointer.member) {
                    SplitDeclaration {
                        prefix: format!("({}::*{}", class, around.prefix),
                        suffix: format!("{})", around.suffix),
                    }
                } else {
                    SplitDeclaration {
                        prefix: format!(" {}::*{}", class, around.prefix),
                        suffix: around.suffix,
                    }
                };
                self.render(&member_pointer.member, around)
            }
        }
    }

    /// Prepend a pointer or reference token, parenthesizing around an array
    /// or function operand
    fn prefix_token(
        &self,
        token: &str,
        inner: &Type,
        around: SplitDeclaration,
    ) -> Result<SplitDeclaration, DeclError> {
        let around = if requires_parentheses(inner) {
            SplitDeclaration {
                prefix: format!("({}{}", token, around.prefix),
                suffix: format!("{})", around.suffix),
            }
        } else {
            SplitDeclaration {
                prefix: format!("{}{}", token, around.prefix),
                suffix: around.suffix,
            }
        };
        self.render(inner, around)
    }

    /// Comma-joined bare parameter type names, with the variadic tail
    fn parameter_list(&self, params: &[Type], variadic: bool) -> Result<String, DeclError> {
        let mut names = params
            .iter()
            .map(|param| self.type_decl(param))
            .collect::<Result<Vec<_>, _>>()?;
        if variadic {
            names.push("...".to_string());
        }
        Ok(names.join(", "))
    }

    /// Alias name of an instantiation if registered, else `Name<Args...>`
    fn template_text(&self, instance: &TemplateInstance) -> Result<String, DeclError> {
        if let Some(alias) = self.registry.alias_name(instance.template, &instance.args) {
            return Ok(alias.to_string());
        }
        let name = self.registry.template_name(instance.template)?;
        let args = instance
            .args
            .iter()
            .map(|arg| self.type_decl(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}<{}>", name, args.join(", ")))
    }
}

/// Join a leaf name onto the front of the accumulated prefix
fn leaf(name: &str, around: SplitDeclaration) -> SplitDeclaration {
    SplitDeclaration {
        prefix: format!("{}{}", name, around.prefix),
        suffix: around.suffix,
    }
}

/// The combined qualifier word for one qualifier node
fn cv_words(is_const: bool, is_volatile: bool) -> &'static str {
    match (is_const, is_volatile) {
        (true, true) => "const volatile",
        (true, false) => "const",
        (false, true) => "volatile",
        (false, false) => "",
    }
}

/// Trailing qualifier tokens of a function type, in fixed order
pub(crate) fn function_qualifiers(function: &FunctionType) -> String {
    let mut qualifiers = String::new();
    if function.is_const {
        qualifiers.push_str(" const");
    }
    if function.is_volatile {
        qualifiers.push_str(" volatile");
    }
    match function.ref_qualifier {
        RefQualifier::None => {}
        RefQualifier::LValue => qualifiers.push_str(" &"),
        RefQualifier::RValue => qualifiers.push_str(" &&"),
    }
    qualifiers
}

/// Whether a pointer or reference into `ty` needs parentheses to bind before
/// the array or parameter-list suffix
fn requires_parentheses(ty: &Type) -> bool {
    matches!(
        ty,
        Type::SizedArray(_) | Type::UnsizedArray(_) | Type::Function(_)
    )
}

/// Synthesize the bare type name of `ty`
pub fn typedecl(registry: &Registry, ty: &Type) -> Result<String, DeclError> {
    DeclarationContext::new(registry).type_decl(ty)
}

/// Synthesize the declaration of a parameter named `identifier` with type `ty`
pub fn namedecl(registry: &Registry, ty: &Type, identifier: &str) -> Result<String, DeclError> {
    DeclarationContext::new(registry).named_decl(ty, identifier)
}

/// Synthesize the declaration of a variable named `identifier` with type `ty`
pub fn vardecl(registry: &Registry, ty: &Type, identifier: &str) -> Result<String, DeclError> {
    DeclarationContext::new(registry).var_decl(ty, identifier)
}
