//! Flat type-name synthesizer
//!
//! Produces a single type-id string with no identifier-insertion point.
//! Unlike the declarator, the recursion is linear: cv-qualifiers trail the
//! inner name (`int const`), pointer and reference tokens append directly,
//! and only arrays and functions keep their fixed `(*)`/`(&)`/`(&&)` group
//! shapes.

use crate::declarator::function_qualifiers;
use crate::error::DeclError;
use crate::registry::Registry;
use crate::ty::{TemplateInstance, Type};

/// Flat type-name synthesis over a read-only registry
#[derive(Debug, Clone)]
pub struct TypeNameContext<'a> {
    registry: &'a Registry,
}

impl<'a> TypeNameContext<'a> {
    /// Create a new type-name context
    pub fn new(registry: &'a Registry) -> Self {
        TypeNameContext { registry }
    }

    /// Synthesize the flat name of `ty`
    pub fn type_name(&self, ty: &Type) -> Result<String, DeclError> {
        self.render(&ty.normalized())
    }

    fn render(&self, ty: &Type) -> Result<String, DeclError> {
        match ty {
            Type::Primitive(primitive) => {
                Ok(self.registry.primitive_name(*primitive)?.to_string())
            }
            Type::Named(class) => Ok(self.registry.class_name(*class)?.to_string()),
            Type::Template(instance) => self.template_text(instance),
            Type::Qualified(q) => {
                let inner = self.render(&q.inner)?;
                let words = match (q.is_const, q.is_volatile) {
                    (true, true) => " const volatile",
                    (true, false) => " const",
                    (false, true) => " volatile",
                    (false, false) => "",
                };
                Ok(format!("{}{}", inner, words))
            }
            Type::Pointer(inner) => self.decorated(inner, "*", "(*)"),
            Type::LValueRef(inner) => self.decorated(inner, "&", "(&)"),
            Type::RValueRef(inner) => self.decorated(inner, "&&", "(&&)"),
            Type::SizedArray(_) | Type::UnsizedArray(_) => {
                let (scalar, dimensions) = array_parts(ty);
                Ok(format!("{}{}", self.render(scalar)?, dimensions))
            }
            Type::Function(function) => {
                Ok(format!(
                    "{}({}){}",
                    self.render(&function.result)?,
                    self.parameter_list(&function.params, function.variadic)?,
                    function_qualifiers(function)
                ))
            }
            Type::MemberPointer(member_pointer) => {
                let class = self.render(&member_pointer.class)?;
                if let Type::Function(function) = &*member_pointer.member {
                    Ok(format!(
                        "{}({}::*)({}){}",
                        self.render(&function.result)?,
                        class,
                        self.parameter_list(&function.params, function.variadic)?,
                        function_qualifiers(function)
                    ))
                } else {
                    Ok(format!("{} {}::*", self.render(&member_pointer.member)?, class))
                }
            }
        }
    }

    /// Append a pointer or reference token, using the grouped form for array
    /// and function operands
    fn decorated(&self, inner: &Type, plain: &str, grouped: &str) -> Result<String, DeclError> {
        match inner {
            Type::SizedArray(_) | Type::UnsizedArray(_) => {
                let (scalar, dimensions) = array_parts(inner);
                Ok(format!("{}{}{}", self.render(scalar)?, grouped, dimensions))
            }
            Type::Function(function) => Ok(format!(
                "{}{}({}){}",
                self.render(&function.result)?,
                grouped,
                self.parameter_list(&function.params, function.variadic)?,
                function_qualifiers(function)
            )),
            other => Ok(format!("{}{}", self.render(other)?, plain)),
        }
    }

    /// Comma-joined flat parameter names, with the variadic tail
    fn parameter_list(&self, params: &[Type], variadic: bool) -> Result<String, DeclError> {
        let mut names = params
            .iter()
            .map(|param| self.render(param))
            .collect::<Result<Vec<_>, _>>()?;
        if variadic {
            names.push("...".to_string());
        }
        Ok(names.join(", "))
    }

    /// Alias name of an instantiation if registered, else `Name<Args...>`
    /// over flat argument names
    fn template_text(&self, instance: &TemplateInstance) -> Result<String, DeclError> {
        if let Some(alias) = self.registry.alias_name(instance.template, &instance.args) {
            return Ok(alias.to_string());
        }
        let name = self.registry.template_name(instance.template)?;
        let args = instance
            .args
            .iter()
            .map(|arg| self.render(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}<{}>", name, args.join(", ")))
    }
}

/// Walk an array chain, yielding the scalar element and the dimension string
/// outermost-first
fn array_parts(ty: &Type) -> (&Type, String) {
    let mut dimensions = String::new();
    let mut current = ty;
    loop {
        match current {
            Type::SizedArray(array) => {
                dimensions.push_str(&format!("[{}]", array.len));
                current = &array.element;
            }
            Type::UnsizedArray(array) => {
                dimensions.push_str("[]");
                current = &array.element;
            }
            scalar => return (scalar, dimensions),
        }
    }
}

/// Synthesize the flat name of `ty`
pub fn type_name(registry: &Registry, ty: &Type) -> Result<String, DeclError> {
    TypeNameContext::new(registry).type_name(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::{FunctionType, Primitive, RefQualifier};

    fn int() -> Type {
        Type::Primitive(Primitive::Int)
    }

    fn registry() -> Registry {
        Registry::with_primitives()
    }

    #[test]
    fn test_cv_trails_the_name() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);
        assert_eq!(ctx.type_name(&int().with_const()).unwrap(), "int const");
        assert_eq!(ctx.type_name(&int().with_volatile()).unwrap(), "int volatile");
        assert_eq!(
            ctx.type_name(&int().with_const().with_volatile()).unwrap(),
            "int const volatile"
        );
    }

    #[test]
    fn test_pointer_cv_placements() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);

        // the four const placements of type-names lore
        assert_eq!(ctx.type_name(&int().ptr()).unwrap(), "int*");
        assert_eq!(ctx.type_name(&int().with_const().ptr()).unwrap(), "int const*");
        assert_eq!(ctx.type_name(&int().ptr().with_const()).unwrap(), "int* const");
        assert_eq!(
            ctx.type_name(&int().with_const().ptr().with_const()).unwrap(),
            "int const* const"
        );

        assert_eq!(
            ctx.type_name(&int().with_const().ptr().with_volatile()).unwrap(),
            "int const* volatile"
        );
        assert_eq!(
            ctx.type_name(&int().with_volatile().ptr().with_const()).unwrap(),
            "int volatile* const"
        );
    }

    #[test]
    fn test_array_forms() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);
        let cube = int().sized_array(5).sized_array(4).sized_array(3);

        assert_eq!(ctx.type_name(&cube).unwrap(), "int[3][4][5]");
        assert_eq!(ctx.type_name(&cube.clone().ptr()).unwrap(), "int(*)[3][4][5]");
        assert_eq!(ctx.type_name(&cube.clone().lref()).unwrap(), "int(&)[3][4][5]");
        assert_eq!(ctx.type_name(&cube.rref()).unwrap(), "int(&&)[3][4][5]");
    }

    #[test]
    fn test_array_scalar_keeps_its_cv() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);
        let ty = int().sized_array(3).with_const();
        assert_eq!(ctx.type_name(&ty).unwrap(), "int const[3]");
        assert_eq!(ctx.type_name(&ty.ptr()).unwrap(), "int const(*)[3]");
    }

    #[test]
    fn test_function_surface_forms() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);
        let void = Type::Primitive(Primitive::Void);

        // every marker and qualifier combination has a fixed surface form
        for (decorate, marker) in [
            (None, ""),
            (Some(Type::lref as fn(Type) -> Type), "(&)"),
            (Some(Type::rref as fn(Type) -> Type), "(&&)"),
        ] {
            for is_const in [false, true] {
                for is_volatile in [false, true] {
                    let mut function = FunctionType::new(void.clone(), vec![int()]);
                    function.is_const = is_const;
                    function.is_volatile = is_volatile;
                    let mut ty = Type::Function(function);
                    if let Some(decorate) = decorate {
                        ty = decorate(ty);
                    }

                    let mut expected = format!("void{}(int)", marker);
                    if is_const {
                        expected.push_str(" const");
                    }
                    if is_volatile {
                        expected.push_str(" volatile");
                    }
                    assert_eq!(ctx.type_name(&ty).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_function_ref_qualifiers() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);
        let void = Type::Primitive(Primitive::Void);

        let lref = Type::Function(
            FunctionType::new(void.clone(), vec![]).with_ref_qualifier(RefQualifier::LValue),
        );
        assert_eq!(ctx.type_name(&lref).unwrap(), "void() &");

        let both = Type::Function(
            FunctionType::new(void, vec![])
                .with_const()
                .with_ref_qualifier(RefQualifier::RValue),
        );
        assert_eq!(ctx.type_name(&both).unwrap(), "void() const &&");
    }

    #[test]
    fn test_pointer_to_function() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);
        let char_ty = Type::Primitive(Primitive::Char);
        let double = Type::Primitive(Primitive::Double);

        let f = Type::function(int(), vec![char_ty, double]);
        assert_eq!(ctx.type_name(&f).unwrap(), "int(char, double)");
        assert_eq!(ctx.type_name(&f.ptr()).unwrap(), "int(*)(char, double)");
    }

    #[test]
    fn test_variadic_function() {
        let registry = registry();
        let ctx = TypeNameContext::new(&registry);
        let char_ty = Type::Primitive(Primitive::Char);

        let ty = Type::Function(FunctionType::new(int(), vec![char_ty]).with_variadic());
        assert_eq!(ctx.type_name(&ty).unwrap(), "int(char, ...)");
    }

    #[test]
    fn test_unregistered_leaf_is_an_error() {
        let registry = Registry::new();
        let ctx = TypeNameContext::new(&registry);
        assert_eq!(
            ctx.type_name(&int()),
            Err(DeclError::UnregisteredPrimitive(Primitive::Int))
        );
    }
}
