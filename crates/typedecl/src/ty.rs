//! Core type definitions for the C++ type-descriptor model

use std::fmt;

/// Opaque identifier for a user-registered class or struct
///
/// The value is chosen by the caller at registration time and carries no
/// meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Opaque identifier for a user-registered class template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub u32);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemplateId({})", self.0)
    }
}

/// The closed set of C++ basic types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// The `void` type
    Void,
    /// The `bool` type
    Bool,
    /// The `char` type
    Char,
    /// The `signed char` type
    SignedChar,
    /// The `unsigned char` type
    UnsignedChar,
    /// The `wchar_t` type
    WcharT,
    /// The `char16_t` type
    Char16T,
    /// The `char32_t` type
    Char32T,
    /// The `short int` type
    ShortInt,
    /// The `unsigned short int` type
    UnsignedShortInt,
    /// The `int` type
    Int,
    /// The `unsigned int` type
    UnsignedInt,
    /// The `long int` type
    LongInt,
    /// The `unsigned long int` type
    UnsignedLongInt,
    /// The `long long int` type
    LongLongInt,
    /// The `unsigned long long int` type
    UnsignedLongLongInt,
    /// The `float` type
    Float,
    /// The `double` type
    Double,
    /// The `long double` type
    LongDouble,
}

impl Primitive {
    /// Every primitive, in declaration order
    pub const ALL: [Primitive; 19] = [
        Primitive::Void,
        Primitive::Bool,
        Primitive::Char,
        Primitive::SignedChar,
        Primitive::UnsignedChar,
        Primitive::WcharT,
        Primitive::Char16T,
        Primitive::Char32T,
        Primitive::ShortInt,
        Primitive::UnsignedShortInt,
        Primitive::Int,
        Primitive::UnsignedInt,
        Primitive::LongInt,
        Primitive::UnsignedLongInt,
        Primitive::LongLongInt,
        Primitive::UnsignedLongLongInt,
        Primitive::Float,
        Primitive::Double,
        Primitive::LongDouble,
    ];

    /// The canonical C++ spelling of this primitive
    pub fn spelling(&self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Bool => "bool",
            Primitive::Char => "char",
            Primitive::SignedChar => "signed char",
            Primitive::UnsignedChar => "unsigned char",
            Primitive::WcharT => "wchar_t",
            Primitive::Char16T => "char16_t",
            Primitive::Char32T => "char32_t",
            Primitive::ShortInt => "short int",
            Primitive::UnsignedShortInt => "unsigned short int",
            Primitive::Int => "int",
            Primitive::UnsignedInt => "unsigned int",
            Primitive::LongInt => "long int",
            Primitive::UnsignedLongInt => "unsigned long int",
            Primitive::LongLongInt => "long long int",
            Primitive::UnsignedLongLongInt => "unsigned long long int",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::LongDouble => "long double",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

/// Ref-qualifier of a function type: none, `&`, or `&&`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefQualifier {
    /// No ref-qualifier
    #[default]
    None,
    /// Lvalue ref-qualifier (`&`)
    LValue,
    /// Rvalue ref-qualifier (`&&`)
    RValue,
}

/// cv-qualification of an inner type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedType {
    /// The qualified type
    pub inner: Box<Type>,
    /// `const` qualification
    pub is_const: bool,
    /// `volatile` qualification
    pub is_volatile: bool,
}

/// Array of known bound: `T[N]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SizedArrayType {
    /// Element type
    pub element: Box<Type>,
    /// Number of elements
    pub len: u64,
}

/// Array of unknown bound: `T[]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsizedArrayType {
    /// Element type
    pub element: Box<Type>,
}

/// Function type: result, parameters, and qualifiers
///
/// Covers both free function types and member-function signatures; the
/// cv-qualifiers and ref-qualifier are only meaningful for the latter but are
/// rendered wherever present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    /// Result type
    pub result: Box<Type>,
    /// Parameter types, in order
    pub params: Vec<Type>,
    /// Whether the parameter list ends with `...`
    pub variadic: bool,
    /// `const` qualification of the function itself
    pub is_const: bool,
    /// `volatile` qualification of the function itself
    pub is_volatile: bool,
    /// Ref-qualifier of the function itself
    pub ref_qualifier: RefQualifier,
}

impl FunctionType {
    /// Create a plain function type with no variadic tail and no qualifiers
    pub fn new(result: Type, params: Vec<Type>) -> Self {
        FunctionType {
            result: Box::new(result),
            params,
            variadic: false,
            is_const: false,
            is_volatile: false,
            ref_qualifier: RefQualifier::None,
        }
    }

    /// Mark the parameter list as variadic
    pub fn with_variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Add a `const` qualifier
    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Add a `volatile` qualifier
    pub fn with_volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    /// Set the ref-qualifier
    pub fn with_ref_qualifier(mut self, ref_qualifier: RefQualifier) -> Self {
        self.ref_qualifier = ref_qualifier;
        self
    }
}

/// Pointer to a class member: `T C::*`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberPointerType {
    /// Type of the member pointed to
    pub member: Box<Type>,
    /// The owning class
    pub class: Box<Type>,
}

/// Class-template instantiation: `Tmpl<A1, A2, ...>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateInstance {
    /// The class template
    pub template: TemplateId,
    /// Template arguments, in order
    pub args: Vec<Type>,
}

/// A C++ type descriptor
///
/// An immutable, owned tree: every node holds exactly one variant and owns its
/// children, so descriptors are finite and acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Basic type (`int`, `char`, `void`, ...)
    Primitive(Primitive),

    /// User-registered class or struct, looked up by identity
    Named(ClassId),

    /// cv-qualification of an inner type
    Qualified(QualifiedType),

    /// Pointer: `T*`
    Pointer(Box<Type>),

    /// Lvalue reference: `T&`
    LValueRef(Box<Type>),

    /// Rvalue reference: `T&&`
    RValueRef(Box<Type>),

    /// Array of known bound: `T[N]`
    SizedArray(SizedArrayType),

    /// Array of unknown bound: `T[]`
    UnsizedArray(UnsizedArrayType),

    /// Function type: `R(A...)` with optional qualifiers
    Function(FunctionType),

    /// Pointer to member: `T C::*`
    MemberPointer(MemberPointerType),

    /// Class-template instantiation: `Tmpl<A1, A2, ...>`
    Template(TemplateInstance),
}

impl Type {
    /// Wrap this type in a pointer
    pub fn ptr(self) -> Type {
        Type::Pointer(Box::new(self))
    }

    /// Wrap this type in an lvalue reference
    pub fn lref(self) -> Type {
        Type::LValueRef(Box::new(self))
    }

    /// Wrap this type in an rvalue reference
    pub fn rref(self) -> Type {
        Type::RValueRef(Box::new(self))
    }

    /// Wrap this type in an array of `len` elements
    pub fn sized_array(self, len: u64) -> Type {
        Type::SizedArray(SizedArrayType {
            element: Box::new(self),
            len,
        })
    }

    /// Wrap this type in an array of unknown bound
    pub fn unsized_array(self) -> Type {
        Type::UnsizedArray(UnsizedArrayType {
            element: Box::new(self),
        })
    }

    /// Add a `const` qualifier, merging with an existing qualifier node
    pub fn with_const(self) -> Type {
        match self {
            Type::Qualified(mut q) => {
                q.is_const = true;
                Type::Qualified(q)
            }
            other => Type::Qualified(QualifiedType {
                inner: Box::new(other),
                is_const: true,
                is_volatile: false,
            }),
        }
    }

    /// Add a `volatile` qualifier, merging with an existing qualifier node
    pub fn with_volatile(self) -> Type {
        match self {
            Type::Qualified(mut q) => {
                q.is_volatile = true;
                Type::Qualified(q)
            }
            other => Type::Qualified(QualifiedType {
                inner: Box::new(other),
                is_const: false,
                is_volatile: true,
            }),
        }
    }

    /// Turn this type into a pointer to a member of `class`
    pub fn member_of(self, class: Type) -> Type {
        Type::MemberPointer(MemberPointerType {
            member: Box::new(self),
            class: Box::new(class),
        })
    }

    /// Shorthand for an unqualified, non-variadic function type
    pub fn function(result: Type, params: Vec<Type>) -> Type {
        Type::Function(FunctionType::new(result, params))
    }

    /// Check if this is a basic type: a leaf whose cv-qualifiers are spelled
    /// before the type name rather than after a compound token
    pub fn is_basic(&self) -> bool {
        matches!(
            self,
            Type::Primitive(_) | Type::Named(_) | Type::Template(_)
        )
    }

    /// Check if this is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, Type::SizedArray(_) | Type::UnsizedArray(_))
    }

    /// Check if this is a function type
    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_))
    }

    /// Check if this is a pointer or a reference
    pub fn is_pointer_or_reference(&self) -> bool {
        matches!(
            self,
            Type::Pointer(_) | Type::LValueRef(_) | Type::RValueRef(_)
        )
    }

    /// Strip any cv-qualification layers, yielding the underlying type
    pub fn unqualified(&self) -> &Type {
        let mut ty = self;
        while let Type::Qualified(q) = ty {
            ty = &q.inner;
        }
        ty
    }

    /// Canonicalize the descriptor for synthesis
    ///
    /// Nested cv-qualifiers collapse into a single node, cv applied to an
    /// array distributes onto the element (`const T[N]` is an array of
    /// `const T`), cv applied to a function merges into the function's own
    /// qualifier flags, and qualifier nodes carrying no qualification
    /// dissolve.
    pub fn normalized(&self) -> Type {
        match self {
            Type::Qualified(q) => {
                let mut is_const = q.is_const;
                let mut is_volatile = q.is_volatile;
                let mut core: &Type = &q.inner;
                while let Type::Qualified(inner) = core {
                    is_const |= inner.is_const;
                    is_volatile |= inner.is_volatile;
                    core = &inner.inner;
                }
                if !is_const && !is_volatile {
                    return core.normalized();
                }
                match core {
                    Type::SizedArray(a) => Type::SizedArray(SizedArrayType {
                        element: Box::new(
                            Type::Qualified(QualifiedType {
                                inner: a.element.clone(),
                                is_const,
                                is_volatile,
                            })
                            .normalized(),
                        ),
                        len: a.len,
                    }),
                    Type::UnsizedArray(a) => Type::UnsizedArray(UnsizedArrayType {
                        element: Box::new(
                            Type::Qualified(QualifiedType {
                                inner: a.element.clone(),
                                is_const,
                                is_volatile,
                            })
                            .normalized(),
                        ),
                    }),
                    Type::Function(f) => {
                        let mut f = f.clone();
                        f.result = Box::new(f.result.normalized());
                        f.params = f.params.iter().map(Type::normalized).collect();
                        f.is_const |= is_const;
                        f.is_volatile |= is_volatile;
                        Type::Function(f)
                    }
                    other => Type::Qualified(QualifiedType {
                        inner: Box::new(other.normalized()),
                        is_const,
                        is_volatile,
                    }),
                }
            }
            Type::Pointer(inner) => Type::Pointer(Box::new(inner.normalized())),
            Type::LValueRef(inner) => Type::LValueRef(Box::new(inner.normalized())),
            Type::RValueRef(inner) => Type::RValueRef(Box::new(inner.normalized())),
            Type::SizedArray(a) => Type::SizedArray(SizedArrayType {
                element: Box::new(a.element.normalized()),
                len: a.len,
            }),
            Type::UnsizedArray(a) => Type::UnsizedArray(UnsizedArrayType {
                element: Box::new(a.element.normalized()),
            }),
            Type::Function(f) => {
                let mut f = f.clone();
                f.result = Box::new(f.result.normalized());
                f.params = f.params.iter().map(Type::normalized).collect();
                Type::Function(f)
            }
            Type::MemberPointer(m) => Type::MemberPointer(MemberPointerType {
                member: Box::new(m.member.normalized()),
                class: Box::new(m.class.normalized()),
            }),
            Type::Template(t) => Type::Template(TemplateInstance {
                template: t.template,
                args: t.args.iter().map(Type::normalized).collect(),
            }),
            Type::Primitive(_) | Type::Named(_) => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> Type {
        Type::Primitive(Primitive::Int)
    }

    #[test]
    fn test_primitive_spelling() {
        assert_eq!(Primitive::Int.spelling(), "int");
        assert_eq!(Primitive::UnsignedLongLongInt.spelling(), "unsigned long long int");
        assert_eq!(Primitive::WcharT.spelling(), "wchar_t");
        assert_eq!(format!("{}", Primitive::LongDouble), "long double");
    }

    #[test]
    fn test_type_predicates() {
        assert!(int().is_basic());
        assert!(!int().is_array());
        assert!(int().sized_array(3).is_array());
        assert!(int().unsized_array().is_array());
        assert!(Type::function(int(), vec![]).is_function());
        assert!(int().ptr().is_pointer_or_reference());
        assert!(int().lref().is_pointer_or_reference());
        assert!(!int().ptr().is_basic());
    }

    #[test]
    fn test_unqualified_peels_all_layers() {
        let ty = int().with_const().with_volatile();
        assert_eq!(ty.unqualified(), &int());

        let nested = Type::Qualified(QualifiedType {
            inner: Box::new(int().with_const()),
            is_const: false,
            is_volatile: true,
        });
        assert_eq!(nested.unqualified(), &int());
    }

    #[test]
    fn test_with_const_merges_qualifier_node() {
        let ty = int().with_const().with_volatile();
        match ty {
            Type::Qualified(q) => {
                assert!(q.is_const);
                assert!(q.is_volatile);
                assert_eq!(*q.inner, int());
            }
            other => panic!("expected a single qualifier node, got {:?}", other),
        }
    }

    #[test]
    fn test_normalized_collapses_nested_qualifiers() {
        let nested = Type::Qualified(QualifiedType {
            inner: Box::new(int().with_const()),
            is_const: false,
            is_volatile: true,
        });
        assert_eq!(nested.normalized(), int().with_const().with_volatile());
    }

    #[test]
    fn test_normalized_distributes_cv_over_arrays() {
        // const int[3][4] is an array of 3 arrays of 4 const int
        let ty = int().sized_array(4).sized_array(3).with_const();
        let expected = int().with_const().sized_array(4).sized_array(3);
        assert_eq!(ty.normalized(), expected);
    }

    #[test]
    fn test_normalized_merges_cv_into_functions() {
        let ty = Type::function(Type::Primitive(Primitive::Void), vec![]).with_const();
        match ty.normalized() {
            Type::Function(f) => {
                assert!(f.is_const);
                assert!(!f.is_volatile);
            }
            other => panic!("expected a function type, got {:?}", other),
        }
    }

    #[test]
    fn test_normalized_drops_empty_qualifier() {
        let ty = Type::Qualified(QualifiedType {
            inner: Box::new(int()),
            is_const: false,
            is_volatile: false,
        });
        assert_eq!(ty.normalized(), int());
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let ty = int().with_const().sized_array(2).ptr();
        assert_eq!(ty.normalized(), ty.normalized().normalized());
    }
}
