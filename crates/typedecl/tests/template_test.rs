use typedecl::{
    namedecl, type_name, typedecl, Primitive, Registry, TemplateId, TemplateInstance, Type,
};

const PAIR: TemplateId = TemplateId(0);
const VECTOR: TemplateId = TemplateId(1);
const ALLOCATOR: TemplateId = TemplateId(2);

fn bool_ty() -> Type {
    Type::Primitive(Primitive::Bool)
}

fn int() -> Type {
    Type::Primitive(Primitive::Int)
}

fn instance(template: TemplateId, args: Vec<Type>) -> Type {
    Type::Template(TemplateInstance { template, args })
}

fn registry() -> Registry {
    let mut registry = Registry::with_primitives();
    registry.register_template(PAIR, "std::pair").unwrap();
    registry.register_template(VECTOR, "std::vector").unwrap();
    registry.register_template(ALLOCATOR, "std::allocator").unwrap();
    // the bool/bool instantiation has its own name
    registry
        .register_alias(PAIR, vec![bool_ty(), bool_ty()], "MyPair")
        .unwrap();
    registry
}

#[test]
fn test_generic_instantiation_rendering() {
    let registry = registry();
    let ty = instance(PAIR, vec![bool_ty(), int()]);
    assert_eq!(typedecl(&registry, &ty).unwrap(), "std::pair<bool, int>");
}

#[test]
fn test_alias_takes_precedence() {
    let registry = registry();
    let ty = instance(PAIR, vec![bool_ty(), bool_ty()]);
    assert_eq!(typedecl(&registry, &ty).unwrap(), "MyPair");
    assert_eq!(type_name(&registry, &ty).unwrap(), "MyPair");
}

#[test]
fn test_qualified_instantiations() {
    let registry = registry();

    let ty = instance(PAIR, vec![bool_ty(), int()]).with_const();
    assert_eq!(typedecl(&registry, &ty).unwrap(), "const std::pair<bool, int>");

    let ty = instance(PAIR, vec![bool_ty(), bool_ty()]).with_const();
    assert_eq!(typedecl(&registry, &ty).unwrap(), "const MyPair");
}

#[test]
fn test_named_declarations_of_instantiations() {
    let registry = registry();

    let ty = instance(PAIR, vec![bool_ty(), int()]);
    assert_eq!(
        namedecl(&registry, &ty, "name").unwrap(),
        "std::pair<bool, int> name"
    );

    let ty = instance(PAIR, vec![bool_ty(), bool_ty()]);
    assert_eq!(namedecl(&registry, &ty, "name").unwrap(), "MyPair name");
}

#[test]
fn test_nested_template_arguments() {
    let registry = registry();
    let ty = instance(VECTOR, vec![int(), instance(ALLOCATOR, vec![int()])]);
    assert_eq!(
        typedecl(&registry, &ty).unwrap(),
        "std::vector<int, std::allocator<int>>"
    );
}

#[test]
fn test_instantiations_compose_with_declarators() {
    let registry = registry();

    let ty = instance(PAIR, vec![bool_ty(), int()]).ptr();
    assert_eq!(typedecl(&registry, &ty).unwrap(), "std::pair<bool, int>*");

    let ty = instance(PAIR, vec![bool_ty(), int()]).sized_array(2).ptr();
    assert_eq!(
        namedecl(&registry, &ty, "p").unwrap(),
        "std::pair<bool, int>(* p)[2]"
    );
}

#[test]
fn test_unregistered_template_is_an_error() {
    let registry = Registry::with_primitives();
    let ty = instance(PAIR, vec![bool_ty()]);
    assert!(typedecl(&registry, &ty).is_err());
}
