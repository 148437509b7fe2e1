use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kinds() {
    assert_eq!(Type::Int.kind(), Kind::Int);
    assert_eq!(Type::map(Type::String, Type::Any).kind(), Kind::Map);
    assert_eq!(Type::array(Type::Bool).kind(), Kind::Array);
    assert_eq!(
        Type::func(Signature::returning(vec![], Type::Int)).kind(),
        Kind::Func
    );
    assert!(Kind::Func.is_callable());
    assert!(!Kind::Map.is_callable());
}

#[test]
fn display_nested() {
    let ty = Type::map(Type::String, Type::array(Type::Int));
    assert_eq!(ty.to_string(), "map[string][]int");

    let point = Arc::new(StructType::new("Point").field("X", Type::Int));
    assert_eq!(Type::Struct(point).to_string(), "Point");
}

#[test]
fn alias_is_the_expression_name() {
    let user = StructType::new("User")
        .aliased_field("FirstName", "first_name", Type::String)
        .field("Age", Type::Int);

    assert_eq!(user.field_index("first_name"), Some(0));
    assert_eq!(user.field_index("FirstName"), None);
    assert_eq!(user.field_index("Age"), Some(1));
}

#[test]
fn embedded_struct_is_exposed() {
    let base = Arc::new(StructType::new("Base").field("Id", Type::Int));
    let outer = StructType::new("Outer").embed(Arc::clone(&base)).field("Name", Type::String);

    let embedded = outer.fields[0].embedded_struct();
    assert_eq!(embedded.map(|s| s.name.as_str()), Some("Base"));
    assert!(outer.fields[1].embedded_struct().is_none());
}
