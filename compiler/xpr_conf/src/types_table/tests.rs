use std::sync::Arc;

use pretty_assertions::assert_eq;
use xpr_types::{Signature, StructType, Type};
use xpr_value::{MapValue, StructValue, Value};

use super::*;

fn binary(ty: Type) -> Signature {
    Signature::returning(vec![ty.clone(), ty.clone()], ty)
}

#[test]
fn map_entries_become_values() {
    let env = Value::from(
        MapValue::dynamic()
            .with("count", 1_i64)
            .with("name", "xpr")
            .with("nothing", Value::Nil)
            .with(
                "Add",
                Value::func("Add", binary(Type::Int), |_| Ok(Value::Nil)),
            ),
    );
    let types = create_types_table(&env);

    assert_eq!(types.len(), 3);
    assert_eq!(types["count"], Tag::value(Type::Int));
    assert_eq!(types["name"].kind(), Kind::String);
    assert!(!types.contains_key("nothing"));

    let add = &types["Add"];
    assert!(add.is_callable());
    assert!(!add.method);
    assert_eq!(add.external_arity(), Some(2));
}

#[test]
fn non_string_keys_are_skipped() {
    let env = Value::from(
        MapValue::new(Type::Int, Type::String)
            .with(1_i64, "one")
            .with(2_i64, "two"),
    );
    assert!(create_types_table(&env).is_empty());
}

#[test]
fn scalars_have_no_catalogue() {
    assert!(create_types_table(&Value::Int(1)).is_empty());
    assert!(create_types_table(&Value::Nil).is_empty());
}

#[test]
fn struct_fields_and_methods() {
    let ty = Arc::new(
        StructType::new("Env")
            .field("Count", Type::Int)
            .aliased_field("UserName", "user", Type::String)
            .method("Add", binary(Type::Int)),
    );
    let types = create_types_table(&Value::from(StructValue::new(Arc::clone(&ty))));

    assert_eq!(types["Count"], Tag::field(Type::Int, 0));
    assert_eq!(types["user"].field_index.as_slice(), &[1]);
    assert!(!types.contains_key("UserName"));

    let add = &types["Add"];
    assert!(add.method);
    assert_eq!(add.method_index, Some(0));
    let sig = add.signature().expect("methods are callable");
    assert_eq!(sig.num_in(), 3);
    assert_eq!(sig.inputs()[0], Type::Struct(ty));
    assert_eq!(add.external_arity(), Some(2));
}

#[test]
fn embedded_fields_are_promoted() {
    let base = Arc::new(
        StructType::new("Base")
            .field("Id", Type::Int)
            .field("Name", Type::Int)
            .method("Describe", Signature::returning(vec![], Type::String)),
    );
    let outer = Arc::new(
        StructType::new("Outer")
            .field("Flag", Type::Bool)
            .embed(Arc::clone(&base))
            .field("Name", Type::String),
    );
    let types = create_types_table(&Value::from(StructValue::new(Arc::clone(&outer))));

    // Promoted from Base, path goes through the embedding field.
    assert_eq!(types["Id"].field_index.as_slice(), &[1, 0]);
    // Declared directly on Outer after the embedding: wins.
    assert_eq!(types["Name"].ty, Type::String);
    assert_eq!(types["Name"].field_index.as_slice(), &[2]);
    // The embedded struct itself is addressable by its type name.
    assert_eq!(types["Base"].ty, Type::Struct(base));

    let describe = &types["Describe"];
    assert!(describe.method);
    let sig = describe.signature().expect("methods are callable");
    assert_eq!(sig.inputs()[0], Type::Struct(outer));
}

#[test]
fn own_methods_shadow_promoted_ones() {
    let base = Arc::new(StructType::new("Base").method("Run", binary(Type::Int)));
    let outer = Arc::new(
        StructType::new("Outer")
            .embed(base)
            .method("Run", Signature::returning(vec![Type::Int], Type::Int)),
    );
    let types = create_types_table(&Value::from(StructValue::new(outer)));

    assert_eq!(types["Run"].external_arity(), Some(1));
    assert_eq!(types["Run"].method_index, Some(0));
}

#[test]
fn own_field_hides_own_method() {
    let ty = Arc::new(
        StructType::new("Env")
            .field("Len", Type::Int)
            .method("Len", Signature::returning(vec![], Type::Int))
            .method("Size", Signature::returning(vec![], Type::Int)),
    );
    let types = create_types_table(&Value::from(StructValue::new(ty)));

    assert!(!types["Len"].method);
    assert_eq!(types["Len"].kind(), Kind::Int);
    // Hidden methods take no slot in the method set.
    assert_eq!(types["Size"].method_index, Some(0));
}

#[test]
fn own_field_hides_promoted_method() {
    let base = Arc::new(StructType::new("Base").method("Add", binary(Type::Int)));
    let outer = Arc::new(
        StructType::new("Outer")
            .field("Add", Type::Int)
            .embed(base),
    );
    let types = create_types_table(&Value::from(StructValue::new(outer)));

    assert!(!types["Add"].method);
    assert!(!types["Add"].is_callable());
}

#[test]
fn promoted_members_follow_embedding_order() {
    // `A` is embedded first, so its method wins over `B`'s field.
    let a = Arc::new(StructType::new("A").method("M", binary(Type::Int)));
    let b = Arc::new(StructType::new("B").field("M", Type::String));
    let outer = Arc::new(StructType::new("Outer").embed(a).embed(b));
    let types = create_types_table(&Value::from(StructValue::new(outer)));

    assert!(types["M"].method);
}

#[test]
fn catalogue_agrees_with_lookup() {
    let base = Arc::new(
        StructType::new("Base")
            .field("Id", Type::Int)
            .method("Add", binary(Type::Int))
            .method("Describe", Signature::returning(vec![], Type::String)),
    );
    let outer = Arc::new(
        StructType::new("Outer")
            .field("Add", Type::Int)
            .field("Len", Type::Int)
            .embed(Arc::clone(&base))
            .method("Len", Signature::returning(vec![], Type::Int)),
    );
    let inner = StructValue::new(base)
        .set("Id", 7_i64)
        .implement("Add", |_| Ok(Value::Nil))
        .implement("Describe", |_| Ok(Value::from("base")));
    let env = Value::from(
        StructValue::new(outer)
            .set("Add", 1_i64)
            .set("Len", 2_i64)
            .set("Base", inner),
    );
    let types = create_types_table(&env);

    for name in ["Add", "Len", "Base", "Id", "Describe"] {
        let found = xpr_value::fetch(&env, name).expect("every catalogued name resolves");
        assert_eq!(types[name].kind(), found.kind(), "kind of `{name}`");
        assert_eq!(types[name].is_callable(), found.kind().is_callable());
    }
    assert_eq!(types.len(), 5);
}

#[test]
fn earlier_promoted_field_wins_over_later_promoted() {
    let a = Arc::new(StructType::new("A").field("X", Type::Int));
    let b = Arc::new(StructType::new("B").field("X", Type::String));
    let outer = StructType::new("Outer").embed(a).embed(b);

    let types = fields_from_struct(&outer);
    assert_eq!(types["X"].ty, Type::Int);
    assert_eq!(types["X"].field_index.as_slice(), &[0, 0]);
}
