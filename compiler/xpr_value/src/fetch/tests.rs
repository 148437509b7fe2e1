use std::sync::Arc;

use pretty_assertions::assert_eq;
use xpr_types::{Kind, Signature, StructType, Type};

use super::*;
use crate::{MapValue, StructValue};

fn greeter_type() -> Arc<StructType> {
    Arc::new(
        StructType::new("Greeter")
            .aliased_field("Prefix", "prefix", Type::String)
            .method("Greet", Signature::returning(vec![Type::String], Type::String)),
    )
}

fn greeter() -> StructValue {
    StructValue::new(greeter_type())
        .set("Prefix", "hello")
        .implement("Greet", |args| match args {
            [Value::Struct(this), Value::String(who)] => {
                let prefix = this.get("prefix").unwrap_or_default();
                Ok(Value::String(format!(
                    "{} {who}",
                    prefix.as_str().unwrap_or_default()
                )))
            }
            _ => Ok(Value::Nil),
        })
}

#[test]
fn fetch_from_map() {
    let env = Value::from(MapValue::dynamic().with("x", 1_i64).with("y", "two"));

    assert_eq!(fetch(&env, "x"), Some(Value::Int(1)));
    assert_eq!(fetch(&env, "y"), Some(Value::from("two")));
    assert_eq!(fetch(&env, "z"), None);
}

#[test]
fn fetch_from_scalar_is_none() {
    assert_eq!(fetch(&Value::Int(3), "x"), None);
    assert_eq!(fetch(&Value::Nil, "x"), None);
}

#[test]
fn fetch_struct_field_by_alias() {
    let env = Value::from(greeter());
    assert_eq!(fetch(&env, "prefix"), Some(Value::from("hello")));
    assert_eq!(fetch(&env, "Prefix"), None);
}

#[test]
fn fetch_method_binds_receiver() {
    let env = Value::from(greeter());
    let method = fetch(&env, "Greet").expect("method should resolve");

    assert_eq!(method.kind(), Kind::Func);
    let f = method.as_func().expect("bound method is a function");
    assert_eq!(f.signature().num_in(), 1);
    assert_eq!(
        f.call(&[Value::from("world")]),
        Ok(Value::from("hello world"))
    );
}

#[test]
fn method_without_body_fails_on_call() {
    let env = Value::from(StructValue::new(greeter_type()));
    let method = fetch(&env, "Greet").expect("method should resolve");
    let f = method.as_func().expect("bound method is a function");

    assert_eq!(
        f.call(&[Value::from("x")]),
        Err(crate::CallError::MissingBody {
            name: "Greet".into()
        })
    );
}

#[test]
fn fetch_promotes_embedded_members() {
    let inner = greeter_type();
    let outer_ty = Arc::new(
        StructType::new("Env")
            .embed(Arc::clone(&inner))
            .field("Count", Type::Int),
    );
    let env = Value::from(
        StructValue::new(outer_ty)
            .set("Greeter", greeter())
            .set("Count", 2_i64),
    );

    assert_eq!(fetch(&env, "Count"), Some(Value::Int(2)));
    assert_eq!(fetch(&env, "prefix"), Some(Value::from("hello")));
    assert!(fetch(&env, "Greet").is_some());
    assert_eq!(fetch(&env, "missing"), None);
}
