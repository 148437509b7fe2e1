//! Name-based lookup into an environment value.

use crate::Value;

/// Look up `name` directly in `env`.
///
/// - Maps: the entry under the string key `name`.
/// - Structs: a field (by expression name) or a method bound to the struct,
///   searching promoted members of embedded structs after the struct's own.
/// - Anything else has no members.
///
/// Missing names yield `None`.
pub fn fetch(env: &Value, name: &str) -> Option<Value> {
    match env {
        Value::Map(map) => map.get_str(name).cloned(),
        Value::Struct(record) => record.get(name),
        _ => None,
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for clarity")]
mod tests;
