//! Associative environment containers.

use xpr_types::Type;

use crate::Value;

/// A map with declared key and value types and insertion-ordered entries.
#[derive(Clone, Debug, PartialEq)]
pub struct MapValue {
    key: Type,
    value: Type,
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new(key: Type, value: Type) -> Self {
        MapValue {
            key,
            value,
            entries: Vec::new(),
        }
    }

    /// A string-keyed map of dynamically typed values.
    pub fn dynamic() -> Self {
        Self::new(Type::String, Type::Any)
    }

    /// Whether this map is string-keyed with dynamically typed values.
    pub fn is_dynamic(&self) -> bool {
        self.key == Type::String && self.value == Type::Any
    }

    pub fn value_type(&self) -> &Type {
        &self.value
    }

    pub fn ty(&self) -> Type {
        Type::map(self.key.clone(), self.value.clone())
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a string key.
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
