//! Type descriptors.

use std::fmt;
use std::sync::Arc;

use crate::{Kind, Signature};

/// Type of an environment value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// Dynamically typed; any value fits.
    Any,
    Bool,
    Int,
    Float,
    String,
    /// Homogeneous sequence.
    Array(Box<Type>),
    /// Associative container with declared key and value types.
    Map { key: Box<Type>, value: Box<Type> },
    /// Structured record.
    Struct(Arc<StructType>),
    /// Callable.
    Func(Signature),
}

impl Type {
    pub fn array(elem: Type) -> Self {
        Type::Array(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn func(signature: Signature) -> Self {
        Type::Func(signature)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Type::Any => Kind::Any,
            Type::Bool => Kind::Bool,
            Type::Int => Kind::Int,
            Type::Float => Kind::Float,
            Type::String => Kind::String,
            Type::Array(_) => Kind::Array,
            Type::Map { .. } => Kind::Map,
            Type::Struct(_) => Kind::Struct,
            Type::Func(_) => Kind::Func,
        }
    }

    /// The signature, if this type is callable.
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Type::Func(sig) => Some(sig),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Any => f.write_str("any"),
            Type::Bool => f.write_str("bool"),
            Type::Int => f.write_str("int"),
            Type::Float => f.write_str("float"),
            Type::String => f.write_str("string"),
            Type::Array(elem) => write!(f, "[]{elem}"),
            Type::Map { key, value } => write!(f, "map[{key}]{value}"),
            Type::Struct(s) => f.write_str(&s.name),
            Type::Func(sig) => write!(f, "{sig}"),
        }
    }
}

/// Shape of a structured environment record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructType {
    pub name: String,
    pub fields: Vec<FieldDef>,
    /// Methods callable on values of this type. Signatures exclude the receiver.
    pub methods: Vec<MethodSig>,
}

/// A field of a [`StructType`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDef {
    /// Host-side field name.
    pub name: String,
    pub ty: Type,
    /// Name exposed to expressions, when it differs from `name`.
    pub alias: Option<String>,
    /// Embedded fields promote their own fields and methods into the parent.
    pub embedded: bool,
}

/// A method of a [`StructType`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSig {
    pub name: String,
    /// Signature without the receiver.
    pub signature: Signature,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        StructType {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
            alias: None,
            embedded: false,
        });
        self
    }

    /// Add a field exposed to expressions under `alias`.
    #[must_use]
    pub fn aliased_field(
        mut self,
        name: impl Into<String>,
        alias: impl Into<String>,
        ty: Type,
    ) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
            alias: Some(alias.into()),
            embedded: false,
        });
        self
    }

    /// Embed another struct; its fields and methods are promoted.
    #[must_use]
    pub fn embed(mut self, inner: Arc<StructType>) -> Self {
        self.fields.push(FieldDef {
            name: inner.name.clone(),
            ty: Type::Struct(inner),
            alias: None,
            embedded: true,
        });
        self
    }

    #[must_use]
    pub fn method(mut self, name: impl Into<String>, signature: Signature) -> Self {
        self.methods.push(MethodSig {
            name: name.into(),
            signature,
        });
        self
    }

    /// Index of the field visible as `name`, looking only at this struct.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.expr_name() == name)
    }

    /// Index of the method named `name`, looking only at this struct.
    pub fn method_index(&self, name: &str) -> Option<usize> {
        self.methods.iter().position(|m| m.name == name)
    }
}

impl FieldDef {
    /// Name under which expressions see this field.
    pub fn expr_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// The embedded struct, if this field embeds one.
    pub fn embedded_struct(&self) -> Option<&Arc<StructType>> {
        match (&self.ty, self.embedded) {
            (Type::Struct(inner), true) => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
