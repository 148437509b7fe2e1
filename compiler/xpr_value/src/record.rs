//! Structured environment records.

use std::fmt;
use std::sync::Arc;

use xpr_types::StructType;

use crate::{CallError, NativeBody, NativeFn, Value};

/// An instance of a [`StructType`].
///
/// Field values and method bodies are stored positionally, aligned with the
/// type's `fields` and `methods`. Method bodies receive the receiver as their
/// first argument.
#[derive(Clone)]
pub struct StructValue {
    ty: Arc<StructType>,
    fields: Vec<Value>,
    methods: Vec<Option<NativeBody>>,
}

impl StructValue {
    /// Create an instance with every field set to `Nil` and no method bodies.
    pub fn new(ty: Arc<StructType>) -> Self {
        let fields = vec![Value::Nil; ty.fields.len()];
        let methods = vec![None; ty.methods.len()];
        StructValue {
            ty,
            fields,
            methods,
        }
    }

    pub fn ty(&self) -> &Arc<StructType> {
        &self.ty
    }

    /// Set a field by its host-side or expression name. Unknown names are ignored.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        let idx = self
            .ty
            .fields
            .iter()
            .position(|f| f.name == name || f.expr_name() == name);
        if let Some(idx) = idx {
            self.fields[idx] = value.into();
        }
        self
    }

    /// Provide the body of a declared method. Unknown names are ignored.
    #[must_use]
    pub fn implement<F>(mut self, method: &str, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        if let Some(idx) = self.ty.method_index(method) {
            self.methods[idx] = Some(Arc::new(body));
        }
        self
    }

    /// Field value at position `idx`.
    pub fn field(&self, idx: usize) -> Option<&Value> {
        self.fields.get(idx)
    }

    /// Resolve `name` as a field or method, own members first, then members
    /// promoted from embedded structs in declaration order.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(idx) = self.ty.field_index(name) {
            return self.fields.get(idx).cloned();
        }
        if let Some(idx) = self.ty.method_index(name) {
            return Some(Value::Func(self.bind_method(idx)));
        }
        self.ty
            .fields
            .iter()
            .zip(&self.fields)
            .filter(|(def, _)| def.embedded)
            .find_map(|(_, value)| match value {
                Value::Struct(inner) => inner.get(name),
                _ => None,
            })
    }

    /// Bind the method at `idx` to this receiver.
    ///
    /// The returned function's signature excludes the receiver.
    fn bind_method(&self, idx: usize) -> NativeFn {
        let sig = &self.ty.methods[idx];
        let receiver = Value::Struct(self.clone());
        let name = sig.name.clone();
        let body = self.methods[idx].clone();
        NativeFn::new(sig.name.clone(), sig.signature.clone(), move |args| {
            let Some(body) = &body else {
                return Err(CallError::MissingBody { name: name.clone() });
            };
            let mut full = Vec::with_capacity(args.len() + 1);
            full.push(receiver.clone());
            full.extend_from_slice(args);
            body(&full)
        })
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.fields == other.fields
    }
}

impl fmt::Debug for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&self.ty.name);
        for (def, value) in self.ty.fields.iter().zip(&self.fields) {
            s.field(def.expr_name(), value);
        }
        s.finish()
    }
}
