//! The type catalogue.
//!
//! Maps every identifier an expression may reference to its type. Built once
//! per bound environment by [`create_types_table`] and read-only afterwards.
//!
//! # Method entries
//!
//! Methods are catalogued with their receiver prepended, the way a bound
//! method looks when called through its type: `func(Env, int, int) int` for a
//! method declared as `func(int, int) int`. [`Tag::method`] marks these, and
//! [`Tag::external_arity`] gives the arity an expression actually sees.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use smallvec::{smallvec, SmallVec};
use xpr_types::{Kind, Signature, StructType, Type};
use xpr_value::Value;

/// Identifier name → type descriptor, sorted for deterministic iteration.
pub type TypesTable = BTreeMap<String, Tag>;

/// Type descriptor of one catalogue entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub ty: Type,
    /// The identifier is a method; `ty`'s first input is the receiver.
    pub method: bool,
    /// Position in the environment's method set, for method entries.
    pub method_index: Option<usize>,
    /// Path of field positions from the environment root, for field entries.
    /// Longer than one when the field is promoted from an embedded struct.
    pub field_index: SmallVec<[usize; 2]>,
}

impl Tag {
    /// A plain value (map entry).
    pub fn value(ty: Type) -> Self {
        Tag {
            ty,
            method: false,
            method_index: None,
            field_index: SmallVec::new(),
        }
    }

    /// A struct field at `index`.
    pub fn field(ty: Type, index: usize) -> Self {
        Tag {
            field_index: smallvec![index],
            ..Self::value(ty)
        }
    }

    /// A method with full (receiver-first) signature.
    pub fn method(signature: Signature, index: usize) -> Self {
        Tag {
            method: true,
            method_index: Some(index),
            ..Self::value(Type::Func(signature))
        }
    }

    pub fn kind(&self) -> Kind {
        self.ty.kind()
    }

    #[inline]
    pub fn is_callable(&self) -> bool {
        self.kind().is_callable()
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.ty.signature()
    }

    /// Number of arguments an expression passes, excluding any receiver.
    pub fn external_arity(&self) -> Option<usize> {
        let sig = self.signature()?;
        Some(sig.num_in().saturating_sub(usize::from(self.method)))
    }
}

/// Build the catalogue for an environment value.
///
/// Structs contribute their members in lookup order: own fields, then own
/// methods, then the members promoted from each embedded struct in
/// declaration order. The first member found under a name wins, so a field
/// hides a method of the same name exactly as name lookup does. Maps
/// contribute one entry per string key holding a non-nil value. Other values
/// contribute nothing.
pub fn create_types_table(env: &Value) -> TypesTable {
    match env {
        Value::Struct(record) => {
            let ty = record.ty();
            let receiver = Type::Struct(Arc::clone(ty));
            let mut walk = MemberWalk::new(Some(receiver));
            walk.collect(ty);
            walk.types
        }
        Value::Map(map) => map
            .entries()
            .filter_map(|(key, value)| {
                let name = key.as_str()?;
                let ty = value.type_of()?;
                Some((name.to_owned(), Tag::value(ty)))
            })
            .collect(),
        _ => TypesTable::new(),
    }
}

/// Catalogue the fields of a struct, promoting fields of embedded structs.
///
/// Fields declared directly on the struct come first; a promoted field
/// never replaces a name already present.
pub fn fields_from_struct(ty: &StructType) -> TypesTable {
    let mut walk = MemberWalk::new(None);
    walk.collect(ty);
    walk.types
}

/// Depth-first walk over struct members, first name wins.
struct MemberWalk {
    /// Receiver for method entries; `None` skips methods.
    receiver: Option<Type>,
    /// Field positions from the root down to the struct being walked.
    path: SmallVec<[usize; 2]>,
    next_method: usize,
    types: TypesTable,
}

impl MemberWalk {
    fn new(receiver: Option<Type>) -> Self {
        MemberWalk {
            receiver,
            path: SmallVec::new(),
            next_method: 0,
            types: TypesTable::new(),
        }
    }

    fn collect(&mut self, ty: &StructType) {
        for (index, field) in ty.fields.iter().enumerate() {
            if let Entry::Vacant(slot) = self.types.entry(field.expr_name().to_owned()) {
                let mut tag = Tag::field(field.ty.clone(), index);
                tag.field_index = self.path.iter().copied().chain([index]).collect();
                slot.insert(tag);
            }
        }
        if let Some(receiver) = &self.receiver {
            for method in &ty.methods {
                if let Entry::Vacant(slot) = self.types.entry(method.name.clone()) {
                    let sig = method.signature.with_receiver(receiver.clone());
                    slot.insert(Tag::method(sig, self.next_method));
                    self.next_method += 1;
                }
            }
        }
        for (index, field) in ty.fields.iter().enumerate() {
            if let Some(inner) = field.embedded_struct() {
                self.path.push(index);
                self.collect(inner);
                self.path.pop();
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for clarity")]
mod tests;
