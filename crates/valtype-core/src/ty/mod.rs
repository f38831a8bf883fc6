//! Type descriptors.
//!
//! A [`Type`] describes the shape of a value. The set of kinds is closed:
//! primitives (bool, number, string) plus the collection kinds (list, set,
//! map) that wrap an element type. Equality is structural, so two
//! independently built descriptors with the same shape compare equal.
//! Descriptors are never interned.

mod collection;
mod primitive;

#[cfg(test)]
mod primitive_tests;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};

pub use collection::Collection;
pub use primitive::{PrimitiveKind, TAG_BOOL, TAG_NUMBER, TAG_STRING};

/// Immutable descriptor of a value's shape.
///
/// Adding a kind means adding a variant here; every `match` over `Type`
/// in downstream code then fails to compile until it handles the new kind.
///
/// Equality, hashing, cloning, dropping and rendering walk collection layers
/// in a loop, so nesting depth is not bounded by the call stack.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Atomic kind with no payload beyond its tag.
    Primitive(PrimitiveKind),
    /// Ordered sequence of elements of one type.
    List(Collection),
    /// Unordered collection of distinct elements of one type.
    Set(Collection),
    /// String-keyed mapping to elements of one type.
    Map(Collection),
}

impl Type {
    /// Structural equality.
    ///
    /// Same relation as `==`: primitives compare by kind, collections by kind
    /// and then by element type, layer by layer.
    pub fn equals(&self, other: &Type) -> bool {
        self == other
    }

    /// Human-readable description, e.g. `map of list of string`.
    pub fn friendly_name(&self) -> String {
        self.to_string()
    }

    /// Constructor-call rendering, e.g. `Map(List(String))`.
    pub fn debug_representation(&self) -> String {
        format!("{self:?}")
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Type) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Type::Primitive(x), Type::Primitive(y)) => return x == y,
                (Type::List(x), Type::List(y))
                | (Type::Set(x), Type::Set(y))
                | (Type::Map(x), Type::Map(y)) => {
                    a = x.element_type();
                    b = y.element_type();
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut cur = self;
        loop {
            mem::discriminant(cur).hash(state);
            match cur {
                Type::Primitive(kind) => return kind.hash(state),
                Type::List(c) | Type::Set(c) | Type::Map(c) => cur = c.element_type(),
            }
        }
    }
}

impl Clone for Type {
    fn clone(&self) -> Self {
        let mut layers = Vec::new();
        let mut cur = self;
        while let Some((layer, element)) = cur.split_layer() {
            layers.push(layer);
            cur = element;
        }

        let leaf = Type::Primitive(self.leaf_kind());
        layers
            .into_iter()
            .rev()
            .fold(leaf, |element, layer| layer.wrap(element))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cur = self;
        while let Some((layer, element)) = cur.split_layer() {
            f.write_str(layer.friendly_prefix())?;
            cur = element;
        }
        f.write_str(self.leaf_kind().name())
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0usize;
        let mut cur = self;
        while let Some((layer, element)) = cur.split_layer() {
            f.write_str(layer.constructor_name())?;
            f.write_str("(")?;
            depth += 1;
            cur = element;
        }
        f.write_str(self.leaf_kind().constructor_name())?;
        for _ in 0..depth {
            f.write_str(")")?;
        }
        Ok(())
    }
}
