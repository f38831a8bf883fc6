//! Canonical values.
//!
//! A [`Value`] pairs a [`Type`] with a payload of matching shape. Only the
//! boolean values live here; the wider value system builds on the same
//! type-plus-payload pairing.

use std::{fmt, ops};

use serde::{Deserialize, Serialize};

use crate::{PrimitiveKind, Type};

/// Concrete data carried by a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    Bool(bool),
}

/// Immutable pairing of a type with its payload.
///
/// Fields are private so the type always agrees with the payload. Serialized
/// as the bare payload, which also keeps deserialized values well-formed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub struct Value {
    ty: Type,
    payload: Payload,
}

impl Value {
    /// The truthy value of type `Type::BOOL`.
    pub const TRUE: Value = Value {
        ty: Type::BOOL,
        payload: Payload::Bool(true),
    };

    /// The falsey value of type `Type::BOOL`.
    pub const FALSE: Value = Value {
        ty: Type::BOOL,
        payload: Payload::Bool(false),
    };

    /// Canonical value for a native boolean.
    pub fn bool(b: bool) -> Value {
        if b { Self::TRUE } else { Self::FALSE }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Boolean payload, or `None` if this is not a bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match (&self.ty, self.payload) {
            (Type::Primitive(PrimitiveKind::Bool), Payload::Bool(b)) => Some(b),
            _ => None,
        }
    }

    /// Value equality: types and payloads must both match.
    pub fn equals(&self, other: &Value) -> bool {
        self.ty.equals(&other.ty) && self.payload == other.payload
    }

    /// Logical conjunction.
    pub fn and(&self, other: &Value) -> Value {
        Value::bool(self.expect_bool() && other.expect_bool())
    }

    /// Logical disjunction.
    pub fn or(&self, other: &Value) -> Value {
        Value::bool(self.expect_bool() || other.expect_bool())
    }
}

impl ops::Not for &Value {
    type Output = Value;

    fn not(self) -> Value {
        Value::bool(!self.expect_bool())
    }
}

impl ops::Not for Value {
    type Output = Value;

    fn not(self) -> Value {
        !&self
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<Value> for bool {
    fn from(v: Value) -> Self {
        v.expect_bool()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Payload::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Payload::Bool(true) => f.write_str("True"),
            Payload::Bool(false) => f.write_str("False"),
        }
    }
}
