//! Primitive (atomic) type kinds.
//!
//! The closed set of payload-less kinds. Each kind carries a one-byte tag
//! that stays stable across releases, so collaborators storing a compact
//! discriminant can decode it with [`PrimitiveKind::from_u8`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Type;
use crate::error::KindError;

/// Tag byte for [`PrimitiveKind::Bool`].
pub const TAG_BOOL: u8 = b'B';

/// Tag byte for [`PrimitiveKind::Number`].
pub const TAG_NUMBER: u8 = b'N';

/// Tag byte for [`PrimitiveKind::String`].
pub const TAG_STRING: u8 = b'S';

/// Primitive type kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PrimitiveKind {
    /// Boolean. The two values of this kind are `Value::TRUE` and `Value::FALSE`.
    Bool = TAG_BOOL,
    /// Arbitrary-precision decimal number.
    Number = TAG_NUMBER,
    /// Sequence of unicode codepoints.
    String = TAG_STRING,
}

impl PrimitiveKind {
    /// Every primitive kind, in tag order.
    pub const ALL: [Self; 3] = [Self::Bool, Self::Number, Self::String];

    /// Convert from a raw tag byte.
    #[inline]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            TAG_BOOL => Some(Self::Bool),
            TAG_NUMBER => Some(Self::Number),
            TAG_STRING => Some(Self::String),
            _ => None,
        }
    }

    /// Raw tag byte for this kind.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human-readable name, as used in `Type::friendly_name`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
        }
    }

    /// Constructor-style name, as used in `Type::debug_representation`.
    pub(crate) const fn constructor_name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Number => "Number",
            Self::String => "String",
        }
    }
}

impl TryFrom<u8> for PrimitiveKind {
    type Error = KindError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or(KindError::UnknownTag(v))
    }
}

impl FromStr for PrimitiveKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| KindError::UnknownName(s.to_owned()))
    }
}

impl From<PrimitiveKind> for Type {
    fn from(kind: PrimitiveKind) -> Self {
        Type::Primitive(kind)
    }
}

impl Type {
    /// The boolean type.
    pub const BOOL: Type = Type::Primitive(PrimitiveKind::Bool);

    /// The numeric type.
    pub const NUMBER: Type = Type::Primitive(PrimitiveKind::Number);

    /// The string type.
    pub const STRING: Type = Type::Primitive(PrimitiveKind::String);

    /// Whether this is one of the primitive types.
    pub fn is_primitive_type(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    /// The primitive kind, or `None` for collection types.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Type::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }
}
