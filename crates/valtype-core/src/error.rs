//! Errors from decoding primitive kinds out of untrusted data.

/// Failure to decode a [`PrimitiveKind`](crate::PrimitiveKind).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    #[error("unknown primitive type tag: {0:#04x}")]
    UnknownTag(u8),
    #[error("unknown primitive type name: {0:?}")]
    UnknownName(String),
}
