#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Structural type identity for a dynamically-typed value system.
//!
//! - [`Type`]: sealed descriptor of a value's shape (primitive or collection)
//! - [`PrimitiveKind`]: the closed set of atomic kinds
//! - [`Value`]: a type paired with a payload; only the canonical booleans here
//!
//! Everything is immutable and `Send + Sync`. Conversion, serialization
//! formats and function signatures are built on top of this crate.

mod error;
mod invariants;
mod ty;
mod value;


pub use error::KindError;
pub use ty::{Collection, PrimitiveKind, TAG_BOOL, TAG_NUMBER, TAG_STRING, Type};
pub use value::{Payload, Value};
