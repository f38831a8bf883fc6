//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Type, Value};

impl Type {
    /// Element type of a collection type.
    ///
    /// # Panics
    /// Panics if called on a primitive type. Callers must check
    /// `is_collection_type` first.
    pub fn expect_element_type(&self) -> &Type {
        self.element_type().unwrap_or_else(|| {
            panic!("Type: element_type called on non-collection type {self}")
        })
    }
}

impl Value {
    /// Boolean payload of a bool value.
    ///
    /// # Panics
    /// Panics if the value's type is not `Type::BOOL`.
    pub fn expect_bool(&self) -> bool {
        self.as_bool().unwrap_or_else(|| {
            panic!(
                "Value: expected bool value, found value of type {}",
                self.ty()
            )
        })
    }
}
