//! Collection type kinds: list, set and map.
//!
//! All three share one payload shape, an owned element type. Any type is a
//! legal element, including other collections, so nesting depth is unbounded.

use std::mem;

use serde::{Deserialize, Serialize};

use super::{PrimitiveKind, Type};

/// Element payload of a collection type.
///
/// The element is boxed because `Type` is recursive. It is only reachable
/// through a shared reference, so a descriptor cannot be mutated after
/// construction.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    element: Box<Type>,
}

impl Collection {
    /// Wrap an element type.
    pub fn new(element: Type) -> Self {
        Self {
            element: Box::new(element),
        }
    }

    /// The element type. Always present for a collection.
    #[inline]
    pub fn element_type(&self) -> &Type {
        &self.element
    }

    /// Unwrap into the owned element type.
    pub fn into_element_type(mut self) -> Type {
        mem::replace(&mut *self.element, Type::BOOL)
    }
}

impl Drop for Collection {
    // Unlinks nested layers one at a time so deep chains don't recurse.
    fn drop(&mut self) {
        let mut next = mem::replace(&mut *self.element, Type::BOOL);
        loop {
            let inner = match &mut next {
                Type::List(c) | Type::Set(c) | Type::Map(c) => {
                    mem::replace(&mut *c.element, Type::BOOL)
                }
                Type::Primitive(_) => break,
            };
            next = inner;
        }
    }
}

/// Outermost constructor of a collection type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Layer {
    List,
    Set,
    Map,
}

impl Layer {
    pub(crate) fn wrap(self, element: Type) -> Type {
        match self {
            Self::List => Type::list(element),
            Self::Set => Type::set(element),
            Self::Map => Type::map(element),
        }
    }

    pub(crate) const fn friendly_prefix(self) -> &'static str {
        match self {
            Self::List => "list of ",
            Self::Set => "set of ",
            Self::Map => "map of ",
        }
    }

    pub(crate) const fn constructor_name(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Set => "Set",
            Self::Map => "Map",
        }
    }
}

impl Type {
    /// Split off the outermost collection layer, or `None` for primitives.
    pub(crate) fn split_layer(&self) -> Option<(Layer, &Type)> {
        match self {
            Type::List(c) => Some((Layer::List, c.element_type())),
            Type::Set(c) => Some((Layer::Set, c.element_type())),
            Type::Map(c) => Some((Layer::Map, c.element_type())),
            Type::Primitive(_) => None,
        }
    }

    /// Primitive kind at the bottom of all collection layers.
    pub(crate) fn leaf_kind(&self) -> PrimitiveKind {
        let mut cur = self;
        loop {
            match cur {
                Type::Primitive(kind) => return *kind,
                Type::List(c) | Type::Set(c) | Type::Map(c) => cur = c.element_type(),
            }
        }
    }

    /// Create a list type with the given element type.
    pub fn list(element: Type) -> Type {
        Type::List(Collection::new(element))
    }

    /// Create a set type with the given element type.
    pub fn set(element: Type) -> Type {
        Type::Set(Collection::new(element))
    }

    /// Create a map type with the given element type.
    ///
    /// Each call allocates a fresh descriptor. Two maps built from equal
    /// element types are equal but share no storage.
    pub fn map(element: Type) -> Type {
        Type::Map(Collection::new(element))
    }

    /// Whether this is a list, set or map type.
    pub fn is_collection_type(&self) -> bool {
        self.element_type().is_some()
    }

    pub fn is_list_type(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub fn is_set_type(&self) -> bool {
        matches!(self, Type::Set(_))
    }

    pub fn is_map_type(&self) -> bool {
        matches!(self, Type::Map(_))
    }

    /// Element type of any collection kind, or `None` for primitives.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::List(c) | Type::Set(c) | Type::Map(c) => Some(c.element_type()),
            Type::Primitive(_) => None,
        }
    }

    /// Element type if this is a list type.
    pub fn list_element_type(&self) -> Option<&Type> {
        match self {
            Type::List(c) => Some(c.element_type()),
            _ => None,
        }
    }

    /// Element type if this is a set type.
    pub fn set_element_type(&self) -> Option<&Type> {
        match self {
            Type::Set(c) => Some(c.element_type()),
            _ => None,
        }
    }

    /// Element type if this is a map type.
    ///
    /// ```
    /// use valtype_core::Type;
    ///
    /// let t = Type::map(Type::NUMBER);
    /// if let Some(et) = t.map_element_type() {
    ///     assert_eq!(et, &Type::NUMBER);
    /// }
    /// assert_eq!(Type::STRING.map_element_type(), None);
    /// ```
    pub fn map_element_type(&self) -> Option<&Type> {
        match self {
            Type::Map(c) => Some(c.element_type()),
            _ => None,
        }
    }
}
