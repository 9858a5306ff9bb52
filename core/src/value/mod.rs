//! This module includes a high level abstraction over a KLV element's value.

use smallvec::SmallVec;
use std::fmt;

mod primitive;

pub use self::primitive::{CastValueError, PrimitiveValue, ValueType};

/// An aggregation of one or more bytes or values.
pub type C<T> = SmallVec<[T; 2]>;

/// Representation of a full decoded KLV value, which may be either
/// primitive or a nested local set.
///
/// `I` is the concrete type for nested local sets, which is only defined
/// by the parsing layer. Code that never deals with nested sets may use
/// [`PrimitiveValue`] directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A nested local set with its own sequence of elements.
    Set(I),
}

impl<I> Value<I> {
    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Set(_) => ValueType::Set,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the nested set.
    pub fn set(&self) -> Option<&I> {
        match self {
            Value::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieves the primitive value.
    pub fn into_primitive(self) -> Option<PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieves the nested set.
    pub fn into_set(self) -> Option<I> {
        match self {
            Value::Set(v) => Some(v),
            _ => None,
        }
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    fn from(value: PrimitiveValue) -> Self {
        Value::Primitive(value)
    }
}

impl<I> fmt::Display for Value<I>
where
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Primitive(v) => v.fmt(f),
            Value::Set(v) => v.fmt(f),
        }
    }
}
