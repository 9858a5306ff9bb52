//! Declaration and implementation of a KLV primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use super::C;
use chrono::{DateTime, Utc};
use snafu::Snafu;
use std::fmt;

/// An enum representing a primitive value decoded from a KLV element.
/// The result of interpreting an element's data bytes is one of the
/// enumerated types depending on the converter kind registered for
/// its tag.
///
/// Every variant is a deterministic function of the element's raw
/// value bytes. The raw bytes themselves are kept by the element,
/// so a primitive value never needs to be re-encoded for the element
/// to be serialized back to its original form.
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Employed for zero-length values.
    Empty,

    /// A sequence of raw bytes, displayed in hexadecimal.
    /// Used for checksums and opaque identifiers.
    Bytes(C<u8>),

    /// A text value, decoded as UTF-8.
    Str(String),

    /// A big-endian integer value, signed or not on the wire.
    Int(i64),

    /// A real-valued quantity produced by a fixed-point range mapping.
    Float(f64),

    /// A mapped field holding the reserved out-of-range indicator
    /// (the most negative two's-complement word of its domain).
    OutOfRange,

    /// A point in time with microsecond precision,
    /// counted from the Unix epoch, leap seconds excluded.
    Timestamp(DateTime<Utc>),
}

/// An enum representing an abstraction of a KLV value's type.
/// This may be used when the concrete payload of a value
/// is not relevant.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ValueType {
    /// No data. Employed for zero-length values.
    Empty,
    /// A sequence of raw bytes.
    Bytes,
    /// A text value.
    Str,
    /// An integer value.
    Int,
    /// A range-mapped real value.
    Float,
    /// The reserved out-of-range indicator.
    OutOfRange,
    /// A microsecond timestamp.
    Timestamp,
    /// A nested local set.
    Set,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueType::Empty => "Empty",
            ValueType::Bytes => "Bytes",
            ValueType::Str => "Str",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::OutOfRange => "OutOfRange",
            ValueType::Timestamp => "Timestamp",
            ValueType::Set => "Set",
        };
        f.write_str(name)
    }
}

/// An error type for an attempt of accessing a value
/// in an inappropriate format.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {}", requested, got))]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual type
    pub got: ValueType,
}

impl PrimitiveValue {
    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Bytes(_) => ValueType::Bytes,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Int(_) => ValueType::Int,
            PrimitiveValue::Float(_) => ValueType::Float,
            PrimitiveValue::OutOfRange => ValueType::OutOfRange,
            PrimitiveValue::Timestamp(_) => ValueType::Timestamp,
        }
    }

    /// Retrieve the value as raw bytes,
    /// if it was decoded as such.
    pub fn to_bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            PrimitiveValue::Bytes(b) => Ok(b),
            other => CastValueSnafu {
                requested: "Bytes",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve the value as a string slice,
    /// if it was decoded as text.
    pub fn to_str(&self) -> Result<&str, CastValueError> {
        match self {
            PrimitiveValue::Str(s) => Ok(s),
            other => CastValueSnafu {
                requested: "Str",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve the value as an integer,
    /// if it was decoded as one.
    pub fn to_int(&self) -> Result<i64, CastValueError> {
        match self {
            PrimitiveValue::Int(n) => Ok(*n),
            other => CastValueSnafu {
                requested: "Int",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve the value as a real number,
    /// if it was decoded through a range mapping.
    pub fn to_float(&self) -> Result<f64, CastValueError> {
        match self {
            PrimitiveValue::Float(x) => Ok(*x),
            other => CastValueSnafu {
                requested: "Float",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve the value as a timestamp,
    /// if it was decoded as one.
    pub fn to_timestamp(&self) -> Result<DateTime<Utc>, CastValueError> {
        match self {
            PrimitiveValue::Timestamp(t) => Ok(*t),
            other => CastValueSnafu {
                requested: "Timestamp",
                got: other.value_type(),
            }
            .fail(),
        }
    }
}

impl fmt::Display for PrimitiveValue {
    /// The canonical rendering of a primitive value:
    /// raw bytes come out as uppercase space-separated pairs,
    /// timestamps in `YYYY-MM-DD hh:mm:ss[.ffffff]+00:00` form
    /// with the fractional part shown only when non-zero.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Bytes(bytes) => {
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
            PrimitiveValue::Str(s) => f.write_str(s),
            PrimitiveValue::Int(n) => write!(f, "{}", n),
            PrimitiveValue::Float(x) => write!(f, "{}", x),
            PrimitiveValue::OutOfRange => f.write_str("out of range"),
            PrimitiveValue::Timestamp(t) => {
                if t.timestamp_subsec_micros() == 0 {
                    write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S%:z"))
                } else {
                    write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S%.6f%:z"))
                }
            }
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        PrimitiveValue::Int(value)
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        PrimitiveValue::Float(value)
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::Bytes(C::from_slice(value))
    }
}

impl From<DateTime<Utc>> for PrimitiveValue {
    fn from(value: DateTime<Utc>) -> Self {
        PrimitiveValue::Timestamp(value)
    }
}
