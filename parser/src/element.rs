//! The decoded KLV local set element.
//!
//! An element owns the raw bytes it was parsed from, next to their
//! typed interpretation. Serialization re-emits the preserved key and
//! payload around a canonically encoded length, which reproduces the
//! input byte for byte.

use crate::set::LocalSet;
use klv_core::value::C;
use klv_core::{Header, Length, LocalKey, PrimitiveValue, Tag, Value, ValueKind};
use std::convert::TryFrom;
use klv_encoding::{ber, bytes, mapper, timestamp};
use std::fmt;
use std::io::{self, Write};

/// An immutable KLV local set element, as produced by parsing.
///
/// The raw key and payload bytes are preserved verbatim. The typed
/// value is a deterministic function of the payload bytes and the
/// dictionary entry the key dispatched to; elements with no entry
/// keep their payload as an opaque bytes value.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    key: LocalKey,
    length: Length,
    data: C<u8>,
    value: Value<LocalSet>,
    name: Option<&'static str>,
    units: Option<&'static str>,
}

impl Element {
    /// Decode an element from its parts, dispatching the payload
    /// interpretation through the given dictionary entry kind.
    /// `kind` is `None` for unregistered keys.
    pub(crate) fn decode(
        key: LocalKey,
        length: Length,
        data: &[u8],
        entry: Option<(&'static str, ValueKind)>,
    ) -> Self {
        let (name, units) = match entry {
            Some((name, ValueKind::Mapped { units, .. })) => (Some(name), units),
            Some((name, _)) => (Some(name), None),
            None => (None, None),
        };
        let value = match entry {
            Some((_, kind)) => decode_value(kind, data),
            None => Value::Primitive(raw_value(data)),
        };
        Element {
            key,
            length,
            data: C::from_slice(data),
            value,
            name,
            units,
        }
    }

    /// The numeric tag resolved from the element's key.
    pub fn tag(&self) -> Tag {
        self.key.tag()
    }

    /// The raw payload bytes, exactly as read from the wire.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The element's typed value.
    pub fn value(&self) -> &Value<LocalSet> {
        &self.value
    }

    /// The registered human readable name of the element's tag,
    /// if the key was found in the set's dictionary.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The semantic units of the decoded value, for mapped quantities.
    pub fn units(&self) -> Option<&'static str> {
        self.units
    }

    /// The total number of bytes this element serializes to.
    pub fn serialized_len(&self) -> usize {
        self.key.len() + ber::encoded_length_size(self.length) + self.data.len()
    }

    /// Serialize the element back into `key ‖ length ‖ payload` form.
    pub fn write_to<W: Write>(&self, mut to: W) -> io::Result<()> {
        to.write_all(self.key.as_bytes())?;
        to.write_all(&ber::encode_length(self.length))?;
        to.write_all(&self.data)
    }

    /// Serialize the element into a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        // writing to a vector cannot fail
        let _ = self.write_to(&mut out);
        out
    }
}

impl Header for Element {
    fn key(&self) -> &LocalKey {
        &self.key
    }

    fn length(&self) -> Length {
        self.length
    }
}

impl fmt::Display for Element {
    /// Renders as `Name (tag): value units`,
    /// using `Unknown Element` for unregistered tags.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = format!("{} ({}):", self.name.unwrap_or("Unknown Element"), self.tag());
        match &self.value {
            Value::Set(set) => write!(f, "{:<35} {} elements", label, set.elements().len()),
            Value::Primitive(v) => {
                write!(f, "{:<35} {}", label, v)?;
                if let Some(units) = self.units {
                    if !matches!(v, PrimitiveValue::OutOfRange) {
                        write!(f, " {}", units)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// The fallback interpretation for unregistered keys and payloads
/// that do not satisfy their registered converter.
fn raw_value(data: &[u8]) -> PrimitiveValue {
    if data.is_empty() {
        PrimitiveValue::Empty
    } else {
        PrimitiveValue::Bytes(C::from_slice(data))
    }
}

/// Interpret a payload according to a dictionary entry kind.
///
/// Interpretation never fails: a payload that does not satisfy its
/// converter is contained to this element by keeping its raw bytes.
fn decode_value(kind: ValueKind, data: &[u8]) -> Value<LocalSet> {
    if data.is_empty() {
        return Value::Primitive(PrimitiveValue::Empty);
    }
    let primitive = match kind {
        ValueKind::Bytes => raw_value(data),
        ValueKind::Text => match std::str::from_utf8(data) {
            Ok(s) => PrimitiveValue::Str(s.to_owned()),
            Err(_) => raw_value(data),
        },
        ValueKind::Integer { domain } => {
            let parsed = if domain.0 < 0 {
                bytes::read_be_int(data).ok()
            } else {
                bytes::read_be_uint(data)
                    .ok()
                    .and_then(|n| i64::try_from(n).ok())
            };
            match parsed {
                Some(n) => PrimitiveValue::Int(n),
                None => raw_value(data),
            }
        }
        ValueKind::Mapped { domain, range, .. } => {
            match mapper::RangeMapper::new(domain, range).and_then(|m| m.decode(data)) {
                Ok(mapper::MappedValue::Valid(x)) => PrimitiveValue::Float(x),
                Ok(mapper::MappedValue::OutOfRange) => PrimitiveValue::OutOfRange,
                Err(_) => raw_value(data),
            }
        }
        ValueKind::Timestamp => match timestamp::decode(data) {
            Ok(t) => PrimitiveValue::Timestamp(t),
            Err(_) => raw_value(data),
        },
        ValueKind::Set(dictionary) => match LocalSet::read(data, dictionary) {
            Ok(set) => return Value::Set(set),
            Err(_) => raw_value(data),
        },
    };
    Value::Primitive(primitive)
}
