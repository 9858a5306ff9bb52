//! This module contains the concept of a KLV tag dictionary:
//! the mechanism by which encoded keys are dispatched to the
//! converter that interprets their value bytes.
//!
//! Two levels of dictionary exist. A [`LocalSetDictionary`] describes
//! the tags of one local set; a [`UlDictionary`] maps the 16-byte
//! universal labels found at the top of a stream to the local set
//! dictionary governing each packet's payload. Dictionaries are plain
//! data: the literal MISB ST 0601 table lives in the separate
//! `klv-dictionary-std` crate.

pub mod stub;

pub use self::stub::StubDictionary;

use crate::header::{LocalKey, Tag, UniversalLabel};
use std::fmt;

/// The kind of converter to apply to an element's value bytes,
/// along with the kind-specific parameters.
///
/// A dictionary entry carries one of these instead of a parser object;
/// the parsing layer instantiates the matching converter. The `Set`
/// kind nests a whole dictionary, which is how a local set composes
/// with another (e.g. the UAS Datalink LS embedding the Security LS).
#[derive(Clone, Copy)]
pub enum ValueKind {
    /// Opaque bytes, displayed in hexadecimal.
    Bytes,
    /// UTF-8 text.
    Text,
    /// A big-endian integer confined to the given inclusive domain.
    /// The value is signed on the wire iff the domain's lower bound
    /// is negative.
    Integer {
        /// inclusive integer domain
        domain: (i64, i64),
    },
    /// A fixed-point integer mapped linearly onto a real range.
    Mapped {
        /// inclusive integer domain
        domain: (i64, i64),
        /// inclusive real range
        range: (f64, f64),
        /// semantic unit attached to decoded values
        units: Option<&'static str>,
    },
    /// An 8-byte count of microseconds since the Unix epoch.
    Timestamp,
    /// A nested local set governed by its own dictionary.
    Set(&'static dyn LocalSetDictionary),
}

impl fmt::Debug for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueKind::Bytes => f.write_str("Bytes"),
            ValueKind::Text => f.write_str("Text"),
            ValueKind::Integer { domain } => write!(f, "Integer {{ domain: {:?} }}", domain),
            ValueKind::Mapped {
                domain,
                range,
                units,
            } => write!(
                f,
                "Mapped {{ domain: {:?}, range: {:?}, units: {:?} }}",
                domain, range, units
            ),
            ValueKind::Timestamp => f.write_str("Timestamp"),
            ValueKind::Set(dict) => write!(f, "Set({})", dict.name()),
        }
    }
}

/// A dictionary entry borrowing its data,
/// used for describing one tag of a local set.
#[derive(Debug, Clone, Copy)]
pub struct LocalSetEntryRef<'a> {
    /// the encoded key bytes which select this entry
    pub key: &'a [u8],
    /// the human readable name of the field
    pub name: &'a str,
    /// the converter kind for the field's value bytes
    pub kind: ValueKind,
}

impl LocalSetEntryRef<'_> {
    /// The numeric tag that this entry's key resolves to.
    pub fn tag(&self) -> Tag {
        LocalKey::from(self.key).tag()
    }
}

/// Type trait for a dictionary of the tags of one local set.
///
/// The methods herein have no generic parameters,
/// so as to enable being used as a trait object:
/// nested set entries refer to their dictionary as
/// `&'static dyn LocalSetDictionary`.
pub trait LocalSetDictionary: Send + Sync {
    /// A short name for the local set this dictionary describes.
    fn name(&self) -> &str;

    /// Fetch an entry by the exact bytes of its encoded key.
    ///
    /// Lookup is by byte equality, not by resolved tag number:
    /// a redundant multi-byte encoding of a registered tag
    /// does not match.
    fn by_key(&self, key: &[u8]) -> Option<&LocalSetEntryRef<'static>>;

    /// Fetch an entry by its numeric tag,
    /// through the tag's canonical key encoding.
    fn by_tag(&self, tag: Tag) -> Option<&LocalSetEntryRef<'static>> {
        self.by_key(LocalKey::from_tag(tag).as_bytes())
    }
}

impl fmt::Debug for dyn LocalSetDictionary + '_ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalSetDictionary({})", self.name())
    }
}

/// A dictionary entry describing one registered universal label:
/// the label, a packet name, and the dictionary for its payload.
#[derive(Debug, Clone, Copy)]
pub struct UlEntryRef<'a> {
    /// the 16-byte universal label
    pub ul: UniversalLabel,
    /// the human readable name of the packet type
    pub name: &'a str,
    /// the dictionary governing the packet payload
    pub dictionary: &'a dyn LocalSetDictionary,
}

/// Type trait for a dictionary of registered universal labels,
/// which a stream parser consults to recognize packet starts.
pub trait UlDictionary: Send + Sync {
    /// Fetch an entry by universal label.
    fn by_ul(&self, ul: &UniversalLabel) -> Option<&UlEntryRef<'static>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_tag_resolves_from_key_bytes() {
        let entry = LocalSetEntryRef {
            key: &[0x0D],
            name: "Sensor Latitude",
            kind: ValueKind::Mapped {
                domain: (-(2i64.pow(31) - 1), 2i64.pow(31) - 1),
                range: (-90.0, 90.0),
                units: Some("degrees"),
            },
        };
        assert_eq!(entry.tag(), Tag(13));
    }
}
