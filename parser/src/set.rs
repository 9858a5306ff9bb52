//! Decoding of a local set payload: a concatenation of TLV triples.
//!
//! The scan walks the payload decoding a BER-OID key, a BER length,
//! and a payload slice per element, dispatching each key through the
//! set's dictionary. Unregistered keys are never an error; they come
//! out as opaque elements with their bytes preserved. Nested sets are
//! read recursively with the dictionary their entry names.

use crate::element::Element;
use klv_core::dictionary::LocalSetDictionary;
use klv_core::{Tag, Value};
use klv_encoding::ber;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::io::{self, Write};

/// Module-level error type:
/// for failures that stop the TLV scan from advancing.
///
/// Problems confined to a single element's payload (a text field that
/// is not UTF-8, a mapped field of the wrong width) do not surface
/// here; those elements keep their raw bytes instead.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not decode element key at position {}", position))]
    DecodeKey {
        position: usize,
        #[snafu(backtrace)]
        source: ber::Error,
    },
    #[snafu(display("Could not decode element length at position {}", position))]
    DecodeLength {
        position: usize,
        #[snafu(backtrace)]
        source: ber::Error,
    },
    #[snafu(display(
        "Element value of {} bytes at position {} overruns the set payload",
        length,
        position
    ))]
    PayloadOverrun {
        position: usize,
        length: u64,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An ordered sequence of decoded elements, as carried by one
/// local set payload.
///
/// Iteration yields the elements in wire order, duplicates included.
/// Tag lookup resolves to the last occurrence, the one that would
/// win if the set were read field by field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocalSet {
    elements: Vec<Element>,
}

impl LocalSet {
    /// Decode a full local set payload against the given dictionary.
    pub fn read(payload: &[u8], dictionary: &dyn LocalSetDictionary) -> Result<LocalSet> {
        let mut elements = Vec::new();
        let mut cursor = payload;
        while !cursor.is_empty() {
            let position = payload.len() - cursor.len();
            let key = ber::read_key(&mut cursor).context(DecodeKeySnafu { position })?;
            let length = ber::read_length(&mut cursor).context(DecodeLengthSnafu { position })?;
            ensure!(
                length.get() <= cursor.len() as u64,
                PayloadOverrunSnafu {
                    position,
                    length: length.get(),
                }
            );
            let (data, rest) = cursor.split_at(length.get() as usize);
            cursor = rest;
            let entry = dictionary
                .by_key(key.as_bytes())
                .map(|entry| (entry.name, entry.kind));
            elements.push(Element::decode(key, length, data, entry));
        }
        Ok(LocalSet { elements })
    }

    /// The decoded elements, in wire order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element by its numeric tag.
    /// When the tag occurs more than once, the last occurrence wins.
    pub fn get(&self, tag: Tag) -> Option<&Element> {
        self.elements.iter().rev().find(|e| e.tag() == tag)
    }

    /// The total number of bytes the set serializes to.
    pub fn serialized_len(&self) -> usize {
        self.elements.iter().map(Element::serialized_len).sum()
    }

    /// Serialize every element back in stored order.
    pub fn write_to<W: Write>(&self, mut to: W) -> io::Result<()> {
        for element in &self.elements {
            element.write_to(&mut to)?;
        }
        Ok(())
    }

    /// Serialize the set into a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        // writing to a vector cannot fail
        let _ = self.write_to(&mut out);
        out
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, level: usize) -> fmt::Result {
        for element in &self.elements {
            writeln!(f, "{:indent$}{}", "", element, indent = level * 4)?;
            if let Value::Set(inner) = element.value() {
                inner.fmt_indented(f, level + 1)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LocalSet {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for LocalSet {
    /// A recursive listing of the set's elements, one per line,
    /// nested sets indented below their element.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
