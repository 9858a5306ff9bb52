#![crate_type = "lib"]
#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core KLV library, containing the concepts, data structures
//! and traits shared by the other crates in the project: tags and keys,
//! lengths, universal labels, decoded values, and the tag dictionary
//! mechanism by which keys are dispatched to value converters.
//!
//! Byte-level codecs live in `klv-encoding`, the set and stream parsers
//! in `klv-parser`, and the literal MISB ST 0601 / ST 0102 tables in
//! `klv-dictionary-std`.

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::{LocalSetDictionary, LocalSetEntryRef, UlDictionary, UlEntryRef, ValueKind};
pub use header::{Header, Length, LocalKey, Tag, UniversalLabel};
pub use value::{PrimitiveValue, Value};
