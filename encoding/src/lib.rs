#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! KLV encoding and decoding primitives.
//!
//! This crate provides the byte-level codecs that the set and stream
//! parsers are built on: big-endian integer conversions and hexadecimal
//! helpers, the BER length and BER-OID key codecs, the reversible
//! fixed-point range mapping used by most ST 0601 quantities, the
//! microsecond timestamp codec, and the packet checksum.
//!
//! All APIs are based on synchronous I/O or in-memory slices.

pub mod ber;
pub mod bytes;
pub mod checksum;
pub mod mapper;
pub mod timestamp;

pub use ber::{encode_length, read_key, read_length};
pub use mapper::{MappedValue, RangeMapper};
