#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate provides the mid-level KLV parsing abstractions:
//! decoded [elements](element::Element), [local sets](set::LocalSet),
//! and the pull-based [stream parser](stream::StreamParser) that frames
//! and yields top-level packets.
//!
//! All APIs are based on synchronous I/O. The stream parser is a lazy
//! producer: bytes are only read from the source as the consumer asks
//! for the next packet.

pub mod element;
pub mod set;
pub mod stream;

pub use element::Element;
pub use set::LocalSet;
pub use stream::{ChecksumStatus, Packet, StreamParser};
