//! # KLV-rs library
//!
//! This crate serves as a parent for the library crates in the KLV-rs
//! project, aggregating the key modules that you are likely to require
//! when reading MISB ST 0601 UAS Datalink metadata from SMPTE KLV byte
//! streams. These modules are also available as crates which can be
//! fetched independently; they all carry the `klv-` prefix. For
//! instance, the module [`parser`] lives in the crate named
//! `klv-parser`.
//!
//! ## Overview
//!
//! - To pull successive packets out of a byte stream,
//!   build a [`StreamParser`](parser::StreamParser) over any
//!   [`Read`](std::io::Read) source and iterate it.
//! - Each [`Packet`](parser::Packet) exposes its elements in wire
//!   order, tag lookup, checksum verification status, and a
//!   byte-exact re-serialization.
//! - The [`core`] crate contains the data types the other crates rely
//!   on: [`Tag`](klv_core::Tag), [`UniversalLabel`](klv_core::UniversalLabel),
//!   decoded [values](klv_core::PrimitiveValue), and the dictionary
//!   traits by which tag tables are plugged in.
//! - The standard MISB tag tables are in [`dictionary_std`], which
//!   provides lazily loaded singletons for the UAS Datalink Local Set
//!   and the nested Security Local Set, plus numeric tag constants in
//!   the [`tags`](dictionary_std::tags) module.
//! - The byte-level codecs (BER lengths and keys, fixed-point range
//!   mapping, timestamps, checksums) live in [`encoding`], in case a
//!   custom parsing pipeline needs them directly.
//!
//! ## Example
//!
//! ```no_run
//! use klv::parser::StreamParser;
//! use klv::dictionary_std::tags;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::fs::File::open("telemetry.klv")?;
//! for packet in StreamParser::new(std::io::BufReader::new(file)) {
//!     let packet = packet?;
//!     if let Some(element) = packet.get(tags::MISSION_ID) {
//!         println!("{}", element);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub use klv_core as core;
pub use klv_dictionary_std as dictionary_std;
pub use klv_encoding as encoding;
pub use klv_parser as parser;
