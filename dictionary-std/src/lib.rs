#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_docs, unused_qualifications, unused_import_braces)]
//! This crate implements the standard MISB tag dictionaries and constants.
//!
//! ## Run-time dictionaries
//!
//! The following modules provide definitions for dictionaries
//! which can be queried during a program's lifetime:
//!
//! - [`uas_datalink`]: the MISB ST 0601 UAS Datalink Local Set table
//!   and the registry of standard universal labels. When reading plain
//!   ST 0601 streams, this dictionary should suffice.
//! - [`security`]: the MISB ST 0102 Security Local Set table, which the
//!   UAS Datalink dictionary nests under tag 48.
//!
//! Each dictionary is provided as a singleton behind a unit type
//! for efficiency and ease of use. The records are collected from the
//! published MISB standards; the codec crates never hardcode them.
//!
//! ## Constants
//!
//! The [`tags`] module declares the numeric tags of the UAS Datalink
//! Local Set as constants, performing an equivalent mapping at compile
//! time without a look-up cost.

pub mod entries;
pub mod security;
pub mod tags;
pub mod uas_datalink;

pub use security::SecurityLocalSet;
pub use uas_datalink::{StandardUlDictionary, UasDatalinkLocalSet, UAS_DATALINK_LOCAL_SET};

#[cfg(test)]
mod tests {
    use klv_core::Tag;

    /// tests for just a few tag constants to make sure that they
    /// were well installed into the crate
    #[test]
    fn tags_constants_available() {
        use crate::tags::*;
        assert_eq!(CHECKSUM, Tag(1));
        assert_eq!(SENSOR_LATITUDE, Tag(13));
        assert_eq!(SECURITY_LOCAL_SET, Tag(48));
        assert_eq!(MIIS_CORE_IDENTIFIER, Tag(94));
    }
}
