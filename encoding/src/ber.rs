//! Decoding and encoding of BER lengths and BER-OID tag keys.
//!
//! A BER length is one byte for values below 0x80 (short form);
//! otherwise the first byte's low 7 bits give the number of
//! subsequent big-endian length bytes (long form). The indefinite
//! form (`0x80` alone) is not used by KLV and is rejected.
//!
//! A BER-OID key is a run of bytes with the high bit set on all but
//! the last; the low 7 bits of each byte concatenate, most significant
//! group first, into the numeric tag.

use crate::bytes;
use klv_core::{Length, LocalKey};
use smallvec::SmallVec;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::Read;

/// Module-level error type:
/// for failures while reading BER fields from a data source.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read BER length octet: {}", source))]
    ReadLength {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Indefinite BER length form is not supported"))]
    IndefiniteLength { backtrace: Backtrace },
    #[snafu(display("BER length of {} octets is too wide, at most 8 supported", got))]
    LengthTooWide { got: usize, backtrace: Backtrace },
    #[snafu(display("Failed to read BER-OID key octet: {}", source))]
    ReadKey {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("BER-OID key of {} octets overflows the supported tag width", got))]
    KeyTooWide { got: usize, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// a u64 tag holds at most ceil(64 / 7) key octets
const MAX_KEY_OCTETS: usize = 10;

/// Read one BER length field from the given source,
/// consuming exactly the octets that belong to it.
pub fn read_length<S>(mut source: S) -> Result<Length>
where
    S: Read,
{
    let mut buf = [0u8; 1];
    source.read_exact(&mut buf).context(ReadLengthSnafu)?;
    let b0 = buf[0];
    if b0 < 0x80 {
        return Ok(Length(u64::from(b0)));
    }
    let k = usize::from(b0 & 0x7F);
    ensure!(k != 0, IndefiniteLengthSnafu);
    ensure!(k <= 8, LengthTooWideSnafu { got: k });
    let mut rest = [0u8; 8];
    source.read_exact(&mut rest[..k]).context(ReadLengthSnafu)?;
    let value = rest[..k]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    Ok(Length(value))
}

/// Encode a length in minimum-form BER.
pub fn encode_length(length: Length) -> SmallVec<[u8; 5]> {
    let n = length.get();
    if n < 0x80 {
        return SmallVec::from_slice(&[n as u8]);
    }
    let k = bytes::bytes_required_uint(n);
    let mut out = SmallVec::with_capacity(1 + k);
    out.push(0x80 | k as u8);
    for i in (0..k).rev() {
        out.push((n >> (8 * i as u32)) as u8);
    }
    out
}

/// The number of octets that [`encode_length`] produces for a length.
pub fn encoded_length_size(length: Length) -> usize {
    let n = length.get();
    if n < 0x80 {
        1
    } else {
        1 + bytes::bytes_required_uint(n)
    }
}

/// Read one BER-OID encoded key from the given source,
/// consuming up to and including the first octet with a clear high bit.
/// The returned key preserves the octets exactly as read.
pub fn read_key<S>(mut source: S) -> Result<LocalKey>
where
    S: Read,
{
    let mut octets: SmallVec<[u8; 2]> = SmallVec::new();
    let mut buf = [0u8; 1];
    loop {
        source.read_exact(&mut buf).context(ReadKeySnafu)?;
        octets.push(buf[0]);
        if buf[0] & 0x80 == 0 {
            break;
        }
        ensure!(
            octets.len() < MAX_KEY_OCTETS,
            KeyTooWideSnafu { got: octets.len() }
        );
    }
    Ok(LocalKey::new(octets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use klv_core::Tag;

    #[test]
    fn short_form_lengths() {
        assert_eq!(read_length(&[0x00][..]).unwrap(), Length(0));
        assert_eq!(read_length(&[0x05][..]).unwrap(), Length(5));
        assert_eq!(read_length(&[0x7F][..]).unwrap(), Length(127));
        assert_eq!(&encode_length(Length(0))[..], &[0x00]);
        assert_eq!(&encode_length(Length(127))[..], &[0x7F]);
    }

    #[test]
    fn long_form_lengths() {
        assert_eq!(read_length(&[0x81, 0x80][..]).unwrap(), Length(128));
        assert_eq!(read_length(&[0x82, 0x01, 0x00][..]).unwrap(), Length(256));
        assert_eq!(
            read_length(&[0x84, 0xFF, 0xFF, 0xFF, 0xFF][..]).unwrap(),
            Length(0xFFFF_FFFF)
        );
        assert_eq!(&encode_length(Length(128))[..], &[0x81, 0x80]);
        assert_eq!(&encode_length(Length(256))[..], &[0x82, 0x01, 0x00]);
    }

    #[test]
    fn length_round_trip_is_minimal() {
        for n in [0u64, 1, 127, 128, 255, 256, 65535, 65536, 0xFFFF_FFFF] {
            let encoded = encode_length(Length(n));
            assert_eq!(read_length(&encoded[..]).unwrap(), Length(n));
            assert_eq!(encoded.len(), encoded_length_size(Length(n)));
            // no shorter encoding of the same value exists
            if n >= 0x80 {
                let k = encoded.len() - 1;
                assert!(k == 1 || n >= 1u64 << (8 * (k as u32 - 1)));
            }
        }
    }

    #[test]
    fn indefinite_form_is_rejected() {
        assert!(matches!(
            read_length(&[0x80][..]),
            Err(Error::IndefiniteLength { .. })
        ));
    }

    #[test]
    fn truncated_length_is_an_error() {
        assert!(matches!(
            read_length(&[][..]),
            Err(Error::ReadLength { .. })
        ));
        assert!(matches!(
            read_length(&[0x82, 0x01][..]),
            Err(Error::ReadLength { .. })
        ));
    }

    #[test]
    fn single_byte_keys() {
        let key = read_key(&[0x01][..]).unwrap();
        assert_eq!(key.as_bytes(), &[0x01]);
        assert_eq!(key.tag(), Tag(1));
    }

    #[test]
    fn multi_byte_keys() {
        let key = read_key(&[0x81, 0x02, 0xFF][..]).unwrap();
        assert_eq!(key.as_bytes(), &[0x81, 0x02]);
        assert_eq!(key.tag(), Tag(0x82));
    }

    #[test]
    fn truncated_key_is_an_error() {
        assert!(matches!(read_key(&[0x81][..]), Err(Error::ReadKey { .. })));
    }
}
