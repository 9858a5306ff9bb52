//! The precision timestamp codec.
//!
//! MISB ST 0603 timestamps are 8 big-endian bytes counting
//! microseconds since midnight of January 1, 1970 UTC, leap seconds
//! excluded. Sub-microsecond precision is not representable.

use byteordered::ByteOrdered;
use chrono::{DateTime, Utc};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::convert::TryFrom;

/// Module-level error type:
/// for failures while converting precision timestamps.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Timestamp field has {} bytes, expected 8", got))]
    InvalidFieldLength { got: usize, backtrace: Backtrace },
    #[snafu(display("Failed to read timestamp bytes: {}", source))]
    ReadTimestamp {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Microsecond count {} is outside the representable date range", micros))]
    UnrepresentableInstant { micros: u64, backtrace: Backtrace },
    #[snafu(display("Timestamps before the Unix epoch cannot be encoded"))]
    BeforeEpoch { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Decode an 8-byte precision timestamp field.
pub fn decode(field: &[u8]) -> Result<DateTime<Utc>> {
    ensure!(field.len() == 8, InvalidFieldLengthSnafu { got: field.len() });
    let micros = ByteOrdered::be(field)
        .read_u64()
        .context(ReadTimestampSnafu)?;
    let signed = i64::try_from(micros)
        .ok()
        .context(UnrepresentableInstantSnafu { micros })?;
    DateTime::from_timestamp_micros(signed).context(UnrepresentableInstantSnafu { micros })
}

/// Encode a timestamp back into its 8-byte field.
/// Instants before the epoch have no wire representation.
pub fn encode(instant: DateTime<Utc>) -> Result<[u8; 8]> {
    let micros = instant.timestamp_micros();
    ensure!(micros >= 0, BeforeEpochSnafu);
    Ok((micros as u64).to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_second_instant() {
        // MISB ST 0902.5 tag 2 example
        let field = [0x00, 0x04, 0x60, 0x50, 0x58, 0x4E, 0x01, 0x80];
        let t = decode(&field).unwrap();
        assert_eq!(t.timestamp_micros(), 1_231_798_102_000_000);
        assert_eq!(encode(t).unwrap(), field);
    }

    #[test]
    fn fractional_instant() {
        // MISB ST 0601.9 tag 2 example
        let field = [0x00, 0x04, 0x59, 0xF4, 0xA6, 0xAA, 0x4A, 0xA8];
        let t = decode(&field).unwrap();
        assert_eq!(t.timestamp_micros(), 1_224_807_209_913_000);
        assert_eq!(encode(t).unwrap(), field);
    }

    #[test]
    fn wrong_field_width_is_rejected() {
        assert!(matches!(
            decode(&[0x00; 4]),
            Err(Error::InvalidFieldLength { got: 4, .. })
        ));
        assert!(matches!(
            decode(&[0x00; 9]),
            Err(Error::InvalidFieldLength { got: 9, .. })
        ));
    }

    #[test]
    fn counts_beyond_i64_are_rejected() {
        let field = [0xFF; 8];
        assert!(matches!(
            decode(&field),
            Err(Error::UnrepresentableInstant { .. })
        ));
    }
}
