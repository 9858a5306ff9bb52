//! UAS Datalink Local Set dictionary entries.
//!
//! Domains, ranges and units follow MISB ST 0601. Signed domains start
//! at `-(2^N - 1)`: the most negative word is the standard's reserved
//! out-of-range indicator.

use crate::security::SecurityLocalSet;
use klv_core::dictionary::{LocalSetEntryRef, ValueKind};

type E<'a> = LocalSetEntryRef<'a>;

const fn bytes(key: &'static [u8], name: &'static str) -> E<'static> {
    E {
        key,
        name,
        kind: ValueKind::Bytes,
    }
}

const fn text(key: &'static [u8], name: &'static str) -> E<'static> {
    E {
        key,
        name,
        kind: ValueKind::Text,
    }
}

const fn integer(key: &'static [u8], name: &'static str, domain: (i64, i64)) -> E<'static> {
    E {
        key,
        name,
        kind: ValueKind::Integer { domain },
    }
}

const fn mapped(
    key: &'static [u8],
    name: &'static str,
    domain: (i64, i64),
    range: (f64, f64),
    units: Option<&'static str>,
) -> E<'static> {
    E {
        key,
        name,
        kind: ValueKind::Mapped {
            domain,
            range,
            units,
        },
    }
}

const DEG: Option<&str> = Some("degrees");
const M: Option<&str> = Some("meters");

const I16: (i64, i64) = (-32767, 32767);
const I32: (i64, i64) = (-2147483647, 2147483647);
const U8: (i64, i64) = (0, 255);
const U16: (i64, i64) = (0, 65535);
const U32: (i64, i64) = (0, 4294967295);

/// Entries of the MISB ST 0601 UAS Datalink Local Set.
pub const ENTRIES: &[E<'static>] = &[
    bytes(&[0x01], "Checksum"),
    E {
        key: &[0x02],
        name: "Precision Time Stamp",
        kind: ValueKind::Timestamp,
    },
    text(&[0x03], "Mission ID"),
    text(&[0x04], "Platform Tail Number"),
    mapped(&[0x05], "Platform Heading Angle", U16, (0.0, 360.0), DEG),
    mapped(&[0x06], "Platform Pitch Angle", I16, (-20.0, 20.0), DEG),
    mapped(&[0x07], "Platform Roll Angle", I16, (-50.0, 50.0), DEG),
    mapped(&[0x08], "Platform True Airspeed", U8, (0.0, 255.0), None),
    mapped(&[0x09], "Platform Indicated Airspeed", U8, (0.0, 255.0), None),
    text(&[0x0A], "Platform Designation"),
    text(&[0x0B], "Image Source Sensor"),
    text(&[0x0C], "Image Coordinate System"),
    mapped(&[0x0D], "Sensor Latitude", I32, (-90.0, 90.0), DEG),
    mapped(&[0x0E], "Sensor Longitude", I32, (-180.0, 180.0), DEG),
    mapped(&[0x0F], "Sensor True Altitude", U16, (-900.0, 19000.0), M),
    mapped(&[0x10], "Sensor Horizontal Field of View", U16, (0.0, 180.0), DEG),
    mapped(&[0x11], "Sensor Vertical Field of View", U16, (0.0, 180.0), DEG),
    mapped(&[0x12], "Sensor Relative Azimuth Angle", U32, (0.0, 360.0), DEG),
    mapped(&[0x13], "Sensor Relative Elevation Angle", I32, (-180.0, 180.0), DEG),
    mapped(&[0x14], "Sensor Relative Roll Angle", U32, (0.0, 360.0), DEG),
    mapped(&[0x15], "Slant Range", U32, (0.0, 5_000_000.0), M),
    mapped(&[0x16], "Target Width", U16, (0.0, 10_000.0), M),
    mapped(&[0x17], "Frame Center Latitude", I32, (-90.0, 90.0), DEG),
    mapped(&[0x18], "Frame Center Longitude", I32, (-180.0, 180.0), DEG),
    mapped(&[0x19], "Frame Center Elevation", U16, (-900.0, 19000.0), M),
    mapped(&[0x1A], "Offset Corner Latitude Point 1", I16, (-0.075, 0.075), DEG),
    mapped(&[0x1B], "Offset Corner Longitude Point 1", I16, (-0.075, 0.075), DEG),
    mapped(&[0x1C], "Offset Corner Latitude Point 2", I16, (-0.075, 0.075), DEG),
    mapped(&[0x1D], "Offset Corner Longitude Point 2", I16, (-0.075, 0.075), DEG),
    mapped(&[0x1E], "Offset Corner Latitude Point 3", I16, (-0.075, 0.075), DEG),
    mapped(&[0x1F], "Offset Corner Longitude Point 3", I16, (-0.075, 0.075), DEG),
    mapped(&[0x20], "Offset Corner Latitude Point 4", I16, (-0.075, 0.075), DEG),
    mapped(&[0x21], "Offset Corner Longitude Point 4", I16, (-0.075, 0.075), DEG),
    mapped(&[0x28], "Target Location Latitude", I32, (-90.0, 90.0), DEG),
    mapped(&[0x29], "Target Location Longitude", I32, (-180.0, 180.0), DEG),
    mapped(&[0x2A], "Target Location Elevation", U16, (-900.0, 19000.0), M),
    E {
        key: &[0x30],
        name: "Security Local Set",
        kind: ValueKind::Set(&SecurityLocalSet),
    },
    integer(&[0x41], "UAS Datalink LS Version Number", U8),
    bytes(&[0x5E], "MIIS Core Identifier"),
];
