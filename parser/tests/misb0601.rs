//! End-to-end tests over published MISB ST 0902 / ST 0601.9 test
//! vectors: single TLV decoding with byte-exact re-serialization,
//! and whole packets through the stream parser.

use klv_core::{PrimitiveValue, Tag, Value};
use klv_dictionary_std::{tags, UasDatalinkLocalSet};
use klv_encoding::bytes::parse_hex;
use klv_parser::{ChecksumStatus, Element, LocalSet, StreamParser};

/// Decode a single TLV against the UAS Datalink dictionary
/// and check that it re-serializes to its input.
fn single(tlv_hex: &str) -> Element {
    let tlv = parse_hex(tlv_hex);
    let set = LocalSet::read(&tlv, &UasDatalinkLocalSet).unwrap();
    assert_eq!(set.elements().len(), 1);
    let element = set.elements()[0].clone();
    assert_eq!(element.to_bytes(), tlv, "TLV re-serialization changed");
    element
}

fn float_of(element: &Element) -> f64 {
    element
        .value()
        .primitive()
        .expect("primitive value expected")
        .to_float()
        .expect("mapped float expected")
}

#[test]
fn checksum_payload_displays_as_hex() {
    // See MISB ST 0902.5
    let element = single("01 02 AA 43");
    assert_eq!(element.tag(), tags::CHECKSUM);
    assert_eq!(element.value().primitive().unwrap().to_string(), "AA 43");
}

#[test]
fn precision_timestamp_whole_second() {
    // See MISB ST 0902.5
    let element = single("02 08 00 04 60 50 58 4E 01 80");
    assert_eq!(
        element.value().primitive().unwrap().to_string(),
        "2009-01-12 22:08:22+00:00"
    );
}

#[test]
fn precision_timestamp_fractional() {
    // See MISB ST 0601.9
    let element = single("02 08 00 04 59 F4 A6 AA 4A A8");
    assert_eq!(
        element.value().primitive().unwrap().to_string(),
        "2008-10-24 00:13:29.913000+00:00"
    );
}

#[test]
fn mission_id_text() {
    // See MISB ST 0902.5
    let element = single("03 0A 4D 69 73 73 69 6F 6E 20 31 32");
    assert_eq!(element.name(), Some("Mission ID"));
    assert_eq!(
        element.value().primitive().unwrap().to_str().unwrap(),
        "Mission 12"
    );
}

#[test]
fn mission_id_with_trailing_junk_in_the_vector() {
    // See MISB ST 0601.9; the stray bracket is part of the published
    // vector text and exercises the lenient hex parser
    let element = single("03 09 4D 49 53 53 49 4F 4E 30 31]");
    assert_eq!(
        element.value().primitive().unwrap().to_str().unwrap(),
        "MISSION01"
    );
}

#[test]
fn platform_heading_angle() {
    let element = single("05 02 71 C2");
    assert!((float_of(&element) - 159.974).abs() < 0.001);
    assert_eq!(element.units(), Some("degrees"));
}

#[test]
fn platform_pitch_angle() {
    let element = single("06 02 FD 3D");
    assert!((float_of(&element) - (-0.4315)).abs() < 0.0001);
}

#[test]
fn sensor_latitude() {
    let element = single("0D 04 55 95 B6 6D");
    assert!((float_of(&element) - 60.17682297).abs() < 1e-6);
}

#[test]
fn sensor_true_altitude() {
    // Test data pulled from MISB ST 0902.6 Annex C; matches the
    // unsigned (0, 2^16-1) -> (-900, 19000) domain
    let element = single("0F 02 C2 21");
    assert!((float_of(&element) - 14190.7).abs() < 0.1);
    assert_eq!(element.units(), Some("meters"));
}

#[test]
fn slant_range() {
    let element = single("15 04 03 83 09 26");
    assert!((float_of(&element) - 68590.983).abs() < 0.001);
}

#[test]
fn frame_center_latitude() {
    let element = single("17 04 F1 01 A2 29");
    assert!((float_of(&element) - (-10.54238863)).abs() < 1e-6);
}

#[test]
fn reserved_sentinel_surfaces_as_out_of_range() {
    let element = single("0D 04 80 00 00 00");
    assert_eq!(
        element.value().primitive(),
        Some(&PrimitiveValue::OutOfRange)
    );
}

/// A hand-assembled UAS Datalink packet with a correct trailing
/// checksum element. The checksum is the 16-bit byte sum of the whole
/// packet up to and including the checksum element's key and length.
fn sample_packet() -> Vec<u8> {
    parse_hex(
        "06 0E 2B 34 02 0B 01 01 0E 01 03 01 01 00 00 00 \
         2C \
         02 08 00 04 60 50 58 4E 01 80 \
         03 0A 4D 69 73 73 69 6F 6E 20 31 32 \
         05 02 71 C2 \
         06 02 FD 3D \
         0D 04 55 95 B6 6D \
         0F 02 C2 21 \
         01 02 0B AA",
    )
}

#[test]
fn whole_packet_decodes_in_wire_order_and_round_trips() {
    let input = sample_packet();
    let mut parser = StreamParser::new(&input[..]);
    let packet = parser.next().unwrap().unwrap();
    assert!(parser.next().is_none());

    let order: Vec<Tag> = packet.elements().iter().map(Element::tag).collect();
    assert_eq!(
        order,
        vec![Tag(2), Tag(3), Tag(5), Tag(6), Tag(13), Tag(15), Tag(1)]
    );
    assert_eq!(packet.checksum(), ChecksumStatus::Valid);
    assert_eq!(packet.to_bytes(), input);

    let mission = packet.get(tags::MISSION_ID).unwrap();
    assert_eq!(
        mission.value().primitive().unwrap().to_str().unwrap(),
        "Mission 12"
    );
    let heading = packet.get(tags::PLATFORM_HEADING_ANGLE).unwrap();
    assert!((float_of(heading) - 159.974).abs() < 0.001);
}

#[test]
fn corrupted_packet_is_flagged_but_still_decoded() {
    let mut input = sample_packet();
    // flip one payload byte: "Mission 12" -> "Nission 12"
    let mission_start = input.iter().position(|&b| b == 0x4D).unwrap();
    input[mission_start] = 0x4E;

    let mut parser = StreamParser::new(&input[..]);
    let packet = parser.next().unwrap().unwrap();
    match packet.checksum() {
        ChecksumStatus::Mismatch { expected, found } => {
            assert_eq!(found, 0x0BAA);
            assert_eq!(expected, 0x0BAB);
        }
        other => panic!("expected a checksum mismatch, got {:?}", other),
    }
    // detection only: the packet still decodes and round-trips
    assert_eq!(
        packet
            .get(tags::MISSION_ID)
            .unwrap()
            .value()
            .primitive()
            .unwrap()
            .to_str()
            .unwrap(),
        "Nission 12"
    );
    assert_eq!(packet.to_bytes(), input);
}

#[test]
fn nested_security_set_round_trips_through_a_packet() {
    // UAS LS carrying a timestamp and a Security LS with
    // classification, country coding method and country
    let input = parse_hex(
        "06 0E 2B 34 02 0B 01 01 0E 01 03 01 01 00 00 00 \
         16 \
         02 08 00 04 59 F4 A6 AA 4A A8 \
         30 0A 01 01 01 02 01 01 03 02 43 5A",
    );
    let mut parser = StreamParser::new(&input[..]);
    let packet = parser.next().unwrap().unwrap();
    assert!(parser.next().is_none());

    let security = packet.get(tags::SECURITY_LOCAL_SET).unwrap();
    assert_eq!(security.name(), Some("Security Local Set"));
    let inner = match security.value() {
        Value::Set(set) => set,
        other => panic!("expected a nested set, got {:?}", other.value_type()),
    };
    assert_eq!(inner.elements().len(), 3);
    assert_eq!(
        inner.get(Tag(1)).unwrap().name(),
        Some("Security Classification")
    );
    assert_eq!(
        inner.get(Tag(3)).unwrap().value().primitive().unwrap().to_str().unwrap(),
        "CZ"
    );
    assert_eq!(packet.to_bytes(), input);
}

#[test]
fn unknown_tag_in_a_packet_is_preserved() {
    // tag 125 is not registered; its TLV must survive re-serialization
    let input = parse_hex(
        "06 0E 2B 34 02 0B 01 01 0E 01 03 01 01 00 00 00 \
         09 \
         7D 03 DE AD 01 \
         03 02 4F 4B",
    );
    let mut parser = StreamParser::new(&input[..]);
    let packet = parser.next().unwrap().unwrap();
    let unknown = packet.get(Tag(125)).unwrap();
    assert_eq!(unknown.name(), None);
    assert_eq!(unknown.data(), &[0xDE, 0xAD, 0x01]);
    assert_eq!(packet.to_bytes(), input);
}

#[test]
fn two_packets_with_garbage_between_them() {
    let mut input = sample_packet();
    input.extend_from_slice(&[0x00, 0x01, 0x02, 0x03, 0x04]);
    input.extend_from_slice(&sample_packet());
    let mut parser = StreamParser::new(&input[..]);
    let first = parser.next().unwrap().unwrap();
    let second = parser.next().unwrap().unwrap();
    assert_eq!(first.to_bytes(), second.to_bytes());
    assert!(parser.next().is_none());
    assert_eq!(parser.skipped_bytes(), 5);
}
