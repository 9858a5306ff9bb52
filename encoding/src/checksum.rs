//! The MISB ST 0601 packet checksum.
//!
//! The checksum element (tag 1) of a UAS Datalink packet carries the
//! low 16 bits of the byte-wise sum of the complete packet: the
//! 16-byte universal label, the BER packet length, and every TLV up to
//! and including the checksum element's own key and length bytes. Only
//! the final 2-byte checksum payload is excluded from the sum. It is a
//! detection-only mechanism.

/// Sum bytes into a 16-bit accumulator with wrap-around.
pub fn sum16(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(u16::from(b)))
}

/// Compute the checksum a packet should carry, given the complete
/// packet bytes with the 2-byte checksum payload at the very end
/// (the position mandated by the standard). Returns `None` when the
/// packet is too short to carry one.
pub fn trailing_expected(packet: &[u8]) -> Option<u16> {
    packet
        .len()
        .checked_sub(2)
        .map(|prefix| sum16(&packet[..prefix]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_wrap_at_16_bits() {
        assert_eq!(sum16(&[]), 0);
        assert_eq!(sum16(&[0x01, 0x02]), 3);
        // 258 * 0xFF = 65790, which wraps to 254
        let many = vec![0xFFu8; 258];
        assert_eq!(sum16(&many), 254);
    }

    #[test]
    fn trailing_checksum_excludes_its_own_payload() {
        // contrived packet ending in a checksum TLV: 01 02 <sum>
        let mut packet = vec![0x06, 0x0E, 0x01, 0x06, 0x01, 0x02];
        let expected = sum16(&packet);
        packet.extend_from_slice(&expected.to_be_bytes());
        assert_eq!(trailing_expected(&packet), Some(expected));
    }

    #[test]
    fn short_input_has_no_checksum() {
        assert_eq!(trailing_expected(&[0x01]), None);
    }
}
