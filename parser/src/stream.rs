//! A pull-based reader of top-level KLV packets from a byte stream.
//!
//! The stream parser synchronizes on registered 16-byte universal
//! labels, frames one packet at a time through the BER outer length,
//! and hands the payload to the local set parser named by the label's
//! dictionary entry. Bytes that match no registered label are noise:
//! they are skipped with a warning and counted, never fatal. A packet
//! whose payload does not scan is abandoned by advancing one byte past
//! its label and rescanning, so that a corrupted packet cannot take
//! the rest of the stream down with it.

use crate::element::Element;
use crate::set::LocalSet;
use klv_core::dictionary::{UlDictionary, UlEntryRef};
use klv_core::{Header, Length, Tag, UniversalLabel};
use std::convert::TryFrom;
use klv_dictionary_std::StandardUlDictionary;
use klv_encoding::{ber, checksum};
use snafu::{Backtrace, ResultExt, Snafu};
use std::collections::VecDeque;
use std::fmt;
use std::io::Read;

/// Module-level error type:
/// for conditions that end stream iteration.
///
/// Recoverable conditions (noise between packets, malformed packets)
/// are logged and skipped instead of surfacing here.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read from stream source at position {}", position))]
    ReadSource {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Stream ended inside a packet starting at position {}", position))]
    TruncatedPacket { position: u64, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The outcome of verifying a packet's checksum element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// The packet carries no 2-byte checksum element.
    NotPresent,
    /// The carried checksum matches the packet bytes.
    Valid,
    /// The carried checksum does not match. Detection only:
    /// the packet is decoded and delivered regardless.
    Mismatch {
        /// the checksum the packet bytes sum to
        expected: u16,
        /// the checksum the packet carries
        found: u16,
    },
}

/// A decoded top-level KLV packet: a local set framed by a universal
/// label and a BER outer length.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    ul: UniversalLabel,
    name: &'static str,
    length: Length,
    set: LocalSet,
    checksum: ChecksumStatus,
}

impl Packet {
    /// The packet's universal label.
    pub fn ul(&self) -> UniversalLabel {
        self.ul
    }

    /// The registered name of the packet type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared payload length.
    pub fn length(&self) -> Length {
        self.length
    }

    /// The packet payload as a local set.
    pub fn set(&self) -> &LocalSet {
        &self.set
    }

    /// The decoded elements, in wire order.
    pub fn elements(&self) -> &[Element] {
        self.set.elements()
    }

    /// Look up an element by its numeric tag.
    pub fn get(&self, tag: Tag) -> Option<&Element> {
        self.set.get(tag)
    }

    /// The outcome of checksum verification for this packet.
    pub fn checksum(&self) -> ChecksumStatus {
        self.checksum
    }

    /// Serialize the packet back into `UL ‖ length ‖ payload` form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let payload_len = Length::from(self.set.serialized_len());
        let mut out =
            Vec::with_capacity(16 + ber::encoded_length_size(payload_len) + self.set.serialized_len());
        out.extend_from_slice(self.ul.as_bytes());
        out.extend_from_slice(&ber::encode_length(payload_len));
        out.extend_from_slice(&self.set.to_bytes());
        out
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.ul)?;
        fmt::Display::fmt(&self.set, f)
    }
}

const READ_CHUNK: usize = 8192;

/// A lazy producer of successive top-level packets from a byte source.
///
/// Iteration yields one [`Packet`] per registered universal label
/// found in the stream, in stream order. The source is read only as
/// packets are requested; dropping the parser stops all reading.
#[derive(Debug)]
pub struct StreamParser<S, D = StandardUlDictionary> {
    source: S,
    dict: D,
    /// bytes read from the source but not yet consumed,
    /// including bytes put back by a packet resync
    buffer: VecDeque<u8>,
    /// absolute stream offset of the front of the buffer
    position: u64,
    /// noise bytes skipped since the last yielded packet
    skipped: u64,
    /// noise bytes skipped over the stream's whole life
    total_skipped: u64,
    /// fuse the iteration process if true
    hard_break: bool,
}

impl<S> StreamParser<S, StandardUlDictionary>
where
    S: Read,
{
    /// Create a stream parser over the standard universal label
    /// dictionary, which recognizes the UAS Datalink Local Set.
    pub fn new(source: S) -> Self {
        StreamParser::new_with_dictionary(source, StandardUlDictionary)
    }
}

impl<S, D> StreamParser<S, D>
where
    S: Read,
    D: UlDictionary,
{
    /// Create a stream parser with a custom universal label dictionary.
    pub fn new_with_dictionary(source: S, dict: D) -> Self {
        StreamParser {
            source,
            dict,
            buffer: VecDeque::new(),
            position: 0,
            skipped: 0,
            total_skipped: 0,
            hard_break: false,
        }
    }

    /// The number of noise bytes discarded during synchronization
    /// over the stream's whole life.
    pub fn skipped_bytes(&self) -> u64 {
        self.total_skipped
    }

    /// Top up the buffer to at least `wanted` bytes.
    /// Returns `false` on end of stream before that many.
    fn fill(&mut self, wanted: usize) -> Result<bool> {
        let mut chunk = [0u8; READ_CHUNK];
        while self.buffer.len() < wanted {
            let n = self.source.read(&mut chunk).context(ReadSourceSnafu {
                position: self.position + self.buffer.len() as u64,
            })?;
            if n == 0 {
                return Ok(false);
            }
            self.buffer.extend(&chunk[..n]);
        }
        Ok(true)
    }

    /// Discard one byte from the front of the buffer as noise.
    fn skip_one(&mut self) {
        self.buffer.pop_front();
        self.position += 1;
        self.skipped += 1;
        self.total_skipped += 1;
    }

    /// Copy the first 16 buffered bytes as a universal label.
    /// Only called with at least 16 bytes buffered.
    fn peek_ul(&self) -> UniversalLabel {
        let mut bytes = [0u8; 16];
        for (slot, b) in bytes.iter_mut().zip(self.buffer.iter()) {
            *slot = *b;
        }
        UniversalLabel::new(bytes)
    }

    /// Put a failed packet's bytes back for rescanning, minus its
    /// first byte, and move past that byte.
    fn resync(&mut self, frame: Vec<u8>) {
        for b in frame.into_iter().skip(1).rev() {
            self.buffer.push_front(b);
        }
        self.position += 1;
        self.skipped += 1;
        self.total_skipped += 1;
    }

    /// Frame and decode the packet at the front of the buffer.
    ///
    /// `Ok(Some(packet))` delivers a packet; `Ok(None)` means the
    /// packet was abandoned and scanning should continue;
    /// `Err` ends the stream.
    fn take_packet(&mut self, entry: UlEntryRef<'static>) -> Result<Option<Packet>> {
        let start = self.position;

        // examine the BER outer length without consuming it yet
        if !self.fill(17)? {
            return TruncatedPacketSnafu { position: start }.fail();
        }
        let b0 = self.buffer[16];
        let extra = if b0 < 0x80 { 0 } else { usize::from(b0 & 0x7F) };
        if b0 >= 0x80 && (extra == 0 || extra > 8) {
            // indefinite or unusable length form
            tracing::warn!(
                "malformed packet length at position {}, resynchronizing",
                start
            );
            self.skip_one();
            return Ok(None);
        }
        if !self.fill(17 + extra)? {
            return TruncatedPacketSnafu { position: start }.fail();
        }
        let header_len = 17 + extra;
        let payload_len = if extra == 0 {
            u64::from(b0)
        } else {
            self.buffer
                .iter()
                .skip(17)
                .take(extra)
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
        };

        let total = match usize::try_from(header_len as u64 + payload_len) {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    "unreasonable packet length {} at position {}, resynchronizing",
                    payload_len,
                    start
                );
                self.skip_one();
                return Ok(None);
            }
        };
        if !self.fill(total)? {
            return TruncatedPacketSnafu { position: start }.fail();
        }

        let frame: Vec<u8> = self.buffer.drain(..total).collect();
        match LocalSet::read(&frame[header_len..], entry.dictionary) {
            Ok(set) => {
                self.position += total as u64;
                let status = verify_checksum(&frame, header_len, &set);
                if let ChecksumStatus::Mismatch { expected, found } = status {
                    tracing::warn!(
                        "checksum mismatch in packet at position {}: expected {:04X}, found {:04X}",
                        start,
                        expected,
                        found
                    );
                }
                Ok(Some(Packet {
                    ul: entry.ul,
                    name: entry.name,
                    length: Length(payload_len),
                    set,
                    checksum: status,
                }))
            }
            Err(e) => {
                tracing::warn!("malformed packet at position {}: {}, resynchronizing", start, e);
                self.resync(frame);
                Ok(None)
            }
        }
    }
}

/// Locate the packet's checksum element and compare it against the
/// sum of every frame byte up to and including the element's own key
/// and length bytes.
fn verify_checksum(frame: &[u8], header_len: usize, set: &LocalSet) -> ChecksumStatus {
    let mut offset = header_len;
    for element in set.elements() {
        let head = element.key().len() + ber::encoded_length_size(element.length());
        if element.tag() == Tag(1) && element.data().len() == 2 {
            let expected = checksum::sum16(&frame[..offset + head]);
            let found = u16::from_be_bytes([element.data()[0], element.data()[1]]);
            return if expected == found {
                ChecksumStatus::Valid
            } else {
                ChecksumStatus::Mismatch { expected, found }
            };
        }
        offset += head + element.data().len();
    }
    ChecksumStatus::NotPresent
}

impl<S, D> Iterator for StreamParser<S, D>
where
    S: Read,
    D: UlDictionary,
{
    type Item = Result<Packet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.hard_break {
            return None;
        }
        loop {
            // synchronize on a registered universal label
            match self.fill(16) {
                Err(e) => {
                    self.hard_break = true;
                    return Some(Err(e));
                }
                Ok(false) => {
                    // clean end of stream; trailing sub-label bytes are noise
                    let tail = self.buffer.len() as u64;
                    self.skipped += tail;
                    self.total_skipped += tail;
                    self.position += tail;
                    self.buffer.clear();
                    if self.skipped > 0 {
                        tracing::warn!("discarded {} noise bytes at end of stream", self.skipped);
                    }
                    self.hard_break = true;
                    return None;
                }
                Ok(true) => {}
            }

            let entry = match self.dict.by_ul(&self.peek_ul()) {
                Some(entry) => *entry,
                None => {
                    self.skip_one();
                    continue;
                }
            };

            if self.skipped > 0 {
                tracing::warn!(
                    "skipped {} noise bytes before packet at position {}",
                    self.skipped,
                    self.position
                );
                self.skipped = 0;
            }

            match self.take_packet(entry) {
                Ok(Some(packet)) => return Some(Ok(packet)),
                Ok(None) => continue,
                Err(e) => {
                    self.hard_break = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
