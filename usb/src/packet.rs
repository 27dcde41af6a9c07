use crate::error::DecodeError;
use std::fmt;
use std::ops::{Deref, Index};
use std::slice::SliceIndex;

pub const PACKET_SIZE: usize = 64;

/// Byte positions inside a packet. Every serializer and decoder goes through
/// these, raw indices should not appear anywhere else.
pub mod offsets {
    pub const DSP: usize = 2;
    pub const SAVE_SLOT: usize = 4;
    pub const AMPLIFIER: usize = 16;

    // Fixed 0x01 bytes. Load slot only sets the first one, amp packets set all three.
    pub const FLAG_A: usize = 6;
    pub const FLAG_B: usize = 7;
    pub const AMP_FLAG: usize = 53;

    pub const VOLUME: usize = 32;
    pub const GAIN: usize = 33;
    pub const GAIN2: usize = 34;
    pub const MASTER_VOL: usize = 35;
    pub const TREBLE: usize = 36;
    pub const MIDDLE: usize = 37;
    pub const BASS: usize = 38;
    pub const PRESENCE: usize = 39;
    pub const DEPTH: usize = 41;
    pub const BIAS: usize = 42;
    pub const NOISE_GATE: usize = 47;
    pub const THRESHOLD: usize = 48;
    pub const CABINET: usize = 49;
    pub const SAG: usize = 51;
    pub const BRIGHTNESS: usize = 52;

    // Model specific values, each one is repeated at every listed site.
    pub const AMP_AUX_V0: [usize; 2] = [40, 43];
    pub const AMP_AUX_V1: [usize; 4] = [44, 45, 46, 50];
    pub const AMP_AUX_V2: usize = 54;
}

/// A single 64 byte control transfer.
///
/// Packets are zero filled on creation and can only be written from inside
/// this crate, so anything handed to a transport is final.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Packet([u8; PACKET_SIZE]);

impl Packet {
    pub(crate) fn new() -> Self {
        Self([0; PACKET_SIZE])
    }

    /// Builds a packet from a buffer received from the amplifier.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let data: [u8; PACKET_SIZE] = bytes
            .try_into()
            .map_err(|_| DecodeError::Length(bytes.len()))?;
        Ok(Self(data))
    }

    pub(crate) fn set(&mut self, offset: usize, value: u8) {
        self.0[offset] = value;
    }

    pub fn as_bytes(&self) -> &[u8; PACKET_SIZE] {
        &self.0
    }
}

impl Deref for Packet {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<I: SliceIndex<[u8]>> Index<I> for Packet {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Packet> for [u8; PACKET_SIZE] {
    fn from(packet: Packet) -> Self {
        packet.0
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Packet({:02x?})", self.0)
    }
}

/// Hex dump, sixteen bytes to a row.
impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.0.chunks(16).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{:04x}  ", row * 16)?;
            let bytes: Vec<String> = chunk.iter().map(|byte| format!("{byte:02x}")).collect();
            write!(f, "{}", bytes.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_packet_is_zeroed() {
        let packet = Packet::new();
        assert_eq!(packet.len(), PACKET_SIZE);
        assert!(packet.iter().all(|&b| b == 0));
    }

    #[test]
    fn from_bytes_requires_exact_length() {
        assert_eq!(Packet::from_bytes(&[0; 63]), Err(DecodeError::Length(63)));
        assert_eq!(Packet::from_bytes(&[0; 65]), Err(DecodeError::Length(65)));

        let mut raw = [0u8; PACKET_SIZE];
        raw[offsets::GAIN] = 0x42;
        let packet = Packet::from_bytes(&raw).unwrap();
        assert_eq!(packet[offsets::GAIN], 0x42);
        assert_eq!(<[u8; PACKET_SIZE]>::from(packet), raw);
    }

    #[test]
    fn offsets_are_disjoint_and_in_range() {
        let mut sites = vec![
            offsets::DSP,
            offsets::SAVE_SLOT,
            offsets::AMPLIFIER,
            offsets::FLAG_A,
            offsets::FLAG_B,
            offsets::AMP_FLAG,
            offsets::GAIN,
            offsets::VOLUME,
            offsets::GAIN2,
            offsets::MASTER_VOL,
            offsets::TREBLE,
            offsets::MIDDLE,
            offsets::BASS,
            offsets::PRESENCE,
            offsets::DEPTH,
            offsets::BIAS,
            offsets::NOISE_GATE,
            offsets::THRESHOLD,
            offsets::CABINET,
            offsets::SAG,
            offsets::BRIGHTNESS,
            offsets::AMP_AUX_V2,
        ];
        sites.extend(offsets::AMP_AUX_V0);
        sites.extend(offsets::AMP_AUX_V1);

        let count = sites.len();
        sites.sort_unstable();
        sites.dedup();
        assert_eq!(sites.len(), count);
        assert!(sites.iter().all(|&site| site < PACKET_SIZE));
    }

    #[test]
    fn display_dumps_rows() {
        let mut packet = Packet::new();
        packet.set(0, 0x1c);
        packet.set(17, 0xff);

        let dump = packet.to_string();
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("0000  1c 00"));
        assert!(rows[1].starts_with("0010  00 ff"));
    }
}
