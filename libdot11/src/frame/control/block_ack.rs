use crate::frame::components::{FrameControl, MacAddress, SequenceControl};
use crate::frame_types::FrameSubType;
use crate::Addresses;

/// The BAR control field of BlockAck frames: 12 reserved bits, then the
/// traffic identifier in the high 4 bits of the little-endian word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BarControl {
    /// The 4-bit traffic identifier this (request for) acknowledgment refers to.
    pub tid: u8,
}

impl BarControl {
    pub fn encode(&self) -> [u8; 2] {
        (((self.tid & 0x0F) as u16) << 12).to_le_bytes()
    }

    pub fn from_bits(word: u16) -> Self {
        BarControl {
            tid: (word >> 12) as u8,
        }
    }
}

/// Asks the receiver to acknowledge the burst of frames sent since the
/// given starting sequence number, within one BlockAck session.
///
/// The answer is a [BlockAck] frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockAckRequest {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub destination: MacAddress,
    pub source: MacAddress,
    pub bar_control: BarControl,
    /// Sequence control of the first frame the acknowledgment should cover.
    pub start_sequence: SequenceControl,
}

impl BlockAckRequest {
    pub fn new(destination: MacAddress, source: MacAddress) -> Self {
        BlockAckRequest {
            frame_control: FrameControl::new(FrameSubType::BlockAckRequest),
            duration_id: 0,
            destination,
            source,
            bar_control: BarControl::default(),
            start_sequence: SequenceControl::default(),
        }
    }

    pub fn header_size(&self) -> usize {
        20
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode_as(FrameSubType::BlockAckRequest));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());
        bytes.extend(self.source.encode());
        bytes.extend(self.bar_control.encode());
        bytes.extend(self.start_sequence.encode());

        bytes
    }
}

impl Addresses for BlockAckRequest {
    fn src(&self) -> Option<&MacAddress> {
        Some(&self.source)
    }

    fn dest(&self) -> &MacAddress {
        &self.destination
    }

    fn bssid(&self) -> Option<&MacAddress> {
        None
    }
}

/// Acknowledges a burst of frames at once within a BlockAck session.
///
/// Each bit of the 128-bit bitmap acknowledges one frame, counted from the
/// starting sequence number.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockAck {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub destination: MacAddress,
    pub source: MacAddress,
    pub bar_control: BarControl,
    /// Sequence control of the first frame the bitmap covers.
    pub start_sequence: SequenceControl,
    pub bitmap: [u8; 16],
}

impl BlockAck {
    pub fn new(destination: MacAddress, source: MacAddress) -> Self {
        BlockAck {
            frame_control: FrameControl::new(FrameSubType::BlockAck),
            duration_id: 0,
            destination,
            source,
            bar_control: BarControl::default(),
            start_sequence: SequenceControl::default(),
            bitmap: [0; 16],
        }
    }

    pub fn header_size(&self) -> usize {
        36
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode_as(FrameSubType::BlockAck));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());
        bytes.extend(self.source.encode());
        bytes.extend(self.bar_control.encode());
        bytes.extend(self.start_sequence.encode());
        bytes.extend(self.bitmap);

        bytes
    }
}

impl Addresses for BlockAck {
    fn src(&self) -> Option<&MacAddress> {
        Some(&self.source)
    }

    fn dest(&self) -> &MacAddress {
        &self.destination
    }

    fn bssid(&self) -> Option<&MacAddress> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_control_encoding() {
        let bar_control = BarControl { tid: 5 };
        assert_eq!(bar_control.encode(), [0x00, 0x50]);
        assert_eq!(BarControl::from_bits(0x5000), bar_control);
    }

    #[test]
    fn test_start_sequence_encoding() {
        let start_sequence = SequenceControl {
            fragment_number: 0,
            sequence_number: 0x123,
        };
        assert_eq!(start_sequence.encode(), [0x30, 0x12]);
    }
}
