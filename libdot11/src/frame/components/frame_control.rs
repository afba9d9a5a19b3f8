use crate::frame_types::*;

#[inline]
/// Mini helper to check, whether a bit is set or not.
fn flag_is_set(data: u8, bit: u8) -> bool {
    let mask = 1 << bit;
    (data & mask) > 0
}

#[inline]
fn set_flag(data: &mut u8, bit: u8, value: bool) {
    let mask = 1 << bit;
    if value {
        *data |= mask;
    } else {
        *data &= !mask;
    }
}

/// The very first two bytes of every frame contain the FrameControl header.
///
/// First byte:
///
/// - **bit_0-1**: Protocol version.
///     Until now, this has always been 0 and is expected to be 0.
/// - **bit_2-3**: [FrameType]
/// - **bit_4-7**: [FrameSubType]
///
/// Second byte (Flags):
/// - **bit_0** `to_ds`: Set if the frame is headed for the distribution system.
/// - **bit_1** `from_ds`: Set if the frame is coming from the distribution system.
/// - **bit_2** `more_frag`: Set if this frame is a fragment of a bigger frame and there are more fragments to follow.
/// - **bit_3** `retry`: Set if this frame is a retransmission, maybe through the loss of an ACK.
/// - **bit_4** `power_mgmt`: Indicates what power mode (`save` or `active`) the station will be in, once the frame has been sent.
/// - **bit_5** `more_data`: Set by the AP to indicate that more frames are destined to a particular station that may be in power save mode.
/// - **bit_6** `wep`: Set if WEP is being used to encrypt the body of the frame.
/// - **bit_7** `order`: Set if the frame is being sent according to the _Strictly Ordered Class_.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameControl {
    pub protocol_version: u8,
    pub frame_type: FrameType,
    pub frame_subtype: FrameSubType,
    pub flags: u8,
}

impl FrameControl {
    /// A fresh frame control word for the given subtype: protocol version 0,
    /// no flags set.
    pub fn new(frame_subtype: FrameSubType) -> Self {
        FrameControl {
            protocol_version: 0,
            frame_type: frame_subtype.frame_type(),
            frame_subtype,
            flags: 0,
        }
    }

    pub fn to_ds(&self) -> bool {
        flag_is_set(self.flags, 0)
    }

    pub fn from_ds(&self) -> bool {
        flag_is_set(self.flags, 1)
    }

    pub fn more_frag(&self) -> bool {
        flag_is_set(self.flags, 2)
    }

    pub fn retry(&self) -> bool {
        flag_is_set(self.flags, 3)
    }

    pub fn pwr_mgmt(&self) -> bool {
        flag_is_set(self.flags, 4)
    }

    pub fn more_data(&self) -> bool {
        flag_is_set(self.flags, 5)
    }

    pub fn wep(&self) -> bool {
        flag_is_set(self.flags, 6)
    }

    pub fn order(&self) -> bool {
        flag_is_set(self.flags, 7)
    }

    pub fn set_to_ds(&mut self, value: bool) {
        set_flag(&mut self.flags, 0, value);
    }

    pub fn set_from_ds(&mut self, value: bool) {
        set_flag(&mut self.flags, 1, value);
    }

    pub fn set_retry(&mut self, value: bool) {
        set_flag(&mut self.flags, 3, value);
    }

    pub fn set_wep(&mut self, value: bool) {
        set_flag(&mut self.flags, 6, value);
    }

    pub fn encode(&self) -> [u8; 2] {
        let protocol_version_bits = self.protocol_version & 0b11; // 2 bits
        let frame_type_bits = (self.frame_type as u8 & 0b11) << 2; // 2 bits
        let frame_subtype_bits = (self.frame_subtype.to_bytes() & 0b1111) << 4; // 4 bits

        let first_byte = frame_subtype_bits | frame_type_bits | protocol_version_bits;
        let second_byte = self.flags;

        [first_byte, second_byte]
    }

    /// Encode the word with the type/subtype fields forced to the given
    /// subtype. Frame serializers use this to stamp their canonical
    /// subtype, no matter what the struct currently holds.
    pub fn encode_as(&self, subtype: FrameSubType) -> [u8; 2] {
        let forced = FrameControl {
            frame_type: subtype.frame_type(),
            frame_subtype: subtype,
            ..self.clone()
        };

        forced.encode()
    }
}
