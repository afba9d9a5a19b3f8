use crate::frame::components::{FrameControl, MacAddress};
use crate::frame_types::FrameSubType;
use crate::Addresses;

/// Sent by a dozing station to ask the AP for a buffered frame.
/// The duration/id field of this frame carries the association id.
#[derive(Clone, Debug, PartialEq)]
pub struct PsPoll {
    pub frame_control: FrameControl,
    /// For PS-Poll frames this field holds the association id, not a duration.
    pub duration_id: u16,
    pub destination: MacAddress,
    pub source: MacAddress,
}

impl PsPoll {
    pub fn new(destination: MacAddress, source: MacAddress) -> Self {
        PsPoll {
            frame_control: FrameControl::new(FrameSubType::PsPoll),
            duration_id: 0,
            destination,
            source,
        }
    }

    pub fn header_size(&self) -> usize {
        16
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode_as(FrameSubType::PsPoll));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());
        bytes.extend(self.source.encode());

        bytes
    }
}

impl Addresses for PsPoll {
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

/// Announces the end of a contention-free period.
#[derive(Clone, Debug, PartialEq)]
pub struct CfEnd {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub destination: MacAddress,
    pub source: MacAddress,
}

impl CfEnd {
    pub fn new(destination: MacAddress, source: MacAddress) -> Self {
        CfEnd {
            frame_control: FrameControl::new(FrameSubType::CfEnd),
            duration_id: 0,
            destination,
            source,
        }
    }

    pub fn header_size(&self) -> usize {
        16
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode_as(FrameSubType::CfEnd));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());
        bytes.extend(self.source.encode());

        bytes
    }
}

impl Addresses for CfEnd {
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

/// Ends the contention-free period while acknowledging the last frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CfEndAck {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub destination: MacAddress,
    pub source: MacAddress,
}

impl CfEndAck {
    pub fn new(destination: MacAddress, source: MacAddress) -> Self {
        CfEndAck {
            frame_control: FrameControl::new(FrameSubType::CfEndCfAck),
            duration_id: 0,
            destination,
            source,
        }
    }

    pub fn header_size(&self) -> usize {
        16
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode_as(FrameSubType::CfEndCfAck));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());
        bytes.extend(self.source.encode());

        bytes
    }
}

impl Addresses for CfEndAck {
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
