use crate::frame::components::{FrameControl, MacAddress};
use crate::frame_types::FrameSubType;
use crate::Addresses;

/// It indicates to the Station, that a node wants to send some data.
///
/// The usual flow is `RTS -> CTS -> Data -> ACK`.
///
/// This protocol was introduced to reduce frame collisions introduced by the
/// [hidden node problem](https://en.wikipedia.org/wiki/Hidden_node_problem).
#[derive(Clone, Debug, PartialEq)]
pub struct Rts {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub destination: MacAddress,
    pub source: MacAddress,
}

impl Rts {
    pub fn new(destination: MacAddress, source: MacAddress) -> Self {
        Rts {
            frame_control: FrameControl::new(FrameSubType::Rts),
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

        bytes.extend(self.frame_control.encode_as(FrameSubType::Rts));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());
        bytes.extend(self.source.encode());

        bytes
    }
}

impl Addresses for Rts {
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

/// Send by a station to indicate that the requesting node is allowed to send.
///
/// Part of the `RTS -> CTS -> Data -> ACK` protocol.
///
/// Carries the receiver address only, no transmitter.
#[derive(Clone, Debug, PartialEq)]
pub struct Cts {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub destination: MacAddress,
}

impl Cts {
    pub fn new(destination: MacAddress) -> Self {
        Cts {
            frame_control: FrameControl::new(FrameSubType::Cts),
            duration_id: 0,
            destination,
        }
    }

    pub fn header_size(&self) -> usize {
        10
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode_as(FrameSubType::Cts));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());

        bytes
    }
}

impl Addresses for Cts {
    fn src(&self) -> Option<&MacAddress> {
        None
    }

    fn dest(&self) -> &MacAddress {
        &self.destination
    }

    fn bssid(&self) -> Option<&MacAddress> {
        None
    }
}

/// Send by the receiving station to indicate that the data has been transmitted.
///
/// Part of the `RTS -> CTS -> Data -> ACK` protocol.
///
/// Carries the receiver address only, no transmitter.
#[derive(Clone, Debug, PartialEq)]
pub struct Ack {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub destination: MacAddress,
}

impl Ack {
    pub fn new(destination: MacAddress) -> Self {
        Ack {
            frame_control: FrameControl::new(FrameSubType::Ack),
            duration_id: 0,
            destination,
        }
    }

    pub fn header_size(&self) -> usize {
        10
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode_as(FrameSubType::Ack));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.destination.encode());

        bytes
    }
}

impl Addresses for Ack {
    fn src(&self) -> Option<&MacAddress> {
        None
    }

    fn dest(&self) -> &MacAddress {
        &self.destination
    }

    fn bssid(&self) -> Option<&MacAddress> {
        None
    }
}
