use libdot11_macros::AddressHeader;

use super::DataFrame;
use crate::frame::components::*;
use crate::frame_types::FrameSubType;

/// A data frame with QoS extensions: a 2-byte QoS control field follows
/// the sequence control. Everything after that is the opaque child payload.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct QosData {
    pub header: DataHeader,
    pub qos_control: u16,
    pub payload: Vec<u8>,
}

impl QosData {
    pub fn new(
        destination: MacAddress,
        source: MacAddress,
        bssid: MacAddress,
        payload: Vec<u8>,
    ) -> Self {
        QosData {
            header: DataHeader::new(FrameSubType::QosData, destination, source, bssid),
            qos_control: 0,
            payload,
        }
    }

    /// Length of the frame's own bytes, without the child payload.
    pub fn header_size(&self) -> usize {
        self.header.size() + 2
    }

    /// Total serialized length including the child payload.
    pub fn size(&self) -> usize {
        self.header_size() + self.payload.len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());

        bytes.extend(self.header.encode(FrameSubType::QosData));
        bytes.extend(self.qos_control.to_le_bytes());
        bytes.extend_from_slice(&self.payload);

        bytes
    }

    /// The traffic identifier from the QoS control field.
    pub fn tid(&self) -> u8 {
        (self.qos_control & 0x0F) as u8
    }
}

impl DataFrame for QosData {
    fn header(&self) -> &DataHeader {
        &self.header
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }
}
