use libdot11_macros::AddressHeader;

use super::DataFrame;
use crate::frame::components::*;
use crate::frame_types::FrameSubType;

/// A plain data frame. The bytes after the MAC header are an opaque child
/// payload (LLC and up), owned by the frame and decoded elsewhere.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct Data {
    pub header: DataHeader,
    pub payload: Vec<u8>,
}

impl Data {
    pub fn new(
        destination: MacAddress,
        source: MacAddress,
        bssid: MacAddress,
        payload: Vec<u8>,
    ) -> Self {
        Data {
            header: DataHeader::new(FrameSubType::Data, destination, source, bssid),
            payload,
        }
    }

    /// Length of the frame's own bytes, without the child payload.
    pub fn header_size(&self) -> usize {
        self.header.size()
    }

    /// Total serialized length including the child payload.
    pub fn size(&self) -> usize {
        self.header_size() + self.payload.len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());

        bytes.extend(self.header.encode(FrameSubType::Data));
        bytes.extend_from_slice(&self.payload);

        bytes
    }
}

impl DataFrame for Data {
    fn header(&self) -> &DataHeader {
        &self.header
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }
}
