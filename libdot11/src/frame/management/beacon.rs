use libdot11_macros::AddressHeader;

use super::ManagementFrame;
use crate::frame::components::*;
use crate::frame_types::FrameSubType;

/// The frame an access point broadcasts to announce its network.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct Beacon {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: CapabilityInformation,
    pub options: TaggedOptions,
}

impl Beacon {
    /// A fresh beacon with the usual defaults: interval of 100 time units,
    /// timestamp zero (radios overwrite it on transmission anyway).
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        Beacon {
            header: ManagementHeader::new(FrameSubType::Beacon, destination, source, bssid),
            timestamp: 0,
            beacon_interval: 100,
            capability_info: CapabilityInformation::ap(),
            options: TaggedOptions::new(),
        }
    }

    /// Total length of the serialized frame in bytes.
    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 12 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::Beacon));
        bytes.extend(self.timestamp.to_le_bytes());
        bytes.extend(self.beacon_interval.to_le_bytes());
        bytes.extend(self.capability_info.encode());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for Beacon {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}
