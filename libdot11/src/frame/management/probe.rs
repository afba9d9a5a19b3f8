use libdot11_macros::AddressHeader;

use super::ManagementFrame;
use crate::frame::components::*;
use crate::frame_types::FrameSubType;

/// Sent by a station to actively scan for networks.
/// Carries no fixed parameters, only information elements.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct ProbeRequest {
    pub header: ManagementHeader,
    pub options: TaggedOptions,
}

impl ProbeRequest {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        ProbeRequest {
            header: ManagementHeader::new(FrameSubType::ProbeRequest, destination, source, bssid),
            options: TaggedOptions::new(),
        }
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::ProbeRequest));
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for ProbeRequest {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}

/// The answer to a [ProbeRequest]. Same fixed parameters as a beacon.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct ProbeResponse {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: CapabilityInformation,
    pub options: TaggedOptions,
}

impl ProbeResponse {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        ProbeResponse {
            header: ManagementHeader::new(FrameSubType::ProbeResponse, destination, source, bssid),
            timestamp: 0,
            beacon_interval: 100,
            capability_info: CapabilityInformation::ap(),
            options: TaggedOptions::new(),
        }
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 12 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::ProbeResponse));
        bytes.extend(self.timestamp.to_le_bytes());
        bytes.extend(self.beacon_interval.to_le_bytes());
        bytes.extend(self.capability_info.encode());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for ProbeResponse {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}
