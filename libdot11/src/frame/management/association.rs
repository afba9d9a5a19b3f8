use libdot11_macros::AddressHeader;

use super::ManagementFrame;
use crate::frame::components::*;
use crate::frame_types::FrameSubType;

/// Sent by a station that wants to join a BSS.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct AssociationRequest {
    pub header: ManagementHeader,
    pub capability_info: CapabilityInformation,
    pub listen_interval: u16,
    pub options: TaggedOptions,
}

impl AssociationRequest {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        AssociationRequest {
            header: ManagementHeader::new(
                FrameSubType::AssociationRequest,
                destination,
                source,
                bssid,
            ),
            capability_info: CapabilityInformation::default(),
            listen_interval: 0,
            options: TaggedOptions::new(),
        }
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 4 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::AssociationRequest));
        bytes.extend(self.capability_info.encode());
        bytes.extend(self.listen_interval.to_le_bytes());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for AssociationRequest {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}

/// The AP's answer to an [AssociationRequest], assigning the association id.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct AssociationResponse {
    pub header: ManagementHeader,
    pub capability_info: CapabilityInformation,
    pub status_code: u16,
    pub association_id: u16,
    pub options: TaggedOptions,
}

impl AssociationResponse {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        AssociationResponse {
            header: ManagementHeader::new(
                FrameSubType::AssociationResponse,
                destination,
                source,
                bssid,
            ),
            capability_info: CapabilityInformation::ap(),
            status_code: 0,
            association_id: 0,
            options: TaggedOptions::new(),
        }
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 6 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::AssociationResponse));
        bytes.extend(self.capability_info.encode());
        bytes.extend(self.status_code.to_le_bytes());
        bytes.extend(self.association_id.to_le_bytes());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for AssociationResponse {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}

/// Like an [AssociationRequest], but sent when roaming from another AP,
/// whose address is carried in the fixed parameters.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct ReassociationRequest {
    pub header: ManagementHeader,
    pub capability_info: CapabilityInformation,
    pub listen_interval: u16,
    pub current_ap_address: MacAddress,
    pub options: TaggedOptions,
}

impl ReassociationRequest {
    pub fn new(
        destination: MacAddress,
        source: MacAddress,
        bssid: MacAddress,
        current_ap_address: MacAddress,
    ) -> Self {
        ReassociationRequest {
            header: ManagementHeader::new(
                FrameSubType::ReassociationRequest,
                destination,
                source,
                bssid,
            ),
            capability_info: CapabilityInformation::default(),
            listen_interval: 0,
            current_ap_address,
            options: TaggedOptions::new(),
        }
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 10 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::ReassociationRequest));
        bytes.extend(self.capability_info.encode());
        bytes.extend(self.listen_interval.to_le_bytes());
        bytes.extend(self.current_ap_address.encode());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for ReassociationRequest {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}

/// The AP's answer to a [ReassociationRequest].
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct ReassociationResponse {
    pub header: ManagementHeader,
    pub capability_info: CapabilityInformation,
    pub status_code: u16,
    pub association_id: u16,
    pub options: TaggedOptions,
}

impl ReassociationResponse {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        ReassociationResponse {
            header: ManagementHeader::new(
                FrameSubType::ReassociationResponse,
                destination,
                source,
                bssid,
            ),
            capability_info: CapabilityInformation::ap(),
            status_code: 0,
            association_id: 0,
            options: TaggedOptions::new(),
        }
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 6 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::ReassociationResponse));
        bytes.extend(self.capability_info.encode());
        bytes.extend(self.status_code.to_le_bytes());
        bytes.extend(self.association_id.to_le_bytes());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for ReassociationResponse {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}
