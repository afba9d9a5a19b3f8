use libdot11_macros::AddressHeader;

use super::ManagementFrame;
use crate::frame::components::*;
use crate::frame_types::FrameSubType;

/// The authentication handshake frame. Open system authentication uses
/// algorithm 0 and a two-frame sequence; shared key authentication carries
/// its challenge text as a tagged option (tag 16).
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct Authentication {
    pub header: ManagementHeader,
    pub auth_algorithm: u16,
    pub auth_seq: u16,
    pub status_code: u16,
    pub options: TaggedOptions,
}

impl Authentication {
    /// A fresh open-system authentication frame, first in sequence.
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        Authentication {
            header: ManagementHeader::new(
                FrameSubType::Authentication,
                destination,
                source,
                bssid,
            ),
            auth_algorithm: 0,
            auth_seq: 1,
            status_code: 0,
            options: TaggedOptions::new(),
        }
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 6 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::Authentication));
        bytes.extend(self.auth_algorithm.to_le_bytes());
        bytes.extend(self.auth_seq.to_le_bytes());
        bytes.extend(self.status_code.to_le_bytes());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for Authentication {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}

/// Terminates an authenticated relationship, carrying the reason.
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct Deauthentication {
    pub header: ManagementHeader,
    pub reason_code: u16,
    pub options: TaggedOptions,
}

impl Deauthentication {
    pub fn new(
        destination: MacAddress,
        source: MacAddress,
        bssid: MacAddress,
        reason: ReasonCode,
    ) -> Self {
        Deauthentication {
            header: ManagementHeader::new(
                FrameSubType::Deauthentication,
                destination,
                source,
                bssid,
            ),
            reason_code: reason as u16,
            options: TaggedOptions::new(),
        }
    }

    pub fn reason(&self) -> ReasonCode {
        ReasonCode::from_code(self.reason_code)
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 2 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::Deauthentication));
        bytes.extend(self.reason_code.to_le_bytes());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for Deauthentication {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}

/// Terminates an association while keeping the authentication alive.
/// Same body as [Deauthentication].
#[derive(Clone, Debug, PartialEq, AddressHeader)]
pub struct Disassociation {
    pub header: ManagementHeader,
    pub reason_code: u16,
    pub options: TaggedOptions,
}

impl Disassociation {
    pub fn new(
        destination: MacAddress,
        source: MacAddress,
        bssid: MacAddress,
        reason: ReasonCode,
    ) -> Self {
        Disassociation {
            header: ManagementHeader::new(FrameSubType::Disassociation, destination, source, bssid),
            reason_code: reason as u16,
            options: TaggedOptions::new(),
        }
    }

    pub fn reason(&self) -> ReasonCode {
        ReasonCode::from_code(self.reason_code)
    }

    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE + 2 + self.options.serialized_size()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.header.encode(FrameSubType::Disassociation));
        bytes.extend(self.reason_code.to_le_bytes());
        bytes.extend(self.options.encode());

        bytes
    }
}

impl ManagementFrame for Disassociation {
    fn options(&self) -> &TaggedOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TaggedOptions {
        &mut self.options
    }
}

/// The reason codes carried by [Deauthentication] and [Disassociation]
/// frames, as assigned by IEEE 802.11-2007.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReasonCode {
    Unspecified = 1,
    PreviousAuthenticationNoLongerValid = 2,
    StationLeavingIbssOrEss = 3,
    Inactivity = 4,
    ApCantHandleAllStations = 5,
    Class2FrameFromNonAuthenticatedStation = 6,
    Class3FrameFromNonAssociatedStation = 7,
    StationLeavingBss = 8,
    StationNotAuthenticated = 9,
    PowerCapabilityNotValid = 10,
    SupportedChannelsNotValid = 11,
    InvalidInformationElement = 13,
    MicFailure = 14,
    FourWayHandshakeTimeout = 15,
    GroupKeyHandshakeTimeout = 16,
    HandshakeElementMismatch = 17,
    InvalidGroupCipher = 18,
    InvalidPairwiseCipher = 19,
    InvalidAkmp = 20,
    UnsupportedRsnVersion = 21,
    InvalidRsnCapabilities = 22,
    AuthenticationFailed = 23,
    CipherSuiteRejected = 24,
    UnspecifiedQosReason = 32,
    NotEnoughBandwidth = 33,
    PoorChannelConditions = 34,
    StationOutOfLimits = 35,
    RequestedByStationLeaving = 36,
    RequestedByStationRejectMechanism = 37,
    RequestedByStationRejectSetup = 38,
    RequestedByStationTimeout = 39,
    PeerStationCipherUnsupported = 45,
    Unknown = 0,
}

impl ReasonCode {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => ReasonCode::Unspecified,
            2 => ReasonCode::PreviousAuthenticationNoLongerValid,
            3 => ReasonCode::StationLeavingIbssOrEss,
            4 => ReasonCode::Inactivity,
            5 => ReasonCode::ApCantHandleAllStations,
            6 => ReasonCode::Class2FrameFromNonAuthenticatedStation,
            7 => ReasonCode::Class3FrameFromNonAssociatedStation,
            8 => ReasonCode::StationLeavingBss,
            9 => ReasonCode::StationNotAuthenticated,
            10 => ReasonCode::PowerCapabilityNotValid,
            11 => ReasonCode::SupportedChannelsNotValid,
            13 => ReasonCode::InvalidInformationElement,
            14 => ReasonCode::MicFailure,
            15 => ReasonCode::FourWayHandshakeTimeout,
            16 => ReasonCode::GroupKeyHandshakeTimeout,
            17 => ReasonCode::HandshakeElementMismatch,
            18 => ReasonCode::InvalidGroupCipher,
            19 => ReasonCode::InvalidPairwiseCipher,
            20 => ReasonCode::InvalidAkmp,
            21 => ReasonCode::UnsupportedRsnVersion,
            22 => ReasonCode::InvalidRsnCapabilities,
            23 => ReasonCode::AuthenticationFailed,
            24 => ReasonCode::CipherSuiteRejected,
            32 => ReasonCode::UnspecifiedQosReason,
            33 => ReasonCode::NotEnoughBandwidth,
            34 => ReasonCode::PoorChannelConditions,
            35 => ReasonCode::StationOutOfLimits,
            36 => ReasonCode::RequestedByStationLeaving,
            37 => ReasonCode::RequestedByStationRejectMechanism,
            38 => ReasonCode::RequestedByStationRejectSetup,
            39 => ReasonCode::RequestedByStationTimeout,
            45 => ReasonCode::PeerStationCipherUnsupported,
            _ => ReasonCode::Unknown,
        }
    }
}
