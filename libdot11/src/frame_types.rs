use strum_macros::Display;

/// Enum with all frame types.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum FrameType {
    Management,
    Control,
    Data,
    Unknown,
}

/// Enum with all frame subtypes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum FrameSubType {
    // Management subtypes
    AssociationRequest,
    AssociationResponse,
    ReassociationRequest,
    ReassociationResponse,
    ProbeRequest,
    ProbeResponse,
    TimingAdvertisement,
    Beacon,
    Atim,
    Disassociation,
    Authentication,
    Deauthentication,
    Action,
    ActionNoAck,

    // Control subtypes
    Trigger,
    Tack,
    BeamformingReportPoll,
    NdpAnnouncement,
    ControlFrameExtension,
    ControlWrapper,
    BlockAckRequest,
    BlockAck,
    PsPoll,
    Rts,
    Cts,
    Ack,
    CfEnd,
    CfEndCfAck,

    // Data subtypes
    Data,
    DataCfAck,
    DataCfPoll,
    DataCfAckCfPoll,
    NullData,
    CfAck,
    CfPoll,
    CfAckCfPoll,
    QosData,
    QosDataCfAck,
    QosDataCfPoll,
    QosDataCfAckCfPoll,
    QosNull,
    QosCfPoll,
    QosCfAckCfPoll,

    // Special subtypes
    /// A reserved subtype. Carries the raw 4-bit code so the frame can be
    /// re-emitted unchanged.
    Reserved(u8),
    Unhandled,
}

impl FrameSubType {
    /// The [FrameType] this subtype belongs to.
    pub fn frame_type(&self) -> FrameType {
        match self {
            FrameSubType::AssociationRequest
            | FrameSubType::AssociationResponse
            | FrameSubType::ReassociationRequest
            | FrameSubType::ReassociationResponse
            | FrameSubType::ProbeRequest
            | FrameSubType::ProbeResponse
            | FrameSubType::TimingAdvertisement
            | FrameSubType::Beacon
            | FrameSubType::Atim
            | FrameSubType::Disassociation
            | FrameSubType::Authentication
            | FrameSubType::Deauthentication
            | FrameSubType::Action
            | FrameSubType::ActionNoAck => FrameType::Management,

            FrameSubType::Trigger
            | FrameSubType::Tack
            | FrameSubType::BeamformingReportPoll
            | FrameSubType::NdpAnnouncement
            | FrameSubType::ControlFrameExtension
            | FrameSubType::ControlWrapper
            | FrameSubType::BlockAckRequest
            | FrameSubType::BlockAck
            | FrameSubType::PsPoll
            | FrameSubType::Rts
            | FrameSubType::Cts
            | FrameSubType::Ack
            | FrameSubType::CfEnd
            | FrameSubType::CfEndCfAck => FrameType::Control,

            FrameSubType::Data
            | FrameSubType::DataCfAck
            | FrameSubType::DataCfPoll
            | FrameSubType::DataCfAckCfPoll
            | FrameSubType::NullData
            | FrameSubType::CfAck
            | FrameSubType::CfPoll
            | FrameSubType::CfAckCfPoll
            | FrameSubType::QosData
            | FrameSubType::QosDataCfAck
            | FrameSubType::QosDataCfPoll
            | FrameSubType::QosDataCfAckCfPoll
            | FrameSubType::QosNull
            | FrameSubType::QosCfPoll
            | FrameSubType::QosCfAckCfPoll => FrameType::Data,

            FrameSubType::Reserved(_) | FrameSubType::Unhandled => FrameType::Unknown,
        }
    }

    /// The 4-bit subtype code as it appears in the frame control word.
    pub fn to_bytes(&self) -> u8 {
        match self {
            // Management
            FrameSubType::AssociationRequest => 0,
            FrameSubType::AssociationResponse => 1,
            FrameSubType::ReassociationRequest => 2,
            FrameSubType::ReassociationResponse => 3,
            FrameSubType::ProbeRequest => 4,
            FrameSubType::ProbeResponse => 5,
            FrameSubType::TimingAdvertisement => 6,
            FrameSubType::Beacon => 8,
            FrameSubType::Atim => 9,
            FrameSubType::Disassociation => 10,
            FrameSubType::Authentication => 11,
            FrameSubType::Deauthentication => 12,
            FrameSubType::Action => 13,
            FrameSubType::ActionNoAck => 14,

            // Control
            FrameSubType::Trigger => 2,
            FrameSubType::Tack => 3,
            FrameSubType::BeamformingReportPoll => 4,
            FrameSubType::NdpAnnouncement => 5,
            FrameSubType::ControlFrameExtension => 6,
            FrameSubType::ControlWrapper => 7,
            FrameSubType::BlockAckRequest => 8,
            FrameSubType::BlockAck => 9,
            FrameSubType::PsPoll => 10,
            FrameSubType::Rts => 11,
            FrameSubType::Cts => 12,
            FrameSubType::Ack => 13,
            FrameSubType::CfEnd => 14,
            FrameSubType::CfEndCfAck => 15,

            // Data
            FrameSubType::Data => 0,
            FrameSubType::DataCfAck => 1,
            FrameSubType::DataCfPoll => 2,
            FrameSubType::DataCfAckCfPoll => 3,
            FrameSubType::NullData => 4,
            FrameSubType::CfAck => 5,
            FrameSubType::CfPoll => 6,
            FrameSubType::CfAckCfPoll => 7,
            FrameSubType::QosData => 8,
            FrameSubType::QosDataCfAck => 9,
            FrameSubType::QosDataCfPoll => 10,
            FrameSubType::QosDataCfAckCfPoll => 11,
            FrameSubType::QosNull => 12,
            FrameSubType::QosCfPoll => 14,
            FrameSubType::QosCfAckCfPoll => 15,

            FrameSubType::Reserved(code) => code & 0b1111,
            FrameSubType::Unhandled => 15,
        }
    }

    pub fn is_qos(&self) -> bool {
        matches!(
            self,
            FrameSubType::QosData
                | FrameSubType::QosDataCfAck
                | FrameSubType::QosDataCfPoll
                | FrameSubType::QosDataCfAckCfPoll
                | FrameSubType::QosNull
                | FrameSubType::QosCfPoll
                | FrameSubType::QosCfAckCfPoll,
        )
    }
}

/// The tag a frame reports about its own class.
///
/// The tags form a tree that mirrors the frame-class hierarchy:
/// every concrete frame tag has [PduType::Management], [PduType::Control]
/// or [PduType::Data] as parent, which in turn roll up to [PduType::Dot11].
/// [PduType::QosData] additionally specializes [PduType::Data].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum PduType {
    Dot11,
    Management,
    Beacon,
    ProbeRequest,
    ProbeResponse,
    AssociationRequest,
    AssociationResponse,
    ReassociationRequest,
    ReassociationResponse,
    Authentication,
    Deauthentication,
    Disassociation,
    Control,
    Rts,
    Cts,
    Ack,
    PsPoll,
    CfEnd,
    CfEndCfAck,
    BlockAckRequest,
    BlockAck,
    Data,
    QosData,
}

impl PduType {
    /// The direct ancestor of this tag in the class hierarchy.
    fn parent(&self) -> Option<PduType> {
        match self {
            PduType::Dot11 => None,

            PduType::Management | PduType::Control | PduType::Data => Some(PduType::Dot11),

            PduType::Beacon
            | PduType::ProbeRequest
            | PduType::ProbeResponse
            | PduType::AssociationRequest
            | PduType::AssociationResponse
            | PduType::ReassociationRequest
            | PduType::ReassociationResponse
            | PduType::Authentication
            | PduType::Deauthentication
            | PduType::Disassociation => Some(PduType::Management),

            PduType::Rts
            | PduType::Cts
            | PduType::Ack
            | PduType::PsPoll
            | PduType::CfEnd
            | PduType::CfEndCfAck
            | PduType::BlockAckRequest
            | PduType::BlockAck => Some(PduType::Control),

            PduType::QosData => Some(PduType::Data),
        }
    }

    /// Whether this tag is the given tag or inherits from it.
    pub fn matches(&self, tag: PduType) -> bool {
        let mut current = Some(*self);
        while let Some(pdu_type) = current {
            if pdu_type == tag {
                return true;
            }
            current = pdu_type.parent();
        }

        false
    }
}
