use enum_dispatch::enum_dispatch;

/// Contains structs representing recurring sets of structured data.
/// For instance, MAC-Addresses, default headers, etc.
pub mod components;

/// Builder structs for the commonly crafted frames.
mod builders;
/// Control frame structs
mod control;
/// Data frames structs
mod data;
/// Management frame structs
mod management;

pub use builders::*;
pub use control::*;
pub use data::*;
pub use management::*;

use crate::error::Error;
use crate::frame_types::{FrameType, PduType};
use crate::injection::PacketSender;
use components::{FrameControl, MacAddress};

#[enum_dispatch(Addresses)]
#[derive(Clone, Debug, PartialEq)]
/// This represents all currently supported payloads for frame subtypes.
/// Each variant is represented by its own struct.
///
/// The structs are organized by their frame type in submodules.
pub enum Frame {
    // Management frames
    Beacon(Beacon),
    ProbeRequest(ProbeRequest),
    ProbeResponse(ProbeResponse),
    AssociationRequest(AssociationRequest),
    AssociationResponse(AssociationResponse),
    ReassociationRequest(ReassociationRequest),
    ReassociationResponse(ReassociationResponse),
    Authentication(Authentication),
    Deauthentication(Deauthentication),
    Disassociation(Disassociation),

    // Control frames
    Rts(Rts),
    Cts(Cts),
    Ack(Ack),
    PsPoll(PsPoll),
    CfEnd(CfEnd),
    CfEndAck(CfEndAck),
    BlockAckRequest(BlockAckRequest),
    BlockAck(BlockAck),

    // Data frames
    Data(Data),
    QosData(QosData),

    // Subtypes without their own struct keep their bytes as an opaque body.
    Generic(GenericFrame),
}

impl Frame {
    /// The tag of this frame's class.
    pub fn pdu_type(&self) -> PduType {
        match self {
            Frame::Beacon(_) => PduType::Beacon,
            Frame::ProbeRequest(_) => PduType::ProbeRequest,
            Frame::ProbeResponse(_) => PduType::ProbeResponse,
            Frame::AssociationRequest(_) => PduType::AssociationRequest,
            Frame::AssociationResponse(_) => PduType::AssociationResponse,
            Frame::ReassociationRequest(_) => PduType::ReassociationRequest,
            Frame::ReassociationResponse(_) => PduType::ReassociationResponse,
            Frame::Authentication(_) => PduType::Authentication,
            Frame::Deauthentication(_) => PduType::Deauthentication,
            Frame::Disassociation(_) => PduType::Disassociation,
            Frame::Rts(_) => PduType::Rts,
            Frame::Cts(_) => PduType::Cts,
            Frame::Ack(_) => PduType::Ack,
            Frame::PsPoll(_) => PduType::PsPoll,
            Frame::CfEnd(_) => PduType::CfEnd,
            Frame::CfEndAck(_) => PduType::CfEndCfAck,
            Frame::BlockAckRequest(_) => PduType::BlockAckRequest,
            Frame::BlockAck(_) => PduType::BlockAck,
            Frame::Data(_) => PduType::Data,
            Frame::QosData(_) => PduType::QosData,
            Frame::Generic(frame) => frame.pdu_type(),
        }
    }

    /// Whether this frame is, or inherits from, the class with the given tag.
    pub fn matches(&self, tag: PduType) -> bool {
        self.pdu_type().matches(tag)
    }

    /// The frame's own length in bytes: headers, fixed parameters and
    /// options, but not the child payload.
    pub fn header_size(&self) -> usize {
        match self {
            Frame::Beacon(inner) => inner.header_size(),
            Frame::ProbeRequest(inner) => inner.header_size(),
            Frame::ProbeResponse(inner) => inner.header_size(),
            Frame::AssociationRequest(inner) => inner.header_size(),
            Frame::AssociationResponse(inner) => inner.header_size(),
            Frame::ReassociationRequest(inner) => inner.header_size(),
            Frame::ReassociationResponse(inner) => inner.header_size(),
            Frame::Authentication(inner) => inner.header_size(),
            Frame::Deauthentication(inner) => inner.header_size(),
            Frame::Disassociation(inner) => inner.header_size(),
            Frame::Rts(inner) => inner.header_size(),
            Frame::Cts(inner) => inner.header_size(),
            Frame::Ack(inner) => inner.header_size(),
            Frame::PsPoll(inner) => inner.header_size(),
            Frame::CfEnd(inner) => inner.header_size(),
            Frame::CfEndAck(inner) => inner.header_size(),
            Frame::BlockAckRequest(inner) => inner.header_size(),
            Frame::BlockAck(inner) => inner.header_size(),
            Frame::Data(inner) => inner.header_size(),
            Frame::QosData(inner) => inner.header_size(),
            Frame::Generic(inner) => inner.header_size(),
        }
    }

    /// The total serialized length in bytes, child payload included.
    pub fn size(&self) -> usize {
        match self {
            Frame::Data(inner) => inner.size(),
            Frame::QosData(inner) => inner.size(),
            _ => self.header_size(),
        }
    }

    /// Serialize the frame into one newly allocated, exactly sized buffer.
    ///
    /// The frame control word is written with the variant's canonical
    /// type/subtype; a child payload is appended after the frame's own bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Frame::Beacon(inner) => inner.encode(),
            Frame::ProbeRequest(inner) => inner.encode(),
            Frame::ProbeResponse(inner) => inner.encode(),
            Frame::AssociationRequest(inner) => inner.encode(),
            Frame::AssociationResponse(inner) => inner.encode(),
            Frame::ReassociationRequest(inner) => inner.encode(),
            Frame::ReassociationResponse(inner) => inner.encode(),
            Frame::Authentication(inner) => inner.encode(),
            Frame::Deauthentication(inner) => inner.encode(),
            Frame::Disassociation(inner) => inner.encode(),
            Frame::Rts(inner) => inner.encode(),
            Frame::Cts(inner) => inner.encode(),
            Frame::Ack(inner) => inner.encode(),
            Frame::PsPoll(inner) => inner.encode(),
            Frame::CfEnd(inner) => inner.encode(),
            Frame::CfEndAck(inner) => inner.encode(),
            Frame::BlockAckRequest(inner) => inner.encode(),
            Frame::BlockAck(inner) => inner.encode(),
            Frame::Data(inner) => inner.encode(),
            Frame::QosData(inner) => inner.encode(),
            Frame::Generic(inner) => inner.encode(),
        }
    }

    /// Serialize into a caller-provided buffer.
    /// Returns the number of bytes written, or [Error::Truncated] when the
    /// buffer is smaller than [Frame::size].
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, Error> {
        let bytes = self.encode();
        if buffer.len() < bytes.len() {
            return Err(Error::Truncated(format!(
                "buffer holds {} bytes, the frame needs {}",
                buffer.len(),
                bytes.len()
            )));
        }

        buffer[..bytes.len()].copy_from_slice(&bytes);
        Ok(bytes.len())
    }

    /// Serialize the frame and hand it to the given sender.
    /// The sender's result is returned verbatim.
    pub fn send(&self, sender: &mut dyn PacketSender, iface_index: u32) -> Result<(), Error> {
        sender.send(iface_index, &self.encode())
    }
}

/// A frame of a known family but without a struct of its own
/// (e.g. Action, ATIM, Null Data or reserved subtypes).
///
/// Keeps the common MAC header plus the undecoded remainder, so the frame
/// survives a parse/serialize round trip.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericFrame {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub address_1: MacAddress,
    pub body: Vec<u8>,
}

impl GenericFrame {
    /// The family tag of this frame.
    pub fn pdu_type(&self) -> PduType {
        match self.frame_control.frame_type {
            FrameType::Management => PduType::Management,
            FrameType::Control => PduType::Control,
            FrameType::Data => PduType::Data,
            FrameType::Unknown => PduType::Dot11,
        }
    }

    pub fn header_size(&self) -> usize {
        10 + self.body.len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header_size());

        bytes.extend(self.frame_control.encode());
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.address_1.encode());
        bytes.extend_from_slice(&self.body);

        bytes
    }
}

impl crate::Addresses for GenericFrame {
    fn src(&self) -> Option<&MacAddress> {
        None
    }

    fn dest(&self) -> &MacAddress {
        &self.address_1
    }

    fn bssid(&self) -> Option<&MacAddress> {
        None
    }
}
