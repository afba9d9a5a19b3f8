/// Libdot11's own [Error](error::Error) implementation
pub mod error;
/// The [Frame](frame::Frame) enum and all frame structs.
pub mod frame;
/// Enums representing frame types, frame subtypes and PDU tags.
mod frame_types;
/// The [PacketSender](injection::PacketSender) trait and interface lookup.
pub mod injection;
/// [nom] parsers for internal usage.
mod parsers;
/// All traits used or provided by this library.
mod traits;

use crate::error::Error;
use crate::parsers::*;

// Re-exports for user convenience
pub use crate::frame::Frame;
pub use crate::frame_types::*;
pub use crate::injection::{interface_index, PacketSender};
pub use crate::traits::*;

/// Parse IEEE 802.11 frames from raw bytes.
///
/// This function doesn't do FCS checks. These need to be done separately.
///
/// Subtypes this library has no struct for come back as
/// [Frame::Generic](frame::GenericFrame) of the respective frame family
/// with an opaque body.
pub fn parse_frame(input: &[u8]) -> Result<Frame, Error> {
    let (input, frame_control) = parse_frame_control(input)?;

    // Check which kind of frame sub-type we got
    match frame_control.frame_subtype {
        // Management
        FrameSubType::Beacon => parse_beacon(frame_control, input),
        FrameSubType::ProbeRequest => parse_probe_request(frame_control, input),
        FrameSubType::ProbeResponse => parse_probe_response(frame_control, input),
        FrameSubType::AssociationRequest => parse_association_request(frame_control, input),
        FrameSubType::AssociationResponse => parse_association_response(frame_control, input),
        FrameSubType::ReassociationRequest => parse_reassociation_request(frame_control, input),
        FrameSubType::ReassociationResponse => parse_reassociation_response(frame_control, input),
        FrameSubType::Authentication => parse_authentication_frame(frame_control, input),
        FrameSubType::Deauthentication => parse_deauthentication_frame(frame_control, input),
        FrameSubType::Disassociation => parse_disassociation_frame(frame_control, input),

        // Control
        FrameSubType::Rts => parse_rts(frame_control, input),
        FrameSubType::Cts => parse_cts(frame_control, input),
        FrameSubType::Ack => parse_ack(frame_control, input),
        FrameSubType::PsPoll => parse_ps_poll(frame_control, input),
        FrameSubType::CfEnd => parse_cf_end(frame_control, input),
        FrameSubType::CfEndCfAck => parse_cf_end_ack(frame_control, input),
        FrameSubType::BlockAckRequest => parse_block_ack_request(frame_control, input),
        FrameSubType::BlockAck => parse_block_ack(frame_control, input),

        // Data
        FrameSubType::Data => parse_data(frame_control, input),
        FrameSubType::QosData => parse_qos_data(frame_control, input),

        // Everything else keeps its body opaque.
        _ => match frame_control.frame_type {
            FrameType::Unknown => Err(Error::UnknownSubtype(frame_control, input.to_vec())),
            _ => parse_generic(frame_control, input),
        },
    }
}
