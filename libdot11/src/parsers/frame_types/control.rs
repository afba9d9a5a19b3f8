use nom::bytes::complete::take;
use nom::number::complete::le_u16;
use nom::sequence::tuple;

use crate::error::Error;
use crate::frame::components::FrameControl;
use crate::frame::*;
use crate::parsers::{clone_slice, parse_mac, parse_sequence_control};

/// Parse a [Rts] frame.
///
/// The general structure is:
/// - FrameControl
/// - Duration
/// - Destination
/// - Source
pub fn parse_rts(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination, source)) = tuple((le_u16, parse_mac, parse_mac))(input)?;

    Ok(Frame::Rts(Rts {
        frame_control,
        duration_id,
        destination,
        source,
    }))
}

/// Parse a [Cts] frame.
///
/// The general structure is:
/// - FrameControl
/// - Duration
/// - Destination
pub fn parse_cts(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination)) = tuple((le_u16, parse_mac))(input)?;

    Ok(Frame::Cts(Cts {
        frame_control,
        duration_id,
        destination,
    }))
}

/// Parse an [Ack] frame.
///
/// The general structure is:
/// - FrameControl
/// - Duration
/// - Destination
pub fn parse_ack(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination)) = tuple((le_u16, parse_mac))(input)?;

    Ok(Frame::Ack(Ack {
        frame_control,
        duration_id,
        destination,
    }))
}

/// Parse a [PsPoll] frame.
///
/// Same layout as an RTS; the duration field carries the association id.
pub fn parse_ps_poll(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination, source)) = tuple((le_u16, parse_mac, parse_mac))(input)?;

    Ok(Frame::PsPoll(PsPoll {
        frame_control,
        duration_id,
        destination,
        source,
    }))
}

/// Parse a [CfEnd] frame.
pub fn parse_cf_end(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination, source)) = tuple((le_u16, parse_mac, parse_mac))(input)?;

    Ok(Frame::CfEnd(CfEnd {
        frame_control,
        duration_id,
        destination,
        source,
    }))
}

/// Parse a [CfEndAck] frame.
pub fn parse_cf_end_ack(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination, source)) = tuple((le_u16, parse_mac, parse_mac))(input)?;

    Ok(Frame::CfEndAck(CfEndAck {
        frame_control,
        duration_id,
        destination,
        source,
    }))
}

/// Parse a [BlockAckRequest] frame.
///
/// The general structure is:
/// - FrameControl
/// - Duration
/// - Destination
/// - Source
/// - BAR control (reserved bits and the TID)
/// - Starting sequence control
pub fn parse_block_ack_request(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination, source, bar_control, start_sequence)) = tuple((
        le_u16,
        parse_mac,
        parse_mac,
        le_u16,
        parse_sequence_control,
    ))(input)?;

    Ok(Frame::BlockAckRequest(BlockAckRequest {
        frame_control,
        duration_id,
        destination,
        source,
        bar_control: BarControl::from_bits(bar_control),
        start_sequence,
    }))
}

/// Parse a [BlockAck] frame.
///
/// Same as a [BlockAckRequest], followed by the 128-bit acknowledgment bitmap.
pub fn parse_block_ack(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (_, (duration_id, destination, source, bar_control, start_sequence, bitmap)) =
        tuple((
            le_u16,
            parse_mac,
            parse_mac,
            le_u16,
            parse_sequence_control,
            take(16usize),
        ))(input)?;

    Ok(Frame::BlockAck(BlockAck {
        frame_control,
        duration_id,
        destination,
        source,
        bar_control: BarControl::from_bits(bar_control),
        start_sequence,
        bitmap: clone_slice::<16>(bitmap),
    }))
}
