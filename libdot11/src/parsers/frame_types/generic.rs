use nom::number::complete::le_u16;
use nom::sequence::tuple;

use crate::error::Error;
use crate::frame::components::FrameControl;
use crate::frame::{Frame, GenericFrame};
use crate::parsers::parse_mac;

/// Parse a frame of a known family but unhandled subtype.
///
/// Only the common MAC header (duration and first address) is decoded;
/// everything after it is kept as an opaque body.
pub fn parse_generic(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (remaining, (duration_id, address_1)) = tuple((le_u16, parse_mac))(input)?;

    Ok(Frame::Generic(GenericFrame {
        frame_control,
        duration_id,
        address_1,
        body: remaining.to_vec(),
    }))
}
