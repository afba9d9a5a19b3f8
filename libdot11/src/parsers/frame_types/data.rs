use nom::number::complete::le_u16;

use crate::error::Error;
use crate::frame::components::FrameControl;
use crate::frame::*;
use crate::parsers::parse_data_header;

/// Parse a [Data] frame.
/// Everything after the header is kept as the opaque child payload.
pub fn parse_data(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (remaining, header) = parse_data_header(frame_control, input)?;

    Ok(Frame::Data(Data {
        header,
        payload: remaining.to_vec(),
    }))
}

/// Parse a [QosData] frame.
/// The 2-byte QoS control field follows the header, then the child payload.
pub fn parse_qos_data(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (remaining, header) = parse_data_header(frame_control, input)?;
    let (remaining, qos_control) = le_u16(remaining)?;

    Ok(Frame::QosData(QosData {
        header,
        qos_control,
        payload: remaining.to_vec(),
    }))
}
