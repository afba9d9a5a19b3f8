use nom::combinator::opt;
use nom::number::complete::le_u16;
use nom::sequence::tuple;

use super::{parse_mac, parse_sequence_control};
use crate::error::Error;
use crate::frame::components::{DataHeader, FrameControl, ManagementHeader};

/// Parse and return the [ManagementHeader] from a given payload.
pub fn parse_management_header(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<(&[u8], ManagementHeader), Error> {
    let (remaining, (duration_id, address_1, address_2, address_3, sequence_control)) = tuple((
        le_u16,
        parse_mac,
        parse_mac,
        parse_mac,
        parse_sequence_control,
    ))(input)?;

    Ok((
        remaining,
        ManagementHeader {
            frame_control,
            duration_id,
            address_1,
            address_2,
            address_3,
            sequence_control,
        },
    ))
}

/// Parse and return the [DataHeader] from a given payload.
pub fn parse_data_header(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<(&[u8], DataHeader), Error> {
    let (mut remaining, (duration_id, address_1, address_2, address_3, sequence_control)) =
        tuple((
            le_u16,
            parse_mac,
            parse_mac,
            parse_mac,
            parse_sequence_control,
        ))(input)?;

    // The forth address only exists if both `from_ds` and `to_ds` is set.
    let mut address_4 = None;
    if frame_control.to_ds() && frame_control.from_ds() {
        (remaining, address_4) = opt(parse_mac)(remaining)?;
    };

    Ok((
        remaining,
        DataHeader {
            frame_control,
            duration_id,
            address_1,
            address_2,
            address_3,
            sequence_control,
            address_4,
        },
    ))
}
