use nom::number::complete::le_u16;
use nom::IResult;

use crate::frame::components::SequenceControl;

/// Parse the 2-byte sequence control field.
///
/// The fragment number sits in the low 4 bits of the little-endian word,
/// the sequence number in the upper 12 bits.
pub fn parse_sequence_control(input: &[u8]) -> IResult<&[u8], SequenceControl> {
    let (remaining, word) = le_u16(input)?;

    Ok((
        remaining,
        SequenceControl {
            fragment_number: (word & 0x000F) as u8,
            sequence_number: word >> 4,
        },
    ))
}
