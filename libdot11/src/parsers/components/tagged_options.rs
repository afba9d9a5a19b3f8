use nom::bytes::complete::take;
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;

use crate::error::Error;
use crate::frame::components::TaggedOptions;

/// Parse the tagged-option chain of a management frame body.
///
/// The general structure of the data looks like this:
///
/// 1 byte: Element id
/// 1 byte: Element length (up to 255 bytes)
/// $element_length bytes: Element data
///
/// The chain runs until the buffer is exhausted. A declared length that
/// exceeds the remaining buffer is an error; partial chains are never
/// silently dropped.
pub fn parse_tagged_options(mut input: &[u8]) -> Result<TaggedOptions, Error> {
    let mut options = TaggedOptions::new();

    let mut element_id;
    let mut length;
    let mut data;
    while !input.is_empty() {
        (input, (element_id, length)) = tuple((get_u8, get_u8))(input)?;
        (input, data) = take(length)(input)?;
        options.add(element_id, data)?;
    }

    Ok(options)
}
