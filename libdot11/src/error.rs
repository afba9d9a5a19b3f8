use nom::Needed;

use crate::frame::components::FrameControl;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The raw bytes ended before the frame (or one of its elements) was
    /// complete. Contains a short description of what was being read.
    #[error("The frame is truncated: {}", .0)]
    Truncated(String),

    /// An information element declared a length that doesn't match its
    /// actual payload.
    #[error("An information element has an inconsistent length: {}", .0)]
    InvalidLength(String),

    /// Tagged option values are length-prefixed with a single byte, so
    /// anything above 255 bytes cannot be represented on the wire.
    #[error("Tagged option values are limited to 255 bytes, got {}", .0)]
    OptionTooLong(usize),

    /// The frame type/subtype combination is reserved or unknown.
    /// The [FrameControl] header is parsed in all scenarios and can be used
    /// for debugging. The remaining data is passed as second parameter.
    #[error("Unknown frame subtype: {:?} ({:?})", .0.frame_subtype, .0.frame_type)]
    UnknownSubtype(FrameControl, Vec<u8>),

    /// The RSN information element payload is malformed, for instance a
    /// suite count that runs past the end of the element.
    #[error("Malformed RSN information element: {}", .0)]
    InvalidRsn(String),

    /// Interface name lookup failed.
    #[error("No interface with name {}", .0)]
    NoSuchInterface(String),

    /// The external packet sender reported a failure.
    #[error("Failed to send frame: {}", .0)]
    SendFailed(String),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    /// Manually specify the conversion from a [nom::error::Error] to our own error.
    /// We need this conversion, since we work with slices.
    /// If nom's error is propagated through the program, we get lifetime issues as we can't hold
    /// ownership of that slice and thereby require a 'static.
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => match needed {
                Needed::Size(size) => Error::Truncated(format!("at least {size} bytes are missing")),
                Needed::Unknown => Error::Truncated(String::new()),
            },
            nom::Err::Failure(error) | nom::Err::Error(error) => Error::Truncated(format!(
                "parser ran out of data with {} bytes left, nom::ErrorKind is {:?}",
                error.input.len(),
                error.code
            )),
        }
    }
}
