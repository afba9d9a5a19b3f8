use nom::number::complete::{le_u16, le_u64};
use nom::sequence::tuple;

use crate::error::Error;
use crate::frame::components::{CapabilityInformation, FrameControl};
use crate::frame::*;
use crate::parsers::{parse_mac, parse_management_header, parse_tagged_options};

/// Parse a [Beacon] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Timestamp
/// - Beacon interval
/// - Capability info
/// - Tagged options
pub fn parse_beacon(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, (timestamp, beacon_interval, capability_info)) =
        tuple((le_u64, le_u16, le_u16))(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::Beacon(Beacon {
        header,
        timestamp,
        beacon_interval,
        capability_info: CapabilityInformation::from_bits(capability_info),
        options,
    }))
}

/// Parse a [ProbeRequest] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Tagged options
pub fn parse_probe_request(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::ProbeRequest(ProbeRequest { header, options }))
}

/// Parse a [ProbeResponse] frame.
///
/// The general structure is the same as a beacon's.
pub fn parse_probe_response(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, (timestamp, beacon_interval, capability_info)) =
        tuple((le_u64, le_u16, le_u16))(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::ProbeResponse(ProbeResponse {
        header,
        timestamp,
        beacon_interval,
        capability_info: CapabilityInformation::from_bits(capability_info),
        options,
    }))
}

/// Parse an [AssociationRequest] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Capability info
/// - Listen interval
/// - Tagged options
pub fn parse_association_request(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, (capability_info, listen_interval)) = tuple((le_u16, le_u16))(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::AssociationRequest(AssociationRequest {
        header,
        capability_info: CapabilityInformation::from_bits(capability_info),
        listen_interval,
        options,
    }))
}

/// Parse an [AssociationResponse] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Capability info
/// - Status code
/// - Association id
/// - Tagged options
pub fn parse_association_response(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, (capability_info, status_code, association_id)) =
        tuple((le_u16, le_u16, le_u16))(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::AssociationResponse(AssociationResponse {
        header,
        capability_info: CapabilityInformation::from_bits(capability_info),
        status_code,
        association_id,
        options,
    }))
}

/// Parse a [ReassociationRequest] frame.
///
/// Same as an association request, plus the current AP's address.
pub fn parse_reassociation_request(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, (capability_info, listen_interval, current_ap_address)) =
        tuple((le_u16, le_u16, parse_mac))(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::ReassociationRequest(ReassociationRequest {
        header,
        capability_info: CapabilityInformation::from_bits(capability_info),
        listen_interval,
        current_ap_address,
        options,
    }))
}

/// Parse a [ReassociationResponse] frame.
///
/// Same body as an association response.
pub fn parse_reassociation_response(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, (capability_info, status_code, association_id)) =
        tuple((le_u16, le_u16, le_u16))(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::ReassociationResponse(ReassociationResponse {
        header,
        capability_info: CapabilityInformation::from_bits(capability_info),
        status_code,
        association_id,
        options,
    }))
}

/// Parse an [Authentication] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Authentication Algorithm Number
/// - Authentication Transaction Sequence Number
/// - Status Code
/// - Tagged options (challenge text, if any)
pub fn parse_authentication_frame(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, (auth_algorithm, auth_seq, status_code)) = tuple((le_u16, le_u16, le_u16))(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::Authentication(Authentication {
        header,
        auth_algorithm,
        auth_seq,
        status_code,
        options,
    }))
}

/// Parse a [Deauthentication] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Reason Code
pub fn parse_deauthentication_frame(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, reason_code) = le_u16(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::Deauthentication(Deauthentication {
        header,
        reason_code,
        options,
    }))
}

/// Parse a [Disassociation] frame.
///
/// Same body as a deauthentication.
pub fn parse_disassociation_frame(
    frame_control: FrameControl,
    input: &[u8],
) -> Result<Frame, Error> {
    let (input, header) = parse_management_header(frame_control, input)?;
    let (input, reason_code) = le_u16(input)?;
    let options = parse_tagged_options(input)?;

    Ok(Frame::Disassociation(Disassociation {
        header,
        reason_code,
        options,
    }))
}
