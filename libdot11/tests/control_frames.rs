use libdot11::frame::components::{MacAddress, SequenceControl};
use libdot11::frame::*;
use libdot11::parse_frame;

#[test]
fn test_rts() {
    let payload = [
        180, 0, // FrameControl
        158, 0, // Duration
        116, 66, 127, 77, 29, 45, // First Address
        20, 125, 218, 170, 84, 81, // Second Address
    ];

    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::Rts(_)));
    assert_eq!(frame.header_size(), 16);
    assert_eq!(frame.encode(), payload);
}

#[test]
fn test_cts() {
    let payload = [
        196, 0, // FrameControl
        246, 14, // Duration
        224, 62, 68, 8, 195, 239, // First Address
    ];

    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::Cts(_)));
    assert_eq!(frame.header_size(), 10);
    assert_eq!(frame.encode(), payload);
}

#[test]
fn test_ack() {
    let payload = [
        212, 0, // FrameControl
        0, 0, // Duration
        104, 217, 60, 214, 195, 239, // First Address
    ];

    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::Ack(_)));
    assert_eq!(frame.header_size(), 10);
    assert_eq!(frame.encode(), payload);
}

#[test]
fn test_ps_poll() {
    let payload = [
        164, 0, // FrameControl
        1, 192, // Association id
        192, 238, 251, 75, 207, 58, // First Address
        24, 29, 234, 198, 62, 190, // Second Address
    ];

    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::PsPoll(_)));
    assert_eq!(frame.encode(), payload);
}

#[test]
fn test_cf_end_and_cf_end_ack() {
    let payload = [
        228, 0, // FrameControl
        0, 0, // Duration
        255, 255, 255, 255, 255, 255, // First Address
        24, 29, 234, 198, 62, 190, // Second Address
    ];
    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::CfEnd(_)));
    assert_eq!(frame.encode(), payload);

    let payload = [
        244, 0, // FrameControl
        0, 0, // Duration
        255, 255, 255, 255, 255, 255, // First Address
        24, 29, 234, 198, 62, 190, // Second Address
    ];
    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::CfEndAck(_)));
    assert_eq!(frame.encode(), payload);
}

#[test]
fn test_block_ack_request() {
    let mut request = BlockAckRequest::new(
        MacAddress([192, 238, 251, 75, 207, 58]),
        MacAddress([24, 29, 234, 198, 62, 190]),
    );
    request.bar_control = BarControl { tid: 5 };
    request.start_sequence = SequenceControl {
        fragment_number: 0,
        sequence_number: 0x123,
    };

    let bytes = request.encode();
    assert_eq!(bytes[0], 0x84);
    assert_eq!(request.header_size(), 20);
    // TID 5 lands in the high nibble of the second BAR control byte,
    // the starting sequence keeps its fragment bits in the low nibble.
    assert_eq!(&bytes[16..20], &[0x00, 0x50, 0x30, 0x12]);

    let parsed = parse_frame(&bytes).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::BlockAckRequest(_)));
    assert_eq!(parsed, Frame::BlockAckRequest(request));
}

#[test]
fn test_block_ack() {
    let mut ack = BlockAck::new(
        MacAddress([192, 238, 251, 75, 207, 58]),
        MacAddress([248, 50, 228, 173, 71, 184]),
    );
    ack.bar_control = BarControl { tid: 5 };
    ack.start_sequence = SequenceControl {
        fragment_number: 0,
        sequence_number: 0x123,
    };
    ack.bitmap[0] = 0b0000_0111;

    let bytes = ack.encode();
    assert_eq!(bytes[0], 0x94);
    assert_eq!(ack.header_size(), 36);
    assert_eq!(bytes.len(), 36);

    let parsed = parse_frame(&bytes).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::BlockAck(_)));
    assert_eq!(parsed, Frame::BlockAck(ack));
}

#[test]
fn test_truncated_block_ack() {
    // A BlockAck whose bitmap is cut off after four bytes.
    let payload = [
        148, 0, // FrameControl
        0, 0, // Duration
        192, 238, 251, 75, 207, 58, // First Address
        248, 50, 228, 173, 71, 184, // Second Address
        0, 80, // BAR control
        48, 18, // Start sequence
        1, 0, 0, 0, // Bitmap, cut short
    ];

    assert!(parse_frame(&payload).is_err());
}
