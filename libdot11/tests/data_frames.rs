use libdot11::frame::components::MacAddress;
use libdot11::frame::*;
use libdot11::parse_frame;

#[test]
fn test_data() {
    let payload = [
        8, 98, // FrameControl
        0, 0, // Duration id
        51, 51, 255, 75, 207, 58, // First address
        248, 50, 228, 173, 71, 184, // Second address
        192, 238, 251, 75, 207, 58, // Third address
        80, 2, // SequenceControl
        // The rest is the child payload
        90, 7, 0, 96, 0, 0, 0, 0, 239, 46, 109, 235, 61, 58, 89, 37, 181, 238, 23, 98, 108, 29, 99,
        170, 28, 132, 136, 248, 109, 194, 64, 139, 35, 219, 22, 195, 40, 100, 32, 6, 7, 230, 5,
        102, 8, 116, 33, 165, 132, 177, 44, 2, 247, 88, 213, 77, 12, 122, 49, 105, 29, 74, 55, 207,
        160, 46, 181, 65, 63, 123, 109, 117, 156, 77, 0, 65, 14, 72, 91, 169, 153, 0, 55, 68, 180,
        178, 230, 66,
    ];

    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::Data(_)));

    // The frame's own bytes stop at the header, the rest is the child.
    assert_eq!(frame.header_size(), 24);
    assert_eq!(frame.size(), payload.len());
    assert_eq!(frame.encode(), payload);
}

#[test]
fn test_qos_data() {
    let payload = [
        136, 66, // Frame Control
        44, 0, // Duration Id
        192, 238, 251, 75, 207, 58, // Address 1
        248, 50, 228, 173, 71, 184, // Address 2
        248, 50, 228, 173, 71, 184, // Address 3
        64, 119, // SequenceControl
        0, 0, // QoS Control
        // The rest is the child payload
        163, 23, 0, 32, 2, 0, 0, 0, 210, 141, 170, 200, 6, 91, 65, 22, 251, 155, 224, 22, 110, 76,
        229, 101, 87, 252, 180, 136, 190, 132, 133, 242, 93, 175, 106, 168, 63, 207, 128, 199, 200,
        20, 115, 79, 168, 50, 132, 160, 219, 152, 184, 110, 181, 105, 4, 153, 182, 129, 58, 87, 72,
        110, 194, 217, 192, 151, 89, 181, 161, 122, 249, 129, 201, 75, 6, 32, 158, 213, 21, 168,
    ];

    let frame = parse_frame(&payload).expect("Payload should be valid");
    assert!(matches!(frame, Frame::QosData(_)));

    assert_eq!(frame.header_size(), 26);
    assert_eq!(frame.size(), payload.len());
    assert_eq!(frame.encode(), payload);
}

#[test]
fn test_ds_flags_grow_the_header_by_addr4() {
    let destination = MacAddress([1, 0, 0, 0, 0, 1]);
    let source = MacAddress([2, 0, 0, 0, 0, 2]);
    let bssid = MacAddress([3, 0, 0, 0, 0, 3]);

    let mut data = Data::new(destination, source, bssid, vec![0xAA; 8]);
    let base_size = data.header_size();
    assert_eq!(base_size, 24);

    // One DS flag alone changes nothing.
    data.header.frame_control.set_to_ds(true);
    assert_eq!(data.header_size(), base_size);
    data.header.frame_control.set_to_ds(false);
    data.header.frame_control.set_from_ds(true);
    assert_eq!(data.header_size(), base_size);

    // Both flags together make addr4 appear.
    data.header.frame_control.set_to_ds(true);
    data.header.address_4 = Some(MacAddress([4, 0, 0, 0, 0, 4]));
    assert_eq!(data.header_size(), base_size + 6);

    let parsed = parse_frame(&data.encode()).expect("Payload should be valid");
    assert_eq!(parsed, Frame::Data(data));
}

#[test]
fn test_qos_data_builder_roundtrip() {
    let qos_data = QosDataBuilder::new(
        MacAddress([1, 0, 0, 0, 0, 1]),
        MacAddress([2, 0, 0, 0, 0, 2]),
        MacAddress([3, 0, 0, 0, 0, 3]),
    )
    .qos_control(0x0005)
    .payload(vec![0xAA, 0xBB, 0xCC])
    .build();

    assert_eq!(qos_data.tid(), 5);

    let parsed = parse_frame(&qos_data.encode()).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::QosData(_)));
    assert_eq!(parsed, Frame::QosData(qos_data));
}

#[test]
fn test_serialize_into() {
    let data = DataBuilder::new(
        MacAddress([1, 0, 0, 0, 0, 1]),
        MacAddress([2, 0, 0, 0, 0, 2]),
        MacAddress([3, 0, 0, 0, 0, 3]),
    )
    .payload(vec![1, 2, 3, 4])
    .build();
    let frame = Frame::Data(data);

    // An exactly sized buffer works.
    let mut buffer = vec![0; frame.size()];
    let written = frame.serialize_into(&mut buffer).expect("Buffer is big enough");
    assert_eq!(written, frame.size());
    assert_eq!(buffer, frame.encode());

    // A buffer one byte short is rejected.
    let mut buffer = vec![0; frame.size() - 1];
    assert!(frame.serialize_into(&mut buffer).is_err());
}
