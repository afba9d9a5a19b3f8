use libdot11::frame::components::*;
use libdot11::frame::*;
use libdot11::{parse_frame, Addresses};

/// A beacon captured off the air, complete with a WPA2 RSN element,
/// HT/VHT blobs and a couple of vendor elements.
const BEACON_PAYLOAD: [u8; 272] = [
    // Header
    128, 0, // FrameControl
    0, 0, // Duration id
    255, 255, 255, 255, 255, 255, // First address
    248, 50, 228, 173, 71, 184, // Second address
    248, 50, 228, 173, 71, 184, // Third address
    96, 119, // SequenceControl
    // Fixed parameters
    151, 161, 39, 206, 165, 0, 0, 0, // timestamp
    100, 0, // interval
    17, 4, // capability
    // Tagged options
    0, 15, 77, 121, 32, 102, 97, 99, 101, 32, 119, 104, 101, 110, 32, 73, 80, // SSID
    1, 8, 130, 132, 139, 150, 36, 48, 72, 108, // Supported rates
    3, 1, 9, // DS parameter set
    5, 4, 0, 3, 1, 0, // TIM
    42, 1, 4, // ERP
    47, 1, 4, //
    48, 20, 1, 0, 0, 15, 172, 4, 1, 0, 0, 15, 172, 4, 1, 0, 0, 15, 172, 2, 12, 0, // RSN
    50, 4, 12, 18, 24, 96, // Extended supported rates
    45, 26, 189, 25, 23, 255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, // HT capabilities
    61, 22, 9, 8, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // HT information
    74, 14, 20, 0, 10, 0, 44, 1, 200, 0, 20, 0, 5, 0, 25, 0, //
    127, 8, 1, 0, 0, 0, 0, 0, 0, 64, // Extended capabilities
    221, 49, 0, 80, 242, 4, 16, 74, 0, 1, 16, 16, 68, 0, 1, 2, 16, 71, 0, 16, 190, 15, 245, 213,
    137, 177, 64, 140, 203, 243, 77, 29, 90, 130, 118, 247, 16, 60, 0, 1, 3, 16, 73, 0, 6, 0, 55,
    42, 0, 1, 32, // WPS
    221, 9, 0, 16, 24, 2, 5, 0, 28, 0, 0, //
    221, 24, 0, 80, 242, 2, 1, 1, 132, 0, 3, 164, 0, 0, 39, 164, 0, 0, 66, 67, 94, 0, 98, 50, 47,
    0, // WMM
];

#[test]
fn test_beacon() {
    let frame = parse_frame(&BEACON_PAYLOAD).expect("Payload should be valid");
    assert!(matches!(frame, Frame::Beacon(_)));

    if let Frame::Beacon(beacon) = frame {
        assert_eq!(beacon.timestamp, 0xA5CE27A197);
        assert_eq!(beacon.beacon_interval, 100);
        assert!(beacon.capability_info.ess);
        assert!(beacon.capability_info.privacy);

        assert_eq!(beacon.essid(), "My face when IP");
        assert_eq!(beacon.channel(), Some(9));
        assert_eq!(
            beacon.supported_rates(),
            vec![1.0, 2.0, 5.5, 11.0, 18.0, 24.0, 36.0, 54.0, 6.0, 9.0, 12.0, 48.0]
        );

        let rsn = beacon.rsn_information().expect("RSN should decode");
        assert_eq!(rsn.version, 1);
        assert_eq!(rsn.group_cipher_suite, RsnCipherSuite::CCMP);
        assert_eq!(rsn.pairwise_cipher_suites, vec![RsnCipherSuite::CCMP]);
        assert_eq!(rsn.akm_suites, vec![RsnAkmSuite::PSK]);
        assert_eq!(rsn.capabilities, 0x000C);
    }
}

#[test]
fn test_beacon_reserialization_is_bit_exact() {
    let frame = parse_frame(&BEACON_PAYLOAD).expect("Payload should be valid");

    assert_eq!(frame.size(), BEACON_PAYLOAD.len());
    assert_eq!(frame.header_size(), BEACON_PAYLOAD.len());
    assert_eq!(frame.encode(), BEACON_PAYLOAD);
}

#[test]
fn test_built_beacon_wire_prefix() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let mut beacon = Beacon::new(MacAddress::BROADCAST, bssid.clone(), bssid);
    beacon.set_ssid("test").unwrap();
    beacon.set_supported_rates(&[1.0, 2.0]).unwrap();
    beacon.set_ds_parameter_set(6).unwrap();

    let bytes = beacon.encode();
    // Type/subtype say beacon, ToDS/FromDS are clear, addr1 is broadcast.
    assert_eq!(
        &bytes[..10],
        &[0x80, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );
    assert_eq!(bytes.len(), beacon.header_size());

    let parsed = parse_frame(&bytes).expect("Payload should be valid");
    assert_eq!(parsed, Frame::Beacon(beacon));
}

#[test]
fn test_probe_request_roundtrip() {
    let probe = ProbeRequestBuilder::new(MacAddress([2, 0, 0, 0, 0, 1]))
        .ssid("test")
        .add_supported_rate(1.0)
        .add_supported_rate(2.0)
        .build()
        .unwrap();

    let bytes = probe.encode();
    assert_eq!(bytes[0], 0x40);

    let parsed = parse_frame(&bytes).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::ProbeRequest(_)));
    assert_eq!(parsed, Frame::ProbeRequest(probe));
}

#[test]
fn test_probe_response_roundtrip() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let mut response =
        ProbeResponse::new(MacAddress([2, 0, 0, 0, 0, 1]), bssid.clone(), bssid);
    response.timestamp = 0xDEADBEEF;
    response.set_ssid("test").unwrap();
    response.set_ds_parameter_set(11).unwrap();

    let parsed = parse_frame(&response.encode()).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::ProbeResponse(_)));
    assert_eq!(parsed, Frame::ProbeResponse(response));
}

#[test]
fn test_association_response_roundtrip() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let mut response =
        AssociationResponse::new(MacAddress([2, 0, 0, 0, 0, 1]), bssid.clone(), bssid);
    response.status_code = 0;
    response.association_id = 1;
    response.set_supported_rates(&[1.0, 2.0]).unwrap();

    let parsed = parse_frame(&response.encode()).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::AssociationResponse(_)));
    assert_eq!(parsed, Frame::AssociationResponse(response));
}

#[test]
fn test_association_request_roundtrip() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let mut request =
        AssociationRequest::new(bssid.clone(), MacAddress([2, 0, 0, 0, 0, 1]), bssid);
    request.listen_interval = 10;
    request.capability_info.ess = true;
    request.set_ssid("test").unwrap();
    request.set_supported_rates(&[1.0, 2.0, 5.5, 11.0]).unwrap();

    let parsed = parse_frame(&request.encode()).expect("Payload should be valid");
    assert_eq!(parsed, Frame::AssociationRequest(request));
}

#[test]
fn test_reassociation_frames_roundtrip() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let old_ap = MacAddress([0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F]);

    let mut request = ReassociationRequest::new(
        bssid.clone(),
        MacAddress([2, 0, 0, 0, 0, 1]),
        bssid.clone(),
        old_ap,
    );
    request.set_ssid("test").unwrap();

    let parsed = parse_frame(&request.encode()).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::ReassociationRequest(_)));
    assert_eq!(parsed, Frame::ReassociationRequest(request));

    let mut response =
        ReassociationResponse::new(MacAddress([2, 0, 0, 0, 0, 1]), bssid.clone(), bssid);
    response.association_id = 0xC001;
    let parsed = parse_frame(&response.encode()).expect("Payload should be valid");
    assert_eq!(parsed, Frame::ReassociationResponse(response));
}

#[test]
fn test_authentication_with_challenge_text() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let mut auth = Authentication::new(bssid.clone(), MacAddress([2, 0, 0, 0, 0, 1]), bssid);
    auth.auth_algorithm = 1; // shared key
    auth.auth_seq = 2;
    auth.set_challenge_text(b"gimme the keystream").unwrap();

    let parsed = parse_frame(&auth.encode()).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::Authentication(_)));

    if let Frame::Authentication(inner) = parsed {
        assert_eq!(inner.auth_algorithm, 1);
        assert_eq!(inner.challenge_text(), Some(b"gimme the keystream".as_slice()));
    }
}

#[test]
fn test_deauthentication_reason() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let deauth = DeauthenticationBuilder::new(
        MacAddress([2, 0, 0, 0, 0, 1]),
        bssid.clone(),
        bssid,
    )
    .reason(ReasonCode::StationLeavingBss)
    .build();

    let bytes = deauth.encode();
    // Reason code 8, little-endian, right after the header.
    assert_eq!(&bytes[24..26], &[8, 0]);

    let parsed = parse_frame(&bytes).expect("Payload should be valid");
    assert!(matches!(parsed, Frame::Deauthentication(_)));
    if let Frame::Deauthentication(inner) = parsed {
        assert_eq!(inner.reason(), ReasonCode::StationLeavingBss);
    }
}

#[test]
fn test_disassociation_roundtrip() {
    let bssid = MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    let disassoc = Disassociation::new(
        MacAddress([2, 0, 0, 0, 0, 1]),
        bssid.clone(),
        bssid,
        ReasonCode::Inactivity,
    );

    let parsed = parse_frame(&disassoc.encode()).expect("Payload should be valid");
    assert_eq!(parsed, Frame::Disassociation(disassoc));
}

#[test]
fn test_management_addresses() {
    let frame = parse_frame(&BEACON_PAYLOAD).expect("Payload should be valid");

    assert!(frame.dest().is_broadcast());
    assert_eq!(
        frame.src().map(|mac| mac.to_string()),
        Some("f8:32:e4:ad:47:b8".to_string())
    );
    assert_eq!(
        frame.bssid().map(|mac| mac.to_string()),
        Some("f8:32:e4:ad:47:b8".to_string())
    );
}
