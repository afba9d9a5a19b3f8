use libdot11::frame::components::{MacAddress, OptionId, RsnInformation};
use libdot11::frame::{Beacon, ManagementFrame, ProbeRequest};

fn test_beacon() -> Beacon {
    let bssid = MacAddress([0, 1, 2, 3, 4, 5]);
    Beacon::new(MacAddress::BROADCAST, bssid.clone(), bssid)
}

#[test]
fn test_rate_wire_encoding() {
    let mut beacon = test_beacon();
    beacon
        .set_supported_rates(&[1.0, 2.0, 5.5, 11.0, 6.0])
        .unwrap();

    // 500 kbps units with the basic-rate bit set.
    assert_eq!(
        beacon.options().find(OptionId::SupportedRates),
        Some([0x82, 0x84, 0x8B, 0x96, 0x8C].as_slice())
    );
    assert_eq!(beacon.supported_rates(), vec![1.0, 2.0, 5.5, 11.0, 6.0]);
}

#[test]
fn test_parameter_set_layouts() {
    let mut beacon = test_beacon();

    beacon.set_fh_parameter_set(0x0102, 3, 4, 5).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::FhParameterSet),
        Some([0x02, 0x01, 3, 4, 5].as_slice())
    );

    beacon.set_ds_parameter_set(6).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::DsParameterSet),
        Some([6].as_slice())
    );

    beacon.set_cf_parameter_set(1, 2, 0x1234, 0x5678).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::CfParameterSet),
        Some([1, 2, 0x34, 0x12, 0x78, 0x56].as_slice())
    );

    beacon.set_ibss_parameter_set(0x0A0B).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::IbssParameterSet),
        Some([0x0B, 0x0A].as_slice())
    );

    beacon.set_tim(1, 3, 0, &[0x00, 0x20]).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::Tim),
        Some([1, 3, 0, 0x00, 0x20].as_slice())
    );
}

#[test]
fn test_country_triplets() {
    let mut beacon = test_beacon();
    beacon.set_country("DE", &[(1, 13, 20)]).unwrap();

    // Two-letter codes get padded to three bytes with a space.
    assert_eq!(
        beacon.options().find(OptionId::Country),
        Some([b'D', b'E', b' ', 1, 13, 20].as_slice())
    );
}

#[test]
fn test_single_byte_elements() {
    let mut beacon = test_beacon();

    beacon.set_power_constraint(3).unwrap();
    beacon.set_erp_information(0x04).unwrap();
    beacon.set_qos_capability(0x80).unwrap();

    assert_eq!(
        beacon.options().find(OptionId::PowerConstraint),
        Some([3].as_slice())
    );
    assert_eq!(
        beacon.options().find(OptionId::ErpInformation),
        Some([0x04].as_slice())
    );
    assert_eq!(
        beacon.options().find(OptionId::QosCapability),
        Some([0x80].as_slice())
    );
}

#[test]
fn test_spectrum_management_elements() {
    let mut beacon = test_beacon();

    beacon.set_power_capability(0, 20).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::PowerCapability),
        Some([0, 20].as_slice())
    );

    beacon.set_tpc_report(17, 2).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::TpcReport),
        Some([17, 2].as_slice())
    );

    beacon.set_channel_switch(1, 36, 3).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::ChannelSwitch),
        Some([1, 36, 3].as_slice())
    );

    beacon.set_quiet(1, 255, 0x0102, 0x0304).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::Quiet),
        Some([1, 255, 0x02, 0x01, 0x04, 0x03].as_slice())
    );

    let owner = MacAddress([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    beacon.set_ibss_dfs(&owner, 5, &[(52, 0), (56, 1)]).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::IbssDfs),
        Some([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 5, 52, 0, 56, 1].as_slice())
    );
}

#[test]
fn test_load_and_qos_elements() {
    let mut beacon = test_beacon();

    beacon.set_bss_load(0x0102, 56, 0x0304).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::BssLoad),
        Some([0x02, 0x01, 56, 0x04, 0x03].as_slice())
    );

    beacon
        .set_edca_parameter_set(0x01020304, 0x05060708, 0x090A0B0C, 0x0D0E0F10)
        .unwrap();
    assert_eq!(
        beacon.options().find(OptionId::EdcaParameterSet),
        Some(
            [
                0x04, 0x03, 0x02, 0x01, //
                0x08, 0x07, 0x06, 0x05, //
                0x0C, 0x0B, 0x0A, 0x09, //
                0x10, 0x0F, 0x0E, 0x0D,
            ]
            .as_slice()
        )
    );
}

#[test]
fn test_hopping_elements() {
    let mut beacon = test_beacon();

    beacon.set_hopping_pattern_parameters(2, 79).unwrap();
    assert_eq!(
        beacon.options().find(OptionId::HoppingPatternParameters),
        Some([2, 79].as_slice())
    );

    beacon
        .set_hopping_pattern_table(1, 2, 3, 4, &[9, 8, 7])
        .unwrap();
    assert_eq!(
        beacon.options().find(OptionId::HoppingPatternTable),
        Some([1, 2, 3, 4, 9, 8, 7].as_slice())
    );
}

#[test]
fn test_request_element() {
    let mut probe = ProbeRequest::new(
        MacAddress::BROADCAST,
        MacAddress([2, 0, 0, 0, 0, 1]),
        MacAddress::BROADCAST,
    );
    probe.set_request_information(&[0, 1, 48]).unwrap();

    assert_eq!(
        probe.options().find(OptionId::Request),
        Some([0, 1, 48].as_slice())
    );
}

#[test]
fn test_empty_ssid_is_wildcard() {
    let mut probe = ProbeRequest::new(
        MacAddress::BROADCAST,
        MacAddress([2, 0, 0, 0, 0, 1]),
        MacAddress::BROADCAST,
    );
    probe.set_ssid("").unwrap();

    assert_eq!(probe.options().find(OptionId::Ssid), Some([].as_slice()));
    assert_eq!(probe.essid(), "");
}

#[test]
fn test_oversized_ssid_is_rejected() {
    let mut beacon = test_beacon();
    let result = beacon.set_ssid(&"x".repeat(33));
    assert!(result.is_err());
    assert!(beacon.options().is_empty());
}

#[test]
fn test_rsn_element_roundtrip() {
    let mut beacon = test_beacon();
    beacon
        .set_rsn_information(&RsnInformation::wpa2_psk())
        .unwrap();

    assert_eq!(
        beacon.options().find(OptionId::Rsn),
        Some(
            [
                0x01, 0x00, //
                0x00, 0x0F, 0xAC, 0x04, //
                0x01, 0x00, 0x00, 0x0F, 0xAC, 0x04, //
                0x01, 0x00, 0x00, 0x0F, 0xAC, 0x02, //
                0x00, 0x00,
            ]
            .as_slice()
        )
    );
    assert_eq!(beacon.rsn_information(), Some(RsnInformation::wpa2_psk()));
}

#[test]
fn test_setters_replace_in_place() {
    let mut beacon = test_beacon();
    beacon.set_ssid("first").unwrap();
    beacon.set_ds_parameter_set(1).unwrap();
    beacon.set_ssid("second").unwrap();

    assert_eq!(beacon.essid(), "second");
    // Replacing must not reorder or duplicate.
    assert_eq!(beacon.options().len(), 2);
    let ids: Vec<u8> = beacon.options().iter().map(|option| option.id).collect();
    assert_eq!(ids, vec![0, 3]);
}
