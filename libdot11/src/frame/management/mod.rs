mod association;
mod authentication;
mod beacon;
mod probe;

pub use association::{
    AssociationRequest, AssociationResponse, ReassociationRequest, ReassociationResponse,
};
pub use authentication::{Authentication, Deauthentication, Disassociation, ReasonCode};
pub use beacon::Beacon;
pub use probe::{ProbeRequest, ProbeResponse};

use crate::error::Error;
use crate::frame::components::{MacAddress, OptionId, RsnInformation, TaggedOptions};

/// Encode a rate in Mbps as its 500 kbps wire unit.
/// Every rate set through this library is treated as a basic rate, so the
/// high bit is always set.
fn encode_rate(rate: f32) -> u8 {
    ((rate * 2.0).round() as u8) | 0x80
}

fn decode_rates(data: &[u8]) -> Vec<f32> {
    data.iter().map(|&rate| (rate & 0x7F) as f32 / 2.0).collect()
}

/// Shared behavior of all management frames: every one of them carries the
/// tagged-option chain, and all the typed information-element helpers
/// operate on that chain.
///
/// The setters create the option or replace an already present one with the
/// same tag. Setters whose payload can exceed 255 bytes surface
/// [Error::OptionTooLong].
pub trait ManagementFrame {
    fn options(&self) -> &TaggedOptions;
    fn options_mut(&mut self) -> &mut TaggedOptions;

    /// Set the SSID element (tag 0). Raw bytes, an empty SSID is legal and
    /// means wildcard.
    fn set_ssid(&mut self, ssid: &str) -> Result<(), Error> {
        if ssid.len() > 32 {
            return Err(Error::InvalidLength(format!(
                "SSIDs are limited to 32 bytes, got {}",
                ssid.len()
            )));
        }

        self.options_mut().set(OptionId::Ssid, ssid.as_bytes())
    }

    /// The SSID of this frame, or an empty string if none is set.
    fn essid(&self) -> String {
        match self.options().find(OptionId::Ssid) {
            Some(data) => String::from_utf8_lossy(data).to_string(),
            None => String::new(),
        }
    }

    /// Set the supported rates (tag 1), in Mbps.
    ///
    /// A list longer than 8 rates doesn't fit the element; the remainder
    /// spills into the Extended Supported Rates element (tag 50).
    fn set_supported_rates(&mut self, rates: &[f32]) -> Result<(), Error> {
        let encoded: Vec<u8> = rates.iter().map(|rate| encode_rate(*rate)).collect();

        if encoded.len() <= 8 {
            self.options_mut().set(OptionId::SupportedRates, &encoded)
        } else {
            let (head, tail) = encoded.split_at(8);
            self.options_mut().set(OptionId::SupportedRates, head)?;
            self.options_mut()
                .set(OptionId::ExtendedSupportedRates, tail)
        }
    }

    /// Set the extended supported rates (tag 50), in Mbps.
    fn set_extended_supported_rates(&mut self, rates: &[f32]) -> Result<(), Error> {
        let encoded: Vec<u8> = rates.iter().map(|rate| encode_rate(*rate)).collect();
        self.options_mut()
            .set(OptionId::ExtendedSupportedRates, &encoded)
    }

    /// All rates of this frame in Mbps, concatenating the plain and the
    /// extended element.
    fn supported_rates(&self) -> Vec<f32> {
        let mut rates = self
            .options()
            .find(OptionId::SupportedRates)
            .map(decode_rates)
            .unwrap_or_default();

        if let Some(data) = self.options().find(OptionId::ExtendedSupportedRates) {
            rates.extend(decode_rates(data));
        }

        rates
    }

    /// Set the DS parameter set (tag 3): the current channel.
    fn set_ds_parameter_set(&mut self, current_channel: u8) -> Result<(), Error> {
        self.options_mut()
            .set(OptionId::DsParameterSet, &[current_channel])
    }

    /// The channel announced in the DS parameter set, if any.
    fn channel(&self) -> Option<u8> {
        self.options()
            .find(OptionId::DsParameterSet)
            .and_then(|data| data.first().copied())
    }

    /// Set the FH parameter set (tag 2).
    fn set_fh_parameter_set(
        &mut self,
        dwell_time: u16,
        hop_set: u8,
        hop_pattern: u8,
        hop_index: u8,
    ) -> Result<(), Error> {
        let mut value = Vec::with_capacity(5);
        value.extend(dwell_time.to_le_bytes());
        value.extend([hop_set, hop_pattern, hop_index]);
        self.options_mut().set(OptionId::FhParameterSet, &value)
    }

    /// Set the CF parameter set (tag 4).
    fn set_cf_parameter_set(
        &mut self,
        cfp_count: u8,
        cfp_period: u8,
        cfp_max_duration: u16,
        cfp_dur_remaining: u16,
    ) -> Result<(), Error> {
        let mut value = Vec::with_capacity(6);
        value.extend([cfp_count, cfp_period]);
        value.extend(cfp_max_duration.to_le_bytes());
        value.extend(cfp_dur_remaining.to_le_bytes());
        self.options_mut().set(OptionId::CfParameterSet, &value)
    }

    /// Set the TIM element (tag 5).
    fn set_tim(
        &mut self,
        dtim_count: u8,
        dtim_period: u8,
        bitmap_control: u8,
        partial_virtual_bitmap: &[u8],
    ) -> Result<(), Error> {
        let mut value = Vec::with_capacity(3 + partial_virtual_bitmap.len());
        value.extend([dtim_count, dtim_period, bitmap_control]);
        value.extend_from_slice(partial_virtual_bitmap);
        self.options_mut().set(OptionId::Tim, &value)
    }

    /// Set the IBSS parameter set (tag 6): the ATIM window.
    fn set_ibss_parameter_set(&mut self, atim_window: u16) -> Result<(), Error> {
        self.options_mut()
            .set(OptionId::IbssParameterSet, &atim_window.to_le_bytes())
    }

    /// Set the country element (tag 7).
    ///
    /// The country string is padded to three bytes with ASCII spaces; each
    /// triplet is `(first_channel, number_of_channels, max_tx_power)`.
    fn set_country(&mut self, country: &str, triplets: &[(u8, u8, u8)]) -> Result<(), Error> {
        let mut value = Vec::with_capacity(3 + 3 * triplets.len());

        let mut country_bytes = [b' '; 3];
        for (index, byte) in country.bytes().take(3).enumerate() {
            country_bytes[index] = byte;
        }
        value.extend(country_bytes);

        for (first_channel, number_channels, max_power) in triplets {
            value.extend([*first_channel, *number_channels, *max_power]);
        }

        self.options_mut().set(OptionId::Country, &value)
    }

    /// Set the hopping pattern parameters (tag 8).
    fn set_hopping_pattern_parameters(
        &mut self,
        prime_radix: u8,
        number_channels: u8,
    ) -> Result<(), Error> {
        self.options_mut().set(
            OptionId::HoppingPatternParameters,
            &[prime_radix, number_channels],
        )
    }

    /// Set the hopping pattern table (tag 9).
    fn set_hopping_pattern_table(
        &mut self,
        flag: u8,
        number_of_sets: u8,
        modulus: u8,
        offset: u8,
        random_table: &[u8],
    ) -> Result<(), Error> {
        let mut value = Vec::with_capacity(4 + random_table.len());
        value.extend([flag, number_of_sets, modulus, offset]);
        value.extend_from_slice(random_table);
        self.options_mut().set(OptionId::HoppingPatternTable, &value)
    }

    /// Set the request element (tag 10): the ids of the elements a probe
    /// request asks for, one byte each.
    fn set_request_information(&mut self, elements: &[u8]) -> Result<(), Error> {
        self.options_mut().set(OptionId::Request, elements)
    }

    /// Set the BSS load element (tag 11).
    fn set_bss_load(
        &mut self,
        station_count: u16,
        channel_utilization: u8,
        available_capacity: u16,
    ) -> Result<(), Error> {
        let mut value = Vec::with_capacity(5);
        value.extend(station_count.to_le_bytes());
        value.push(channel_utilization);
        value.extend(available_capacity.to_le_bytes());
        self.options_mut().set(OptionId::BssLoad, &value)
    }

    /// Set the EDCA parameter set (tag 12): the four access-category
    /// records, written verbatim little-endian.
    fn set_edca_parameter_set(
        &mut self,
        ac_be: u32,
        ac_bk: u32,
        ac_vi: u32,
        ac_vo: u32,
    ) -> Result<(), Error> {
        let mut value = Vec::with_capacity(16);
        value.extend(ac_be.to_le_bytes());
        value.extend(ac_bk.to_le_bytes());
        value.extend(ac_vi.to_le_bytes());
        value.extend(ac_vo.to_le_bytes());
        self.options_mut().set(OptionId::EdcaParameterSet, &value)
    }

    /// Set the challenge text (tag 16) used by shared-key authentication.
    fn set_challenge_text(&mut self, text: &[u8]) -> Result<(), Error> {
        self.options_mut().set(OptionId::ChallengeText, text)
    }

    fn challenge_text(&self) -> Option<&[u8]> {
        self.options().find(OptionId::ChallengeText)
    }

    /// Set the power constraint (tag 32).
    fn set_power_constraint(&mut self, local_power_constraint: u8) -> Result<(), Error> {
        self.options_mut()
            .set(OptionId::PowerConstraint, &[local_power_constraint])
    }

    /// Set the power capability (tag 33).
    fn set_power_capability(&mut self, min_tx_power: u8, max_tx_power: u8) -> Result<(), Error> {
        self.options_mut()
            .set(OptionId::PowerCapability, &[min_tx_power, max_tx_power])
    }

    /// Set the TPC report (tag 35).
    fn set_tpc_report(&mut self, transmit_power: u8, link_margin: u8) -> Result<(), Error> {
        self.options_mut()
            .set(OptionId::TpcReport, &[transmit_power, link_margin])
    }

    /// Set the channel switch announcement (tag 37).
    fn set_channel_switch(
        &mut self,
        switch_mode: u8,
        new_channel: u8,
        switch_count: u8,
    ) -> Result<(), Error> {
        self.options_mut().set(
            OptionId::ChannelSwitch,
            &[switch_mode, new_channel, switch_count],
        )
    }

    /// Set the quiet element (tag 40).
    fn set_quiet(&mut self, count: u8, period: u8, duration: u16, offset: u16) -> Result<(), Error> {
        let mut value = Vec::with_capacity(6);
        value.extend([count, period]);
        value.extend(duration.to_le_bytes());
        value.extend(offset.to_le_bytes());
        self.options_mut().set(OptionId::Quiet, &value)
    }

    /// Set the IBSS DFS element (tag 41): the DFS owner, the recovery
    /// interval and the `(channel, map)` pairs.
    fn set_ibss_dfs(
        &mut self,
        owner: &MacAddress,
        recovery_interval: u8,
        channel_map: &[(u8, u8)],
    ) -> Result<(), Error> {
        let mut value = Vec::with_capacity(7 + 2 * channel_map.len());
        value.extend(owner.encode());
        value.push(recovery_interval);
        for (channel, map) in channel_map {
            value.extend([*channel, *map]);
        }
        self.options_mut().set(OptionId::IbssDfs, &value)
    }

    /// Set the ERP information element (tag 42).
    fn set_erp_information(&mut self, value: u8) -> Result<(), Error> {
        self.options_mut().set(OptionId::ErpInformation, &[value])
    }

    /// Set the QoS capability element (tag 46).
    fn set_qos_capability(&mut self, qos_info: u8) -> Result<(), Error> {
        self.options_mut().set(OptionId::QosCapability, &[qos_info])
    }

    /// Set the RSN element (tag 48).
    fn set_rsn_information(&mut self, rsn: &RsnInformation) -> Result<(), Error> {
        self.options_mut().set(OptionId::Rsn, &rsn.encode())
    }

    /// The decoded RSN element of this frame, if present and well-formed.
    fn rsn_information(&self) -> Option<RsnInformation> {
        self.options()
            .find(OptionId::Rsn)
            .and_then(|data| RsnInformation::decode(data).ok())
    }
}
