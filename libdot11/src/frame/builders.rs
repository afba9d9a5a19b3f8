use crate::error::Error;
use crate::frame::components::{CapabilityInformation, MacAddress, RsnInformation};
use crate::frame::data::{Data, QosData};
use crate::frame::management::{
    Beacon, Deauthentication, ManagementFrame, ProbeRequest, ReasonCode,
};

/// Assembles a [Beacon] with the usual announcement elements.
pub struct BeaconBuilder {
    destination: MacAddress,
    source: MacAddress,
    bssid: MacAddress,
    beacon_interval: u16,
    capability_info: CapabilityInformation,
    ssid: Option<String>,
    supported_rates: Vec<f32>,
    channel: Option<u8>,
    rsn_information: Option<RsnInformation>,
}

impl BeaconBuilder {
    pub fn new(source: MacAddress, bssid: MacAddress) -> Self {
        Self {
            destination: MacAddress::BROADCAST,
            source,
            bssid,
            beacon_interval: 100,
            capability_info: CapabilityInformation::ap(),
            ssid: None,
            supported_rates: vec![],
            channel: None,
            rsn_information: None,
        }
    }

    pub fn destination(mut self, destination: MacAddress) -> Self {
        self.destination = destination;
        self
    }

    pub fn beacon_interval(mut self, beacon_interval: u16) -> Self {
        self.beacon_interval = beacon_interval;
        self
    }

    pub fn capability_info(mut self, capability_info: CapabilityInformation) -> Self {
        self.capability_info = capability_info;
        self
    }

    pub fn ssid(mut self, ssid: &str) -> Self {
        self.ssid = Some(ssid.to_string());
        self
    }

    pub fn add_supported_rate(mut self, rate: f32) -> Self {
        self.supported_rates.push(rate);
        self
    }

    pub fn supported_rates(mut self, rates: &[f32]) -> Self {
        self.supported_rates = rates.to_vec();
        self
    }

    pub fn channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn rsn_information(mut self, rsn: RsnInformation) -> Self {
        self.rsn_information = Some(rsn);
        self
    }

    pub fn build(self) -> Result<Beacon, Error> {
        let mut beacon = Beacon::new(self.destination, self.source, self.bssid);
        beacon.beacon_interval = self.beacon_interval;
        beacon.capability_info = self.capability_info;

        if let Some(ssid) = &self.ssid {
            beacon.set_ssid(ssid)?;
        }
        if !self.supported_rates.is_empty() {
            beacon.set_supported_rates(&self.supported_rates)?;
        }
        if let Some(channel) = self.channel {
            beacon.set_ds_parameter_set(channel)?;
        }
        if let Some(rsn) = &self.rsn_information {
            beacon.set_rsn_information(rsn)?;
        }

        Ok(beacon)
    }
}

/// Assembles a [ProbeRequest], by default a wildcard scan to broadcast.
pub struct ProbeRequestBuilder {
    destination: MacAddress,
    source: MacAddress,
    bssid: MacAddress,
    ssid: Option<String>,
    supported_rates: Vec<f32>,
    channel: Option<u8>,
}

impl ProbeRequestBuilder {
    pub fn new(source: MacAddress) -> Self {
        Self {
            destination: MacAddress::BROADCAST,
            source,
            bssid: MacAddress::BROADCAST,
            ssid: None,
            supported_rates: vec![],
            channel: None,
        }
    }

    pub fn destination(mut self, destination: MacAddress) -> Self {
        self.destination = destination;
        self
    }

    pub fn bssid(mut self, bssid: MacAddress) -> Self {
        self.bssid = bssid;
        self
    }

    pub fn ssid(mut self, ssid: &str) -> Self {
        self.ssid = Some(ssid.to_string());
        self
    }

    pub fn add_supported_rate(mut self, rate: f32) -> Self {
        self.supported_rates.push(rate);
        self
    }

    pub fn channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn build(self) -> Result<ProbeRequest, Error> {
        let mut probe = ProbeRequest::new(self.destination, self.source, self.bssid);

        // A missing SSID element means a directed probe; an empty one is the wildcard.
        probe.set_ssid(self.ssid.as_deref().unwrap_or(""))?;
        if !self.supported_rates.is_empty() {
            probe.set_supported_rates(&self.supported_rates)?;
        }
        if let Some(channel) = self.channel {
            probe.set_ds_parameter_set(channel)?;
        }

        Ok(probe)
    }
}

/// Assembles a [Deauthentication] frame.
pub struct DeauthenticationBuilder {
    destination: MacAddress,
    source: MacAddress,
    bssid: MacAddress,
    reason: ReasonCode,
}

impl DeauthenticationBuilder {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        Self {
            destination,
            source,
            bssid,
            reason: ReasonCode::Unspecified,
        }
    }

    pub fn reason(mut self, reason: ReasonCode) -> Self {
        self.reason = reason;
        self
    }

    pub fn build(self) -> Deauthentication {
        Deauthentication::new(self.destination, self.source, self.bssid, self.reason)
    }
}

/// Assembles a [Data] frame around a child payload.
pub struct DataBuilder {
    destination: MacAddress,
    source: MacAddress,
    bssid: MacAddress,
    to_ds: bool,
    from_ds: bool,
    payload: Vec<u8>,
}

impl DataBuilder {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        Self {
            destination,
            source,
            bssid,
            to_ds: false,
            from_ds: false,
            payload: vec![],
        }
    }

    pub fn to_ds(mut self, to_ds: bool) -> Self {
        self.to_ds = to_ds;
        self
    }

    pub fn from_ds(mut self, from_ds: bool) -> Self {
        self.from_ds = from_ds;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Data {
        let mut data = Data::new(self.destination, self.source, self.bssid, self.payload);
        data.header.frame_control.set_to_ds(self.to_ds);
        data.header.frame_control.set_from_ds(self.from_ds);
        data
    }
}

/// Assembles a [QosData] frame around a child payload.
pub struct QosDataBuilder {
    destination: MacAddress,
    source: MacAddress,
    bssid: MacAddress,
    qos_control: u16,
    payload: Vec<u8>,
}

impl QosDataBuilder {
    pub fn new(destination: MacAddress, source: MacAddress, bssid: MacAddress) -> Self {
        Self {
            destination,
            source,
            bssid,
            qos_control: 0,
            payload: vec![],
        }
    }

    pub fn qos_control(mut self, qos_control: u16) -> Self {
        self.qos_control = qos_control;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> QosData {
        let mut qos_data = QosData::new(self.destination, self.source, self.bssid, self.payload);
        qos_data.qos_control = self.qos_control;
        qos_data
    }
}
