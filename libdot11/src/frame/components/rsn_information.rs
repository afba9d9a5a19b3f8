use crate::error::Error;

/// The decoded payload of an RSN (tag 48) information element.
///
/// Wire layout, all multi-byte integers little-endian, suites in their
/// natural OUI-first byte order:
///
/// `version (2) | group suite (4) | pairwise count (2) | pairwise suites (4 each)
///  | akm count (2) | akm suites (4 each) | capabilities (2)`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RsnInformation {
    pub version: u16,
    pub group_cipher_suite: RsnCipherSuite,
    pub pairwise_cipher_suites: Vec<RsnCipherSuite>,
    pub akm_suites: Vec<RsnAkmSuite>,
    pub capabilities: u16,
}

impl RsnInformation {
    /// The element a WPA2-PSK access point broadcasts:
    /// version 1, CCMP group and pairwise suites, PSK key management,
    /// no capabilities.
    pub fn wpa2_psk() -> Self {
        RsnInformation {
            version: 1,
            group_cipher_suite: RsnCipherSuite::CCMP,
            pairwise_cipher_suites: vec![RsnCipherSuite::CCMP],
            akm_suites: vec![RsnAkmSuite::PSK],
            capabilities: 0,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend(self.group_cipher_suite.encode());

        bytes.extend_from_slice(&(self.pairwise_cipher_suites.len() as u16).to_le_bytes());
        for suite in &self.pairwise_cipher_suites {
            bytes.extend(suite.encode());
        }

        bytes.extend_from_slice(&(self.akm_suites.len() as u16).to_le_bytes());
        for suite in &self.akm_suites {
            bytes.extend(suite.encode());
        }

        bytes.extend_from_slice(&self.capabilities.to_le_bytes());

        bytes
    }

    pub fn decode(data: &[u8]) -> Result<Self, Error> {
        if data.len() < 8 {
            return Err(Error::InvalidRsn("data too short".to_string()));
        }

        let version = u16::from_le_bytes([data[0], data[1]]);
        let group_cipher_suite = RsnCipherSuite::from_bytes(&data[2..6]);

        let pairwise_count = u16::from_le_bytes([data[6], data[7]]) as usize;
        let mut offset = 8;

        if data.len() < offset + 4 * pairwise_count + 2 {
            return Err(Error::InvalidRsn(
                "pairwise suite list runs past the end".to_string(),
            ));
        }

        let mut pairwise_cipher_suites = Vec::with_capacity(pairwise_count);
        for _ in 0..pairwise_count {
            pairwise_cipher_suites.push(RsnCipherSuite::from_bytes(&data[offset..offset + 4]));
            offset += 4;
        }

        let akm_count = u16::from_le_bytes([data[offset], data[offset + 1]]) as usize;
        offset += 2;

        if data.len() < offset + 4 * akm_count + 2 {
            return Err(Error::InvalidRsn(
                "AKM suite list runs past the end".to_string(),
            ));
        }

        let mut akm_suites = Vec::with_capacity(akm_count);
        for _ in 0..akm_count {
            akm_suites.push(RsnAkmSuite::from_bytes(&data[offset..offset + 4]));
            offset += 4;
        }

        let capabilities = u16::from_le_bytes([data[offset], data[offset + 1]]);

        Ok(RsnInformation {
            version,
            group_cipher_suite,
            pairwise_cipher_suites,
            akm_suites,
            capabilities,
        })
    }
}

/// Cipher suite selectors from the 00-0F-AC namespace.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RsnCipherSuite {
    None,
    WEP,
    TKIP,
    WRAP,
    #[default]
    CCMP,
    WEP104,
    Unknown(Vec<u8>),
}

impl RsnCipherSuite {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            RsnCipherSuite::None => vec![0x00, 0x0F, 0xAC, 0x00],
            RsnCipherSuite::WEP => vec![0x00, 0x0F, 0xAC, 0x01],
            RsnCipherSuite::TKIP => vec![0x00, 0x0F, 0xAC, 0x02],
            RsnCipherSuite::WRAP => vec![0x00, 0x0F, 0xAC, 0x03],
            RsnCipherSuite::CCMP => vec![0x00, 0x0F, 0xAC, 0x04],
            RsnCipherSuite::WEP104 => vec![0x00, 0x0F, 0xAC, 0x05],
            RsnCipherSuite::Unknown(data) => data.clone(),
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        match data {
            [0x00, 0x0F, 0xAC, 0x00] => RsnCipherSuite::None,
            [0x00, 0x0F, 0xAC, 0x01] => RsnCipherSuite::WEP,
            [0x00, 0x0F, 0xAC, 0x02] => RsnCipherSuite::TKIP,
            [0x00, 0x0F, 0xAC, 0x03] => RsnCipherSuite::WRAP,
            [0x00, 0x0F, 0xAC, 0x04] => RsnCipherSuite::CCMP,
            [0x00, 0x0F, 0xAC, 0x05] => RsnCipherSuite::WEP104,
            _ => RsnCipherSuite::Unknown(data.to_vec()),
        }
    }
}

/// Authentication and key management suite selectors.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RsnAkmSuite {
    EAP,
    #[default]
    PSK,
    EAPFT,
    PSKFT,
    EAP256,
    PSK256,
    SAE,
    Unknown(Vec<u8>),
}

impl RsnAkmSuite {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            RsnAkmSuite::EAP => vec![0x00, 0x0F, 0xAC, 0x01],
            RsnAkmSuite::PSK => vec![0x00, 0x0F, 0xAC, 0x02],
            RsnAkmSuite::EAPFT => vec![0x00, 0x0F, 0xAC, 0x03],
            RsnAkmSuite::PSKFT => vec![0x00, 0x0F, 0xAC, 0x04],
            RsnAkmSuite::EAP256 => vec![0x00, 0x0F, 0xAC, 0x05],
            RsnAkmSuite::PSK256 => vec![0x00, 0x0F, 0xAC, 0x06],
            RsnAkmSuite::SAE => vec![0x00, 0x0F, 0xAC, 0x08],
            RsnAkmSuite::Unknown(data) => data.clone(),
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        match data {
            [0x00, 0x0F, 0xAC, 0x01] => RsnAkmSuite::EAP,
            [0x00, 0x0F, 0xAC, 0x02] => RsnAkmSuite::PSK,
            [0x00, 0x0F, 0xAC, 0x03] => RsnAkmSuite::EAPFT,
            [0x00, 0x0F, 0xAC, 0x04] => RsnAkmSuite::PSKFT,
            [0x00, 0x0F, 0xAC, 0x05] => RsnAkmSuite::EAP256,
            [0x00, 0x0F, 0xAC, 0x06] => RsnAkmSuite::PSK256,
            [0x00, 0x0F, 0xAC, 0x08] => RsnAkmSuite::SAE,
            _ => RsnAkmSuite::Unknown(data.to_vec()),
        }
    }
}
