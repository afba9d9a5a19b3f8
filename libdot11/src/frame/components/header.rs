use super::{FrameControl, MacAddress, SequenceControl};
use crate::frame_types::FrameSubType;
use crate::traits::Addresses;

/// Representation of a management frame header. This format is used by all management frames!
///
/// This struct implements the `Addresses` trait, which provides the `src`, `dest` and `bssid`
/// functions.
///
/// Structure of a management header:
///
/// **Bytes 0-1** \
/// These contain protocol meta information and flags.
/// Take a look at the [FrameControl] struct for more information.
///
/// **Bytes 2-3** \
/// The duration/id field. Always present.
///
/// **Bytes 4-23** \
/// These contain all important address information.
///
/// byte 4-9: Address 1. Always present!
/// byte 10-15: Address 2.
/// byte 16-21: Address 3.
/// byte 22-23: Sequence Control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagementHeader {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub address_1: MacAddress,
    pub address_2: MacAddress,
    pub address_3: MacAddress,
    pub sequence_control: SequenceControl,
}

impl ManagementHeader {
    /// Fixed header plus extended header length in bytes.
    pub const SIZE: usize = 24;

    /// A fresh header for the given addresses: destination, source, bssid.
    pub fn new(
        subtype: FrameSubType,
        destination: MacAddress,
        source: MacAddress,
        bssid: MacAddress,
    ) -> Self {
        ManagementHeader {
            frame_control: FrameControl::new(subtype),
            duration_id: 0,
            address_1: destination,
            address_2: source,
            address_3: bssid,
            sequence_control: SequenceControl::default(),
        }
    }

    /// Write the header with the frame control type/subtype forced to the
    /// given canonical subtype.
    pub fn encode(&self, subtype: FrameSubType) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::SIZE);

        bytes.extend(self.frame_control.encode_as(subtype));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.address_1.encode());
        bytes.extend(self.address_2.encode());
        bytes.extend(self.address_3.encode());
        bytes.extend(self.sequence_control.encode());

        bytes
    }
}

/// Which address is used in which way, depends on a combination of
/// - two flags in the FrameControl header.
/// - the Type/Subtype constellation.
///
/// A rule of thumb is this:
///
/// **Address 1:** \
/// The recipient station address.
/// If `to_ds` is set, this is the AP address.
/// If `from_ds` is set then this is the station address
///
/// **Address 2:** \
/// The transmitter station address.
/// If `from_ds` is set, this is the AP address.
/// If `to_ds` is set then this is the station address.
///
/// **Address 3:** \
/// If Address 1 contains the destination address then Address 3 will contain the source address.
/// Similarly, if Address 2 contains the source address then Address 3 will contain the destination address.
impl Addresses for ManagementHeader {
    /// Return the mac address of the sender
    fn src(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_3)
        } else if frame_control.from_ds() {
            Some(&self.address_1)
        } else {
            Some(&self.address_2)
        }
    }

    /// Return the mac address of the receiver.
    /// A full `ff:ff:..` usually indicates a undirected broadcast.
    fn dest(&self) -> &MacAddress {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() && frame_control.from_ds() {
            &self.address_3
        } else if frame_control.to_ds() {
            &self.address_2
        } else if frame_control.from_ds() {
            &self.address_3
        } else {
            &self.address_1
        }
    }

    /// The BSSID for this request.
    /// In most cases, this is expected to be present.
    /// The only time it's not, is in a wireless distributed system (WDS).
    fn bssid(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_1)
        } else if frame_control.from_ds() {
            Some(&self.address_2)
        } else {
            Some(&self.address_3)
        }
    }
}

/// Representation of a data frame header. This format is used by all data frames!
///
/// It's very similar to the format of the management header, but data frames
/// may carry a fourth address when they cross the distribution system in
/// both directions.
///
/// Structure:
///
/// **Bytes 0-1** \
/// Frame control, see [FrameControl].
///
/// **Bytes 2-3** \
/// The duration/id field. Always present.
///
/// **Bytes 4-23** \
/// byte 4-9: Address 1. Always present!
/// byte 10-15: Address 2.
/// byte 16-21: Address 3.
/// byte 22-23: Sequence Control.
/// byte 24-29: Address 4. Exists if and only if both `to_ds` and `from_ds` are set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataHeader {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub address_1: MacAddress,
    pub address_2: MacAddress,
    pub address_3: MacAddress,
    pub sequence_control: SequenceControl,
    pub address_4: Option<MacAddress>,
}

impl DataHeader {
    /// A fresh header for the given addresses: destination, source, bssid.
    /// Both DS flags start cleared, so addr4 is absent.
    pub fn new(
        subtype: FrameSubType,
        destination: MacAddress,
        source: MacAddress,
        bssid: MacAddress,
    ) -> Self {
        DataHeader {
            frame_control: FrameControl::new(subtype),
            duration_id: 0,
            address_1: destination,
            address_2: source,
            address_3: bssid,
            sequence_control: SequenceControl::default(),
            address_4: None,
        }
    }

    /// Whether the frame carries a fourth address. Only the case when the
    /// frame crosses the distribution system in both directions.
    pub fn has_address_4(&self) -> bool {
        self.frame_control.to_ds() && self.frame_control.from_ds()
    }

    /// Header length in bytes, including addr4 when present.
    pub fn size(&self) -> usize {
        if self.has_address_4() {
            30
        } else {
            24
        }
    }

    /// Write the header with the frame control type/subtype forced to the
    /// given canonical subtype.
    pub fn encode(&self, subtype: FrameSubType) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());

        bytes.extend(self.frame_control.encode_as(subtype));
        bytes.extend(self.duration_id.to_le_bytes());
        bytes.extend(self.address_1.encode());
        bytes.extend(self.address_2.encode());
        bytes.extend(self.address_3.encode());
        bytes.extend(self.sequence_control.encode());

        if self.has_address_4() {
            match &self.address_4 {
                Some(address) => bytes.extend(address.encode()),
                None => bytes.extend([0; 6]),
            }
        }

        bytes
    }
}

impl Addresses for DataHeader {
    /// Return the mac address of the sender
    fn src(&self) -> Option<&MacAddress> {
        if self.frame_control.to_ds() && self.frame_control.from_ds() {
            // If both to_ds and from_ds are set, the sender is the forth address.
            self.address_4.as_ref()
        } else if self.frame_control.to_ds() {
            Some(&self.address_2)
        } else if self.frame_control.from_ds() {
            Some(&self.address_3)
        } else {
            Some(&self.address_2)
        }
    }

    /// Return the mac address of the receiver.
    /// A full `ff:ff:..` usually indicates a undirected broadcast.
    fn dest(&self) -> &MacAddress {
        if self.frame_control.to_ds() && self.frame_control.from_ds() {
            &self.address_3
        } else if self.frame_control.to_ds() {
            &self.address_3
        } else {
            &self.address_1
        }
    }

    /// The BSSID for this frame.
    /// In most cases, this is expected to be present.
    /// The only time it's not, is in a wireless distributed system (WDS).
    fn bssid(&self) -> Option<&MacAddress> {
        if self.frame_control.to_ds() && self.frame_control.from_ds() {
            None
        } else if self.frame_control.to_ds() {
            Some(&self.address_1)
        } else if self.frame_control.from_ds() {
            Some(&self.address_2)
        } else {
            Some(&self.address_3)
        }
    }
}
