use crate::error::Error;

/// Element ids of the tagged options handled by this library.
///
/// The values are the tag numbers assigned by IEEE 802.11-2007.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OptionId {
    Ssid = 0,
    SupportedRates = 1,
    FhParameterSet = 2,
    DsParameterSet = 3,
    CfParameterSet = 4,
    Tim = 5,
    IbssParameterSet = 6,
    Country = 7,
    HoppingPatternParameters = 8,
    HoppingPatternTable = 9,
    Request = 10,
    BssLoad = 11,
    EdcaParameterSet = 12,
    ChallengeText = 16,
    PowerConstraint = 32,
    PowerCapability = 33,
    TpcReport = 35,
    ChannelSwitch = 37,
    Quiet = 40,
    IbssDfs = 41,
    ErpInformation = 42,
    QosCapability = 46,
    Rsn = 48,
    ExtendedSupportedRates = 50,
}

impl From<OptionId> for u8 {
    fn from(id: OptionId) -> u8 {
        id as u8
    }
}

/// A single `(tag, value)` pair from a management frame body.
///
/// The value is owned by the option; the single length byte on the wire
/// limits it to 255 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedOption {
    pub id: u8,
    pub value: Vec<u8>,
}

/// The ordered tagged-option chain of a management frame.
///
/// Options keep their insertion order when serialized and duplicates are
/// legal (the standard allows repeated elements for some ids), which is why
/// this is a plain vector rather than a map. Lookup returns the first match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaggedOptions {
    options: Vec<TaggedOption>,
}

impl TaggedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new option. The value is copied.
    pub fn add(&mut self, id: impl Into<u8>, value: &[u8]) -> Result<(), Error> {
        if value.len() > 255 {
            return Err(Error::OptionTooLong(value.len()));
        }

        self.options.push(TaggedOption {
            id: id.into(),
            value: value.to_vec(),
        });

        Ok(())
    }

    /// Replace the first option with this id, or append if there is none.
    /// This is what the typed information-element helpers use.
    pub fn set(&mut self, id: impl Into<u8>, value: &[u8]) -> Result<(), Error> {
        if value.len() > 255 {
            return Err(Error::OptionTooLong(value.len()));
        }

        let id = id.into();
        match self.options.iter_mut().find(|option| option.id == id) {
            Some(option) => option.value = value.to_vec(),
            None => self.options.push(TaggedOption {
                id,
                value: value.to_vec(),
            }),
        }

        Ok(())
    }

    /// The value of the first option with this id.
    pub fn find(&self, id: impl Into<u8>) -> Option<&[u8]> {
        let id = id.into();
        self.options
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.value.as_slice())
    }

    /// Total number of bytes the chain occupies on the wire.
    pub fn serialized_size(&self) -> usize {
        self.options
            .iter()
            .map(|option| 2 + option.value.len())
            .sum()
    }

    /// Write the chain as `id | length | value` in insertion order.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_size());

        for option in &self.options {
            bytes.push(option.id);
            bytes.push(option.value.len() as u8);
            bytes.extend_from_slice(&option.value);
        }

        bytes
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaggedOption> {
        self.options.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }
}
