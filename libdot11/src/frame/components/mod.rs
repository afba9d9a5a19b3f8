mod capability_info;
mod frame_control;
mod header;
mod mac_address;
mod rsn_information;
mod sequence_control;
mod tagged_options;

pub use capability_info::CapabilityInformation;
pub use frame_control::FrameControl;
pub use header::*;
pub use mac_address::*;
pub use rsn_information::{RsnAkmSuite, RsnCipherSuite, RsnInformation};
pub use sequence_control::SequenceControl;
pub use tagged_options::{OptionId, TaggedOption, TaggedOptions};
