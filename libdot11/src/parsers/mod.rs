mod components;
mod frame_types;

pub use components::*;
pub use frame_types::*;
