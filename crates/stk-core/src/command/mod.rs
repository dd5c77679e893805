//! Command model: type codes, header elements and per-command parameters.
//!
//! `CommandType::from_code` is a total lookup; unknown codes are `None` and
//! the dispatch layer decides how to answer them. `CommandParams` pairs the
//! mandatory command details with a `CommandPayload`, a tagged union with one
//! variant per command type.

pub mod details;
pub mod device;
pub mod header;
pub mod kind;
pub mod layout;
pub mod params;
pub mod payload;

pub use details::CommandDetails;
pub use device::DeviceIdentities;
pub use header::CommandHeader;
pub use kind::CommandType;
pub use params::CommandParams;
pub use payload::{
    ChannelActivity, CommandPayload, InputRequest, LaunchBrowserMode, Menu, MenuItem, TextMessage,
};
