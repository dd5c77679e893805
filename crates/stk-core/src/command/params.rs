use std::fmt;

use crate::result::{ResultCode, ResultException};

use super::details::CommandDetails;
use super::kind::CommandType;
use super::payload::CommandPayload;

/// Decoded parameters of one proactive command, handed to the dispatch layer
/// until the TERMINAL RESPONSE is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParams {
    details: CommandDetails,
    icon_load_failed: bool,
    payload: CommandPayload,
}

impl CommandParams {
    /// Pairs the command details with the payload decoded for them.
    ///
    /// Fails with `CMD_TYPE_NOT_UNDERSTOOD` when the details announce a
    /// different command type than the payload carries.
    pub fn new(details: CommandDetails, payload: CommandPayload) -> Result<Self, ResultException> {
        let expected = payload.command_type();
        if details.type_of_command != expected.code() {
            return Err(ResultException::new(ResultCode::CmdTypeNotUnderstood)
                .with_explanation(format!(
                    "details announce type 0x{:02X}, payload is {expected}",
                    details.type_of_command
                )));
        }
        Ok(Self {
            details,
            icon_load_failed: false,
            payload,
        })
    }

    pub fn details(&self) -> &CommandDetails {
        &self.details
    }

    pub fn command_type(&self) -> CommandType {
        self.payload.command_type()
    }

    pub fn payload(&self) -> &CommandPayload {
        &self.payload
    }

    pub fn into_payload(self) -> CommandPayload {
        self.payload
    }

    pub fn icon_load_failed(&self) -> bool {
        self.icon_load_failed
    }

    /// Records that an icon the command asked for could not be loaded; the
    /// terminal then answers with `PRFRMD_ICON_NOT_DISPLAYED`.
    pub fn mark_icon_load_failed(&mut self) {
        self.icon_load_failed = true;
    }
}

impl fmt::Display for CommandParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.command_type(), self.details)?;
        if self.icon_load_failed {
            f.write_str(", icon load failed")?;
        }
        Ok(())
    }
}
