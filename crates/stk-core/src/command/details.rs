use std::fmt;

use serde::{Deserialize, Serialize};

use crate::result::ResultException;
use crate::tlv::{ComprehensionTlv, ComprehensionTlvTag};

use super::kind::CommandType;
use super::layout;

/// COMMAND DETAILS element, the mandatory first element of every proactive
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDetails {
    pub comprehension_required: bool,
    pub command_number: u8,
    pub type_of_command: u8,
    pub command_qualifier: u8,
}

impl CommandDetails {
    pub fn from_tlv(tlv: &ComprehensionTlv<'_>) -> Result<Self, ResultException> {
        if !tlv.is(ComprehensionTlvTag::CommandDetails) {
            return Err(ResultException::cmd_data_not_understood(format!(
                "expected COMMAND_DETAILS, got tag 0x{:02X}",
                tlv.tag()
            )));
        }
        let value = tlv.value();
        if value.len() < layout::COMMAND_DETAILS_LEN {
            return Err(ResultException::cmd_data_not_understood(format!(
                "command details need {} bytes, got {}",
                layout::COMMAND_DETAILS_LEN,
                value.len()
            )));
        }

        Ok(Self {
            comprehension_required: tlv.comprehension_required(),
            command_number: value[layout::COMMAND_NUMBER_OFFSET],
            type_of_command: value[layout::TYPE_OF_COMMAND_OFFSET],
            command_qualifier: value[layout::COMMAND_QUALIFIER_OFFSET],
        })
    }

    pub fn command_type(&self) -> Option<CommandType> {
        CommandType::from_code(self.type_of_command)
    }
}

impl fmt::Display for CommandDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "command details: number {}, type 0x{:02X}",
            self.command_number, self.type_of_command
        )?;
        if let Some(kind) = self.command_type() {
            write!(f, " ({kind})")?;
        }
        write!(
            f,
            ", qualifier 0x{:02X}, comprehension required {}",
            self.command_qualifier, self.comprehension_required
        )
    }
}

#[cfg(test)]
mod tests {
    use super::CommandDetails;
    use crate::command::CommandType;
    use crate::result::ResultCode;
    use crate::tlv::decode_at;

    #[test]
    fn decode_display_text_details() {
        let (tlv, _) = decode_at(&[0x81, 0x03, 0x01, 0x21, 0x80], 0).unwrap();
        let details = CommandDetails::from_tlv(&tlv).unwrap();
        assert!(details.comprehension_required);
        assert_eq!(details.command_number, 1);
        assert_eq!(details.type_of_command, 0x21);
        assert_eq!(details.command_qualifier, 0x80);
        assert_eq!(details.command_type(), Some(CommandType::DisplayText));
    }

    #[test]
    fn unknown_type_is_not_an_error() {
        let (tlv, _) = decode_at(&[0x81, 0x03, 0x01, 0xFF, 0x00], 0).unwrap();
        let details = CommandDetails::from_tlv(&tlv).unwrap();
        assert_eq!(details.command_type(), None);
    }

    #[test]
    fn short_value() {
        let (tlv, _) = decode_at(&[0x81, 0x02, 0x01, 0x21], 0).unwrap();
        let err = CommandDetails::from_tlv(&tlv).unwrap_err();
        assert_eq!(err.code(), ResultCode::CmdDataNotUnderstood);
    }

    #[test]
    fn display_names_known_type() {
        let (tlv, _) = decode_at(&[0x81, 0x03, 0x02, 0x25, 0x00], 0).unwrap();
        let details = CommandDetails::from_tlv(&tlv).unwrap();
        let text = details.to_string();
        assert!(text.contains("number 2"));
        assert!(text.contains("SET_UP_MENU"));
    }
}
