use serde::{Deserialize, Serialize};

use crate::result::{ResultCode, ResultException};
use crate::tlv::{BerTlv, ComprehensionTlvTag};

use super::details::CommandDetails;
use super::device::DeviceIdentities;
use super::kind::CommandType;

/// The elements every proactive command starts with, resolved from a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHeader {
    pub details: CommandDetails,
    pub device_identities: Option<DeviceIdentities>,
}

impl CommandHeader {
    /// Finds COMMAND DETAILS (mandatory) and DEVICE IDENTITIES (optional).
    ///
    /// A frame without COMMAND DETAILS fails with `CMD_TYPE_NOT_UNDERSTOOD`.
    pub fn locate(frame: &BerTlv<'_>) -> Result<Self, ResultException> {
        let details_tlv = frame.find(ComprehensionTlvTag::CommandDetails).ok_or_else(|| {
            ResultException::new(ResultCode::CmdTypeNotUnderstood)
                .with_explanation("frame has no COMMAND_DETAILS element")
        })?;
        let details = CommandDetails::from_tlv(details_tlv)?;
        let device_identities = frame
            .find(ComprehensionTlvTag::DeviceIdentities)
            .map(DeviceIdentities::from_tlv)
            .transpose()?;

        Ok(Self {
            details,
            device_identities,
        })
    }

    pub fn command_type(&self) -> Option<CommandType> {
        self.details.command_type()
    }
}

#[cfg(test)]
mod tests {
    use super::CommandHeader;
    use crate::command::CommandType;
    use crate::result::ResultCode;
    use crate::tlv::BerTlv;

    #[test]
    fn locate_details_and_devices() {
        let buffer = [
            0xD0, 0x09, 0x81, 0x03, 0x01, 0x25, 0x00, 0x82, 0x02, 0x81, 0x82,
        ];
        let frame = BerTlv::decode(&buffer).unwrap();
        let header = CommandHeader::locate(&frame).unwrap();
        assert_eq!(header.command_type(), Some(CommandType::SetUpMenu));
        assert_eq!(header.device_identities.unwrap().destination, 0x82);
    }

    #[test]
    fn device_identities_optional() {
        let frame = BerTlv::decode(&[0xD0, 0x05, 0x81, 0x03, 0x01, 0x05, 0x00]).unwrap();
        let header = CommandHeader::locate(&frame).unwrap();
        assert_eq!(header.command_type(), Some(CommandType::SetUpEventList));
        assert!(header.device_identities.is_none());
    }

    #[test]
    fn missing_command_details() {
        let frame = BerTlv::decode(&[0xD0, 0x04, 0x82, 0x02, 0x81, 0x82]).unwrap();
        let err = CommandHeader::locate(&frame).unwrap_err();
        assert_eq!(err.code(), ResultCode::CmdTypeNotUnderstood);
    }

    #[test]
    fn malformed_device_identities() {
        let buffer = [0xD0, 0x08, 0x81, 0x03, 0x01, 0x21, 0x00, 0x82, 0x01, 0x81];
        let frame = BerTlv::decode(&buffer).unwrap();
        let err = CommandHeader::locate(&frame).unwrap_err();
        assert_eq!(err.code(), ResultCode::RequiredValuesMissing);
    }
}
