use serde::{Deserialize, Serialize};

use crate::result::ResultException;
use crate::tlv::{ComprehensionTlv, ComprehensionTlvTag};

use super::layout;

/// DEVICE IDENTITIES element: who sent the command and who must act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentities {
    pub source: u8,
    pub destination: u8,
}

impl DeviceIdentities {
    pub fn from_tlv(tlv: &ComprehensionTlv<'_>) -> Result<Self, ResultException> {
        if !tlv.is(ComprehensionTlvTag::DeviceIdentities) {
            return Err(ResultException::cmd_data_not_understood(format!(
                "expected DEVICE_IDENTITIES, got tag 0x{:02X}",
                tlv.tag()
            )));
        }
        let value = tlv.value();
        if value.len() < layout::DEVICE_IDENTITIES_LEN {
            return Err(ResultException::required_values_missing(format!(
                "device identities need {} bytes, got {}",
                layout::DEVICE_IDENTITIES_LEN,
                value.len()
            )));
        }

        Ok(Self {
            source: value[layout::SOURCE_DEVICE_OFFSET],
            destination: value[layout::DESTINATION_DEVICE_OFFSET],
        })
    }

}

#[cfg(test)]
mod tests {
    use super::DeviceIdentities;
    use crate::result::ResultCode;
    use crate::tlv::decode_at;

    #[test]
    fn decode_uicc_to_display() {
        let (tlv, _) = decode_at(&[0x82, 0x02, 0x81, 0x02], 0).unwrap();
        let devices = DeviceIdentities::from_tlv(&tlv).unwrap();
        assert_eq!(devices.source, 0x81);
        assert_eq!(devices.destination, 0x02);
    }

    #[test]
    fn wrong_tag() {
        let (tlv, _) = decode_at(&[0x81, 0x03, 0x01, 0x21, 0x80], 0).unwrap();
        let err = DeviceIdentities::from_tlv(&tlv).unwrap_err();
        assert_eq!(err.code(), ResultCode::CmdDataNotUnderstood);
    }

    #[test]
    fn short_value() {
        let (tlv, _) = decode_at(&[0x82, 0x01, 0x81], 0).unwrap();
        let err = DeviceIdentities::from_tlv(&tlv).unwrap_err();
        assert_eq!(err.code(), ResultCode::RequiredValuesMissing);
    }
}
