use serde::{Deserialize, Serialize};

use crate::result::ResultException;
use crate::tlv::{ComprehensionTlv, ComprehensionTlvTag};

use super::layout;
use super::reader::IconReader;

/// ICON IDENTIFIER element: which EF(IMG) record to show and whether the
/// icon replaces the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconId {
    pub self_explanatory: bool,
    pub record_number: u8,
}

impl IconId {
    pub fn from_tlv(tlv: &ComprehensionTlv<'_>) -> Result<Self, ResultException> {
        if !tlv.is(ComprehensionTlvTag::IconId) {
            return Err(ResultException::cmd_data_not_understood(format!(
                "expected ICON_ID, got tag 0x{:02X}",
                tlv.tag()
            )));
        }
        let reader = IconReader::new(tlv.value(), 0);
        let (Some(qualifier), Some(record_number)) = (
            reader.read_u8(layout::ICON_QUALIFIER_OFFSET),
            reader.read_u8(layout::ICON_RECORD_NUMBER_OFFSET),
        ) else {
            return Err(ResultException::required_values_missing(format!(
                "icon identifier needs 2 bytes, got {}",
                tlv.length()
            )));
        };

        Ok(Self {
            self_explanatory: qualifier & layout::ICON_NOT_SELF_EXPLANATORY == 0,
            record_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::IconId;
    use crate::result::ResultCode;
    use crate::tlv::decode_at;

    #[test]
    fn self_explanatory_icon() {
        let (tlv, _) = decode_at(&[0x9E, 0x02, 0x00, 0x01], 0).unwrap();
        let icon = IconId::from_tlv(&tlv).unwrap();
        assert!(icon.self_explanatory);
        assert_eq!(icon.record_number, 1);
    }

    #[test]
    fn icon_shown_with_text() {
        let (tlv, _) = decode_at(&[0x1E, 0x02, 0x01, 0x05], 0).unwrap();
        let icon = IconId::from_tlv(&tlv).unwrap();
        assert!(!icon.self_explanatory);
        assert_eq!(icon.record_number, 5);
    }

    #[test]
    fn short_value() {
        let (tlv, _) = decode_at(&[0x9E, 0x01, 0x00], 0).unwrap();
        let err = IconId::from_tlv(&tlv).unwrap_err();
        assert_eq!(err.code(), ResultCode::RequiredValuesMissing);
    }

    #[test]
    fn wrong_tag() {
        let (tlv, _) = decode_at(&[0x8D, 0x02, 0x00, 0x01], 0).unwrap();
        let err = IconId::from_tlv(&tlv).unwrap_err();
        assert_eq!(err.code(), ResultCode::CmdDataNotUnderstood);
    }
}
