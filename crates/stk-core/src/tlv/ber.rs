use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::result::ResultException;

use super::comprehension::{ComprehensionTlv, decode_many};
use super::layout;
use super::reader::TlvReader;
use super::tag::ComprehensionTlvTag;

/// Outer BER-TLV envelope tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BerTag {
    /// Bare COMPREHENSION-TLV stream, or an envelope tag this decoder does
    /// not name.
    Unknown,
    ProactiveCommand,
    MenuSelection,
    EventDownload,
}

impl BerTag {
    pub const fn value(self) -> u8 {
        match self {
            BerTag::Unknown => layout::BER_UNKNOWN_TAG,
            BerTag::ProactiveCommand => layout::BER_PROACTIVE_COMMAND_TAG,
            BerTag::MenuSelection => layout::BER_MENU_SELECTION_TAG,
            BerTag::EventDownload => layout::BER_EVENT_DOWNLOAD_TAG,
        }
    }
}

/// A decoded BER-TLV frame.
///
/// `elements` is always populated on success. A proactive command whose
/// declared length disagrees with the size of its elements still decodes,
/// with `is_length_valid()` returning `false`; the caller must answer such a
/// command with a rejection instead of trusting the element boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerTlv<'a> {
    tag: BerTag,
    elements: Vec<ComprehensionTlv<'a>>,
    length_valid: bool,
}

impl<'a> BerTlv<'a> {
    /// Decodes one card-originated command buffer.
    ///
    /// # Examples
    /// ```
    /// use stk_core::{BerTag, BerTlv};
    ///
    /// let frame = BerTlv::decode(&[0xD0, 0x03, 0x81, 0x01, 0x00]).unwrap();
    /// assert_eq!(frame.tag(), BerTag::ProactiveCommand);
    /// assert!(frame.is_length_valid());
    /// assert_eq!(frame.elements().len(), 1);
    /// ```
    pub fn decode(buffer: &'a [u8]) -> Result<Self, ResultException> {
        let mut reader = TlvReader::new(buffer);
        let raw_tag = reader.read_u8()?;

        // Only the proactive-command envelope carries a length field. Other
        // envelopes are decoded from the byte after the tag.
        let (tag, declared) = match raw_tag {
            layout::BER_PROACTIVE_COMMAND_TAG => {
                (BerTag::ProactiveCommand, Some(reader.read_length()?))
            }
            layout::BER_MENU_SELECTION_TAG => (BerTag::MenuSelection, None),
            layout::BER_EVENT_DOWNLOAD_TAG => (BerTag::EventDownload, None),
            _ if raw_tag & layout::TAG_VALUE_MASK
                == ComprehensionTlvTag::CommandDetails.value() =>
            {
                // Some cards send the command without its D0 envelope.
                debug!("no BER-TLV envelope, decoding buffer as bare COMPREHENSION-TLVs");
                reader.rewind();
                (BerTag::Unknown, None)
            }
            _ => {
                debug!(tag = raw_tag, "unrecognized BER-TLV tag, decoding the bytes after it");
                (BerTag::Unknown, None)
            }
        };

        if let Some(length) = declared {
            if reader.remaining() < length {
                return Err(ResultException::cmd_data_not_understood(format!(
                    "declared length {length} exceeds the {} remaining bytes",
                    reader.remaining()
                )));
            }
        }

        let elements = decode_many(buffer, reader.position())?;

        let mut length_valid = true;
        if let Some(length) = declared {
            let encoded = encoded_size(&elements);
            if encoded != Some(length) {
                warn!(
                    declared = length,
                    ?encoded,
                    "proactive command length does not match its elements"
                );
                length_valid = false;
            }
        }

        debug!(?tag, elements = elements.len(), length_valid, "decoded BER-TLV frame");
        Ok(Self {
            tag,
            elements,
            length_valid,
        })
    }

    pub fn tag(&self) -> BerTag {
        self.tag
    }

    pub fn elements(&self) -> &[ComprehensionTlv<'a>] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<ComprehensionTlv<'a>> {
        self.elements
    }

    pub fn is_length_valid(&self) -> bool {
        self.length_valid
    }

    /// First element carrying `tag`.
    pub fn find(&self, tag: ComprehensionTlvTag) -> Option<&ComprehensionTlv<'a>> {
        self.elements.iter().find(|tlv| tlv.is(tag))
    }
}

fn encoded_size(elements: &[ComprehensionTlv<'_>]) -> Option<usize> {
    elements
        .iter()
        .try_fold(0usize, |total, tlv| Some(total + tlv.encoded_len()?))
}
