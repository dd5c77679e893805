use crate::result::ResultException;

use super::layout;
use super::reader::TlvReader;
use super::tag::ComprehensionTlvTag;

/// One COMPREHENSION-TLV element borrowed from the command buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComprehensionTlv<'a> {
    tag: u8,
    comprehension_required: bool,
    value: &'a [u8],
}

impl<'a> ComprehensionTlv<'a> {
    /// Tag value with the comprehension-required bit cleared (0..=127).
    pub fn tag(&self) -> u8 {
        self.tag
    }

    pub fn known_tag(&self) -> Option<ComprehensionTlvTag> {
        ComprehensionTlvTag::from_value(self.tag)
    }

    pub fn is(&self, tag: ComprehensionTlvTag) -> bool {
        self.tag == tag.value()
    }

    pub fn comprehension_required(&self) -> bool {
        self.comprehension_required
    }

    pub fn length(&self) -> usize {
        self.value.len()
    }

    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// On-wire size of this element: one tag byte, the length field and the
    /// value. `None` when the length cannot be expressed in this profile.
    pub fn encoded_len(&self) -> Option<usize> {
        match self.length() {
            len @ 0..=0x7F => Some(len + layout::SHORT_FORM_OVERHEAD),
            len @ 0x80..=layout::LONG_LENGTH_MAX => Some(len + layout::LONG_FORM_OVERHEAD),
            _ => None,
        }
    }

    /// Decodes the element at the reader's position and advances past it.
    pub fn decode(reader: &mut TlvReader<'a>) -> Result<Self, ResultException> {
        let start = reader.position();
        let raw_tag = reader.read_u8()?;
        if layout::RESERVED_TAGS.contains(&raw_tag) {
            return Err(ResultException::cmd_data_not_understood(format!(
                "reserved tag 0x{raw_tag:02X} at offset {start}"
            )));
        }
        if raw_tag == layout::THREE_BYTE_TAG_MARKER {
            return Err(ResultException::cmd_data_not_understood(format!(
                "three-byte tag form at offset {start}"
            )));
        }

        let length = reader.read_length()?;
        let value = reader.read_value(length)?;

        Ok(Self {
            tag: raw_tag & layout::TAG_VALUE_MASK,
            comprehension_required: raw_tag & layout::COMPREHENSION_REQUIRED_FLAG != 0,
            value,
        })
    }
}

/// Decodes the single element starting at `offset`.
///
/// Returns the element and the offset just past it.
pub fn decode_at(
    buffer: &[u8],
    offset: usize,
) -> Result<(ComprehensionTlv<'_>, usize), ResultException> {
    let mut reader = TlvReader::at(buffer, offset);
    let tlv = ComprehensionTlv::decode(&mut reader)?;
    Ok((tlv, reader.position()))
}

/// Decodes every element from `start` to the end of `buffer`.
///
/// Succeeds only when the elements consume the range exactly.
pub fn decode_many(
    buffer: &[u8],
    start: usize,
) -> Result<Vec<ComprehensionTlv<'_>>, ResultException> {
    if start > buffer.len() {
        return Err(ResultException::required_values_missing(format!(
            "start offset {start} past end of {} byte buffer",
            buffer.len()
        )));
    }

    let mut reader = TlvReader::at(buffer, start);
    let mut items = Vec::new();
    while reader.has_remaining() {
        items.push(ComprehensionTlv::decode(&mut reader)?);
    }
    Ok(items)
}
