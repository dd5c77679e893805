use serde::{Deserialize, Serialize};

use super::layout;
use super::reader::IconReader;

/// Image coding scheme byte of an image descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageCodingScheme {
    Basic,
    Colour,
    /// Any other value, kept as received.
    Other(u8),
}

impl ImageCodingScheme {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            layout::CODING_SCHEME_BASIC => ImageCodingScheme::Basic,
            layout::CODING_SCHEME_COLOUR => ImageCodingScheme::Colour,
            other => ImageCodingScheme::Other(other),
        }
    }

    pub fn value(self) -> u8 {
        match self {
            ImageCodingScheme::Basic => layout::CODING_SCHEME_BASIC,
            ImageCodingScheme::Colour => layout::CODING_SCHEME_COLOUR,
            ImageCodingScheme::Other(other) => other,
        }
    }
}

/// Fixed 9-byte header describing one icon image instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub width: u8,
    pub height: u8,
    pub coding_scheme: ImageCodingScheme,
    pub image_id: u16,
    pub file_offset_high: u8,
    pub file_offset_low: u8,
    pub length: u16,
}

impl ImageDescriptor {
    /// Parses the descriptor starting at `offset`.
    ///
    /// Returns `None` when fewer than nine bytes are available; a missing icon
    /// never aborts decoding of the surrounding command.
    ///
    /// # Examples
    /// ```
    /// use stk_core::{ImageCodingScheme, ImageDescriptor};
    ///
    /// let raw = [0x08, 0x08, 0x11, 0x4F, 0x01, 0x00, 0x00, 0x00, 0x0A];
    /// let descriptor = ImageDescriptor::parse(&raw, 0).unwrap();
    /// assert_eq!(descriptor.coding_scheme, ImageCodingScheme::Basic);
    /// assert_eq!(descriptor.image_id, 0x4F01);
    /// assert!(ImageDescriptor::parse(&raw, 1).is_none());
    /// ```
    pub fn parse(buffer: &[u8], offset: usize) -> Option<Self> {
        let reader = IconReader::new(buffer, offset);
        reader.require_len(layout::DESCRIPTOR_LEN)?;

        Some(Self {
            width: reader.read_u8(layout::WIDTH_OFFSET)?,
            height: reader.read_u8(layout::HEIGHT_OFFSET)?,
            coding_scheme: ImageCodingScheme::from_byte(
                reader.read_u8(layout::CODING_SCHEME_OFFSET)?,
            ),
            image_id: reader.read_u16_be(layout::IMAGE_ID_RANGE.clone())?,
            file_offset_high: reader.read_u8(layout::FILE_OFFSET_HIGH_OFFSET)?,
            file_offset_low: reader.read_u8(layout::FILE_OFFSET_LOW_OFFSET)?,
            length: reader.read_u16_be(layout::LENGTH_RANGE.clone())?,
        })
    }

    /// Parses the image instances of an EF(IMG) record.
    ///
    /// Stops at the first instance that cannot be read in full.
    pub fn parse_record(record: &[u8]) -> Vec<Self> {
        let Some(count) = record.get(layout::RECORD_COUNT_OFFSET).copied() else {
            return Vec::new();
        };
        (0..count as usize)
            .map(|index| layout::RECORD_FIRST_DESCRIPTOR_OFFSET + index * layout::DESCRIPTOR_LEN)
            .map_while(|offset| Self::parse(record, offset))
            .collect()
    }

    /// Offset of the image body inside its EF(IIDF) file.
    pub fn file_offset(&self) -> u16 {
        u16::from_be_bytes([self.file_offset_high, self.file_offset_low])
    }
}
