pub const BER_PROACTIVE_COMMAND_TAG: u8 = 0xD0;
pub const BER_MENU_SELECTION_TAG: u8 = 0xD3;
pub const BER_EVENT_DOWNLOAD_TAG: u8 = 0xD6;
pub const BER_UNKNOWN_TAG: u8 = 0x00;

pub const COMPREHENSION_REQUIRED_FLAG: u8 = 0x80;
pub const TAG_VALUE_MASK: u8 = 0x7F;

/// Tag bytes that never start a single-byte COMPREHENSION-TLV.
pub const RESERVED_TAGS: [u8; 3] = [0x00, 0x80, 0xFF];
/// Introduces the three-byte tag form, which this profile does not accept.
pub const THREE_BYTE_TAG_MARKER: u8 = 0x7F;

pub const SHORT_LENGTH_MAX: u8 = 0x7F;
pub const LONG_LENGTH_ONE_BYTE: u8 = 0x81;
pub const LONG_LENGTH_MIN: u8 = 0x80;
pub const LONG_LENGTH_MAX: usize = 0xFF;

pub const SHORT_FORM_OVERHEAD: usize = 2;
pub const LONG_FORM_OVERHEAD: usize = 3;
