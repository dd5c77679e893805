pub const WIDTH_OFFSET: usize = 0;
pub const HEIGHT_OFFSET: usize = 1;
pub const CODING_SCHEME_OFFSET: usize = 2;
pub const IMAGE_ID_RANGE: std::ops::Range<usize> = 3..5;
pub const FILE_OFFSET_HIGH_OFFSET: usize = 5;
pub const FILE_OFFSET_LOW_OFFSET: usize = 6;
pub const LENGTH_RANGE: std::ops::Range<usize> = 7..9;

pub const DESCRIPTOR_LEN: usize = 9;

pub const CODING_SCHEME_BASIC: u8 = 0x11;
pub const CODING_SCHEME_COLOUR: u8 = 0x21;

/// EF(IMG) record: instance count, then the descriptors.
pub const RECORD_COUNT_OFFSET: usize = 0;
pub const RECORD_FIRST_DESCRIPTOR_OFFSET: usize = 1;

pub const ICON_QUALIFIER_OFFSET: usize = 0;
pub const ICON_RECORD_NUMBER_OFFSET: usize = 1;
pub const ICON_NOT_SELF_EXPLANATORY: u8 = 0x01;
