pub const COMMAND_NUMBER_OFFSET: usize = 0;
pub const TYPE_OF_COMMAND_OFFSET: usize = 1;
pub const COMMAND_QUALIFIER_OFFSET: usize = 2;
pub const COMMAND_DETAILS_LEN: usize = 3;

pub const SOURCE_DEVICE_OFFSET: usize = 0;
pub const DESTINATION_DEVICE_OFFSET: usize = 1;
pub const DEVICE_IDENTITIES_LEN: usize = 2;
