pub const SIGNATURE_OFFSET: usize = 0;

pub const SIGNATURE_Z64: u8 = 0x80;
pub const SIGNATURE_V64: u8 = 0x37;
pub const SIGNATURE_N64: u8 = 0x40;

pub const V64_UNIT: usize = 2;
pub const N64_UNIT: usize = 4;

pub const CANONICAL_MAGIC: [u8; 4] = [0x80, 0x37, 0x12, 0x40];

pub const HEADER_LEN: usize = 0x40;
pub const PI_CONFIG_OFFSET: usize = 0x00;
pub const CLOCK_RATE_OFFSET: usize = 0x04;
pub const ENTRY_POINT_OFFSET: usize = 0x08;
pub const RELEASE_OFFSET: usize = 0x0C;
pub const CRC1_OFFSET: usize = 0x10;
pub const CRC2_OFFSET: usize = 0x14;
pub const TITLE_RANGE: std::ops::Range<usize> = 0x20..0x34;
pub const GAME_CODE_RANGE: std::ops::Range<usize> = 0x3B..0x3F;
pub const VERSION_OFFSET: usize = 0x3F;
