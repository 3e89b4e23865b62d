pub const WIDTH_8: usize = 1;
pub const WIDTH_16: usize = 2;
pub const WIDTH_32: usize = 4;
pub const WIDTH_64: usize = 8;
