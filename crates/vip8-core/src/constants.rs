/// The width of the display in pixels
pub const DISPLAY_WIDTH: u8 = 64;
/// The height of the display in pixels
pub const DISPLAY_HEIGHT: u8 = 32;
/// The size of ram in bytes
pub const RAM_SIZE: u16 = 4096;
/// Highest addressable byte
pub const MAX_ADDRESS: u16 = RAM_SIZE - 1;
/// For the regular chip 8 roms
pub const ROM_START_ADDRESS: u16 = 0x200;
/// Largest rom that fits between the start address and the end of ram
pub const MAX_ROM_SIZE: usize = (RAM_SIZE - ROM_START_ADDRESS) as usize;
/// The built in font lives at the very start of ram
pub const FONT_START_ADDRESS: u16 = 0x000;
/// Every glyph is 4 pixels wide and 5 rows high, one byte per row
pub const GLYPH_SIZE: u8 = 5;
/// Amount of registers CHIP-8 has
pub const NUM_REGISTERS: u8 = 16;
/// Amount of keys on the hexadecimal keypad
pub const NUM_KEYS: u8 = 16;
/// Maximum amount of nested subroutine calls
pub const STACK_DEPTH: u8 = 16;
/// Register VF, used as carry, borrow and collision flag
pub const FLAG_REGISTER: u8 = 0xF;

/// The fontset, one glyph per hexadecimal digit.
/// Write the bytes out in binary below one another and the ones form the digit:
///
/// ```text
/// 0xF0  1111
/// 0x90  1  1
/// 0x90  1  1
/// 0x90  1  1
/// 0xF0  1111
/// ```
pub const FONT: [u8; 16 * GLYPH_SIZE as usize] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // a
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // b
    0xF0, 0x80, 0x80, 0x80, 0xF0, // c
    0xE0, 0x90, 0x90, 0x90, 0xE0, // d
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // e
    0xF0, 0x80, 0xF0, 0x80, 0x80, // f
];
