use crate::constants::{FONT, FONT_START_ADDRESS, MAX_ADDRESS, RAM_SIZE};
use crate::error::CoreError;

///The ram of the chip8 cpu, uses big endian, and is laid out in the following way:
///0x000 to 0x04f the fontset
///0x050 to 0x1ff reserved, always zero
///0x200 start of chip-8 programs
///0xfff end of chip8 ram
#[derive(Debug, Clone)]
pub struct Memory {
    bytes: [u8; RAM_SIZE as usize],
}

impl Memory {
    /// Returns zeroed ram with the fontset already loaded
    pub fn with_font() -> Self {
        let mut memory = Self {
            bytes: [0; RAM_SIZE as usize],
        };
        let start = FONT_START_ADDRESS as usize;
        memory.bytes[start..start + FONT.len()].copy_from_slice(&FONT);
        memory
    }

    fn check(address: u16) -> Result<usize, CoreError> {
        if address > MAX_ADDRESS {
            return Err(CoreError::MemoryOutOfBounds { address });
        }
        Ok(address as usize)
    }

    /// Fails unless every address in `start..start + len` is inside ram
    pub fn check_range(start: u16, len: u16) -> Result<(), CoreError> {
        if len == 0 {
            return Ok(());
        }
        match start.checked_add(len - 1) {
            Some(last) => Self::check(last).map(|_| ()),
            None => Err(CoreError::MemoryOutOfBounds { address: u16::MAX }),
        }
    }

    pub fn read_byte(&self, address: u16) -> Result<u8, CoreError> {
        Ok(self.bytes[Self::check(address)?])
    }

    pub fn write_byte(&mut self, address: u16, value: u8) -> Result<(), CoreError> {
        self.bytes[Self::check(address)?] = value;
        Ok(())
    }

    /// Reads the two bytes at `address` and `address + 1` as one big endian opcode
    pub fn read_word(&self, address: u16) -> Result<u16, CoreError> {
        Self::check_range(address, 2)?;
        let hi = self.bytes[address as usize];
        let lo = self.bytes[address as usize + 1];
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Copies `data` into ram starting at `offset`, all or nothing
    pub fn load(&mut self, offset: u16, data: &[u8]) -> Result<(), CoreError> {
        let len = u16::try_from(data.len())
            .map_err(|_| CoreError::MemoryOutOfBounds { address: u16::MAX })?;
        Self::check_range(offset, len)?;
        let start = offset as usize;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::with_font()
    }
}
