use crate::constants::STACK_DEPTH;
use crate::error::CoreError;

/// 16 16-bit addresses, used to call subroutines or functions and return from them
/// can go into 16 nested subroutines before stack overflows
#[derive(Debug, Clone, Copy, Default)]
pub struct Stack {
    values: [u16; STACK_DEPTH as usize],
    /// Amount of addresses currently pushed, so 0 through 16
    pointer: u8,
}

impl Stack {
    /// Pushes a return address. `address` is the call site, only used for reporting
    pub fn push(&mut self, value: u16, address: u16) -> Result<(), CoreError> {
        if self.is_full() {
            return Err(CoreError::StackOverflow { address });
        }
        self.values[self.pointer as usize] = value;
        self.pointer += 1;
        Ok(())
    }

    pub fn pop(&mut self, address: u16) -> Result<u16, CoreError> {
        if self.pointer == 0 {
            return Err(CoreError::StackUnderflow { address });
        }
        self.pointer -= 1;
        Ok(self.values[self.pointer as usize])
    }

    pub fn depth(&self) -> u8 {
        self.pointer
    }

    pub fn is_full(&self) -> bool {
        self.pointer >= STACK_DEPTH
    }
}
