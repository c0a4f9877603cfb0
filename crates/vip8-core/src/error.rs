use thiserror::Error;

/// Returned by `Interpreter::load` when a rom does not fit in program space.
/// The interpreter is left freshly reset, without any of the rom copied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rom is too large ({size} bytes), max size is {max_size} bytes")]
pub struct RomTooLarge {
    pub size: usize,
    pub max_size: usize,
}

/// Everything that can go wrong while executing a single cycle.
///
/// None of these are recovered from by the interpreter itself. When `step`
/// returns one of them the state is exactly as it was before the call, so the
/// host is free to halt, reload, or poke at the state and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown opcode {opcode:#06X} at {address:#05X}")]
    UnknownOpcode { opcode: u16, address: u16 },

    #[error("stack overflow: call at {address:#05X} exceeds 16 nested subroutines")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return at {address:#05X} with an empty call stack")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: u16 },
}
