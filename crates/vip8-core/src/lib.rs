//! The core of the vip8 interpreter: a CHIP-8 virtual machine with no opinion
//! on how it gets displayed, timed or fed with input. Hosts create an
//! [`Interpreter`], [`load`](Interpreter::load) a rom and call
//! [`step`](Interpreter::step) in a loop.

///Settings that survive a reset, like the random seed
mod config;
///This holds all of the constants (written in capital letters in the code)
mod constants;
///Everything that can go wrong while loading or running a program
mod error;
///The 64x32 screen
mod framebuffer;
///An overview of all instructions in the chip 8 instruction set architecture
mod instruction;
///Handles the fetch, decode execute cycle
mod interpreter;
///The sixteen key hex keypad
mod keypad;
///A data structure modeling ram
mod memory;
///The registers for the chip8 cpu
mod registers;
///The stack that is used in the cpu
mod stack;

// Re-export structs and modules that might be used by hosts
pub use config::{Config, Seed};
pub use constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT, FONT_START_ADDRESS, GLYPH_SIZE, MAX_ROM_SIZE, NUM_KEYS,
    NUM_REGISTERS, RAM_SIZE, ROM_START_ADDRESS, STACK_DEPTH,
};
pub use error::{CoreError, RomTooLarge};
pub use framebuffer::Framebuffer;
pub use instruction::Instruction;
pub use interpreter::Interpreter;
