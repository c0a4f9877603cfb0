use std::fmt;

/// # A list of every instruction in the chip8 language
/// ## nnn
/// a hexadecimal memory address, it's 12 bits long
/// ## kk
/// a hexadecimal byte, 8 bits
/// ## n
/// a "nibble" 4 bits
/// ## x and y
/// Registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Turns all the pixels off
    ClearScreen, //00e0
    /// Pops the return address off the stack and continues after the call
    ReturnFromSubroutine, //00ee
    /// Sets the program counter to whatever nnn is
    Jump { nnn: u16 }, //1nnn
    /// Pushes the address of this instruction and jumps to nnn
    CallSubroutineAtNNN { nnn: u16 }, //2nnn
    SkipNextInstructionIfXIsKK { x: u8, kk: u8 }, //3xkk
    SkipNextInstructionIfXIsNotKK { x: u8, kk: u8 }, //4xkk
    SkipNextInstructionIfXIsY { x: u8, y: u8 }, //5xy0
    /// Set register x to the value kk
    LoadRegisterX { x: u8, kk: u8 }, //6xkk
    /// Adds the value kk to register x, no carry
    AddToRegisterX { x: u8, kk: u8 }, //7xkk
    /// Stores the value of register y in register x
    LoadRegisterYIntoX { x: u8, y: u8 }, //8xy0
    LoadXOrYInX { x: u8, y: u8 },  //8xy1
    LoadXAndYInX { x: u8, y: u8 }, //8xy2
    LoadXXorYInX { x: u8, y: u8 }, //8xy3
    /// vx + vy, vf is the carry
    AddYToX { x: u8, y: u8 }, //8xy4
    /// vx - vy, vf is 1 when there was no borrow
    SubYFromX { x: u8, y: u8 }, //8xy5
    /// shift the value of register x one bit to the right, vf is the bit shifted out.
    /// y is decoded but unused
    ShiftXRight1 { x: u8, y: u8 }, //8xy6
    /// vy - vx, vf is 1 when there was no borrow
    SubXFromY { x: u8, y: u8 }, //8xy7
    /// shift the value of register x one bit to the left, vf is the bit shifted out.
    /// y is decoded but unused
    ShiftXLeft1 { x: u8, y: u8 }, //8xyE
    SkipNextInstructionIfXIsNotY { x: u8, y: u8 }, //9xy0
    SetIndexRegister { nnn: u16 },                 //annn
    JumpToAddressPlusV0 { nnn: u16 },              //bnnn
    SetXToRandom { x: u8, kk: u8 },                //cxkk
    /// draws an 8 pixel wide, n rows high sprite from memory at I at (vx, vy)
    Display { x: u8, y: u8, n: u8 }, //dxyn
    SkipIfVxPressed { x: u8 },       //ex9e
    SkipIfVxNotPressed { x: u8 },    //exa1
    SetXToDelayTimer { x: u8 },      //fx07
    /// Blocks until a key is down, by not advancing the program counter
    WaitForKeyPressed { x: u8 }, //fx0a
    SetDelayTimerToX { x: u8 },  //fx15
    SetSoundTimerToX { x: u8 },  //fx18
    AddXToI { x: u8 },           //fx1e
    /// Points I at the font glyph for the digit in vx
    SetIToSpriteX { x: u8 }, //fx29
    LoadBCDOfX { x: u8 },    //fx33
    Write0ThroughX { x: u8 }, //fx55
    Load0ThroughX { x: u8 },  //fx65
}

impl Instruction {
    /// Takes two bytes, and decodes what instruction they represent.
    /// Returns `None` for anything that is not part of the instruction set
    pub fn decode(opcode: u16) -> Option<Self> {
        let x = Self::get_nibble(opcode, 1);
        let y = Self::get_nibble(opcode, 2);
        let n = Self::get_nibble(opcode, 3);
        let kk = Self::last_byte(opcode);
        let nnn = Self::oxxx(opcode);

        let instruction = match Self::get_nibble(opcode, 0) {
            0x0 => match opcode {
                0x00E0 => Instruction::ClearScreen,
                0x00EE => Instruction::ReturnFromSubroutine,
                _ => return None,
            },
            0x1 => Instruction::Jump { nnn },
            0x2 => Instruction::CallSubroutineAtNNN { nnn },
            0x3 => Instruction::SkipNextInstructionIfXIsKK { x, kk },
            0x4 => Instruction::SkipNextInstructionIfXIsNotKK { x, kk },
            0x5 if n == 0 => Instruction::SkipNextInstructionIfXIsY { x, y },
            0x6 => Instruction::LoadRegisterX { x, kk },
            0x7 => Instruction::AddToRegisterX { x, kk },
            0x8 => match n {
                0x0 => Instruction::LoadRegisterYIntoX { x, y },
                0x1 => Instruction::LoadXOrYInX { x, y },
                0x2 => Instruction::LoadXAndYInX { x, y },
                0x3 => Instruction::LoadXXorYInX { x, y },
                0x4 => Instruction::AddYToX { x, y },
                0x5 => Instruction::SubYFromX { x, y },
                0x6 => Instruction::ShiftXRight1 { x, y },
                0x7 => Instruction::SubXFromY { x, y },
                0xE => Instruction::ShiftXLeft1 { x, y },
                _ => return None,
            },
            0x9 if n == 0 => Instruction::SkipNextInstructionIfXIsNotY { x, y },
            0xA => Instruction::SetIndexRegister { nnn },
            0xB => Instruction::JumpToAddressPlusV0 { nnn },
            0xC => Instruction::SetXToRandom { x, kk },
            0xD => Instruction::Display { x, y, n },
            0xE => match kk {
                0x9E => Instruction::SkipIfVxPressed { x },
                0xA1 => Instruction::SkipIfVxNotPressed { x },
                _ => return None,
            },
            0xF => match kk {
                0x07 => Instruction::SetXToDelayTimer { x },
                0x0A => Instruction::WaitForKeyPressed { x },
                0x15 => Instruction::SetDelayTimerToX { x },
                0x18 => Instruction::SetSoundTimerToX { x },
                0x1E => Instruction::AddXToI { x },
                0x29 => Instruction::SetIToSpriteX { x },
                0x33 => Instruction::LoadBCDOfX { x },
                0x55 => Instruction::Write0ThroughX { x },
                0x65 => Instruction::Load0ThroughX { x },
                _ => return None,
            },
            _ => return None,
        };
        Some(instruction)
    }

    /// A nibble is 4 bits, nth 0 is the most significant one
    fn get_nibble(opcode: u16, nth: u8) -> u8 {
        ((opcode >> (12 - 4 * nth)) & 0xf) as u8
    }
    /// Returns the last full byte byte of an opcode
    fn last_byte(opcode: u16) -> u8 {
        (opcode & 0xff) as u8
    }
    /// Returns the the last 12 bits of an opcode
    fn oxxx(opcode: u16) -> u16 {
        opcode & 0xfff
    }
}

/// Assembler style mnemonics, mostly used when tracing execution
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::ClearScreen => write!(f, "CLS"),
            Instruction::ReturnFromSubroutine => write!(f, "RET"),
            Instruction::Jump { nnn } => write!(f, "JP {nnn:#05X}"),
            Instruction::CallSubroutineAtNNN { nnn } => write!(f, "CALL {nnn:#05X}"),
            Instruction::SkipNextInstructionIfXIsKK { x, kk } => write!(f, "SE V{x:X}, {kk:#04X}"),
            Instruction::SkipNextInstructionIfXIsNotKK { x, kk } => {
                write!(f, "SNE V{x:X}, {kk:#04X}")
            }
            Instruction::SkipNextInstructionIfXIsY { x, y } => write!(f, "SE V{x:X}, V{y:X}"),
            Instruction::LoadRegisterX { x, kk } => write!(f, "LD V{x:X}, {kk:#04X}"),
            Instruction::AddToRegisterX { x, kk } => write!(f, "ADD V{x:X}, {kk:#04X}"),
            Instruction::LoadRegisterYIntoX { x, y } => write!(f, "LD V{x:X}, V{y:X}"),
            Instruction::LoadXOrYInX { x, y } => write!(f, "OR V{x:X}, V{y:X}"),
            Instruction::LoadXAndYInX { x, y } => write!(f, "AND V{x:X}, V{y:X}"),
            Instruction::LoadXXorYInX { x, y } => write!(f, "XOR V{x:X}, V{y:X}"),
            Instruction::AddYToX { x, y } => write!(f, "ADD V{x:X}, V{y:X}"),
            Instruction::SubYFromX { x, y } => write!(f, "SUB V{x:X}, V{y:X}"),
            Instruction::ShiftXRight1 { x, y } => write!(f, "SHR V{x:X}, V{y:X}"),
            Instruction::SubXFromY { x, y } => write!(f, "SUBN V{x:X}, V{y:X}"),
            Instruction::ShiftXLeft1 { x, y } => write!(f, "SHL V{x:X}, V{y:X}"),
            Instruction::SkipNextInstructionIfXIsNotY { x, y } => {
                write!(f, "SNE V{x:X}, V{y:X}")
            }
            Instruction::SetIndexRegister { nnn } => write!(f, "LD I, {nnn:#05X}"),
            Instruction::JumpToAddressPlusV0 { nnn } => write!(f, "JP V0, {nnn:#05X}"),
            Instruction::SetXToRandom { x, kk } => write!(f, "RND V{x:X}, {kk:#04X}"),
            Instruction::Display { x, y, n } => write!(f, "DRW V{x:X}, V{y:X}, {n}"),
            Instruction::SkipIfVxPressed { x } => write!(f, "SKP V{x:X}"),
            Instruction::SkipIfVxNotPressed { x } => write!(f, "SKNP V{x:X}"),
            Instruction::SetXToDelayTimer { x } => write!(f, "LD V{x:X}, DT"),
            Instruction::WaitForKeyPressed { x } => write!(f, "LD V{x:X}, K"),
            Instruction::SetDelayTimerToX { x } => write!(f, "LD DT, V{x:X}"),
            Instruction::SetSoundTimerToX { x } => write!(f, "LD ST, V{x:X}"),
            Instruction::AddXToI { x } => write!(f, "ADD I, V{x:X}"),
            Instruction::SetIToSpriteX { x } => write!(f, "LD F, V{x:X}"),
            Instruction::LoadBCDOfX { x } => write!(f, "LD B, V{x:X}"),
            Instruction::Write0ThroughX { x } => write!(f, "LD [I], V{x:X}"),
            Instruction::Load0ThroughX { x } => write!(f, "LD V{x:X}, [I]"),
        }
    }
}
