use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{Config, Seed};
use crate::constants::{
    FONT_START_ADDRESS, GLYPH_SIZE, MAX_ADDRESS, MAX_ROM_SIZE, NUM_KEYS, ROM_START_ADDRESS,
};
use crate::error::{CoreError, RomTooLarge};
use crate::framebuffer::Framebuffer;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack::Stack;

/// The whole machine: memory, registers, stack, timers, screen and keypad.
///
/// The host drives it by calling [`Interpreter::step`] at whatever rate it likes,
/// writing the keypad in between, and reading the screen whenever
/// [`Interpreter::draw_flag`] is set.
#[derive(Clone)]
pub struct Interpreter {
    config: Config,
    /// Program counter, used to keep track of what to fetch,decode and execute from ram, initialized at 0x200
    program_counter: u16,
    /// The memory, holds the font and the loaded rom
    memory: Memory,
    /// Registers 0x0 through 0xF, the index register and both timers
    registers: Registers,
    stack: Stack,
    framebuffer: Framebuffer,
    keypad: Keypad,
    /// Set whenever the framebuffer changes, cleared by the host
    draw_flag: bool,
    /// Set when the sound timer runs out, cleared by the host
    beep_flag: bool,
    /// Source for `CXNN`, reseeded on every reset
    rng: ChaCha8Rng,
}

impl Interpreter {
    /// A freshly reset interpreter seeded from the clock
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            program_counter: ROM_START_ADDRESS,
            memory: Memory::with_font(),
            registers: Registers::default(),
            stack: Stack::default(),
            framebuffer: Framebuffer::new(),
            keypad: Keypad::default(),
            draw_flag: true,
            beep_flag: false,
            rng: Self::seeded_rng(config.seed),
        }
    }

    fn seeded_rng(seed: Seed) -> ChaCha8Rng {
        let seed = match seed {
            Seed::Fixed(seed) => seed,
            Seed::Entropy => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default(),
        };
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Puts the machine back in its power-on state: zeroed ram with the font at
    /// 0x000, everything else cleared, pc at 0x200 and a request to draw the
    /// (blank) screen once.
    pub fn reset(&mut self) {
        self.program_counter = ROM_START_ADDRESS;
        self.memory = Memory::with_font();
        self.registers = Registers::default();
        self.stack = Stack::default();
        self.framebuffer.clear();
        self.keypad.release_all();
        self.draw_flag = true;
        self.beep_flag = false;
        self.rng = Self::seeded_rng(self.config.seed);
        debug!("interpreter reset");
    }

    /// Resets, then copies `rom` into ram at 0x200.
    /// A rom that does not fit leaves the interpreter reset and empty
    pub fn load(&mut self, rom: &[u8]) -> Result<(), RomTooLarge> {
        self.reset();
        let too_large = RomTooLarge {
            size: rom.len(),
            max_size: MAX_ROM_SIZE,
        };
        if rom.len() > MAX_ROM_SIZE {
            return Err(too_large);
        }
        self.memory
            .load(ROM_START_ADDRESS, rom)
            .map_err(|_| too_large)?;
        debug!("loaded {} byte rom at {:#05X}", rom.len(), ROM_START_ADDRESS);
        Ok(())
    }

    /// Returns two bytes from memory at the location where the program counter currently points to
    fn fetch(&self) -> Result<u16, CoreError> {
        self.memory.read_word(self.program_counter)
    }

    /// The instruction the next `step` would execute
    pub fn current_instruction(&self) -> Result<Instruction, CoreError> {
        let opcode = self.fetch()?;
        Instruction::decode(opcode).ok_or(CoreError::UnknownOpcode {
            opcode,
            address: self.program_counter,
        })
    }

    /// A single cpu cycle, fetches, decodes, executes an opcode and then
    /// decrements the timers. On error nothing has changed, the program
    /// counter still points at the offending instruction.
    pub fn step(&mut self) -> Result<(), CoreError> {
        let address = self.program_counter;
        let instruction = self.current_instruction()?;
        trace!("{address:#05X}  {instruction}");

        self.execute(instruction)?;

        if self.registers.tick_timers() {
            self.beep_flag = true;
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.program_counter = self.program_counter.wrapping_add(2);
    }

    /// Skips the next instruction when `condition` holds, moves on to it otherwise
    fn skip_if(&mut self, condition: bool) {
        let offset = if condition { 4 } else { 2 };
        self.program_counter = self.program_counter.wrapping_add(offset);
    }

    ///Execute the instruction, for details on the instruction, check the instruction enum
    ///definition. Everything that can fail is checked before anything is written
    fn execute(&mut self, instruction: Instruction) -> Result<(), CoreError> {
        let address = self.program_counter;
        match instruction {
            //00E0
            Instruction::ClearScreen => {
                self.framebuffer.clear();
                self.draw_flag = true;
                self.advance();
            }
            //00EE
            Instruction::ReturnFromSubroutine => {
                self.program_counter = self.stack.pop(address)?;
                self.advance();
            }
            //1NNN
            Instruction::Jump { nnn } => {
                self.program_counter = nnn;
            }
            //2NNN
            Instruction::CallSubroutineAtNNN { nnn } => {
                self.stack.push(address, address)?;
                self.program_counter = nnn;
            }
            //3XKK
            Instruction::SkipNextInstructionIfXIsKK { x, kk } => {
                let vx = self.registers.get_register(x);
                self.skip_if(vx == kk);
            }
            //4XKK
            Instruction::SkipNextInstructionIfXIsNotKK { x, kk } => {
                let vx = self.registers.get_register(x);
                self.skip_if(vx != kk);
            }
            //5XY0
            Instruction::SkipNextInstructionIfXIsY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.skip_if(vx == vy);
            }
            //6XKK
            Instruction::LoadRegisterX { x, kk } => {
                self.registers.set_register(x, kk);
                self.advance();
            }
            //7XKK
            Instruction::AddToRegisterX { x, kk } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx.wrapping_add(kk));
                self.advance();
            }
            //8xy0
            Instruction::LoadRegisterYIntoX { x, y } => {
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vy);
                self.advance();
            }
            //8xy1
            Instruction::LoadXOrYInX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx | vy);
                self.advance();
            }
            //8xy2
            Instruction::LoadXAndYInX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx & vy);
                self.advance();
            }
            //8xy3
            Instruction::LoadXXorYInX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx ^ vy);
                self.advance();
            }
            //8xy4
            Instruction::AddYToX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                let (sum, carry) = vx.overflowing_add(vy);
                self.registers.set_flag(carry);
                self.registers.set_register(x, sum);
                self.advance();
            }
            //8xy5
            Instruction::SubYFromX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                // vf is set when there is *no* borrow
                self.registers.set_flag(vy <= vx);
                self.registers.set_register(x, vx.wrapping_sub(vy));
                self.advance();
            }
            //8xy6
            Instruction::ShiftXRight1 { x, .. } => {
                let vx = self.registers.get_register(x);
                self.registers.set_flag(vx & 1 == 1);
                self.registers.set_register(x, vx >> 1);
                self.advance();
            }
            //8xy7
            Instruction::SubXFromY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_flag(vx <= vy);
                self.registers.set_register(x, vy.wrapping_sub(vx));
                self.advance();
            }
            //8xyE
            Instruction::ShiftXLeft1 { x, .. } => {
                let vx = self.registers.get_register(x);
                self.registers.set_flag(vx & 0x80 != 0);
                self.registers.set_register(x, vx << 1);
                self.advance();
            }
            //9XY0
            Instruction::SkipNextInstructionIfXIsNotY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.skip_if(vx != vy);
            }
            //ANNN
            Instruction::SetIndexRegister { nnn } => {
                self.registers.set_index_register(nnn);
                self.advance();
            }
            //BNNN
            Instruction::JumpToAddressPlusV0 { nnn } => {
                let v0 = u16::from(self.registers.get_register(0));
                self.program_counter = nnn + v0;
            }
            //CXKK
            Instruction::SetXToRandom { x, kk } => {
                let random_byte: u8 = self.rng.random();
                self.registers.set_register(x, random_byte & kk);
                self.advance();
            }
            //DXYN
            Instruction::Display { x, y, n } => {
                self.draw_sprite(x, y, n)?;
                self.draw_flag = true;
                self.advance();
            }
            //EX9E
            Instruction::SkipIfVxPressed { x } => {
                let key = self.registers.get_register(x);
                self.skip_if(self.keypad.is_pressed(key));
            }
            //EXA1
            Instruction::SkipIfVxNotPressed { x } => {
                let key = self.registers.get_register(x);
                self.skip_if(!self.keypad.is_pressed(key));
            }
            //FX07
            Instruction::SetXToDelayTimer { x } => {
                let delay = self.registers.get_delay_timer();
                self.registers.set_register(x, delay);
                self.advance();
            }
            //FX0A
            Instruction::WaitForKeyPressed { x } => {
                // Without a key the program counter stays put, so the next step runs this again
                if let Some(key) = self.keypad.first_pressed() {
                    self.registers.set_register(x, key);
                    self.advance();
                }
            }
            //FX15
            Instruction::SetDelayTimerToX { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_delay_timer(vx);
                self.advance();
            }
            //FX18
            Instruction::SetSoundTimerToX { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_sound_timer(vx);
                self.advance();
            }
            //FX1E
            Instruction::AddXToI { x } => {
                let sum =
                    u32::from(self.registers.get_index_register()) + u32::from(self.registers.get_register(x));
                self.registers.set_flag(sum > u32::from(MAX_ADDRESS));
                self.registers.set_index_register(sum as u16);
                self.advance();
            }
            //FX29
            Instruction::SetIToSpriteX { x } => {
                let digit = u16::from(self.registers.get_register(x));
                self.registers
                    .set_index_register(FONT_START_ADDRESS + digit * u16::from(GLYPH_SIZE));
                self.advance();
            }
            //FX33
            Instruction::LoadBCDOfX { x } => {
                let vx = self.registers.get_register(x);
                let index = self.registers.get_index_register();
                Memory::check_range(index, 3)?;
                self.memory.write_byte(index, vx / 100)?;
                self.memory.write_byte(index + 1, (vx / 10) % 10)?;
                self.memory.write_byte(index + 2, vx % 10)?;
                self.advance();
            }
            //FX55
            Instruction::Write0ThroughX { x } => {
                let index = self.registers.get_index_register();
                Memory::check_range(index, u16::from(x) + 1)?;
                for register in 0..=x {
                    let value = self.registers.get_register(register);
                    self.memory.write_byte(index + u16::from(register), value)?;
                }
                self.registers.set_index_register(index + u16::from(x) + 1);
                self.advance();
            }
            //FX65
            Instruction::Load0ThroughX { x } => {
                let index = self.registers.get_index_register();
                Memory::check_range(index, u16::from(x) + 1)?;
                for register in 0..=x {
                    let value = self.memory.read_byte(index + u16::from(register))?;
                    self.registers.set_register(register, value);
                }
                self.registers.set_index_register(index + u16::from(x) + 1);
                self.advance();
            }
        }
        Ok(())
    }

    /// XORs an 8 pixel wide, `n` rows high sprite read from ram at I onto the
    /// screen at (vx, vy). Pixels past the edge wrap to the opposite side. VF
    /// ends up 1 when any lit pixel was switched off, 0 otherwise.
    fn draw_sprite(&mut self, x: u8, y: u8, n: u8) -> Result<(), CoreError> {
        let start_x = usize::from(self.registers.get_register(x));
        let start_y = usize::from(self.registers.get_register(y));
        let sprite_start = self.registers.get_index_register();
        Memory::check_range(sprite_start, u16::from(n))?;

        let start = usize::from(sprite_start);
        let sprite = &self.memory.bytes()[start..start + usize::from(n)];

        let mut collision = false;
        for (sprite_row, row_bits) in sprite.iter().enumerate() {
            for sprite_column in 0..8 {
                if row_bits & (0x80 >> sprite_column) == 0 {
                    continue;
                }
                if self
                    .framebuffer
                    .toggle(start_x + sprite_column, start_y + sprite_row)
                {
                    collision = true;
                }
            }
        }
        self.registers.set_flag(collision);
        Ok(())
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn draw_flag(&self) -> bool {
        self.draw_flag
    }

    /// Called by the host once it has drawn the current frame
    pub fn clear_draw_flag(&mut self) {
        self.draw_flag = false;
    }

    pub fn beep_flag(&self) -> bool {
        self.beep_flag
    }

    /// Called by the host once it has handled the beep
    pub fn clear_beep_flag(&mut self) {
        self.beep_flag = false;
    }

    /// Set key's state, keys above 0xF are ignored
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        if key < NUM_KEYS {
            self.keypad.set(key, pressed);
        } else {
            debug!("ignoring state change of non existent key {key:#X}");
        }
    }

    pub fn keys(&self) -> &[bool; NUM_KEYS as usize] {
        self.keypad.as_array()
    }

    pub fn keys_mut(&mut self) -> &mut [bool; NUM_KEYS as usize] {
        self.keypad.as_array_mut()
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn index_register(&self) -> u16 {
        self.registers.get_index_register()
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers.get_register(register)
    }

    pub fn stack_depth(&self) -> u8 {
        self.stack.depth()
    }

    pub fn delay_timer(&self) -> u8 {
        self.registers.get_delay_timer()
    }

    pub fn sound_timer(&self) -> u8 {
        self.registers.get_sound_timer()
    }

    pub fn memory(&self) -> &[u8] {
        self.memory.bytes()
    }

    pub fn config(&self) -> Config {
        self.config
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
