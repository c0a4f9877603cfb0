use crate::constants::{FLAG_REGISTER, NUM_REGISTERS};

#[derive(Debug, Clone, Copy, Default)]
///# Holds all the registers and the sound and delay timers
pub struct Registers {
    register: [u8; NUM_REGISTERS as usize],
    vindex: u16,
    /// 0 by default, unless its set to a number then it will count down by one every cycle
    delay_timer: u8,
    /// Counts down like the delay timer. The host is told to beep when it runs out
    sound_timer: u8,
}

impl Registers {
    pub fn set_index_register(&mut self, value: u16) {
        self.vindex = value;
    }
    pub fn get_index_register(&self) -> u16 {
        self.vindex
    }
    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer
    }
    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer
    }

    /// Moves both timers one step towards zero.
    /// Returns true when the sound timer went from 1 to 0 during this call
    pub fn tick_timers(&mut self) -> bool {
        if self.delay_timer > 0 {
            self.delay_timer -= 1;
        }
        if self.sound_timer > 0 {
            let expired = self.sound_timer == 1;
            self.sound_timer -= 1;
            return expired;
        }
        false
    }

    /// Only the low nibble of `register` selects the register
    pub fn get_register(&self, register: u8) -> u8 {
        self.register[(register & 0xF) as usize]
    }
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.register[(register & 0xF) as usize] = value;
    }
    /// Writes VF, 1 for true and 0 for false
    pub fn set_flag(&mut self, flag: bool) {
        self.set_register(FLAG_REGISTER, u8::from(flag));
    }
}
