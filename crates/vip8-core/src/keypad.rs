use crate::constants::NUM_KEYS;

/// A list of "buttons", for the keyboard. set to true when pressed, false otherwise.
/// Keys are numbered 0x0 through 0xF, anything higher wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; NUM_KEYS as usize],
}

impl Keypad {
    pub fn set(&mut self, key: u8, pressed: bool) {
        self.keys[(key % NUM_KEYS) as usize] = pressed;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key % NUM_KEYS) as usize]
    }

    /// The lowest numbered key that is held down
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys
            .iter()
            .position(|pressed| *pressed)
            .map(|key| key as u8)
    }

    pub fn release_all(&mut self) {
        self.keys = [false; NUM_KEYS as usize];
    }

    pub fn as_array(&self) -> &[bool; NUM_KEYS as usize] {
        &self.keys
    }

    pub fn as_array_mut(&mut self) -> &mut [bool; NUM_KEYS as usize] {
        &mut self.keys
    }
}
