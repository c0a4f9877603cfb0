use iced::keyboard::{self, key::Named};

/// The left hand side of a qwerty keyboard, laid out like the original hex keypad:
///
/// ```text
/// 1 2 3 4        1 2 3 C
/// q w e r   ->   4 5 6 D
/// a s d f        7 8 9 E
/// z x c v        A 0 B F
/// ```
const LAYOUT: [(&str, u8); 16] = [
    ("1", 0x1),
    ("2", 0x2),
    ("3", 0x3),
    ("4", 0xC),
    ("q", 0x4),
    ("w", 0x5),
    ("e", 0x6),
    ("r", 0xD),
    ("a", 0x7),
    ("s", 0x8),
    ("d", 0x9),
    ("f", 0xE),
    ("z", 0xA),
    ("x", 0x0),
    ("c", 0xB),
    ("v", 0xF),
];

/// Looks up the keypad key for a typed character, case insensitive
pub fn key_index(character: &str) -> Option<u8> {
    let character = character.to_ascii_lowercase();
    LAYOUT
        .iter()
        .find(|(name, _)| *name == character)
        .map(|(_, index)| *index)
}

/// The function is used to convert iced::keyboard::Key values to key indexes, used inside the
/// interpreter
pub fn to_index(key: &keyboard::Key) -> Option<u8> {
    match key {
        keyboard::Key::Character(character) => key_index(character.as_str()),
        _ => None,
    }
}

pub fn is_quit(key: &keyboard::Key) -> bool {
    matches!(key, keyboard::Key::Named(Named::Escape))
}
