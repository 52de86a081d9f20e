//! src/core/keycodes.rs
//!
//! Key names and key-name parsing
//!
//! Two name tables live here:
//! - `KEY_NAMES`: the names a keyboard layout reports for its keys. These are
//!   what `VirtualKeyboard` hands out as its name lookup.
//! - `LABEL_OVERRIDES`: names for keys whose layout-provided name is missing or
//!   ambiguous (pointer buttons, numpad, navigation cluster). Labels always
//!   prefer these.
//!
//! `parse_key` accepts any of those names, a handful of aliases, single
//! letters/digits, `F1`-`F24` and raw codes (`0x41`, `65`).

use std::str::FromStr;
use thiserror::Error;

use crate::core::types::KeyId;

/// Key name parse errors
#[derive(Debug, Error, PartialEq)]
pub enum KeyParseError {
    #[error("Empty key name")]
    Empty,

    #[error("Unknown key name '{0}'")]
    UnknownName(String),

    #[error("Key code out of range: '{0}' (expected 0-255)")]
    CodeOutOfRange(String),
}

/// Names reported by the keyboard layout.
///
/// Letters, digits and function keys are derived in `key_name` instead of
/// being listed.
pub const KEY_NAMES: &[(KeyId, &str)] = &[
    (KeyId::CANCEL, "Break"),
    (KeyId::BACK, "Backspace"),
    (KeyId::TAB, "Tab"),
    (KeyId::CLEAR, "Clear"),
    (KeyId::RETURN, "Enter"),
    (KeyId::SHIFT, "Shift"),
    (KeyId::CONTROL, "Ctrl"),
    (KeyId::MENU, "Alt"),
    (KeyId::CAPITAL, "Caps Lock"),
    (KeyId::ESCAPE, "Esc"),
    (KeyId::SPACE, "Space"),
    (KeyId::SNAPSHOT, "Prnt Scrn"),
    (KeyId::LWIN, "Left Windows"),
    (KeyId::RWIN, "Right Windows"),
    (KeyId::APPS, "Application"),
    (KeyId::SEPARATOR, "Separator"),
    (KeyId::SCROLL, "Scroll Lock"),
    (KeyId::LSHIFT, "Left Shift"),
    (KeyId::RSHIFT, "Right Shift"),
    (KeyId::LCONTROL, "Left Ctrl"),
    (KeyId::RCONTROL, "Right Ctrl"),
    (KeyId::LMENU, "Left Alt"),
    (KeyId::RMENU, "Right Alt"),
    (KeyId::OEM_1, ";"),
    (KeyId::OEM_PLUS, "="),
    (KeyId::OEM_COMMA, ","),
    (KeyId::OEM_MINUS, "-"),
    (KeyId::OEM_PERIOD, "."),
    (KeyId::OEM_2, "/"),
    (KeyId::OEM_3, "`"),
    (KeyId::OEM_4, "["),
    (KeyId::OEM_5, "\\"),
    (KeyId::OEM_6, "]"),
    (KeyId::OEM_7, "'"),
];

/// Label names that take priority over the layout-reported name.
pub const LABEL_OVERRIDES: &[(KeyId, &str)] = &[
    (KeyId::LBUTTON, "LBM"),
    (KeyId::MBUTTON, "MMB"),
    (KeyId::RBUTTON, "RBM"),
    (KeyId::XBUTTON1, "Backward"),
    (KeyId::XBUTTON2, "Forward"),
    (KeyId::NUMPAD0, "Num 0"),
    (KeyId::NUMPAD1, "Num 1"),
    (KeyId::NUMPAD2, "Num 2"),
    (KeyId::NUMPAD3, "Num 3"),
    (KeyId::NUMPAD4, "Num 4"),
    (KeyId::NUMPAD5, "Num 5"),
    (KeyId::NUMPAD6, "Num 6"),
    (KeyId::NUMPAD7, "Num 7"),
    (KeyId::NUMPAD8, "Num 8"),
    (KeyId::NUMPAD9, "Num 9"),
    (KeyId::ADD, "Num +"),
    (KeyId::SUBTRACT, "Num -"),
    (KeyId::MULTIPLY, "Num *"),
    (KeyId::DIVIDE, "Num /"),
    (KeyId::DECIMAL, "Num ."),
    (KeyId::HOME, "Home"),
    (KeyId::END, "End"),
    (KeyId::UP, "Up Arrow"),
    (KeyId::DOWN, "Down Arrow"),
    (KeyId::LEFT, "Left Arrow"),
    (KeyId::RIGHT, "Right Arrow"),
    (KeyId::INSERT, "Insert"),
    (KeyId::DELETE, "Delete"),
    (KeyId::PRIOR, "Page Up"),
    (KeyId::NEXT, "Page Down"),
    (KeyId::PRINT, "Print"),
    (KeyId::PAUSE, "Pause"),
    (KeyId::NUMLOCK, "Numlock"),
];

/// Extra spellings accepted by `parse_key`. Never used for display.
const KEY_ALIASES: &[(&str, KeyId)] = &[
    ("return", KeyId::RETURN),
    ("escape", KeyId::ESCAPE),
    ("control", KeyId::CONTROL),
    ("menu", KeyId::MENU),
    ("caps", KeyId::CAPITAL),
    ("capslock", KeyId::CAPITAL),
    ("win", KeyId::LWIN),
    ("super", KeyId::LWIN),
    ("pgup", KeyId::PRIOR),
    ("pgdn", KeyId::NEXT),
    ("up", KeyId::UP),
    ("down", KeyId::DOWN),
    ("left", KeyId::LEFT),
    ("right", KeyId::RIGHT),
    ("del", KeyId::DELETE),
    ("ins", KeyId::INSERT),
    ("lmb", KeyId::LBUTTON),
    ("rmb", KeyId::RBUTTON),
    ("mouse1", KeyId::LBUTTON),
    ("mouse2", KeyId::RBUTTON),
    ("mouse3", KeyId::MBUTTON),
    ("mouse4", KeyId::XBUTTON1),
    ("mouse5", KeyId::XBUTTON2),
    ("numadd", KeyId::ADD),
    ("numsub", KeyId::SUBTRACT),
    ("nummul", KeyId::MULTIPLY),
    ("numdiv", KeyId::DIVIDE),
    ("numdec", KeyId::DECIMAL),
    ("scrolllock", KeyId::SCROLL),
];

/// Name the keyboard layout reports for `key`, if it has one.
pub fn key_name(key: KeyId) -> Option<String> {
    let code = key.code();
    match code {
        b'A'..=b'Z' | b'0'..=b'9' => Some(char::from(code).to_string()),
        0x70..=0x87 => Some(format!("F{}", code - 0x6F)),
        _ => KEY_NAMES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, name)| name.to_string()),
    }
}

/// Parse a key name, alias or raw code
///
/// Matching is case-insensitive. A single character is read as a letter or
/// digit key; multi-digit numbers and `0x`-prefixed values as raw codes.
pub fn parse_key(input: &str) -> Result<KeyId, KeyParseError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if let Some(hex) = name.strip_prefix("0x").or_else(|| name.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16)
            .map(KeyId::new)
            .map_err(|_| KeyParseError::CodeOutOfRange(name.to_string()));
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(key) = KeyId::from_char(c) {
            return Ok(key);
        }
    }

    if name.len() > 1 && name.chars().all(|c| c.is_ascii_digit()) {
        return name
            .parse::<u8>()
            .map(KeyId::new)
            .map_err(|_| KeyParseError::CodeOutOfRange(name.to_string()));
    }

    if let Some(n) = name
        .strip_prefix(['F', 'f'])
        .and_then(|n| n.parse::<u8>().ok())
    {
        if (1..=24).contains(&n) {
            return Ok(KeyId::new(0x6F + n));
        }
    }

    KEY_NAMES
        .iter()
        .chain(LABEL_OVERRIDES.iter())
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(k, _)| *k)
        .or_else(|| {
            KEY_ALIASES
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, k)| *k)
        })
        .ok_or_else(|| KeyParseError::UnknownName(name.to_string()))
}

impl FromStr for KeyId {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s)
    }
}
