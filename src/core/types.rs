//! src/core/types.rs
//!
//! Core type definitions for keybind recording
//!
//! This module defines the fundamental types used throughout the crate:
//! - `KeyId`: A single physical key or pointer button (8-bit virtual key code)
//! - `KeySet`: An ordered, duplicate-free set of keys
//! - `RecordSettings`: The rules a recording session follows
//!
//! `KeyId` ordering is the raw code ordering, so a `KeySet` always iterates
//! in canonical order. Labels and scans rely on that.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::core::keycodes;

/// A physical key or pointer button
///
/// Wraps the device's virtual key code. Two `KeyId`s never alias the same
/// physical control; the side-specific Shift/Control/Alt duplicates have
/// their own codes but are skipped when scanning (see `KeyState::reserved_codes`).
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct KeyId(u8);

impl KeyId {
    pub const LBUTTON: KeyId = KeyId(0x01);
    pub const RBUTTON: KeyId = KeyId(0x02);
    pub const CANCEL: KeyId = KeyId(0x03);
    pub const MBUTTON: KeyId = KeyId(0x04);
    pub const XBUTTON1: KeyId = KeyId(0x05);
    pub const XBUTTON2: KeyId = KeyId(0x06);
    pub const BACK: KeyId = KeyId(0x08);
    pub const TAB: KeyId = KeyId(0x09);
    pub const CLEAR: KeyId = KeyId(0x0C);
    pub const RETURN: KeyId = KeyId(0x0D);
    pub const SHIFT: KeyId = KeyId(0x10);
    pub const CONTROL: KeyId = KeyId(0x11);
    pub const MENU: KeyId = KeyId(0x12);
    pub const PAUSE: KeyId = KeyId(0x13);
    pub const CAPITAL: KeyId = KeyId(0x14);
    pub const ESCAPE: KeyId = KeyId(0x1B);
    pub const SPACE: KeyId = KeyId(0x20);
    pub const PRIOR: KeyId = KeyId(0x21);
    pub const NEXT: KeyId = KeyId(0x22);
    pub const END: KeyId = KeyId(0x23);
    pub const HOME: KeyId = KeyId(0x24);
    pub const LEFT: KeyId = KeyId(0x25);
    pub const UP: KeyId = KeyId(0x26);
    pub const RIGHT: KeyId = KeyId(0x27);
    pub const DOWN: KeyId = KeyId(0x28);
    pub const PRINT: KeyId = KeyId(0x2A);
    pub const SNAPSHOT: KeyId = KeyId(0x2C);
    pub const INSERT: KeyId = KeyId(0x2D);
    pub const DELETE: KeyId = KeyId(0x2E);
    pub const LWIN: KeyId = KeyId(0x5B);
    pub const RWIN: KeyId = KeyId(0x5C);
    pub const APPS: KeyId = KeyId(0x5D);
    pub const NUMPAD0: KeyId = KeyId(0x60);
    pub const NUMPAD1: KeyId = KeyId(0x61);
    pub const NUMPAD2: KeyId = KeyId(0x62);
    pub const NUMPAD3: KeyId = KeyId(0x63);
    pub const NUMPAD4: KeyId = KeyId(0x64);
    pub const NUMPAD5: KeyId = KeyId(0x65);
    pub const NUMPAD6: KeyId = KeyId(0x66);
    pub const NUMPAD7: KeyId = KeyId(0x67);
    pub const NUMPAD8: KeyId = KeyId(0x68);
    pub const NUMPAD9: KeyId = KeyId(0x69);
    pub const MULTIPLY: KeyId = KeyId(0x6A);
    pub const ADD: KeyId = KeyId(0x6B);
    pub const SEPARATOR: KeyId = KeyId(0x6C);
    pub const SUBTRACT: KeyId = KeyId(0x6D);
    pub const DECIMAL: KeyId = KeyId(0x6E);
    pub const DIVIDE: KeyId = KeyId(0x6F);
    pub const F1: KeyId = KeyId(0x70);
    pub const F12: KeyId = KeyId(0x7B);
    pub const F24: KeyId = KeyId(0x87);
    pub const NUMLOCK: KeyId = KeyId(0x90);
    pub const SCROLL: KeyId = KeyId(0x91);
    pub const LSHIFT: KeyId = KeyId(0xA0);
    pub const RSHIFT: KeyId = KeyId(0xA1);
    pub const LCONTROL: KeyId = KeyId(0xA2);
    pub const RCONTROL: KeyId = KeyId(0xA3);
    pub const LMENU: KeyId = KeyId(0xA4);
    pub const RMENU: KeyId = KeyId(0xA5);
    pub const OEM_1: KeyId = KeyId(0xBA);
    pub const OEM_PLUS: KeyId = KeyId(0xBB);
    pub const OEM_COMMA: KeyId = KeyId(0xBC);
    pub const OEM_MINUS: KeyId = KeyId(0xBD);
    pub const OEM_PERIOD: KeyId = KeyId(0xBE);
    pub const OEM_2: KeyId = KeyId(0xBF);
    pub const OEM_3: KeyId = KeyId(0xC0);
    pub const OEM_4: KeyId = KeyId(0xDB);
    pub const OEM_5: KeyId = KeyId(0xDC);
    pub const OEM_6: KeyId = KeyId(0xDD);
    pub const OEM_7: KeyId = KeyId(0xDE);

    /// Wraps a raw virtual key code.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw virtual key code.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Key for an ASCII letter or digit.
    ///
    /// Letters map to their upper-case code (the code a keyboard reports for
    /// the physical key), so `'a'` and `'A'` are the same key.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else if c.is_ascii_digit() {
            Some(Self(c as u8))
        } else {
            None
        }
    }
}

impl From<u8> for KeyId {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

/// Standard label name: override table first, then the layout name.
impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = keycodes::LABEL_OVERRIDES
            .iter()
            .find(|(key, _)| key == self)
            .map(|(_, name)| name.to_string())
            .or_else(|| keycodes::key_name(*self));

        match name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

/// An ordered set of keys
///
/// Iteration order is code order, which is the canonical order used for
/// labels and for the recording scan.
pub type KeySet = BTreeSet<KeyId>;

/// Rules for one recording session
///
/// Settings are copied into a `Keybind` by value. Changing a caller's copy
/// after `Keybind::set_record_settings` never affects a recording in progress.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RecordSettings {
    /// Maximum number of keys that can be recorded.
    /// Reaching it stops the recording and saves.
    pub max_keys: usize,

    /// Keys that are never recorded (or the only keys that are, see
    /// `blacklist_is_whitelist`).
    pub blacklist: KeySet,

    /// Keys that stop the recording and save as soon as they are pressed.
    pub accept_keys: KeySet,

    /// Whether the accept key that ended the recording is saved with it.
    pub include_accept_keys: bool,

    /// Treat `blacklist` as a whitelist.
    pub blacklist_is_whitelist: bool,

    /// Whether pointer buttons can be recorded.
    pub mouse_keys_allowed: bool,

    /// Only record alphabetic keys (accept keys still stop the recording).
    pub only_abc: bool,

    /// Whether modifier keys (Shift, Ctrl, Alt, ...) can be recorded.
    pub modifier_keys_allowed: bool,

    /// Whether modifier keys can be recorded alongside `only_abc`.
    pub modifier_keys_allowed_with_abc: bool,

    /// Releasing a recorded key stops the recording.
    ///
    /// This is the behaviour whenever `must_accept` is off; the flag is kept
    /// so settings round-trip and so validation can flag it against
    /// `must_accept`.
    pub any_key_accepts: bool,

    /// Whether modifier keys count towards `max_keys`.
    pub max_keys_include_modifier_keys: bool,

    /// Keep recording after keys are released; only an accept key (or the
    /// key limit) stops it. Takes priority over `any_key_accepts`.
    pub must_accept: bool,
}

impl Default for RecordSettings {
    fn default() -> Self {
        Self {
            max_keys: 2,
            blacklist: KeySet::new(),
            accept_keys: [KeyId::RETURN, KeyId::ESCAPE].into_iter().collect(),
            include_accept_keys: false,
            blacklist_is_whitelist: false,
            mouse_keys_allowed: false,
            only_abc: false,
            modifier_keys_allowed: true,
            modifier_keys_allowed_with_abc: false,
            any_key_accepts: true,
            max_keys_include_modifier_keys: true,
            must_accept: false,
        }
    }
}
