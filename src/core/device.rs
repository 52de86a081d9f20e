//! src/core/device.rs
//!
//! The input device boundary
//!
//! `KeyState` is the only thing this crate needs from the platform: whether a
//! key or pointer button is held right now, the range of codes worth scanning
//! and a name for a key. Hosts implement it over their OS key-state query (or
//! over their own event loop); `VirtualKeyboard` is the in-memory version used
//! for tests, replays and event-driven hosts.

use std::ops::RangeInclusive;

use crate::core::keycodes;
use crate::core::types::{KeyId, KeySet};

/// Live key state supplied by the host
///
/// All methods are side-effect-free reads.
pub trait KeyState {
    /// Whether keyboard key `key` is currently held.
    fn is_key_active(&self, key: KeyId) -> bool;

    /// Whether pointer button `key` is currently held.
    fn is_pointer_active(&self, key: KeyId) -> bool {
        self.is_key_active(key)
    }

    /// Layout-provided name for `key`. Only used when no label override exists.
    fn key_name(&self, key: KeyId) -> Option<String> {
        keycodes::key_name(key)
    }

    /// Addressable key codes, scanned in increasing order.
    fn key_codes(&self) -> RangeInclusive<u8> {
        1..=254
    }

    /// Codes used for side-specific modifier duplicates (left/right Shift,
    /// Control, Alt). Skipped by scans so a held modifier is reported once.
    fn reserved_codes(&self) -> RangeInclusive<u8> {
        KeyId::LSHIFT.code()..=KeyId::RMENU.code()
    }
}

/// In-memory key state
///
/// Holds the set of keys the host says are down. Pointer buttons and
/// keyboard keys share the same set.
#[derive(Clone, Debug, Default)]
pub struct VirtualKeyboard {
    held: KeySet,
}

impl VirtualKeyboard {
    /// Creates a keyboard with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as held.
    pub fn press(&mut self, key: KeyId) {
        self.held.insert(key);
    }

    /// Marks `key` as released.
    pub fn release(&mut self, key: KeyId) {
        self.held.remove(&key);
    }

    /// Replaces the held set.
    pub fn set_held<I: IntoIterator<Item = KeyId>>(&mut self, keys: I) {
        self.held = keys.into_iter().collect();
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn held(&self) -> &KeySet {
        &self.held
    }
}

impl KeyState for VirtualKeyboard {
    fn is_key_active(&self, key: KeyId) -> bool {
        self.held.contains(&key)
    }
}
