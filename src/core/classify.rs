//! src/core/classify.rs
//!
//! Key classification and labelling
//!
//! The classification tables (modifier set, pointer-button set, label
//! overrides, global blacklist) are plain data in `KeyTables`. A standard set
//! is built once per process and shared through an `Arc`; every `Keybind`
//! holds the tables it classifies with, so hosts can swap in their own.
//!
//! The free functions at the bottom of this module are convenience wrappers
//! over the process-wide standard tables for hosts that never customise them.
//! `Keybind` itself never calls them: it classifies and labels through the
//! `KeyTables` it was given (`Keybind::with_tables`), so injected tables are
//! honoured everywhere a keybind makes a decision.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::core::device::KeyState;
use crate::core::keycodes::LABEL_OVERRIDES;
use crate::core::types::{KeyId, KeySet};

const ABC_UPPER: std::ops::RangeInclusive<u8> = 65..=90;
const ABC_LOWER: std::ops::RangeInclusive<u8> = 97..=122;

static STANDARD_TABLES: LazyLock<Arc<KeyTables>> =
    LazyLock::new(|| Arc::new(KeyTables::standard_tables()));

/// Immutable classification tables
#[derive(Clone, Debug, PartialEq)]
pub struct KeyTables {
    /// Shift/Ctrl/Alt-class keys, plus the lock keys and Tab
    pub modifiers: KeySet,

    /// Mouse buttons; queried with `KeyState::is_pointer_active`
    pub pointer_buttons: KeySet,

    /// Label names that win over the device's name lookup
    pub label_overrides: BTreeMap<KeyId, String>,

    /// Keys no recording will ever pick up, regardless of settings
    pub blacklist: KeySet,
}

impl KeyTables {
    /// The process-wide standard tables.
    pub fn standard() -> Arc<KeyTables> {
        Arc::clone(&STANDARD_TABLES)
    }

    /// Builds a fresh copy of the standard tables.
    ///
    /// Use this as a starting point for custom tables, e.g. to add keys to
    /// the global blacklist before wrapping them in an `Arc`.
    pub fn standard_tables() -> Self {
        Self {
            modifiers: [
                KeyId::SHIFT,
                KeyId::CONTROL,
                KeyId::MENU,
                KeyId::TAB,
                KeyId::CAPITAL,
                KeyId::NUMLOCK,
                KeyId::SCROLL,
            ]
            .into_iter()
            .collect(),
            pointer_buttons: [
                KeyId::LBUTTON,
                KeyId::RBUTTON,
                KeyId::MBUTTON,
                KeyId::XBUTTON1,
                KeyId::XBUTTON2,
            ]
            .into_iter()
            .collect(),
            label_overrides: LABEL_OVERRIDES
                .iter()
                .map(|(key, name)| (*key, name.to_string()))
                .collect(),
            blacklist: KeySet::new(),
        }
    }

    pub fn is_modifier(&self, key: KeyId) -> bool {
        self.modifiers.contains(&key)
    }

    pub fn is_pointer_button(&self, key: KeyId) -> bool {
        self.pointer_buttons.contains(&key)
    }

    pub fn is_blacklisted(&self, key: KeyId) -> bool {
        self.blacklist.contains(&key)
    }

    /// Whether `key` is held, using the pointer query for pointer buttons.
    pub fn is_held<D: KeyState + ?Sized>(&self, device: &D, key: KeyId) -> bool {
        if self.is_pointer_button(key) {
            device.is_pointer_active(key)
        } else {
            device.is_key_active(key)
        }
    }

    /// Every addressable key currently held.
    pub fn active_keys<D: KeyState + ?Sized>(&self, device: &D) -> KeySet {
        addressable_keys(device)
            .filter(|key| self.is_held(device, *key))
            .collect()
    }

    /// Whether every key in `keys` is held. True for an empty set.
    pub fn all_held<D: KeyState + ?Sized>(&self, device: &D, keys: &KeySet) -> bool {
        keys.iter().all(|key| self.is_held(device, *key))
    }

    /// Display name for a single key.
    pub fn key_label<D: KeyState + ?Sized>(&self, key: KeyId, device: &D) -> String {
        self.label_overrides
            .get(&key)
            .cloned()
            .or_else(|| device.key_name(key))
            .unwrap_or_else(|| format!("0x{:02X}", key.code()))
    }

    /// Renders `keys` as `"Ctrl + A"`, or `"None"` for an empty set.
    pub fn label<D: KeyState + ?Sized>(&self, keys: &KeySet, device: &D) -> String {
        if keys.is_empty() {
            return "None".to_string();
        }

        keys.iter()
            .map(|key| self.key_label(*key, device))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl Default for KeyTables {
    fn default() -> Self {
        Self::standard_tables()
    }
}

/// Addressable keys of `device` in increasing order, reserved codes skipped.
pub fn addressable_keys<D: KeyState + ?Sized>(device: &D) -> impl Iterator<Item = KeyId> {
    let reserved = device.reserved_codes();
    device
        .key_codes()
        .filter(move |code| !reserved.contains(code))
        .map(KeyId::new)
}

/// Whether `key` falls in the upper- or lower-case alphabetic code ranges.
pub fn is_alphabetic(key: KeyId) -> bool {
    ABC_UPPER.contains(&key.code()) || ABC_LOWER.contains(&key.code())
}

pub fn is_modifier(key: KeyId) -> bool {
    STANDARD_TABLES.is_modifier(key)
}

pub fn is_pointer_button(key: KeyId) -> bool {
    STANDARD_TABLES.is_pointer_button(key)
}

pub fn is_key_active<D: KeyState + ?Sized>(device: &D, key: KeyId) -> bool {
    device.is_key_active(key)
}

pub fn is_pointer_active<D: KeyState + ?Sized>(device: &D, key: KeyId) -> bool {
    device.is_pointer_active(key)
}

/// Every addressable key currently held, classified with the standard tables.
pub fn active_keys<D: KeyState + ?Sized>(device: &D) -> KeySet {
    STANDARD_TABLES.active_keys(device)
}

/// Human-readable label for `keys` using the standard tables.
///
/// # Example
/// ```
/// use keybind_recorder::core::{label, KeyId, KeySet, VirtualKeyboard};
///
/// let keys: KeySet = [KeyId::CONTROL, KeyId::new(b'A')].into_iter().collect();
/// assert_eq!(label(&keys, &VirtualKeyboard::new()), "Ctrl + A");
/// assert_eq!(label(&KeySet::new(), &VirtualKeyboard::new()), "None");
/// ```
pub fn label<D: KeyState + ?Sized>(keys: &KeySet, device: &D) -> String {
    STANDARD_TABLES.label(keys, device)
}
