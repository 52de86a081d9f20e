// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/keybind.rs
//!
//! Keybind recording state machine and press/release detection
//!
//! A `Keybind` is either idle or recording. While recording, the host calls
//! `update` once per tick; each tick scans every addressable key, filters it
//! through the `RecordSettings`, and accumulates held keys into a transient
//! set until a stop condition commits that set:
//! - the key limit is reached,
//! - an accept key is pressed,
//! - a recorded key is released (unless `must_accept` is set).
//!
//! Once idle, `is_pressed` and `is_released` report activation and
//! deactivation edges of the committed keys. Each edge has its own latch, so
//! polling one of them never swallows an edge meant for the other.
//!
//! # Example
//! ```
//! use keybind_recorder::core::{Keybind, KeyId, VirtualKeyboard};
//!
//! let mut keyboard = VirtualKeyboard::new();
//! let mut keybind = Keybind::new();
//! keybind.record();
//!
//! keyboard.press(KeyId::CONTROL);
//! keyboard.press(KeyId::new(b'K'));
//! assert!(keybind.update(&keyboard)); // two keys = default limit
//!
//! keyboard.release_all();
//! assert!(!keybind.is_pressed(&keyboard));
//! keyboard.set_held([KeyId::CONTROL, KeyId::new(b'K')]);
//! assert!(keybind.is_pressed(&keyboard));
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::classify::{addressable_keys, is_alphabetic, KeyTables};
use crate::core::device::KeyState;
use crate::core::types::{KeyId, KeySet, RecordSettings};

/// Recording state of a keybind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum RecordState {
    #[default]
    Idle,
    Recording {
        /// Keys accumulated so far this session
        transient: KeySet,
        /// Settings snapshot taken when the recording started
        settings: RecordSettings,
    },
}

/// A recordable key combination
#[derive(Clone, Debug)]
pub struct Keybind {
    /// Committed keys
    keys: KeySet,

    /// Rules for the next recording
    settings: RecordSettings,

    /// Classification tables used for filtering and activity checks
    tables: Arc<KeyTables>,

    state: RecordState,

    /// Set once a press has been reported; cleared when the keys are seen up.
    press_latched: bool,

    /// Set when a new activation is seen; cleared when the release is reported.
    release_armed: bool,
}

impl Keybind {
    /// Creates an empty keybind with default record settings.
    pub fn new() -> Self {
        Self::with_settings(RecordSettings::default())
    }

    /// Creates an empty keybind with the given record settings.
    pub fn with_settings(settings: RecordSettings) -> Self {
        Self::with_keys(KeySet::new(), settings)
    }

    /// Creates a keybind with preset keys and record settings.
    pub fn with_keys(keys: KeySet, settings: RecordSettings) -> Self {
        Self {
            keys,
            settings,
            tables: KeyTables::standard(),
            state: RecordState::Idle,
            press_latched: false,
            release_armed: false,
        }
    }

    /// Replaces the classification tables.
    pub fn with_tables(mut self, tables: Arc<KeyTables>) -> Self {
        self.tables = tables;
        self
    }

    /// Replaces the committed keys and resets edge detection.
    pub fn set_keys(&mut self, keys: KeySet) {
        self.keys = keys;
        self.press_latched = false;
        self.release_armed = false;
    }

    /// Replaces the record settings.
    ///
    /// A recording already in progress keeps the settings it started with.
    pub fn set_record_settings(&mut self, settings: RecordSettings) {
        self.settings = settings;
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn record_settings(&self) -> &RecordSettings {
        &self.settings
    }

    pub fn tables(&self) -> &KeyTables {
        &self.tables
    }

    /// Whether no keys are committed.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecordState::Recording { .. })
    }

    /// Starts a new recording. No-op while already recording.
    pub fn record(&mut self) {
        if self.is_recording() {
            return;
        }

        debug!(max_keys = self.settings.max_keys, "Recording started");
        self.state = RecordState::Recording {
            transient: KeySet::new(),
            settings: self.settings.clone(),
        };
    }

    /// Abandons the recording without touching the committed keys.
    pub fn stop(&mut self) {
        if !self.is_recording() {
            return;
        }

        debug!("Recording stopped without saving");
        self.state = RecordState::Idle;
    }

    /// Ends the recording and commits the keys recorded so far.
    pub fn save(&mut self) {
        if let RecordState::Recording { transient, .. } = std::mem::take(&mut self.state) {
            self.commit(transient);
        }
    }

    /// Keys recorded so far, or an empty set when not recording.
    ///
    /// For UI feedback only; the recording may still add or drop keys.
    pub fn recording_preview(&self) -> KeySet {
        match &self.state {
            RecordState::Recording { transient, .. } => transient.clone(),
            RecordState::Idle => KeySet::new(),
        }
    }

    /// Advances the recording by one tick.
    ///
    /// Returns `true` on the tick the recording finishes and commits.
    /// Returns `false` when not recording or when recording continues.
    pub fn update<D: KeyState + ?Sized>(&mut self, device: &D) -> bool {
        let (mut transient, settings) = match std::mem::take(&mut self.state) {
            RecordState::Recording {
                transient,
                settings,
            } => (transient, settings),
            RecordState::Idle => return false,
        };

        if self.limit_reached(&settings, &transient) {
            debug!("Key limit reached");
            self.commit(transient);
            return true;
        }

        if self.scan(device, &settings, &mut transient) || self.limit_reached(&settings, &transient)
        {
            self.commit(transient);
            return true;
        }

        self.state = RecordState::Recording {
            transient,
            settings,
        };
        false
    }

    /// Whether every committed key is held. An empty keybind is never active.
    pub fn is_active<D: KeyState + ?Sized>(&self, device: &D) -> bool {
        !self.keys.is_empty() && self.tables.all_held(device, &self.keys)
    }

    /// True once per activation of the committed keys.
    pub fn is_pressed<D: KeyState + ?Sized>(&mut self, device: &D) -> bool {
        let active = self.observe(device);
        if active && !self.press_latched {
            self.press_latched = true;
            return true;
        }
        false
    }

    /// True once per deactivation of the committed keys.
    pub fn is_released<D: KeyState + ?Sized>(&mut self, device: &D) -> bool {
        let active = self.observe(device);
        if !active && self.release_armed {
            self.release_armed = false;
            return true;
        }
        false
    }

    /// Samples activity and feeds it to both latches.
    fn observe<D: KeyState + ?Sized>(&mut self, device: &D) -> bool {
        let active = self.is_active(device);
        if !active {
            self.press_latched = false;
        } else if !self.press_latched {
            self.release_armed = true;
        }
        active
    }

    fn commit(&mut self, transient: KeySet) {
        self.state = RecordState::Idle;
        self.keys = transient;

        // A combination still held when the recording ends is not a press.
        self.press_latched = true;
        self.release_armed = false;

        debug!(keys = ?self.keys, "Recording saved");
    }

    fn limit_reached(&self, settings: &RecordSettings, transient: &KeySet) -> bool {
        let counted = transient
            .iter()
            .filter(|key| settings.max_keys_include_modifier_keys || !self.tables.is_modifier(**key))
            .count();

        counted >= settings.max_keys
    }

    /// One pass over the addressable keys. Returns `true` on a stop condition.
    fn scan<D: KeyState + ?Sized>(
        &self,
        device: &D,
        settings: &RecordSettings,
        transient: &mut KeySet,
    ) -> bool {
        for key in addressable_keys(device) {
            if is_filtered(settings, &self.tables, key) {
                continue;
            }

            let is_active = self.tables.is_held(device, key);
            let is_recorded = transient.contains(&key);

            if is_active && settings.accept_keys.contains(&key) {
                if settings.include_accept_keys {
                    transient.insert(key);
                }
                debug!(key = key.code(), "Accept key pressed");
                return true;
            }

            if is_active && !is_recorded {
                trace!(key = key.code(), "Key recorded");
                transient.insert(key);
                continue;
            }

            if !is_active && is_recorded && !settings.must_accept {
                debug!(key = key.code(), "Recorded key released");
                return true;
            }
        }

        false
    }
}

impl Default for Keybind {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `settings` keep `key` out of a recording
///
/// Rules apply in order; the first match filters the key.
pub fn is_filtered(settings: &RecordSettings, tables: &KeyTables, key: KeyId) -> bool {
    let is_abc = is_alphabetic(key);
    let is_modifier = tables.is_modifier(key);
    let is_pointer = tables.is_pointer_button(key);
    let is_accept = settings.accept_keys.contains(&key);
    let abc_excludes_modifiers = settings.only_abc && !settings.modifier_keys_allowed_with_abc;

    if is_modifier && !settings.modifier_keys_allowed {
        return true;
    }

    if is_pointer && !settings.mouse_keys_allowed {
        return true;
    }

    if !is_abc && is_modifier && abc_excludes_modifiers {
        return true;
    }

    if !is_modifier && !is_abc && settings.only_abc && !is_accept {
        return true;
    }

    if is_modifier && abc_excludes_modifiers && !is_accept {
        return true;
    }

    if settings.blacklist.contains(&key) != settings.blacklist_is_whitelist {
        return true;
    }

    tables.is_blacklisted(key)
}
