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

//! src/core/mod.rs
//!
//! Core keybind logic
//!
//! This module contains the data structures and algorithms for recording
//! and detecting keybinds, including:
//! - Type definitions for keys, key sets and record settings
//! - Key names and name parsing
//! - The device boundary (`KeyState`) and an in-memory device
//! - Key classification and labels
//! - The recording state machine and press/release detection
//! - Settings validation
//!
//! Nothing here blocks, spawns or touches the OS; the host drives every
//! state change by calling in on its own tick.

pub mod classify;
pub mod device;
pub mod keybind;
pub mod keycodes;
pub mod types;
pub mod validator;

pub use classify::{
    active_keys, is_alphabetic, is_key_active, is_modifier, is_pointer_active,
    is_pointer_button, label, KeyTables,
};
pub use device::{KeyState, VirtualKeyboard};
pub use keybind::Keybind;
pub use keycodes::{parse_key, KeyParseError};
pub use types::*;
pub use validator::{validate_settings, SettingsWarning};

#[cfg(test)]
mod tests;
