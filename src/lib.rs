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

//! Keybind Recorder
//!
//! Records keyboard/mouse key combinations interactively and detects when a
//! recorded combination is pressed or released, polling a pluggable
//! key-state source once per host tick.
//!
//! # Features
//!
//! - **Interactive recording:** Keys are collected while held, with accept
//!   keys, release-to-finish and key limits ending the recording
//! - **Filters:** Blacklist/whitelist, pointer buttons, alphabetic-only and
//!   modifier rules decide which keys may be recorded
//! - **Edge detection:** One-shot press and release reports per keybind
//! - **Labels:** Human-readable names such as `Ctrl + Shift + A`
//! - **Settings files:** `name = value` record settings with line-numbered errors
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, key names, classification, the
//!   recording state machine, validation)
//! - **`config`:** Settings files (parsing, loading, path expansion)
//! - **`replay`:** Scripted key frames played through a keybind
//! - **`logging`:** `tracing` subscriber setup for the CLI
//!
//! # Examples
//!
//! ## Recording a keybind
//!
//! ```
//! use keybind_recorder::{label, KeyId, Keybind, VirtualKeyboard};
//!
//! let mut keyboard = VirtualKeyboard::new();
//! let mut keybind = Keybind::new();
//!
//! keybind.record();
//! keyboard.press(KeyId::CONTROL);
//! keyboard.press(KeyId::new(b'K'));
//!
//! // Two keys is the default limit
//! assert!(keybind.update(&keyboard));
//! assert_eq!(label(keybind.keys(), &keyboard), "Ctrl + K");
//! ```
//!
//! ## Detecting presses
//!
//! ```
//! use keybind_recorder::{KeyId, Keybind, RecordSettings, VirtualKeyboard};
//!
//! let keys = [KeyId::CONTROL, KeyId::new(b'S')].into_iter().collect();
//! let mut keybind = Keybind::with_keys(keys, RecordSettings::default());
//! let mut keyboard = VirtualKeyboard::new();
//!
//! keyboard.set_held([KeyId::CONTROL, KeyId::new(b'S')]);
//! assert!(keybind.is_pressed(&keyboard));
//! assert!(!keybind.is_pressed(&keyboard));
//!
//! keyboard.release_all();
//! assert!(keybind.is_released(&keyboard));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod core;
pub mod logging;
pub mod replay;

// Re-export commonly used types for convenience
pub use core::{label, KeyId, KeySet, KeyState, Keybind, RecordSettings, VirtualKeyboard};
