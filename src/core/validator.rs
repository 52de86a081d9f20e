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

//! Record settings validation
//!
//! Every `RecordSettings` value is usable: a `Keybind` never rejects one.
//! Some combinations still behave in ways a user almost certainly did not
//! mean (a recording that can never finish, a whitelist that records nothing).
//! This module reports those as warnings so a host or the CLI can surface them.

use thiserror::Error;

use crate::core::classify::KeyTables;
use crate::core::device::VirtualKeyboard;
use crate::core::keybind::is_filtered;
use crate::core::types::{KeyId, RecordSettings};

/// Suspicious settings combinations
#[derive(Debug, Error, PartialEq)]
pub enum SettingsWarning {
    /// `max_keys` is zero
    #[error("max_keys is 0: every recording saves an empty keybind on its first tick")]
    ZeroMaxKeys,

    /// Nothing but the key limit can end the recording
    #[error("must_accept is set but accept_keys is empty: recording only ends at the key limit")]
    MustAcceptWithoutAcceptKeys,

    /// Whitelist mode with nothing listed
    #[error("blacklist is used as a whitelist but lists no keys: nothing can be recorded")]
    EmptyWhitelist,

    /// An accept key the filters skip, so it can never end a recording
    #[error("accept key {label} is filtered out by the other settings and will never be seen")]
    AcceptKeyFiltered { key: KeyId, label: String },

    /// `any_key_accepts` has no effect next to `must_accept`
    #[error("any_key_accepts is ignored because must_accept is set")]
    AnyKeyAcceptsOverridden,
}

/// Checks `settings` against the given classification tables.
///
/// Returns an empty vector for settings with no surprises. Key names in the
/// warnings come from the tables' label overrides, then the standard layout
/// names.
pub fn validate_settings_with(
    settings: &RecordSettings,
    tables: &KeyTables,
) -> Vec<SettingsWarning> {
    let mut warnings = Vec::new();

    if settings.max_keys == 0 {
        warnings.push(SettingsWarning::ZeroMaxKeys);
    }

    if settings.must_accept && settings.accept_keys.is_empty() {
        warnings.push(SettingsWarning::MustAcceptWithoutAcceptKeys);
    }

    if settings.blacklist_is_whitelist && settings.blacklist.is_empty() {
        warnings.push(SettingsWarning::EmptyWhitelist);
    }

    // Skip per-key noise when the whitelist already filters everything
    if !(settings.blacklist_is_whitelist && settings.blacklist.is_empty()) {
        let layout = VirtualKeyboard::new();
        for key in &settings.accept_keys {
            if is_filtered(settings, tables, *key) {
                warnings.push(SettingsWarning::AcceptKeyFiltered {
                    key: *key,
                    label: tables.key_label(*key, &layout),
                });
            }
        }
    }

    if settings.must_accept && settings.any_key_accepts {
        warnings.push(SettingsWarning::AnyKeyAcceptsOverridden);
    }

    warnings
}

/// Checks `settings` against the standard classification tables.
pub fn validate_settings(settings: &RecordSettings) -> Vec<SettingsWarning> {
    validate_settings_with(settings, &KeyTables::standard())
}
