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

use crate::core::{
    types::{KeyId, KeySet, RecordSettings},
    validator::{validate_settings, validate_settings_with, SettingsWarning},
    KeyTables,
};

#[test]
fn test_default_settings_are_clean() {
    assert!(validate_settings(&RecordSettings::default()).is_empty());
}

#[test]
fn test_zero_max_keys() {
    let settings = RecordSettings {
        max_keys: 0,
        ..Default::default()
    };
    assert_eq!(validate_settings(&settings), vec![SettingsWarning::ZeroMaxKeys]);
}

#[test]
fn test_must_accept_without_accept_keys() {
    let settings = RecordSettings {
        must_accept: true,
        any_key_accepts: false,
        accept_keys: KeySet::new(),
        ..Default::default()
    };
    assert_eq!(
        validate_settings(&settings),
        vec![SettingsWarning::MustAcceptWithoutAcceptKeys]
    );
}

#[test]
fn test_must_accept_overrides_any_key_accepts() {
    let settings = RecordSettings {
        must_accept: true,
        any_key_accepts: true,
        ..Default::default()
    };
    assert_eq!(
        validate_settings(&settings),
        vec![SettingsWarning::AnyKeyAcceptsOverridden]
    );
}

#[test]
fn test_empty_whitelist() {
    let settings = RecordSettings {
        blacklist_is_whitelist: true,
        ..Default::default()
    };
    assert_eq!(validate_settings(&settings), vec![SettingsWarning::EmptyWhitelist]);
}

#[test]
fn test_accept_key_filtered_by_blacklist() {
    let settings = RecordSettings {
        blacklist: [KeyId::ESCAPE].into_iter().collect(),
        ..Default::default()
    };
    assert_eq!(
        validate_settings(&settings),
        vec![SettingsWarning::AcceptKeyFiltered {
            key: KeyId::ESCAPE,
            label: "Esc".to_string(),
        }]
    );
}

#[test]
fn test_accept_key_filtered_by_modifier_rule() {
    let settings = RecordSettings {
        accept_keys: [KeyId::TAB].into_iter().collect(),
        modifier_keys_allowed: false,
        ..Default::default()
    };
    assert_eq!(
        validate_settings(&settings),
        vec![SettingsWarning::AcceptKeyFiltered {
            key: KeyId::TAB,
            label: "Tab".to_string(),
        }]
    );
}

#[test]
fn test_accept_key_filtered_by_global_blacklist() {
    let mut tables = KeyTables::standard_tables();
    tables.blacklist.insert(KeyId::RETURN);

    assert_eq!(
        validate_settings_with(&RecordSettings::default(), &tables),
        vec![SettingsWarning::AcceptKeyFiltered {
            key: KeyId::RETURN,
            label: "Enter".to_string(),
        }]
    );
}

#[test]
fn test_filtered_pointer_button_uses_label_override() {
    let settings = RecordSettings {
        accept_keys: [KeyId::LBUTTON].into_iter().collect(),
        ..Default::default()
    };

    let warnings = validate_settings(&settings);
    assert_eq!(
        warnings,
        vec![SettingsWarning::AcceptKeyFiltered {
            key: KeyId::LBUTTON,
            label: "LBM".to_string(),
        }]
    );
    assert!(warnings[0].to_string().contains("accept key LBM "));
}

#[test]
fn test_filtered_key_uses_custom_table_names() {
    let mut tables = KeyTables::standard_tables();
    tables.blacklist.insert(KeyId::RETURN);
    tables
        .label_overrides
        .insert(KeyId::RETURN, "Return".to_string());

    let settings = RecordSettings {
        accept_keys: [KeyId::RETURN].into_iter().collect(),
        ..Default::default()
    };

    assert_eq!(
        validate_settings_with(&settings, &tables),
        vec![SettingsWarning::AcceptKeyFiltered {
            key: KeyId::RETURN,
            label: "Return".to_string(),
        }]
    );
}

#[test]
fn test_warning_messages() {
    let message = SettingsWarning::AcceptKeyFiltered {
        key: KeyId::RETURN,
        label: "Enter".to_string(),
    }
    .to_string();
    assert!(message.contains("Enter"));
    assert!(SettingsWarning::ZeroMaxKeys.to_string().contains("max_keys"));
}
