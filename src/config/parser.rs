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

//! src/config/parser.rs
//!
//! Record settings file parser
//!
//! Settings files are line-oriented:
//! ```text
//! # Comments and blank lines are ignored
//! max_keys = 3
//! accept_keys = Enter, Esc
//! must_accept = yes
//! ```
//!
//! # Architecture
//! Each line is split into `name = value` with nom combinators, then the
//! value is parsed according to the option's type (count, boolean or key
//! list). Options that never appear keep their `RecordSettings::default()`
//! value. Every error carries its 1-based line number.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res, rest, value},
    multi::separated_list0,
    sequence::delimited,
    IResult, Parser,
};
use std::collections::HashSet;

use crate::config::ConfigError;
use crate::core::{parse_key, KeySet, RecordSettings};

/// Every option a settings file may set
pub const OPTION_NAMES: &[&str] = &[
    "max_keys",
    "blacklist",
    "accept_keys",
    "include_accept_keys",
    "blacklist_is_whitelist",
    "mouse_keys_allowed",
    "only_abc",
    "modifier_keys_allowed",
    "modifier_keys_allowed_with_abc",
    "any_key_accepts",
    "max_keys_include_modifier_keys",
    "must_accept",
];

/// Parse a complete settings file
///
/// # Example
/// ```
/// use keybind_recorder::config::parse_settings;
/// use keybind_recorder::core::KeyId;
///
/// let settings = parse_settings("max_keys = 3\naccept_keys = Enter")?;
/// assert_eq!(settings.max_keys, 3);
/// assert!(settings.accept_keys.contains(&KeyId::RETURN));
/// # Ok::<(), keybind_recorder::config::ConfigError>(())
/// ```
pub fn parse_settings(content: &str) -> Result<RecordSettings, ConfigError> {
    let mut settings = RecordSettings::default();
    let mut seen = HashSet::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let (name, raw_value) = match parse_option_line(line_trimmed) {
            Ok((_, pair)) => pair,
            Err(e) => {
                return Err(ConfigError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        };

        let name = name.to_ascii_lowercase();
        if !OPTION_NAMES.contains(&name.as_str()) {
            return Err(ConfigError::UnknownOption {
                line: line_num,
                name,
            });
        }

        if !seen.insert(name.clone()) {
            return Err(ConfigError::DuplicateOption {
                line: line_num,
                name,
            });
        }

        apply_option(&mut settings, &name, raw_value, line_num)?;
    }

    Ok(settings)
}

/// Parse `name = value`, returning the name and the trimmed value
pub fn parse_option_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, name) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, raw_value) = rest(input)?;

    Ok((input, (name, raw_value.trim())))
}

/// Parse a boolean: true/false, yes/no, on/off, 1/0
pub fn parse_bool(input: &str) -> IResult<&str, bool> {
    all_consuming(alt((
        value(
            true,
            alt((tag_no_case("true"), tag_no_case("yes"), tag_no_case("on"), tag_no_case("1"))),
        ),
        value(
            false,
            alt((tag_no_case("false"), tag_no_case("no"), tag_no_case("off"), tag_no_case("0"))),
        ),
    )))
    .parse(input)
}

/// Parse a non-negative count
pub fn parse_count(input: &str) -> IResult<&str, usize> {
    all_consuming(map_res(digit1, |digits: &str| digits.parse::<usize>())).parse(input)
}

/// Split a comma-separated key list into trimmed key names
///
/// An empty input is an empty list.
pub fn parse_key_names(input: &str) -> IResult<&str, Vec<&str>> {
    let (input, names) = all_consuming(separated_list0(
        delimited(space0, char(','), space0),
        take_while1(|c: char| c != ','),
    ))
    .parse(input)?;

    Ok((input, names.into_iter().map(str::trim).collect()))
}

/// Parse `raw_value` for option `name` and store it in `settings`
fn apply_option(
    settings: &mut RecordSettings,
    name: &str,
    raw_value: &str,
    line: usize,
) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        line,
        option: name.to_string(),
        value: raw_value.to_string(),
    };

    let flag = |target: &mut bool| -> Result<(), ConfigError> {
        let (_, parsed) = parse_bool(raw_value).map_err(|_| invalid())?;
        *target = parsed;
        Ok(())
    };

    match name {
        "max_keys" => {
            let (_, count) = parse_count(raw_value).map_err(|_| invalid())?;
            settings.max_keys = count;
            Ok(())
        }
        "blacklist" => {
            settings.blacklist = parse_key_set(raw_value, line).ok_or_else(invalid)??;
            Ok(())
        }
        "accept_keys" => {
            settings.accept_keys = parse_key_set(raw_value, line).ok_or_else(invalid)??;
            Ok(())
        }
        "include_accept_keys" => flag(&mut settings.include_accept_keys),
        "blacklist_is_whitelist" => flag(&mut settings.blacklist_is_whitelist),
        "mouse_keys_allowed" => flag(&mut settings.mouse_keys_allowed),
        "only_abc" => flag(&mut settings.only_abc),
        "modifier_keys_allowed" => flag(&mut settings.modifier_keys_allowed),
        "modifier_keys_allowed_with_abc" => flag(&mut settings.modifier_keys_allowed_with_abc),
        "any_key_accepts" => flag(&mut settings.any_key_accepts),
        "max_keys_include_modifier_keys" => flag(&mut settings.max_keys_include_modifier_keys),
        "must_accept" => flag(&mut settings.must_accept),
        _ => Err(ConfigError::UnknownOption {
            line,
            name: name.to_string(),
        }),
    }
}

/// Parse a comma-separated key list into a KeySet
///
/// Returns `None` when the list itself is malformed (stray commas), and
/// `Some(Err(..))` when a key name is not recognised.
fn parse_key_set(raw_value: &str, line: usize) -> Option<Result<KeySet, ConfigError>> {
    let (_, names) = parse_key_names(raw_value).ok()?;

    Some(
        names
            .into_iter()
            .map(|name| parse_key(name).map_err(|source| ConfigError::InvalidKey { line, source }))
            .collect(),
    )
}
