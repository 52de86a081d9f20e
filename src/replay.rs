//! Replay scripts
//!
//! A script is a list of frames, one per line, each naming the keys held
//! during one tick:
//!
//! ```text
//! # hold Ctrl, then Ctrl+K for three ticks, then let go
//! Ctrl
//! Ctrl + K *3
//! -
//! ```
//!
//! `-` (or `none`) is a tick with nothing held; `*N` repeats a frame. Keys
//! use the same names as settings files, so a key whose name contains `+`
//! or `*` must be written by alias or code (`NumAdd`, `0x6A`).
//!
//! `Script::run` plays the frames through a `Keybind` the way a host's tick
//! loop would: it records until the keybind commits, then polls for press
//! and release edges over the remaining frames.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{parse_key, KeyParseError, KeySet, Keybind, VirtualKeyboard};

/// Largest `*N` a single line may use
pub const MAX_REPEAT: usize = 100_000;

/// Script parse errors with line number context
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("Invalid key on line {line}: {source}")]
    InvalidKey {
        line: usize,
        #[source]
        source: KeyParseError,
    },

    #[error("Invalid repeat count '{count}' on line {line} (expected 0-{max})", max = MAX_REPEAT)]
    InvalidRepeat { line: usize, count: String },
}

/// Held-key frames, one per tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    frames: Vec<KeySet>,
}

/// A press or release edge
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Edge {
    Pressed,
    Released,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Pressed => write!(f, "pressed"),
            Edge::Released => write!(f, "released"),
        }
    }
}

/// What happened on one recording tick
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingTick {
    pub tick: usize,
    pub held: KeySet,
    /// Transient keys after the tick, or the committed keys on the final tick
    pub preview: KeySet,
    pub finished: bool,
}

/// An edge observed after recording finished
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeEvent {
    pub tick: usize,
    pub edge: Edge,
}

/// Outcome of a replay
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplayReport {
    pub recording: Vec<RecordingTick>,
    /// Committed keys, or `None` if the script ended mid-recording
    pub recorded: Option<KeySet>,
    pub events: Vec<EdgeEvent>,
}

impl Script {
    pub fn new(frames: Vec<KeySet>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[KeySet] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Plays every frame through `keybind`.
    ///
    /// Starts a recording, ticks `update` until it commits, then polls
    /// `is_pressed` and `is_released` on each remaining frame. A recording
    /// still running when the frames run out is stopped without saving.
    pub fn run(&self, keybind: &mut Keybind) -> ReplayReport {
        let mut keyboard = VirtualKeyboard::new();
        let mut report = ReplayReport::default();

        keybind.record();

        for (tick, frame) in self.frames.iter().enumerate() {
            keyboard.set_held(frame.iter().copied());

            if keybind.is_recording() {
                let finished = keybind.update(&keyboard);
                let preview = if finished {
                    keybind.keys().clone()
                } else {
                    keybind.recording_preview()
                };

                report.recording.push(RecordingTick {
                    tick,
                    held: frame.clone(),
                    preview,
                    finished,
                });

                if finished {
                    debug!(tick, "Replay recording finished");
                    report.recorded = Some(keybind.keys().clone());
                }
                continue;
            }

            if keybind.is_pressed(&keyboard) {
                report.events.push(EdgeEvent {
                    tick,
                    edge: Edge::Pressed,
                });
            }

            if keybind.is_released(&keyboard) {
                report.events.push(EdgeEvent {
                    tick,
                    edge: Edge::Released,
                });
            }
        }

        if keybind.is_recording() {
            warn!("Script ended before the recording finished");
            keybind.stop();
        }

        report
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_script(s)
    }
}

/// Parse a script, expanding `*N` repeats
pub fn parse_script(content: &str) -> Result<Script, ScriptError> {
    let mut frames = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let (keys_part, repeat) = split_repeat(line_trimmed, line_num)?;
        let frame = parse_frame(keys_part, line_num)?;

        frames.extend(std::iter::repeat(frame).take(repeat));
    }

    Ok(Script { frames })
}

/// Split off a trailing `*N`
fn split_repeat(line: &str, line_num: usize) -> Result<(&str, usize), ScriptError> {
    match line.rsplit_once('*') {
        Some((keys, count)) => {
            let count = count.trim();
            match count.parse::<usize>() {
                Ok(n) if n <= MAX_REPEAT => Ok((keys.trim(), n)),
                _ => Err(ScriptError::InvalidRepeat {
                    line: line_num,
                    count: count.to_string(),
                }),
            }
        }
        None => Ok((line, 1)),
    }
}

/// Parse the keys of one frame
fn parse_frame(keys: &str, line_num: usize) -> Result<KeySet, ScriptError> {
    if keys == "-" || keys.eq_ignore_ascii_case("none") {
        return Ok(KeySet::new());
    }

    keys.split('+')
        .map(|name| {
            parse_key(name).map_err(|source| ScriptError::InvalidKey {
                line: line_num,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyId, RecordSettings};

    fn set(keys: &[KeyId]) -> KeySet {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_parse_script_frames() {
        let script = parse_script("# comment\nCtrl\n\nCtrl + K\n-\nnone").unwrap();

        assert_eq!(
            script.frames(),
            &[
                set(&[KeyId::CONTROL]),
                set(&[KeyId::CONTROL, KeyId::new(b'K')]),
                KeySet::new(),
                KeySet::new(),
            ]
        );
    }

    #[test]
    fn test_parse_script_repeat() {
        let script = parse_script("A *3\n- * 2").unwrap();
        assert_eq!(script.len(), 5);
        assert_eq!(script.frames()[2], set(&[KeyId::new(b'A')]));
        assert!(script.frames()[4].is_empty());
    }

    #[test]
    fn test_parse_script_zero_repeat_drops_frame() {
        let script = parse_script("A *0\nB").unwrap();
        assert_eq!(script.frames(), &[set(&[KeyId::new(b'B')])]);
    }

    #[test]
    fn test_parse_script_rejects_huge_repeat() {
        let at_limit = format!("A *{}", MAX_REPEAT);
        assert_eq!(parse_script(&at_limit).unwrap().len(), MAX_REPEAT);

        assert_eq!(
            parse_script("-\nA *18446744073709551615"),
            Err(ScriptError::InvalidRepeat {
                line: 2,
                count: "18446744073709551615".to_string(),
            })
        );

        let over_limit = format!("A *{}", MAX_REPEAT + 1);
        assert!(matches!(
            parse_script(&over_limit),
            Err(ScriptError::InvalidRepeat { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_script_errors() {
        assert_eq!(
            parse_script("A\nCtrl + Hyper"),
            Err(ScriptError::InvalidKey {
                line: 2,
                source: KeyParseError::UnknownName("Hyper".to_string()),
            })
        );
        assert_eq!(
            parse_script("A *lots"),
            Err(ScriptError::InvalidRepeat {
                line: 1,
                count: "lots".to_string(),
            })
        );
        assert!(matches!(
            parse_script("Ctrl +"),
            Err(ScriptError::InvalidKey {
                source: KeyParseError::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_run_records_then_reports_edges() {
        let script: Script = "Ctrl\nCtrl + K\n-\nCtrl + K *2\n-".parse().unwrap();
        let mut keybind = Keybind::new();

        let report = script.run(&mut keybind);

        let expected = set(&[KeyId::CONTROL, KeyId::new(b'K')]);
        assert_eq!(report.recorded, Some(expected.clone()));
        assert_eq!(report.recording.len(), 2);
        assert!(!report.recording[0].finished);
        assert_eq!(report.recording[0].preview, set(&[KeyId::CONTROL]));
        assert!(report.recording[1].finished);
        assert_eq!(report.recording[1].preview, expected);

        assert_eq!(
            report.events,
            vec![
                EdgeEvent {
                    tick: 3,
                    edge: Edge::Pressed,
                },
                EdgeEvent {
                    tick: 5,
                    edge: Edge::Released,
                },
            ]
        );
        assert_eq!(keybind.keys(), &expected);
    }

    #[test]
    fn test_run_unfinished_recording_is_stopped() {
        let settings = RecordSettings {
            max_keys: 5,
            must_accept: true,
            ..Default::default()
        };
        let mut keybind = Keybind::with_settings(settings);
        let script: Script = "A\n-\nB".parse().unwrap();

        let report = script.run(&mut keybind);

        assert_eq!(report.recorded, None);
        assert!(report.events.is_empty());
        assert!(!keybind.is_recording());
        assert!(keybind.is_empty());
    }
}
