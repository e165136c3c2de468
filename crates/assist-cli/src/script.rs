//! Interaction scripts for `assisttool replay`.
//!
//! One step per line; blank lines and lines starting with `#` are skipped.
//!
//! | step                  | effect                                           |
//! |-----------------------|--------------------------------------------------|
//! | `set <text>`          | replace the field value, no input event          |
//! | `type <text>`         | insert at the caret, then fire an input event    |
//! | `select <start> <end>`| pointer-down, select, move, pointer-up on field  |
//! | `click <channel> <i>` | click row `i` of the `typo`/`autocomplete` panel |
//! | `key <name>`          | key-up with a DOM key name                       |
//! | `wait`                | deliver every in-flight result                   |
//! | `show`                | print field and panels                           |

use assist_engine::{Channel, DomEvent, EventTarget, Key, MemoryField, TextField};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Set(String),
    Type(String),
    Select { start: usize, end: usize },
    Click { channel: Channel, index: usize },
    Key(String),
    Wait,
    Show,
}

pub fn parse_script(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let err = |reason: String| ScriptError { line, reason };
        let trimmed = raw.trim_start();
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r),
            None => (trimmed.trim_end(), ""),
        };
        let step = match command {
            "set" => Step::Set(rest.to_string()),
            "type" => {
                if rest.is_empty() {
                    return Err(err("type needs text".into()));
                }
                Step::Type(rest.to_string())
            }
            "select" => {
                let mut nums = rest.split_whitespace().map(str::parse::<usize>);
                match (nums.next(), nums.next(), nums.next()) {
                    (Some(Ok(start)), Some(Ok(end)), None) if start <= end => {
                        Step::Select { start, end }
                    }
                    _ => return Err(err(format!("select needs <start> <end>, got {rest:?}"))),
                }
            }
            "click" => {
                let parts: Vec<&str> = rest.split_whitespace().collect();
                let &[channel, index] = parts.as_slice() else {
                    return Err(err("click needs <typo|autocomplete> <index>".into()));
                };
                let channel = parse_channel(channel)
                    .ok_or_else(|| err(format!("unknown channel {channel:?}")))?;
                let index = index
                    .parse()
                    .map_err(|_| err(format!("bad row index {index:?}")))?;
                Step::Click { channel, index }
            }
            "key" => match rest.trim() {
                "" => return Err(err("key needs a key name".into())),
                name => Step::Key(name.to_string()),
            },
            "wait" => Step::Wait,
            "show" => Step::Show,
            other => return Err(err(format!("unknown command {other:?}"))),
        };
        steps.push(step);
    }
    Ok(steps)
}

fn parse_channel(s: &str) -> Option<Channel> {
    match s {
        "typo" => Some(Channel::Typo),
        "autocomplete" | "auto" => Some(Channel::Autocomplete),
        _ => None,
    }
}

/// Field edits a step applies before its events.
pub fn apply_edit(step: &Step, field: &mut MemoryField) {
    match step {
        Step::Set(text) => field.set_value(text),
        Step::Type(text) => field.type_text(text),
        _ => {}
    }
}

/// Page events a step fires, in order. For `Select` the caller sets the
/// selection right after the pointer-down.
pub fn events(step: &Step) -> Vec<DomEvent> {
    match step {
        Step::Type(_) => vec![DomEvent::Input],
        Step::Select { .. } => vec![
            DomEvent::PointerDown,
            DomEvent::PointerMove,
            DomEvent::PointerUp(EventTarget::Field),
        ],
        Step::Click { channel, index } => vec![DomEvent::RowClick {
            channel: *channel,
            index: *index,
        }],
        Step::Key(name) => vec![DomEvent::KeyUp(Key::from_dom(name))],
        Step::Set(_) | Step::Wait | Step::Show => Vec::new(),
    }
}
