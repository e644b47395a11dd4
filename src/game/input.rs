// src/game/input.rs
//
// Clicks and keys map onto two engine operations: guess and advance.
// Anything that does not fit the current phase maps to nothing.

use crate::config::consts::MAX_SHORTCUTS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Number row / keypad, 0..=9
    Digit(u8),
    Enter,
    Space,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Click on a rendered party button
    Choice(String),
    /// Click on the "next" control
    Next,
    Key(Key),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Advance,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapped {
    pub command: Option<Command>,
    /// Enter/Space consumed as "advance": the adapter must swallow the key.
    pub suppress_default: bool,
}

impl Mapped {
    fn none() -> Self {
        Self { command: None, suppress_default: false }
    }
}

pub fn map(input: &Input, phase: Phase, active_codes: &[String]) -> Mapped {
    match (phase, input) {
        (Phase::Unanswered, Input::Choice(code)) => Mapped {
            command: Some(Command::Guess(code.clone())),
            suppress_default: false,
        },
        (Phase::Unanswered, Input::Key(Key::Digit(d))) => {
            let d = *d as usize;
            if d == 0 || d > MAX_SHORTCUTS {
                return Mapped::none();
            }
            match active_codes.get(d - 1) {
                Some(code) => Mapped {
                    command: Some(Command::Guess(code.clone())),
                    suppress_default: false,
                },
                None => Mapped::none(),
            }
        }
        (Phase::Answered, Input::Next) => Mapped {
            command: Some(Command::Advance),
            suppress_default: false,
        },
        (Phase::Answered, Input::Key(Key::Enter | Key::Space)) => Mapped {
            command: Some(Command::Advance),
            suppress_default: true,
        },
        _ => Mapped::none(),
    }
}

/// Shortcut label for the choice at `index`, if it has one.
pub fn shortcut_for(index: usize) -> Option<u8> {
    (index < MAX_SHORTCUTS).then(|| (index + 1) as u8)
}
