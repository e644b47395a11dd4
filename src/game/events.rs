// src/game/events.rs
//
// What the engine hands to the presentation layer.

use crate::model::PoliticianRecord;
use crate::parties::PartyConfig;

/// Serial number of a presented candidate. Photo failures quote it back so a
/// late report for an old turn cannot prune the wrong record.
pub type TurnId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub id: TurnId,
    pub record: PoliticianRecord,
}

/// One rendered choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceButton {
    pub index: usize,
    /// `Some(1..=9)` when a number key selects it.
    pub shortcut: Option<u8>,
    pub party: PartyConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVisual {
    /// Not answered yet; clickable.
    Active,
    /// The right answer.
    Correct,
    /// The player's wrong pick.
    Wrong,
    /// Every other choice once revealed.
    Dimmed,
}

impl ButtonVisual {
    pub fn enabled(self) -> bool {
        matches!(self, ButtonVisual::Active)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub correct: bool,
    pub full_name: String,
    /// Always the candidate's group, never the guess.
    pub answer: PartyConfig,
    pub guessed: String,
    /// One entry per active group code, in choice order.
    pub buttons: Vec<ButtonVisual>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub total: u32,
    pub streak: u32,
    pub best: u32,
}

impl Scoreboard {
    /// Whole-number percentage; 0 before the first answer.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 { 0 } else { self.score * 100 / self.total }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Revealed(Reveal),
    /// `None` when the pool ran dry.
    Advanced(Option<Turn>),
    Ignored,
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}

/// Result of feeding one user input to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handled {
    pub outcome: Outcome,
    /// The adapter must stop the key's default action (Enter/Space).
    pub suppress_default: bool,
}
