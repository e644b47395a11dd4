// src/game/mod.rs
//
// The game engine. Pure state transitions over an in-memory pool; adapters
// (GUI, CLI) render what it returns and feed user input back in.

pub mod events;
pub mod input;
pub mod session;

pub use events::{ButtonVisual, ChoiceButton, Handled, Outcome, Reveal, Scoreboard, Turn, TurnId};
pub use input::{Command, Input, Key, Mapped, Phase};
pub use session::GameSession;
