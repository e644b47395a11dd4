// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod parties;
pub mod progress;
pub mod store;

pub mod dataset;
pub mod game;

pub mod gui;
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{GameError, Result};
