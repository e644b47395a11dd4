// src/gui/components/mod.rs
pub mod candidate;
pub mod choices;
pub mod reveal;
pub mod stats_panel;
pub mod top_bar;
