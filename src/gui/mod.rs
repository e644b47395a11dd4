// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod keys;
pub mod photos;
pub mod progress;

pub use app::run;

use eframe::egui::Color32;
use crate::parties::PartyColor;

pub fn color32(c: PartyColor) -> Color32 {
    let (r, g, b) = c.to_rgb();
    Color32::from_rgb(r, g, b)
}

/// Black or white, whichever reads better on `bg`.
pub fn text_on(bg: Color32) -> Color32 {
    let luma = 0.299 * f32::from(bg.r()) + 0.587 * f32::from(bg.g()) + 0.114 * f32::from(bg.b());
    if luma > 150.0 { Color32::BLACK } else { Color32::WHITE }
}
