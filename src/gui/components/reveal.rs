// src/gui/components/reveal.rs
use eframe::egui::{self, Color32, RichText};

use crate::game::Input;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.session.as_ref() else { return };
    let Some(reveal) = session.last_reveal() else {
        ui.label(RichText::new("Touches 1–9 pour répondre").weak());
        return;
    };

    let (headline, color) = if reveal.correct {
        ("Bonne réponse !", Color32::from_rgb(40, 170, 70))
    } else {
        ("Raté…", Color32::from_rgb(210, 40, 40))
    };
    ui.label(RichText::new(headline).heading().color(color));
    ui.label(RichText::new(reveal.full_name.as_str()).strong());
    ui.label(format!("{} ({})", reveal.answer.display_name, reveal.answer.code));

    ui.add_space(8.0);
    if ui.button("Suivant  ⏎").clicked() {
        let ctx = ui.ctx().clone();
        app.dispatch(&ctx, Input::Next);
    }
}
