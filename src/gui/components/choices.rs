// src/gui/components/choices.rs
//
// One button per active group. Before the answer every button is live; after it
// the correct one is outlined green, a wrong pick red, the rest faded and all
// of them disabled until the next candidate.

use eframe::egui::{self, Color32, RichText, Stroke};

use crate::game::{ButtonVisual, Input};
use crate::gui::{app::App, color32, text_on};

const GREEN: Color32 = Color32::from_rgb(40, 170, 70);
const RED: Color32 = Color32::from_rgb(210, 40, 40);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.session.as_ref() else { return };
    if session.current().is_none() {
        return;
    }

    let visuals: Vec<ButtonVisual> = match session.last_reveal() {
        Some(reveal) => reveal.buttons.clone(),
        None => vec![ButtonVisual::Active; session.choices().len()],
    };

    let mut clicked: Option<String> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        for (choice, visual) in session.choices().iter().zip(visuals.iter().copied()) {
            let fill = color32(choice.party.color);
            let fill = if visual == ButtonVisual::Dimmed { fill.gamma_multiply(0.3) } else { fill };

            let label = match choice.shortcut {
                Some(n) => format!("{n} · {}", choice.party.code),
                None => choice.party.code.clone(),
            };

            let stroke = match visual {
                ButtonVisual::Correct => Stroke::new(3.0, GREEN),
                ButtonVisual::Wrong => Stroke::new(3.0, RED),
                ButtonVisual::Active | ButtonVisual::Dimmed => Stroke::NONE,
            };

            let button = egui::Button::new(RichText::new(label).color(text_on(fill)).strong())
                .fill(fill)
                .stroke(stroke)
                .min_size(egui::vec2(110.0, 36.0));

            let resp = ui
                .add_enabled(visual.enabled(), button)
                .on_hover_text(choice.party.display_name.as_str());
            if resp.clicked() {
                clicked = Some(choice.party.code.clone());
            }
        }
    });

    if let Some(code) = clicked {
        let ctx = ui.ctx().clone();
        app.dispatch(&ctx, Input::Choice(code));
    }
}
