// src/gui/components/candidate.rs
use eframe::egui::{self, vec2};

use crate::config::consts::PHOTO_SIZE;
use crate::gui::app::{App, PhotoView};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.session.as_ref() else { return };

    let Some(record) = session.current() else {
        ui.add_space(80.0);
        ui.heading("Plus aucun portrait à deviner");
        ui.label("Changez de mode pour rejouer.");
        return;
    };
    let chamber = record.chamber;

    let box_size = vec2(PHOTO_SIZE, PHOTO_SIZE);
    match &app.photo {
        PhotoView::Ready(_, tex) => {
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(tex))
                    .fit_to_exact_size(box_size),
            );
        }
        PhotoView::Loading(_) | PhotoView::Idle => {
            // keep the layout still while the photo is on its way
            let (rect, _) = ui.allocate_exact_size(box_size, egui::Sense::hover());
            egui::Spinner::new().paint_at(ui, rect.shrink(PHOTO_SIZE / 2.0 - 12.0));
        }
    }

    ui.label(egui::RichText::new(chamber.label()).italics());
    ui.label(egui::RichText::new(chamber.house()).small().weak());
}
