// src/gui/components/top_bar.rs
//
// Chamber filter tabs on the left, scoreboard on the right.
// Switching tabs is a full session reset (best streak kept).

use eframe::egui;

use crate::gui::app::App;
use crate::model::ChamberFilter;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Polidle");
        ui.separator();

        let playing = app.session.is_some();
        let current = app.state.options.filter;
        let ctx = ui.ctx().clone();

        for filter in ChamberFilter::ALL {
            let selected = filter == current;
            let resp = ui.selectable_label(selected, filter.title());
            if resp.clicked() && !selected && playing {
                app.select_filter(&ctx, filter);
            }
        }

        ui.separator();
        ui.checkbox(&mut app.state.gui.show_stats, "Groupes");

        let Some(session) = app.session.as_ref() else { return };
        let board = session.scoreboard();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("Record : {}", board.best));
            ui.separator();
            ui.label(format!("Série : {}", board.streak));
            ui.separator();
            ui.label(format!("Score : {}/{} ({}%)", board.score, board.total, board.accuracy()));
        });
    });
}
