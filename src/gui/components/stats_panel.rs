// src/gui/components/stats_panel.rs
//
// Group sizes in the current pool, biggest first.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{dataset, gui::{app::App, color32}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.session.as_ref() else { return };

    ui.heading("Groupes");
    ui.label(format!("{} portraits en jeu", session.pool().len()));
    ui.separator();

    let stats = dataset::group_stats(session.pool());

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(14.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|_| {});
            header.col(|ui| { ui.strong("Sigle"); });
            header.col(|ui| { ui.strong("Nb"); });
        })
        .body(|mut body| {
            for (code, count) in &stats {
                let party = session.party(code);
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new("■").color(color32(party.color)));
                    });
                    row.col(|ui| {
                        ui.label(code.as_str()).on_hover_text(party.display_name.as_str());
                    });
                    row.col(|ui| {
                        ui.label(count.to_string());
                    });
                });
            }
        });
}
