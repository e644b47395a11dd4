// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{self, Receiver, TryRecvError},
        Arc, Mutex,
    },
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::location::SourceFetcher,
    dataset::{self, Dataset},
    error::GameError,
    game::{GameSession, Input, Outcome, TurnId},
    model::ChamberFilter,
    store::FileStore,
};

use super::{
    components,
    keys,
    photos::{PhotoLoader, PhotoMsg},
    progress::GuiProgress,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Polidle",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub enum Screen {
    Loading,
    /// Terminal: no data from either chamber. No automatic retry.
    Failed(String),
    Playing,
}

pub enum PhotoView {
    Idle,
    Loading(TurnId),
    Ready(TurnId, egui::TextureHandle),
}

pub struct App {
    pub state: AppState,
    pub screen: Screen,
    pub session: Option<GameSession>,

    // loader thread writes here
    pub status: Arc<Mutex<String>>,
    load_rx: Option<Receiver<Result<Dataset, GameError>>>,

    pub photos: PhotoLoader,
    pub photo: PhotoView,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Chargement…")));
        let (tx, rx) = mpsc::channel();

        let sources = state.options.sources.clone();
        let status_w = status.clone();
        let ctx_w = ctx.clone();
        thread::spawn(move || {
            let mut prog = GuiProgress::new(status_w);
            let res = dataset::load(&SourceFetcher, &sources, Some(&mut prog));
            if tx.send(res).is_err() {
                logd!("Init: App gone before datasets finished loading");
            }
            ctx_w.request_repaint();
        });

        logf!("Init: loading datasets, filter={:?}", state.options.filter);

        let photos = PhotoLoader::new(state.options.sources.root.clone());
        Self {
            state,
            screen: Screen::Loading,
            session: None,
            status,
            load_rx: Some(rx),
            photos,
            photo: PhotoView::Idle,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    /// Forward a click to the engine.
    pub fn dispatch(&mut self, ctx: &egui::Context, input: Input) {
        let Some(session) = self.session.as_mut() else { return };
        let handled = session.handle(&input);
        self.apply(ctx, handled.outcome);
    }

    pub fn select_filter(&mut self, ctx: &egui::Context, filter: ChamberFilter) {
        let Some(session) = self.session.as_mut() else { return };
        logf!("UI: Filter {:?} → {:?}", session.filter(), filter);
        self.state.options.filter = filter;
        let turn = session.select_filter(filter);
        self.apply(ctx, Outcome::Advanced(turn));
    }

    fn apply(&mut self, ctx: &egui::Context, outcome: Outcome) {
        match outcome {
            Outcome::Advanced(Some(turn)) => {
                self.photo = PhotoView::Loading(turn.id);
                self.photos.request(&turn, ctx);
            }
            Outcome::Advanced(None) => {
                self.photo = PhotoView::Idle;
                self.set_status("Plus aucun portrait disponible");
            }
            Outcome::Revealed(_) | Outcome::Ignored => {}
        }
    }

    fn poll_loader(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.load_rx else { return };
        let Some(res) = take_load_result(rx) else { return };
        self.load_rx = None;

        match res {
            Ok(data) => {
                let opts = &self.state.options;
                let session = GameSession::seeded(data, Box::new(FileStore::default()), opts.seed, opts.filter);
                let first = session.current_turn();
                self.session = Some(session);
                self.screen = Screen::Playing;
                self.apply(ctx, Outcome::Advanced(first));
            }
            Err(e) => {
                loge!("Init: {}", e);
                self.screen = Screen::Failed(e.to_string());
            }
        }
    }

    fn poll_photos(&mut self, ctx: &egui::Context) {
        for msg in self.photos.poll() {
            let current = self.session.as_ref().and_then(|s| s.current_turn()).map(|t| t.id);
            match msg {
                PhotoMsg::Ready { turn, image } if Some(turn) == current => {
                    let tex = ctx.load_texture(format!("photo-{turn}"), image, egui::TextureOptions::LINEAR);
                    self.photo = PhotoView::Ready(turn, tex);
                }
                PhotoMsg::Failed { turn, reason } if Some(turn) == current => {
                    logw!("Photo: Turn {} failed: {}", turn, reason);
                    if let Some(session) = self.session.as_mut() {
                        let outcome = session.photo_failed(turn);
                        self.apply(ctx, outcome);
                    }
                }
                _ => logd!("Photo: Dropped result for an old turn"),
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        for key in keys::pressed(ctx) {
            let Some(session) = self.session.as_mut() else { return };
            let handled = session.handle(&Input::Key(key));
            if handled.suppress_default {
                keys::consume(ctx, key);
            }
            self.apply(ctx, handled.outcome);
        }
    }
}

/// `None` while the loader is still working. A loader that died without
/// sending counts as a failed load.
fn take_load_result(rx: &Receiver<Result<Dataset, GameError>>) -> Option<Result<Dataset, GameError>> {
    match rx.try_recv() {
        Ok(res) => Some(res),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(GameError::Fetch {
            location: s!("datasets"),
            message: s!("loader thread stopped without a result"),
        })),
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader(ctx);
        if matches!(self.screen, Screen::Playing) {
            self.poll_photos(ctx);
            // before any widget so Enter/Space never reach a focused button
            self.handle_keys(ctx);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            components::top_bar::draw(ui, self);
        });

        if self.state.gui.show_stats && self.session.is_some() {
            egui::SidePanel::right("stats").resizable(false).show(ctx, |ui| {
                components::stats_panel::draw(ui, self);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.screen {
            Screen::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.spinner();
                    ui.label(self.status_text());
                });
            }
            Screen::Failed(msg) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Aucune donnée disponible");
                    ui.label(msg.as_str());
                    ui.label("Vérifiez data/deputes.json et data/senateurs.json, puis relancez.");
                });
            }
            Screen::Playing => {
                ui.vertical_centered(|ui| {
                    components::candidate::draw(ui, self);
                    ui.add_space(12.0);
                    components::choices::draw(ui, self);
                    ui.add_space(12.0);
                    components::reveal::draw(ui, self);
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_result_waits_then_delivers() {
        let (tx, rx) = mpsc::channel();
        assert!(take_load_result(&rx).is_none());
        tx.send(Ok(Dataset::default())).unwrap();
        assert!(matches!(take_load_result(&rx), Some(Ok(_))));
    }

    #[test]
    fn dead_loader_is_a_failed_load() {
        let (tx, rx) = mpsc::channel::<Result<Dataset, GameError>>();
        drop(tx);
        assert!(matches!(take_load_result(&rx), Some(Err(GameError::Fetch { .. }))));
    }
}
