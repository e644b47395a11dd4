// src/gui/photos.rs
//
// Fetch + decode candidate photos off the UI thread.
// Results come back tagged with the turn they were requested for; the app
// drops anything that no longer matches the current turn.

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use eframe::egui;

use crate::{
    core::location::Location,
    game::{Turn, TurnId},
};

pub enum PhotoMsg {
    Ready { turn: TurnId, image: egui::ColorImage },
    Failed { turn: TurnId, reason: String },
}

pub struct PhotoLoader {
    root: Location,
    tx: Sender<PhotoMsg>,
    rx: Receiver<PhotoMsg>,
}

impl PhotoLoader {
    pub fn new(root: Location) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { root, tx, rx }
    }

    pub fn request(&self, turn: &Turn, ctx: &egui::Context) {
        let id = turn.id;
        let reference = turn.record.photo.clone();
        let located = self.root.join(&reference);
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        logd!("Photo: Request turn={} {}", id, reference);

        thread::spawn(move || {
            let msg = match located {
                Err(e) => PhotoMsg::Failed { turn: id, reason: e.to_string() },
                Ok(loc) => match loc.fetch() {
                    Err(e) => PhotoMsg::Failed { turn: id, reason: format!("{loc}: {e}") },
                    Ok(bytes) => match decode(&bytes) {
                        Ok(image) => PhotoMsg::Ready { turn: id, image },
                        Err(e) => PhotoMsg::Failed { turn: id, reason: format!("{loc}: {e}") },
                    },
                },
            };
            let _ = tx.send(msg);
            ctx.request_repaint();
        });
    }

    /// Everything that arrived since the last frame.
    pub fn poll(&self) -> Vec<PhotoMsg> {
        self.rx.try_iter().collect()
    }
}

pub fn decode(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
