// src/gui/keys.rs
// egui key events → engine keys, and swallowing the ones the engine claimed.

use eframe::egui;

use crate::game::Key;

/// Fresh, unmodified key presses this frame.
pub fn pressed(ctx: &egui::Context) -> Vec<Key> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|e| match e {
                egui::Event::Key { key, pressed: true, repeat: false, modifiers, .. }
                    if modifiers.is_none() => translate(*key),
                _ => None,
            })
            .collect()
    })
}

fn translate(key: egui::Key) -> Option<Key> {
    use egui::Key as K;
    Some(match key {
        K::Num0 => Key::Digit(0),
        K::Num1 => Key::Digit(1),
        K::Num2 => Key::Digit(2),
        K::Num3 => Key::Digit(3),
        K::Num4 => Key::Digit(4),
        K::Num5 => Key::Digit(5),
        K::Num6 => Key::Digit(6),
        K::Num7 => Key::Digit(7),
        K::Num8 => Key::Digit(8),
        K::Num9 => Key::Digit(9),
        K::Enter => Key::Enter,
        K::Space => Key::Space,
        _ => return None,
    })
}

/// Remove the key from this frame's input so focused widgets never see it.
pub fn consume(ctx: &egui::Context, key: Key) {
    let k = match key {
        Key::Enter => egui::Key::Enter,
        Key::Space => egui::Key::Space,
        _ => return,
    };
    ctx.input_mut(|i| {
        i.consume_key(egui::Modifiers::NONE, k);
    });
}
