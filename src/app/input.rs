//! Keyboard Event Translation
//!
//! Reduces egui input events to the key inputs the session understands.
//! Enter (including keypad Enter) submits, Backspace deletes, text events
//! supply characters; everything else is dropped here.

use eframe::egui;
use termo::terminal::{KeyInput, WindowControl};

/// Translate this frame's events into session key inputs, in order
pub(super) fn key_inputs(events: &[egui::Event]) -> Vec<KeyInput> {
    let mut keys = Vec::new();

    for event in events {
        match event {
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                ..
            } => keys.push(KeyInput::Submit),
            egui::Event::Key {
                key: egui::Key::Backspace,
                pressed: true,
                ..
            } => keys.push(KeyInput::Backspace),
            egui::Event::Text(text) => keys.extend(text.chars().map(KeyInput::Char)),
            _ => {}
        }
    }

    keys
}

/// Closes the native window through the egui viewport
pub(super) struct ViewportControl<'a> {
    ctx: &'a egui::Context,
}

impl<'a> ViewportControl<'a> {
    pub(super) fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl WindowControl for ViewportControl<'_> {
    fn request_termination(&mut self) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}
