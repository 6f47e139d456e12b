// Keyboard shortcuts
use crate::message::Message;
use crate::model::Section;
use eframe::egui;

/// Messages for every shortcut pressed this frame.
pub fn keyboard_messages(ctx: &egui::Context, menu_open: bool) -> Vec<Message> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => handle_key(*key, *modifiers, menu_open),
                _ => None,
            })
            .collect()
    })
}

pub fn handle_key(key: egui::Key, modifiers: egui::Modifiers, menu_open: bool) -> Option<Message> {
    match key {
        egui::Key::Escape if menu_open => Some(Message::CloseMenu),
        _ if modifiers.command => section_for_digit(key).map(Message::NavigateTo),
        _ => None,
    }
}

fn section_for_digit(key: egui::Key) -> Option<Section> {
    let index = match key {
        egui::Key::Num1 => 0,
        egui::Key::Num2 => 1,
        egui::Key::Num3 => 2,
        egui::Key::Num4 => 3,
        egui::Key::Num5 => 4,
        egui::Key::Num6 => 5,
        _ => return None,
    };
    Section::ALL.get(index).copied()
}
