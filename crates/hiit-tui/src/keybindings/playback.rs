use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct PlaybackProvider;

impl KeybindingProvider for PlaybackProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Playback",
            vec![
                Keybinding::new("ESC", "back"),
                Keybinding::new("SPACE", "play/pause"),
                Keybinding::new("h/←", "previous"),
                Keybinding::new("l/→", "next"),
                Keybinding::new("b", "-10s"),
                Keybinding::new("f", "+10s"),
                Keybinding::new("e", "edit"),
            ],
        )
    }
}

pub struct NotFoundProvider;

impl KeybindingProvider for NotFoundProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Not Found",
            vec![
                Keybinding::new("ESC", "routines"),
                Keybinding::new("q", "quit"),
            ],
        )
    }
}
