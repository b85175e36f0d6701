use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct RoutineEditorProvider;

impl KeybindingProvider for RoutineEditorProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Edit Routine",
            vec![
                Keybinding::new("ESC", "back"),
                Keybinding::new("j/k", "navigate"),
                Keybinding::new("a", "add item"),
                Keybinding::new("r", "rename item"),
                Keybinding::new("t", "set duration"),
                Keybinding::new("f", "toggle flash"),
                Keybinding::new("d", "delete item"),
                Keybinding::new("J/K", "move"),
                Keybinding::new("R", "rename routine"),
                Keybinding::new("p", "play"),
            ],
        )
    }
}
