use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct RoutineListProvider;

impl KeybindingProvider for RoutineListProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Routines",
            vec![
                Keybinding::new("q", "quit"),
                Keybinding::new("j/k", "navigate"),
                Keybinding::new("n", "new"),
                Keybinding::new("r", "rename"),
                Keybinding::new("d", "delete"),
                Keybinding::new("J/K", "move"),
                Keybinding::new("e/ENTER", "edit"),
                Keybinding::new("p", "play"),
            ],
        )
    }
}
