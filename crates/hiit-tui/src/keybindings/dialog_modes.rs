use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct DialogInputProvider {
    title: String,
}

impl DialogInputProvider {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl KeybindingProvider for DialogInputProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            self.title.clone(),
            vec![
                Keybinding::new("ENTER", "confirm"),
                Keybinding::new("ESC", "cancel"),
            ],
        )
    }
}

pub struct DeleteConfirmProvider {
    item_type: String,
}

impl DeleteConfirmProvider {
    pub fn new(item_type: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
        }
    }
}

impl KeybindingProvider for DeleteConfirmProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            format!("Delete {}", self.item_type),
            vec![
                Keybinding::new("y", "delete"),
                Keybinding::new("n/ESC", "keep"),
            ],
        )
    }
}
