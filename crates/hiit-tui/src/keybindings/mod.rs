pub mod dialog_modes;
pub mod playback;
pub mod registry;
pub mod routine_editor;
pub mod routine_list;

pub use registry::KeybindingRegistry;

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// `key: description` pairs joined for a one-line footer.
    pub fn footer_text(&self) -> String {
        self.bindings
            .iter()
            .map(|binding| format!("{}: {}", binding.key, binding.description))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}
