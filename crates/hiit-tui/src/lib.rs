pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod keybindings;
pub mod route;
pub mod theme;
pub mod timers;
pub mod ui;

pub use app::{App, AppMode};
pub use route::Route;
