use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const CURRENT_ITEM: Color = Color::Green;
pub const PLAYED_ITEM: Color = Color::DarkGray;
pub const UPCOMING_ITEM: Color = Color::Gray;
pub const ROUTINE_GAUGE: Color = Color::Cyan;

pub const FLASH_ON: Color = Color::LightRed;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
