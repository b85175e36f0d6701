use super::colors::*;
use ratatui::style::{Color, Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn flash_marker(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(FLASH_ON).add_modifier(Modifier::BOLD)
    } else {
        label_text()
    }
}

/// Gauge colour for an item relative to the one playing.
pub fn item_gauge(index: usize, current: usize) -> Style {
    let color = match index.cmp(&current) {
        std::cmp::Ordering::Less => PLAYED_ITEM,
        std::cmp::Ordering::Equal => CURRENT_ITEM,
        std::cmp::Ordering::Greater => UPCOMING_ITEM,
    };
    Style::default().fg(color).bg(Color::Black)
}

pub fn routine_gauge() -> Style {
    Style::default().fg(ROUTINE_GAUGE).bg(Color::Black)
}

/// Background wash for the flash overlay; black at 0.0, white at 1.0.
pub fn flash_overlay(level: f64) -> Style {
    let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
    Style::default().bg(Color::Rgb(v, v, v)).fg(Color::Black)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
