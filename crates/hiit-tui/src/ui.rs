use crate::app::{App, AppMode, PlaybackSession};
use crate::components::{render_confirm_popup, render_input_popup};
use crate::keybindings::KeybindingRegistry;
use crate::route::Route;
use crate::theme::*;
use hiit_domain::{format_time, PlaybackEngine, Routine};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);

    match &app.route {
        Route::RoutineList => render_routine_list(app, frame, chunks[1]),
        Route::EditRoutine(_) => match app.current_routine() {
            Some(routine) => render_routine_editor(app, routine, frame, chunks[1]),
            None => render_not_found(frame, chunks[1], "Routine not found"),
        },
        Route::PlayRoutine(_) => match (&app.playback, app.current_routine()) {
            (Some(playback), Some(routine)) => {
                render_playback(playback, &routine.name, frame, chunks[1])
            }
            _ => render_not_found(frame, chunks[1], "Routine not found"),
        },
        Route::NotFound(path) => {
            render_not_found(frame, chunks[1], &format!("Nothing at {}", path))
        }
    }

    render_footer(app, frame, chunks[2]);

    match app.mode {
        AppMode::Normal => {}
        AppMode::RenameRoutine => render_input_popup(
            frame,
            "Rename Routine",
            "Name:",
            app.input.as_str(),
            app.input.cursor_pos(),
        ),
        AppMode::RenameItem => render_input_popup(
            frame,
            "Rename Item",
            "Name:",
            app.input.as_str(),
            app.input.cursor_pos(),
        ),
        AppMode::SetItemDuration => render_input_popup(
            frame,
            "Set Duration",
            "Seconds (1-5999):",
            app.input.as_str(),
            app.input.cursor_pos(),
        ),
        AppMode::ConfirmDeleteRoutine => {
            let name = app.selected_routine().map_or("", |r| r.name.as_str());
            render_confirm_popup(frame, "Delete Routine", &format!("Delete '{}'?", name));
        }
        AppMode::ConfirmDeleteItem => {
            let name = app.selected_item().map_or("", |i| i.name.as_str());
            render_confirm_popup(frame, "Delete Item", &format!("Delete '{}'?", name));
        }
    }

    if let Some(engine) = app.playback.as_ref().map(|p| &p.engine) {
        if engine.flash_visible() {
            let area = frame.area();
            frame
                .buffer_mut()
                .set_style(area, flash_overlay(engine.flash_level()));
        }
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("hiit", bold_highlight()),
        Span::styled(format!("  {}", app.href()), label_text()),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(unfocused_border()),
    );
    frame.render_widget(header, area);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focused_border())
}

fn render_routine_list(app: &App, frame: &mut Frame, area: Rect) {
    let block = panel("Routines");
    let routines = app.editor.routines();

    if routines.is_empty() {
        let hint = Paragraph::new("No routines yet. Press n to create a routine.")
            .style(label_text())
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = routines
        .iter()
        .enumerate()
        .map(|(index, routine)| {
            let line = Line::from(vec![
                Span::styled(routine.name.clone(), normal_text()),
                Span::styled(
                    format!("  {}", format_time(routine.total_duration())),
                    highlight_text(),
                ),
                Span::styled(format!("  {} items", routine.items.len()), label_text()),
            ]);
            ListItem::new(line).style(selected_item(app.routine_selection.is_selected(index)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_routine_editor(app: &App, routine: &Routine, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(routine.name.clone(), bold_highlight()),
        Span::styled(
            format!("  total {}", format_time(routine.total_duration())),
            label_text(),
        ),
    ]))
    .block(panel("Routine"));
    frame.render_widget(summary, chunks[0]);

    let block = panel("Items");
    if routine.items.is_empty() {
        let hint = Paragraph::new("No items. Press a to add one.")
            .style(label_text())
            .block(block);
        frame.render_widget(hint, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = routine
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let line = Line::from(vec![
                Span::styled(item.name.clone(), normal_text()),
                Span::styled(format!("  {}s", item.duration), label_text()),
                Span::styled(format!("  {}", format_time(item.duration)), highlight_text()),
                Span::styled(
                    if item.flash { "  flash" } else { "  no flash" },
                    flash_marker(item.flash),
                ),
            ]);
            ListItem::new(line).style(selected_item(app.item_selection.is_selected(index)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), chunks[1]);
}

fn render_playback(playback: &PlaybackSession, name: &str, frame: &mut Frame, area: Rect) {
    let engine = &playback.engine;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let play_label = if engine.is_playing() { "⏸ pause" } else { "▶ play" };
    let controls = Paragraph::new(format!(
        "« -10s   ⏮ prev   {}   next ⏭   +10s »",
        play_label
    ))
    .style(normal_text())
    .block(panel("Controls"));
    frame.render_widget(controls, chunks[0]);

    let routine_label = format!(
        "{}  {} / {}",
        name,
        format_time(engine.cumulative_elapsed()),
        format_time(engine.total_duration())
    );
    let routine_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(routine_gauge())
        .ratio(engine.routine_progress())
        .label(routine_label);
    frame.render_widget(routine_gauge, chunks[1]);

    render_item_gauges(engine, frame, chunks[2]);
}

fn render_item_gauges(engine: &PlaybackEngine, frame: &mut Frame, area: Rect) {
    let block = panel("Items");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = engine.items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("This routine has no items.").style(label_text()),
            inner,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(items.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    let current = engine.state().item_index;
    for (index, (item, row)) in items.iter().zip(rows.iter()).enumerate() {
        let (ratio, label) = if index == current {
            (
                engine.item_progress(),
                format!(
                    "{}  {} / {}",
                    item.name,
                    format_time(engine.state().elapsed_in_item),
                    format_time(item.duration)
                ),
            )
        } else {
            let ratio = if index < current { 1.0 } else { 0.0 };
            (ratio, format!("{}  {}", item.name, format_time(item.duration)))
        };

        let gauge = Gauge::default()
            .gauge_style(item_gauge(index, current))
            .ratio(ratio)
            .label(label);
        frame.render_widget(gauge, *row);
    }
}

fn render_not_found(frame: &mut Frame, area: Rect, message: &str) {
    let notice = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), error_text())),
        Line::from(""),
        Line::from(Span::styled("Press ESC to go back to the routines.", label_text())),
    ])
    .wrap(Wrap { trim: true })
    .block(panel("Not Found"));
    frame.render_widget(notice, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(status.clone(), error_text())),
        None => {
            let context = KeybindingRegistry::get_provider(app).get_context();
            Line::from(Span::styled(context.footer_text(), label_text()))
        }
    };
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
