use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hiit_core::{HiitResult, InputState, SelectionState};
use hiit_domain::{parse_duration, Item, PlaybackEngine, Routine, RoutineEditor, RoutineId};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc::UnboundedSender;

use crate::dialog::{handle_confirm_input, handle_dialog_input, DialogAction};
use crate::events::{should_quit, Event, EventHandler};
use crate::route::Route;
use crate::timers::PlaybackTimers;
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    RenameRoutine,
    RenameItem,
    SetItemDuration,
    ConfirmDeleteRoutine,
    ConfirmDeleteItem,
}

/// Everything that exists only while the playback view is shown.
///
/// Dropping it aborts the timers.
pub struct PlaybackSession {
    pub routine_id: RoutineId,
    pub engine: PlaybackEngine,
    session: u64,
    timers: Option<PlaybackTimers>,
}

impl PlaybackSession {
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn has_timers(&self) -> bool {
        self.timers.is_some()
    }
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub route: Route,
    pub editor: RoutineEditor,
    pub base_path: String,
    pub routine_selection: SelectionState,
    pub item_selection: SelectionState,
    pub playback: Option<PlaybackSession>,
    /// Last error shown in the footer; cleared on the next key.
    pub status: Option<String>,
    event_tx: Option<UnboundedSender<Event>>,
    next_session: u64,
}

impl App {
    pub fn new(editor: RoutineEditor, base_path: impl Into<String>) -> Self {
        let mut routine_selection = SelectionState::new();
        routine_selection.clamp(editor.routines().len());

        Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            route: Route::RoutineList,
            editor,
            base_path: base_path.into(),
            routine_selection,
            item_selection: SelectionState::new(),
            playback: None,
            status: None,
            event_tx: None,
            next_session: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Timers need somewhere to send their ticks. Until a sender is attached,
    /// playback only moves on explicit events.
    pub fn attach_event_sender(&mut self, tx: UnboundedSender<Event>) {
        if let Some(playback) = self.playback.as_mut() {
            if playback.timers.is_none() {
                playback.timers = Some(PlaybackTimers::start(tx.clone(), playback.session));
            }
        }
        self.event_tx = Some(tx);
    }

    pub fn href(&self) -> String {
        self.route.href(&self.base_path)
    }

    pub fn open_path(&mut self, path: &str) {
        let route = Route::parse(path, &self.base_path);
        self.navigate(route);
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating to {}", route.href(&self.base_path));

        self.playback = None;
        self.mode = AppMode::Normal;
        self.item_selection.clear();

        match &route {
            Route::RoutineList => {
                if let Some(id) = self.route.routine_id() {
                    let index = self.editor.routines().iter().position(|r| r.id == id);
                    self.routine_selection.set(index);
                }
                self.routine_selection.clamp(self.editor.routines().len());
            }
            Route::EditRoutine(id) => {
                if let Some(routine) = self.editor.routine(id) {
                    self.item_selection.clamp(routine.items.len());
                }
            }
            Route::PlayRoutine(id) => {
                if let Some(routine) = self.editor.routine(id).cloned() {
                    self.playback = Some(self.start_session(routine));
                }
            }
            Route::NotFound(path) => {
                tracing::warn!("No view at {}", path);
            }
        }

        self.route = route;
    }

    fn start_session(&mut self, routine: Routine) -> PlaybackSession {
        self.next_session += 1;
        let session = self.next_session;
        let timers = self
            .event_tx
            .clone()
            .map(|tx| PlaybackTimers::start(tx, session));
        PlaybackSession {
            engine: PlaybackEngine::for_routine(&routine),
            routine_id: routine.id,
            session,
            timers,
        }
    }

    pub fn current_routine(&self) -> Option<&Routine> {
        self.editor.routine(self.route.routine_id()?)
    }

    pub fn selected_routine(&self) -> Option<&Routine> {
        self.editor.routines().get(self.routine_selection.get()?)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.current_routine()?.items.get(self.item_selection.get()?)
    }

    fn report<T>(&mut self, result: HiitResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                if e.is_not_found() {
                    tracing::warn!("{}", e);
                } else {
                    tracing::error!("{}", e);
                }
                self.status = Some(e.to_string());
                None
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => {}
            Event::PlaybackTick { session } => {
                if let Some(playback) = self.playback.as_mut().filter(|p| p.session == session) {
                    if let Some(event) = playback.engine.tick() {
                        tracing::debug!("Playback event: {:?}", event);
                    }
                }
            }
            Event::FlashTick { session } => {
                if let Some(playback) = self.playback.as_mut().filter(|p| p.session == session) {
                    playback.engine.decay_flash();
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        self.status = None;

        match self.mode {
            AppMode::Normal => {
                if should_quit(&key) {
                    self.quit();
                    return;
                }
                match self.route.clone() {
                    Route::RoutineList => self.handle_list_key(key.code),
                    Route::EditRoutine(id) if self.editor.routine(&id).is_some() => {
                        self.handle_editor_key(&id, key.code)
                    }
                    Route::PlayRoutine(id) if self.playback.is_some() => {
                        self.handle_playback_key(&id, key.code)
                    }
                    _ => {
                        if key.code == KeyCode::Esc {
                            self.navigate(Route::RoutineList);
                        }
                    }
                }
            }
            AppMode::RenameRoutine | AppMode::RenameItem | AppMode::SetItemDuration => {
                let allow_empty = self.mode == AppMode::SetItemDuration;
                match handle_dialog_input(&mut self.input, key.code, allow_empty) {
                    DialogAction::Confirm => {
                        self.confirm_dialog();
                        self.mode = AppMode::Normal;
                    }
                    DialogAction::Cancel => self.mode = AppMode::Normal,
                    DialogAction::None => {}
                }
            }
            AppMode::ConfirmDeleteRoutine | AppMode::ConfirmDeleteItem => {
                match handle_confirm_input(key.code) {
                    DialogAction::Confirm => {
                        self.confirm_delete();
                        self.mode = AppMode::Normal;
                    }
                    DialogAction::Cancel => self.mode = AppMode::Normal,
                    DialogAction::None => {}
                }
            }
        }
    }

    fn open_text_dialog(&mut self, mode: AppMode, text: String) {
        self.input = InputState::new();
        self.input.set(text);
        self.mode = mode;
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let len = self.editor.routines().len();
        let selected = self.selected_routine().map(|r| (r.id.clone(), r.name.clone()));

        match code {
            KeyCode::Char('j') | KeyCode::Down => self.routine_selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.routine_selection.prev(len),
            KeyCode::Char('n') => {
                let result = self.editor.create_routine(None).map(|r| r.id.clone());
                if let Some(id) = self.report(result) {
                    self.routine_selection.jump_to_last(self.editor.routines().len());
                    self.navigate(Route::EditRoutine(id));
                }
            }
            KeyCode::Char('r') => {
                if let Some((_, name)) = selected {
                    self.open_text_dialog(AppMode::RenameRoutine, name);
                }
            }
            KeyCode::Char('d') => {
                if selected.is_some() {
                    self.mode = AppMode::ConfirmDeleteRoutine;
                }
            }
            KeyCode::Char('J') => self.move_selected_routine(1),
            KeyCode::Char('K') => self.move_selected_routine(-1),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some((id, _)) = selected {
                    self.navigate(Route::EditRoutine(id));
                }
            }
            KeyCode::Char('p') => {
                if let Some((id, _)) = selected {
                    self.navigate(Route::PlayRoutine(id));
                }
            }
            _ => {}
        }
    }

    fn move_selected_routine(&mut self, offset: isize) {
        let Some(index) = self.routine_selection.get() else {
            return;
        };
        let Some(target_index) = index.checked_add_signed(offset) else {
            return;
        };
        let routines = self.editor.routines();
        let (Some(routine), Some(target)) = (routines.get(index), routines.get(target_index))
        else {
            return;
        };
        let (id, target_id) = (routine.id.clone(), target.id.clone());

        let result = self.editor.move_routine(&id, &target_id);
        if self.report(result).is_some() {
            self.routine_selection.set(Some(target_index));
        }
    }

    fn handle_editor_key(&mut self, routine_id: &str, code: KeyCode) {
        let len = self.current_routine().map_or(0, |r| r.items.len());
        let selected = self.selected_item().cloned();

        match code {
            KeyCode::Esc => self.navigate(Route::RoutineList),
            KeyCode::Char('j') | KeyCode::Down => self.item_selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.item_selection.prev(len),
            KeyCode::Char('a') => {
                let result = self.editor.add_item(routine_id, None).map(|_| ());
                if self.report(result).is_some() {
                    self.item_selection.jump_to_last(len + 1);
                }
            }
            KeyCode::Char('R') => {
                if let Some(name) = self.current_routine().map(|r| r.name.clone()) {
                    self.open_text_dialog(AppMode::RenameRoutine, name);
                }
            }
            KeyCode::Char('r') => {
                if let Some(item) = selected {
                    self.open_text_dialog(AppMode::RenameItem, item.name);
                }
            }
            KeyCode::Char('t') => {
                if let Some(item) = selected {
                    self.input = InputState::numeric();
                    self.input.set(item.duration.to_string());
                    self.mode = AppMode::SetItemDuration;
                }
            }
            KeyCode::Char('f') => {
                if let Some(item) = selected {
                    let result = self.editor.toggle_item_flash(routine_id, &item.id).map(|_| ());
                    self.report(result);
                }
            }
            KeyCode::Char('d') => {
                if selected.is_some() {
                    self.mode = AppMode::ConfirmDeleteItem;
                }
            }
            KeyCode::Char('J') => self.move_selected_item(routine_id, 1),
            KeyCode::Char('K') => self.move_selected_item(routine_id, -1),
            KeyCode::Char('p') => self.navigate(Route::PlayRoutine(routine_id.to_string())),
            _ => {}
        }
    }

    fn move_selected_item(&mut self, routine_id: &str, offset: isize) {
        let Some(index) = self.item_selection.get() else {
            return;
        };
        let Some(target_index) = index.checked_add_signed(offset) else {
            return;
        };
        let Some(items) = self.current_routine().map(|r| &r.items) else {
            return;
        };
        let (Some(item), Some(target)) = (items.get(index), items.get(target_index)) else {
            return;
        };
        let (id, target_id) = (item.id.clone(), target.id.clone());

        let result = self.editor.move_item(routine_id, &id, &target_id);
        if self.report(result).is_some() {
            self.item_selection.set(Some(target_index));
        }
    }

    fn handle_playback_key(&mut self, routine_id: &str, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.navigate(Route::RoutineList);
                return;
            }
            KeyCode::Char('e') => {
                self.navigate(Route::EditRoutine(routine_id.to_string()));
                return;
            }
            _ => {}
        }

        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        let engine = &mut playback.engine;
        match code {
            KeyCode::Char(' ') => {
                engine.toggle_play();
            }
            KeyCode::Char('h') | KeyCode::Left => engine.previous_item(),
            KeyCode::Char('l') | KeyCode::Right => engine.next_item(),
            KeyCode::Char('b') => engine.skip_back(),
            KeyCode::Char('f') => engine.skip_forward(),
            _ => {}
        }
    }

    /// The routine a rename dialog applies to: the one being edited, or the
    /// one selected in the list.
    fn dialog_routine_id(&self) -> Option<RoutineId> {
        match &self.route {
            Route::RoutineList => self.selected_routine().map(|r| r.id.clone()),
            route => route.routine_id().map(str::to_string),
        }
    }

    fn confirm_dialog(&mut self) {
        let Some(routine_id) = self.dialog_routine_id() else {
            return;
        };
        let text = self.input.as_str().to_string();

        match self.mode {
            AppMode::RenameRoutine => {
                let result = self.editor.rename_routine(&routine_id, text).map(|_| ());
                self.report(result);
            }
            AppMode::RenameItem => {
                if let Some(item_id) = self.selected_item().map(|i| i.id.clone()) {
                    let result = self
                        .editor
                        .rename_item(&routine_id, &item_id, text)
                        .map(|_| ());
                    self.report(result);
                }
            }
            AppMode::SetItemDuration => {
                let Some(item_id) = self.selected_item().map(|i| i.id.clone()) else {
                    return;
                };
                let result = parse_duration(&text).and_then(|seconds| {
                    self.editor
                        .set_item_duration(&routine_id, &item_id, seconds as i64)
                        .map(|_| ())
                });
                self.report(result);
            }
            _ => {}
        }
    }

    fn confirm_delete(&mut self) {
        match self.mode {
            AppMode::ConfirmDeleteRoutine => {
                if let Some(id) = self.selected_routine().map(|r| r.id.clone()) {
                    let result = self.editor.delete_routine(&id);
                    self.report(result);
                    self.routine_selection.clamp(self.editor.routines().len());
                }
            }
            AppMode::ConfirmDeleteItem => {
                let Some(routine_id) = self.dialog_routine_id() else {
                    return;
                };
                if let Some(item_id) = self.selected_item().map(|i| i.id.clone()) {
                    let result = self.editor.delete_item(&routine_id, &item_id);
                    self.report(result);
                    let len = self.current_routine().map_or(0, |r| r.items.len());
                    self.item_selection.clamp(len);
                }
            }
            _ => {}
        }
    }

    pub async fn run(&mut self) -> HiitResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();
        self.attach_event_sender(events.sender());

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        self.playback = None;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> HiitResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
