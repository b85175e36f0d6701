use super::{
    dialog_modes::{DeleteConfirmProvider, DialogInputProvider},
    playback::{NotFoundProvider, PlaybackProvider},
    routine_editor::RoutineEditorProvider,
    routine_list::RoutineListProvider,
    KeybindingProvider,
};
use crate::app::{App, AppMode};
use crate::route::Route;

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        match app.mode {
            AppMode::Normal => Self::get_provider_for_route(app),
            AppMode::RenameRoutine => Box::new(DialogInputProvider::new("Rename Routine")),
            AppMode::RenameItem => Box::new(DialogInputProvider::new("Rename Item")),
            AppMode::SetItemDuration => Box::new(DialogInputProvider::new("Set Duration")),
            AppMode::ConfirmDeleteRoutine => Box::new(DeleteConfirmProvider::new("Routine")),
            AppMode::ConfirmDeleteItem => Box::new(DeleteConfirmProvider::new("Item")),
        }
    }

    fn get_provider_for_route(app: &App) -> Box<dyn KeybindingProvider> {
        match &app.route {
            Route::RoutineList => Box::new(RoutineListProvider),
            Route::EditRoutine(_) if app.current_routine().is_some() => {
                Box::new(RoutineEditorProvider)
            }
            Route::PlayRoutine(_) if app.playback.is_some() => Box::new(PlaybackProvider),
            _ => Box::new(NotFoundProvider),
        }
    }
}
