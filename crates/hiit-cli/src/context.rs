use hiit_core::AppConfig;
use hiit_domain::{format_time, Routine, RoutineEditor};
use hiit_persistence::{JsonFileStore, MemoryStore, RoutineSlot};
use serde::Serialize;

pub struct CliContext {
    pub editor: RoutineEditor,
}

impl CliContext {
    pub fn open(config: &AppConfig, ephemeral: bool) -> Self {
        Self {
            editor: open_editor(config, ephemeral),
        }
    }
}

pub fn open_editor(config: &AppConfig, ephemeral: bool) -> RoutineEditor {
    if ephemeral {
        tracing::debug!("Using in-memory routines");
        return RoutineEditor::open(Box::new(RoutineSlot::new(MemoryStore::new())));
    }
    let path = config.effective_data_file();
    tracing::debug!("Using routines file {}", path.display());
    RoutineEditor::open(Box::new(RoutineSlot::new(JsonFileStore::new(path))))
}

/// A routine plus its computed totals, as printed by the CLI.
#[derive(Serialize)]
pub struct RoutineView<'a> {
    #[serde(flatten)]
    pub routine: &'a Routine,
    pub total_seconds: u32,
    pub total_time: String,
}

impl<'a> RoutineView<'a> {
    pub fn new(routine: &'a Routine) -> Self {
        let total_seconds = routine.total_duration();
        Self {
            routine,
            total_seconds,
            total_time: format_time(total_seconds).to_string(),
        }
    }
}
