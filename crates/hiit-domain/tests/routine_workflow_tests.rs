use std::sync::{Arc, Mutex};

use hiit_core::HiitResult;
use hiit_domain::commands::Applied;
use hiit_domain::{
    format_time, PlaybackEngine, PlaybackEvent, Routine, RoutineEditor, RoutineStore,
};

/// Shares its backing list with the test so saves can be inspected.
#[derive(Clone, Default)]
struct SharedStore {
    saved: Arc<Mutex<Vec<Routine>>>,
    saves: Arc<Mutex<usize>>,
}

impl RoutineStore for SharedStore {
    fn load(&self) -> HiitResult<Vec<Routine>> {
        Ok(self.saved.lock().unwrap().clone())
    }

    fn store(&self, routines: &[Routine]) -> HiitResult<()> {
        *self.saved.lock().unwrap() = routines.to_vec();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

impl SharedStore {
    fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    fn snapshot(&self) -> Vec<Routine> {
        self.saved.lock().unwrap().clone()
    }
}

#[test]
fn test_build_routine_and_reopen() {
    let store = SharedStore::default();
    let mut editor = RoutineEditor::open(Box::new(store.clone()));

    let routine_id = editor.create_routine(Some("Tabata".to_string())).unwrap().id.clone();
    let work = editor.add_item(&routine_id, None).unwrap().id.clone();
    editor.rename_item(&routine_id, &work, "Work".to_string()).unwrap();
    editor.set_item_duration(&routine_id, &work, 20).unwrap();

    let rest = editor.add_item(&routine_id, None).unwrap().id.clone();
    editor.rename_item(&routine_id, &rest, "Rest".to_string()).unwrap();
    editor.set_item_duration(&routine_id, &rest, 10).unwrap();
    editor.set_item_flash(&routine_id, &rest, false).unwrap();

    assert_eq!(store.save_count(), 8);

    let reopened = RoutineEditor::open(Box::new(store.clone()));
    assert_eq!(reopened.routines(), editor.routines());

    let routine = reopened.routine(&routine_id).unwrap();
    assert_eq!(routine.total_duration(), 30);
    assert_eq!(format_time(routine.total_duration()).to_string(), "00:30");
    assert!(routine.items[0].flash);
    assert!(!routine.items[1].flash);
}

#[test]
fn test_reorder_routines_persists_new_order() {
    let store = SharedStore::default();
    let mut editor = RoutineEditor::open(Box::new(store.clone()));

    let ids: Vec<String> = ["A", "B", "C"]
        .iter()
        .map(|name| editor.create_routine(Some(name.to_string())).unwrap().id.clone())
        .collect();

    assert_eq!(editor.move_routine(&ids[2], &ids[0]).unwrap(), Applied::Changed);
    let names: Vec<String> = store.snapshot().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["C", "A", "B"]);

    let before = store.save_count();
    assert_eq!(editor.move_routine(&ids[1], &ids[1]).unwrap(), Applied::Unchanged);
    assert_eq!(store.save_count(), before);
}

#[test]
fn test_delete_routine_removes_it_from_storage() {
    let store = SharedStore::default();
    let mut editor = RoutineEditor::open(Box::new(store.clone()));

    let keep = editor.create_routine(Some("Keep".to_string())).unwrap().id.clone();
    let drop = editor.create_routine(Some("Drop".to_string())).unwrap().id.clone();
    editor.delete_routine(&drop).unwrap();

    let stored = store.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, keep);
    assert!(editor.routine(&drop).is_none());
}

#[test]
fn test_play_edited_routine_to_the_end() {
    let store = SharedStore::default();
    let mut editor = RoutineEditor::open(Box::new(store));

    let routine_id = editor.create_routine(None).unwrap().id.clone();
    for seconds in [3, 2] {
        let id = editor.add_item(&routine_id, None).unwrap().id.clone();
        editor.set_item_duration(&routine_id, &id, seconds).unwrap();
    }

    let mut engine = PlaybackEngine::for_routine(editor.routine(&routine_id).unwrap());
    engine.play();

    let events: Vec<PlaybackEvent> = (0..5).filter_map(|_| engine.tick()).collect();
    assert!(events.contains(&PlaybackEvent::Advanced { from: 0, to: 1 }));
    assert_eq!(events.last(), Some(&PlaybackEvent::Finished));

    let state = engine.state();
    assert!(!state.playing);
    assert_eq!((state.item_index, state.elapsed_in_item), (0, 0));
}

#[test]
fn test_playback_uses_snapshot_of_items() {
    let store = SharedStore::default();
    let mut editor = RoutineEditor::open(Box::new(store));

    let routine_id = editor.create_routine(None).unwrap().id.clone();
    let item_id = editor.add_item(&routine_id, None).unwrap().id.clone();
    editor.set_item_duration(&routine_id, &item_id, 40).unwrap();

    let engine = PlaybackEngine::for_routine(editor.routine(&routine_id).unwrap());
    editor.delete_item(&routine_id, &item_id).unwrap();

    assert_eq!(engine.total_duration(), 40);
    assert!(editor.routine(&routine_id).unwrap().items.is_empty());
}
