use std::sync::Arc;

use hiit_domain::{Item, Routine, RoutineEditor, RoutineStore};
use hiit_persistence::{JsonFileStore, KeyValueStore, MemoryStore, RoutineSlot, ROUTINES_KEY};
use tempfile::tempdir;

#[test]
fn test_file_round_trip_through_editor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("routines.json");

    let routine_id = {
        let mut editor = RoutineEditor::open(Box::new(RoutineSlot::new(JsonFileStore::new(&path))));
        let id = editor.create_routine(Some("Ladder".to_string())).unwrap().id.clone();
        let item = Item::new("Climb".to_string(), 45, true);
        editor.add_item(&id, Some(item)).unwrap();
        id
    };

    let editor = RoutineEditor::open(Box::new(RoutineSlot::new(JsonFileStore::new(&path))));
    let routine = editor.routine(&routine_id).unwrap();
    assert_eq!(routine.name, "Ladder");
    assert_eq!(routine.items[0].name, "Climb");
    assert_eq!(routine.items[0].duration, 45);
}

#[test]
fn test_file_holds_blob_under_routines_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("routines.json");
    let slot = RoutineSlot::new(JsonFileStore::new(&path));

    slot.store(&[Routine::new("Core".to_string())]).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let blob = raw[ROUTINES_KEY].as_str().unwrap();
    let routines: Vec<Routine> = serde_json::from_str(blob).unwrap();
    assert_eq!(routines[0].name, "Core");
}

#[test]
fn test_malformed_blob_opens_empty_editor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("routines.json");
    std::fs::write(&path, r#"{"hit:routines":"[{broken"}"#).unwrap();

    let editor = RoutineEditor::open(Box::new(RoutineSlot::new(JsonFileStore::new(&path))));
    assert!(editor.routines().is_empty());
}

#[test]
fn test_foreign_keys_survive_editor_writes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("routines.json");
    std::fs::write(&path, r#"{"settings":"{\"volume\":3}"}"#).unwrap();

    let mut editor = RoutineEditor::open(Box::new(RoutineSlot::new(JsonFileStore::new(&path))));
    editor.create_routine(None).unwrap();

    let store = JsonFileStore::new(&path);
    assert_eq!(store.get("settings").unwrap().as_deref(), Some("{\"volume\":3}"));
    assert!(store.get(ROUTINES_KEY).unwrap().is_some());
}

#[test]
fn test_shared_memory_store_sees_editor_saves() {
    let memory = Arc::new(MemoryStore::new());
    let mut editor = RoutineEditor::open(Box::new(RoutineSlot::new(memory.clone())));
    editor.create_routine(Some("Warmup".to_string())).unwrap();

    let reread = RoutineSlot::new(memory).load().unwrap();
    assert_eq!(reread, editor.routines());
}
