use hiit_core::{HiitError, HiitResult};

use crate::commands::{
    Applied, Command, CommandContext, CreateItem, CreateRoutine, DeleteItem, DeleteRoutine,
    ItemUpdate, MoveItem, MoveRoutine, RenameRoutine, UpdateItem,
};
use crate::store::RoutineStore;
use crate::{Item, Routine};

/// Owns the authoritative routine list and writes it back through the store
/// after every change.
///
/// Lookups of unknown ids return `None`; mutations of unknown ids return
/// [`HiitError::NotFound`] and leave the list (and the store) untouched.
pub struct RoutineEditor {
    routines: Vec<Routine>,
    store: Box<dyn RoutineStore>,
}

impl RoutineEditor {
    /// Load the stored routines. A failing store is logged and treated as empty.
    pub fn open(store: Box<dyn RoutineStore>) -> Self {
        let routines = load_or_empty(store.as_ref());
        tracing::debug!("Editor opened with {} routines", routines.len());
        Self { routines, store }
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn routine(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|routine| routine.id == id)
    }

    pub fn item(&self, routine_id: &str, item_id: &str) -> Option<&Item> {
        self.routine(routine_id)?.item(item_id)
    }

    /// Run a command and persist the whole list if it changed anything.
    pub fn execute(&mut self, command: &dyn Command) -> HiitResult<Applied> {
        tracing::debug!("Executing: {}", command.description());

        let mut context = CommandContext {
            routines: &mut self.routines,
        };
        let applied = command.execute(&mut context)?;

        if applied == Applied::Changed {
            self.persist()?;
        }
        Ok(applied)
    }

    fn persist(&self) -> HiitResult<()> {
        if let Err(e) = self.store.store(&self.routines) {
            tracing::error!("Failed to save routines: {}", e);
            return Err(e);
        }
        Ok(())
    }

    fn routine_or_missing(&self, id: &str) -> HiitResult<&Routine> {
        self.routine(id)
            .ok_or_else(|| HiitError::routine_not_found(id))
    }

    fn item_or_missing(&self, routine_id: &str, item_id: &str) -> HiitResult<&Item> {
        self.item(routine_id, item_id)
            .ok_or_else(|| HiitError::item_not_found(routine_id, item_id))
    }

    pub fn create_routine(&mut self, name: Option<String>) -> HiitResult<&Routine> {
        let routine = match name {
            Some(name) => Routine::new(name),
            None => Routine::placeholder(),
        };
        let id = routine.id.clone();
        self.execute(&CreateRoutine { routine })?;
        self.routine_or_missing(&id)
    }

    pub fn rename_routine(&mut self, id: &str, name: String) -> HiitResult<&Routine> {
        self.execute(&RenameRoutine {
            routine_id: id.to_string(),
            name,
        })?;
        self.routine_or_missing(id)
    }

    pub fn delete_routine(&mut self, id: &str) -> HiitResult<()> {
        self.execute(&DeleteRoutine {
            routine_id: id.to_string(),
        })?;
        Ok(())
    }

    pub fn move_routine(&mut self, id: &str, target_id: &str) -> HiitResult<Applied> {
        self.execute(&MoveRoutine {
            routine_id: id.to_string(),
            target_id: target_id.to_string(),
        })
    }

    /// Append `item`, or a placeholder item when `None`.
    pub fn add_item(&mut self, routine_id: &str, item: Option<Item>) -> HiitResult<&Item> {
        let item = item.unwrap_or_else(Item::placeholder);
        let item_id = item.id.clone();
        self.execute(&CreateItem {
            routine_id: routine_id.to_string(),
            item,
        })?;
        self.item_or_missing(routine_id, &item_id)
    }

    pub fn update_item(
        &mut self,
        routine_id: &str,
        item_id: &str,
        update: ItemUpdate,
    ) -> HiitResult<&Item> {
        self.execute(&UpdateItem {
            routine_id: routine_id.to_string(),
            item_id: item_id.to_string(),
            update,
        })?;
        self.item_or_missing(routine_id, item_id)
    }

    pub fn rename_item(&mut self, routine_id: &str, item_id: &str, name: String) -> HiitResult<&Item> {
        self.update_item(routine_id, item_id, ItemUpdate::name(name))
    }

    pub fn set_item_duration(
        &mut self,
        routine_id: &str,
        item_id: &str,
        seconds: i64,
    ) -> HiitResult<&Item> {
        self.update_item(routine_id, item_id, ItemUpdate::duration(seconds))
    }

    pub fn set_item_flash(&mut self, routine_id: &str, item_id: &str, flash: bool) -> HiitResult<&Item> {
        self.update_item(routine_id, item_id, ItemUpdate::flash(flash))
    }

    pub fn toggle_item_flash(&mut self, routine_id: &str, item_id: &str) -> HiitResult<&Item> {
        let flash = self.item_or_missing(routine_id, item_id)?.flash;
        self.set_item_flash(routine_id, item_id, !flash)
    }

    pub fn delete_item(&mut self, routine_id: &str, item_id: &str) -> HiitResult<()> {
        self.execute(&DeleteItem {
            routine_id: routine_id.to_string(),
            item_id: item_id.to_string(),
        })?;
        Ok(())
    }

    pub fn move_item(&mut self, routine_id: &str, item_id: &str, target_id: &str) -> HiitResult<Applied> {
        self.execute(&MoveItem {
            routine_id: routine_id.to_string(),
            item_id: item_id.to_string(),
            target_id: target_id.to_string(),
        })
    }
}

fn load_or_empty(store: &dyn RoutineStore) -> Vec<Routine> {
    match store.load() {
        Ok(routines) => routines,
        Err(e) => {
            tracing::warn!("Could not load routines, starting empty: {}", e);
            Vec::new()
        }
    }
}
