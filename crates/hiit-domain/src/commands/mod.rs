use hiit_core::{HiitError, HiitResult};

use crate::{Item, Routine};

pub mod item_commands;
pub mod routine_commands;

pub use item_commands::*;
pub use routine_commands::*;

/// Whether a command touched the routine list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Unchanged,
}

/// A mutation of the routine list, executed by the editor and followed by a save
/// when it reports [`Applied::Changed`].
pub trait Command: Send + Sync {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied>;

    fn description(&self) -> String;
}

pub struct CommandContext<'a> {
    pub routines: &'a mut Vec<Routine>,
}

impl CommandContext<'_> {
    pub fn routine_mut(&mut self, id: &str) -> HiitResult<&mut Routine> {
        self.routines
            .iter_mut()
            .find(|routine| routine.id == id)
            .ok_or_else(|| HiitError::routine_not_found(id))
    }

    pub fn item_mut(&mut self, routine_id: &str, item_id: &str) -> HiitResult<&mut Item> {
        self.routine_mut(routine_id)?
            .item_mut(item_id)
            .ok_or_else(|| HiitError::item_not_found(routine_id, item_id))
    }
}
