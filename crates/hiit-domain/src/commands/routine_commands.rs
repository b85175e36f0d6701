use super::{Applied, Command, CommandContext};
use crate::reorder::{index_of, move_entry};
use crate::{Routine, RoutineId};
use hiit_core::{HiitError, HiitResult};

/// Append a routine that the caller already built (and so already knows the id of).
pub struct CreateRoutine {
    pub routine: Routine,
}

impl Command for CreateRoutine {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        context.routines.push(self.routine.clone());
        Ok(Applied::Changed)
    }

    fn description(&self) -> String {
        format!("Create routine '{}'", self.routine.name)
    }
}

pub struct RenameRoutine {
    pub routine_id: RoutineId,
    pub name: String,
}

impl Command for RenameRoutine {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        context
            .routine_mut(&self.routine_id)?
            .rename(self.name.clone());
        Ok(Applied::Changed)
    }

    fn description(&self) -> String {
        format!("Rename routine {} to '{}'", self.routine_id, self.name)
    }
}

pub struct DeleteRoutine {
    pub routine_id: RoutineId,
}

impl Command for DeleteRoutine {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        let before = context.routines.len();
        context.routines.retain(|r| r.id != self.routine_id);
        if context.routines.len() == before {
            return Err(HiitError::routine_not_found(&self.routine_id));
        }
        Ok(Applied::Changed)
    }

    fn description(&self) -> String {
        format!("Delete routine {}", self.routine_id)
    }
}

/// Move a routine to the position currently held by `target_id`.
pub struct MoveRoutine {
    pub routine_id: RoutineId,
    pub target_id: RoutineId,
}

impl Command for MoveRoutine {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        let from = index_of(context.routines, &self.routine_id)
            .ok_or_else(|| HiitError::routine_not_found(&self.routine_id))?;
        let to = index_of(context.routines, &self.target_id)
            .ok_or_else(|| HiitError::routine_not_found(&self.target_id))?;

        if move_entry(context.routines, from, to) {
            Ok(Applied::Changed)
        } else {
            Ok(Applied::Unchanged)
        }
    }

    fn description(&self) -> String {
        format!(
            "Move routine {} to the position of {}",
            self.routine_id, self.target_id
        )
    }
}
