use super::{Applied, Command, CommandContext};
use crate::reorder::{index_of, move_entry};
use crate::{Item, ItemId, RoutineId};
use hiit_core::{HiitError, HiitResult};

/// Append an item at the end of a routine.
pub struct CreateItem {
    pub routine_id: RoutineId,
    pub item: Item,
}

impl Command for CreateItem {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        context
            .routine_mut(&self.routine_id)?
            .push_item(self.item.clone());
        Ok(Applied::Changed)
    }

    fn description(&self) -> String {
        format!(
            "Add item '{}' to routine {}",
            self.item.name, self.routine_id
        )
    }
}

/// Partial edit of one item; `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    /// Raw seconds, clamped on apply.
    pub duration: Option<i64>,
    pub flash: Option<bool>,
}

impl ItemUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn duration(seconds: i64) -> Self {
        Self {
            duration: Some(seconds),
            ..Self::default()
        }
    }

    pub fn flash(flash: bool) -> Self {
        Self {
            flash: Some(flash),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.duration.is_none() && self.flash.is_none()
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.rename(name.clone());
        }
        if let Some(seconds) = self.duration {
            item.set_duration(seconds);
        }
        if let Some(flash) = self.flash {
            item.set_flash(flash);
        }
    }
}

pub struct UpdateItem {
    pub routine_id: RoutineId,
    pub item_id: ItemId,
    pub update: ItemUpdate,
}

impl Command for UpdateItem {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        let item = context.item_mut(&self.routine_id, &self.item_id)?;
        if self.update.is_empty() {
            return Ok(Applied::Unchanged);
        }
        self.update.apply_to(item);
        Ok(Applied::Changed)
    }

    fn description(&self) -> String {
        format!("Update item {} in routine {}", self.item_id, self.routine_id)
    }
}

pub struct DeleteItem {
    pub routine_id: RoutineId,
    pub item_id: ItemId,
}

impl Command for DeleteItem {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        if context
            .routine_mut(&self.routine_id)?
            .remove_item(&self.item_id)
        {
            Ok(Applied::Changed)
        } else {
            Err(HiitError::item_not_found(&self.routine_id, &self.item_id))
        }
    }

    fn description(&self) -> String {
        format!("Delete item {} from routine {}", self.item_id, self.routine_id)
    }
}

/// Move an item to the position currently held by `target_id` in the same routine.
pub struct MoveItem {
    pub routine_id: RoutineId,
    pub item_id: ItemId,
    pub target_id: ItemId,
}

impl Command for MoveItem {
    fn execute(&self, context: &mut CommandContext) -> HiitResult<Applied> {
        let routine = context.routine_mut(&self.routine_id)?;
        let from = index_of(&routine.items, &self.item_id)
            .ok_or_else(|| HiitError::item_not_found(&self.routine_id, &self.item_id))?;
        let to = index_of(&routine.items, &self.target_id)
            .ok_or_else(|| HiitError::item_not_found(&self.routine_id, &self.target_id))?;

        if move_entry(&mut routine.items, from, to) {
            Ok(Applied::Changed)
        } else {
            Ok(Applied::Unchanged)
        }
    }

    fn description(&self) -> String {
        format!(
            "Move item {} to the position of {} in routine {}",
            self.item_id, self.target_id, self.routine_id
        )
    }
}
