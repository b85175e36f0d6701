use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::{Item, ItemId};
use crate::time::total_duration;

pub type RoutineId = String;

pub const NEW_ROUTINE_NAME: &str = "New routine";

/// Fresh identifier for a routine or item.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub id: RoutineId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Routine {
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(),
            name,
            items: Vec::new(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(NEW_ROUTINE_NAME.to_string())
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub fn total_duration(&self) -> u32 {
        total_duration(self)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn push_item(&mut self, item: Item) -> &Item {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Returns false when no item had that id.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }
}
