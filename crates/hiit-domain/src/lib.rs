pub mod commands;
pub mod editor;
pub mod item;
pub mod playback;
pub mod reorder;
pub mod routine;
pub mod store;
pub mod time;

pub use editor::RoutineEditor;
pub use item::{clamp_duration, parse_duration, Item, ItemId, MAX_DURATION, MIN_DURATION};
pub use playback::{FlashLevel, PlaybackEngine, PlaybackEvent, PlaybackState};
pub use reorder::{index_of, move_entry, Identified};
pub use routine::{new_id, Routine, RoutineId};
pub use store::RoutineStore;
pub use time::{format_time, total_duration, ClockTime};
