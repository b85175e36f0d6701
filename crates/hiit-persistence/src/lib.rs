pub mod routine_slot;
pub mod serialization;
pub mod store;
pub mod traits;

pub use routine_slot::{RoutineSlot, ROUTINES_KEY};
pub use serialization::*;
pub use store::*;
pub use traits::*;
