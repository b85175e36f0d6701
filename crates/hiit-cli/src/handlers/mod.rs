pub mod item;
pub mod routine;
