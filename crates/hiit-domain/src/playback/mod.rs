//! Second-by-second playback of a routine.
//!
//! The engine owns no timers. The caller drives it with two independent
//! clocks: [`PlaybackEngine::tick`] every [`TICK_INTERVAL`] and
//! [`PlaybackEngine::decay_flash`] every [`FLASH_DECAY_INTERVAL`].

pub mod engine;
pub mod event;
pub mod flash;

use std::time::Duration;

pub use engine::{PlaybackEngine, PlaybackState};
pub use event::PlaybackEvent;
pub use flash::FlashLevel;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const FLASH_DECAY_INTERVAL: Duration = Duration::from_millis(16);

/// How much of the flash intensity fades per decay tick.
pub const FLASH_DECAY_STEP: f64 = 0.04;
/// The flash fires once the current item has this many seconds or fewer left.
pub const FLASH_LEAD_SECS: u32 = 5;
/// Step size of the back/forward scrub controls.
pub const SCRUB_SECS: u32 = 10;
