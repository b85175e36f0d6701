//! Playback state machine.
//!
//! ## Tick
//!
//! ```text
//! paused / no items        -> nothing
//! elapsed + 1 < duration   -> elapsed += 1, maybe flash
//! elapsed + 1 >= duration  -> next item (elapsed = 0), or finish on the last one
//! ```
//!
//! An item of `d` seconds therefore lasts exactly `d` ticks. Finishing stops
//! playback and rewinds to the first item.
//!
//! ## Flash
//!
//! When a tick lands in the last [`FLASH_LEAD_SECS`] of an item whose `flash`
//! flag is set, the flash level jumps to 1.0. It fires once per crossing: any
//! repositioning (scrub, item change, finish) re-arms it.
//!
//! A tick that ends an item still checks the position it leaves, so an armed
//! item that never had a tick land inside its window (a 1-second item) flashes
//! on its way out. That tick reports `Advanced`/`Finished`, not `Flashed`.

use serde::{Deserialize, Serialize};

use super::event::PlaybackEvent;
use super::flash::FlashLevel;
use super::{FLASH_LEAD_SECS, SCRUB_SECS};
use crate::{Item, Routine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    pub playing: bool,
    pub item_index: usize,
    /// Seconds into the current item.
    pub elapsed_in_item: u32,
}

#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    items: Vec<Item>,
    state: PlaybackState,
    flash: FlashLevel,
    flash_armed: bool,
}

impl PlaybackEngine {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            state: PlaybackState::default(),
            flash: FlashLevel::new(),
            flash_armed: true,
        }
    }

    pub fn for_routine(routine: &Routine) -> Self {
        Self::new(routine.items.clone())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.state.item_index)
    }

    pub fn current_duration(&self) -> u32 {
        self.current_item().map(|item| item.duration).unwrap_or(0)
    }

    pub fn flash_level(&self) -> f64 {
        self.flash.level()
    }

    pub fn flash_visible(&self) -> bool {
        self.flash.is_visible()
    }

    pub fn total_duration(&self) -> u32 {
        self.items.iter().map(|item| item.duration).sum()
    }

    /// Seconds played so far across the whole routine.
    pub fn cumulative_elapsed(&self) -> u32 {
        let before: u32 = self
            .items
            .iter()
            .take(self.state.item_index)
            .map(|item| item.duration)
            .sum();
        before + self.state.elapsed_in_item
    }

    /// 0.0 ..= 1.0 within the current item.
    pub fn item_progress(&self) -> f64 {
        ratio(self.state.elapsed_in_item, self.current_duration())
    }

    /// 0.0 ..= 1.0 across the routine.
    pub fn routine_progress(&self) -> f64 {
        ratio(self.cumulative_elapsed(), self.total_duration())
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    fn in_flash_window(elapsed: u32, duration: u32) -> bool {
        elapsed >= duration.saturating_sub(FLASH_LEAD_SECS) && elapsed < duration
    }

    // ── Clock ────────────────────────────────────────────────────────

    /// Advance by one second. Does nothing while paused.
    pub fn tick(&mut self) -> Option<PlaybackEvent> {
        if !self.state.playing {
            return None;
        }
        let item = self.current_item()?;
        let duration = item.duration;
        let flash_enabled = item.flash;

        let next = self.state.elapsed_in_item.saturating_add(1);
        if next >= duration {
            if flash_enabled && Self::in_flash_window(self.state.elapsed_in_item, duration) {
                self.fire_flash();
            }
            return Some(self.end_current_item());
        }

        self.state.elapsed_in_item = next;
        if !Self::in_flash_window(next, duration) {
            self.flash_armed = true;
            return None;
        }
        if flash_enabled && self.fire_flash() {
            return Some(PlaybackEvent::Flashed {
                item_index: self.state.item_index,
            });
        }
        None
    }

    /// Raises the flash if armed. Returns whether it fired.
    fn fire_flash(&mut self) -> bool {
        if !self.flash_armed {
            return false;
        }
        self.flash_armed = false;
        self.flash.trigger();
        tracing::debug!(
            "Flash at item {} second {}",
            self.state.item_index,
            self.state.elapsed_in_item
        );
        true
    }

    /// Fade the flash one step; independent of `playing`.
    pub fn decay_flash(&mut self) -> f64 {
        self.flash.decay()
    }

    fn end_current_item(&mut self) -> PlaybackEvent {
        let from = self.state.item_index;
        self.flash_armed = true;
        if from >= self.last_index() {
            self.state = PlaybackState::default();
            tracing::debug!("Routine finished");
            PlaybackEvent::Finished
        } else {
            self.state.item_index = from + 1;
            self.state.elapsed_in_item = 0;
            PlaybackEvent::Advanced { from, to: from + 1 }
        }
    }

    // ── Controls ─────────────────────────────────────────────────────

    pub fn play(&mut self) {
        self.state.playing = true;
    }

    pub fn pause(&mut self) {
        self.state.playing = false;
    }

    pub fn toggle_play(&mut self) -> bool {
        self.state.playing = !self.state.playing;
        self.state.playing
    }

    pub fn previous_item(&mut self) {
        self.reposition(self.state.item_index.saturating_sub(1), 0);
    }

    pub fn next_item(&mut self) {
        let index = (self.state.item_index + 1).min(self.last_index());
        self.reposition(index, 0);
    }

    pub fn skip_back(&mut self) {
        let elapsed = self.state.elapsed_in_item.saturating_sub(SCRUB_SECS);
        self.reposition(self.state.item_index, elapsed);
    }

    pub fn skip_forward(&mut self) {
        let elapsed = self
            .state
            .elapsed_in_item
            .saturating_add(SCRUB_SECS)
            .min(self.current_duration());
        self.reposition(self.state.item_index, elapsed);
    }

    fn reposition(&mut self, item_index: usize, elapsed_in_item: u32) {
        self.state.item_index = item_index;
        self.state.elapsed_in_item = elapsed_in_item;
        self.flash_armed = true;
    }
}

fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(durations: &[i64], flash: bool) -> PlaybackEngine {
        PlaybackEngine::new(
            durations
                .iter()
                .enumerate()
                .map(|(i, &d)| Item::new(format!("Item {}", i), d, flash))
                .collect(),
        )
    }

    fn engine(durations: &[i64]) -> PlaybackEngine {
        engine_with(durations, true)
    }

    fn at(engine: &PlaybackEngine) -> (usize, u32, bool) {
        let state = engine.state();
        (state.item_index, state.elapsed_in_item, state.playing)
    }

    #[test]
    fn test_initial_state() {
        let engine = engine(&[30]);
        assert_eq!(engine.state(), PlaybackState::default());
        assert_eq!(engine.flash_level(), 0.0);
        assert!(!engine.is_playing());
    }

    #[test]
    fn test_tick_while_paused_does_nothing() {
        let mut engine = engine(&[3]);
        assert_eq!(engine.tick(), None);
        assert_eq!(at(&engine), (0, 0, false));
    }

    #[test]
    fn test_item_lasts_its_duration_in_ticks() {
        let mut engine = engine_with(&[3, 2], false);
        engine.play();

        assert_eq!(engine.tick(), None);
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.state().elapsed_in_item, 2);
        assert_eq!(
            engine.tick(),
            Some(PlaybackEvent::Advanced { from: 0, to: 1 })
        );
        assert_eq!(at(&engine), (1, 0, true));
    }

    #[test]
    fn test_finish_rewinds_and_stops() {
        let mut engine = engine(&[3, 2]);
        engine.play();
        for _ in 0..4 {
            engine.tick();
        }
        assert_eq!(engine.tick(), Some(PlaybackEvent::Finished));
        assert_eq!(at(&engine), (0, 0, false));
        assert_eq!(engine.tick(), None);
    }

    #[test]
    fn test_empty_routine_is_inert() {
        let mut engine = engine(&[]);
        engine.play();
        assert_eq!(engine.tick(), None);
        engine.next_item();
        engine.previous_item();
        engine.skip_forward();
        engine.skip_back();
        assert_eq!(at(&engine), (0, 0, true));
        assert!(engine.current_item().is_none());
        assert_eq!(engine.total_duration(), 0);
        assert_eq!(engine.cumulative_elapsed(), 0);
        assert_eq!(engine.item_progress(), 0.0);
        assert_eq!(engine.routine_progress(), 0.0);
    }

    #[test]
    fn test_item_navigation_clamps() {
        let mut engine = engine(&[30, 30, 30]);
        engine.skip_forward();
        engine.previous_item();
        assert_eq!(at(&engine), (0, 0, false));

        engine.next_item();
        engine.next_item();
        engine.skip_forward();
        engine.next_item();
        assert_eq!(at(&engine), (2, 0, false));
    }

    #[test]
    fn test_scrub_clamps() {
        let mut engine = engine(&[25]);
        engine.skip_forward();
        engine.skip_forward();
        assert_eq!(engine.state().elapsed_in_item, 20);
        engine.skip_forward();
        assert_eq!(engine.state().elapsed_in_item, 25);

        engine.skip_back();
        assert_eq!(engine.state().elapsed_in_item, 15);
        engine.skip_back();
        engine.skip_back();
        assert_eq!(engine.state().elapsed_in_item, 0);
    }

    #[test]
    fn test_tick_after_scrub_to_end_advances() {
        let mut engine = engine(&[8, 8]);
        engine.skip_forward();
        assert_eq!(engine.state().elapsed_in_item, 8);
        engine.play();
        assert_eq!(
            engine.tick(),
            Some(PlaybackEvent::Advanced { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_toggle_keeps_position() {
        let mut engine = engine(&[30, 30]);
        engine.play();
        engine.tick();
        engine.tick();
        assert!(!engine.toggle_play());
        assert_eq!(at(&engine), (0, 2, false));
        assert!(engine.toggle_play());
        assert_eq!(at(&engine), (0, 2, true));
    }

    #[test]
    fn test_cumulative_elapsed() {
        let mut engine = engine(&[30, 20, 10]);
        engine.next_item();
        engine.next_item();
        engine.skip_forward();
        assert_eq!(engine.cumulative_elapsed(), 60);
        assert_eq!(engine.total_duration(), 60);
        assert_eq!(engine.routine_progress(), 1.0);
        assert_eq!(engine.item_progress(), 1.0);
    }

    #[test]
    fn test_flash_window_for_ten_seconds() {
        let mut engine = engine(&[10]);
        engine.play();

        let mut flashed_at = vec![];
        for _ in 0..9 {
            if let Some(PlaybackEvent::Flashed { .. }) = engine.tick() {
                flashed_at.push(engine.state().elapsed_in_item);
            }
        }
        assert_eq!(flashed_at, vec![5]);
        assert_eq!(engine.tick(), Some(PlaybackEvent::Finished));
    }

    #[test]
    fn test_flash_sets_level_and_decays_while_paused() {
        let mut engine = engine(&[6]);
        engine.play();
        assert_eq!(
            engine.tick(),
            Some(PlaybackEvent::Flashed { item_index: 0 })
        );
        assert_eq!(engine.flash_level(), 1.0);

        engine.pause();
        let level = engine.decay_flash();
        assert!(level < 1.0 && level > 0.9);
    }

    #[test]
    fn test_flash_disabled_item_never_flashes() {
        let mut engine = PlaybackEngine::new(vec![Item::new("Rest".to_string(), 10, false)]);
        engine.play();
        for _ in 0..9 {
            assert_eq!(engine.tick(), None);
        }
        assert_eq!(engine.flash_level(), 0.0);
    }

    #[test]
    fn test_flash_rearms_after_scrubbing_back() {
        let mut engine = engine(&[30]);
        engine.play();
        engine.skip_forward();
        engine.skip_forward();
        engine.skip_forward();
        engine.skip_back();
        assert_eq!(engine.state().elapsed_in_item, 20);

        for _ in 0..4 {
            assert_eq!(engine.tick(), None);
        }
        assert_eq!(
            engine.tick(),
            Some(PlaybackEvent::Flashed { item_index: 0 })
        );
        assert_eq!(engine.tick(), None);

        engine.skip_back();
        assert_eq!(engine.state().elapsed_in_item, 16);
        for _ in 0..8 {
            engine.tick();
        }
        assert_eq!(engine.state().elapsed_in_item, 24);
        assert_eq!(
            engine.tick(),
            Some(PlaybackEvent::Flashed { item_index: 0 })
        );
    }

    #[test]
    fn test_each_item_flashes_once() {
        let mut engine = engine(&[7, 7]);
        engine.play();
        let flashes: Vec<usize> = (0..14)
            .filter_map(|_| match engine.tick() {
                Some(PlaybackEvent::Flashed { item_index }) => Some(item_index),
                _ => None,
            })
            .collect();
        assert_eq!(flashes, vec![0, 1]);
    }

    #[test]
    fn test_one_second_item_flashes() {
        let mut engine = PlaybackEngine::new(vec![Item::new("Jump".to_string(), 1, true)]);
        engine.play();
        assert_eq!(engine.tick(), Some(PlaybackEvent::Finished));
        assert_eq!(engine.flash_level(), 1.0);
        assert!(engine.flash_visible());
        assert!(!engine.is_playing());
    }

    #[test]
    fn test_short_items_each_flash_when_advancing() {
        let mut engine = engine(&[1, 1, 1]);
        engine.play();
        assert_eq!(
            engine.tick(),
            Some(PlaybackEvent::Advanced { from: 0, to: 1 })
        );
        assert_eq!(engine.flash_level(), 1.0);

        engine.decay_flash();
        assert!(engine.flash_level() < 1.0);
        engine.tick();
        assert_eq!(engine.flash_level(), 1.0);
    }

    #[test]
    fn test_one_second_item_without_flash_stays_dark() {
        let mut engine = engine_with(&[1], false);
        engine.play();
        assert_eq!(engine.tick(), Some(PlaybackEvent::Finished));
        assert_eq!(engine.flash_level(), 0.0);
    }

    #[test]
    fn test_ending_tick_does_not_refire_after_window_flash() {
        let mut engine = engine(&[3]);
        engine.play();
        assert_eq!(
            engine.tick(),
            Some(PlaybackEvent::Flashed { item_index: 0 })
        );
        assert_eq!(engine.tick(), None);
        for _ in 0..25 {
            engine.decay_flash();
        }
        assert_eq!(engine.tick(), Some(PlaybackEvent::Finished));
        assert_eq!(engine.flash_level(), 0.0);
        assert!(!engine.flash_visible());
    }
}
