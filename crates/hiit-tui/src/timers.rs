use std::time::Duration;

use hiit_domain::playback::{FLASH_DECAY_INTERVAL, TICK_INTERVAL};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::events::Event;

/// The two repeating tasks behind a playback view.
///
/// Both are aborted when this value is dropped, so leaving playback by any
/// path stops the ticks.
pub struct PlaybackTimers {
    session: u64,
    playback: JoinHandle<()>,
    flash: JoinHandle<()>,
}

impl PlaybackTimers {
    pub fn start(tx: UnboundedSender<Event>, session: u64) -> Self {
        tracing::debug!("Starting playback timers for session {}", session);
        Self {
            session,
            playback: spawn_repeating(
                tx.clone(),
                TICK_INTERVAL,
                Event::PlaybackTick { session },
            ),
            flash: spawn_repeating(tx, FLASH_DECAY_INTERVAL, Event::FlashTick { session }),
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_finished(&self) -> bool {
        self.playback.is_finished() && self.flash.is_finished()
    }
}

impl Drop for PlaybackTimers {
    fn drop(&mut self) {
        self.playback.abort();
        self.flash.abort();
        tracing::debug!("Stopped playback timers for session {}", self.session);
    }
}

fn spawn_repeating(tx: UnboundedSender<Event>, period: Duration, event: Event) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tx.send(event.clone()).is_err() {
                break;
            }
        }
    })
}
