use serde::Serialize;

/// Something noteworthy that happened during a playback tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// The current item entered its final seconds and the flash was raised.
    Flashed { item_index: usize },
    /// The current item ran out and playback moved on.
    Advanced { from: usize, to: usize },
    /// The last item ran out; playback stopped and rewound.
    Finished,
}
