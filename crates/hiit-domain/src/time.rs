use serde::Serialize;
use std::fmt;

use crate::routine::Routine;

/// Sum of all item durations in seconds.
pub fn total_duration(routine: &Routine) -> u32 {
    routine.items.iter().map(|item| item.duration).sum()
}

/// Clock reading split into whole minutes and leftover seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockTime {
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    pub fn minutes_padded(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn seconds_padded(&self) -> String {
        format!("{:02}", self.seconds)
    }

    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.minutes_padded(), self.seconds_padded())
    }
}

pub fn format_time(total_seconds: u32) -> ClockTime {
    ClockTime {
        minutes: total_seconds / 60,
        seconds: total_seconds % 60,
    }
}
