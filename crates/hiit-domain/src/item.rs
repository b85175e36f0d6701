use hiit_core::{HiitError, HiitResult};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

use crate::routine::new_id;

pub type ItemId = String;

pub const MIN_DURATION: u32 = 1;
/// 99:59 on the clock.
pub const MAX_DURATION: u32 = 5999;

pub const NEW_ITEM_NAME: &str = "New item";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Seconds.
    pub duration: u32,
    pub flash: bool,
}

impl Item {
    pub fn new(name: String, duration: i64, flash: bool) -> Self {
        Self {
            id: new_id(),
            name,
            duration: clamp_duration(duration),
            flash,
        }
    }

    pub fn placeholder() -> Self {
        Self::new(NEW_ITEM_NAME.to_string(), MIN_DURATION as i64, true)
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Returns the stored (clamped) value.
    pub fn set_duration(&mut self, seconds: i64) -> u32 {
        self.duration = clamp_duration(seconds);
        self.duration
    }

    pub fn set_flash(&mut self, flash: bool) {
        self.flash = flash;
    }
}

pub fn clamp_duration(seconds: i64) -> u32 {
    seconds.clamp(MIN_DURATION as i64, MAX_DURATION as i64) as u32
}

/// Parse user-entered seconds. Blank input reads as zero and clamps like any
/// other out-of-range number; only non-numeric text is rejected.
pub fn parse_duration(text: &str) -> HiitResult<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(MIN_DURATION);
    }
    match trimmed.parse::<i64>() {
        Ok(seconds) => Ok(clamp_duration(seconds)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(MAX_DURATION),
            IntErrorKind::NegOverflow => Ok(MIN_DURATION),
            _ => Err(HiitError::Validation(format!(
                "duration must be a whole number of seconds, got '{}'",
                trimmed
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_duration_bounds() {
        assert_eq!(clamp_duration(0), 1);
        assert_eq!(clamp_duration(-30), 1);
        assert_eq!(clamp_duration(1), 1);
        assert_eq!(clamp_duration(45), 45);
        assert_eq!(clamp_duration(5999), 5999);
        assert_eq!(clamp_duration(6000), 5999);
        assert_eq!(clamp_duration(i64::MAX), 5999);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30").unwrap(), 30);
        assert_eq!(parse_duration(" 90 ").unwrap(), 90);
        assert_eq!(parse_duration("").unwrap(), 1);
        assert_eq!(parse_duration("0").unwrap(), 1);
        assert_eq!(parse_duration("-5").unwrap(), 1);
        assert_eq!(parse_duration("100000").unwrap(), 5999);
        assert_eq!(parse_duration("99999999999999999999999").unwrap(), 5999);
        assert!(parse_duration("ten").is_err());
        assert!(parse_duration("1.5").is_err());
    }

    #[test]
    fn test_placeholder_item() {
        let item = Item::placeholder();
        assert_eq!(item.name, "New item");
        assert_eq!(item.duration, 1);
        assert!(item.flash);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_set_duration_clamps() {
        let mut item = Item::placeholder();
        assert_eq!(item.set_duration(7200), 5999);
        assert_eq!(item.duration, 5999);
        assert_eq!(item.set_duration(-1), 1);
    }

    #[test]
    fn test_json_field_names() {
        let item = Item {
            id: "V1StGXR8".to_string(),
            name: "Burpees".to_string(),
            duration: 40,
            flash: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "V1StGXR8", "name": "Burpees", "duration": 40, "flash": false})
        );
    }
}
