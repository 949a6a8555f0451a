// Preset duration model
// A saved countdown length shown in the timers list as HH:MM:SS

use std::fmt;

use thiserror::Error;

pub const MAX_HOURS: u32 = 99;
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS: u32 = 59;

/// Reasons a preset is refused by the timers list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("preset duration is 00:00:00")]
    Null,
    #[error("preset {0} is already in the list")]
    Duplicate(String),
    #[error("{field} value {value} is out of range (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// A countdown length in hours, minutes and seconds.
///
/// Presets are never edited in place; the list only appends and removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetDuration {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl PresetDuration {
    /// Build a preset, checking each field against the input ranges.
    /// A zero duration is accepted here; the list decides whether to keep it.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, PresetError> {
        check_range("hours", hours, MAX_HOURS)?;
        check_range("minutes", minutes, MAX_MINUTES)?;
        check_range("seconds", seconds, MAX_SECONDS)?;

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    pub fn is_null(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Zero-padded `HH:MM:SS` label used by the list and the fresh countdown display.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PresetDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

fn check_range(field: &'static str, value: u32, max: u32) -> Result<(), PresetError> {
    if value > max {
        return Err(PresetError::OutOfRange { field, value, max });
    }
    Ok(())
}
