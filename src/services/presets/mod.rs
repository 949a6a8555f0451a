// Preset list service
// Saved countdown lengths, unique by their HH:MM:SS label

use crate::models::preset::{PresetDuration, PresetError};

/// Values typed into the hour/minute/second fields next to "Add timer".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetInput {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl PresetInput {
    /// Read the fields and set them back to zero.
    pub fn take(&mut self) -> (u32, u32, u32) {
        let values = (self.hours, self.minutes, self.seconds);
        *self = Self::default();
        values
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresetList {
    items: Vec<PresetDuration>,
}

impl PresetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a preset built from the given fields.
    ///
    /// Zero durations and labels already in the list are refused.
    pub fn add(
        &mut self,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<PresetDuration, PresetError> {
        let preset = PresetDuration::new(hours, minutes, seconds)?;
        if preset.is_null() {
            return Err(PresetError::Null);
        }
        if self.items.contains(&preset) {
            return Err(PresetError::Duplicate(preset.label()));
        }

        self.items.push(preset);
        Ok(preset)
    }

    /// Add from the input fields, which are cleared whether or not the preset is kept.
    pub fn add_from_input(&mut self, input: &mut PresetInput) -> Result<PresetDuration, PresetError> {
        let (hours, minutes, seconds) = input.take();
        self.add(hours, minutes, seconds)
    }

    /// Remove the selected preset. Nothing happens without a valid selection.
    pub fn remove(&mut self, selected: Option<usize>) -> Option<PresetDuration> {
        let index = selected.filter(|index| *index < self.items.len())?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<PresetDuration> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PresetDuration> {
        self.items.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(PresetDuration::label).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
