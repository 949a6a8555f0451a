// Presenter state
// Single owner of everything shown on the control panel and the external screen

use std::time::{Duration, Instant};

use chrono::NaiveTime;

use super::clock::WallClock;
use super::countdown::{Countdown, CountdownError, CountdownPhase};
use super::messages::MessageLog;
use super::presets::{PresetInput, PresetList};
use crate::models::color::DisplayColors;
use crate::models::preset::{PresetDuration, PresetError};

/// What the control panel's labels show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub clock: String,
    /// Padded label of the loaded preset
    pub current_preset: String,
    pub remaining: String,
    pub message: String,
    pub phase: CountdownPhase,
}

/// What the external screen shows. It holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub clock: String,
    pub remaining: String,
    pub message: String,
    pub minutes_hint: String,
    pub colors: DisplayColors,
}

/// Every mutation goes through here; both surfaces are rendered from the
/// projections after each frame's updates.
#[derive(Debug, Clone, Default)]
pub struct PresenterState {
    /// Hour/minute/second fields next to "Add timer"
    pub preset_input: PresetInput,
    /// Text field next to "Send"
    pub message_input: String,
    pub selected_preset: Option<usize>,
    pub selected_message: Option<usize>,
    presets: PresetList,
    countdown: Countdown,
    messages: MessageLog,
    clock: WallClock,
    colors: DisplayColors,
}

impl PresenterState {
    pub fn new(colors: DisplayColors) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    pub fn start_clock(&mut self, now: Instant, time: NaiveTime) {
        self.clock.start(now, time);
    }

    // ── Presets ──────────────────────────────────────────────────────────────

    pub fn add_preset(&mut self) -> Result<PresetDuration, PresetError> {
        let result = self.presets.add_from_input(&mut self.preset_input);
        match &result {
            Ok(preset) => log::info!("Added timer preset {}", preset),
            Err(err) => log::debug!("Timer preset not added: {err}"),
        }
        result
    }

    pub fn remove_selected_preset(&mut self) -> Option<PresetDuration> {
        let removed = self.presets.remove(self.selected_preset)?;
        self.selected_preset = clamp_selection(self.selected_preset, self.presets.len());
        log::info!("Removed timer preset {}", removed);
        Some(removed)
    }

    /// Load the preset at `index` into the countdown.
    pub fn select_preset(&mut self, index: usize) -> Option<PresetDuration> {
        let preset = self.presets.get(index)?;
        self.selected_preset = Some(index);
        self.countdown.select(preset);
        log::info!("Loaded countdown {}", preset);
        Some(preset)
    }

    pub fn presets(&self) -> &PresetList {
        &self.presets
    }

    // ── Countdown ────────────────────────────────────────────────────────────

    pub fn start_countdown(&mut self, now: Instant) -> Result<(), CountdownError> {
        self.countdown.start(now).inspect_err(log_transition)
    }

    pub fn pause_countdown(&mut self) -> Result<(), CountdownError> {
        self.countdown.pause().inspect_err(log_transition)
    }

    pub fn reset_countdown(&mut self) -> Result<(), CountdownError> {
        self.countdown.reset().inspect_err(log_transition)
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    // ── Messages ─────────────────────────────────────────────────────────────

    /// Send the message field. Non-empty text is logged and the field cleared.
    pub fn send_message(&mut self) {
        let text = self.message_input.clone();
        if self.messages.send(&text) {
            self.message_input.clear();
            log::info!("Sent message {:?}", text);
        } else {
            log::debug!("Cleared message display");
        }
    }

    pub fn replay_message(&mut self, index: usize) -> bool {
        self.selected_message = Some(index);
        self.messages.replay(index)
    }

    pub fn delete_selected_message(&mut self) -> Option<String> {
        let removed = self.messages.delete(self.selected_message)?;
        self.selected_message = clamp_selection(self.selected_message, self.messages.history().len());
        log::info!("Deleted message {:?}", removed);
        Some(removed)
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    // ── Colors ───────────────────────────────────────────────────────────────

    pub fn colors(&self) -> DisplayColors {
        self.colors
    }

    pub fn set_colors(&mut self, colors: DisplayColors) {
        if self.colors != colors {
            self.colors = colors;
            log::debug!("Applied display style: {}", colors.style_string());
        }
    }

    // ── Ticks ────────────────────────────────────────────────────────────────

    /// Run whichever ticks are due. Returns whether anything visible changed.
    pub fn advance(&mut self, now: Instant, read_time: impl FnOnce() -> NaiveTime) -> bool {
        let clock_changed = self.clock.advance(now, read_time);
        let ticks = self.countdown.advance(now);
        if ticks > 0 && self.countdown.phase() == CountdownPhase::Expired {
            log::info!("Countdown expired");
        }
        clock_changed || ticks > 0
    }

    /// How long the frame loop may sleep before the next tick is due.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        match (
            self.clock.time_until_next(now),
            self.countdown.time_until_next_tick(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ── Projections ──────────────────────────────────────────────────────────

    pub fn control_view(&self) -> ControlView {
        ControlView {
            clock: self.clock.text().to_string(),
            current_preset: self
                .countdown
                .current()
                .map(|preset| preset.label())
                .unwrap_or_default(),
            remaining: self.countdown.remaining_text(),
            message: self.messages.current().to_string(),
            phase: self.countdown.phase(),
        }
    }

    pub fn display_view(&self) -> DisplayView {
        DisplayView {
            clock: self.clock.text().to_string(),
            remaining: self.countdown.remaining_text(),
            message: self.messages.current().to_string(),
            minutes_hint: self.countdown.minutes_hint(),
            colors: self.colors,
        }
    }
}

fn log_transition(err: &CountdownError) {
    log::debug!("Ignored countdown button: {err}");
}

/// Keep the list selection on the same row, or the last row once the end was removed.
fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    let index = selected?;
    if index < len {
        Some(index)
    } else {
        len.checked_sub(1)
    }
}
