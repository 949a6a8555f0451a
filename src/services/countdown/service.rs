use std::time::{Duration, Instant};

use super::models::{CountdownError, CountdownPhase};
use crate::models::preset::PresetDuration;
use crate::services::ticker::Ticker;
use crate::utils::time::{format_countdown, rounded_minutes};

pub const COUNTDOWN_INTERVAL: Duration = Duration::from_millis(1000);

/// The countdown driven by the start, pause and reset buttons.
///
/// Remaining time is kept as whole seconds; the strings shown on the two
/// surfaces are derived from it on demand.
#[derive(Debug, Clone)]
pub struct Countdown {
    phase: CountdownPhase,
    current: Option<PresetDuration>,
    remaining_secs: u64,
    ticker: Ticker,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            phase: CountdownPhase::Idle,
            current: None,
            remaining_secs: 0,
            ticker: Ticker::new(COUNTDOWN_INTERVAL),
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// The preset most recently loaded, which reset returns to.
    pub fn current(&self) -> Option<PresetDuration> {
        self.current
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Load `preset` as the countdown, replacing whatever was loaded or running.
    pub fn select(&mut self, preset: PresetDuration) {
        self.ticker.stop();
        self.current = Some(preset);
        self.remaining_secs = preset.total_seconds();
        self.phase = CountdownPhase::Ready;
    }

    pub fn start(&mut self, now: Instant) -> Result<(), CountdownError> {
        match self.phase {
            CountdownPhase::Ready | CountdownPhase::Paused => {
                self.ticker.start(now);
                self.phase = CountdownPhase::Running;
                Ok(())
            }
            phase => Err(CountdownError::InvalidTransition {
                action: "start",
                phase,
            }),
        }
    }

    pub fn pause(&mut self) -> Result<(), CountdownError> {
        if self.phase != CountdownPhase::Running {
            return Err(CountdownError::InvalidTransition {
                action: "pause",
                phase: self.phase,
            });
        }
        self.ticker.stop();
        self.phase = CountdownPhase::Paused;
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), CountdownError> {
        self.ticker.stop();
        let Some(preset) = self.current else {
            return Err(CountdownError::InvalidTransition {
                action: "reset",
                phase: self.phase,
            });
        };
        self.remaining_secs = preset.total_seconds();
        self.phase = CountdownPhase::Ready;
        Ok(())
    }

    /// One second elapsed. Returns whether the countdown changed.
    pub fn tick(&mut self) -> bool {
        if self.phase != CountdownPhase::Running {
            return false;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.ticker.stop();
            self.phase = CountdownPhase::Expired;
        }
        true
    }

    /// Apply every tick that fell due up to `now`. Returns how many were applied.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = self.ticker.poll(now);
        let mut applied = 0;
        for _ in 0..due {
            if !self.tick() {
                break;
            }
            applied += 1;
        }
        applied
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }

    /// Text for the remaining-time labels.
    ///
    /// Until the first second is taken off, the preset's padded `HH:MM:SS`
    /// form is shown; afterwards the unpadded countdown form.
    pub fn remaining_text(&self) -> String {
        match self.current {
            None => String::new(),
            Some(preset) if self.remaining_secs == preset.total_seconds() => preset.label(),
            Some(_) => format_countdown(self.remaining_secs),
        }
    }

    /// The external screen's "minutes remaining" line for the loaded preset.
    pub fn minutes_hint(&self) -> String {
        match self.current {
            None => String::new(),
            Some(preset) => format!(
                "You have {} minutes",
                rounded_minutes(preset.total_seconds())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(h: u32, m: u32, s: u32) -> PresetDuration {
        PresetDuration::new(h, m, s).unwrap()
    }

    #[test]
    fn idle_countdown_shows_nothing() {
        let countdown = Countdown::new();
        assert_eq!(countdown.phase(), CountdownPhase::Idle);
        assert_eq!(countdown.remaining_text(), "");
        assert_eq!(countdown.minutes_hint(), "");
    }

    #[test]
    fn select_loads_padded_text_and_hint() {
        let mut countdown = Countdown::new();
        countdown.select(preset(0, 2, 30));
        assert_eq!(countdown.phase(), CountdownPhase::Ready);
        assert_eq!(countdown.remaining_text(), "00:02:30");
        assert_eq!(countdown.minutes_hint(), "You have 2 minutes");
    }

    #[test]
    fn start_requires_a_loaded_countdown() {
        let mut countdown = Countdown::new();
        let err = countdown.start(Instant::now()).unwrap_err();
        assert_eq!(
            err,
            CountdownError::InvalidTransition {
                action: "start",
                phase: CountdownPhase::Idle
            }
        );
    }

    #[test]
    fn first_tick_switches_to_unpadded_form() {
        let mut countdown = Countdown::new();
        countdown.select(preset(0, 1, 0));
        countdown.start(Instant::now()).unwrap();
        assert!(countdown.tick());
        assert_eq!(countdown.remaining_text(), "0:00:59");
    }

    #[test]
    fn ticks_outside_running_are_ignored() {
        let mut countdown = Countdown::new();
        countdown.select(preset(0, 0, 10));
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining_secs(), 10);
    }

    #[test]
    fn one_second_countdown_expires_on_first_tick() {
        let mut countdown = Countdown::new();
        countdown.select(preset(0, 0, 1));
        countdown.start(Instant::now()).unwrap();
        countdown.tick();
        assert_eq!(countdown.phase(), CountdownPhase::Expired);
        assert_eq!(countdown.remaining_text(), "0:00:00");
        assert_eq!(countdown.time_until_next_tick(Instant::now()), None);
    }

    #[test]
    fn advance_catches_up_but_stops_at_expiry() {
        let mut countdown = Countdown::new();
        let start = Instant::now();
        countdown.select(preset(0, 0, 3));
        countdown.start(start).unwrap();

        assert_eq!(countdown.advance(start + Duration::from_secs(10)), 3);
        assert_eq!(countdown.phase(), CountdownPhase::Expired);
    }

    #[test]
    fn selecting_while_running_stops_the_tick() {
        let mut countdown = Countdown::new();
        let start = Instant::now();
        countdown.select(preset(0, 5, 0));
        countdown.start(start).unwrap();
        countdown.select(preset(0, 1, 0));

        assert_eq!(countdown.phase(), CountdownPhase::Ready);
        assert_eq!(countdown.advance(start + Duration::from_secs(5)), 0);
        assert_eq!(countdown.remaining_text(), "00:01:00");
    }

    #[test]
    fn reset_without_a_preset_stays_idle() {
        let mut countdown = Countdown::new();
        assert!(countdown.reset().is_err());
        assert_eq!(countdown.phase(), CountdownPhase::Idle);
    }

    #[test]
    fn reset_after_expiry_reloads_the_preset() {
        let mut countdown = Countdown::new();
        countdown.select(preset(0, 0, 2));
        countdown.start(Instant::now()).unwrap();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.phase(), CountdownPhase::Expired);

        countdown.reset().unwrap();
        assert_eq!(countdown.phase(), CountdownPhase::Ready);
        assert_eq!(countdown.remaining_text(), "00:00:02");
    }
}
