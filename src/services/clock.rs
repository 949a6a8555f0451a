//! Wall clock shown on both surfaces, refreshed once per second.

use std::time::{Duration, Instant};

use chrono::NaiveTime;

use super::ticker::Ticker;
use crate::utils::time::format_clock;

pub const CLOCK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct WallClock {
    ticker: Ticker,
    text: String,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            ticker: Ticker::new(CLOCK_INTERVAL),
            text: String::new(),
        }
    }

    /// Show `time` straight away and begin the one-second refresh.
    pub fn start(&mut self, now: Instant, time: NaiveTime) {
        self.text = format_clock(time);
        self.ticker.start(now);
    }

    /// Refresh the text if a period has elapsed. Returns whether it was refreshed.
    pub fn advance(&mut self, now: Instant, read_time: impl FnOnce() -> NaiveTime) -> bool {
        if self.ticker.poll(now) == 0 {
            return false;
        }
        self.text = format_clock(read_time());
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }
}
