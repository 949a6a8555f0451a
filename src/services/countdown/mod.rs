mod models;
mod service;

pub use models::{CountdownError, CountdownPhase};
pub use service::{Countdown, COUNTDOWN_INTERVAL};
