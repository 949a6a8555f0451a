use std::fmt;

use thiserror::Error;

/// Lifecycle of the active countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// No preset has been loaded yet
    #[default]
    Idle,
    /// A preset is loaded and shows its full length
    Ready,
    Running,
    Paused,
    /// Reached zero; stays there until another preset is loaded or reset
    Expired,
}

impl fmt::Display for CountdownPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CountdownPhase::Idle => "idle",
            CountdownPhase::Ready => "ready",
            CountdownPhase::Running => "running",
            CountdownPhase::Paused => "paused",
            CountdownPhase::Expired => "expired",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("cannot {action} a countdown that is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: CountdownPhase,
    },
}
