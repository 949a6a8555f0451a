// Integration tests for the presenter state shared by both windows
use chronenberg::models::preset::PresetError;
use chronenberg::services::countdown::CountdownPhase;
use chronenberg::services::presenter::PresenterState;
use chronenberg::services::presets::PresetInput;
use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

fn add_preset(state: &mut PresenterState, hours: u32, minutes: u32, seconds: u32) -> Result<(), PresetError> {
    state.preset_input = PresetInput {
        hours,
        minutes,
        seconds,
    };
    state.add_preset().map(|_| ())
}

/// Load `00:01:00` and press start at `start`.
fn running_minute(start: Instant) -> PresenterState {
    let mut state = PresenterState::default();
    add_preset(&mut state, 0, 1, 0).expect("Failed to add preset");
    state.select_preset(0).expect("Preset should exist");
    state.start_countdown(start).expect("Failed to start countdown");
    state
}

#[test]
fn test_add_preset_formats_and_rejects_null() {
    let mut state = PresenterState::default();

    add_preset(&mut state, 1, 2, 3).expect("Failed to add preset");
    assert_eq!(state.presets().labels(), vec!["01:02:03"]);
    assert_eq!(state.preset_input, PresetInput::default());

    assert_eq!(add_preset(&mut state, 0, 0, 0), Err(PresetError::Null));
    assert_eq!(state.presets().labels(), vec!["01:02:03"]);
}

#[test]
fn test_duplicate_preset_is_kept_once() {
    let mut state = PresenterState::default();
    add_preset(&mut state, 0, 5, 0).unwrap();
    assert!(add_preset(&mut state, 0, 5, 0).is_err());
    assert_eq!(state.presets().len(), 1);
}

#[test]
fn test_minute_countdown_expires_after_sixty_ticks() {
    let start = Instant::now();
    let mut state = running_minute(start);

    for second in 1..=59 {
        state.advance(start + Duration::from_secs(second), noon);
        assert_eq!(state.countdown().phase(), CountdownPhase::Running);
    }
    assert_eq!(state.display_view().remaining, "0:00:01");

    state.advance(start + Duration::from_secs(60), noon);
    assert_eq!(state.countdown().phase(), CountdownPhase::Expired);
    assert_eq!(state.control_view().remaining, "0:00:00");
    assert_eq!(state.display_view().remaining, "0:00:00");

    // The tick has stopped: nothing further changes.
    assert!(!state.advance(start + Duration::from_secs(61), noon));
    assert_eq!(state.display_view().remaining, "0:00:00");
    assert_eq!(state.next_wakeup(start + Duration::from_secs(61)), None);
}

#[test]
fn test_pause_and_resume_do_not_drift() {
    let start = Instant::now();
    let mut state = running_minute(start);

    state.advance(start + Duration::from_secs(30), noon);
    assert_eq!(state.countdown().remaining_secs(), 30);
    state.pause_countdown().unwrap();

    // Time passes while paused.
    state.advance(start + Duration::from_secs(90), noon);
    assert_eq!(state.countdown().remaining_secs(), 30);
    assert_eq!(state.display_view().remaining, "0:00:30");

    let resumed = start + Duration::from_secs(90);
    state.start_countdown(resumed).unwrap();
    assert_eq!(state.countdown().remaining_secs(), 30);
    state.advance(resumed + Duration::from_secs(1), noon);
    assert_eq!(state.countdown().remaining_secs(), 29);
}

#[test]
fn test_reset_restores_selected_preset() {
    let start = Instant::now();
    let mut state = running_minute(start);

    state.advance(start + Duration::from_secs(20), noon);
    state.pause_countdown().unwrap();
    state.reset_countdown().unwrap();

    assert_eq!(state.countdown().phase(), CountdownPhase::Ready);
    assert_eq!(state.countdown().remaining_secs(), 60);
    assert_eq!(state.control_view().remaining, "00:01:00");
    assert_eq!(state.display_view().remaining, "00:01:00");
}

#[test]
fn test_reset_uses_preset_even_after_it_was_removed() {
    let start = Instant::now();
    let mut state = running_minute(start);
    state.remove_selected_preset();

    state.advance(start + Duration::from_secs(5), noon);
    state.reset_countdown().unwrap();
    assert_eq!(state.countdown().remaining_secs(), 60);
}

#[test]
fn test_send_message_updates_both_surfaces() {
    let mut state = PresenterState::default();

    state.message_input = "Break time".to_string();
    state.send_message();
    assert_eq!(state.messages().history(), ["Break time".to_string()]);
    assert_eq!(state.control_view().message, "Break time");
    assert_eq!(state.display_view().message, "Break time");

    state.message_input.clear();
    state.send_message();
    assert_eq!(state.messages().history().len(), 1);
    assert_eq!(state.control_view().message, "");
    assert_eq!(state.display_view().message, "");
}

#[test]
fn test_delete_message_clears_current_display() {
    let mut state = PresenterState::default();
    for text in ["Welcome", "Break time"] {
        state.message_input = text.to_string();
        state.send_message();
    }

    // "Break time" is showing; delete the other entry.
    state.selected_message = Some(0);
    assert_eq!(state.delete_selected_message().as_deref(), Some("Welcome"));
    assert_eq!(state.messages().history(), ["Break time".to_string()]);
    assert_eq!(state.control_view().message, "");
    assert_eq!(state.display_view().message, "");
}

#[test]
fn test_replay_shows_message_without_duplicating() {
    let mut state = PresenterState::default();
    for text in ["First", "Second"] {
        state.message_input = text.to_string();
        state.send_message();
    }

    assert!(state.replay_message(0));
    assert_eq!(state.display_view().message, "First");
    assert_eq!(state.messages().history().len(), 2);
}

#[test]
fn test_clock_reaches_both_surfaces() {
    let start = Instant::now();
    let mut state = PresenterState::default();
    state.start_clock(start, NaiveTime::from_hms_opt(9, 5, 3).unwrap());
    assert_eq!(state.control_view().clock, "9:05:03");

    state.advance(start + Duration::from_secs(1), || {
        NaiveTime::from_hms_opt(9, 5, 4).unwrap()
    });
    assert_eq!(state.control_view().clock, "9:05:04");
    assert_eq!(state.display_view().clock, "9:05:04");
}

#[test]
fn test_minutes_hint_survives_ticks_and_reset() {
    let start = Instant::now();
    let mut state = running_minute(start);
    assert_eq!(state.display_view().minutes_hint, "You have 1 minutes");

    state.advance(start + Duration::from_secs(45), noon);
    assert_eq!(state.display_view().minutes_hint, "You have 1 minutes");
    state.reset_countdown().unwrap();
    assert_eq!(state.display_view().minutes_hint, "You have 1 minutes");
}
