// Time formatting helpers
// Clock-of-day and countdown strings shown on both surfaces

use chrono::NaiveTime;

const SECONDS_PER_DAY: u64 = 86_400;

/// Format a wall-clock time as `H:MM:SS` with no leading zero on the hour.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-H:%M:%S").to_string()
}

/// Format a remaining duration as `H:MM:SS`.
///
/// Hours are not padded. Durations of a day or longer are prefixed with the
/// day count, e.g. `1 day, 0:00:00` or `4 days, 3:00:00`.
pub fn format_countdown(total_seconds: u64) -> String {
    let days = total_seconds / SECONDS_PER_DAY;
    let rest = total_seconds % SECONDS_PER_DAY;
    let hours = rest / 3600;
    let minutes = rest % 3600 / 60;
    let seconds = rest % 60;
    let clock = format!("{hours}:{minutes:02}:{seconds:02}");

    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

/// Whole minutes in `total_seconds`, rounding halves to the even neighbour.
pub fn rounded_minutes(total_seconds: u64) -> u64 {
    (total_seconds as f64 / 60.0).round_ties_even() as u64
}
