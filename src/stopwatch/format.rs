const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// Renders elapsed milliseconds as `MM:SS`, or `HH:MM:SS` once an hour has
/// passed. The sub-second remainder is truncated.
pub fn format_elapsed(ms: u64) -> String {
    let seconds = ms / 1000;
    let hours = seconds / SECS_PER_HOUR;
    let minutes = seconds % SECS_PER_HOUR / SECS_PER_MINUTE;
    let secs = seconds % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
