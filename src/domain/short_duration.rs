use std::time::Duration;

/// Formats a duration as `XhYmZs`, rounded to whole seconds, with leading
/// zero units left out and a trailing `0s` (after minutes) or `0m` (after
/// hours) elided: 90 minutes is `1h30m`, one hour is `1h`, 45 seconds `45s`.
pub fn short_duration(duration: Duration) -> String {
    let mut secs = duration.as_secs();
    if duration.subsec_millis() >= 500 {
        secs += 1;
    }

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut formatted = if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    };

    if formatted.ends_with("m0s") {
        formatted.truncate(formatted.len() - 2);
    }
    if formatted.ends_with("h0m") {
        formatted.truncate(formatted.len() - 2);
    }
    formatted
}
