//! Coarse "how long ago" labels for macro subtitles.
//!
//! Months are 30-day units and years are 365-day units; no calendar math.

use chrono::{DateTime, Utc};

const SECOND: i64 = 1;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR_DAYS: i64 = 365;

/// Format the age of `created` relative to `now`.
///
/// Buckets are checked in order and values are floored. The second, minute
/// and hour counts are the components of the elapsed time, so 90 seconds
/// reads "1 minutes ago". Timestamps in the future count as zero elapsed.
pub fn format_relative_time(now: DateTime<Utc>, created: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created).num_seconds().max(0);

    if elapsed < MINUTE {
        let seconds = elapsed % MINUTE;
        return if seconds <= 1 {
            "one second ago".to_string()
        } else {
            format!("{} seconds ago", seconds)
        };
    }

    if elapsed < 60 * MINUTE {
        return format!("{} minutes ago", (elapsed / MINUTE) % 60);
    }

    if elapsed < 120 * MINUTE {
        return "an hour ago".to_string();
    }

    if elapsed < 24 * HOUR {
        return format!("{} hours ago", (elapsed / HOUR) % 24);
    }

    if elapsed < 48 * HOUR {
        return "yesterday".to_string();
    }

    let days = elapsed / DAY;

    if elapsed < 30 * DAY {
        return format!("{} days ago", days);
    }

    if elapsed < 12 * MONTH {
        let months = days / 30;
        return if months <= 1 {
            "one month ago".to_string()
        } else {
            format!("{} months ago", months)
        };
    }

    let years = days / YEAR_DAYS;
    if years <= 1 {
        "one year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}
