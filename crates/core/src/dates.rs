//! Human-readable relative and absolute dates for idea cards.

use crate::types::Timestamp;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days elapsed from `then` to `now`, rounded down.
fn days_since(then: Timestamp, now: Timestamp) -> i64 {
    (now - then).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Days remaining from `now` until `target`, rounded up.
fn days_remaining(target: Timestamp, now: Timestamp) -> i64 {
    let millis = (target - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// "today", "yesterday", "12 days ago", "3 months ago", "2 years ago".
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    let days = days_since(then, now);
    match days {
        i64::MIN..=0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=29 => format!("{days} days ago"),
        30..=59 => "1 month ago".to_string(),
        60..=364 => format!("{} months ago", days / 30),
        _ => {
            let years = days / 365;
            let plural = if years > 1 { "s" } else { "" };
            format!("{years} year{plural} ago")
        }
    }
}

/// "any day now", "tomorrow", "in 12 days", "in about a month", "in 3 months".
pub fn days_until(target: Timestamp, now: Timestamp) -> String {
    let days = days_remaining(target, now);
    match days {
        i64::MIN..=0 => "any day now".to_string(),
        1 => "tomorrow".to_string(),
        2..=29 => format!("in {days} days"),
        30..=59 => "in about a month".to_string(),
        _ => format!("in {} months", days / 30),
    }
}

/// Absolute day-month-year date, e.g. "5 Mar 2026".
pub fn format_date(ts: Timestamp) -> String {
    ts.format("%-d %b %Y").to_string()
}
