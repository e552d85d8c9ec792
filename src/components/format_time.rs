//! Relative timestamp label ("5m ago", "Mar 3 at 14:05").
use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use leptos::*;

use crate::i18n::{use_i18n, Translator};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Formats `time` (unix seconds) relative to `now`, rendering absolute dates
/// in `offset`.
pub fn format_relative(i18n: &Translator, time: i64, now: i64, offset: FixedOffset) -> String {
    let elapsed = now.saturating_sub(time);
    if elapsed < 10 {
        return i18n.t("dates.now");
    }
    if elapsed < MINUTE {
        return i18n.t_with("dates.x_seconds_ago", &[("count", &elapsed.to_string())]);
    }
    if elapsed < HOUR {
        return i18n.t_with("dates.x_minutes_ago", &[("count", &(elapsed / MINUTE).to_string())]);
    }
    if elapsed < DAY {
        return i18n.t_with("dates.x_hours_ago", &[("count", &(elapsed / HOUR).to_string())]);
    }

    let (Some(then), Some(current)) = (to_local(time, offset), to_local(now, offset)) else {
        return String::new();
    };
    let date_key = if then.year() == current.year() {
        "dates.long_date"
    } else {
        "dates.long_date_with_year"
    };
    let date = then.format(&i18n.t(date_key)).to_string();
    let time_of_day = then.format("%H:%M").to_string();
    i18n.t_with(
        "dates.long_date_with_time",
        &[("date", &date), ("time", &time_of_day)],
    )
}

fn to_local(secs: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&offset))
}

/// ISO-8601 form for the `datetime` attribute.
pub fn iso_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|utc| utc.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn browser_clock() -> (i64, FixedOffset) {
    let date = js_sys::Date::new_0();
    let now = (js_sys::Date::now() / 1000.0) as i64;
    // getTimezoneOffset is minutes *behind* UTC.
    let offset_secs = -(date.get_timezone_offset() as i32) * 60;
    let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(utc_offset);
    (now, offset)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_clock() -> (i64, FixedOffset) {
    (Utc::now().timestamp(), utc_offset())
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

#[component]
pub fn FormatTime(
    time: i64,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] prefix: String,
) -> impl IntoView {
    let i18n = use_i18n();
    let (now, offset) = browser_clock();
    let label = format_relative(&i18n, time, now, offset);
    let text = if prefix.is_empty() {
        label
    } else {
        format!("{prefix} {label}")
    };

    view! {
        <time class=class datetime=iso_timestamp(time)>{text}</time>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    const NOW: i64 = 1_700_000_000; // 2023-11-14 22:13:20 UTC

    fn fmt(time: i64) -> String {
        format_relative(&Translator::new(Locale::EnUs), time, NOW, utc_offset())
    }

    #[test]
    fn test_recent_times_are_relative() {
        assert_eq!(fmt(NOW - 3), "now");
        assert_eq!(fmt(NOW - 42), "42s ago");
        assert_eq!(fmt(NOW - 5 * MINUTE), "5m ago");
        assert_eq!(fmt(NOW - 3 * HOUR - 10), "3h ago");
    }

    #[test]
    fn test_older_times_are_absolute() {
        // 2023-11-01 08:05:00 UTC
        assert_eq!(fmt(1_698_825_900), "Nov 1 at 08:05");
        // 2022-03-03 14:05:00 UTC
        assert_eq!(fmt(1_646_316_300), "Mar 3, 2022 at 14:05");
    }

    #[test]
    fn test_offset_shifts_absolute_dates() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let text = format_relative(&Translator::new(Locale::EnUs), 1_698_825_900, NOW, plus_two);
        assert_eq!(text, "Nov 1 at 10:05");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        assert_eq!(fmt(i64::MIN), "");
        assert_eq!(fmt(i64::MAX), "now");
    }

    #[test]
    fn test_iso_timestamp() {
        assert_eq!(iso_timestamp(0), "1970-01-01T00:00:00+00:00");
    }
}
