use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Fixed local offset of the dashboard, UTC+05:30.
pub const LOCAL_OFFSET_SECONDS: i64 = 5 * 3600 + 30 * 60;
pub const LOCAL_ZONE_LABEL: &str = "IST";

const LOCAL_DISPLAY_FORMAT: &str = "%d %b %Y  %I:%M %p";

fn to_local(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc() + Duration::seconds(LOCAL_OFFSET_SECONDS)
}

/// Today's local midnight as a UTC instant.
///
/// The offset has to be applied before truncating to the day, otherwise the
/// boundary lands on the wrong day whenever the local date is ahead of UTC.
pub fn local_midnight_utc(now: DateTime<Utc>) -> DateTime<Utc> {
    let local_midnight = to_local(now).date().and_time(NaiveTime::MIN);
    Utc.from_utc_datetime(&(local_midnight - Duration::seconds(LOCAL_OFFSET_SECONDS)))
}

/// Format an instant the way the search API expects `publishedAfter`,
/// e.g. `2026-02-21T18:30:00Z`.
pub fn format_api_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Human readable local time, e.g. `21 Feb 2026  04:00 PM IST`.
pub fn format_local_timestamp(instant: DateTime<Utc>) -> String {
    format!(
        "{} {LOCAL_ZONE_LABEL}",
        to_local(instant).format(LOCAL_DISPLAY_FORMAT)
    )
}

/// Parse an ISO8601 UTC publish time and render it in local time.
pub fn localize_timestamp(published_at: &str) -> Result<String, chrono::ParseError> {
    let instant = published_at.parse::<DateTime<Utc>>()?;
    Ok(format_local_timestamp(instant))
}
