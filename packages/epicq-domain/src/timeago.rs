use time::{OffsetDateTime, format_description::well_known::Rfc3339};

const MINUTE_SECONDS: i64 = 60;
const HOUR_SECONDS: i64 = 3_600;
const DAY_SECONDS: i64 = 86_400;

/// Renders an RFC 3339 timestamp as a relative label: "Hace N min" under an
/// hour, "Hace N h" under a day, "Hace N d" otherwise. Invalid or empty
/// input yields an empty string, never an error.
pub fn format_time_ago(created_at: &str) -> String {
	format_time_ago_at(created_at, OffsetDateTime::now_utc())
}

pub fn format_time_ago_at(created_at: &str, now: OffsetDateTime) -> String {
	let Ok(created_at) = OffsetDateTime::parse(created_at.trim(), &Rfc3339) else {
		return String::new();
	};
	let elapsed = (now - created_at).whole_seconds().max(0);

	if elapsed < HOUR_SECONDS {
		format!("Hace {} min", elapsed / MINUTE_SECONDS)
	} else if elapsed < DAY_SECONDS {
		format!("Hace {} h", elapsed / HOUR_SECONDS)
	} else {
		format!("Hace {} d", elapsed / DAY_SECONDS)
	}
}
