use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use epicq_domain::{history::SearchHistory, relevance, timeago};

#[test]
fn exact_match_scores_100() {
	assert_eq!(relevance::score("Hospital General", "Hospital General"), 100);
	assert_eq!(relevance::score("Hospital General", "hospital general"), 100);
}

#[test]
fn prefix_match_scores_90() {
	assert_eq!(relevance::score("Hospital General", "Hospital"), 90);
}

#[test]
fn token_match_lands_between_substring_and_prefix() {
	let score = relevance::score("Hospital General de Buenos Aires", "General");

	assert!(score >= 60);
	assert!(score < 90);
}

#[test]
fn token_scores_accumulate_across_pairs() {
	// "general" and "buenos" each hit a candidate token with a prefix match.
	let score = relevance::score("Hospital General de Buenos Aires", "General Buenos");

	assert_eq!(score, 160);
}

#[test]
fn match_inside_a_single_token_scores_60() {
	// The token pass catches this before the bare substring fallback.
	assert_eq!(relevance::score("Recruitment2024", "cruit"), 60);
}

#[test]
fn unrelated_text_scores_zero() {
	assert_eq!(relevance::score("Hospital General", "cardiology"), 0);
	assert_eq!(relevance::score("", "query"), 0);
	assert_eq!(relevance::score("Hospital", ""), 0);
}

#[test]
fn scoring_is_deterministic() {
	let first = relevance::score("Hospital Italiano de La Plata", "plata hospital");
	let second = relevance::score("Hospital Italiano de La Plata", "plata hospital");

	assert_eq!(first, second);
}

#[test]
fn best_field_score_wins_for_coordinators() {
	// The name tokenizes to a prefix match (80); the email only contains the
	// query inside one token (60). The name score must win.
	let score = relevance::score_best(&["Ana Souto", "ana.souto@hospital.org"], "souto");

	assert_eq!(score, 80);
}

#[test]
fn history_caps_at_limit_most_recent_first() {
	let mut history = SearchHistory::new(10);

	for index in 0..11 {
		history.push(&format!("query-{index}"));
	}

	assert_eq!(history.len(), 10);
	assert_eq!(history.entries()[0], "query-10");
	assert_eq!(history.entries()[9], "query-1");
}

#[test]
fn history_duplicate_moves_to_front_without_growing() {
	let mut history = SearchHistory::new(10);

	history.push("alpha");
	history.push("beta");
	history.push("gamma");
	history.push("alpha");

	assert_eq!(history.len(), 3);
	assert_eq!(history.entries(), ["alpha", "gamma", "beta"]);
}

#[test]
fn history_ignores_blank_queries() {
	let mut history = SearchHistory::new(10);

	history.push("   ");

	assert!(history.is_empty());
}

#[test]
fn history_matching_filters_by_substring() {
	let mut history = SearchHistory::new(10);

	history.push("hospital general");
	history.push("recruitment period");
	history.push("General Roca");

	assert_eq!(history.matching("general"), ["General Roca", "hospital general"]);
}

#[test]
fn time_ago_minutes_hours_days() {
	let now = OffsetDateTime::now_utc();
	let stamp = |ago: Duration| (now - ago).format(&Rfc3339).expect("Failed to format stamp.");

	assert_eq!(timeago::format_time_ago_at(&stamp(Duration::minutes(30)), now), "Hace 30 min");
	assert_eq!(timeago::format_time_ago_at(&stamp(Duration::minutes(90)), now), "Hace 1 h");
	assert_eq!(timeago::format_time_ago_at(&stamp(Duration::hours(50)), now), "Hace 2 d");
}

#[test]
fn time_ago_invalid_input_is_empty() {
	let now = OffsetDateTime::now_utc();

	assert_eq!(timeago::format_time_ago_at("not-a-date", now), "");
	assert_eq!(timeago::format_time_ago_at("", now), "");
}

#[test]
fn time_ago_future_timestamps_clamp_to_zero() {
	let now = OffsetDateTime::now_utc();
	let future =
		(now + Duration::minutes(5)).format(&Rfc3339).expect("Failed to format stamp.");

	assert_eq!(timeago::format_time_ago_at(&future, now), "Hace 0 min");
}
