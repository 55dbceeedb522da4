//! Relevance scoring for global search candidates.
//!
//! Scores are only comparable within one response. The token path is
//! additive across token pairs and may exceed 100; exact, prefix, and
//! substring matches stay on the fixed 100/90/50 scale.

pub const EXACT_SCORE: u32 = 100;
pub const PREFIX_SCORE: u32 = 90;
pub const TOKEN_PREFIX_SCORE: u32 = 80;
pub const TOKEN_CONTAINS_SCORE: u32 = 60;
pub const SUBSTRING_SCORE: u32 = 50;

/// Scores `candidate` against `query`, case-insensitively. Deterministic for
/// a given pair. Zero means no match; callers drop zero-score candidates.
pub fn score(candidate: &str, query: &str) -> u32 {
	let candidate = candidate.trim().to_lowercase();
	let query = query.trim().to_lowercase();

	if candidate.is_empty() || query.is_empty() {
		return 0;
	}
	if candidate == query {
		return EXACT_SCORE;
	}
	if candidate.starts_with(&query) {
		return PREFIX_SCORE;
	}

	let mut accumulated = 0;

	for query_token in query.split_whitespace() {
		for candidate_token in candidate.split_whitespace() {
			if candidate_token.starts_with(query_token) {
				accumulated += TOKEN_PREFIX_SCORE;
			} else if candidate_token.contains(query_token) {
				accumulated += TOKEN_CONTAINS_SCORE;
			}
		}
	}

	if accumulated > 0 {
		return accumulated;
	}
	if candidate.contains(&query) {
		return SUBSTRING_SCORE;
	}

	0
}

/// Coordinator candidates match on either name or email; the stronger of the
/// two wins.
pub fn score_best(fields: &[&str], query: &str) -> u32 {
	fields.iter().map(|field| score(field, query)).max().unwrap_or(0)
}
