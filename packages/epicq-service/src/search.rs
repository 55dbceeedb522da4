use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use epicq_domain::relevance;
use epicq_storage::{
	models::{CoordinatorRow, HospitalRow, ProjectRow},
	queries,
};

use crate::{EpicqService, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
	pub query: String,
	#[serde(default)]
	pub filters: Option<SearchFilters>,
	#[serde(default)]
	pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilters {
	#[serde(default)]
	pub kinds: Option<Vec<ResultKind>>,
	#[serde(default)]
	pub projects: Option<Vec<Uuid>>,
}

/// Entity kinds a result can point at. Only the first three are produced by
/// the search fan-out; the rest appear in the unified feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
	Project,
	Hospital,
	Coordinator,
	User,
	Alert,
	Communication,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
	pub id: Uuid,
	#[serde(rename = "type")]
	pub kind: ResultKind,
	pub title: String,
	pub description: String,
	pub url: String,
	pub metadata: serde_json::Value,
	pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
	pub suggestions: Vec<String>,
}

const SEARCHED_KINDS: [ResultKind; 3] =
	[ResultKind::Project, ResultKind::Hospital, ResultKind::Coordinator];

impl EpicqService {
	/// Fan-out search over projects, hospitals, and coordinators. Each kind
	/// is pre-filtered in the store (capped at `ceil(limit / 4)`), scored,
	/// then merged, ranked, and truncated.
	pub async fn global_search(&self, request: SearchRequest) -> Result<SearchResponse> {
		let query = request.query.trim();

		if query.chars().count() < self.cfg.search.min_query_chars {
			return Ok(SearchResponse { results: Vec::new() });
		}

		let limit = request
			.limit
			.unwrap_or(self.cfg.search.default_limit)
			.clamp(1, self.cfg.search.max_limit);
		let per_kind_cap = i64::from(limit.div_ceil(4));
		let filters = request.filters.unwrap_or(SearchFilters { kinds: None, projects: None });
		let project_ids = filters.projects.as_deref();
		let mut results = Vec::new();

		for kind in SEARCHED_KINDS {
			if filters.kinds.as_ref().map(|kinds| !kinds.contains(&kind)).unwrap_or(false) {
				continue;
			}

			match kind {
				ResultKind::Project => {
					let rows = queries::search_projects(&self.db, query, per_kind_cap).await?;

					results.extend(rows.iter().filter_map(|row| normalize_project(row, query)));
				},
				ResultKind::Hospital => {
					let rows =
						queries::search_hospitals(&self.db, query, per_kind_cap, project_ids)
							.await?;

					results.extend(rows.iter().filter_map(|row| normalize_hospital(row, query)));
				},
				ResultKind::Coordinator => {
					let rows =
						queries::search_coordinators(&self.db, query, per_kind_cap, project_ids)
							.await?;

					results
						.extend(rows.iter().filter_map(|row| normalize_coordinator(row, query)));
				},
				_ => {},
			}
		}

		rank_results(&mut results, limit as usize);

		Ok(SearchResponse { results })
	}

	pub async fn suggestions(&self, query: &str) -> Result<SuggestionsResponse> {
		let query = query.trim();

		if query.chars().count() < self.cfg.search.min_query_chars {
			return Ok(SuggestionsResponse { suggestions: Vec::new() });
		}

		let suggestions =
			queries::suggest_names(&self.db, query, i64::from(self.cfg.search.suggestion_limit))
				.await?;

		Ok(SuggestionsResponse { suggestions })
	}
}

/// Sorts descending by score (stable, so ties keep fetch order) and caps the
/// merged list.
pub fn rank_results(results: &mut Vec<SearchResult>, limit: usize) {
	results.sort_by(|a, b| b.score.cmp(&a.score));
	results.truncate(limit);
}

pub fn normalize_project(row: &ProjectRow, query: &str) -> Option<SearchResult> {
	let score = relevance::score(&row.name, query);

	if score == 0 {
		return None;
	}

	Some(SearchResult {
		id: row.project_id,
		kind: ResultKind::Project,
		title: row.name.clone(),
		description: row.description.clone().unwrap_or_default(),
		url: format!("/projects/{}", row.project_id),
		metadata: json!({ "status": row.status }),
		score,
	})
}

pub fn normalize_hospital(row: &HospitalRow, query: &str) -> Option<SearchResult> {
	let score = relevance::score(&row.name, query);

	if score == 0 {
		return None;
	}

	Some(SearchResult {
		id: row.hospital_id,
		kind: ResultKind::Hospital,
		title: row.name.clone(),
		description: row.province.clone().unwrap_or_default(),
		url: format!("/hospitals/{}", row.hospital_id),
		metadata: json!({
			"status": row.status,
			"province": row.province,
			"project": row.project_name,
		}),
		score,
	})
}

/// Coordinators match on name or email; the stronger score wins.
pub fn normalize_coordinator(row: &CoordinatorRow, query: &str) -> Option<SearchResult> {
	let score = relevance::score_best(&[&row.name, &row.email], query);

	if score == 0 {
		return None;
	}

	Some(SearchResult {
		id: row.user_id,
		kind: ResultKind::Coordinator,
		title: row.name.clone(),
		description: row.email.clone(),
		url: format!("/coordinators/{}", row.user_id),
		metadata: json!({
			"hospital": row.hospital_name,
			"project": row.project_name,
		}),
		score,
	})
}
