use std::{
	sync::{
		Arc, Mutex,
		atomic::{AtomicU64, Ordering},
	},
	time::Duration,
};

use tracing::warn;

use epicq_domain::history::SearchHistory;

use crate::{LocalStore, RemoteApi, RemoteSearchResult, Result};

const HISTORY_SUGGESTIONS: usize = 5;
const MIN_QUERY_CHARS: usize = 2;

/// One user's search context: debounced remote searches, sequence-tagged
/// stale-response discarding, and the persisted query history feeding
/// suggestions. Constructed at session start, dropped at logout. Shared
/// behind `&self` so overlapping keystrokes race through the sequence
/// counter instead of a borrow.
pub struct SearchSession {
	api: Arc<dyn RemoteApi>,
	store: LocalStore,
	history: Mutex<SearchHistory>,
	debounce: Duration,
	suggestion_cap: usize,
	result_limit: u32,
	issued: AtomicU64,
}
impl SearchSession {
	pub fn new(
		api: Arc<dyn RemoteApi>,
		store: LocalStore,
		cfg: &epicq_config::Portal,
		result_limit: u32,
	) -> Self {
		let history = store.load_history(cfg.history_cap);

		Self {
			api,
			store,
			history: Mutex::new(history),
			debounce: Duration::from_millis(cfg.search_debounce_ms),
			suggestion_cap: cfg.suggestion_cap,
			result_limit,
			issued: AtomicU64::new(0),
		}
	}

	/// Debounced remote search. Returns `None` when this call was superseded
	/// by a newer one, either during the debounce window or while the
	/// response was in flight; only the newest request's results may be
	/// applied. Queries under the minimum length resolve to an empty list
	/// without issuing a network call.
	pub async fn search(&self, query: &str) -> Result<Option<Vec<RemoteSearchResult>>> {
		let query = query.trim();

		if query.chars().count() < MIN_QUERY_CHARS {
			// Still counts as the newest request, so an in-flight longer
			// search cannot apply stale results over the cleared box.
			self.issued.fetch_add(1, Ordering::SeqCst);

			return Ok(Some(Vec::new()));
		}

		let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

		tokio::time::sleep(self.debounce).await;

		if self.issued.load(Ordering::SeqCst) != sequence {
			return Ok(None);
		}

		let results = self.api.search(query, self.result_limit).await?;

		if self.issued.load(Ordering::SeqCst) != sequence {
			// A newer request went out while this one was in flight.
			return Ok(None);
		}

		{
			let mut history = self.history.lock().unwrap_or_else(|err| err.into_inner());

			history.push(query);
			self.store.save_history(&history);
		}

		Ok(Some(results))
	}

	/// History plus remote suggestions, de-duplicated and capped. A failing
	/// suggestions endpoint degrades to history-only; this never errors.
	pub async fn suggestions(&self, query: &str) -> Vec<String> {
		let query = query.trim();
		let mut merged = {
			let history = self.history.lock().unwrap_or_else(|err| err.into_inner());

			if query.is_empty() {
				return history.recent(HISTORY_SUGGESTIONS).to_vec();
			}

			history.matching(query)
		};

		match self.api.suggestions(query).await {
			Ok(remote) => merged.extend(remote),
			Err(err) => {
				warn!("Suggestion fetch failed; falling back to history: {err}.");
			},
		}

		let mut kept: Vec<String> = Vec::new();

		for suggestion in merged {
			if !kept.iter().any(|existing| existing.eq_ignore_ascii_case(&suggestion)) {
				kept.push(suggestion);
			}
			if kept.len() >= self.suggestion_cap {
				break;
			}
		}

		kept
	}

	pub fn history_entries(&self) -> Vec<String> {
		self.history.lock().unwrap_or_else(|err| err.into_inner()).entries().to_vec()
	}

	pub fn clear_history(&self) {
		let mut history = self.history.lock().unwrap_or_else(|err| err.into_inner());

		history.clear();
		self.store.save_history(&history);
	}
}
