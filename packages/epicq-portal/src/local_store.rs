use std::{fs, path::PathBuf};

use tracing::warn;

use epicq_domain::history::SearchHistory;

pub const HISTORY_KEY: &str = "epicq.search_history";
pub const THEME_KEY: &str = "epicq.theme";
pub const FONT_SIZE_KEY: &str = "epicq.font_size";

/// Best-effort client-local persistence, one file per fixed key. Failures
/// are logged and swallowed; they must never reach the user.
#[derive(Debug, Clone)]
pub struct LocalStore {
	dir: Option<PathBuf>,
}
impl LocalStore {
	pub fn new(dir: Option<PathBuf>) -> Self {
		Self { dir }
	}

	pub fn disabled() -> Self {
		Self { dir: None }
	}

	pub fn get(&self, key: &str) -> Option<String> {
		let path = self.dir.as_ref()?.join(key);

		match fs::read_to_string(&path) {
			Ok(value) => Some(value),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
			Err(err) => {
				warn!("Failed to read local state {key}: {err}.");

				None
			},
		}
	}

	pub fn set(&self, key: &str, value: &str) {
		let Some(dir) = self.dir.as_ref() else {
			return;
		};

		if let Err(err) = fs::create_dir_all(dir) {
			warn!("Failed to create local state directory: {err}.");

			return;
		}
		if let Err(err) = fs::write(dir.join(key), value) {
			warn!("Failed to persist local state {key}: {err}.");
		}
	}

	pub fn load_history(&self, cap: usize) -> SearchHistory {
		let Some(raw) = self.get(HISTORY_KEY) else {
			return SearchHistory::new(cap);
		};

		match serde_json::from_str::<Vec<String>>(&raw) {
			Ok(entries) => SearchHistory::from_entries(cap, entries),
			Err(err) => {
				warn!("Discarding corrupt search history: {err}.");

				SearchHistory::new(cap)
			},
		}
	}

	pub fn save_history(&self, history: &SearchHistory) {
		match serde_json::to_string(history.entries()) {
			Ok(raw) => self.set(HISTORY_KEY, &raw),
			Err(err) => warn!("Failed to serialize search history: {err}."),
		}
	}

	pub fn theme(&self) -> Option<String> {
		self.get(THEME_KEY)
	}

	pub fn set_theme(&self, theme: &str) {
		self.set(THEME_KEY, theme);
	}

	pub fn font_size(&self) -> Option<String> {
		self.get(FONT_SIZE_KEY)
	}

	pub fn set_font_size(&self, size: &str) {
		self.set(FONT_SIZE_KEY, size);
	}
}
