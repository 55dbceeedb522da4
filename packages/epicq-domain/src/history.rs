use serde::{Deserialize, Serialize};

/// Capped, most-recent-first list of past search queries. Pushing an
/// existing entry moves it to the front instead of growing the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistory {
	cap: usize,
	entries: Vec<String>,
}
impl SearchHistory {
	pub fn new(cap: usize) -> Self {
		Self { cap: cap.max(1), entries: Vec::new() }
	}

	pub fn from_entries(cap: usize, entries: Vec<String>) -> Self {
		let mut history = Self::new(cap);

		for entry in entries.into_iter().rev() {
			history.push(&entry);
		}

		history
	}

	pub fn push(&mut self, query: &str) {
		let query = query.trim();

		if query.is_empty() {
			return;
		}

		self.entries.retain(|entry| !entry.eq_ignore_ascii_case(query));
		self.entries.insert(0, query.to_string());
		self.entries.truncate(self.cap);
	}

	pub fn recent(&self, count: usize) -> &[String] {
		&self.entries[..self.entries.len().min(count)]
	}

	/// Case-insensitive substring filter, preserving recency order.
	pub fn matching(&self, query: &str) -> Vec<String> {
		let needle = query.trim().to_lowercase();

		if needle.is_empty() {
			return self.entries.clone();
		}

		self.entries
			.iter()
			.filter(|entry| entry.to_lowercase().contains(&needle))
			.cloned()
			.collect()
	}

	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}
}
