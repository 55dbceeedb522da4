use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub search: Search,
	pub inbox: Inbox,
	pub portal: Portal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	/// Queries shorter than this return an empty result set without touching
	/// the store.
	#[serde(default = "default_min_query_chars")]
	pub min_query_chars: usize,
	#[serde(default = "default_search_limit")]
	pub default_limit: u32,
	#[serde(default = "default_max_limit")]
	pub max_limit: u32,
	#[serde(default = "default_suggestion_limit")]
	pub suggestion_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Inbox {
	#[serde(default = "default_notification_fetch_limit")]
	pub notification_fetch_limit: u32,
	#[serde(default = "default_communication_fetch_limit")]
	pub communication_fetch_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portal {
	pub api_base: String,
	#[serde(default = "default_debounce_ms")]
	pub search_debounce_ms: u64,
	#[serde(default = "default_history_cap")]
	pub history_cap: usize,
	#[serde(default = "default_suggestion_cap")]
	pub suggestion_cap: usize,
	/// Directory for best-effort client-local state (search history, theme,
	/// font size). Empty disables persistence.
	#[serde(default)]
	pub local_store_dir: Option<String>,
	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u64,
}

fn default_min_query_chars() -> usize {
	2
}

fn default_search_limit() -> u32 {
	20
}

fn default_max_limit() -> u32 {
	50
}

fn default_suggestion_limit() -> u32 {
	8
}

fn default_notification_fetch_limit() -> u32 {
	50
}

fn default_communication_fetch_limit() -> u32 {
	100
}

fn default_debounce_ms() -> u64 {
	300
}

fn default_history_cap() -> usize {
	10
}

fn default_suggestion_cap() -> usize {
	8
}

fn default_request_timeout_ms() -> u64 {
	10_000
}
