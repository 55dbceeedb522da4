mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Inbox, Portal, Postgres, Search, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.search.min_query_chars == 0 {
		return Err(Error::Validation {
			message: "search.min_query_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.search.default_limit == 0 {
		return Err(Error::Validation {
			message: "search.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_limit < cfg.search.default_limit {
		return Err(Error::Validation {
			message: "search.max_limit must not be less than search.default_limit.".to_string(),
		});
	}
	if cfg.search.suggestion_limit == 0 {
		return Err(Error::Validation {
			message: "search.suggestion_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.inbox.notification_fetch_limit == 0 {
		return Err(Error::Validation {
			message: "inbox.notification_fetch_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.inbox.communication_fetch_limit == 0 {
		return Err(Error::Validation {
			message: "inbox.communication_fetch_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.portal.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "portal.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.portal.history_cap == 0 {
		return Err(Error::Validation {
			message: "portal.history_cap must be greater than zero.".to_string(),
		});
	}
	if cfg.portal.suggestion_cap == 0 {
		return Err(Error::Validation {
			message: "portal.suggestion_cap must be greater than zero.".to_string(),
		});
	}
	if cfg.portal.request_timeout_ms == 0 {
		return Err(Error::Validation {
			message: "portal.request_timeout_ms must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.portal.local_store_dir.as_deref().map(|dir| dir.trim().is_empty()).unwrap_or(false) {
		cfg.portal.local_store_dir = None;
	}
	if let Some(stripped) = cfg.portal.api_base.strip_suffix('/') {
		cfg.portal.api_base = stripped.to_string();
	}
}
