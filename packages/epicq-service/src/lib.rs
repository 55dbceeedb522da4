pub mod communications;
pub mod notifications;
pub mod read_state;
pub mod search;
pub mod time_serde;

mod error;

pub use communications::{CommunicationItem, CommunicationListResponse};
pub use error::{Error, Result};
pub use notifications::{
	GroupedNotificationsResponse, NotificationFeedResponse, NotificationGroup, NotificationItem,
};
pub use read_state::{
	MarkAllReadResponse, MarkReadRequest, MarkReadResponse, NotificationAction, ReadTarget,
};
pub use search::{
	ResultKind, SearchFilters, SearchRequest, SearchResponse, SearchResult, SuggestionsResponse,
};

use epicq_config::Config;
use epicq_storage::db::Db;

pub struct EpicqService {
	pub cfg: Config,
	pub db: Db,
}
impl EpicqService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}
}
