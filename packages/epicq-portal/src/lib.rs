//! Client side of the EPIC-Q portal: the unified inbox aggregator, the
//! read-state reconciler, and the debounced search session, all working
//! against the `RemoteApi` boundary.

pub mod events;
pub mod http;
pub mod inbox;
pub mod local_store;
pub mod session;

mod error;

pub use error::{Error, Result};
pub use events::{Event, EventBus};
pub use inbox::{FeedSource, Inbox, UnifiedInboxItem};
pub use local_store::LocalStore;
pub use session::SearchSession;

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Wire shape of one notification as served by the feed endpoint. Ids are
/// opaque strings, only unique within their source table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteNotification {
	pub id: String,
	pub kind: String,
	pub title: String,
	pub message: String,
	pub read: bool,
	pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationFeed {
	pub notifications: Vec<RemoteNotification>,
	pub unread_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteCommunication {
	pub id: String,
	pub title: String,
	pub message: String,
	pub read: bool,
	pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSearchResult {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub title: String,
	pub description: String,
	pub url: String,
	pub metadata: serde_json::Value,
	pub score: u32,
}

/// Which backing table a mark-read mutation targets; the server routes on
/// this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadTargetKind {
	Communication,
	Notification,
}

/// The portal's view of the EPIC-Q API. Object-safe so components share one
/// `Arc<dyn RemoteApi>` and tests substitute stubs.
pub trait RemoteApi
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		query: &'a str,
		limit: u32,
	) -> BoxFuture<'a, Result<Vec<RemoteSearchResult>>>;

	fn suggestions<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<String>>>;

	fn notifications(&self, limit: u32) -> BoxFuture<'_, Result<NotificationFeed>>;

	fn communications(
		&self,
		page: u32,
		limit: u32,
	) -> BoxFuture<'_, Result<Vec<RemoteCommunication>>>;

	fn mark_read<'a>(
		&'a self,
		id: &'a str,
		target: ReadTargetKind,
	) -> BoxFuture<'a, Result<()>>;

	fn mark_all_read(&self) -> BoxFuture<'_, Result<()>>;
}
