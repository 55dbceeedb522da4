use std::{cmp::Reverse, sync::Arc};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::warn;

use epicq_domain::timeago;

use crate::{
	Event, EventBus, ReadTargetKind, RemoteApi, RemoteCommunication, RemoteNotification,
};

pub const ALERT_KIND: &str = "alert";

/// Tag for where a feed item came from. Normalization is explicit per
/// source; nothing downstream inspects native record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
	Communication,
	System,
	Alert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedInboxItem {
	pub id: String,
	pub source: FeedSource,
	pub title: String,
	pub message: String,
	pub created_at: String,
	pub read: bool,
}
impl UnifiedInboxItem {
	pub fn time_ago(&self) -> String {
		timeago::format_time_ago(&self.created_at)
	}
}

/// The unified inbox: one merged, newest-first feed over notifications,
/// communications, and alerts, with optimistic read-state reconciliation.
pub struct Inbox {
	api: Arc<dyn RemoteApi>,
	bus: EventBus,
	notification_fetch_limit: u32,
	communication_fetch_limit: u32,
	items: Vec<UnifiedInboxItem>,
}
impl Inbox {
	pub fn new(api: Arc<dyn RemoteApi>, bus: EventBus, cfg: &epicq_config::Inbox) -> Self {
		Self {
			api,
			bus,
			notification_fetch_limit: cfg.notification_fetch_limit,
			communication_fetch_limit: cfg.communication_fetch_limit,
			items: Vec::new(),
		}
	}

	/// Re-fetches both sources concurrently. A failed source degrades to an
	/// empty list so the other still populates the feed.
	pub async fn refresh(&mut self) {
		let (notifications, communications) = tokio::join!(
			self.api.notifications(self.notification_fetch_limit),
			self.api.communications(0, self.communication_fetch_limit),
		);
		let notifications = match notifications {
			Ok(feed) => feed.notifications,
			Err(err) => {
				warn!("Notification fetch failed; continuing without: {err}.");

				Vec::new()
			},
		};
		let communications = match communications {
			Ok(items) => items,
			Err(err) => {
				warn!("Communication fetch failed; continuing without: {err}.");

				Vec::new()
			},
		};
		let mut items: Vec<UnifiedInboxItem> =
			notifications.iter().map(normalize_notification).collect();

		items.extend(communications.iter().map(normalize_communication));
		items.sort_by_key(|item| Reverse(parse_created_at(&item.created_at)));

		self.items = items;
	}

	pub fn items(&self) -> &[UnifiedInboxItem] {
		&self.items
	}

	pub fn by_source(&self, source: FeedSource) -> Vec<&UnifiedInboxItem> {
		self.items.iter().filter(|item| item.source == source).collect()
	}

	/// Case-insensitive substring filter over title and message, optionally
	/// restricted to one source.
	pub fn filtered(&self, term: &str, source: Option<FeedSource>) -> Vec<&UnifiedInboxItem> {
		let needle = term.trim().to_lowercase();

		self.items
			.iter()
			.filter(|item| source.map(|source| item.source == source).unwrap_or(true))
			.filter(|item| {
				needle.is_empty()
					|| item.title.to_lowercase().contains(&needle)
					|| item.message.to_lowercase().contains(&needle)
			})
			.collect()
	}

	/// Alerts have no read state and never count as unread.
	pub fn unread_count(&self) -> usize {
		self.items
			.iter()
			.filter(|item| item.source != FeedSource::Alert && !item.read)
			.count()
	}

	/// Marks one item read. The local flip happens immediately and is not
	/// rolled back if the network call later fails; the next `refresh`
	/// reconciles. Alerts are a no-op with no network call.
	pub fn mark_read(&mut self, source: FeedSource, id: &str) {
		if source == FeedSource::Alert {
			return;
		}

		let Some(item) =
			self.items.iter_mut().find(|item| item.source == source && item.id == id)
		else {
			return;
		};

		item.read = true;

		let target = match source {
			FeedSource::Communication => ReadTargetKind::Communication,
			FeedSource::System | FeedSource::Alert => ReadTargetKind::Notification,
		};
		let api = self.api.clone();
		let id = id.to_string();

		tokio::spawn(async move {
			if let Err(err) = api.mark_read(&id, target).await {
				warn!("Mark-read call failed; keeping optimistic state: {err}.");
			}
		});

		self.bus.emit(Event::NotificationsChanged);
	}

	pub fn mark_all_read(&mut self) {
		for item in &mut self.items {
			if item.source != FeedSource::Alert {
				item.read = true;
			}
		}

		let api = self.api.clone();

		tokio::spawn(async move {
			if let Err(err) = api.mark_all_read().await {
				warn!("Mark-all-read call failed; keeping optimistic state: {err}.");
			}
		});

		self.bus.emit(Event::NotificationsChanged);
	}
}

pub fn normalize_notification(entry: &RemoteNotification) -> UnifiedInboxItem {
	let source = if entry.kind == ALERT_KIND { FeedSource::Alert } else { FeedSource::System };

	UnifiedInboxItem {
		id: entry.id.clone(),
		source,
		title: entry.title.clone(),
		message: entry.message.clone(),
		created_at: entry.created_at.clone(),
		read: entry.read,
	}
}

pub fn normalize_communication(entry: &RemoteCommunication) -> UnifiedInboxItem {
	UnifiedInboxItem {
		id: entry.id.clone(),
		source: FeedSource::Communication,
		title: entry.title.clone(),
		message: entry.message.clone(),
		created_at: entry.created_at.clone(),
		read: entry.read,
	}
}

/// Unparseable timestamps sort to the end rather than erroring.
fn parse_created_at(raw: &str) -> OffsetDateTime {
	OffsetDateTime::parse(raw.trim(), &Rfc3339).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}
