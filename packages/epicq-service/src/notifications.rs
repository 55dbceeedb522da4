use serde::{Deserialize, Serialize};
use uuid::Uuid;

use epicq_storage::{models::NotificationRow, queries};

use crate::{EpicqService, Result};

pub const ALERT_KIND: &str = "alert";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationItem {
	pub id: Uuid,
	pub kind: String,
	pub group_key: Option<String>,
	pub title: String,
	pub message: String,
	pub read: bool,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationFeedResponse {
	pub notifications: Vec<NotificationItem>,
	pub unread_count: i64,
}

/// One aggregated-by-key summary for the grouped feed mode. Rows without a
/// group key fall back to their kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationGroup {
	pub key: String,
	pub count: usize,
	pub unread_count: usize,
	pub latest_title: String,
	pub latest_message: String,
	#[serde(with = "crate::time_serde")]
	pub latest_created_at: time::OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedNotificationsResponse {
	pub groups: Vec<NotificationGroup>,
	pub unread_count: i64,
}

impl EpicqService {
	pub async fn notification_feed(
		&self,
		user_id: Uuid,
		limit: Option<u32>,
	) -> Result<NotificationFeedResponse> {
		let limit = limit.unwrap_or(self.cfg.inbox.notification_fetch_limit);
		let rows = queries::list_notifications(&self.db, user_id, i64::from(limit)).await?;
		let unread_count = queries::unread_notification_count(&self.db, user_id).await?;
		let notifications = rows.iter().map(normalize_notification).collect();

		Ok(NotificationFeedResponse { notifications, unread_count })
	}

	pub async fn notification_feed_grouped(
		&self,
		user_id: Uuid,
		limit: Option<u32>,
	) -> Result<GroupedNotificationsResponse> {
		let limit = limit.unwrap_or(self.cfg.inbox.notification_fetch_limit);
		let rows = queries::list_notifications(&self.db, user_id, i64::from(limit)).await?;
		let unread_count = queries::unread_notification_count(&self.db, user_id).await?;
		let groups = group_notifications(&rows);

		Ok(GroupedNotificationsResponse { groups, unread_count })
	}
}

pub fn normalize_notification(row: &NotificationRow) -> NotificationItem {
	NotificationItem {
		id: row.notification_id,
		kind: row.kind.clone(),
		group_key: row.group_key.clone(),
		title: row.title.clone(),
		message: row.message.clone(),
		read: row.read,
		created_at: row.created_at,
	}
}

/// Aggregates rows by group key, preserving the newest-first order of the
/// input. The first row seen per key is the group's latest.
pub fn group_notifications(rows: &[NotificationRow]) -> Vec<NotificationGroup> {
	let mut groups: Vec<NotificationGroup> = Vec::new();

	for row in rows {
		let key = row.group_key.clone().unwrap_or_else(|| row.kind.clone());
		let unread = usize::from(!row.read && row.kind != ALERT_KIND);

		match groups.iter_mut().find(|group| group.key == key) {
			Some(group) => {
				group.count += 1;
				group.unread_count += unread;
			},
			None => groups.push(NotificationGroup {
				key,
				count: 1,
				unread_count: unread,
				latest_title: row.title.clone(),
				latest_message: row.message.clone(),
				latest_created_at: row.created_at,
			}),
		}
	}

	groups
}
