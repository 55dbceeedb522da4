use serde::{Deserialize, Serialize};
use uuid::Uuid;

use epicq_storage::queries;

use crate::{EpicqService, Result};

/// Which backing table the shared mark-read endpoint routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadTarget {
	Communication,
	Notification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
	pub notification_id: Uuid,
	#[serde(rename = "type")]
	pub target: ReadTarget,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadResponse {
	pub updated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum NotificationAction {
	MarkAllAsRead { user_id: Uuid },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAllReadResponse {
	pub updated: u64,
}

impl EpicqService {
	/// Routes one mark-read mutation to the matching table. An unknown id is
	/// not an error; the response just reports that nothing changed.
	pub async fn mark_read(&self, request: MarkReadRequest) -> Result<MarkReadResponse> {
		let updated = match request.target {
			ReadTarget::Notification =>
				queries::mark_notification_read(&self.db, request.notification_id).await?,
			ReadTarget::Communication =>
				queries::mark_communication_read(&self.db, request.notification_id).await?,
		};

		Ok(MarkReadResponse { updated: updated > 0 })
	}

	pub async fn mark_all_read(&self, user_id: Uuid) -> Result<MarkAllReadResponse> {
		let updated = queries::mark_all_notifications_read(&self.db, user_id).await?;

		Ok(MarkAllReadResponse { updated })
	}
}
