use serde::{Deserialize, Serialize};
use uuid::Uuid;

use epicq_storage::{models::CommunicationRow, queries};

use crate::{EpicqService, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationItem {
	pub id: Uuid,
	pub title: String,
	pub message: String,
	pub read: bool,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationListResponse {
	pub communications: Vec<CommunicationItem>,
}

impl EpicqService {
	pub async fn communication_feed(
		&self,
		user_id: Uuid,
		page: Option<u32>,
		limit: Option<u32>,
	) -> Result<CommunicationListResponse> {
		let limit = limit.unwrap_or(self.cfg.inbox.communication_fetch_limit);
		let page = page.unwrap_or(0);
		let rows = queries::list_communications(
			&self.db,
			user_id,
			i64::from(page),
			i64::from(limit),
		)
		.await?;
		let communications = rows.iter().map(normalize_communication).collect();

		Ok(CommunicationListResponse { communications })
	}
}

pub fn normalize_communication(row: &CommunicationRow) -> CommunicationItem {
	CommunicationItem {
		id: row.communication_id,
		title: row.title.clone(),
		message: row.message.clone(),
		read: row.read,
		created_at: row.created_at,
	}
}
