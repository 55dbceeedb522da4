use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
	pub project_id: Uuid,
	pub name: String,
	pub description: Option<String>,
	pub status: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HospitalRow {
	pub hospital_id: Uuid,
	pub name: String,
	pub province: Option<String>,
	pub status: String,
	pub project_name: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CoordinatorRow {
	pub user_id: Uuid,
	pub name: String,
	pub email: String,
	pub hospital_name: Option<String>,
	pub project_name: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NotificationRow {
	pub notification_id: Uuid,
	pub user_id: Uuid,
	pub kind: String,
	pub group_key: Option<String>,
	pub title: String,
	pub message: String,
	pub read: bool,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommunicationRow {
	pub communication_id: Uuid,
	pub user_id: Uuid,
	pub title: String,
	pub message: String,
	pub read: bool,
	pub created_at: OffsetDateTime,
}
