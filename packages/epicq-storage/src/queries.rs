use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{CommunicationRow, CoordinatorRow, HospitalRow, NotificationRow, ProjectRow},
};

/// Escapes LIKE metacharacters and wraps the query for a substring match.
pub fn ilike_pattern(query: &str) -> String {
	let mut escaped = String::with_capacity(query.len() + 2);

	escaped.push('%');

	for ch in query.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			escaped.push('\\');
		}

		escaped.push(ch);
	}

	escaped.push('%');

	escaped
}

/// Substring pre-filter over project names and descriptions. Scoring
/// re-ranks only this capped sample.
pub async fn search_projects(db: &Db, query: &str, cap: i64) -> Result<Vec<ProjectRow>> {
	let rows = sqlx::query_as::<_, ProjectRow>(
		"\
SELECT project_id, name, description, status
FROM projects
WHERE name ILIKE $1 OR description ILIKE $1
ORDER BY name
LIMIT $2",
	)
	.bind(ilike_pattern(query))
	.bind(cap)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Only active hospitals are eligible. The joined project name is carried
/// for display metadata only.
pub async fn search_hospitals(
	db: &Db,
	query: &str,
	cap: i64,
	project_ids: Option<&[Uuid]>,
) -> Result<Vec<HospitalRow>> {
	let rows = sqlx::query_as::<_, HospitalRow>(
		"\
SELECT
	h.hospital_id,
	h.name,
	h.province,
	h.status,
	p.name AS project_name
FROM hospitals h
LEFT JOIN projects p ON p.project_id = h.project_id
WHERE h.status = 'active'
	AND (h.name ILIKE $1 OR h.province ILIKE $1)
	AND ($3::uuid[] IS NULL OR h.project_id = ANY($3))
ORDER BY h.name
LIMIT $2",
	)
	.bind(ilike_pattern(query))
	.bind(cap)
	.bind(project_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Only active coordinator-role users are eligible. Matches name or email.
pub async fn search_coordinators(
	db: &Db,
	query: &str,
	cap: i64,
	project_ids: Option<&[Uuid]>,
) -> Result<Vec<CoordinatorRow>> {
	let rows = sqlx::query_as::<_, CoordinatorRow>(
		"\
SELECT
	u.user_id,
	u.name,
	u.email,
	h.name AS hospital_name,
	p.name AS project_name
FROM users u
LEFT JOIN hospitals h ON h.hospital_id = u.hospital_id
LEFT JOIN projects p ON p.project_id = h.project_id
WHERE u.role = 'coordinator'
	AND u.active
	AND (u.name ILIKE $1 OR u.email ILIKE $1)
	AND ($3::uuid[] IS NULL OR h.project_id = ANY($3))
ORDER BY u.name
LIMIT $2",
	)
	.bind(ilike_pattern(query))
	.bind(cap)
	.bind(project_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Distinct entity names for the suggestions endpoint.
pub async fn suggest_names(db: &Db, query: &str, cap: i64) -> Result<Vec<String>> {
	let rows = sqlx::query_scalar::<_, String>(
		"\
SELECT DISTINCT name FROM (
	SELECT name FROM projects WHERE name ILIKE $1
	UNION ALL
	SELECT name FROM hospitals WHERE status = 'active' AND name ILIKE $1
	UNION ALL
	SELECT name FROM users WHERE role = 'coordinator' AND active AND name ILIKE $1
) candidates
ORDER BY name
LIMIT $2",
	)
	.bind(ilike_pattern(query))
	.bind(cap)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn list_notifications(
	db: &Db,
	user_id: Uuid,
	limit: i64,
) -> Result<Vec<NotificationRow>> {
	let rows = sqlx::query_as::<_, NotificationRow>(
		"\
SELECT notification_id, user_id, kind, group_key, title, message, read, created_at
FROM notifications
WHERE user_id = $1
ORDER BY created_at DESC
LIMIT $2",
	)
	.bind(user_id)
	.bind(limit)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Alerts carry no read state, so they never count as unread.
pub async fn unread_notification_count(db: &Db, user_id: Uuid) -> Result<i64> {
	let count = sqlx::query_scalar::<_, i64>(
		"\
SELECT count(*)
FROM notifications
WHERE user_id = $1 AND NOT read AND kind <> 'alert'",
	)
	.bind(user_id)
	.fetch_one(&db.pool)
	.await?;

	Ok(count)
}

pub async fn list_communications(
	db: &Db,
	user_id: Uuid,
	page: i64,
	limit: i64,
) -> Result<Vec<CommunicationRow>> {
	let rows = sqlx::query_as::<_, CommunicationRow>(
		"\
SELECT communication_id, user_id, title, message, read, created_at
FROM communications
WHERE user_id = $1
ORDER BY created_at DESC
LIMIT $2 OFFSET $3",
	)
	.bind(user_id)
	.bind(limit)
	.bind(page.max(0) * limit)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Returns the number of rows updated; zero means the id was unknown.
pub async fn mark_notification_read(db: &Db, notification_id: Uuid) -> Result<u64> {
	let result = sqlx::query(
		"UPDATE notifications SET read = TRUE WHERE notification_id = $1 AND kind <> 'alert'",
	)
	.bind(notification_id)
	.execute(&db.pool)
	.await?;

	Ok(result.rows_affected())
}

pub async fn mark_communication_read(db: &Db, communication_id: Uuid) -> Result<u64> {
	let result = sqlx::query("UPDATE communications SET read = TRUE WHERE communication_id = $1")
		.bind(communication_id)
		.execute(&db.pool)
		.await?;

	Ok(result.rows_affected())
}

pub async fn mark_all_notifications_read(db: &Db, user_id: Uuid) -> Result<u64> {
	let result = sqlx::query(
		"UPDATE notifications SET read = TRUE WHERE user_id = $1 AND NOT read AND kind <> 'alert'",
	)
	.bind(user_id)
	.execute(&db.pool)
	.await?;

	Ok(result.rows_affected())
}
