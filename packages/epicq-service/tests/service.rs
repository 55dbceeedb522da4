use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use epicq_service::{
	ResultKind,
	notifications::group_notifications,
	search::{normalize_coordinator, normalize_hospital, normalize_project, rank_results},
};
use epicq_storage::models::{CoordinatorRow, HospitalRow, NotificationRow, ProjectRow};

fn project(name: &str) -> ProjectRow {
	ProjectRow {
		project_id: Uuid::new_v4(),
		name: name.to_string(),
		description: Some("Estudio multicentrico.".to_string()),
		status: "active".to_string(),
	}
}

fn hospital(name: &str) -> HospitalRow {
	HospitalRow {
		hospital_id: Uuid::new_v4(),
		name: name.to_string(),
		province: Some("Buenos Aires".to_string()),
		status: "active".to_string(),
		project_name: Some("EPIC-Q 2024".to_string()),
	}
}

fn notification(kind: &str, group_key: Option<&str>, read: bool, age: Duration) -> NotificationRow {
	NotificationRow {
		notification_id: Uuid::new_v4(),
		user_id: Uuid::new_v4(),
		kind: kind.to_string(),
		group_key: group_key.map(str::to_string),
		title: format!("{kind} title"),
		message: format!("{kind} message"),
		read,
		created_at: OffsetDateTime::now_utc() - age,
	}
}

#[test]
fn normalized_project_carries_url_and_metadata() {
	let row = project("Hospital General");
	let result = normalize_project(&row, "Hospital").expect("Expected a match.");

	assert_eq!(result.kind, ResultKind::Project);
	assert_eq!(result.score, 90);
	assert_eq!(result.url, format!("/projects/{}", row.project_id));
	assert_eq!(result.metadata["status"], "active");
}

#[test]
fn zero_score_candidates_are_dropped() {
	let row = project("Registro Cardiologico");

	assert!(normalize_project(&row, "neumologia").is_none());
}

#[test]
fn hospital_metadata_is_display_only() {
	let row = hospital("Hospital Italiano");
	let result = normalize_hospital(&row, "Italiano").expect("Expected a match.");

	assert_eq!(result.metadata["province"], "Buenos Aires");
	assert_eq!(result.metadata["project"], "EPIC-Q 2024");
	// Metadata never feeds the score; only the title does.
	assert_eq!(result.score, 80);
}

#[test]
fn coordinator_scores_best_of_name_and_email() {
	let row = CoordinatorRow {
		user_id: Uuid::new_v4(),
		name: "Laura Paz".to_string(),
		email: "laura.paz@hospital.org".to_string(),
		hospital_name: None,
		project_name: None,
	};
	let by_name = normalize_coordinator(&row, "Laura").expect("Expected a name match.");
	let by_email = normalize_coordinator(&row, "hospital.org").expect("Expected an email match.");

	assert_eq!(by_name.score, 90);
	assert!(by_email.score > 0);
	assert_eq!(by_name.url, format!("/coordinators/{}", row.user_id));
}

#[test]
fn ranking_is_descending_and_capped() {
	let rows = [
		project("Hospital General"),
		project("Hospital"),
		project("Registro Hospitalario Nacional"),
	];
	let mut results: Vec<_> =
		rows.iter().filter_map(|row| normalize_project(row, "Hospital")).collect();

	rank_results(&mut results, 2);

	assert_eq!(results.len(), 2);

	for pair in results.windows(2) {
		assert!(pair[0].score >= pair[1].score);
	}

	// Exact match outranks the prefix match.
	assert_eq!(results[0].title, "Hospital");
}

#[test]
fn ranking_keeps_fetch_order_on_ties() {
	let first = project("Hospital Norte");
	let second = project("Hospital Sur");
	let mut results: Vec<_> = [&first, &second]
		.into_iter()
		.filter_map(|row| normalize_project(row, "Hospital"))
		.collect();

	rank_results(&mut results, 10);

	assert_eq!(results[0].id, first.project_id);
	assert_eq!(results[1].id, second.project_id);
}

#[test]
fn grouping_aggregates_by_key_with_latest_first() {
	let rows = vec![
		notification("system", Some("invitations"), false, Duration::minutes(5)),
		notification("system", Some("invitations"), true, Duration::minutes(30)),
		notification("system", None, false, Duration::hours(2)),
	];
	let groups = group_notifications(&rows);

	assert_eq!(groups.len(), 2);
	assert_eq!(groups[0].key, "invitations");
	assert_eq!(groups[0].count, 2);
	assert_eq!(groups[0].unread_count, 1);
	assert_eq!(groups[0].latest_title, "system title");
	assert_eq!(groups[1].key, "system");
	assert_eq!(groups[1].count, 1);
}

#[test]
fn grouping_never_counts_alerts_as_unread() {
	let rows = vec![
		notification("alert", Some("deadlines"), false, Duration::minutes(1)),
		notification("alert", Some("deadlines"), false, Duration::minutes(2)),
	];
	let groups = group_notifications(&rows);

	assert_eq!(groups.len(), 1);
	assert_eq!(groups[0].count, 2);
	assert_eq!(groups[0].unread_count, 0);
}
