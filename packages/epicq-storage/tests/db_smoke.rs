use uuid::Uuid;

use epicq_config::Postgres;
use epicq_storage::{db::Db, queries};
use epicq_testkit::TestDatabase;

async fn bootstrap(test_db: &TestDatabase) -> Db {
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	db
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set EPICQ_PG_DSN to run."]
async fn feed_tables_exist_after_bootstrap() {
	let Some(base_dsn) = epicq_testkit::env_dsn() else {
		eprintln!("Skipping feed_tables_exist_after_bootstrap; set EPICQ_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;

	for table in ["projects", "hospitals", "users", "notifications", "communications"] {
		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
		)
		.bind(table)
		.fetch_one(&db.pool)
		.await
		.expect("Failed to query schema tables.");

		assert_eq!(count, 1, "missing table {table}");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set EPICQ_PG_DSN to run."]
async fn mark_read_routes_to_the_correct_table() {
	let Some(base_dsn) = epicq_testkit::env_dsn() else {
		eprintln!("Skipping mark_read_routes_to_the_correct_table; set EPICQ_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;
	let user_id = Uuid::new_v4();
	let notification_id = Uuid::new_v4();
	let communication_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO notifications (notification_id, user_id, kind, title, message)
VALUES ($1, $2, 'system', 'Invitacion', 'Nueva invitacion de proyecto.')",
	)
	.bind(notification_id)
	.bind(user_id)
	.execute(&db.pool)
	.await
	.expect("Failed to insert notification.");
	sqlx::query(
		"\
INSERT INTO communications (communication_id, user_id, title, message)
VALUES ($1, $2, 'Consulta', 'Respuesta del coordinador.')",
	)
	.bind(communication_id)
	.bind(user_id)
	.execute(&db.pool)
	.await
	.expect("Failed to insert communication.");

	assert_eq!(
		queries::unread_notification_count(&db, user_id)
			.await
			.expect("Failed to count unread."),
		1
	);

	let updated = queries::mark_notification_read(&db, notification_id)
		.await
		.expect("Failed to mark notification read.");

	assert_eq!(updated, 1);
	assert_eq!(
		queries::unread_notification_count(&db, user_id)
			.await
			.expect("Failed to count unread."),
		0
	);

	let updated = queries::mark_communication_read(&db, communication_id)
		.await
		.expect("Failed to mark communication read.");

	assert_eq!(updated, 1);

	let rows = queries::list_communications(&db, user_id, 0, 10)
		.await
		.expect("Failed to list communications.");

	assert_eq!(rows.len(), 1);
	assert!(rows[0].read);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set EPICQ_PG_DSN to run."]
async fn alerts_never_count_as_unread() {
	let Some(base_dsn) = epicq_testkit::env_dsn() else {
		eprintln!("Skipping alerts_never_count_as_unread; set EPICQ_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;
	let user_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO notifications (notification_id, user_id, kind, title, message, read)
VALUES ($1, $2, 'alert', 'Retraso', 'Periodo de reclutamiento vencido.', FALSE)",
	)
	.bind(Uuid::new_v4())
	.bind(user_id)
	.execute(&db.pool)
	.await
	.expect("Failed to insert alert.");

	assert_eq!(
		queries::unread_notification_count(&db, user_id)
			.await
			.expect("Failed to count unread."),
		0
	);

	let updated = queries::mark_all_notifications_read(&db, user_id)
		.await
		.expect("Failed to mark all read.");

	assert_eq!(updated, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
