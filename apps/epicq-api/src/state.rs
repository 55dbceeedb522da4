use std::sync::Arc;

use epicq_service::EpicqService;
use epicq_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<EpicqService>,
}
impl AppState {
	pub async fn new(config: epicq_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = EpicqService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
