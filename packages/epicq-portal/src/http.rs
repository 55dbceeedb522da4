use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
	BoxFuture, Error, NotificationFeed, ReadTargetKind, RemoteApi, RemoteCommunication,
	RemoteSearchResult, Result,
};

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
	results: Vec<RemoteSearchResult>,
}

#[derive(Debug, Deserialize)]
struct SuggestionsEnvelope {
	suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CommunicationsEnvelope {
	communications: Vec<RemoteCommunication>,
}

/// `RemoteApi` over HTTP against the EPIC-Q API, bound to one user.
pub struct HttpRemoteApi {
	client: Client,
	base: String,
	user_id: Uuid,
}
impl HttpRemoteApi {
	pub fn new(cfg: &epicq_config::Portal, user_id: Uuid) -> Result<Self> {
		let client =
			Client::builder().timeout(Duration::from_millis(cfg.request_timeout_ms)).build()?;

		Ok(Self { client, base: cfg.api_base.clone(), user_id })
	}

	async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
		let status = response.status();

		if status.is_success() {
			return Ok(response);
		}

		// Surface only the status; the body may carry store detail that
		// must not reach the user.
		Err(Error::Api { status: status.as_u16(), message: "Request failed.".to_string() })
	}
}
impl RemoteApi for HttpRemoteApi {
	fn search<'a>(
		&'a self,
		query: &'a str,
		limit: u32,
	) -> BoxFuture<'a, Result<Vec<RemoteSearchResult>>> {
		Box::pin(async move {
			let response = self
				.client
				.post(format!("{}/v1/search/global", self.base))
				.json(&json!({ "query": query, "limit": limit }))
				.send()
				.await?;
			let envelope: SearchEnvelope = Self::check(response).await?.json().await?;

			Ok(envelope.results)
		})
	}

	fn suggestions<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<String>>> {
		Box::pin(async move {
			let response = self
				.client
				.get(format!("{}/v1/search/suggestions", self.base))
				.query(&[("query", query)])
				.send()
				.await?;
			let envelope: SuggestionsEnvelope = Self::check(response).await?.json().await?;

			Ok(envelope.suggestions)
		})
	}

	fn notifications(&self, limit: u32) -> BoxFuture<'_, Result<NotificationFeed>> {
		Box::pin(async move {
			let response = self
				.client
				.get(format!("{}/v1/notifications", self.base))
				.query(&[
					("user_id", self.user_id.to_string()),
					("limit", limit.to_string()),
				])
				.send()
				.await?;
			let feed: NotificationFeed = Self::check(response).await?.json().await?;

			Ok(feed)
		})
	}

	fn communications(
		&self,
		page: u32,
		limit: u32,
	) -> BoxFuture<'_, Result<Vec<RemoteCommunication>>> {
		Box::pin(async move {
			let response = self
				.client
				.get(format!("{}/v1/communications", self.base))
				.query(&[
					("user_id", self.user_id.to_string()),
					("page", page.to_string()),
					("limit", limit.to_string()),
				])
				.send()
				.await?;
			let envelope: CommunicationsEnvelope = Self::check(response).await?.json().await?;

			Ok(envelope.communications)
		})
	}

	fn mark_read<'a>(
		&'a self,
		id: &'a str,
		target: ReadTargetKind,
	) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let response = self
				.client
				.patch(format!("{}/v1/notifications", self.base))
				.json(&json!({ "notification_id": id, "type": target }))
				.send()
				.await?;

			Self::check(response).await?;

			Ok(())
		})
	}

	fn mark_all_read(&self) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			let response = self
				.client
				.post(format!("{}/v1/notifications", self.base))
				.json(&json!({ "action": "markAllAsRead", "user_id": self.user_id }))
				.send()
				.await?;

			Self::check(response).await?;

			Ok(())
		})
	}
}
