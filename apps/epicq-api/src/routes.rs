use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use epicq_service::{
	CommunicationListResponse, MarkAllReadResponse, MarkReadRequest, MarkReadResponse,
	NotificationAction, SearchRequest, SearchResponse, SuggestionsResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/search/global", axum::routing::post(global_search))
		.route("/v1/search/suggestions", get(suggestions))
		.route(
			"/v1/notifications",
			get(notification_feed).patch(mark_read).post(notification_action),
		)
		.route("/v1/communications", get(communication_feed))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn global_search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.global_search(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct SuggestionsParams {
	#[serde(default)]
	query: String,
}

async fn suggestions(
	State(state): State<AppState>,
	Query(params): Query<SuggestionsParams>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
	let response = state.service.suggestions(&params.query).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct NotificationFeedParams {
	user_id: Uuid,
	limit: Option<u32>,
	/// `group=true` collapses the feed into per-group summaries.
	#[serde(default)]
	group: bool,
}

async fn notification_feed(
	State(state): State<AppState>,
	Query(params): Query<NotificationFeedParams>,
) -> Result<Response, ApiError> {
	if params.group {
		let response =
			state.service.notification_feed_grouped(params.user_id, params.limit).await?;

		return Ok(Json(response).into_response());
	}

	let response = state.service.notification_feed(params.user_id, params.limit).await?;

	Ok(Json(response).into_response())
}

async fn mark_read(
	State(state): State<AppState>,
	Json(payload): Json<MarkReadRequest>,
) -> Result<Json<MarkReadResponse>, ApiError> {
	let response = state.service.mark_read(payload).await?;

	Ok(Json(response))
}

async fn notification_action(
	State(state): State<AppState>,
	Json(payload): Json<NotificationAction>,
) -> Result<Json<MarkAllReadResponse>, ApiError> {
	let NotificationAction::MarkAllAsRead { user_id } = payload;
	let response = state.service.mark_all_read(user_id).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct CommunicationFeedParams {
	user_id: Uuid,
	page: Option<u32>,
	limit: Option<u32>,
}

async fn communication_feed(
	State(state): State<AppState>,
	Query(params): Query<CommunicationFeedParams>,
) -> Result<Json<CommunicationListResponse>, ApiError> {
	let response =
		state.service.communication_feed(params.user_id, params.page, params.limit).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<epicq_service::Error> for ApiError {
	fn from(err: epicq_service::Error) -> Self {
		match err {
			epicq_service::Error::InvalidRequest { message } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message),
			epicq_service::Error::NotFound { message } =>
				Self::new(StatusCode::NOT_FOUND, "not_found", message),
			epicq_service::Error::Storage { message } => {
				tracing::error!("Storage error: {message}.");

				// Store details stay in the log, not the response.
				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"storage_error",
					"Internal storage error.",
				)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
