use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::reviews::adapters::inbound::http_support::json_body;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct GetFrontendReviewParams {
    #[serde(rename = "ReviewId", alias = "reviewId")]
    pub review_id: Option<String>,
}

pub async fn add(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let body = match json_body(&body) {
        Ok(body) => body,
        Err(e) => return e.into_response(),
    };

    match state.frontend_reviews.add(body).await {
        Ok(review_id) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Review added successfully", "ReviewId": review_id })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get(
    State(state): State<AppState>,
    Query(params): Query<GetFrontendReviewParams>,
) -> impl IntoResponse {
    match state.frontend_reviews.get(params.review_id).await {
        Ok(data) => Json(json!({ "data": data })).into_response(),
        Err(e) => e.into_response(),
    }
}
