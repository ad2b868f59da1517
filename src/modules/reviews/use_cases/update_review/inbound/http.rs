use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde_json::json;

use crate::modules::reviews::adapters::inbound::http_support::{is_authorized, json_body};
use crate::modules::reviews::use_cases::update_review::handler::UpdateReview;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((movie_id, review_id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = match json_body(&body) {
        Ok(body) => body,
        Err(e) => return e.into_response(),
    };
    let command = UpdateReview {
        movie_id: Some(movie_id),
        review_id: Some(review_id),
        body,
        authorized: is_authorized(&headers),
    };

    match state.update_review.handle(command).await {
        Ok(_) => Json(json!({ "message": "Review updated successfully" })).into_response(),
        Err(e) => e.into_response(),
    }
}
