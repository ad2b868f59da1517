use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reviews::use_cases::translate_review::handler::TranslateReview;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct TranslateReviewParams {
    pub language: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((review_id, movie_id)): Path<(String, String)>,
    Query(params): Query<TranslateReviewParams>,
) -> impl IntoResponse {
    let query = TranslateReview {
        review_id: Some(review_id),
        movie_id: Some(movie_id),
        language: params.language,
    };

    match state.translate_review.handle(query).await {
        Ok(translation) => Json(translation).into_response(),
        Err(e) => e.into_response(),
    }
}
