use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::reviews::core::review::Review;
use crate::modules::reviews::use_cases::fetch_reviews_by_movie::handler::FetchReviewsByMovie;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FetchReviewsParams {
    pub review_id: Option<String>,
    pub reviewer_id: Option<String>,
}

#[derive(Serialize)]
pub struct FetchReviewsResponse {
    pub reviews: Vec<Review>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    Query(params): Query<FetchReviewsParams>,
) -> impl IntoResponse {
    let query = FetchReviewsByMovie {
        movie_id: Some(movie_id),
        review_id: params.review_id,
        reviewer_id: params.reviewer_id,
    };

    match state.fetch_reviews_by_movie.handle(query).await {
        Ok(reviews) => Json(FetchReviewsResponse { reviews }).into_response(),
        Err(e) => e.into_response(),
    }
}
