use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::reviews::core::movie::MovieDetail;
use crate::modules::reviews::use_cases::fetch_movie_detail::handler::FetchMovieDetail;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct FetchMovieDetailParams {
    pub cast: Option<String>,
}

#[derive(Serialize)]
pub struct FetchMovieDetailResponse {
    pub data: MovieDetail,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    Query(params): Query<FetchMovieDetailParams>,
) -> impl IntoResponse {
    let query = FetchMovieDetail {
        movie_id: Some(movie_id),
        include_cast: params.cast.as_deref() == Some("true"),
    };

    match state.fetch_movie_detail.handle(query).await {
        Ok(data) => Json(FetchMovieDetailResponse { data }).into_response(),
        Err(e) => e.into_response(),
    }
}
